//! Background request runner
//!
//! Runs service calls on worker threads and hands the replies back to the
//! UI thread, which drains them on every tick. Requests are neither
//! de-duplicated nor cancelled: each submitted request produces exactly
//! one reply, in completion order.

use super::client::{EntityService, ServiceError};
use crate::model::{EntityId, EntityPayload, EntityRecord};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
#[cfg(test)]
use std::time::{Duration, Instant};

/// A call to make against the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Fetch(EntityId),
    Create(EntityPayload),
    Update(EntityId, EntityPayload),
    Delete(EntityId),
}

impl Request {
    pub fn operation(&self) -> &'static str {
        match self {
            Request::Fetch(_) => "fetch",
            Request::Create(_) => "create",
            Request::Update(..) => "update",
            Request::Delete(_) => "delete",
        }
    }

    fn execute(self, service: &dyn EntityService) -> Reply {
        match self {
            Request::Fetch(id) => Reply::Fetched {
                id,
                result: service.fetch_by_id(id),
            },
            Request::Create(payload) => Reply::Created(service.create(&payload)),
            Request::Update(id, payload) => Reply::Updated {
                id,
                result: service.update(id, &payload),
            },
            Request::Delete(id) => Reply::Deleted {
                id,
                result: service.delete(id),
            },
        }
    }
}

/// Outcome of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Fetched {
        id: EntityId,
        result: Result<Option<EntityRecord>, ServiceError>,
    },
    Created(Result<EntityRecord, ServiceError>),
    Updated {
        id: EntityId,
        result: Result<EntityRecord, ServiceError>,
    },
    Deleted {
        id: EntityId,
        result: Result<(), ServiceError>,
    },
}

pub struct RequestRunner {
    service: Arc<dyn EntityService>,
    sender: Sender<Reply>,
    receiver: Receiver<Reply>,
    in_flight: usize,
}

impl RequestRunner {
    pub fn new(service: Arc<dyn EntityService>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            service,
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Number of requests whose reply has not been polled yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start a request on a worker thread
    pub fn submit(&mut self, request: Request) {
        let service = Arc::clone(&self.service);
        let sender = self.sender.clone();
        let operation = request.operation();
        tracing::debug!(operation, "submitting request");

        thread::spawn(move || {
            let reply = request.execute(service.as_ref());
            if sender.send(reply).is_err() {
                tracing::warn!(operation, "reply dropped, runner is gone");
            }
        });

        self.in_flight += 1;
    }

    /// Collect every reply that has arrived, without blocking
    pub fn poll(&mut self) -> Vec<Reply> {
        let mut replies = Vec::new();
        while let Ok(reply) = self.receiver.try_recv() {
            replies.push(reply);
        }
        self.in_flight = self.in_flight.saturating_sub(replies.len());
        replies
    }

    /// Block until every in-flight request has replied or `timeout` passes
    #[cfg(test)]
    pub fn wait_all(&mut self, timeout: Duration) -> Vec<Reply> {
        let deadline = Instant::now() + timeout;
        let mut replies = Vec::new();
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(remaining) {
                Ok(reply) => {
                    self.in_flight -= 1;
                    replies.push(reply);
                }
                Err(_) => break,
            }
        }
        replies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryEntityService;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn runner_with(records: Vec<EntityRecord>) -> (RequestRunner, Arc<InMemoryEntityService>) {
        let service = Arc::new(InMemoryEntityService::with_records(records));
        (RequestRunner::new(service.clone()), service)
    }

    #[test]
    fn test_fetch_reply_carries_id() {
        let (mut runner, _) = runner_with(vec![EntityRecord::new(7, "Acme", "Tools co.")]);
        runner.submit(Request::Fetch(7));
        assert_eq!(runner.in_flight(), 1);

        let replies = runner.wait_all(TIMEOUT);
        assert_eq!(
            replies,
            vec![Reply::Fetched {
                id: 7,
                result: Ok(Some(EntityRecord::new(7, "Acme", "Tools co."))),
            }]
        );
        assert_eq!(runner.in_flight(), 0);
    }

    #[test]
    fn test_every_request_gets_a_reply() {
        let (mut runner, service) = runner_with(vec![]);
        runner.submit(Request::Create(EntityPayload::new("Acme", "Tools co.")));
        runner.submit(Request::Create(EntityPayload::new("Acme", "Tools co.")));
        runner.submit(Request::Delete(99));

        let replies = runner.wait_all(TIMEOUT);
        assert_eq!(replies.len(), 3);
        assert_eq!(service.len(), 2);
        assert!(replies.contains(&Reply::Deleted {
            id: 99,
            result: Err(ServiceError::Missing(99)),
        }));
    }

    #[test]
    fn test_poll_without_requests_is_empty() {
        let (mut runner, _) = runner_with(vec![]);
        assert!(runner.poll().is_empty());
        assert_eq!(runner.in_flight(), 0);
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(Request::Fetch(1).operation(), "fetch");
        assert_eq!(
            Request::Update(1, EntityPayload::new("a", "b")).operation(),
            "update"
        );
    }
}
