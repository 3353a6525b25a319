//! JSON-over-HTTP implementation of the service client
//!
//! Resources live at `{base}/{resource}` (create) and
//! `{base}/{resource}/{id}` (fetch, update, delete).

use super::client::{EntityService, ServiceError};
use crate::model::{EntityId, EntityPayload, EntityRecord};
use std::time::Duration;
use ureq::Agent;

pub struct HttpEntityService {
    agent: Agent,
    base_url: String,
    resource: &'static str,
}

impl HttpEntityService {
    pub fn new(base_url: &str, resource: &'static str, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            resource,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.resource)
    }

    fn item_url(&self, id: EntityId) -> String {
        format!("{}/{}/{}", self.base_url, self.resource, id)
    }
}

/// Convert a ureq error into a `ServiceError` for `url`
fn classify_http_error(err: ureq::Error, url: &str) -> ServiceError {
    match err {
        ureq::Error::StatusCode(status) => ServiceError::Status {
            url: url.to_string(),
            status,
        },
        other => ServiceError::Transport {
            url: url.to_string(),
            message: other.to_string(),
        },
    }
}

fn decode_error(err: ureq::Error, url: &str) -> ServiceError {
    ServiceError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    }
}

impl EntityService for HttpEntityService {
    fn fetch_by_id(&self, id: EntityId) -> Result<Option<EntityRecord>, ServiceError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "GET");

        match self.agent.get(&url).call() {
            // A `null` body counts as "no such record"
            Ok(response) => response
                .into_body()
                .read_json::<Option<EntityRecord>>()
                .map_err(|e| decode_error(e, &url)),
            Err(ureq::Error::StatusCode(404)) => Ok(None),
            Err(e) => Err(classify_http_error(e, &url)),
        }
    }

    fn create(&self, payload: &EntityPayload) -> Result<EntityRecord, ServiceError> {
        let url = self.collection_url();
        tracing::debug!(%url, "POST");

        self.agent
            .post(&url)
            .send_json(payload)
            .map_err(|e| classify_http_error(e, &url))?
            .into_body()
            .read_json::<EntityRecord>()
            .map_err(|e| decode_error(e, &url))
    }

    fn update(&self, id: EntityId, payload: &EntityPayload) -> Result<EntityRecord, ServiceError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "PUT");

        self.agent
            .put(&url)
            .send_json(payload)
            .map_err(|e| classify_http_error(e, &url))?
            .into_body()
            .read_json::<EntityRecord>()
            .map_err(|e| decode_error(e, &url))
    }

    fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "DELETE");

        self.agent
            .delete(&url)
            .call()
            .map_err(|e| classify_http_error(e, &url))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> HttpEntityService {
        HttpEntityService::new("http://stock.local/api/", "brands", Duration::from_secs(1))
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let service = service();
        assert_eq!(service.collection_url(), "http://stock.local/api/brands");
        assert_eq!(service.item_url(7), "http://stock.local/api/brands/7");
    }

    #[test]
    fn test_status_errors_keep_the_code() {
        let err = classify_http_error(ureq::Error::StatusCode(500), "http://x/brands/1");
        assert_eq!(
            err,
            ServiceError::Status {
                url: "http://x/brands/1".to_string(),
                status: 500,
            }
        );
    }

    #[test]
    fn test_unreachable_host_is_a_transport_error() {
        // Port 9 (discard) is closed on any sane test machine
        let service =
            HttpEntityService::new("http://127.0.0.1:9", "brands", Duration::from_secs(1));
        let result = service.fetch_by_id(1);
        assert!(matches!(result, Err(ServiceError::Transport { .. })));
    }
}
