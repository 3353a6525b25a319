//! In-process entity store
//!
//! Backs `--demo` mode when no API is available. Ids are assigned
//! sequentially, starting after the highest seeded id.

use super::client::{EntityService, ServiceError};
use crate::model::{EntityId, EntityKind, EntityPayload, EntityRecord};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Store {
    records: BTreeMap<EntityId, EntityRecord>,
    next_id: EntityId,
}

#[derive(Debug)]
pub struct InMemoryEntityService {
    store: Mutex<Store>,
    /// Number of calls received, successful or not
    calls: AtomicUsize,
}

impl Default for InMemoryEntityService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEntityService {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                records: BTreeMap::new(),
                next_id: 1,
            }),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a store holding `records`; records without an id are skipped
    pub fn with_records(records: impl IntoIterator<Item = EntityRecord>) -> Self {
        let mut store = Store::default();
        for record in records {
            if let Some(id) = record.id {
                store.records.insert(id, record);
            }
        }
        store.next_id = store.records.keys().next_back().map_or(1, |id| id + 1);

        Self {
            store: Mutex::new(store),
            calls: AtomicUsize::new(0),
        }
    }

    /// A small sample catalog for trying the screens without an API
    pub fn demo(kind: EntityKind) -> Self {
        let records = match kind {
            EntityKind::Brands => vec![
                EntityRecord::new(1, "Tramontina", "Cutlery and kitchenware"),
                EntityRecord::new(2, "Bosch", "Power tools"),
                EntityRecord::new(7, "Acme", "Tools co."),
            ],
            EntityKind::Categories => vec![
                EntityRecord::new(1, "Hardware", "Hand tools, fasteners and fittings"),
                EntityRecord::new(2, "Kitchen", "Cookware and utensils"),
            ],
        };
        Self::with_records(records)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of one stored record
    pub fn get(&self, id: EntityId) -> Option<EntityRecord> {
        self.store.lock().ok()?.records.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.store.lock().map(|s| s.records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.store
            .lock()
            .map_err(|_| ServiceError::Unavailable("in-memory store is poisoned".to_string()))
    }
}

impl EntityService for InMemoryEntityService {
    fn fetch_by_id(&self, id: EntityId) -> Result<Option<EntityRecord>, ServiceError> {
        Ok(self.lock()?.records.get(&id).cloned())
    }

    fn create(&self, payload: &EntityPayload) -> Result<EntityRecord, ServiceError> {
        let mut store = self.lock()?;
        let id = store.next_id;
        store.next_id += 1;

        let record = payload.clone().into_record(id);
        store.records.insert(id, record.clone());
        Ok(record)
    }

    fn update(&self, id: EntityId, payload: &EntityPayload) -> Result<EntityRecord, ServiceError> {
        let mut store = self.lock()?;
        let record = store.records.get_mut(&id).ok_or(ServiceError::Missing(id))?;
        *record = payload.clone().into_record(id);
        Ok(record.clone())
    }

    fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        self.lock()?
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(ServiceError::Missing(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_sequential_ids() {
        let service = InMemoryEntityService::new();
        let first = service.create(&EntityPayload::new("Acme", "Tools co.")).unwrap();
        let second = service.create(&EntityPayload::new("Globex", "Chemicals")).unwrap();
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(service.len(), 2);
    }

    #[test]
    fn test_seeded_store_continues_after_highest_id() {
        let service = InMemoryEntityService::with_records([EntityRecord::new(7, "Acme", "Tools co.")]);
        let created = service.create(&EntityPayload::new("Globex", "Chemicals")).unwrap();
        assert_eq!(created.id, Some(8));
    }

    #[test]
    fn test_demo_catalog_has_acme() {
        let service = InMemoryEntityService::demo(EntityKind::Brands);
        assert_eq!(service.get(7).unwrap().name(), "Acme");
    }

    #[test]
    fn test_fetch_missing_returns_none() {
        let service = InMemoryEntityService::new();
        assert_eq!(service.fetch_by_id(42), Ok(None));
        assert_eq!(service.call_count(), 1);
    }

    #[test]
    fn test_update_and_delete_missing_fail() {
        let service = InMemoryEntityService::new();
        let payload = EntityPayload::new("Acme", "Tools co.");
        assert_eq!(service.update(3, &payload), Err(ServiceError::Missing(3)));
        assert_eq!(service.delete(3), Err(ServiceError::Missing(3)));
    }

    #[test]
    fn test_update_replaces_fields() {
        let service = InMemoryEntityService::with_records([EntityRecord::new(7, "Acme", "Tools co.")]);
        service.update(7, &EntityPayload::new("Acme", "Anvils")).unwrap();
        assert_eq!(service.get(7).unwrap().description(), "Anvils");
    }

    #[test]
    fn test_delete_removes_record() {
        let service = InMemoryEntityService::with_records([EntityRecord::new(7, "Acme", "Tools co.")]);
        service.delete(7).unwrap();
        assert!(service.is_empty());
    }
}
