//! Entity storage boundary.
//!
//! The domain core depends on this trait only; the in-memory implementation
//! stands in for the host platform's content store in tests and development.

use std::sync::{PoisonError, RwLock};

use deskline_content::{EntityRecord, EntityTypeRegistry};
use deskline_core::{DomainError, EntityId, Slug};

use crate::error::HostError;

/// Create/read/update access to entity records.
///
/// Deletion is absent on purpose: trash semantics belong to the host's
/// lifecycle, not this core.
pub trait EntityStore {
    fn insert(&self, record: EntityRecord) -> Result<(), HostError>;
    fn get(&self, id: EntityId) -> Result<EntityRecord, HostError>;
    fn update(&self, record: EntityRecord) -> Result<(), HostError>;
    /// Records of one type, in insertion order.
    fn list_by_type(&self, entity_type: &Slug) -> Result<Vec<EntityRecord>, HostError>;
}

/// In-memory entity store.
///
/// Intended for tests/dev. Only registered entity types are accepted.
#[derive(Debug)]
pub struct InMemoryEntityStore {
    types: EntityTypeRegistry,
    records: RwLock<Vec<EntityRecord>>,
}

impl InMemoryEntityStore {
    pub fn new(types: EntityTypeRegistry) -> Self {
        Self {
            types,
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn types(&self) -> &EntityTypeRegistry {
        &self.types
    }
}

impl EntityStore for InMemoryEntityStore {
    fn insert(&self, record: EntityRecord) -> Result<(), HostError> {
        if self.types.get(&record.entity_type).is_none() {
            return Err(HostError::UnknownEntityType(
                record.entity_type.to_string(),
            ));
        }
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        if records.iter().any(|r| r.id == record.id) {
            return Err(DomainError::invariant(format!(
                "entity {} already exists",
                record.id
            ))
            .into());
        }
        records.push(record);
        Ok(())
    }

    fn get(&self, id: EntityId) -> Result<EntityRecord, HostError> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(HostError::EntityNotFound(id))
    }

    fn update(&self, record: EntityRecord) -> Result<(), HostError> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let slot = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(HostError::EntityNotFound(record.id))?;
        *slot = record;
        Ok(())
    }

    fn list_by_type(&self, entity_type: &Slug) -> Result<Vec<EntityRecord>, HostError> {
        if self.types.get(entity_type).is_none() {
            return Err(HostError::UnknownEntityType(entity_type.to_string()));
        }
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| &r.entity_type == entity_type)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use deskline_core::ActorId;

    fn store() -> InMemoryEntityStore {
        InMemoryEntityStore::new(EntityTypeRegistry::standard())
    }

    fn ticket() -> EntityRecord {
        EntityRecord::new(
            EntityId::new(),
            deskline_content::TICKET,
            ActorId::new(),
            Utc::now(),
        )
    }

    #[test]
    fn insert_get_update_round_trip() {
        let store = store();
        let record = ticket();
        let id = record.id;

        store.insert(record).unwrap();
        let mut fetched = store.get(id).unwrap();
        fetched.set_meta("subject", "updated");
        store.update(fetched).unwrap();

        assert_eq!(store.get(id).unwrap().meta_str("subject"), Some("updated"));
    }

    #[test]
    fn unregistered_entity_type_is_rejected() {
        let store = store();
        let record = EntityRecord::new(
            EntityId::new(),
            Slug::from_static("invoice"),
            ActorId::new(),
            Utc::now(),
        );
        assert!(matches!(
            store.insert(record),
            Err(HostError::UnknownEntityType(_))
        ));
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let store = store();
        let record = ticket();
        store.insert(record.clone()).unwrap();
        assert!(store.insert(record).is_err());
    }

    #[test]
    fn list_by_type_preserves_insertion_order() {
        let store = store();
        let first = ticket();
        let second = ticket();
        store.insert(first.clone()).unwrap();
        store.insert(second.clone()).unwrap();

        let listed = store.list_by_type(&deskline_content::TICKET).unwrap();
        let ids: Vec<EntityId> = listed.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert!(store
            .list_by_type(&deskline_content::REPLY)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn update_of_missing_entity_fails() {
        let store = store();
        assert!(matches!(
            store.update(ticket()),
            Err(HostError::EntityNotFound(_))
        ));
    }
}
