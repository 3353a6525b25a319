//! Entity records exchanged with the remote service

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier assigned by the remote service
pub type EntityId = u64;

/// Largest identifier the remote service hands out (signed 64-bit maximum)
pub const MAX_ENTITY_ID: EntityId = i64::MAX as EntityId;

/// A record as returned by the service
///
/// Every field is optional on the wire; a record missing its name or
/// description is treated as incomplete and never shown in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl EntityRecord {
    pub fn new(id: EntityId, name: &str, description: &str) -> Self {
        Self {
            id: Some(id),
            name: Some(name.to_string()),
            description: Some(description.to_string()),
        }
    }

    /// Both name and description are present and non-empty
    pub fn is_complete(&self) -> bool {
        let filled = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.name) && filled(&self.description)
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Shared validity rule for lookups and writes: a record must be present
/// and carry a name and a description. The id is not checked.
pub fn is_valid_record(record: Option<&EntityRecord>) -> bool {
    record.is_some_and(EntityRecord::is_complete)
}

/// Body sent on create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPayload {
    pub name: String,
    pub description: String,
}

impl EntityPayload {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Reject payloads missing a required field
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.description.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }

    pub fn into_record(self, id: EntityId) -> EntityRecord {
        EntityRecord {
            id: Some(id),
            name: Some(self.name),
            description: Some(self.description),
        }
    }
}

/// Local checks that stop an operation before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name and description are required")]
    MissingFields,
    #[error("no record is loaded")]
    NoRecordLoaded,
}

/// Parse user input into an id within `1..=MAX_ENTITY_ID`
pub fn parse_entity_id(text: &str) -> Option<EntityId> {
    let id = text.trim().parse::<EntityId>().ok()?;
    (1..=MAX_ENTITY_ID).contains(&id).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_record_requires_name_and_description() {
        assert!(EntityRecord::new(1, "Acme", "Tools co.").is_complete());

        let mut record = EntityRecord::new(1, "Acme", "");
        assert!(!record.is_complete());

        record.description = None;
        record.name = Some("Acme".to_string());
        assert!(!record.is_complete());
    }

    #[test]
    fn test_is_valid_record_ignores_id() {
        let record = EntityRecord {
            id: None,
            name: Some("Acme".to_string()),
            description: Some("Tools co.".to_string()),
        };
        assert!(is_valid_record(Some(&record)));
        assert!(!is_valid_record(None));
    }

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let record: EntityRecord = serde_json::from_str(r#"{"id": 3, "name": null}"#).unwrap();
        assert_eq!(record.id, Some(3));
        assert!(!record.is_complete());
        assert_eq!(record.name(), "");
    }

    #[test]
    fn test_payload_validation() {
        assert_eq!(
            EntityPayload::new("", "X").validate(),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            EntityPayload::new("Acme", "").validate(),
            Err(ValidationError::MissingFields)
        );
        assert!(EntityPayload::new("Acme", "Tools co.").validate().is_ok());
    }

    #[test]
    fn test_payload_serializes_without_id() {
        let json = serde_json::to_value(EntityPayload::new("Acme", "Tools co.")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Acme", "description": "Tools co."}));
    }

    #[test]
    fn test_parse_entity_id_bounds() {
        assert_eq!(parse_entity_id("7"), Some(7));
        assert_eq!(parse_entity_id("0"), None);
        assert_eq!(parse_entity_id(""), None);
        assert_eq!(parse_entity_id("abc"), None);
        assert_eq!(parse_entity_id("9223372036854775807"), Some(MAX_ENTITY_ID));
        assert_eq!(parse_entity_id("9223372036854775808"), None);
    }
}
