//! Audit entry data structures
//!
//! The planner only ever appends trips and activities, so every entry is a
//! create operation carrying the created entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created
    Create,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Trip,
    Activity,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Trip => write!(f, "Trip"),
            EntityType::Activity => write!(f, "Activity"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity_type: EntityType,

    /// ID of the affected entity
    pub entity_id: String,

    /// Human-readable description (destination or activity name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Owning trip, for activities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// JSON representation of the entity after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            parent_id: None,
            after: serde_json::to_value(entity).ok(),
        }
    }

    /// Record the owning entity
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(parent) = &self.parent_id {
            output.push_str(&format!(" in {}", parent));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(EntityType::Trip.to_string(), "Trip");
        assert_eq!(EntityType::Activity.to_string(), "Activity");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::Activity,
            "act-12345678",
            Some("Louvre".to_string()),
            &json!({"name": "Louvre", "cost": 3000}),
        )
        .with_parent("trip-abcdef12");

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Activity);
        assert_eq!(entry.parent_id.as_deref(), Some("trip-abcdef12"));
        assert_eq!(entry.after.unwrap()["cost"], 3000);
    }

    #[test]
    fn test_serialization_omits_empty_fields() {
        let entry = AuditEntry::create(EntityType::Trip, "trip-123", None, &json!({}));
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["operation"], "create");
        assert_eq!(value["entity_type"], "trip");
        assert!(value.get("entity_name").is_none());
        assert!(value.get("parent_id").is_none());

        let back: AuditEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back.entity_id, "trip-123");
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::create(
            EntityType::Activity,
            "act-12345678",
            Some("Louvre".to_string()),
            &json!({}),
        )
        .with_parent("trip-abcdef12");

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE Activity act-12345678 (Louvre) in trip-abcdef12"));
        assert!(formatted.contains("UTC"));
    }
}
