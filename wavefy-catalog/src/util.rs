use uuid::Uuid;

use crate::EntityId;

/// Generates a fresh, random identifier for a new entity
pub fn new_id() -> EntityId {
    Uuid::new_v4().to_string()
}
