//! Model layer - centralized state management
//!
//! - `FormState` - Screen-local form mirror of one record
//! - `EntityRecord` / `EntityPayload` - Data exchanged with the service
//! - `ModalStack` - Modal overlay management

pub mod form;
pub mod modal;
pub mod record;
pub mod ui;

pub use form::{FormField, FormState, IdFieldState};
pub use modal::{Alert, AlertKind, Confirm, Modal, ModalStack};
pub use record::{
    is_valid_record, parse_entity_id, EntityId, EntityPayload, EntityRecord, ValidationError,
    MAX_ENTITY_ID,
};
pub use ui::{EntityKind, Screen};
