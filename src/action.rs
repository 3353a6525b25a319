//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state. Processing an action may yield a follow-up action.

use crate::model::{Alert, Confirm, EntityId, EntityKind};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick, drains finished requests
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the management screen of an entity type
    OpenEntityScreen(EntityKind),
    /// Follow the back link to the Stock Manager
    BackToStockManager,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    ShowAlert(Alert),
    AskConfirm(Confirm),
    /// Close the top modal without acting
    CloseModal,
    /// Close the top confirmation and run its action
    ConfirmModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Entity Form
    // ─────────────────────────────────────────────────────────────────────────
    /// Create a record from the name and description fields
    Add,
    /// Clear the form and unlock the id field for a lookup
    Search,
    /// Save the name and description of the loaded record
    Edit,
    /// Ask to delete the loaded record
    Delete,
    /// Reset the form
    Clear,
    /// Look up the id typed in the armed id field
    Lookup,
    /// Delete of the record with this id, confirmed by the user
    DeleteConfirmed(EntityId),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenEntityScreen(kind) => write!(f, "OpenEntityScreen({:?})", kind),
            Action::BackToStockManager => write!(f, "BackToStockManager"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::ShowAlert(alert) => write!(f, "ShowAlert({:?})", alert.kind),
            Action::AskConfirm(confirm) => write!(f, "AskConfirm({})", confirm.on_confirm),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::Add => write!(f, "Add"),
            Action::Search => write!(f, "Search"),
            Action::Edit => write!(f, "Edit"),
            Action::Delete => write!(f, "Delete"),
            Action::Clear => write!(f, "Clear"),
            Action::Lookup => write!(f, "Lookup"),
            Action::DeleteConfirmed(id) => write!(f, "DeleteConfirmed({})", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nests_confirm_action() {
        let action = Action::AskConfirm(Confirm::new("t", "m", Action::DeleteConfirmed(7)));
        assert_eq!(action.to_string(), "AskConfirm(DeleteConfirmed(7))");
    }

    #[test]
    fn test_display_entity_screen() {
        assert_eq!(
            Action::OpenEntityScreen(EntityKind::Brands).to_string(),
            "OpenEntityScreen(Brands)"
        );
    }
}
