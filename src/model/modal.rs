//! Modal stack for managing overlays
//!
//! Alerts and confirmations block the screen underneath: only the top
//! modal receives input until it is closed.

use crate::action::Action;

/// Severity of an alert, controls its colors and title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Warning,
    Error,
}

/// A message shown in a blocking alert dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// A yes/no question and the action to run on "yes"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirm {
    pub title: String,
    pub message: String,
    pub on_confirm: Box<Action>,
}

impl Confirm {
    pub fn new(title: impl Into<String>, message: impl Into<String>, on_confirm: Action) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_confirm: Box::new(on_confirm),
        }
    }
}

/// Represents a modal overlay that can be displayed on top of the screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Alert(Alert),
    Confirm(Confirm),
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Iterate from bottom to top, in drawing order
    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Alert(Alert::info("saved")));
        stack.push(Modal::Help);
        assert_eq!(stack.len(), 2);

        assert_eq!(stack.pop(), Some(Modal::Help));
        assert_eq!(stack.pop(), Some(Modal::Alert(Alert::info("saved"))));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_modal_stack_iterates_bottom_to_top() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Help);
        stack.push(Modal::Alert(Alert::warning("careful")));

        let order: Vec<_> = stack.iter().collect();
        assert_eq!(order[0], &Modal::Help);
        assert_eq!(stack.top(), Some(&Modal::Alert(Alert::warning("careful"))));
    }

    #[test]
    fn test_confirm_carries_action() {
        let confirm = Confirm::new("Quit?", "Really quit?", Action::ForceQuit);
        assert_eq!(*confirm.on_confirm, Action::ForceQuit);
    }
}
