//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod alert_dialog;
pub mod confirm_dialog;
pub mod entity_screen;
pub mod help_dialog;
pub mod icon;
pub mod icon_button;
pub mod layout;
pub mod stock_manager;

pub use alert_dialog::AlertDialog;
pub use confirm_dialog::ConfirmDialog;
pub use entity_screen::EntityScreen;
pub use help_dialog::HelpDialog;
pub use icon::IconSet;
pub use layout::centered_popup;
pub use stock_manager::StockManager;
