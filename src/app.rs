//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components but
//! does not contain business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{AlertDialog, ConfirmDialog, EntityScreen, HelpDialog, StockManager};
use crate::config::Config;
use crate::messages::Messages;
use crate::model::{Confirm, EntityKind, Modal, ModalStack, Screen};
use crate::services::EntityService;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::collections::HashMap;
use std::sync::Arc;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Screen currently shown under the modals
    pub screen: Screen,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    pub messages: Messages,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub stock_manager: StockManager,
    /// One screen per entity kind, kept alive across navigation so pending
    /// requests still land in their form
    pub entity_screens: HashMap<EntityKind, EntityScreen>,
    pub help_dialog: HelpDialog,
}

impl App {
    /// Build the app with one service per entity kind
    pub fn new<F>(config: &Config, mut service_for: F) -> App
    where
        F: FnMut(EntityKind) -> Arc<dyn EntityService>,
    {
        let messages = Messages::new(config.locale);
        let entity_screens = EntityKind::all()
            .into_iter()
            .map(|kind| {
                let screen = EntityScreen::new(kind, service_for(kind), messages, config.icon_set);
                (kind, screen)
            })
            .collect();

        App {
            screen: Screen::StockManager,
            modals: ModalStack::new(),
            should_quit: false,
            messages,
            stock_manager: StockManager::new(messages, config.icon_set),
            entity_screens,
            help_dialog: HelpDialog::default(),
        }
    }

    /// Run an action and every follow-up it produces
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut current_action = Some(action);
        while let Some(a) = current_action {
            current_action = self.update(a)?;
        }
        Ok(())
    }

    fn current_entity_screen(&mut self) -> Option<&mut EntityScreen> {
        match self.screen {
            Screen::Entity(kind) => self.entity_screens.get_mut(&kind),
            Screen::StockManager => None,
        }
    }

    fn is_quit_dialog_open(&self) -> bool {
        matches!(
            self.modals.top(),
            Some(Modal::Confirm(confirm)) if *confirm.on_confirm == Action::ForceQuit
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            return Ok(Some(Action::OpenQuitDialog));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        if key.code == KeyCode::F(1) {
            return Ok(Some(Action::OpenHelp));
        }

        match self.screen {
            Screen::StockManager => self.stock_manager.handle_key_event(key),
            Screen::Entity(kind) => match self.entity_screens.get_mut(&kind) {
                Some(screen) => screen.handle_key_event(key),
                None => Ok(None),
            },
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // Modals block the screen underneath
        if !self.modals.is_empty() {
            return Ok(None);
        }
        match self.screen {
            Screen::StockManager => self.stock_manager.handle_mouse_event(mouse),
            Screen::Entity(kind) => match self.entity_screens.get_mut(&kind) {
                Some(screen) => screen.handle_mouse_event(mouse),
                None => Ok(None),
            },
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                // Replies are applied on every screen, shown or not
                let mut alerts = Vec::new();
                for kind in EntityKind::all() {
                    if let Some(screen) = self.entity_screens.get_mut(&kind) {
                        alerts.extend(screen.poll_replies());
                    }
                }
                for alert in alerts {
                    if let Action::ShowAlert(alert) = alert {
                        self.modals.push(Modal::Alert(alert));
                    }
                }
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                tracing::info!("quitting");
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::OpenEntityScreen(kind) => {
                tracing::debug!(resource = kind.resource(), "opening entity screen");
                self.screen = Screen::Entity(kind);
            }
            Action::BackToStockManager => {
                self.screen = Screen::StockManager;
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                if !self.is_quit_dialog_open() {
                    self.modals.push(Modal::Confirm(Confirm::new(
                        self.messages.quit_title(),
                        self.messages.quit_question(),
                        Action::ForceQuit,
                    )));
                }
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::ShowAlert(alert) => {
                self.modals.push(Modal::Alert(alert));
            }
            Action::AskConfirm(confirm) => {
                self.modals.push(Modal::Confirm(confirm));
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if let Some(Modal::Confirm(confirm)) = self.modals.pop() {
                    return Ok(Some(*confirm.on_confirm));
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Entity Form
            // ─────────────────────────────────────────────────────────────────
            Action::Add
            | Action::Search
            | Action::Edit
            | Action::Delete
            | Action::Clear
            | Action::Lookup
            | Action::DeleteConfirmed(_) => {
                if let Some(screen) = self.current_entity_screen() {
                    return screen.update(action);
                }
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.screen {
            Screen::StockManager => self.stock_manager.draw(frame, area)?,
            Screen::Entity(kind) => {
                if let Some(screen) = self.entity_screens.get_mut(&kind) {
                    screen.draw(frame, area)?;
                }
            }
        }

        // Draw modal overlays, bottom to top
        let modals: Vec<Modal> = self.modals.iter().cloned().collect();
        for modal in &modals {
            self.draw_modal(frame, area, modal)?;
        }
        Ok(())
    }

    fn after_render(&mut self) {
        if let Some(screen) = self.current_entity_screen() {
            screen.after_render();
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::Alert(alert) => {
                AlertDialog::new(alert.clone(), &self.messages).handle_key_event(key)
            }
            Modal::Confirm(confirm) => {
                ConfirmDialog::new(confirm.clone(), &self.messages).handle_key_event(key)
            }
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::Alert(alert) => {
                AlertDialog::new(alert.clone(), &self.messages).draw(frame, area)?;
            }
            Modal::Confirm(confirm) => {
                ConfirmDialog::new(confirm.clone(), &self.messages).draw(frame, area)?;
            }
            Modal::Help => {
                self.help_dialog.draw(frame, area)?;
            }
        }
        Ok(())
    }
}
