//! Stock Manager component - Entry screen
//!
//! Lists the entity kinds as buttons. Choosing one opens its management
//! screen; every entity screen links back here.

use crate::action::Action;
use crate::component::Component;
use crate::components::icon::{Icon, IconSet};
use crate::components::icon_button::IconButton;
use crate::components::layout::{FlexContainer, HeadingContainer, Justify};
use crate::messages::Messages;
use crate::model::EntityKind;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Constraint, Direction, Margin, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub struct StockManager {
    buttons: Vec<IconButton>,
    pub selected: usize,
    messages: Messages,
}

impl StockManager {
    pub fn new(messages: Messages, icon_set: IconSet) -> Self {
        let buttons = EntityKind::all()
            .into_iter()
            .map(|kind| {
                let icon = match kind {
                    EntityKind::Brands => Icon::Tag,
                    EntityKind::Categories => Icon::Layers,
                };
                IconButton::new(icon, Action::OpenEntityScreen(kind))
                    .label(messages.title(kind))
                    .direction(Direction::Horizontal)
                    .icon_set(icon_set)
            })
            .collect();

        Self {
            buttons,
            selected: 0,
            messages,
        }
    }

    /// Select next entry, wrapping to the first
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.buttons.len();
    }

    /// Select previous entry, wrapping to the last
    pub fn previous(&mut self) {
        self.selected = (self.selected + self.buttons.len() - 1) % self.buttons.len();
    }
}

impl Component for StockManager {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.previous();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.buttons[self.selected].click()),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        for index in 0..self.buttons.len() {
            if let Some(action) = self.buttons[index].handle_mouse_event(mouse)? {
                self.selected = index;
                return Ok(Some(action));
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let body = HeadingContainer::new(self.messages.stock_manager())
            .center_heading(true)
            .max_width(Some(48))
            .render(frame, area);

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(
            self.buttons
                .iter()
                .map(|button| Constraint::Length(button.height())),
        );
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        let chunks = FlexContainer::new()
            .direction(Direction::Vertical)
            .margin(Margin::new(0, 0))
            .border(false)
            .justify(Justify::Start)
            .split(frame, body, constraints);

        for (index, button) in self.buttons.iter_mut().enumerate() {
            button.focused = index == self.selected;
            button.draw(frame, chunks[index + 1])?;
        }

        let hint = Paragraph::new(Line::from(self.messages.stock_manager_hint()))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, chunks[chunks.len() - 1]);
        Ok(())
    }
}
