//! Entity screen component
//!
//! The management screen of one entity kind: an id/name/description form,
//! a toolbar of five buttons and a back link. Service calls run on the
//! screen's `RequestRunner`; their replies are applied on the next tick.
//!
//! The id field is read-only until Search arms it. Search clears the form,
//! unlocks the field and asks for focus on it once the next frame is drawn.
//! Enter in the armed field looks the id up and locks it again.

use crate::action::Action;
use crate::component::Component;
use crate::components::icon::{Icon, IconSet};
use crate::components::icon_button::IconButton;
use crate::components::layout::{FlexContainer, HeadingContainer, Justify};
use crate::messages::Messages;
use crate::model::{
    is_valid_record, parse_entity_id, Alert, Confirm, EntityKind, FormField, FormState,
};
use crate::services::{EntityService, Reply, Request, RequestRunner};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

/// Rows of the description box, borders included
const DESCRIPTION_HEIGHT: u16 = 6;

/// Keyboard focus within the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    /// Index into the toolbar
    Button(usize),
    BackLink,
}

pub struct EntityScreen {
    pub kind: EntityKind,
    pub form: FormState,
    pub focus: Focus,
    /// Focus to apply once the next frame is on screen
    pending_focus: Option<Focus>,
    toolbar: Vec<IconButton>,
    back_link: IconButton,
    runner: RequestRunner,
    messages: Messages,
    /// Input boxes as last drawn, for mouse hit-testing
    field_areas: Vec<(FormField, Rect)>,
}

impl EntityScreen {
    pub fn new(
        kind: EntityKind,
        service: Arc<dyn EntityService>,
        messages: Messages,
        icon_set: IconSet,
    ) -> Self {
        let toolbar = vec![
            IconButton::new(Icon::PlusCircle, Action::Add).label(messages.add_button()),
            IconButton::new(Icon::Search, Action::Search).label(messages.search_button()),
            IconButton::new(Icon::Edit, Action::Edit).label(messages.edit_button()),
            IconButton::new(Icon::Trash, Action::Delete).label(messages.delete_button()),
            IconButton::new(Icon::Delete, Action::Clear).label(messages.clear_button()),
        ]
        .into_iter()
        .map(|button| button.icon_set(icon_set))
        .collect();

        let back_link = IconButton::new(Icon::ArrowLeft, Action::BackToStockManager)
            .label(messages.back_link())
            .direction(Direction::Horizontal)
            .border(false)
            .icon_set(icon_set);

        Self {
            kind,
            form: FormState::new(),
            focus: Focus::Field(FormField::Name),
            pending_focus: None,
            toolbar,
            back_link,
            runner: RequestRunner::new(service),
            messages,
            field_areas: Vec::new(),
        }
    }

    /// Requests started by this screen that have not replied yet
    pub fn in_flight(&self) -> usize {
        self.runner.in_flight()
    }

    /// Apply every reply that has arrived, returning the alerts to show
    pub fn poll_replies(&mut self) -> Vec<Action> {
        self.runner
            .poll()
            .into_iter()
            .filter_map(|reply| self.apply_reply(reply))
            .collect()
    }

    /// Move focus; leaving the armed id field locks it
    pub fn set_focus(&mut self, focus: Focus) {
        if focus == Focus::Field(FormField::Id) && !self.form.is_id_editable() {
            return;
        }
        if self.focus == Focus::Field(FormField::Id) && focus != self.focus {
            self.form.lock_id();
        }
        self.focus = focus;
    }

    /// Focus targets in Tab order; a locked id field is skipped
    fn focus_order(&self) -> Vec<Focus> {
        let mut order = Vec::new();
        if self.form.is_id_editable() {
            order.push(Focus::Field(FormField::Id));
        }
        order.push(Focus::Field(FormField::Name));
        order.push(Focus::Field(FormField::Description));
        order.extend((0..self.toolbar.len()).map(Focus::Button));
        order.push(Focus::BackLink);
        order
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.set_focus(order[next]);
    }

    fn reset_form(&mut self) {
        self.form.clear();
        if self.focus == Focus::Field(FormField::Id) {
            self.focus = Focus::Field(FormField::Name);
        }
    }

    fn warning(&self, message: impl Into<String>) -> Option<Action> {
        Some(Action::ShowAlert(Alert::warning(message)))
    }

    fn add(&mut self) -> Option<Action> {
        match self.form.payload() {
            Ok(payload) => {
                self.runner.submit(Request::Create(payload));
                None
            }
            Err(_) => self.warning(self.messages.not_all_data()),
        }
    }

    fn search(&mut self) {
        self.reset_form();
        self.set_focus(Focus::Field(FormField::Name));
        self.form.arm_search();
        self.pending_focus = Some(Focus::Field(FormField::Id));
    }

    fn edit(&mut self) -> Option<Action> {
        let payload = match self.form.payload() {
            Ok(payload) => payload,
            Err(_) => return self.warning(self.messages.not_all_data()),
        };
        match self.form.loaded_id() {
            Ok(id) => {
                self.runner.submit(Request::Update(id, payload));
                None
            }
            Err(_) => self.warning(self.messages.search_before_edit(self.kind)),
        }
    }

    fn delete(&mut self) -> Option<Action> {
        let loaded = self
            .form
            .payload()
            .and_then(|payload| Ok((self.form.loaded_id()?, payload)));
        match loaded {
            Ok((id, payload)) => Some(Action::AskConfirm(Confirm::new(
                self.messages.confirm_delete_title(),
                self.messages.confirm_delete(self.kind, &payload.name),
                Action::DeleteConfirmed(id),
            ))),
            Err(_) => self.warning(self.messages.search_before_delete(self.kind)),
        }
    }

    fn lookup(&mut self) -> Option<Action> {
        if !self.form.is_id_editable() {
            return None;
        }
        self.set_focus(Focus::Field(FormField::Name));
        self.form.lock_id();
        match parse_entity_id(&self.form.id) {
            Some(id) => {
                self.runner.submit(Request::Fetch(id));
                None
            }
            None => {
                self.reset_form();
                self.warning(self.messages.not_found(self.kind))
            }
        }
    }

    /// Turn a finished request into form changes and an alert
    fn apply_reply(&mut self, reply: Reply) -> Option<Action> {
        let kind = self.kind;
        let resource = kind.resource();
        let alert = match reply {
            Reply::Fetched { id, .. } if parse_entity_id(&self.form.id) != Some(id) => {
                tracing::debug!(resource, id, form_id = %self.form.id, "stale lookup dropped");
                return None;
            }
            Reply::Fetched { id, result } => match result {
                Ok(record) if is_valid_record(record.as_ref()) => {
                    if let Some(record) = record {
                        tracing::info!(resource, id, "record loaded");
                        self.form.populate(&record);
                    }
                    return None;
                }
                Ok(_) => {
                    tracing::info!(resource, id, "record not found");
                    self.reset_form();
                    Alert::warning(self.messages.not_found(kind))
                }
                Err(error) => {
                    tracing::error!(resource, id, %error, "lookup failed");
                    Alert::error(self.messages.lookup_failed(kind))
                }
            },
            Reply::Created(result) => match result {
                Ok(record) => {
                    tracing::info!(resource, id = ?record.id, "record created");
                    self.reset_form();
                    Alert::info(self.messages.created(kind))
                }
                Err(error) => {
                    tracing::error!(resource, %error, "create failed");
                    Alert::error(self.messages.create_failed(kind))
                }
            },
            Reply::Updated { id, result } => match result {
                Ok(_) => {
                    tracing::info!(resource, id, "record updated");
                    Alert::info(self.messages.updated(kind))
                }
                Err(error) => {
                    tracing::error!(resource, id, %error, "update failed");
                    Alert::error(self.messages.update_failed(kind))
                }
            },
            Reply::Deleted { id, result } => match result {
                Ok(()) => {
                    tracing::info!(resource, id, "record deleted");
                    self.reset_form();
                    Alert::info(self.messages.deleted(kind))
                }
                Err(error) => {
                    tracing::error!(resource, id, %error, "delete failed");
                    Alert::error(self.messages.delete_failed(kind))
                }
            },
        };
        Some(Action::ShowAlert(alert))
    }

    fn handle_field_key(&mut self, field: FormField, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.form.push_char(field, c);
                None
            }
            KeyCode::Backspace => {
                self.form.backspace(field);
                None
            }
            KeyCode::Enter => match field {
                FormField::Id => Some(Action::Lookup),
                FormField::Name => {
                    self.set_focus(Focus::Field(FormField::Description));
                    None
                }
                FormField::Description => {
                    self.form.push_char(field, '\n');
                    None
                }
            },
            KeyCode::Esc if field == FormField::Id => {
                self.set_focus(Focus::Field(FormField::Name));
                None
            }
            KeyCode::Esc => Some(Action::BackToStockManager),
            _ => None,
        }
    }

    fn draw_field(&self, frame: &mut Frame, area: Rect, field: FormField, label: &str) {
        let focused = self.focus == Focus::Field(field);
        let editable = field != FormField::Id || self.form.is_id_editable();

        let border_color = if focused { Color::Yellow } else { Color::DarkGray };
        let text_color = if editable { Color::White } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                format!(" {} ", label),
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);

        let lines: Vec<&str> = self.form.value(field).split('\n').collect();
        let last = lines.last().copied().unwrap_or_default();
        let row_scroll = (lines.len() as u16).saturating_sub(inner.height);
        let col_scroll = (last.width() as u16).saturating_sub(inner.width.saturating_sub(1));

        let text = Text::from(
            lines
                .iter()
                .map(|line| Line::from(line.to_string()))
                .collect::<Vec<_>>(),
        );
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(text_color))
            .scroll((row_scroll, col_scroll))
            .block(block);
        frame.render_widget(paragraph, area);

        if focused && inner.width > 0 && inner.height > 0 {
            let row = (lines.len() as u16).saturating_sub(1).saturating_sub(row_scroll);
            let column = (last.width() as u16).saturating_sub(col_scroll);
            frame.set_cursor_position(Position::new(
                inner.x + column.min(inner.width - 1),
                inner.y + row.min(inner.height - 1),
            ));
        }
    }
}

impl Component for EntityScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::F(2) => Some(Action::Add),
            KeyCode::F(3) => Some(Action::Search),
            KeyCode::F(4) => Some(Action::Edit),
            KeyCode::F(5) => Some(Action::Delete),
            KeyCode::F(6) => Some(Action::Clear),
            KeyCode::Tab => {
                self.cycle_focus(true);
                None
            }
            KeyCode::BackTab => {
                self.cycle_focus(false);
                None
            }
            _ => match self.focus {
                Focus::Field(field) => self.handle_field_key(field, key),
                Focus::Button(index) => match key.code {
                    KeyCode::Left | KeyCode::Char('h') => {
                        self.set_focus(Focus::Button(index.saturating_sub(1)));
                        None
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        self.set_focus(Focus::Button((index + 1).min(self.toolbar.len() - 1)));
                        None
                    }
                    KeyCode::Esc => Some(Action::BackToStockManager),
                    _ => self.toolbar[index].handle_key_event(key)?,
                },
                Focus::BackLink => match key.code {
                    KeyCode::Esc => Some(Action::BackToStockManager),
                    _ => self.back_link.handle_key_event(key)?,
                },
            },
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let position = Position::new(mouse.column, mouse.row);

        let clicked_field = self
            .field_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(field, _)| *field);
        if let Some(field) = clicked_field {
            self.set_focus(Focus::Field(field));
            return Ok(None);
        }

        for index in 0..self.toolbar.len() {
            if let Some(action) = self.toolbar[index].handle_mouse_event(mouse)? {
                self.set_focus(Focus::Button(index));
                return Ok(Some(action));
            }
        }
        if let Some(action) = self.back_link.handle_mouse_event(mouse)? {
            self.set_focus(Focus::BackLink);
            return Ok(Some(action));
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let follow_up = match action {
            Action::Add => self.add(),
            Action::Search => {
                self.search();
                None
            }
            Action::Edit => self.edit(),
            Action::Delete => self.delete(),
            Action::DeleteConfirmed(id) => {
                self.runner.submit(Request::Delete(id));
                None
            }
            Action::Clear => {
                self.reset_form();
                self.set_focus(Focus::Field(FormField::Name));
                None
            }
            Action::Lookup => self.lookup(),
            _ => None,
        };
        Ok(follow_up)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let body = HeadingContainer::new(self.messages.title(self.kind))
            .max_width(Some(72))
            .render(frame, area);

        for (index, button) in self.toolbar.iter_mut().enumerate() {
            button.focused = self.focus == Focus::Button(index);
        }
        self.back_link.focused = self.focus == Focus::BackLink;
        let toolbar_height = self.toolbar.first().map_or(0, IconButton::height);

        let chunks = FlexContainer::new()
            .direction(Direction::Vertical)
            .margin(Margin::new(0, 0))
            .border(false)
            .justify(Justify::Start)
            .split(
                frame,
                body,
                [
                    Constraint::Length(1),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(DESCRIPTION_HEIGHT),
                    Constraint::Length(1),
                    Constraint::Length(toolbar_height),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ],
            );

        let id_label = self.messages.id_label(self.form.is_id_editable());
        self.draw_field(frame, chunks[1], FormField::Id, id_label);
        self.draw_field(frame, chunks[2], FormField::Name, self.messages.name_label());
        self.draw_field(
            frame,
            chunks[3],
            FormField::Description,
            self.messages.description_label(),
        );
        self.field_areas = vec![
            (FormField::Id, chunks[1]),
            (FormField::Name, chunks[2]),
            (FormField::Description, chunks[3]),
        ];

        let button_areas = FlexContainer::new()
            .direction(Direction::Horizontal)
            .margin(Margin::new(0, 0))
            .border(false)
            .justify(Justify::SpaceBetween)
            .split(
                frame,
                chunks[5],
                self.toolbar.iter().map(|_| Constraint::Percentage(19)),
            );
        for (button, button_area) in self.toolbar.iter_mut().zip(button_areas.iter()) {
            button.draw(frame, *button_area)?;
        }

        let link_width = (self.back_link.label.as_deref().map_or(0, |l| l.width()) + 3) as u16;
        let link_area = Rect {
            width: link_width.min(chunks[7].width),
            ..chunks[7]
        };
        self.back_link.draw(frame, link_area)?;
        Ok(())
    }

    fn after_render(&mut self) {
        if let Some(focus) = self.pending_focus.take() {
            self.set_focus(focus);
        }
    }
}
