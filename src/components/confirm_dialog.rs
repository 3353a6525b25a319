//! Confirmation dialog component
//!
//! Asks a yes/no question. "Yes" closes the dialog and runs the action the
//! question was built with; "No" just closes it.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::messages::Messages;
use crate::model::Confirm;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const POPUP_WIDTH: u16 = 60;

pub struct ConfirmDialog {
    pub confirm: Confirm,
    yes: &'static str,
    no: &'static str,
}

impl ConfirmDialog {
    pub fn new(confirm: Confirm, messages: &Messages) -> Self {
        let (yes, no) = messages.yes_no();
        Self { confirm, yes, no }
    }
}

impl Component for ConfirmDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('s') | KeyCode::Char('S')
            | KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let width = POPUP_WIDTH.min(area.width);
        let text_width = width.saturating_sub(6).max(1) as usize;
        let rows = self.confirm.message.width().max(1).div_ceil(text_width) as u16;
        let popup_area = centered_popup(area, width, rows + 6);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.confirm.message.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " y/Enter ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{}  ", self.yes)),
                Span::styled(
                    " n/Esc ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(self.no),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(self.confirm.title.clone())
                    .title_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
