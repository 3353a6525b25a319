//! Alert dialog component
//!
//! A blocking message box. Any of Enter, Space or Esc dismisses it.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::messages::Messages;
use crate::model::{Alert, AlertKind};
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

pub struct AlertDialog {
    pub alert: Alert,
    title: &'static str,
}

impl AlertDialog {
    pub fn new(alert: Alert, messages: &Messages) -> Self {
        let title = messages.alert_title(alert.kind);
        Self { alert, title }
    }

    fn color(&self) -> Color {
        match self.alert.kind {
            AlertKind::Info => Color::Green,
            AlertKind::Warning => Color::Yellow,
            AlertKind::Error => Color::Red,
        }
    }

    /// Rows the wrapped message takes at the given text width
    fn message_rows(&self, text_width: u16) -> u16 {
        let text_width = text_width.max(1) as usize;
        self.alert
            .message
            .lines()
            .map(|line| line.width().max(1).div_ceil(text_width) as u16)
            .sum::<u16>()
            .max(1)
    }
}

impl Component for AlertDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let width = POPUP_WIDTH.min(area.width);
        // borders, padding and a spare column for word wrapping
        let rows = self.message_rows(width.saturating_sub(6));
        let popup_area = centered_popup(area, width, rows + 6);

        frame.render_widget(Clear, popup_area);

        let color = self.color();
        let mut content = vec![Line::from("")];
        content.extend(self.alert.message.lines().map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(Color::White),
            ))
        }));
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("OK"),
        ]));

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(self.title)
                    .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            )
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
