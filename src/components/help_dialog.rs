//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(1) => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Clear the area
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        // Render scrollbar if content exceeds visible area
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Helper to add a section header
    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    // Helper to add a shortcut line
    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Stock Manager");
    add_shortcut(&mut lines, "j / ↓", "Next entity");
    add_shortcut(&mut lines, "k / ↑", "Previous entity");
    add_shortcut(&mut lines, "Enter", "Open the selected entity");
    add_shortcut(&mut lines, "q", "Quit");

    add_section(&mut lines, "Entity Form");
    add_shortcut(&mut lines, "Tab", "Next field or button");
    add_shortcut(&mut lines, "Shift+Tab", "Previous field or button");
    add_shortcut(&mut lines, "Enter", "Press the focused button / look up the id");
    add_shortcut(&mut lines, "Esc", "Leave the id field / back to Stock Manager");

    add_section(&mut lines, "Form Buttons");
    add_shortcut(&mut lines, "F2", "Add");
    add_shortcut(&mut lines, "F3", "Search (unlocks the id field)");
    add_shortcut(&mut lines, "F4", "Edit the loaded record");
    add_shortcut(&mut lines, "F5", "Remove the loaded record");
    add_shortcut(&mut lines, "F6", "Clear the form");

    add_section(&mut lines, "Dialogs");
    add_shortcut(&mut lines, "y / Enter", "Confirm");
    add_shortcut(&mut lines, "n / Esc", "Cancel / Dismiss");
    add_shortcut(&mut lines, "F1", "Show this help");
    add_shortcut(&mut lines, "Ctrl+c", "Quit");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press Esc or F1 to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::render_to_lines;

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::default();
        assert_eq!(
            dialog.handle_key_event(KeyEvent::from(KeyCode::F(1))).unwrap(),
            Some(Action::CloseModal)
        );
        assert_eq!(
            dialog.handle_key_event(KeyEvent::from(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModal)
        );
    }

    #[test]
    fn test_scroll_is_clamped_on_draw() {
        let mut dialog = HelpDialog {
            scroll_offset: 1_000,
        };
        let lines = render_to_lines(60, 20, |frame| {
            dialog.draw(frame, frame.area()).unwrap();
        });
        assert!(dialog.scroll_offset < build_help_content().len());
        assert!(lines.iter().any(|line| line.contains("Keyboard Shortcuts")));
    }
}
