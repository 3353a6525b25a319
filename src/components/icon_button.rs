//! Icon button component
//!
//! A bordered button showing an icon and an optional label, stacked in a
//! column or laid out in a row. Clicking it yields the caller's Action;
//! the button itself knows nothing about what that action does.

use crate::action::Action;
use crate::component::Component;
use crate::components::icon::{Icon, IconSet};
use crate::components::layout::{FlexContainer, ACCENT};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Direction, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct IconButton {
    pub icon: Icon,
    pub label: Option<String>,
    pub color: Color,
    /// Rows reserved for the icon in column layout, at least one
    size: u16,
    pub direction: Direction,
    pub border: bool,
    pub on_click: Action,
    pub focused: bool,
    pub icon_set: IconSet,
    /// Where the button was last drawn, for mouse hit-testing
    area: Option<Rect>,
}

impl IconButton {
    pub fn new(icon: Icon, on_click: Action) -> Self {
        Self {
            icon,
            label: None,
            color: ACCENT,
            size: 1,
            direction: Direction::Vertical,
            border: true,
            on_click,
            focused: false,
            icon_set: IconSet::default(),
            area: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: u16) -> Self {
        self.size = size.max(1);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn icon_set(mut self, icon_set: IconSet) -> Self {
        self.icon_set = icon_set;
        self
    }

    /// The caller's action, invoked on click
    pub fn click(&self) -> Action {
        self.on_click.clone()
    }

    /// Area of the last draw, if any
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Whether a terminal cell lies inside the last drawn button
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// Rows the button needs to show everything
    pub fn height(&self) -> u16 {
        let border = if self.border { 2 } else { 0 };
        let content = match (self.direction, &self.label) {
            (Direction::Vertical, Some(_)) => self.size.max(1).saturating_add(1),
            (Direction::Vertical, None) => self.size.max(1),
            (Direction::Horizontal, _) => 1,
        };
        content + border
    }

    fn content(&self) -> Vec<Line<'static>> {
        let glyph = self.icon.glyph(self.icon_set);
        let icon_style = Style::default().fg(self.color).add_modifier(Modifier::BOLD);
        let mut label_style = Style::default().fg(Color::White);
        if self.focused {
            label_style = label_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }

        match self.direction {
            Direction::Vertical => {
                let spare = self.size.saturating_sub(1);
                let above = spare / 2;
                let below = spare - above;
                let mut lines = vec![Line::from(""); above as usize];
                lines.push(Line::from(Span::styled(glyph, icon_style)));
                lines.extend((0..below).map(|_| Line::from("")));
                if let Some(label) = &self.label {
                    lines.push(Line::from(Span::styled(label.clone(), label_style)));
                }
                lines
            }
            Direction::Horizontal => {
                let mut spans = vec![Span::styled(glyph, icon_style)];
                if let Some(label) = &self.label {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(label.clone(), label_style));
                }
                vec![Line::from(spans)]
            }
        }
    }
}

impl Component for IconButton {
    /// Only called while the button has focus
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.click()),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && self.contains(mouse.column, mouse.row)
        {
            return Ok(Some(self.click()));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.area = Some(area);

        let border_color = if self.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        let inner = FlexContainer::new()
            .margin(Margin::new(0, 0))
            .border(self.border)
            .border_color(border_color)
            .render(frame, area);

        let alignment = match self.direction {
            Direction::Vertical => Alignment::Center,
            Direction::Horizontal => Alignment::Left,
        };
        frame.render_widget(Paragraph::new(self.content()).alignment(alignment), inner);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::render_to_lines;
    use crossterm::event::KeyModifiers;

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_enter_invokes_callback_action() {
        let mut button = IconButton::new(Icon::PlusCircle, Action::Add).label("Add");
        let action = button
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();
        assert_eq!(action, Some(Action::Add));
        assert_eq!(
            button.handle_key_event(KeyEvent::from(KeyCode::Char('x'))).unwrap(),
            None
        );
    }

    #[test]
    fn test_mouse_click_hits_last_drawn_area() {
        let mut button = IconButton::new(Icon::Search, Action::Search).label("Search");
        assert_eq!(button.handle_mouse_event(left_click(2, 2)).unwrap(), None);

        render_to_lines(20, 6, |frame| {
            button.draw(frame, Rect::new(0, 0, 10, 4)).unwrap();
        });

        assert_eq!(
            button.handle_mouse_event(left_click(2, 2)).unwrap(),
            Some(Action::Search)
        );
        assert_eq!(button.handle_mouse_event(left_click(15, 2)).unwrap(), None);
    }

    #[test]
    fn test_column_layout_stacks_icon_over_label() {
        let mut button = IconButton::new(Icon::Trash, Action::Delete)
            .label("Remove")
            .icon_set(IconSet::Ascii);
        let lines = render_to_lines(12, 4, |frame| {
            button.draw(frame, frame.area()).unwrap();
        });
        assert!(lines[1].contains("(x)"));
        assert!(lines[2].contains("Remove"));
    }

    #[test]
    fn test_row_layout_puts_icon_beside_label() {
        let mut button = IconButton::new(Icon::ArrowLeft, Action::BackToStockManager)
            .label("Back")
            .direction(Direction::Horizontal)
            .border(false)
            .icon_set(IconSet::Ascii);
        let lines = render_to_lines(12, 1, |frame| {
            button.draw(frame, frame.area()).unwrap();
        });
        assert!(lines[0].starts_with("<- Back"));
    }

    #[test]
    fn test_height_accounts_for_size_label_and_border() {
        let button = IconButton::new(Icon::Edit, Action::Edit).label("Edit").size(3);
        assert_eq!(button.height(), 6);
        let bare = IconButton::new(Icon::Edit, Action::Edit)
            .direction(Direction::Horizontal)
            .border(false);
        assert_eq!(bare.height(), 1);
    }

    #[test]
    fn test_zero_size_draws_the_icon_on_one_row() {
        let clamped = IconButton::new(Icon::Edit, Action::Edit).size(0);
        assert_eq!(clamped.size, 1);

        let mut button = IconButton::new(Icon::Trash, Action::Delete)
            .label("Remove")
            .icon_set(IconSet::Ascii);
        button.size = 0;
        assert_eq!(button.height(), 4);
        let lines = render_to_lines(12, 4, |frame| {
            button.draw(frame, frame.area()).unwrap();
        });
        assert!(lines[1].contains("(x)"));
        assert!(lines[2].contains("Remove"));
    }
}
