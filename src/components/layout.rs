//! Layout primitives
//!
//! `FlexContainer` is a styled box that lays its children out along one
//! direction; `HeadingContainer` is a titled panel built from two of them.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};
use std::rc::Rc;

/// Accent color of header bands, buttons and links
pub const ACCENT: Color = Color::Rgb(0x1e, 0x63, 0xc4);

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Placement of a box and of its children along the main axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    Start,
    #[default]
    Center,
    End,
    /// Children spread with equal gaps; the box itself sits at the start
    SpaceBetween,
}

impl Justify {
    fn flex(self) -> Flex {
        match self {
            Justify::Start => Flex::Start,
            Justify::Center => Flex::Center,
            Justify::End => Flex::End,
            Justify::SpaceBetween => Flex::SpaceBetween,
        }
    }
}

/// A bordered box that stacks its children in one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexContainer {
    pub direction: Direction,
    pub margin: Margin,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub border: bool,
    pub border_color: Color,
    pub justify: Justify,
}

impl Default for FlexContainer {
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            margin: Margin::new(1, 0),
            min_width: None,
            max_width: None,
            border: true,
            border_color: Color::DarkGray,
            justify: Justify::Center,
        }
    }
}

impl FlexContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn min_width(mut self, width: Option<u16>) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: Option<u16>) -> Self {
        self.max_width = width;
        self
    }

    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// The box inside `area` after margin, width bounds and alignment
    pub fn outer_area(&self, area: Rect) -> Rect {
        let shrunk = area.inner(self.margin);

        let mut width = shrunk.width;
        if let Some(max) = self.max_width {
            width = width.min(max);
        }
        if let Some(min) = self.min_width {
            width = width.max(min.min(shrunk.width));
        }

        let slack = shrunk.width - width;
        let x = match self.justify {
            Justify::Start | Justify::SpaceBetween => shrunk.x,
            Justify::Center => shrunk.x + slack / 2,
            Justify::End => shrunk.x + slack,
        };

        Rect::new(x, shrunk.y, width, shrunk.height)
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(if self.border { Borders::ALL } else { Borders::NONE })
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border_color))
    }

    /// Draw the box and return the area available to its children
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let outer = self.outer_area(area);
        let block = self.block();
        let inner = block.inner(outer);
        frame.render_widget(block, outer);
        inner
    }

    /// Draw the box and split its content area among children
    pub fn split<I>(&self, frame: &mut Frame, area: Rect, constraints: I) -> Rc<[Rect]>
    where
        I: IntoIterator,
        I::Item: Into<Constraint>,
    {
        let inner = self.render(frame, area);
        Layout::default()
            .direction(self.direction)
            .constraints(constraints)
            .flex(self.justify.flex())
            .split(inner)
    }
}

/// A titled panel: a colored header band above a body box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingContainer {
    pub heading: Option<String>,
    /// Heading rank, 1 (most prominent) to 6
    pub heading_level: u8,
    pub center_heading: bool,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub margin: Margin,
    pub band_color: Color,
}

impl Default for HeadingContainer {
    fn default() -> Self {
        Self {
            heading: None,
            heading_level: 1,
            center_heading: false,
            min_width: None,
            max_width: None,
            margin: Margin::new(2, 1),
            band_color: ACCENT,
        }
    }
}

impl HeadingContainer {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            ..Self::default()
        }
    }

    pub fn heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }

    pub fn center_heading(mut self, center: bool) -> Self {
        self.center_heading = center;
        self
    }

    pub fn min_width(mut self, width: Option<u16>) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: Option<u16>) -> Self {
        self.max_width = width;
        self
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Text style for the current heading rank
    pub fn heading_style(&self) -> Style {
        let modifier = match self.heading_level {
            1 | 2 => Modifier::BOLD,
            3 => Modifier::BOLD | Modifier::ITALIC,
            _ => Modifier::ITALIC,
        };
        Style::default().fg(Color::White).add_modifier(modifier)
    }

    /// Rows taken by the header band; level 1 gets a padded band
    pub fn band_height(&self) -> u16 {
        match (&self.heading, self.heading_level) {
            (None, _) => 0,
            (Some(_), 1) => 3,
            (Some(_), _) => 1,
        }
    }

    /// Draw the panel and return the body's content area
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let outer = FlexContainer::new()
            .direction(Direction::Vertical)
            .margin(self.margin)
            .min_width(self.min_width)
            .max_width(self.max_width);
        let inner = outer.render(frame, area);

        let Some(heading) = &self.heading else {
            return inner.inner(Margin::new(1, 0));
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(self.band_height()), Constraint::Min(0)])
            .split(inner);

        let alignment = if self.center_heading {
            Alignment::Center
        } else {
            Alignment::Left
        };
        let band = Paragraph::new(Line::styled(format!(" {} ", heading), self.heading_style()))
            .alignment(alignment)
            .block(
                Block::default()
                    .style(Style::default().bg(self.band_color))
                    .padding(Padding::vertical(self.band_height().saturating_sub(1) / 2)),
            );
        frame.render_widget(band, chunks[0]);

        chunks[1].inner(Margin::new(1, 0))
    }
}

/// Render with a test backend and return the screen as text rows
#[cfg(test)]
pub(crate) fn render_to_lines(width: u16, height: u16, f: impl FnOnce(&mut Frame)) -> Vec<String> {
    use ratatui::{backend::TestBackend, Terminal};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(f).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}
