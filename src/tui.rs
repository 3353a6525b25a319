//! Terminal session and input events
//!
//! Owns the crossterm terminal for the lifetime of the app and turns raw
//! crossterm events into the few inputs the stock screens react to.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseEvent,
        MouseEventKind,
    },
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};

/// Input the app loop dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Nothing arrived within the tick rate
    Tick,
}

/// Keep the events screens act on
///
/// Key presses and auto-repeats go through so a held key keeps typing
/// into a form field; releases do not. Mouse motion and drags are
/// dropped since only clicks and the wheel hit buttons.
pub fn classify(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) => match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => Some(TuiEvent::Key(key)),
            KeyEventKind::Release => None,
        },
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_)
            | MouseEventKind::Up(_)
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollDown => Some(TuiEvent::Mouse(mouse)),
            _ => None,
        },
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// How long `next_event` waits before reporting a tick
    pub tick_rate: Duration,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            tick_rate: Duration::from_millis(100),
        })
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Switch to raw mode on the alternate screen with mouse capture
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        self.terminal.clear()?;
        tracing::debug!(tick_rate = ?self.tick_rate, "terminal entered raw mode");
        Ok(())
    }

    /// Give the terminal back to the shell; also run on Drop
    pub fn exit(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        )?;
        tracing::debug!("terminal restored");
        Ok(())
    }

    /// Wait up to one tick for input
    ///
    /// Events `classify` drops count as a tick, so finished requests are
    /// still collected while the mouse moves.
    pub fn next_event(&self) -> Result<TuiEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(TuiEvent::Tick);
        }
        Ok(classify(event::read()?).unwrap_or(TuiEvent::Tick))
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
