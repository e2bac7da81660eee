use std::io;

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    text::Line,
    DefaultTerminal,
};

use super::Surface;
use crate::{app::Message, render};

/// The real terminal: raw mode on the alternate screen, cursor hidden while drawing.
/// Everything is put back when it is dropped.
pub struct Terminal {
    terminal: DefaultTerminal,
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        let terminal = ratatui::try_init()?;
        Ok(Self { terminal })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = ratatui::try_restore() {
            log::error!("Failed to restore the terminal: {e}");
        }
    }
}

impl Surface for Terminal {
    fn draw(&mut self, title: &str, lines: &[Line<'_>]) -> crate::Result<()> {
        // ratatui re-reads the terminal size and clears on resize before each draw
        self.terminal
            .draw(|frame| render::draw(frame, title, lines))?;
        Ok(())
    }

    fn next_message(&mut self) -> crate::Result<Message> {
        loop {
            if let Some(msg) = message_for(&event::read()?) {
                return Ok(msg);
            }
        }
    }
}

/// Keys the dashboard reacts to. Everything else maps to `None`.
fn message_for(event: &Event) -> Option<Message> {
    match event {
        Event::Resize(..) => Some(Message::Resize),
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Left => Some(Message::Left),
            KeyCode::Right => Some(Message::Right),
            KeyCode::Up => Some(Message::Up),
            KeyCode::Down => Some(Message::Down),
            KeyCode::Char('q' | 'Q') => Some(Message::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }
            _ => None,
        },
        _ => None,
    }
}
