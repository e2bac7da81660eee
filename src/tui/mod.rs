mod terminal;

use chrono::NaiveDate;
use ratatui::text::Line;

use crate::{
    app::{App, Message},
    fetch::Fetcher,
};

pub use terminal::Terminal;

/// What the dashboard needs from a terminal.
pub trait Surface {
    /// Lays out and draws one screen for the terminal's current size.
    fn draw(&mut self, title: &str, lines: &[Line<'_>]) -> crate::Result<()>;

    /// Blocks until the next key the dashboard reacts to. Other keys are swallowed.
    fn next_message(&mut self) -> crate::Result<Message>;
}

/// Runs frames until the user quits: refresh check, build lines, draw, wait for a key.
pub async fn run<S, F>(
    app: &mut App,
    surface: &mut S,
    fetcher: &F,
    today: impl Fn() -> NaiveDate,
) -> crate::Result<()>
where
    S: Surface,
    F: Fetcher,
{
    while app.running {
        app.check_refresh(fetcher, today()).await;
        let lines = app.lines();
        surface.draw(&app.title(), &lines)?;
        let msg = surface.next_message()?;
        log::trace!("{msg:?}");
        app.update_state(msg);
    }
    Ok(())
}
