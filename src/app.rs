use chrono::NaiveDate;
use ratatui::text::Line;

use crate::{
    cache::MenuCache,
    fetch::Fetcher,
    menu::Day,
    render::{EMPHASIS, HEADING},
};

/// Everything the dashboard reacts to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Message {
    Left,
    Right,
    Up,
    Down,
    Resize,
    Quit,
}

/// Which day and restaurant are on screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavigationState {
    pub day: Day,
    pub restaurant: usize,
}

#[derive(Debug)]
pub struct App {
    cache: MenuCache,
    state: NavigationState,
    pub running: bool,
}

impl App {
    pub fn new(cache: MenuCache, today: NaiveDate) -> Self {
        Self {
            cache,
            state: NavigationState {
                day: Day::of_date(today),
                restaurant: 0,
            },
            running: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> NavigationState {
        self.state
    }

    /// Refreshes the menus if the week changed since the last refresh, jumping back to
    /// today's day when it does.
    pub async fn check_refresh<F: Fetcher>(&mut self, fetcher: &F, today: NaiveDate) -> bool {
        let refreshed = self.cache.maybe_refresh(fetcher, today).await;
        if refreshed {
            self.state.day = Day::of_date(today);
        }
        refreshed
    }

    pub fn update_state(&mut self, msg: Message) {
        let count = self.cache.restaurants().len();
        let state = &mut self.state;
        match msg {
            Message::Right => state.day = state.day.next(),
            Message::Left => state.day = state.day.prev(),
            Message::Up if count > 0 => state.restaurant = (state.restaurant + 1) % count,
            Message::Down if count > 0 => {
                state.restaurant = (state.restaurant + count - 1) % count;
            }
            Message::Quit => self.running = false,
            Message::Up | Message::Down | Message::Resize => {}
        }
    }

    /// Border title for the selected restaurant.
    pub fn title(&self) -> String {
        self.cache
            .restaurants()
            .get(self.state.restaurant)
            .map(|r| r.display_title())
            .unwrap_or_default()
    }

    /// Day title, a blank line, then name, description and a blank line per dish.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let Some(restaurant) = self.cache.restaurants().get(self.state.restaurant) else {
            return vec![];
        };
        let menu = restaurant.menu();
        let day = self.state.day;
        let mut lines = vec![
            Line::styled(menu.title(day).to_owned(), HEADING),
            Line::default(),
        ];
        for dish in menu.dishes(day) {
            lines.push(Line::styled(dish.name().to_owned(), EMPHASIS));
            lines.push(Line::raw(dish.description().to_owned()));
            lines.push(Line::default());
        }
        lines
    }
}
