//! One [`RestaurantSource`] per restaurant site. Markup quirks stay inside these files; the
//! rest of the crate only ever sees a complete [`Menu`].

mod hojden;
mod inspira;
mod kvarnen;

use std::fmt::Debug;

use scraper::Html;
use url::Url;

use crate::{fetch::FetchError, menu::Menu};

pub use hojden::Hojden;
pub use inspira::Inspira;
pub use kvarnen::Kvarnen;

pub trait RestaurantSource: Debug {
    fn url(&self) -> &Url;

    fn name(&self) -> &str;

    /// Site-specific extraction. Must skip whatever it cannot read rather than fail.
    fn extract(&self, document: &Html) -> Menu;

    fn display_title(&self) -> String {
        format!("[{}]", self.name())
    }

    /// Turns the outcome of fetching [`Self::url`] into a menu. Any fetch failure gives the
    /// fallback menu.
    fn scrape(&self, page: Result<String, FetchError>) -> Menu {
        match page {
            Ok(markup) => {
                let document = Html::parse_document(&markup);
                self.extract(&document)
            }
            Err(e) => {
                log::warn!("{} unreachable at {}: {e}", self.name(), self.url());
                Menu::unavailable(self.name())
            }
        }
    }
}

/// A source together with the last menu it produced.
#[derive(Debug)]
pub struct Restaurant {
    source: Box<dyn RestaurantSource>,
    menu: Menu,
}

impl Restaurant {
    pub fn new(source: Box<dyn RestaurantSource>) -> Self {
        Self {
            source,
            menu: Menu::default(),
        }
    }

    pub fn url(&self) -> &Url {
        self.source.url()
    }

    pub fn display_title(&self) -> String {
        self.source.display_title()
    }

    #[inline]
    #[must_use]
    pub const fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Replaces the current menu with one scraped from `page`.
    pub fn refresh(&mut self, page: Result<String, FetchError>) {
        self.menu = self.source.scrape(page);
    }
}

/// Every restaurant on the dashboard, in display order.
pub fn all() -> Vec<Restaurant> {
    vec![
        Restaurant::new(Box::new(Inspira::new())),
        Restaurant::new(Box::new(Hojden::new())),
        Restaurant::new(Box::new(Kvarnen::new())),
    ]
}
