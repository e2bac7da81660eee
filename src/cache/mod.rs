use std::time::Instant;

use chrono::{Datelike, IsoWeek, NaiveDate};

use crate::{
    fetch::{fetch_all, Fetcher},
    sources::Restaurant,
};

/// The restaurants and the ISO week their menus were last fetched for. Menus are only
/// refetched when the week changes.
#[derive(Debug)]
pub struct MenuCache {
    refreshed_for: Option<IsoWeek>,
    restaurants: Vec<Restaurant>,
}

impl MenuCache {
    /// A cache that has never been refreshed, so the first check always fires.
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            refreshed_for: None,
            restaurants,
        }
    }

    #[inline]
    #[must_use]
    pub fn needs_refresh(&self, today: NaiveDate) -> bool {
        self.refreshed_for != Some(today.iso_week())
    }

    #[cfg(test)]
    pub const fn refreshed_for(&self) -> Option<IsoWeek> {
        self.refreshed_for
    }

    #[inline]
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Refetches every restaurant. A restaurant that cannot be reached gets its fallback
    /// menu; the others are unaffected.
    pub async fn refresh<F: Fetcher>(&mut self, fetcher: &F, today: NaiveDate) {
        let start = Instant::now();
        let pages = fetch_all(fetcher, self.restaurants.iter().map(Restaurant::url)).await;
        for (restaurant, page) in self.restaurants.iter_mut().zip(pages) {
            restaurant.refresh(page);
        }
        let week = today.iso_week();
        self.refreshed_for = Some(week);
        log::info!(
            "Refreshed {} menus for {week:?}, took {:?}",
            self.restaurants.len(),
            start.elapsed()
        );
    }

    /// Returns whether or not it refreshed.
    pub async fn maybe_refresh<F: Fetcher>(&mut self, fetcher: &F, today: NaiveDate) -> bool {
        if self.needs_refresh(today) {
            self.refresh(fetcher, today).await;
            true
        } else {
            false
        }
    }
}
