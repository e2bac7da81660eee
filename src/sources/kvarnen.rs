use scraper::Html;
use url::Url;

use super::RestaurantSource;
use crate::{
    menu::{Day, Dish, Menu, MenuBuilder},
    parse::{element_text, first_text, split_name_description},
    static_selector,
};

static_selector!(DAY_SELECTOR <- ".veckomeny .dag");
static_selector!(TITLE_SELECTOR <- "h4");
static_selector!(DISH_SELECTOR <- "p.ratt");

/// Template variant for sites that publish each dish as a single paragraph:
/// `Name, ingredient, ingredient`.
///
/// The url and class names describe that template, not a verified live page: pointed at a
/// site that does not use them, every day comes back as its weekday name with no dishes.
/// Check them against the real page before relying on this source.
#[derive(Debug, Clone)]
pub struct Kvarnen {
    url: Url,
}

impl Kvarnen {
    pub fn new() -> Self {
        let url = Url::parse("https://www.matsalenkvarnen.se/veckans-lunch")
            .expect("static url should be valid");
        Self { url }
    }
}

impl Default for Kvarnen {
    fn default() -> Self {
        Self::new()
    }
}

impl RestaurantSource for Kvarnen {
    fn url(&self) -> &Url {
        &self.url
    }

    fn name(&self) -> &str {
        "Matsalen Kvarnen"
    }

    fn extract(&self, document: &Html) -> Menu {
        let mut menu = MenuBuilder::default();
        for (day, element) in Day::ALL.into_iter().zip(document.select(&DAY_SELECTOR)) {
            if let Ok(title) = first_text(&TITLE_SELECTOR, element, "day", "title") {
                menu.title(day, title);
            }
            for paragraph in element.select(&DISH_SELECTOR) {
                let text = element_text(paragraph);
                if text.is_empty() {
                    log::debug!("{}: skipping an empty {day} dish", self.name());
                    continue;
                }
                let (name, description) = split_name_description(&text);
                menu.dish(day, Dish::new(name, description));
            }
        }
        menu.build()
    }
}
