use scraper::{ElementRef, Html};
use url::Url;

use super::RestaurantSource;
use crate::{
    menu::{Day, Dish, Menu, MenuBuilder},
    parse::{first_text, Error},
    static_selector,
};

static_selector!(DAY_SELECTOR <- "section.lunch-day");
static_selector!(TITLE_SELECTOR <- ".lunch-day__title");
static_selector!(DISH_SELECTOR <- ".lunch-dish");
static_selector!(CATEGORY_SELECTOR <- ".lunch-dish__category");
static_selector!(NAME_SELECTOR <- "b, strong");
static_selector!(DESCRIPTION_SELECTOR <- ".lunch-dish__desc");

/// Template variant for sites that publish one `<section>` per day, where each dish has a
/// category label, a bold name and a description paragraph.
///
/// The url and class names describe that template, not a verified live page: pointed at a
/// site that does not use them, every day comes back as its weekday name with no dishes.
/// Check them against the real page before relying on this source.
#[derive(Debug, Clone)]
pub struct Hojden {
    url: Url,
}

impl Hojden {
    pub fn new() -> Self {
        let url = Url::parse("https://www.restauranghojden.se/lunch/")
            .expect("static url should be valid");
        Self { url }
    }
}

impl Default for Hojden {
    fn default() -> Self {
        Self::new()
    }
}

impl RestaurantSource for Hojden {
    fn url(&self) -> &Url {
        &self.url
    }

    fn name(&self) -> &str {
        "Restaurang Höjden"
    }

    fn extract(&self, document: &Html) -> Menu {
        let mut menu = MenuBuilder::default();
        let sections = document.select(&DAY_SELECTOR);
        for (day, section) in Day::ALL.into_iter().zip(sections) {
            if let Ok(title) = first_text(&TITLE_SELECTOR, section, "day", "title") {
                menu.title(day, title);
            }
            for element in section.select(&DISH_SELECTOR) {
                match dish_from_html_element(element) {
                    Ok(dish) => {
                        menu.dish(day, dish);
                    }
                    Err(e) => log::debug!("{}: skipping a {day} dish: {e}", self.name()),
                }
            }
        }
        menu.build()
    }
}

fn dish_from_html_element(element: ElementRef<'_>) -> Result<Dish, Error> {
    let category = first_text(&CATEGORY_SELECTOR, element, "dish", "category")?;
    let name = first_text(&NAME_SELECTOR, element, "dish", "name")?;
    let description = first_text(&DESCRIPTION_SELECTOR, element, "dish", "description")?;
    Ok(Dish::new(format!("{category}: {name}"), description))
}
