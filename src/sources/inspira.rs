use scraper::{ElementRef, Html};
use url::Url;

use super::RestaurantSource;
use crate::{
    menu::{Day, Dish, Menu, MenuBuilder},
    parse::{element_text, first_text, Error},
    static_selector,
};

static_selector!(HEADING_SELECTOR <- "h3.elementor-heading-title");
static_selector!(DAY_SELECTOR <- ".lunchmeny_wrapper");
static_selector!(DISH_SELECTOR <- ".lunchmeny_container");
static_selector!(NAME_SELECTOR <- "span");
static_selector!(DESCRIPTION_SELECTOR <- ".lunch_desc");

/// restaurangInspira.se, an Elementor page. Each day's heading is a separate widget that comes
/// right before the day's `lunchmeny_wrapper` block.
#[derive(Debug, Clone)]
pub struct Inspira {
    url: Url,
}

impl Inspira {
    pub fn new() -> Self {
        let url = Url::parse("https://restauranginspira.se").expect("static url should be valid");
        Self { url }
    }
}

impl Default for Inspira {
    fn default() -> Self {
        Self::new()
    }
}

impl RestaurantSource for Inspira {
    fn url(&self) -> &Url {
        &self.url
    }

    fn name(&self) -> &str {
        "Restaurang Inspira"
    }

    fn extract(&self, document: &Html) -> Menu {
        let mut menu = MenuBuilder::default();
        for (day, (heading, block)) in Day::ALL.into_iter().zip(day_blocks(document)) {
            if let Some(heading) = heading {
                menu.title(day, element_text(heading));
            }
            for element in block.select(&DISH_SELECTOR) {
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

/// Day blocks in page order, each with the heading seen since the previous block.
fn day_blocks(document: &Html) -> Vec<(Option<ElementRef<'_>>, ElementRef<'_>)> {
    let mut heading = None;
    let mut blocks = vec![];
    for element in document.root_element().descendants().filter_map(ElementRef::wrap) {
        if HEADING_SELECTOR.matches(&element) {
            heading = Some(element);
        } else if DAY_SELECTOR.matches(&element) {
            blocks.push((heading.take(), element));
        }
    }
    blocks
}

fn dish_from_html_element(element: ElementRef<'_>) -> Result<Dish, Error> {
    let name = first_text(&NAME_SELECTOR, element, "dish", "name")?;
    let description = DESCRIPTION_SELECTOR
        .first(element)
        .map(element_text)
        .ok_or_else(|| Error::missing_marker("dish has no lunch_desc"))?;
    Ok(Dish::new(name, description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn example_menu() -> Menu {
        let html = fs::read_to_string("./src/sources/html_examples/inspira.html").unwrap();
        Inspira::new().scrape(Ok(html))
    }

    #[test]
    fn test_titles() {
        let menu = example_menu();
        assert_eq!(menu.title(Day::Monday), "Måndag 8/4");
        assert_eq!(menu.title(Day::Tuesday), "Tisdag 9/4");
        assert_eq!(menu.title(Day::Friday), "Fredag 12/4");
    }

    #[test]
    fn test_dishes_are_unescaped() {
        let menu = example_menu();
        assert_eq!(
            menu.dishes(Day::Monday),
            &[
                Dish::new("Husman", "Pannbiff med lök, gräddsås & pressgurka"),
                Dish::new("Vegetarisk", "Halloumi med bulgursallad"),
            ]
        );
    }

    #[test]
    fn test_broken_dish_is_skipped() {
        let menu = example_menu();
        // Wednesday's second dish has no lunch_desc, the third has no name
        assert_eq!(
            menu.dishes(Day::Wednesday),
            &[Dish::new("Fisk", "Stekt sej med remouladsås")]
        );
        assert_eq!(menu.title(Day::Wednesday), "Onsdag 10/4");
        assert_eq!(menu.dishes(Day::Thursday).len(), 2);
    }
}
