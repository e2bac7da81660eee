use crate::config::{PLACEHOLDER_DISHES, UNREACHABLE_NOTICE};

use super::{Day, Dish};

/// One restaurant's lunch week. Every [`Day`] always has a title and a (possibly empty) dish
/// list; the fixed arrays make a missing day unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    titles: [String; 5],
    dishes: [Vec<Dish>; 5],
}

impl Menu {
    /// The menu shown when `restaurant` could not be fetched.
    #[must_use]
    pub fn unavailable(restaurant: &str) -> Self {
        let title = format!("{restaurant} {UNREACHABLE_NOTICE}");
        Self {
            titles: Day::ALL.map(|_| title.clone()),
            dishes: Day::ALL.map(|_| vec![Dish::placeholder(); PLACEHOLDER_DISHES]),
        }
    }

    pub fn title(&self, day: Day) -> &str {
        &self.titles[day.index()]
    }

    pub fn dishes(&self, day: Day) -> &[Dish] {
        &self.dishes[day.index()]
    }
}

impl Default for Menu {
    fn default() -> Self {
        MenuBuilder::default().build()
    }
}

/// Collects what a parser managed to extract. Days without a title get their weekday name.
#[derive(Debug, Default)]
pub struct MenuBuilder {
    titles: [Option<String>; 5],
    dishes: [Vec<Dish>; 5],
}

impl MenuBuilder {
    /// Blank titles are ignored.
    pub fn title(&mut self, day: Day, title: impl Into<String>) -> &mut Self {
        let title = title.into();
        if !title.trim().is_empty() {
            self.titles[day.index()] = Some(title);
        }
        self
    }

    pub fn dish(&mut self, day: Day, dish: Dish) -> &mut Self {
        self.dishes[day.index()].push(dish);
        self
    }

    #[must_use]
    pub fn build(self) -> Menu {
        let Self { titles, dishes } = self;
        let mut titles = titles.into_iter();
        Menu {
            titles: Day::ALL.map(|day| {
                titles
                    .next()
                    .flatten()
                    .unwrap_or_else(|| day.name().to_owned())
            }),
            dishes,
        }
    }
}
