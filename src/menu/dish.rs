/// A single menu item. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dish {
    name: String,
    description: String,
}

impl Dish {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Blank dish used to keep the row count of a fallback day stable.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
