use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;
use scraper::{ElementRef, Selector};

use super::Error;

/// Collapses every whitespace run (including `&nbsp;`) into a single space and trims the ends.
pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    match re.replace_all(s, " ") {
        Cow::Borrowed(b) => Cow::Borrowed(b.trim()),
        Cow::Owned(o) => Cow::Owned(o.trim().to_owned()),
    }
}

/// All text below `element`, entity-decoded and whitespace-normalised.
pub fn element_text(element: ElementRef<'_>) -> String {
    let joined: String = element.text().collect();
    remove_excess_whitespace(&joined).into_owned()
}

/// Text of the first element under `element` matching `selector`.
pub fn first_text(
    selector: &Selector,
    element: ElementRef<'_>,
    parent_label: &str,
    child_label: &str,
) -> Result<String, Error> {
    let child = element.select(selector).next().ok_or_else(|| {
        Error::missing_marker(&format!("{parent_label} has no {child_label}"))
    })?;
    let text = element_text(child);
    if text.is_empty() {
        return Err(Error::empty_text(&format!(
            "{child_label} of {parent_label} is blank"
        )));
    }
    Ok(text)
}

/// Splits `"Name, ingredient, ingredient"` into the name and the rest of the list.
/// Text without a comma is all name.
pub fn split_name_description(text: &str) -> (String, String) {
    match text.split_once(',') {
        Some((name, rest)) => (name.trim().to_owned(), rest.trim().to_owned()),
        None => (text.trim().to_owned(), String::new()),
    }
}
