use std::sync::OnceLock;

use scraper::{ElementRef, Selector};

/// A CSS selector compiled on first use, so site markers can live in `static`s.
#[derive(Debug)]
pub(crate) struct StaticSelector {
    cell: OnceLock<Selector>,
    source: &'static str,
}

impl StaticSelector {
    pub(crate) const fn new(source: &'static str) -> Self {
        Self {
            cell: OnceLock::new(),
            source,
        }
    }

    /// First descendant of `element` matching this selector.
    pub(crate) fn first<'a>(&self, element: ElementRef<'a>) -> Option<ElementRef<'a>> {
        element.select(self).next()
    }

    pub(crate) fn matches(&self, element: &ElementRef<'_>) -> bool {
        Selector::matches(self, element)
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        // selectors are string literals in this crate, a bad one is a programming error
        self.cell.get_or_init(|| match Selector::parse(self.source) {
            Ok(sel) => sel,
            Err(e) => panic!("Error parsing static selector {}: {:?}", self.source, e),
        })
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}
