mod error;
pub(crate) mod static_selector;
mod text;

pub use error::Error;
pub use text::{element_text, first_text, split_name_description};
