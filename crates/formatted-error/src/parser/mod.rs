//! Placeholder scanner for message templates.
//!
//! A placeholder is the shortest `{...}` run on a single line. Everything
//! else in a template is literal text.

mod placeholder;

pub use placeholder::{Placeholder, placeholders};
