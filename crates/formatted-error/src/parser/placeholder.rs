//! Placeholder scanning using winnow.

use winnow::combinator::{alt, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_till};

/// Characters that end a placeholder body without closing it.
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// A `{path}` token found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The exact token text, braces included.
    pub text: &'a str,
    /// The breadcrumbs leading to the value, e.g. `["user", "name"]` for
    /// `{user.name}`.
    pub path: Vec<&'a str>,
}

impl<'a> Placeholder<'a> {
    fn new(text: &'a str) -> Self {
        let body = text
            .strip_prefix('{')
            .and_then(|t| t.strip_suffix('}'))
            .unwrap_or(text);
        Placeholder {
            text,
            path: body.split('.').collect(),
        }
    }

    /// The path segments rejoined with `.`, i.e. the token without braces.
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }
}

/// Scan a template for placeholders, in the order they appear.
///
/// Matches never overlap. A `{` without a closing `}` on the same line is
/// treated as literal text.
pub fn placeholders(template: &str) -> Vec<Placeholder<'_>> {
    let mut input = template;
    let pieces: Vec<Option<&str>> = repeat(0.., piece)
        .parse_next(&mut input)
        .unwrap_or_default();
    pieces.into_iter().flatten().map(Placeholder::new).collect()
}

/// Parse either a placeholder or a single literal character.
fn piece<'i>(input: &mut &'i str) -> ModalResult<Option<&'i str>> {
    alt((placeholder.map(Some), any.value(None))).parse_next(input)
}

/// Parse `{` followed by the shortest run ending in `}`.
fn placeholder<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    ('{', take_till(0.., |c: char| c == '}' || LINE_TERMINATORS.contains(&c)), '}')
        .take()
        .parse_next(input)
}
