//! Substitutes resolved parameter values into a template.

use tracing::{debug, trace};

use crate::error::{Argument, FormatError};
use crate::parser::placeholders;
use crate::resolve::{is_substitutable, resolve};
use crate::types::{Params, Value};

/// Format a template by replacing its placeholders with values from
/// `params`.
///
/// Placeholders are processed left to right. Each one that resolves to a
/// substitutable value replaces the first remaining occurrence of its token
/// text; the rest are left verbatim, braces included.
///
/// # Example
///
/// ```
/// use formatted_error::{format_message, params};
///
/// let p = params! { "name" => params! { "first" => "Super", "last" => "man" } };
/// assert_eq!(
///     format_message("Hello {name.first} {name.last}!", &p),
///     "Hello Super man!"
/// );
/// ```
pub fn format_message(template: &str, params: &Params) -> String {
    let found = placeholders(template);
    if found.is_empty() {
        return template.to_string();
    }

    let mut message = template.to_string();
    for placeholder in &found {
        match resolve(placeholder.path.as_slice(), params).filter(is_substitutable) {
            Some(value) => {
                let text = value.to_string();
                trace!(placeholder = placeholder.text, value = %text, "substituting placeholder");
                message = message.replacen(placeholder.text, &text, 1);
            }
            None => {
                debug!(placeholder = placeholder.text, "placeholder left unresolved");
            }
        }
    }
    message
}

/// Format a dynamically typed template against a dynamically typed
/// parameter tree.
///
/// The template must be a string and the params must be a map; anything
/// else is rejected before the template is scanned.
pub fn format(template: &Value, params: &Value) -> Result<String, FormatError> {
    let (template, params) = check_arguments(template, params)?;
    Ok(format_message(template, params))
}

pub(crate) fn check_arguments<'a>(
    template: &'a Value,
    params: &'a Value,
) -> Result<(&'a str, &'a Params), FormatError> {
    let Value::String(template) = template else {
        return Err(reject(Argument::Template, template));
    };
    let Value::Map(params) = params else {
        return Err(reject(Argument::Params, params));
    };
    Ok((template, params))
}

pub(crate) fn reject(argument: Argument, found: &Value) -> FormatError {
    debug!(%argument, found = %found.kind(), "rejecting format argument");
    FormatError::invalid(argument, found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn template_without_placeholders_is_returned_unchanged() {
        let p = params! { "name" => "Chris" };
        assert_eq!(format_message("My name is name", &p), "My name is name");
    }

    #[test]
    fn duplicate_placeholders_are_replaced_in_turn() {
        let p = params! { "x" => "X" };
        assert_eq!(format_message("{x} and {x}", &p), "X and X");
    }

    #[test]
    fn replacement_text_is_inserted_literally() {
        let p = params! { "price" => "$& $1 $$" };
        assert_eq!(format_message("costs {price}", &p), "costs $& $1 $$");
    }

    #[test]
    fn later_placeholder_may_match_earlier_substituted_text() {
        // The first substitution introduces a `{b}` ahead of the original.
        let p = params! { "a" => "{b}", "b" => "B" };
        assert_eq!(format_message("{a} {b}", &p), "B {b}");
    }

    #[test]
    fn falsy_values_leave_placeholder() {
        let p = params! {
            "zero" => 0,
            "no" => false,
            "empty" => "",
            "nan" => f64::NAN,
            "none" => Value::Null,
            "list" => Vec::<Value>::new(),
        };
        let template = "{zero} {no} {empty} {nan} {none} {list}";
        assert_eq!(format_message(template, &p), template);
    }

    #[test]
    fn check_arguments_validates_template_first() {
        let err = check_arguments(&Value::Bool(true), &Value::Number(1)).unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidArgument {
                argument: Argument::Template,
                ..
            }
        ));
    }
}
