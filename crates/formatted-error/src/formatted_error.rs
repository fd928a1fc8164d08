//! An error value whose message is rendered from a template.

use bon::bon;
use thiserror::Error;

use crate::error::{Argument, FormatError};
use crate::formatter::{format_message, reject};
use crate::types::{Params, Value};

/// An error carrying a template, its parameters, and the rendered message.
///
/// The template and params are kept exactly as supplied. The message is
/// computed once, at construction.
///
/// # Example
///
/// ```
/// use formatted_error::{FormattedError, params};
///
/// let error = FormattedError::builder()
///     .template("Hello {name}!")
///     .params(params! { "name" => "Superman" })
///     .build();
///
/// assert_eq!(error.message(), "Hello Superman!");
/// assert_eq!(error.original(), "Hello {name}!");
/// assert_eq!(error.to_string(), "Hello Superman!");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct FormattedError {
    original: String,
    params: Params,
    message: String,
}

#[bon]
impl FormattedError {
    /// Builds a formatted error from a template and optional params.
    #[builder]
    pub fn new(#[builder(into)] template: String, #[builder(default)] params: Params) -> Self {
        let message = format_message(&template, &params);
        FormattedError {
            original: template,
            params,
            message,
        }
    }
}

impl FormattedError {
    /// Builds a formatted error from dynamically typed arguments.
    ///
    /// Fails with [`FormatError::InvalidArgument`] when `template` is not a
    /// string or `params` is not a map.
    pub fn try_new(
        template: impl Into<Value>,
        params: impl Into<Value>,
    ) -> Result<Self, FormatError> {
        match (template.into(), params.into()) {
            (Value::String(template), Value::Map(params)) => {
                let message = format_message(&template, &params);
                Ok(FormattedError {
                    original: template,
                    params,
                    message,
                })
            }
            (Value::String(_), params) => Err(reject(Argument::Params, &params)),
            (template, _) => Err(reject(Argument::Template, &template)),
        }
    }

    /// The template exactly as supplied.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The params exactly as supplied.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Formats another template against this error's params.
    pub fn reformat(&self, template: &str) -> String {
        format_message(template, &self.params)
    }

    /// Consumes the error, returning `(original, params, message)`.
    pub fn into_parts(self) -> (String, Params, String) {
        (self.original, self.params, self.message)
    }
}
