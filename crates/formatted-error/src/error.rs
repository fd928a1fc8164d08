//! Error types for message formatting.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::types::{Value, ValueKind};

/// The argument that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Template,
    Params,
}

impl Display for Argument {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Argument::Template => "template",
            Argument::Params => "params",
        })
    }
}

/// An error raised before any formatting takes place.
///
/// Resolution misses are never errors; only the shape of the inputs is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The template was not a string, or the params were not a map.
    #[error("invalid argument '{argument}': expected {expected}, got {found}")]
    InvalidArgument {
        argument: Argument,
        expected: ValueKind,
        found: ValueKind,
    },
}

impl FormatError {
    pub(crate) fn invalid(argument: Argument, found: &Value) -> Self {
        let expected = match argument {
            Argument::Template => ValueKind::String,
            Argument::Params => ValueKind::Map,
        };
        FormatError::InvalidArgument {
            argument,
            expected,
            found: found.kind(),
        }
    }

    /// The argument this error refers to.
    pub fn argument(&self) -> Argument {
        match self {
            FormatError::InvalidArgument { argument, .. } => *argument,
        }
    }
}
