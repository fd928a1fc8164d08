pub mod error;
pub mod formatted_error;
pub mod formatter;
pub mod parser;
pub mod resolve;
pub mod types;

pub use error::{Argument, FormatError};
pub use formatted_error::FormattedError;
pub use formatter::{format, format_message};
pub use parser::{Placeholder, placeholders};
pub use resolve::{JOIN_SEPARATOR, is_joinable, is_substitutable, join, resolve};
pub use types::{Callable, Params, Value, ValueKind};

/// Creates a [`Params`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so you can pass integers,
/// floats, strings, vectors, or nested `params!` maps directly.
///
/// # Example
///
/// ```
/// use formatted_error::{params, Value};
///
/// let p = params! {
///     "count" => 3,
///     "user" => params! { "name" => "Alice" },
///     "tags" => vec!["a", "b"],
/// };
/// assert_eq!(p.len(), 3);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["user"].as_map().map(|m| m.len()), Some(1));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        $crate::Params::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Params::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
