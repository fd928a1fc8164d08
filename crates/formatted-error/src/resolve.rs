//! Path resolution against a parameter tree.
//!
//! Resolution walks one breadcrumb at a time. The first primitive reached
//! ends the walk, a list of primitives ends it with the joined list, and
//! anything else (a missing key, a null, a function) is a miss.

use crate::types::{Params, Value};

/// Separator used when a list of primitives is rendered as text.
pub const JOIN_SEPARATOR: &str = ", ";

/// The layer of the tree currently being searched.
#[derive(Clone, Copy)]
enum Layer<'a> {
    Map(&'a Params),
    List(&'a [Value]),
}

impl<'a> Layer<'a> {
    fn get(self, crumb: &str) -> Option<&'a Value> {
        match self {
            Layer::Map(map) => map.get(crumb),
            Layer::List(items) => list_index(crumb).and_then(|i| items.get(i)),
        }
    }
}

/// Look up the value at `breadcrumbs` in `params`.
///
/// Returns `None` on a miss. Trailing segments past a primitive or a
/// joinable list are ignored.
///
/// # Example
///
/// ```
/// use formatted_error::{Value, params, resolve};
///
/// let p = params! { "user" => params! { "name" => "Ada" } };
/// assert_eq!(resolve(&["user", "name"], &p), Some(Value::from("Ada")));
/// assert_eq!(resolve(&["user", "age"], &p), None);
/// ```
pub fn resolve<S: AsRef<str>>(breadcrumbs: &[S], params: &Params) -> Option<Value> {
    resolve_in(breadcrumbs, Layer::Map(params))
}

fn resolve_in<S: AsRef<str>>(breadcrumbs: &[S], layer: Layer<'_>) -> Option<Value> {
    let (crumb, rest) = breadcrumbs.split_first()?;
    let node = layer.get(crumb.as_ref())?;
    match node {
        Value::List(items) if is_joinable(items) => Some(Value::String(join(items))),
        Value::List(items) => resolve_in(rest, Layer::List(items)),
        Value::Map(map) => resolve_in(rest, Layer::Map(map)),
        Value::Null | Value::Function(_) => None,
        primitive => Some(primitive.clone()),
    }
}

/// Returns true when every element can be rendered as plain text, i.e.
/// no element is a list, a map, or null.
pub fn is_joinable(items: &[Value]) -> bool {
    !items.iter().any(Value::is_object_like)
}

/// Render each element as text and join them with [`JOIN_SEPARATOR`].
pub fn join(items: &[Value]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(JOIN_SEPARATOR)
}

/// Decides whether a resolved value replaces its placeholder.
///
/// Null, `false`, zero, `NaN`, the empty string and functions all count as
/// "no value", so a placeholder resolving to `0` or `""` is left as-is.
pub fn is_substitutable(value: &Value) -> bool {
    match value {
        Value::Null | Value::Function(_) => false,
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0,
        Value::Float(f) => *f != 0.0 && !f.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::List(_) | Value::Map(_) => true,
    }
}

/// Parses a canonical list index: decimal digits with no sign and no
/// leading zero.
fn list_index(crumb: &str) -> Option<usize> {
    let canonical = !crumb.is_empty()
        && crumb.bytes().all(|b| b.is_ascii_digit())
        && (crumb == "0" || !crumb.starts_with('0'));
    if canonical { crumb.parse().ok() } else { None }
}
