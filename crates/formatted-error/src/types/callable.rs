use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use super::Value;

/// A function stored in a parameter tree.
///
/// Placeholders that resolve to a function are left untouched, so the
/// formatter itself never calls it. Two callables are equal only when they
/// share the same underlying closure.
#[derive(Clone)]
pub struct Callable(Arc<dyn Fn() -> Value + Send + Sync>);

impl Callable {
    pub fn new(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Callable(Arc::new(f))
    }

    /// Invoke the wrapped function.
    pub fn call(&self) -> Value {
        (self.0)()
    }
}

impl Debug for Callable {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Callable(..)")
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
