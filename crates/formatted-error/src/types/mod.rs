mod callable;
mod value;

pub use callable::Callable;
pub use value::{Params, Value, ValueKind};
