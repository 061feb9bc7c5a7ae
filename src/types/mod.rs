//! In-memory value tree.

mod value;

pub use value::{Object, Value};
