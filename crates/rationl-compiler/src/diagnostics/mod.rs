//! Pattern errors: kinds, the error value, and rustc-style rendering.

mod error;
mod message;
mod printer;


pub use error::{PatternError, Related};
pub(crate) use error::text_range;
pub use message::ErrorKind;
pub use printer::ErrorPrinter;
