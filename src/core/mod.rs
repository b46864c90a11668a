pub mod batch;
pub mod binder;
pub mod formatters;
pub mod rules;

pub use crate::domain::model::{DigitBuffer, FormatKind};
pub use crate::domain::ports::Mask;
pub use crate::utils::error::Result;

/// Digits of `text`, in order, with every separator removed.
pub fn extract_digits(text: &str) -> String {
    DigitBuffer::from_text(text).into_string()
}

/// Formats the digits of `text` with `kind`.
pub fn format_text(kind: FormatKind, text: &str) -> String {
    kind.apply(text)
}
