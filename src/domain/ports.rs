use crate::domain::model::DigitBuffer;

/// A formatter that turns a digit buffer into its display string.
///
/// Implementations are pure: the output depends only on the digits, and
/// extracting digits from the output gives back the input buffer.
pub trait Mask {
    fn format(&self, digits: &DigitBuffer) -> String;

    /// Extracts digits from `text` and formats them from scratch.
    fn apply(&self, text: &str) -> String {
        self.format(&DigitBuffer::from_text(text))
    }
}
