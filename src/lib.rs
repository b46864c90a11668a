pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::form_config::{FieldConfig, FormConfig};
pub use crate::core::batch::{BatchMasker, BatchMode, BatchSummary};
pub use crate::core::binder::{MaskedField, MaskedForm, Submission};
pub use crate::core::{extract_digits, format_text};
pub use domain::model::{DigitBuffer, FormatKind};
pub use domain::ports::Mask;
pub use utils::error::{MaskError, Result};
