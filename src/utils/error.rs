use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaskError {
    #[error("Unknown format: {name}")]
    UnknownFormat { name: String },

    #[error("Unknown field: {name}")]
    UnknownField { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

impl MaskError {
    /// 終端機顯示用的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            MaskError::UnknownFormat { name } => format!(
                "'{}' is not a supported format (use postal/cep, personal_id/cpf, phone or company_id/cnpj)",
                name
            ),
            MaskError::UnknownField { name } => {
                format!("The form has no field named '{}'", name)
            }
            MaskError::IoError(e) => format!("File access failed: {}", e),
            MaskError::CsvError(e) => format!("Could not read or write CSV: {}", e),
            MaskError::TomlError(e) => format!("The form configuration is not valid TOML: {}", e),
            MaskError::ConfigError { message } => message.clone(),
            MaskError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
            MaskError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MaskError>;
