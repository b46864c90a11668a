use crate::domain::model::FormatKind;
use crate::utils::error::{MaskError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_unique_names, Validate,
};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// 表單配置：宣告每個欄位使用的遮罩格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub form: FormSection,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    pub format: FormatKind,
}

impl FormConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading form config from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置（先替換 `${VAR}` 環境變數）
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let config: Self = toml::from_str(&processed_content)?;
        tracing::debug!(
            "Parsed form '{}' with {} field(s)",
            config.form.name,
            config.fields.len()
        );
        Ok(config)
    }

    /// 替換環境變數，未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| {
                    tracing::warn!("Environment variable {} is not set", var_name);
                    format!("${{{}}}", var_name)
                })
            })
            .into_owned()
    }

    /// 依名稱取得欄位配置
    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// 取得欄位的遮罩格式
    pub fn format_of(&self, name: &str) -> Result<FormatKind> {
        self.field(name)
            .map(|f| f.format)
            .ok_or_else(|| MaskError::UnknownField {
                name: name.to_string(),
            })
    }
}

impl Validate for FormConfig {
    fn validate(&self) -> Result<()> {
        // 驗證表單名稱與欄位
        validate_non_empty_string("form.name", &self.form.name)?;
        validate_non_empty_list("fields", &self.fields)?;

        for (i, field) in self.fields.iter().enumerate() {
            validate_non_empty_string(&format!("fields[{}].name", i), &field.name)?;
        }
        validate_unique_names("fields", self.fields.iter().map(|f| f.name.as_str()))?;

        Ok(())
    }
}
