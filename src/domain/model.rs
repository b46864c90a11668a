use crate::utils::error::MaskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 從任意文字取出的 ASCII 數字，保留原本順序
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitBuffer(String);

impl DigitBuffer {
    /// 只保留 `0`-`9`，其他 Unicode 數字字元一併捨棄
    pub fn from_text(text: &str) -> Self {
        Self(text.chars().filter(char::is_ascii_digit).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DigitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DigitBuffer {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

/// The identifier kind a field is masked as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormatKind {
    /// `XXXXX-XXX` (CEP)
    Postal,
    /// `XXX.XXX.XXX-XX` (CPF)
    PersonalId,
    /// `(XX) XXXX-XXXX` or `(XX) XXXXX-XXXX`
    Phone,
    /// `XX.XXX.XXX/XXXX-XX` (CNPJ)
    CompanyId,
}

impl FormatKind {
    pub const ALL: [FormatKind; 4] = [
        FormatKind::Postal,
        FormatKind::PersonalId,
        FormatKind::Phone,
        FormatKind::CompanyId,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormatKind::Postal => "postal",
            FormatKind::PersonalId => "personal_id",
            FormatKind::Phone => "phone",
            FormatKind::CompanyId => "company_id",
        }
    }

    /// 完整識別碼的位數（電話回傳手機長度）
    /// 僅供參考，格式化不會截斷
    pub fn canonical_digits(&self) -> usize {
        match self {
            FormatKind::Postal => 8,
            FormatKind::PersonalId => 11,
            FormatKind::Phone => 11,
            FormatKind::CompanyId => 14,
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatKind {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "postal" | "cep" => Ok(FormatKind::Postal),
            "personal_id" | "cpf" => Ok(FormatKind::PersonalId),
            "phone" => Ok(FormatKind::Phone),
            "company_id" | "cnpj" => Ok(FormatKind::CompanyId),
            _ => Err(MaskError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FormatKind {
    type Error = MaskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormatKind> for String {
    fn from(kind: FormatKind) -> Self {
        kind.name().to_string()
    }
}
