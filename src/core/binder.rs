use crate::config::form_config::FormConfig;
use crate::domain::model::{DigitBuffer, FormatKind};
use crate::domain::ports::Mask;
use crate::utils::error::{MaskError, Result};

/// 無介面的遮罩輸入欄位
///
/// 每次編輯都從完整的數字內容重新格式化，不做增量修補。`submit` 只留下數字。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedField {
    kind: FormatKind,
    value: String,
}

impl MaskedField {
    pub fn new(kind: FormatKind) -> Self {
        Self {
            kind,
            value: String::new(),
        }
    }

    /// 欄位首次呈現時（可能已有內容）
    pub fn mount(kind: FormatKind, text: &str) -> Self {
        let mut field = Self::new(kind);
        field.input(text);
        field
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn input(&mut self, text: &str) -> &str {
        self.value = self.kind.apply(text);
        &self.value
    }

    pub fn submit(&mut self) -> &str {
        self.value = DigitBuffer::from_text(&self.value).into_string();
        &self.value
    }
}

/// 表單送出後的純數字值，依欄位宣告順序排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub form: String,
    pub values: Vec<(String, String)>,
}

impl Submission {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// 依表單配置建立的具名遮罩欄位
#[derive(Debug, Clone)]
pub struct MaskedForm {
    name: String,
    fields: Vec<(String, MaskedField)>,
}

impl MaskedForm {
    pub fn new(config: &FormConfig) -> Self {
        let fields = config
            .fields
            .iter()
            .map(|f| (f.name.clone(), MaskedField::new(f.format)))
            .collect();

        Self {
            name: config.form.name.clone(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self, name: &str) -> Option<&MaskedField> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, f)| f)
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut MaskedField> {
        self.fields
            .iter_mut()
            .find(|(field, _)| field == name)
            .map(|(_, f)| f)
            .ok_or_else(|| MaskError::UnknownField {
                name: name.to_string(),
            })
    }

    /// 將編輯事件轉給指定欄位，回傳新的顯示字串
    pub fn input(&mut self, name: &str, text: &str) -> Result<&str> {
        let field = self.field_mut(name)?;
        let kind = field.kind();
        let formatted = field.input(text);
        tracing::trace!(field = name, format = %kind, value = %formatted, "reformatted");
        Ok(formatted)
    }

    /// 去除所有欄位的分隔符號
    pub fn submit(&mut self) -> Submission {
        let values = self
            .fields
            .iter_mut()
            .map(|(name, field)| (name.clone(), field.submit().to_string()))
            .collect::<Vec<_>>();

        tracing::debug!("Submitting form '{}' with {} field(s)", self.name, values.len());

        Submission {
            form: self.name.clone(),
            values,
        }
    }
}
