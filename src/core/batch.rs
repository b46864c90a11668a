use crate::config::form_config::FormConfig;
use crate::core::binder::MaskedField;
use crate::domain::model::FormatKind;
use crate::utils::error::{MaskError, Result};
use std::io::{Read, Write};

/// 批次處理對已配置欄位的輸出方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// 輸入時看到的格式化結果
    Display,
    /// 只保留數字，等同表單送出
    Submit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub masked_columns: Vec<String>,
}

/// 將表單欄位遮罩套用到 CSV 的每一列
/// 依標題名稱對應欄位，其他欄位原樣輸出
pub struct BatchMasker<'a> {
    config: &'a FormConfig,
    mode: BatchMode,
}

impl<'a> BatchMasker<'a> {
    pub fn new(config: &'a FormConfig, mode: BatchMode) -> Self {
        Self { config, mode }
    }

    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> Result<BatchSummary> {
        let mut reader = csv::Reader::from_reader(input);
        let mut writer = csv::Writer::from_writer(output);

        // 讀取標題並對應欄位格式
        let headers = reader.headers()?.clone();
        let columns: Vec<Option<FormatKind>> = headers
            .iter()
            .map(|h| self.config.field(h.trim()).map(|f| f.format))
            .collect();

        let masked_columns: Vec<String> = headers
            .iter()
            .zip(&columns)
            .filter(|(_, kind)| kind.is_some())
            .map(|(h, _)| h.trim().to_string())
            .collect();

        if masked_columns.is_empty() {
            return Err(MaskError::ConfigError {
                message: format!(
                    "None of the fields of form '{}' appear in the CSV header",
                    self.config.form.name
                ),
            });
        }
        tracing::info!("Masking columns: {}", masked_columns.join(", "));

        for field in &self.config.fields {
            if !masked_columns.contains(&field.name) {
                tracing::warn!("Field '{}' has no matching CSV column", field.name);
            }
        }

        // 逐列轉換並寫出
        writer.write_record(&headers)?;

        let mut rows = 0;
        for record in reader.records() {
            let record = record?;
            let masked: Vec<String> = record
                .iter()
                .zip(&columns)
                .map(|(cell, kind)| match kind {
                    Some(kind) => self.mask_cell(*kind, cell),
                    None => cell.to_string(),
                })
                .collect();
            writer.write_record(&masked)?;
            rows += 1;
        }
        writer.flush()?;

        tracing::debug!("Processed {} row(s) in {:?} mode", rows, self.mode);

        Ok(BatchSummary {
            rows,
            masked_columns,
        })
    }

    fn mask_cell(&self, kind: FormatKind, cell: &str) -> String {
        let mut field = MaskedField::mount(kind, cell);
        match self.mode {
            BatchMode::Display => field.value().to_string(),
            BatchMode::Submit => field.submit().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FormConfig {
        FormConfig::from_toml_str(
            r#"
[form]
name = "customers"

[[fields]]
name = "cpf"
format = "cpf"

[[fields]]
name = "phone"
format = "phone"
"#,
        )
        .unwrap()
    }

    fn run(mode: BatchMode, input: &str) -> (String, BatchSummary) {
        let config = config();
        let mut out = Vec::new();
        let summary = BatchMasker::new(&config, mode)
            .run(input.as_bytes(), &mut out)
            .unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_display_mode_formats_configured_columns() {
        let input = "name,cpf,phone\nAna,12345678901,11988887777\nBeto,123456,1122223333\n";
        let (out, summary) = run(BatchMode::Display, input);

        assert_eq!(
            out,
            "name,cpf,phone\nAna,123.456.789-01,(11) 98888-7777\nBeto,123.456,(11) 2222-3333\n"
        );
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.masked_columns, vec!["cpf", "phone"]);
    }

    #[test]
    fn test_submit_mode_strips_configured_columns_only() {
        let input = "name,cpf,phone\nAna (admin),123.456.789-01,(11) 98888-7777\n";
        let (out, _) = run(BatchMode::Submit, input);

        assert_eq!(out, "name,cpf,phone\nAna (admin),12345678901,11988887777\n");
    }

    #[test]
    fn test_missing_columns_are_tolerated() {
        let input = "cpf\n12345678901\n";
        let (out, summary) = run(BatchMode::Display, input);

        assert_eq!(out, "cpf\n123.456.789-01\n");
        assert_eq!(summary.masked_columns, vec!["cpf"]);
    }

    #[test]
    fn test_padded_headers_match_configured_fields() {
        let input = " cpf ,name\n12345678901,Ana\n";
        let (out, summary) = run(BatchMode::Display, input);

        assert_eq!(out, " cpf ,name\n123.456.789-01,Ana\n");
        assert_eq!(summary.masked_columns, vec!["cpf"]);
    }

    #[test]
    fn test_no_matching_column_is_a_config_error() {
        let config = config();
        let err = BatchMasker::new(&config, BatchMode::Display)
            .run("email\nx@y.z\n".as_bytes(), Vec::new())
            .unwrap_err();
        assert!(matches!(err, MaskError::ConfigError { .. }));
    }
}
