use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// 開啟輸出檔案（自動建立上層目錄），未指定路徑時輸出到 stdout
pub fn open_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let full_path = Path::new(path);

            if let Some(parent) = full_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }

            tracing::debug!("Writing output to {}", full_path.display());
            Ok(Box::new(BufWriter::new(File::create(full_path)?)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// 開啟輸入檔案
pub fn open_input(path: &str) -> Result<File> {
    Ok(File::open(path)?)
}
