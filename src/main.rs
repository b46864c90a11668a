use anyhow::Context;
use clap::Parser;
use input_mask::config::cli::{open_input, open_output};
use input_mask::config::Command;
use input_mask::utils::{logger, validation::Validate};
use input_mask::{extract_digits, BatchMasker, BatchMode, CliConfig, FormConfig, Mask, MaskError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config.command) {
        // 輸出用戶友好的錯誤信息
        match e.downcast_ref::<MaskError>() {
            Some(mask_error) => {
                tracing::error!("❌ {}", mask_error);
                eprintln!("❌ {}", mask_error.user_friendly_message());
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        // 格式化單一值
        Command::Format { format, text } => {
            println!("{}", format.apply(&text));
        }
        // 去除分隔符號
        Command::Strip { text } => {
            println!("{}", extract_digits(&text));
        }
        Command::Batch {
            config,
            input,
            output,
            submit,
        } => {
            tracing::info!("📁 Loading form configuration from: {}", config);
            // 載入並驗證表單配置
            let form = FormConfig::from_file(&config)?;
            form.validate()?;

            let mode = if submit {
                BatchMode::Submit
            } else {
                BatchMode::Display
            };

            let reader = open_input(&input)?;
            let writer = open_output(output.as_deref())?;
            let summary = BatchMasker::new(&form, mode)
                .run(reader, writer)
                .with_context(|| format!("failed to mask '{}'", input))?;

            tracing::info!(
                "✅ Masked {} row(s) of '{}' ({} column(s))",
                summary.rows,
                input,
                summary.masked_columns.len()
            );
        }
    }

    Ok(())
}
