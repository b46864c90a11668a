#[cfg(feature = "cli")]
pub mod cli;
pub mod form_config;

#[cfg(feature = "cli")]
use crate::domain::model::FormatKind;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "mask")]
#[command(about = "Format and strip postal codes, CPF, phone numbers and CNPJ")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print TEXT formatted as FORMAT
    Format {
        /// postal (cep), personal_id (cpf), phone, company_id (cnpj)
        format: FormatKind,
        text: String,
    },

    /// Print the digits of TEXT with every separator removed
    Strip { text: String },

    /// Mask the configured columns of a CSV file
    Batch {
        /// Path to the TOML form configuration
        #[arg(short, long, default_value = "form.toml")]
        config: String,

        /// CSV file to read
        #[arg(short, long)]
        input: String,

        /// Where to write the result; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,

        /// Write digits only, as a form submission would
        #[arg(long)]
        submit: bool,
    },
}
