// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::GatewayError;
use crate::file_utils::FileSource;
use crate::services::knowledge_base::Questions;
use crate::services::{
    AskRequest, DetectRequest, ExtractFieldsRequest, Gateway, ItemList, TranslateRequest,
};

mod app_config;
mod errors;
mod file_utils;
mod glossary;
mod providers;
mod services;
mod translation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

impl From<app_config::LogLevel> for LevelFilter {
    fn from(level: app_config::LogLevel) -> Self {
        match level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text, optionally applying a glossary spreadsheet
    Translate {
        /// Text to translate
        text: String,

        /// Source language code (e.g., 'en')
        #[arg(short, long)]
        source_language: String,

        /// Target language code (e.g., 'es')
        #[arg(short, long)]
        target_language: String,

        /// Path to a glossary spreadsheet (xlsx)
        #[arg(short, long)]
        glossary: Option<PathBuf>,
    },

    /// Detect items in an image using the selected AI backend
    Detect {
        /// Path to the image file
        image: PathBuf,

        /// Comma-separated item names to look for
        #[arg(short, long)]
        items: String,

        /// Backend selector (e.g., 'OpenAI gpt-4o', 'AWS Rekognition')
        #[arg(short, long)]
        ai: Option<String>,
    },

    /// Answer a question against a PDF document
    Ask {
        /// The question to ask
        question: String,

        /// Path to a local PDF file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// URL of a PDF to fetch
        #[arg(short, long)]
        pdf_url: Option<String>,
    },

    /// Extract field values from an image
    ExtractFields {
        /// Path to the image file
        image: PathBuf,

        /// Comma-separated field names to extract
        #[arg(short, long)]
        fields: String,
    },

    /// Generate shell completions for babelgate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Babelgate - AI gateway for translation, image analysis and document Q&A
#[derive(Parser, Debug)]
#[command(name = "babelgate")]
#[command(version)]
#[command(about = "Glossary-aware translation and image analysis across AI backends")]
#[command(long_about = "Babelgate translates text with spreadsheet glossaries, detects items in \
images, answers questions over PDF documents and extracts field values from images, using \
OpenAI, Google Gemini, Anthropic Claude or AWS Rekognition as the backend.

EXAMPLES:
    babelgate translate \"Hello World\" -s en -t fr
    babelgate translate \"Sharpen the scissors\" -s en -t es -g terms.xlsx
    babelgate detect photo.jpg -i \"cat, dog\" -a \"AWS Rekognition\"
    babelgate ask \"What is the warranty period?\" -f manual.pdf
    babelgate extract-fields invoice.jpg -f \"total, due date\"
    babelgate completions bash > babelgate.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. API credentials can also be supplied via
    OPENAI_API_KEY, GOOGLE_AI_API_KEY, CLAUDE_API_KEY, AWS_ACCESS_KEY_ID,
    AWS_SECRET_ACCESS_KEY and AWS_REGION.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Error payload returned to the caller on any failure
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

// Custom logger writing colored, timestamped lines to stderr
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "babelgate", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(level) = &cli.log_level {
        let config_level: app_config::LogLevel = level.clone().into();
        log::set_max_level(config_level.into());
    }

    let config = load_config(&cli.config_path, cli.log_level.as_ref())?;
    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.clone().into());
    }

    let gateway = Gateway::new(&config);
    match dispatch(&gateway, cli.command).await {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            error!("Request failed ({}): {}", e.status_code(), e);
            let payload = ErrorResponse {
                error: e.public_message(),
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
            std::process::exit(1);
        }
    }
}

/// Load the configuration file, creating a default one if it doesn't exist,
/// then apply environment overrides and validate.
fn load_config(config_path: &str, log_level: Option<&CliLogLevel>) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config file: {}", config_path))?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    if let Some(level) = log_level {
        config.log_level = level.clone().into();
    }

    let config = config.fill_from_env();
    config
        .validate()
        .context("Configuration validation failed")?;
    Ok(config)
}

/// Run the requested operation and serialize its response.
async fn dispatch(gateway: &Gateway, command: Commands) -> Result<String, GatewayError> {
    match command {
        Commands::Translate {
            text,
            source_language,
            target_language,
            glossary,
        } => {
            let response = gateway
                .translate(TranslateRequest {
                    text,
                    source_language,
                    target_language,
                    glossary: glossary.map(FileSource::Path),
                })
                .await?;
            Ok(serde_json::to_string_pretty(&response).unwrap_or_default())
        }
        Commands::Detect { image, items, ai } => {
            let response = gateway
                .detect(DetectRequest {
                    image: FileSource::Path(image),
                    items: ItemList::Csv(items),
                    ai_selection: ai,
                })
                .await?;
            Ok(serde_json::to_string_pretty(&response).unwrap_or_default())
        }
        Commands::Ask {
            question,
            file,
            pdf_url,
        } => {
            let response = gateway
                .ask(AskRequest {
                    question: Questions::One(question),
                    file: file.map(FileSource::Path),
                    pdf_url,
                })
                .await?;
            Ok(serde_json::to_string_pretty(&response).unwrap_or_default())
        }
        Commands::ExtractFields { image, fields } => {
            let response = gateway
                .extract_fields(ExtractFieldsRequest {
                    image: FileSource::Path(image),
                    fields: ItemList::Csv(fields),
                })
                .await?;
            Ok(serde_json::to_string_pretty(&response).unwrap_or_default())
        }
        Commands::Completions { .. } => unreachable!("handled before dispatch"),
    }
}
