//! Command-line configuration for the interactive binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// File used by the load/save menu entries when `--file` is not given.
pub const DEFAULT_DATA_FILE: &str = "books.json";

/// Log verbosity accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Load/save outcomes.
    Info,
    /// Every catalog mutation.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Interactive book catalog.
#[derive(Debug, Parser)]
#[command(name = "bookcat", version)]
pub struct Cli {
    /// Catalog file read by "load" and written by "save".
    #[arg(long, short, default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,

    /// Log level; `RUST_LOG` takes precedence when set.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Load the catalog file once before showing the menu.
    #[arg(long)]
    pub load: bool,
}

impl Cli {
    /// Settings the shell needs.
    pub fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            data_file: self.file.clone(),
            load_on_start: self.load,
        }
    }
}

/// Runtime settings of [`crate::shell::Shell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Persistence path.
    pub data_file: PathBuf,
    /// Load `data_file` before the first menu.
    pub load_on_start: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            load_on_start: false,
        }
    }
}
