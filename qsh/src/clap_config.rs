// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use miette::{IntoDiagnostic, WrapErr};
use r3bl_qcli::{EngineConfig, KeyMapKind};
use std::path::PathBuf;

pub const DEFAULT_BANNER: &str = "qsh, type ? for help";

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "qsh")]
#[command(about = "Line editing command shell for constrained terminals")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
pub struct CLIArg {
    #[arg(
        long,
        short = 'e',
        value_name = "line",
        help = "Run a line and exit instead of starting the interactive shell. Can be repeated."
    )]
    pub exec: Vec<String>,

    #[arg(
        long,
        value_name = "path",
        help = "JSON file with engine settings. Flags override values from this file."
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Prompt printed before every line.")]
    pub prompt: Option<String>,

    #[arg(long, help = "Maximum number of bytes in one line.")]
    pub line_capacity: Option<usize>,

    #[arg(long, help = "Number of lines kept in the history.")]
    pub history_capacity: Option<usize>,

    #[arg(long, help = "Directional key encoding: `ansi` or `legacy_console`.")]
    pub key_map: Option<KeyMapKind>,

    #[arg(long, help = "Line printed under the cleared screen at startup.")]
    pub banner: Option<String>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `qcli_log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(global = true, long, help = "Log to this file instead of `qcli_log.txt`.")]
    pub log_file: Option<String>,
}

impl CLIArg {
    /// Layer the settings: defaults, then the `--config` file (if any), then flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file can't be read or parsed.
    pub fn try_into_engine_config(&self) -> miette::Result<EngineConfig> {
        let mut config = match &self.config {
            None => EngineConfig::default(),
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("Could not read config file {}", path.display()))?;
                EngineConfig::try_from_json(&json)?
            }
        };

        if let Some(prompt) = &self.prompt {
            config.prompt.clone_from(prompt);
        }
        if let Some(line_capacity) = self.line_capacity {
            config.line_capacity = line_capacity;
        }
        if let Some(history_capacity) = self.history_capacity {
            config.history_capacity = history_capacity;
        }
        if let Some(key_map) = self.key_map {
            config.key_map = key_map;
        }
        if let Some(banner) = &self.banner {
            config.banner = Some(banner.clone());
        }
        if config.banner.is_none() {
            config.banner = Some(DEFAULT_BANNER.to_string());
        }

        Ok(config)
    }
}
