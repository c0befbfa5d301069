//! Product catalog converter CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use catalogo_cli::logging::{LogConfig, LogFormat, init_logging};
use catalogo_cli::pipeline::{ConversionRequest, run_conversion};
use catalogo_transform::{ConvertOptions, NumberFormat};

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let request = ConversionRequest {
        input: cli.input,
        output: cli.output,
        options: ConvertOptions {
            strict: cli.strict,
            number_format: NumberFormat::brazilian(),
        },
        dump_colmap: cli.debug,
    };
    let exit_code = match run_conversion(&request) {
        Ok(result) => {
            print_summary(&result);
            if result.has_errors { 1 } else { 0 }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    if cli.debug && config.level_filter < LevelFilter::DEBUG {
        config.level_filter = LevelFilter::DEBUG;
    }
    config.use_env_filter = !(cli.verbosity.is_present() || cli.debug || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
