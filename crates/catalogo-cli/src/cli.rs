//! CLI argument definitions for the catalog converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalogo-conv",
    version,
    about = "Converte planilhas de produtos para o layout de importação",
    long_about = "Converte uma planilha de produtos de origem arbitrária para a\n\
                  planilha de importação de 59 colunas (aba \"Produtos\").\n\n\
                  Cabeçalhos são reconhecidos por sinônimos, sem distinção de\n\
                  acentos ou maiúsculas. Quando a escrita xlsx falha, a saída\n\
                  é gravada como CSV com o mesmo nome base."
)]
pub struct Cli {
    /// Planilha de entrada.
    #[arg(value_name = "ENTRADA", default_value = "dados_atuais.xlsx")]
    pub input: PathBuf,

    /// Arquivo de saída.
    #[arg(value_name = "SAIDA", default_value = "dados_convertidos.xlsx")]
    pub output: PathBuf,

    /// Enable debug diagnostics (resolved column map, per-row inference).
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Fail rows with an empty product code instead of passing them through.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q and --debug).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
