//! Document review trainer CLI.

use std::io::{self, IsTerminal};
use std::path::Path;

use clap::{ColorChoice, Parser};
use review_cli::logging::{LogConfig, LogFormat, init_logging};
use review_core::{ReviewConfig, open_file_session};
use tracing::debug;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_code, run_export, run_facets, run_list, run_reset, run_review, run_show, run_stats,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let config = review_config_from_cli(&cli);
    debug!(
        corpus_size = config.corpus_size,
        store_dir = %config.store_dir.display(),
        date_style = %config.date_style,
        "configuration resolved"
    );
    let style = config.date_style;
    let mut session = open_file_session(&config);

    let result = match &cli.command {
        Command::List(args) => run_list(&mut session, args, style),
        Command::Show(args) => run_show(&mut session, args, style),
        Command::Code(args) => run_code(&mut session, args),
        Command::Stats(args) => run_stats(&mut session, args),
        Command::Facets => run_facets(&session),
        Command::Export(args) => run_export(&session, args).map(|_| ()),
        Command::Reset(args) => run_reset(&mut session, args),
        Command::Review => run_review(&mut session, style, Path::new(".")),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Store directory precedence: `--store-dir`, then `DOC_REVIEW_HOME`, then
/// the default.
fn review_config_from_cli(cli: &Cli) -> ReviewConfig {
    let config = ReviewConfig::default()
        .with_corpus_size(cli.corpus_size)
        .with_date_style(cli.date_style.into());
    match &cli.store_dir {
        Some(dir) => config.with_store_dir(dir),
        None => config,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level_filter(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
        .with_timestamps(cli.log_timestamps)
        .with_target(cli.log_target);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
