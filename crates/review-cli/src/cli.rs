//! CLI argument definitions for the document review trainer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use review_core::DateStyle;
use review_corpus::DEFAULT_CORPUS_SIZE;
use review_model::{
    FilterCriteria, PrivilegeCode, PrivilegeLabel, ResponsivenessCode, ResponsivenessLabel,
};

#[derive(Parser)]
#[command(
    name = "doc-review",
    version,
    about = "Document review trainer - code a synthetic corpus for responsiveness and privilege",
    long_about = "Practice first-pass document review on a deterministic synthetic corpus.\n\n\
                  Coding decisions are saved between runs and can be exported to CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include reviewer issues and notes in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Prefix log events with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Directory holding saved coding (default: $DOC_REVIEW_HOME, then ./.doc-review).
    #[arg(long = "store-dir", value_name = "DIR", global = true)]
    pub store_dir: Option<PathBuf>,

    /// Number of documents in the generated corpus.
    #[arg(long = "corpus-size", value_name = "N", default_value_t = DEFAULT_CORPUS_SIZE, global = true)]
    pub corpus_size: usize,

    /// How dates are displayed.
    #[arg(
        long = "date-style",
        value_enum,
        default_value = "medium",
        global = true
    )]
    pub date_style: DateStyleArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// List documents matching the filters, with their coding.
    List(FilterArgs),

    /// Show one document with its coding.
    Show(ShowArgs),

    /// Save coding for a document.
    Code(CodeArgs),

    /// Show shown / total / coded counts.
    Stats(FilterArgs),

    /// List the values available to the custodian, doctype and tag filters.
    Facets,

    /// Export every document with its coding to CSV.
    Export(ExportArgs),

    /// Clear all saved coding.
    Reset(ResetArgs),

    /// Review documents interactively (j/k to move, 'help' for commands).
    Review,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Case-insensitive text matched against id, title and body.
    #[arg(long = "query", value_name = "TEXT")]
    pub query: Option<String>,

    #[arg(long = "custodian", value_name = "NAME")]
    pub custodian: Option<String>,

    #[arg(long = "doctype", value_name = "TYPE")]
    pub doctype: Option<String>,

    #[arg(long = "tag", value_name = "TAG")]
    pub tag: Option<String>,

    /// Ground-truth privilege label.
    #[arg(long = "privilege", value_enum)]
    pub privilege: Option<PrivilegeArg>,

    /// Ground-truth responsiveness label.
    #[arg(long = "responsive", value_enum)]
    pub responsive: Option<ResponsiveArg>,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.query.clone().unwrap_or_default(),
            custodian: self.custodian.clone(),
            doctype: self.doctype.clone(),
            tag: self.tag.clone(),
            privilege: self.privilege.map(PrivilegeLabel::from),
            responsiveness: self.responsive.map(ResponsivenessLabel::from),
        }
    }
}

#[derive(Args)]
pub struct ShowArgs {
    /// Document id, e.g. DOC-0001.
    #[arg(value_name = "DOC_ID")]
    pub id: String,
}

#[derive(Args)]
pub struct CodeArgs {
    /// Document id, e.g. DOC-0001.
    #[arg(value_name = "DOC_ID")]
    pub id: String,

    /// Responsiveness decision.
    #[arg(long = "resp", value_enum)]
    pub resp: RespCodeArg,

    /// Privilege decision.
    #[arg(long = "priv", value_enum)]
    pub privilege: PrivCodeArg,

    /// Issue tags, free text.
    #[arg(long = "issues", value_name = "TEXT", default_value = "")]
    pub issues: String,

    /// Reviewer notes, free text.
    #[arg(long = "notes", value_name = "TEXT", default_value = "")]
    pub notes: String,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file or directory (default: doc-review-coding-<date>.csv here).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PrivilegeArg {
    Privileged,
    NotPrivileged,
}

impl From<PrivilegeArg> for PrivilegeLabel {
    fn from(arg: PrivilegeArg) -> Self {
        match arg {
            PrivilegeArg::Privileged => PrivilegeLabel::Privileged,
            PrivilegeArg::NotPrivileged => PrivilegeLabel::NotPrivileged,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ResponsiveArg {
    Responsive,
    Unreviewed,
}

impl From<ResponsiveArg> for ResponsivenessLabel {
    fn from(arg: ResponsiveArg) -> Self {
        match arg {
            ResponsiveArg::Responsive => ResponsivenessLabel::Responsive,
            ResponsiveArg::Unreviewed => ResponsivenessLabel::Unreviewed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RespCodeArg {
    Unreviewed,
    Responsive,
    NotResponsive,
    NeedsFurtherReview,
}

impl From<RespCodeArg> for ResponsivenessCode {
    fn from(arg: RespCodeArg) -> Self {
        match arg {
            RespCodeArg::Unreviewed => ResponsivenessCode::Unreviewed,
            RespCodeArg::Responsive => ResponsivenessCode::Responsive,
            RespCodeArg::NotResponsive => ResponsivenessCode::NotResponsive,
            RespCodeArg::NeedsFurtherReview => ResponsivenessCode::NeedsFurtherReview,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PrivCodeArg {
    Unreviewed,
    Privileged,
    NotPrivileged,
    PartiallyPrivileged,
}

impl From<PrivCodeArg> for PrivilegeCode {
    fn from(arg: PrivCodeArg) -> Self {
        match arg {
            PrivCodeArg::Unreviewed => PrivilegeCode::Unreviewed,
            PrivCodeArg::Privileged => PrivilegeCode::Privileged,
            PrivCodeArg::NotPrivileged => PrivilegeCode::NotPrivileged,
            PrivCodeArg::PartiallyPrivileged => PrivilegeCode::PartiallyPrivileged,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DateStyleArg {
    Iso,
    Medium,
    Long,
    DayFirst,
}

impl From<DateStyleArg> for DateStyle {
    fn from(arg: DateStyleArg) -> Self {
        match arg {
            DateStyleArg::Iso => DateStyle::Iso,
            DateStyleArg::Medium => DateStyle::Medium,
            DateStyleArg::Long => DateStyle::Long,
            DateStyleArg::DayFirst => DateStyle::DayFirst,
        }
    }
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
