// Command-line definition for `marklet`.
//
// build.rs includes this file to generate shell completions, so it may only depend on clap.

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

/// Convert and inspect documents written in a compact Markdown dialect.
///
/// Format parameters are passed as `--extra-<name> [value]`; a bare flag means `true`.
/// `marklet <input> --to <format>` is short for `marklet convert <input> --to <format>`.
#[derive(Debug, Parser)]
#[command(name = "marklet", version, arg_required_else_help = true)]
pub struct Cli {
    /// List transforms and formats, then exit
    #[arg(long, global = true)]
    pub list_transforms: bool,

    /// Configuration file layered over the defaults and ./marklet.toml
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// Convert a document to another format
    Convert(ConvertArgs),
    /// Print one view of how a document was parsed
    Inspect(InspectArgs),
    /// Print the CSS embedded in standalone HTML
    GenerateCss,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input file, or `-` for stdin
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: String,

    /// Source format. Detected from the extension when omitted; stdin is read as markdown
    #[arg(long, value_name = "FORMAT")]
    pub from: Option<String>,

    /// Target format
    #[arg(long, value_name = "FORMAT")]
    pub to: String,

    /// Write here instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Markdown file, or `-` for stdin
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: String,

    #[arg(value_enum, default_value = "ast-treeviz")]
    pub transform: Transform,
}

/// Views printed by `marklet inspect`, named stage-format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transform {
    /// Document tree drawn with icons
    AstTreeviz,
    /// Document tree as XML-like tags
    AstTag,
    /// Document node model as JSON
    AstJson,
    /// Structural tree (name, props, children) as JSON
    TreeJson,
    /// HTML projection
    Html,
}
