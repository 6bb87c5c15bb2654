// `marklet`: convert Markdown documents and inspect how they were parsed.
//
// Configuration is layered: built-in defaults, then ./marklet.toml if present, then the file
// passed with --config. Configured values become format parameters, and `--extra-*` flags
// override them.

use clap::{CommandFactory, Parser, ValueEnum};
use marklet_babel::{FormatError, FormatRegistry};
use marklet_cli::cli::{Action, Cli, ConvertArgs, InspectArgs, Transform};
use marklet_cli::transforms::execute_transform;
use marklet_config::{ConfigError, Loader, MarkletConfig, PROJECT_CONFIG_FILE};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// Input path meaning stdin.
const STDIN: &str = "-";

type Params = HashMap<String, String>;

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("cannot read '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error("cannot write '{path}': {source}")]
    Write { path: String, source: io::Error },
    #[error("cannot tell the format of '{0}'; pass --from")]
    UnknownSource(String),
    #[error("nothing to do; see `marklet --help`")]
    NoAction,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    init_tracing();

    let (args, extras) = split_extras(std::env::args());
    let cli = Cli::parse_from(with_default_action(args));
    if let Err(err) = run(cli, &extras) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, extras: &Params) -> Result<(), CliError> {
    if cli.list_transforms {
        list_transforms();
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    match cli.action {
        Some(Action::Convert(args)) => convert(args, &config, extras),
        Some(Action::Inspect(args)) => inspect(args, &config, extras),
        Some(Action::GenerateCss) => {
            print!("{}", marklet_babel::formats::get_default_css());
            Ok(())
        }
        None => Err(CliError::NoAction),
    }
}

/// Pull `--extra-<name> [value]` pairs out of `args`. A name not followed by a plain value
/// is set to `true`.
fn split_extras(args: impl IntoIterator<Item = String>) -> (Vec<String>, Params) {
    let mut rest = Vec::new();
    let mut extras = Params::new();
    let mut args = args.into_iter().peekable();
    while let Some(arg) = args.next() {
        let name = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"))
            .map(str::to_string);
        match name {
            Some(name) => {
                let value = args
                    .next_if(|next| !next.starts_with('-'))
                    .unwrap_or_else(|| "true".to_string());
                extras.insert(name, value);
            }
            None => rest.push(arg),
        }
    }
    (rest, extras)
}

/// `marklet <input> ...` is `marklet convert <input> ...`.
fn with_default_action(mut args: Vec<String>) -> Vec<String> {
    let names_input = args.get(1).is_some_and(|first| {
        first == STDIN
            || !(first.starts_with('-')
                || first == "help"
                || Cli::command().find_subcommand(first).is_some())
    });
    if names_input {
        args.insert(1, "convert".to_string());
    }
    args
}

fn load_config(explicit: Option<&Path>) -> Result<MarkletConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = explicit {
        loader = loader.with_file(path);
    }
    loader.build()
}

fn read_input(path: &str) -> Result<String, CliError> {
    let read = if path == STDIN {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        fs::read_to_string(path)
    };
    read.map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

/// Configured parameters for `format`, overridden by `extras`.
fn format_options(config: &MarkletConfig, format: &str, extras: &Params) -> Params {
    let mut options = config.format_options(format);
    options.extend(extras.iter().map(|(k, v)| (k.clone(), v.clone())));
    options
}

/// Print `text`, ending it with a newline if it has none.
fn emit(text: &str) {
    if text.is_empty() || text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

fn convert(args: ConvertArgs, config: &MarkletConfig, extras: &Params) -> Result<(), CliError> {
    let registry = FormatRegistry::default();
    let from = match args.from {
        Some(from) => from,
        None if args.input == STDIN => "markdown".to_string(),
        None => registry
            .detect(&args.input)
            .map(str::to_string)
            .ok_or_else(|| CliError::UnknownSource(args.input.clone()))?,
    };

    let source = read_input(&args.input)?;
    let options = format_options(config, &args.to, extras);
    let output = registry.convert(&source, &from, &args.to, &options)?;

    match args.output {
        Some(path) => fs::write(&path, output).map_err(|source| CliError::Write {
            path: path.display().to_string(),
            source,
        }),
        None => {
            emit(&output);
            Ok(())
        }
    }
}

fn inspect(args: InspectArgs, config: &MarkletConfig, extras: &Params) -> Result<(), CliError> {
    let source = read_input(&args.path)?;
    let params = match args.transform.format() {
        Some(format) => format_options(config, format, extras),
        None => extras.clone(),
    };
    emit(&execute_transform(&source, args.transform, &params)?);
    Ok(())
}

fn list_transforms() {
    println!("Transforms (marklet inspect <path> [transform]):");
    for value in Transform::value_variants()
        .iter()
        .filter_map(ValueEnum::to_possible_value)
    {
        let help = value.get_help().map(ToString::to_string).unwrap_or_default();
        println!("  {:<12} {help}", value.get_name());
    }

    println!("\nFormats (marklet convert --from/--to):");
    for format in FormatRegistry::default().formats() {
        let modes = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "read/write",
            (true, false) => "read",
            (false, true) => "write",
            (false, false) => "-",
        };
        println!("  {:<10} {modes:<10} {}", format.name(), format.description());
    }
}
