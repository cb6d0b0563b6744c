use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use anyhow::{anyhow, Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use xmlmenu::{render_menu_file, MenuError, OutputFormat, RenderContext, MAX_INDENT_WIDTH};

const EXIT_PROMPT: &str = "[Hit any key to exit]";

// Parsing and rendering recurse once per nesting level
const RENDER_STACK_SIZE: usize = 256 * 1024 * 1024;

fn command() -> Command {
    Command::new("xmlmenu")
        .about("Render an XML menu and mark the entries leading to an active path")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("menu_file")
                .help("Path to a menu .xml file")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("active_path")
                .help("Path to match, e.g. /default.aspx")
                .allow_hyphen_values(true)
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format: text or json")
                .value_parser(clap::value_parser!(OutputFormat))
                .default_value("text"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .help("Spaces per nesting level")
                .value_parser(RangedU64ValueParser::<usize>::new().range(0..=MAX_INDENT_WIDTH as u64))
                .default_value("5"),
        )
        .arg(
            Arg::new("pause")
                .long("pause")
                .help("Wait for Enter after printing the menu")
                .action(ArgAction::SetTrue),
        )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let menu_file = matches
        .get_one::<PathBuf>("menu_file")
        .ok_or(MenuError::Usage)?;
    let active_path = matches
        .get_one::<String>("active_path")
        .ok_or(MenuError::Usage)?;
    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or_default();
    let indent = matches
        .get_one::<usize>("indent")
        .copied()
        .unwrap_or(xmlmenu::DEFAULT_INDENT_WIDTH);

    debug!(menu_file = %menu_file.display(), %active_path, ?format, indent, "starting");

    let context = RenderContext::new()
        .with_format(format)
        .with_indent_width(indent);

    // Rendered in full before anything is printed
    let output = render_on_large_stack(menu_file.clone(), active_path.clone(), context)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(output.as_bytes())
        .context("failed to write menu")?;
    out.flush()?;

    // Keep stdout a single JSON document
    match format {
        OutputFormat::Text => writeln!(out, "{}", EXIT_PROMPT)?,
        OutputFormat::Json => eprintln!("{}", EXIT_PROMPT),
    }
    out.flush()?;

    if matches.get_flag("pause") {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }

    Ok(())
}

fn render_on_large_stack(
    menu_file: PathBuf,
    active_path: String,
    context: RenderContext,
) -> Result<String> {
    let worker = thread::Builder::new()
        .name("render".to_string())
        .stack_size(RENDER_STACK_SIZE)
        .spawn(move || render_menu_file(&menu_file, &active_path, &context))
        .context("failed to start render thread")?;

    let output = worker
        .join()
        .map_err(|_| anyhow!("render thread panicked"))??;
    Ok(output)
}

/// Prints a failure as a single line on stdout.
fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<MenuError>() {
        Some(menu_err) => println!("{}", menu_err),
        None => println!("{:#}", err),
    }
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    init_tracing();

    let matches = match command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => match e.kind() {
            ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues => return report(&MenuError::Usage.into()),
            _ => e.exit(),
        },
    };

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}
