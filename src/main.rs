mod app;
mod command;
mod config;
mod consts;
mod game;
mod surface;
mod ticker;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: gridsnake [options]

Play snake in the terminal.

Options:
  -c, --config <PATH>    Read configuration from the given file
  --log-file <PATH>      Write log messages to the given file
  -h, --help             Display this help message and exit
  -V, --version          Show the program version and exit
";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = match Cli::from_parser(Parser::from_env())? {
        Cli::Run(args) => args,
        Cli::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Cli::Version => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };
    if let Some(path) = args.log_file.as_deref() {
        init_logging(path)?;
    }
    let config = args.load_config()?;
    let terminal = ratatui::init();
    let r = App::new(&config, rand::rng()).run(terminal);
    ratatui::restore();
    r.context("terminal I/O failed")
}

/// Send log messages to `path`.  Without this, nothing is logged, as the
/// terminal belongs to the game.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to open log file")?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run(Arguments),
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl Arguments {
    /// Load the configuration file given on the command line, or else the one
    /// at the default location, if any
    fn load_config(&self) -> anyhow::Result<Config> {
        let config = if let Some(path) = self.config.as_deref() {
            Config::load(path, false)
        } else {
            match Config::default_path() {
                Ok(path) => Config::load(&path, true),
                Err(e) => {
                    tracing::warn!(error = %e, "using default configuration");
                    Ok(Config::default())
                }
            }
        };
        config.context("failed to load configuration")
    }
}
