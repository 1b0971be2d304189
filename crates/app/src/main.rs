use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{QuizSettings, QuizSettingsDraft};
use services::{AppServices, Clock, DeckOrigin, DeckService, QuizLoopService, Shuffler};
use storage::DeckLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DECKS_DIR: &str = "tests";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidDecksDir { raw: String },
    InvalidNumber { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidDecksDir { raw } => write!(f, "invalid --decks value: {raw:?}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn deck_origin(&self) -> DeckOrigin {
        self.services.origin()
    }

    fn deck_service(&self) -> Arc<DeckService> {
        self.services.deck_service()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        self.services.quiz_loop()
    }
}

#[derive(Debug)]
struct Args {
    decks_dir: PathBuf,
    seed: Option<u64>,
    random_count: Option<usize>,
    seconds: Option<u32>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- ui    [--decks <dir>] [--seed <u64>] [--random-count <n>] [--seconds <n>]"
    );
    eprintln!("  cargo run -p app -- check [--decks <dir>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --decks {DEFAULT_DECKS_DIR}");
    eprintln!("  --random-count 15");
    eprintln!("  --seconds 60 (one of 30, 45, 60, 90, 120)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DECKS_DIR, QUIZ_SEED, QUIZ_RANDOM_COUNT, QUIZ_SECONDS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse_with_env(args, |key| std::env::var(key).ok())
    }

    fn parse_with_env(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut decks_dir = env("QUIZ_DECKS_DIR")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DECKS_DIR), PathBuf::from);
        let mut seed = env("QUIZ_SEED").map(parse_seed).transpose()?;
        let mut random_count = env("QUIZ_RANDOM_COUNT")
            .map(|raw| parse_number(raw, "QUIZ_RANDOM_COUNT"))
            .transpose()?;
        let mut seconds = env("QUIZ_SECONDS")
            .map(|raw| parse_number(raw, "QUIZ_SECONDS"))
            .transpose()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--decks" => {
                    let value = require_value(args, "--decks")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDecksDir { raw: value });
                    }
                    decks_dir = PathBuf::from(value);
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    seed = Some(parse_seed(value)?);
                }
                "--random-count" => {
                    let value = require_value(args, "--random-count")?;
                    random_count = Some(parse_number(value, "--random-count")?);
                }
                "--seconds" => {
                    let value = require_value(args, "--seconds")?;
                    seconds = Some(parse_number(value, "--seconds")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            decks_dir,
            seed,
            random_count,
            seconds,
        })
    }

    fn shuffler(&self) -> Shuffler {
        self.seed.map_or_else(Shuffler::thread, Shuffler::seeded)
    }

    /// Quiz defaults with the command-line overrides applied.
    fn settings(&self) -> Result<QuizSettings, quiz_core::Error> {
        let settings = QuizSettingsDraft {
            default_random_count: self.random_count,
            default_seconds_per_question: self.seconds,
            ..QuizSettingsDraft::new()
        }
        .validate()?;
        Ok(settings)
    }
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_number<T: std::str::FromStr>(raw: String, flag: &'static str) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let loader = DeckLoader::new(parsed.decks_dir.clone());

    match cmd {
        Command::Ui => {
            let settings = parsed.settings()?;
            let services = AppServices::load(
                &loader,
                Clock::default_clock(),
                parsed.shuffler(),
                settings,
            )
            .await?;
            info!(
                decks = %parsed.decks_dir.display(),
                seeded = parsed.seed.is_some(),
                random_count = parsed.random_count,
                seconds = parsed.seconds,
                "launching desktop ui"
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quiz Lab")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => check_decks(&loader).await,
    }
}

async fn check_decks(loader: &DeckLoader) -> Result<(), Box<dyn std::error::Error>> {
    match loader.load().await {
        Ok(subjects) => {
            println!("{} subject(s) in {}:", subjects.len(), loader.dir().display());
            for subject in &subjects {
                println!(
                    "  {} {} [{}]: {} question(s)",
                    subject.icon(),
                    subject.name(),
                    subject.id(),
                    subject.question_count()
                );
            }
            Ok(())
        }
        Err(err) => {
            println!("{err}; the sample subjects would be used");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
