use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use reflect_core::model::GuideContent;
use services::{
    Clock, CompletionNotifier, ContentSource, JsonLinesNotifier, LogNotifier, ReflectionService,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidContentPath { raw: String },
    InvalidReportSink { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidContentPath { raw } => write!(f, "invalid --content value: {raw:?}"),
            ArgsError::InvalidReportSink { raw } => {
                write!(f, "invalid --report value: {raw} (expected log or stdout)")
            }
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
    reflection: Arc<ReflectionService>,
}

impl UiApp for DesktopApp {
    fn reflection(&self) -> Arc<ReflectionService> {
        Arc::clone(&self.reflection)
    }
}

/// Where acknowledged sessions are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportSink {
    Log,
    Stdout,
}

impl ReportSink {
    fn parse(raw: &str) -> Result<Self, ArgsError> {
        match raw.trim() {
            "log" => Ok(Self::Log),
            "stdout" => Ok(Self::Stdout),
            _ => Err(ArgsError::InvalidReportSink {
                raw: raw.to_string(),
            }),
        }
    }

    fn notifier(self) -> Arc<dyn CompletionNotifier> {
        match self {
            ReportSink::Log => Arc::new(LogNotifier),
            ReportSink::Stdout => Arc::new(JsonLinesNotifier::new(std::io::stdout())),
        }
    }
}

struct Args {
    content: ContentSource,
    report: ReportSink,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--content <guide.json>] [--report <log|stdout>]");
    eprintln!("  cargo run -p app -- check [--content <guide.json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --content  built-in \"Attraction + Pull\" guide");
    eprintln!("  --report   log");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GUIDE_CONTENT, GUIDE_REPORT, RUST_LOG");
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
        let mut content = match std::env::var("GUIDE_CONTENT") {
            Ok(path) if !path.trim().is_empty() => ContentSource::File(PathBuf::from(path)),
            _ => ContentSource::Builtin,
        };
        let mut report = match std::env::var("GUIDE_REPORT") {
            Ok(raw) => ReportSink::parse(&raw)?,
            Err(_) => ReportSink::Log,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--content" => {
                    let value = require_value(args, "--content")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidContentPath { raw: value });
                    }
                    content = ContentSource::File(PathBuf::from(value));
                }
                "--report" => {
                    let value = require_value(args, "--report")?;
                    report = ReportSink::parse(&value)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { content, report })
    }
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| format!("initialize tracing subscriber: {err}"))?;

    Ok(())
}

fn describe(content: &GuideContent) {
    println!("{}", content.title());
    for (index, chapter) in content.chapters().iter().enumerate() {
        println!(
            "  chapter {} of {}: {} ({} questions)",
            index + 1,
            content.planned_chapters(),
            chapter.title(),
            chapter.len()
        );
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
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

    init_logging()?;

    let content = parsed.content.load()?;
    tracing::info!(
        source = ?parsed.content,
        chapters = content.chapters().len(),
        "guide content loaded"
    );

    match cmd {
        Command::Check => {
            describe(&content);
            Ok(())
        }
        Command::Ui => {
            let reflection = Arc::new(ReflectionService::new(
                Clock::system(),
                Arc::new(content),
                parsed.report.notifier(),
            ));
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { reflection });
            let context = build_app_context(&app);

            // Some dev setups default to an always-on-top window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Purpose Guide")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
