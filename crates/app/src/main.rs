use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{GeminiSupplier, QuestionSupplier, SupplierConfig, SupplyError};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const LOG_ENV: &str = "QUIZ_LOG";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimeout { raw: String },
    InvalidModel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout-secs value: {raw}"),
            ArgsError::InvalidModel { raw } => write!(f, "invalid --model value: {raw:?}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--model <name>] [--timeout-secs <n>]");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_AI_API_KEY       API key for the question generator (required)");
    eprintln!("  QUIZ_AI_BASE_URL      API base URL");
    eprintln!("  QUIZ_AI_MODEL         model name (default gemini-2.5-flash)");
    eprintln!("  QUIZ_AI_TIMEOUT_SECS  request timeout in seconds (default 30)");
    eprintln!("  {LOG_ENV:<20}  log filter (default warn)");
}

/// Command-line overrides; anything unset falls back to the environment.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    model: Option<String>,
    timeout: Option<Duration>,
    help: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--model" => {
                    let value = require_value(args, "--model")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidModel { raw: value });
                    }
                    parsed.model = Some(value.trim().to_string());
                }
                "--timeout-secs" => {
                    let value = require_value(args, "--timeout-secs")?;
                    let secs = value
                        .trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or_else(|| ArgsError::InvalidTimeout { raw: value.clone() })?;
                    parsed.timeout = Some(Duration::from_secs(secs));
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(parsed)
    }

    fn apply(self, mut config: SupplierConfig) -> SupplierConfig {
        if let Some(model) = self.model {
            config = config.with_model(model);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        config
    }
}

struct DesktopApp {
    supplier: Arc<GeminiSupplier>,
}

impl UiApp for DesktopApp {
    fn supplier(&self) -> Arc<dyn QuestionSupplier> {
        self.supplier.clone()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn build_supplier(args: Args) -> Result<GeminiSupplier, SupplyError> {
    let config = args.apply(SupplierConfig::from_env()?);
    tracing::info!(model = %config.model, timeout = ?config.timeout, "question supplier configured");
    GeminiSupplier::new(config)
}

#[tokio::main]
async fn main() {
    let mut argv = std::env::args().skip(1);
    let args = match Args::parse(&mut argv) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            std::process::exit(2);
        }
    };
    if args.help {
        print_usage();
        return;
    }

    init_logging();

    let supplier = match build_supplier(args) {
        Ok(supplier) => Arc::new(supplier),
        Err(err) => {
            tracing::error!(error = %err, "cannot start without a question supplier");
            // Printed once here; the UI never sees an unconfigured supplier.
            eprintln!("{}", err.user_message());
            std::process::exit(2);
        }
    };

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { supplier });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("AI Quiz Generator")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}
