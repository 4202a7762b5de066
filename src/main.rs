use anyhow::{Context, Result};
use clap::Parser;
use pocket_calc::calculator::CalculatorState;
use pocket_calc::config::Config;
use pocket_calc::keypad::{DisplayItem, Keypad};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// A four-function pocket calculator for the terminal.
///
/// Keys are keypad labels (`0`-`9`, `●`, `±`, `%`, `C`, `AC`, `+`, `-`,
/// `x`, `÷`, `=`) or keyboard names (`.`, `*`, `/`, `Backspace`, `Enter`,
/// `Escape`). Digits and operators may be run together: `10+5-3x2=`.
#[derive(Parser, Debug)]
#[command(name = "pocket-calc", version, about)]
struct Cli {
    /// Keys to press. Without keys, read keys line by line from stdin.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    keys: Vec<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the calculator state as JSON
    #[arg(long)]
    json: bool,

    /// Print the whole calculator state, not just the display
    #[arg(long)]
    show_state: bool,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

struct Output {
    json: bool,
    show_state: bool,
}

impl Output {
    fn render(&self, state: &CalculatorState) -> Result<String> {
        if self.json {
            return serde_json::to_string(state).context("Failed to serialize state");
        }

        let item = DisplayItem::from_state(state);
        if self.show_state {
            Ok(format!(
                "{}  [value={} operator={} waiting={} clear={}]",
                item.text,
                state.value.map_or("-".to_string(), |v| v.to_string()),
                state.operator.map_or("-".to_string(), |op| op.to_string()),
                state.waiting_for_operand,
                item.clear_label.text(),
            ))
        } else {
            Ok(item.text)
        }
    }
}

fn run_keys(keypad: &Keypad, keys: &[String], output: &Output) -> Result<()> {
    let line = keys.join(" ");
    let state = keypad
        .press_line(&CalculatorState::initial(), &line)
        .with_context(|| format!("Invalid keys: {}", line))?;
    println!("{}", output.render(&state)?);
    Ok(())
}

fn run_interactive(keypad: &Keypad, output: &Output) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut state = CalculatorState::initial();

    writeln!(stdout, "{}", output.render(&state)?)?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        match keypad.press_line(&state, &line) {
            Ok(next) => {
                state = next;
                writeln!(stdout, "{}", output.render(&state)?)?;
            }
            Err(e) => eprintln!("{}", e),
        }
        stdout.flush()?;
    }

    debug!("stdin closed");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let loaded = if cli.config.is_some() {
        Config::load_from(&config_path)
    } else {
        Config::load_or_create(&config_path)
    };
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) if cli.config.is_none() => (Config::default(), Some(e)),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to load config from {}", config_path.display()));
        }
    };

    init_logging(&config.logging.level);
    if let Some(e) = load_error {
        warn!(error = %e, "using default config");
    }
    info!(config = %config_path.display(), "starting");

    let output = Output {
        json: cli.json || config.display.json,
        show_state: cli.show_state || config.display.show_state,
    };

    let keypad = Keypad::standard();
    if cli.keys.is_empty() {
        run_interactive(&keypad, &output)
    } else {
        run_keys(&keypad, &cli.keys, &output)
    }
}
