mod app;
mod collectors;
mod config;
mod error;
mod input;
mod models;
mod sampler;
mod ui;
mod util;

use app::App;
use anyhow::Result;
use clap::Parser;
use collectors::HostProvider;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sampler::{Platform, Sampler};
use std::io;
use std::panic;
use std::time::Duration;
use ui::theme::ThemeVariant;
use util::logging::{self, LogSink};

#[derive(Parser, Debug)]
#[command(name = "resmon", about = "CPU, memory and disk usage monitor", version)]
struct Cli {
    /// Pause between samples in milliseconds (overrides the config file)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Color theme for the chrome: default, nord, gruvbox
    #[arg(short = 't', long)]
    theme: Option<String>,

    /// Print one snapshot as JSON and exit
    #[arg(long, conflicts_with = "once")]
    json: bool,

    /// Print one snapshot as plain text and exit
    #[arg(long)]
    once: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (cfg, config_note) = config::Config::load();

    let interval_ms = cli
        .interval
        .map(|ms| ms.max(config::MIN_INTERVAL_MS))
        .unwrap_or_else(|| cfg.general.interval_ms());
    let interval = Duration::from_millis(interval_ms);

    if cli.config {
        if let Some(note) = &config_note {
            eprintln!("warning: {}", note);
        }
        return run_print_config(&cfg);
    }
    if cli.json || cli.once {
        logging::init_logging(&cfg.logging.level, LogSink::Stderr)?;
        if let Some(note) = &config_note {
            log::warn!("{}", note);
        }
        return run_one_shot(interval, cli.json, cfg.display.show_io);
    }

    // The TUI still runs without a log file; say so before the screen is taken over
    if let Some(path) = logging::log_file_path() {
        match logging::init_logging(&cfg.logging.level, LogSink::File(path.clone())) {
            Ok(()) => {
                if let Some(note) = &config_note {
                    log::warn!("{}", note);
                }
            }
            Err(e) => {
                eprintln!("resmon: logging disabled, cannot open {}: {}", path.display(), e);
                if let Some(note) = &config_note {
                    eprintln!("resmon: {}", note);
                }
            }
        }
    }

    let theme_name = cli.theme.as_deref().unwrap_or(&cfg.display.theme);
    let initial_theme = ThemeVariant::from_name(theme_name);

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let result = run(initial_theme, interval, cfg.display.show_io);
    restore_terminal()?;
    result
}

/// Two ticks one interval apart, so the printed snapshot carries I/O rates.
fn run_one_shot(interval: Duration, json: bool, show_io: bool) -> Result<()> {
    let mut provider = HostProvider::new();
    let mut sampler  = Sampler::new(&provider, Platform::current());

    let (_, first) = sampler.sample_tick(&mut provider, None);
    std::thread::sleep(interval);
    let (snap, _) = sampler.sample_tick(&mut provider, Some(first));

    if json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        print!("{}", util::report::generate(&snap, show_io));
    }
    Ok(())
}

fn run_print_config(cfg: &config::Config) -> Result<()> {
    let path = config::Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    let log_path = logging::log_file_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(none)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[general]");
    println!("  update_interval_ms = {}", cfg.general.update_interval_ms);
    println!();
    println!("[display]");
    println!("  theme   = {}", cfg.display.theme);
    println!("  show_io = {}", cfg.display.show_io);
    println!();
    println!("[logging]");
    println!("  level = {}", cfg.logging.level);
    println!("  file  = {}", log_path);
    Ok(())
}

fn run(initial_theme: ThemeVariant, interval: Duration, show_io: bool) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;

    let mut app = App::new(Box::new(HostProvider::new()), initial_theme, interval, show_io);
    app.run(&mut term)?;

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}
