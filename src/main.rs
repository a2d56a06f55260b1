use clap::{Parser, ValueEnum};
use color_eyre::Result;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::DefaultTerminal;
use std::io::{Write, stderr, stdout};

use scrystats::config::{self, Config};
use scrystats::fetch::{FetchOptions, fetch_blocking};
use scrystats::report::{render_json, render_plain};
use scrystats::{App, SearchTarget, StatsReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Interactive popup
    Tui,
    /// Plain text on stdout
    Plain,
    /// Pretty JSON on stdout
    Json,
}

/// Frequency statistics for Scryfall card searches
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Frequency statistics for Scryfall card searches in a terminal popup"
)]
struct Args {
    /// Search query (e.g. 't:goblin cmc<=2') or a scryfall.com/search URL
    input: Option<String>,

    /// Stop after this many result pages
    #[arg(long)]
    max_pages: Option<usize>,

    /// Pause before every API request, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Entries shown per statistics section
    #[arg(long)]
    top: Option<usize>,

    /// Scryfall `unique` mode (cards, art, prints)
    #[arg(long)]
    unique: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Tui)]
    format: Format,
}

fn main() -> Result<()> {
    // Writes to /tmp/scrystats-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/scrystats-debug.log")
            .expect("Failed to open /tmp/scrystats-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== SCRYSTATS DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let mut config_result = config::load_config();
    apply_overrides(&mut config_result.config, &args);

    let target = SearchTarget::from_input(args.input.as_deref().unwrap_or_default())?
        .with_unique(args.unique.clone());

    match args.format {
        Format::Tui => {
            let terminal = init_terminal()?;
            let app = App::new(target, &config_result.config);
            let result = run(terminal, app, config_result.warning);
            restore_terminal()?;
            result?;
        }
        Format::Plain | Format::Json => {
            if let Some(warning) = &config_result.warning {
                eprintln!("Warning: {}", warning);
            }
            let report = fetch_report(&target, &config_result.config)?;
            match args.format {
                Format::Json => println!("{}", render_json(&report)?),
                _ => println!("{}", render_plain(&report)),
            }
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("=== SCRYSTATS DEBUG SESSION ENDED ===");

    Ok(())
}

/// CLI flags win over the config file
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(max_pages) = args.max_pages {
        config.fetch.max_pages = max_pages;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.fetch.request_delay_ms = delay_ms;
    }
    if let Some(top) = args.top {
        config.display.top_n = top;
    }
}

/// Fetch everything up front, reporting progress on stderr
fn fetch_report(target: &SearchTarget, config: &Config) -> Result<StatsReport> {
    let url = target.api_url(&config.fetch.api_url)?;
    let outcome = fetch_blocking(&config.fetch, &url, |progress| {
        let mut err = stderr();
        let _ = write!(err, "\r{}", progress);
        let _ = err.flush();
    })?;
    eprintln!();

    let max_pages = FetchOptions::from_config(&config.fetch).max_pages;
    Ok(StatsReport::from_outcome(
        &target.query,
        &outcome,
        max_pages,
        config.display.top_n,
    ))
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_warning: Option<String>) -> Result<()> {
    if let Some(warning) = config_warning {
        app.notification.show_warning(&warning);
    }

    app.start();

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
