//! campus-life command-line host.
//!
//! Plays the role of the page: loads the store, renders the three panels and
//! drives the debounced search from stdin.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use log::debug;

use campuslife_core::render::{CLUBS_MOUNT, EVENTS_MOUNT, ROOMS_MOUNT};
use campuslife_core::{
    default_log_level, escape_html, Activation, AppConfig, CampusLife, Document, ReadPolicy,
    StoreLocation,
};

#[derive(Parser)]
#[command(name = "campuslife", version)]
#[command(about = "Campus events, clubs and study rooms with type-as-you-search", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// SQLite database file (defaults to an in-memory store)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Directory holding the default database file
    #[arg(long, global = true, conflicts_with = "db")]
    data_dir: Option<PathBuf>,

    /// Absolute directory for rolling log files (defaults to stderr)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Quiet period before a search runs, in milliseconds
    #[arg(long, global = true, default_value_t = 300)]
    debounce_ms: u64,

    /// reload|cache
    #[arg(long, global = true, default_value = "reload")]
    read_policy: ReadPolicy,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rendered page after load
    Render {
        /// Search term applied before printing
        #[arg(short, long)]
        term: Option<String>,
    },

    /// Read search input from stdin, one value per line
    Search {
        /// Print full HTML instead of a per-panel summary
        #[arg(long)]
        html: bool,
    },

    /// Print TEXT with markup characters escaped
    Escape { text: String },
}

impl GlobalArgs {
    fn to_config(&self) -> AppConfig {
        let config = AppConfig {
            store: self
                .db
                .clone()
                .map_or(StoreLocation::InMemory, StoreLocation::File),
            debounce: Duration::from_millis(self.debounce_ms),
            read_policy: self.read_policy,
            log_level: self
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: self.log_dir.clone(),
        };
        match &self.data_dir {
            Some(dir) => config.with_data_dir(dir),
            None => config,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Escape { text } => println!("{}", escape_html(text)),
        Commands::Render { term } => {
            let config = cli.global.to_config();
            let mut page = start_page(&config)?;
            if let Some(term) = term {
                run_search_now(&mut page, &term, config.debounce);
            }
            print!("{}", page.document().to_html());
        }
        Commands::Search { html } => {
            let mut page = start_page(&cli.global.to_config())?;
            search_loop(&mut page, html)?;
        }
    }

    Ok(())
}

fn start_page(config: &AppConfig) -> Result<CampusLife, String> {
    config.init_logging()?;
    let mut page = CampusLife::new(config, Document::campus_page().shared());
    page.load();
    Ok(page)
}

fn run_search_now(page: &mut CampusLife, raw: &str, debounce: Duration) {
    let now = Instant::now();
    page.activate_search(Activation::Focus);
    page.input(raw, now);
    page.poll(now + debounce);
}

enum InputEvent {
    Line(String),
    Closed,
}

fn search_loop(page: &mut CampusLife, html: bool) -> io::Result<()> {
    let (tx, rx) = mpsc::channel::<InputEvent>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(InputEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(InputEvent::Closed);
    });

    let mut out = io::stdout().lock();
    drive_search(page, &rx, &mut out, html)
}

/// Renders once, then re-renders after every debounced search until input
/// closes. A search still pending at close is run before returning.
fn drive_search(
    page: &mut CampusLife,
    rx: &Receiver<InputEvent>,
    out: &mut impl Write,
    html: bool,
) -> io::Result<()> {
    print_page(out, page, html)?;
    let mut closed = false;

    loop {
        let event = match page.next_deadline() {
            Some(deadline) => {
                let wait = deadline.saturating_duration_since(Instant::now());
                match rx.recv_timeout(wait) {
                    Ok(event) => Some(event),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => Some(InputEvent::Closed),
                }
            }
            None if closed => break,
            None => Some(rx.recv().unwrap_or(InputEvent::Closed)),
        };

        match event {
            Some(InputEvent::Line(value)) => {
                if page.activate_search(Activation::Focus) {
                    debug!("event=cli_input module=cli status=ok activated=true");
                }
                page.input(value, Instant::now());
            }
            Some(InputEvent::Closed) => {
                // Let a pending search finish before exiting.
                closed = true;
                if let Some(deadline) = page.next_deadline() {
                    thread::sleep(deadline.saturating_duration_since(Instant::now()));
                }
            }
            None => {}
        }

        if page.poll(Instant::now()).is_some() {
            print_page(out, page, html)?;
        }
    }

    Ok(())
}

fn print_page(out: &mut impl Write, page: &CampusLife, html: bool) -> io::Result<()> {
    let document = page.document();
    if html {
        write!(out, "{}", document.to_html())?;
        return out.flush();
    }

    writeln!(out, "search: {:?}", page.latest_term())?;
    for (label, selector) in [
        ("events", EVENTS_MOUNT),
        ("clubs", CLUBS_MOUNT),
        ("rooms", ROOMS_MOUNT),
    ] {
        let Some(mount) = document.mount(selector) else {
            continue;
        };
        if mount.shows_no_results() {
            writeln!(out, "  {label}: no matches")?;
        } else {
            writeln!(out, "  {label}: {} shown", mount.card_count())?;
        }
    }
    out.flush()
}
