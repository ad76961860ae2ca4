use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use groupie_search::app::App;
use groupie_search::config::{self, Config};
use groupie_search::logging::{self, LogDestination};
use groupie_search::markup::render_suggestions_html;
use groupie_search::search::{SearchClient, detail_path, detail_url, resolve_url};
use groupie_search::worker::spawn_worker;

/// Search-as-you-type artist finder
///
/// Prints the detail page URL of the picked suggestion on exit.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Origin of the search service
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Path of the search endpoint (e.g. /api/search or /search)
    #[arg(long, value_name = "PATH")]
    endpoint: Option<String>,

    /// Quiet period after the last keystroke before searching
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Config file (default: ~/.config/groupie-search/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run a single search and print the matches instead of starting the UI
    #[arg(long, value_name = "QUERY")]
    once: Option<String>,

    /// With --once, print the matches as HTML option rows
    #[arg(long, requires = "once")]
    html: bool,
}

impl Args {
    /// Command-line flags win over the config file
    fn apply(&self, mut config: Config) -> Config {
        if let Some(base_url) = &self.base_url {
            config.search.base_url = base_url.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.search.endpoint = endpoint.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.search.debounce_ms = debounce_ms;
        }
        config
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(if args.once.is_some() {
        LogDestination::Stderr
    } else {
        LogDestination::File
    });

    let loaded = config::load_config(args.config.as_deref());
    let config = args.apply(loaded.config);

    if let Some(query) = &args.once {
        if let Some(warning) = &loaded.warning {
            eprintln!("warning: {}", warning);
        }
        return run_once(&config, query, args.html);
    }

    let client = SearchClient::new(&config.search)?;
    let mut app = App::new(&config)?;
    app.notice = loaded.warning;

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let worker = spawn_worker(client, request_rx, response_tx)?;
    app.set_channels(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(terminal, &mut app);

    // Restore terminal before anything is printed
    let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    ratatui::restore();

    app.close_channels();
    if worker.join().is_err() {
        log::warn!("Search worker panicked");
    }

    result?;

    if let Some(navigation) = app.navigation() {
        println!("{}", navigation.url);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Wait for input, but never past the debounce deadline
        if event::poll(app.poll_timeout(Instant::now()))? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Non-interactive search: one request, rows on stdout
fn run_once(config: &Config, query: &str, html: bool) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(());
    }

    let client = SearchClient::new(&config.search)?;
    let detail_endpoint = resolve_url(&config.search.base_url, &config.search.detail_path)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let items = runtime
        .block_on(client.fetch(query))
        .map_err(|e| eyre!("search failed: {}", e))?;

    if html {
        if !items.is_empty() {
            println!("{}", render_suggestions_html(&items, &detail_endpoint));
        }
        return Ok(());
    }

    for item in &items {
        let url = detail_url(&detail_endpoint, &item.artist_id);
        println!("{}\t{}\t{}", item.text, item.kind, detail_path(&url));
    }

    Ok(())
}
