mod catalog;
mod error;
mod theme;
mod tui;

use std::{fs, io, path::PathBuf, process, time::Duration};

use catalog::{FetchController, FetchState, HttpSource, DEFAULT_ENDPOINT};
use clap::{Parser, Subcommand};
use error::{Error, Result};
use theme::{lookup, FileStore, ThemeId, ThemeManager};

#[derive(Parser)]
#[command(name = "catalog-tui")]
#[command(about = "Product catalog viewer with switchable themes")]
struct Cli {
    /// Catalog endpoint returning the product list as JSON
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Settings file holding the chosen theme
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Request timeout in seconds (0 disables it)
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive catalog viewer
    Tui,
    /// Fetch the catalog once and print the visible products
    Products {
        /// Number of pages to reveal (at least 1)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        pages: u64,
    },
    /// Inspect or change the persisted theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the active theme id
    Get,
    /// Persist a new theme id
    Set { id: String },
    /// List the registered themes
    List,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(matches!(cli.command, Commands::Tui)) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let store = FileStore::new(cli.settings.unwrap_or_else(FileStore::default_path));
    tracing::debug!("Settings at {}", store.path().display());
    let theme = ThemeManager::initialize(store);
    let timeout = (cli.timeout_secs > 0).then(|| Duration::from_secs(cli.timeout_secs));
    let source = HttpSource::new(cli.endpoint, timeout);

    let result = match cli.command {
        Commands::Tui => tui::run(theme, source).await,
        Commands::Products { pages } => print_products(&source, pages),
        Commands::Theme { action } => run_theme(theme, action),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, or to a file while the TUI owns the terminal.
fn init_logging(to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(
            "catalog_tui=info"
                .parse()
                .map_err(|e| Error::Io(io::Error::other(e)))?,
        )
        .from_env_lossy();

    if to_file {
        let dir = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("catalog-tui");
        fs::create_dir_all(&dir)?;
        let log_file = fs::File::create(dir.join("catalog-tui.log"))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }
    Ok(())
}

fn print_products(source: &HttpSource, pages: u64) -> Result<()> {
    tracing::info!("Fetching catalog from {}", source.endpoint());
    let mut controller = FetchController::new();
    controller.fetch_products(source);
    if let FetchState::Failure(e) = controller.state() {
        return Err(Error::Fetch(e.clone()));
    }

    for _ in 1..pages {
        controller.reveal_more();
    }
    for product in controller.visible_products() {
        println!("#{}  {}  {}", product.id, product.title, product.price_text());
    }
    println!(
        "showing {} of {}",
        controller.visible_products().len(),
        controller.total()
    );
    Ok(())
}

fn run_theme(mut manager: ThemeManager<FileStore>, action: ThemeAction) -> Result<()> {
    match action {
        ThemeAction::Get => println!("{}", manager.theme()),
        ThemeAction::Set { id } => {
            let id = manager.set_theme_named(&id)?;
            println!("{id} ({})", manager.descriptor().name);
        }
        ThemeAction::List => {
            for id in ThemeId::ALL {
                let marker = if id == manager.theme() { '*' } else { ' ' };
                let descriptor = lookup(id);
                println!(
                    "{marker} {id}  {}  {}",
                    descriptor.name,
                    descriptor.layout.kind.name()
                );
            }
        }
    }
    Ok(())
}
