use anyhow::{Context, bail};
use api_client::{DEFAULT_API_URL, DeportesClient, Page, PageState, Theme, load_page};
use clap::{Parser, Subcommand};
use configuration::Settings;
use database::{DbRepository, SportsRepository};

mod render;

/// The main entry point for the Deportes application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // `.env`, `deportes.toml` and the environment, in that order of precedence.
    let settings = configuration::load_config().context("Failed to load configuration")?;
    let _guard = configuration::init_tracing(&settings.log)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve => web_server::run_server(&settings).await,
        Commands::Migrate => handle_migrate(&settings).await,
        Commands::CheckDb => handle_check_db(&settings).await,
        Commands::Browse(args) => handle_browse(args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Sports information service: REST API, database tooling and a terminal browser.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the REST API server.
    Serve,
    /// Apply the database migrations and exit.
    Migrate,
    /// Check that the configured database is reachable.
    CheckDb,
    /// Load a client page from a running server and print it.
    Browse(BrowseArgs),
}

#[derive(Parser)]
struct BrowseArgs {
    /// The page path, e.g. "/", "/teams/2", "/soccerteams", "/clubs/4", "/players/7".
    #[arg(default_value = "/")]
    path: String,

    /// Root URL of the API server.
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Rendering theme: "light" or "dark".
    #[arg(long, default_value = "light")]
    theme: Theme,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_migrate(settings: &Settings) -> anyhow::Result<()> {
    let db_pool = database::connect(&settings.database)
        .await
        .context("Database connection failed")?;
    database::run_migrations(&db_pool).await?;
    tracing::info!("Migrations applied.");
    println!("Migrations applied.");
    Ok(())
}

async fn handle_check_db(settings: &Settings) -> anyhow::Result<()> {
    let db_pool = database::connect(&settings.database)
        .await
        .context("Database connection failed")?;
    DbRepository::new(db_pool)
        .ping()
        .await
        .context("Database connection failed")?;
    tracing::info!("Database connected successfully");
    println!("Database connected successfully");
    Ok(())
}

async fn handle_browse(args: BrowseArgs) -> anyhow::Result<()> {
    let Some(page) = Page::parse(&args.path) else {
        bail!("Unknown page {:?}", args.path);
    };
    let client = DeportesClient::new(&args.api_url)?;

    tracing::debug!(path = %page.path(), api = %client.base_url(), "Loading page.");
    match load_page(&client, &page).await {
        PageState::Ready(view) => {
            println!("{}", render::render_page(&view, args.theme));
            Ok(())
        }
        PageState::Failed(message) => bail!("Error: {message}"),
        PageState::Loading => bail!("Page {} did not finish loading", page.path()),
    }
}
