use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::{Settings, StoreBackend};
use core_types::{MarksDraft, MarksRecord};
use marks::MarksService;
use std::net::IpAddr;
use std::path::PathBuf;

/// The main entry point for the marks registry.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = configuration::read_settings(cli.config.as_deref())
        .context("Failed to load settings")?;
    let _log_guard = configuration::init_tracing(&settings.logging);

    // `serve` validates after applying its command-line overrides.
    if !matches!(cli.command, Commands::Serve(_)) {
        settings.validate()?;
    }

    match cli.command {
        Commands::Serve(args) => handle_serve(args, settings).await,
        Commands::Migrate => handle_migrate(settings).await,
        Commands::List(args) => handle_list(args, settings).await,
        Commands::Add(args) => handle_add(args, settings).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Records and retrieves student examination marks.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML settings file (defaults to ./config.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API and the marks UI.
    Serve(ServeArgs),
    /// Apply database migrations and exit.
    Migrate,
    /// Print stored marks.
    List(ListArgs),
    /// Store one marks record.
    Add(AddArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Address to bind, overriding `server.host`.
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to bind, overriding `server.port`.
    #[arg(long)]
    port: Option<u16>,

    /// Store backend, overriding `database.backend`.
    #[arg(long, value_enum)]
    backend: Option<StoreBackend>,
}

#[derive(Parser)]
struct ListArgs {
    /// Only show records with exactly this roll number.
    #[arg(long)]
    roll_number: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct AddArgs {
    #[arg(long)]
    roll_number: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    grade: String,
    #[arg(long)]
    section: String,
    #[arg(long)]
    subject: String,
    #[arg(long, allow_negative_numbers = true)]
    marks: f64,
}

impl From<AddArgs> for MarksDraft {
    fn from(args: AddArgs) -> Self {
        MarksDraft {
            roll_number: Some(args.roll_number),
            name: Some(args.name),
            grade: Some(args.grade),
            section: Some(args.section),
            subject: Some(args.subject),
            marks: Some(args.marks),
        }
    }
}

// ==============================================================================
// Command Handlers
// ==============================================================================

async fn handle_serve(args: ServeArgs, mut settings: Settings) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(backend) = args.backend {
        settings.database.backend = backend;
    }
    settings.validate()?;

    web_server::run_server(settings).await
}

async fn handle_migrate(settings: Settings) -> anyhow::Result<()> {
    if settings.database.backend != StoreBackend::Postgres {
        bail!("Migrations only apply to the postgres backend");
    }
    let pool = database::connect(&settings.database).await?;
    database::run_migrations(&pool).await?;
    pool.close().await;
    tracing::info!("Migrations applied.");
    Ok(())
}

async fn handle_list(args: ListArgs, settings: Settings) -> anyhow::Result<()> {
    let service = open_service(&settings).await?;
    let result = service.get_marks_data(args.roll_number.as_deref()).await;
    service.shutdown().await;
    let records = result?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{}", render_table(&records));
    }
    Ok(())
}

async fn handle_add(args: AddArgs, settings: Settings) -> anyhow::Result<()> {
    let new_marks = MarksDraft::from(args)
        .validate()
        .context("Invalid input")?;

    let service = open_service(&settings).await?;
    let result = service.add_marks(new_marks).await;
    service.shutdown().await;

    println!("Stored marks record {}", result?);
    Ok(())
}

async fn open_service(settings: &Settings) -> anyhow::Result<MarksService> {
    let store = database::open_store(&settings.database).await?;
    Ok(MarksService::new(store))
}

/// Renders records as a terminal table, one row per record in storage order.
fn render_table(records: &[MarksRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Roll number", "Name", "Grade", "Section", "Subject", "Marks", "Created",
    ]);
    for record in records {
        table.add_row(vec![
            record.roll_number.clone(),
            record.name.clone(),
            record.grade.clone(),
            record.section.clone(),
            record.subject.clone(),
            record.marks.to_string(),
            record.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }
    table
}
