use std::path::PathBuf;

// This main function is the entry point when running `cargo run -p web-server`.
// It loads settings (optionally from the path given as the first argument),
// installs tracing, and hands over to `run_server`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = configuration::load_settings(config_path.as_deref())?;
    let _log_guard = configuration::init_tracing(&settings.logging);

    web_server::run_server(settings).await
}
