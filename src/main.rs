use alljob::config::Config;
use alljob::ui::{make_config, App};
use alljob::AppContext;
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            error!("Set RAPIDAPI_KEY (and optionally RAPIDAPI_HOST) in the environment or a .env file");
            std::process::exit(1);
        }
    };

    info!("Starting All-Job");

    dioxus::LaunchBuilder::new()
        .with_cfg(make_config())
        .with_context(AppContext::new(&config))
        .launch(App);
}
