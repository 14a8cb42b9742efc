use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wanted::api::HttpTransport;
use wanted::config::Config;
use wanted::token_store;
use wanted::ui::{make_config, App, AppContext};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let token = config.api_token.clone().or_else(token_store::retrieve_token);
    if token.is_none() {
        info!("No API token configured, sign in from the home page");
    }

    let http = match HttpTransport::new(&config.api_base_url, token, config.request_timeout) {
        Ok(http) => http,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let context = AppContext {
        config,
        http: Arc::new(http),
    };

    info!("Starting Wanted desktop client");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(context)
        .launch(App);
}
