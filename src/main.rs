use crate::app::App;
use crate::config::AppConfig;
use crate::db::connection::init_db;
use crate::router::respond;
use astra::{Request, Server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod content;
mod db;
mod domain;
mod errors;
mod handlers;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app = App::new(config);

    if let Err(e) = init_db(&app.db, &app.config.schema_path) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    let addr = app.config.bind_addr;
    info!(
        %addr,
        cms_url = app.config.cms_url.as_deref().unwrap_or("local store"),
        "starting server"
    );

    let server = Server::bind(&addr).max_workers(app.config.max_workers);

    let result = server.serve(move |req: Request, _info| respond(req, &app));

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
