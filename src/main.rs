use astra::Server;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use crate::responses::html_error_response;
use crate::router::handle;
use crate::store::{init_store, Database};

mod domain;
mod errors;
mod responses;
mod router;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db_path = std::env::var("PORTAL_DB").unwrap_or_else(|_| "portal.sqlite3".into());
    let db = Database::new(db_path);

    if let Err(e) = init_store(&db, "sql/schema.sql") {
        tracing::error!("store initialization failed: {e}");
        std::process::exit(1);
    }

    let addr_raw = std::env::var("PORTAL_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into());
    let addr: SocketAddr = match addr_raw.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("invalid PORTAL_ADDR '{addr_raw}': {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("listening on http://{addr}");
    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
    }
}
