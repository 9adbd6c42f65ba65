use crate::config::AppConfig;
use crate::crm::CrmClient;
use crate::pdf::images::ImageFetcher;
use crate::router::{handle, AppCtx};
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod config;
mod crm;
mod domain;
mod errors;
mod pdf;
mod responses;
mod router;
mod share;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = AppConfig::from_env();

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("❌ Invalid BIND_ADDR {:?}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };

    let crm = match CrmClient::new(config.crm_base_url.clone(), config.entity_type_id) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Failed to build CRM client: {e}");
            std::process::exit(1);
        }
    };

    let images = match ImageFetcher::new(config.image_proxy_url.clone()) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("❌ Failed to build image fetcher: {e}");
            std::process::exit(1);
        }
    };

    let ctx = Arc::new(AppCtx {
        config,
        crm,
        images,
    });

    println!("Starting server at http://{addr}");
    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
