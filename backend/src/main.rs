mod config;
mod services;

use crate::config::Config;
use crate::services::spa::Assets;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::load();
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, e);
            }
        });
    }

    info!("Server running at {}", url);
    info!("Scholarship API at {}", config.api_base_url);

    let client_config = web::Data::new(config.client());
    let assets = web::Data::new(Assets::embedded());

    HttpServer::new(move || {
        App::new()
            .app_data(client_config.clone())
            .app_data(assets.clone())
            .service(services::client_config::configure_routes())
            .default_service(web::route().to(services::spa::process))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
