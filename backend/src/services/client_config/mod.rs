//! # Client Configuration Service
//!
//! Publishes the settings the SPA needs at run time, currently only the base
//! URL of the remote scholarship API. The browser fetches `/config.json` once
//! at start-up; the host holds no scholarship data itself.

use actix_web::web::{self, get};
use actix_web::{HttpResponse, Resource, Responder};
use common::config::ClientConfig;

const CONFIG_PATH: &str = "/config.json";

/// `GET /config.json` → `{"apiBaseUrl": "..."}`.
pub fn configure_routes() -> Resource {
    web::resource(CONFIG_PATH).route(get().to(process))
}

async fn process(config: web::Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}
