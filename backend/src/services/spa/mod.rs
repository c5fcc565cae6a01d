//! # Embedded SPA Service
//!
//! Serves the Trunk bundle compiled into the binary. Any path that is not a
//! bundled file gets `index.html`, so client-side routes such as
//! `/admin/principal` survive a page reload.

use actix_web::{web, HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use mime_guess::{from_path, Mime};

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// The asset tree handlers read from.
#[derive(Clone, Copy)]
pub struct Assets(&'static Dir<'static>);

impl Assets {
    pub fn embedded() -> Self {
        Assets(&STATIC_DIR)
    }

    /// The file for `request_path` and its content type, falling back to
    /// `index.html`. `None` when the bundle has no index either.
    pub fn resolve(&self, request_path: &str) -> Option<(&'static File<'static>, Mime)> {
        let path = request_path.trim_start_matches('/');
        let file_path = if path.is_empty() { INDEX } else { path };

        match self.0.get_file(file_path) {
            Some(file) => Some((file, from_path(file_path).first_or_octet_stream())),
            None => self
                .0
                .get_file(INDEX)
                .map(|index| (index, mime_guess::mime::TEXT_HTML_UTF_8)),
        }
    }
}

pub async fn process(req: HttpRequest, assets: web::Data<Assets>) -> HttpResponse {
    match assets.resolve(req.path()) {
        Some((file, mime)) => HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.contents().to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}
