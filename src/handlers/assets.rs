//! Static client assets
//!
//! In production the built client is served from disk, and any route that
//! matches neither an API endpoint nor a file falls back to `index.html`
//! so client-side routes survive a full page reload.

use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Build the static asset service with single-page-application fallback
pub fn static_assets(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}
