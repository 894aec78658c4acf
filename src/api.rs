//! Catalog fetch for the portal frontend

use arcadia_core::Catalog;
use gloo_net::http::Request;

/// Relative path of the catalog document, served next to the app.
pub const CATALOG_URL: &str = "./games.json";

/// Fetch and validate the game catalog.
///
/// Errors are stringified for display; the caller decides how to surface
/// them and whether to retain a previously loaded catalog.
pub async fn fetch_catalog() -> Result<Catalog, String> {
    let resp = Request::get(CATALOG_URL)
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP error: {}", resp.status()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| format!("failed to read response body: {e}"))?;

    Catalog::from_json(&body).map_err(|e| e.to_string())
}
