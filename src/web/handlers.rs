use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
};
use maud::Markup;

use super::templates::{self, Page};
use super::AppState;

/// Raw query pairs. A repeated key is kept as several pairs
pub type QueryPairs = Query<Vec<(String, String)>>;

/// First `letter` value, missing means no filter
pub fn first_letter(pairs: &[(String, String)]) -> &str {
    pairs
        .iter()
        .find(|(key, _)| key == "letter")
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

/// GET / - artist cards
pub async fn index(State(catalog): State<AppState>, Query(q): QueryPairs) -> Markup {
    let letter = first_letter(&q);
    let page = Page::new(&catalog, letter);
    log::debug!("index letter={:?}: {} artists", letter, page.artists.len());
    templates::index::render(&page)
}

/// GET /loc
pub async fn locations(State(catalog): State<AppState>, Query(q): QueryPairs) -> Markup {
    let letter = first_letter(&q);
    let page = Page::new(&catalog, letter);
    log::debug!("locations letter={:?}: {} artists", letter, page.artists.len());
    templates::locations::render(&page)
}

/// GET /dates
pub async fn dates(State(catalog): State<AppState>, Query(q): QueryPairs) -> Markup {
    let letter = first_letter(&q);
    let page = Page::new(&catalog, letter);
    log::debug!("dates letter={:?}: {} artists", letter, page.artists.len());
    templates::dates::render(&page)
}

/// GET /rel - also lists every relation record, filtered or not
pub async fn relations(State(catalog): State<AppState>, Query(q): QueryPairs) -> Markup {
    let letter = first_letter(&q);
    let page = Page::new(&catalog, letter);
    log::debug!("relations letter={:?}: {} artists", letter, page.artists.len());
    templates::relations::render(&page, &catalog.relations)
}

pub async fn not_found(uri: Uri) -> (StatusCode, &'static str) {
    log::debug!("no route for {}", uri);
    (StatusCode::NOT_FOUND, "404 Page Not Found")
}
