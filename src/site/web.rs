use crate::app::App;
use crate::config::site_config::SiteConfig;
use crate::error::Error;
use crate::stats::{StatLine, fetch_stats, load_stats};
use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use chrono::{Datelike, Utc};

pub fn router(app: App) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/stats", get(stats))
        .with_state(app)
}

pub async fn index(State(app): State<App>) -> Result<Html<String>, Error> {
    let stats = load_stats(&app).await;
    let site = SiteConfig::get();

    let page = app
        .pages
        .render_page(&site, stats.as_deref(), Utc::now().year())?;
    Ok(Html(page))
}

pub async fn stats(State(app): State<App>) -> Result<Json<Vec<StatLine>>, Error> {
    Ok(Json(fetch_stats(&app).await?))
}
