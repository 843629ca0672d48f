use crate::error::*;
use crate::stats::normalize::RawCategories;
use serde::Deserialize;
use snafu::{ResultExt, ensure};

const USER_AGENT: &str = "portfolio-site (https://github.com/trimpsuz/portfolio)";

#[derive(Deserialize)]
struct StatsResponse {
    last_month: Period,
}

#[derive(Deserialize)]
struct Period {
    languages: RawCategories,
}

/// Single GET against the statistics endpoint; no retry, no timeout.
pub async fn fetch_languages(client: &reqwest::Client, url: &str) -> Result<RawCategories, Error> {
    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .context(ReqwestSnafu)?;

    let status = response.status();
    ensure!(status.is_success(), UpstreamStatusSnafu { status });

    let body = response.bytes().await.context(ReqwestSnafu)?;
    let stats =
        serde_json::from_slice::<StatsResponse>(&body).context(DeserializationErrorJsonSnafu)?;

    Ok(stats.last_month.languages)
}
