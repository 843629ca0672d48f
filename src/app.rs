use crate::error::*;
use crate::site::render::PageRenderer;
use snafu::ResultExt;
use std::env;
use std::sync::Arc;

#[derive(Clone)]
pub struct App {
    pub https: reqwest::Client,
    pub api_url: String,
    pub pages: Arc<PageRenderer>,
}

impl App {
    pub fn from_env() -> Result<Self, Error> {
        let api_url = env::var("API_URL").context(MissingEnvVarSnafu { name: "API_URL" })?;

        Self::new(api_url)
    }

    pub fn new(api_url: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            https: reqwest::Client::new(),
            api_url: api_url.into(),
            pages: Arc::new(PageRenderer::new()?),
        })
    }
}
