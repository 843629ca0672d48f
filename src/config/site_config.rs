use crate::config::content::{Links, Project, Skill};
use crate::error::*;
use arc_swap::{ArcSwap, Guard};
use notify::{Error as NotifyError, Event, RecommendedWatcher, RecursiveMode, Watcher};
use serde::Deserialize;
use snafu::ResultExt;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::log::{error, info};

pub const CONFIG_PATH: &str = "./config.yml";

static CONFIG: OnceLock<ArcSwap<SiteConfig>> = OnceLock::new();

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub handle: String,
    pub birth_year: Option<i32>,
    /// `${age}` is replaced with the age in the year being rendered.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub links: Links,
}

impl SiteConfig {
    pub fn description_for_year(&self, year: i32) -> String {
        match self.birth_year {
            Some(birth_year) => self
                .description
                .replace("${age}", &(year - birth_year).to_string()),
            None => self.description.clone(),
        }
    }

    fn store(config: SiteConfig) {
        CONFIG
            .get_or_init(|| ArcSwap::from_pointee(SiteConfig::default()))
            .store(Arc::new(config));
    }

    fn reload() {
        let result = Self::load(CONFIG_PATH).map(Self::store);

        match result {
            Ok(_) => info!("Site config reloaded successfully."),
            Err(e) => error!("Failed to reload site config: {e}. Keeping existing config."),
        }
    }

    pub fn get() -> Guard<Arc<SiteConfig>> {
        CONFIG
            .get_or_init(|| ArcSwap::from_pointee(SiteConfig::default()))
            .load()
    }

    pub fn parse(contents: &str, path: &str) -> Result<Self, Error> {
        serde_norway::from_str::<Self>(contents).context(ConfigParseSnafu { path })
    }

    pub fn load(path: &str) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).context(ConfigReadSnafu { path })?;
        Self::parse(&contents, path)
    }

    pub fn load_initial() {
        let config = Self::load(CONFIG_PATH).unwrap_or_else(|e| {
            error!("Failed to load site config: {e}");
            Default::default()
        });

        Self::store(config);
    }

    pub fn watch() -> Result<RecommendedWatcher, NotifyError> {
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, NotifyError>| match result {
                Ok(event) if event.kind.is_modify() => {
                    info!("{CONFIG_PATH} changed, reloading site config...");
                    SiteConfig::reload();
                }
                Ok(_) => {}
                Err(e) => error!("Site config watcher failed: {e}"),
            },
            notify::Config::default(),
        )?;
        watcher.watch(Path::new(CONFIG_PATH), RecursiveMode::NonRecursive)?;

        Ok(watcher)
    }
}
