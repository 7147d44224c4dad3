use crate::app::cli::IncludesSnippetsArgs;
use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_NGINX_ROOT: &str = "/etc/nginx/";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub nginx_root: Option<String>,
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    pub conf: Option<PathBuf>,
    pub snippets_dir: Option<String>,
}

fn default_settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join("nginx_conf_utils")
            .join("settings.toml")
    })
}

/// Loads the settings file. A missing or unusable default file yields empty
/// settings; an explicitly requested one must exist and parse.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return read_settings(path);
    }

    match default_settings_path() {
        Some(path) if path.exists() => Ok(read_settings(&path).unwrap_or_else(|err| {
            log::warn!("Ignoring default settings: {:#}", err);
            Settings::default()
        })),
        _ => Ok(Settings::default()),
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read settings at {:?}", path))?;
    let settings: Settings =
        toml::from_str(&content).context(format!("Failed to parse {:?}", path))?;

    log::debug!("loaded settings from {:?}", path);
    Ok(settings)
}

/// CLI flags win over settings; conf and snippets dir must come from one of them.
pub fn resolve_config(args: IncludesSnippetsArgs, settings: Settings) -> Result<RuntimeConfig> {
    let conf = args
        .conf
        .or(settings.defaults.conf)
        .context("Missing --conf (no default in settings)")?;
    let snippets_dir = args
        .snippets_dir
        .or(settings.defaults.snippets_dir)
        .context("Missing --snippets-dir (no default in settings)")?;

    Ok(RuntimeConfig {
        conf,
        snippets_dir,
        nginx_root: settings
            .nginx_root
            .unwrap_or_else(|| DEFAULT_NGINX_ROOT.to_string()),
        verbose: args.verbose,
        explain: args.explain,
    })
}
