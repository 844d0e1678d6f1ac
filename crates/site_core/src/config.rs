use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, Context};
use serde::Deserialize;
use shared::content::{OwnerProfile, SocialLink};
use url::Url;

pub const DEFAULT_SETTINGS_FILE: &str = "portfolio.toml";
const DEFAULT_FORM_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbyl2Fi8q5JafssUQgR8JfqYgd1Xujk8DbTjkmGYhN2s1noJU4f1JMzENHELmVyE5WM9fA/exec";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteSettings {
    pub form_endpoint: Url,
    pub social_links: Vec<SocialLink>,
    /// `None` waits on the relay indefinitely.
    pub submit_timeout_secs: Option<u64>,
    pub owner: OwnerProfile,
}

impl SiteSettings {
    pub fn submit_timeout(&self) -> Option<Duration> {
        self.submit_timeout_secs.map(Duration::from_secs)
    }
}

fn builtin_url(raw: &str) -> Url {
    Url::parse(raw).expect("built-in urls are valid")
}

impl Default for SiteSettings {
    fn default() -> Self {
        let owner = OwnerProfile::default();
        Self {
            form_endpoint: builtin_url(DEFAULT_FORM_ENDPOINT),
            social_links: vec![
                SocialLink::new("GitHub", builtin_url("https://github.com")),
                SocialLink::new("LinkedIn", builtin_url("https://linkedin.com")),
                SocialLink::new("Email", builtin_url(&format!("mailto:{}", owner.email))),
            ],
            submit_timeout_secs: None,
            owner,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    form_endpoint: Option<String>,
    social_links: Option<Vec<SocialLink>>,
    submit_timeout_secs: Option<u64>,
    owner: Option<OwnerProfile>,
}

/// Defaults, then the TOML file, then `APP__*` environment overrides.
///
/// With `path == None` the file is `portfolio.toml` in the working directory
/// and may be absent. An explicit path must exist.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<SiteSettings> {
    let mut settings = SiteSettings::default();

    let (file_path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
    };
    if let Some(file_cfg) = read_settings_file(&file_path, required)? {
        apply_file(&mut settings, file_cfg)
            .with_context(|| format!("invalid settings in '{}'", file_path.display()))?;
    }

    apply_env(&mut settings, |name| std::env::var(name).ok())?;
    Ok(settings)
}

fn read_settings_file(path: &Path, required: bool) -> anyhow::Result<Option<SettingsFile>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    };
    let parsed = toml::from_str::<SettingsFile>(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    Ok(Some(parsed))
}

fn apply_file(settings: &mut SiteSettings, file_cfg: SettingsFile) -> anyhow::Result<()> {
    if let Some(v) = file_cfg.form_endpoint {
        settings.form_endpoint = parse_endpoint(&v)?;
    }
    if let Some(v) = file_cfg.social_links {
        settings.social_links = v;
    }
    if let Some(v) = file_cfg.submit_timeout_secs {
        settings.submit_timeout_secs = (v > 0).then_some(v);
    }
    if let Some(v) = file_cfg.owner {
        settings.owner = v;
    }
    Ok(())
}

pub(crate) fn apply_env(
    settings: &mut SiteSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = lookup("APP__FORM_ENDPOINT") {
        settings.form_endpoint = parse_endpoint(&v).context("invalid APP__FORM_ENDPOINT")?;
    }
    if let Some(v) = lookup("APP__SUBMIT_TIMEOUT_SECS") {
        let secs = v
            .trim()
            .parse::<u64>()
            .with_context(|| format!("invalid APP__SUBMIT_TIMEOUT_SECS '{v}'"))?;
        settings.submit_timeout_secs = (secs > 0).then_some(secs);
    }
    Ok(())
}

fn parse_endpoint(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid form endpoint '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!(
            "form endpoint '{raw}' must use http or https, not '{other}'"
        )),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
