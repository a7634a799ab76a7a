use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use config::{Config, ConfigError, File};
use reqwest::Url;
use serde::Deserialize;

use shopfind::app_dirs;
use shopfind::ui::theme;

use crate::cli::CliArgs;

/// Origin of the search collaborator when nothing else is configured. The
/// reference backend listens here.
const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    search: SearchSection,
    ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
    endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    input_title: Option<String>,
    initial_query: Option<String>,
    theme: Option<String>,
}

/// Fully resolved configuration handed to the workflow.
pub struct ResolvedConfig {
    pub endpoint: Url,
    pub input_title: Option<String>,
    pub initial_query: String,
    pub theme: Option<String>,
}

impl ResolvedConfig {
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Endpoint: {}", self.endpoint);
        println!(
            "  Theme: {}",
            self.theme.as_deref().unwrap_or("(default)")
        );
        if let Some(title) = &self.input_title {
            println!("  Prompt title: {title}");
        }
        if !self.initial_query.is_empty() {
            println!("  Initial query: {}", self.initial_query);
        }
    }
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("shopfind")
            .separator("__")
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".shopfind.toml"));
        files.push(current_dir.join("shopfind.toml"));
    }

    files
}

impl RawConfig {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(endpoint) = cli.endpoint.clone() {
            self.search.endpoint = Some(endpoint);
        }
        if let Some(title) = cli.title.clone() {
            self.ui.input_title = Some(title);
        }
        if let Some(query) = cli.initial_query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
    }

    fn resolve(self) -> Result<ResolvedConfig> {
        let raw_endpoint = self
            .search
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = parse_endpoint(&raw_endpoint)?;

        let theme = match self.ui.theme {
            Some(name) => Some(validate_theme(&name)?),
            None => None,
        };

        Ok(ResolvedConfig {
            endpoint,
            input_title: self.ui.input_title,
            initial_query: self.ui.initial_query.unwrap_or_default(),
            theme,
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("search endpoint must not be empty");
    }
    let url: Url = trimmed
        .parse()
        .map_err(|err| anyhow!("invalid search endpoint '{trimmed}': {err}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("search endpoint must use http or https, got '{other}'"),
    }
}

fn validate_theme(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if theme::by_name(trimmed).is_none() {
        bail!(
            "unknown theme '{trimmed}' (available: {})",
            theme::names().join(", ")
        );
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn bare_cli() -> CliArgs {
        use clap::Parser;
        CliArgs::parse_from(["shopfind", "--no-config"])
    }

    #[test]
    fn endpoint_defaults_to_the_reference_backend() {
        let resolved = load(&bare_cli()).unwrap();
        assert_eq!(resolved.endpoint.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn cli_endpoint_overrides_the_default() {
        use clap::Parser;
        let cli = CliArgs::parse_from([
            "shopfind",
            "--no-config",
            "--endpoint",
            "https://search.example.com",
        ]);
        let resolved = load(&cli).unwrap();
        assert_eq!(resolved.endpoint.as_str(), "https://search.example.com/");
    }

    #[test]
    fn config_file_supplies_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extra.toml");
        fs::write(
            &path,
            r#"
[search]
endpoint = "http://internal:9200"

[ui]
initial_query = "white sneakers"
theme = "light"
"#,
        )
        .unwrap();

        use clap::Parser;
        let cli = CliArgs::parse_from([
            "shopfind",
            "--no-config",
            "--config",
            path.to_str().unwrap(),
        ]);
        let resolved = load(&cli).unwrap();
        assert_eq!(resolved.endpoint.as_str(), "http://internal:9200/");
        assert_eq!(resolved.initial_query, "white sneakers");
        assert_eq!(resolved.theme.as_deref(), Some("light"));
    }

    #[test]
    fn rejects_non_http_endpoints() {
        assert!(parse_endpoint("ftp://host").is_err());
        assert!(parse_endpoint("").is_err());
        assert!(parse_endpoint("not a url").is_err());
    }

    #[test]
    fn rejects_unknown_themes() {
        assert!(validate_theme("slate").is_ok());
        assert!(validate_theme("nonexistent").is_err());
    }
}
