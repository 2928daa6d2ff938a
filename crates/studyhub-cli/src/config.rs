//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level studyhub configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyhubConfig {
    /// Base URL of the backend API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Bearer token for authenticated endpoints. Supports `${VAR}`
    /// references resolved from the environment.
    #[serde(default)]
    pub token: Option<String>,
    /// Identity whose likes and enrollments the client manages. Required
    /// for `--like` and `--set-status`.
    #[serde(default)]
    pub user_id: Option<String>,
}

fn default_api_url() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for StudyhubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            user_id: None,
        }
    }
}

/// Substitute `${VAR_NAME}` references with values from the environment.
/// Unset variables become empty; an unterminated reference is left as-is.
fn resolve_env_vars(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        match tail.find('}') {
            Some(end) => {
                out.push_str(&std::env::var(&tail[..end]).unwrap_or_default());
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Pick the config file to read: an explicit path must exist, otherwise
/// the first of `./studyhub.toml` and `~/.config/studyhub/config.toml`
/// that does.
fn locate_config(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(p) = explicit {
        if !p.exists() {
            anyhow::bail!("config file not found: {}", p.display());
        }
        return Ok(Some(p.to_path_buf()));
    }
    let candidates = [
        Some(PathBuf::from("studyhub.toml")),
        config_dir().map(|dir| dir.join("config.toml")),
    ];
    Ok(candidates.into_iter().flatten().find(|p| p.exists()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Environment variable overrides: `STUDYHUB_API_URL`, `STUDYHUB_TOKEN`,
/// `STUDYHUB_USER_ID`.
pub fn load_config_from(path: Option<&Path>) -> Result<StudyhubConfig> {
    let mut config = match locate_config(path)? {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<StudyhubConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => StudyhubConfig::default(),
    };

    // Apply env var overrides
    if let Ok(url) = std::env::var("STUDYHUB_API_URL") {
        config.api_url = url;
    }
    if let Ok(token) = std::env::var("STUDYHUB_TOKEN") {
        config.token = Some(token);
    }
    if let Ok(user_id) = std::env::var("STUDYHUB_USER_ID") {
        config.user_id = Some(user_id);
    }

    config.api_url = resolve_env_vars(&config.api_url);
    config.token = config.token.as_deref().map(resolve_env_vars);

    Ok(config)
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("studyhub"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_STUDYHUB_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_STUDYHUB_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_STUDYHUB_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("no_vars_here"), "no_vars_here");
    }

    #[test]
    fn resolve_env_vars_missing_is_empty() {
        assert_eq!(resolve_env_vars("${_STUDYHUB_NO_SUCH_VAR}"), "");
    }

    #[test]
    fn resolve_env_vars_unterminated_reference_is_kept() {
        assert_eq!(resolve_env_vars("token-${UNCLOSED"), "token-${UNCLOSED");
    }

    #[test]
    fn load_explicit_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
api_url = "https://studyhub.example.com/api"
token = "abc123"
user_id = "u1"
"#
        )
        .unwrap();

        let config = load_config_from(Some(file.path())).unwrap();
        assert_eq!(config.api_url, "https://studyhub.example.com/api");
        assert_eq!(config.token.as_deref(), Some("abc123"));
        assert_eq!(config.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn token_env_reference_is_resolved() {
        std::env::set_var("_STUDYHUB_TEST_TOKEN", "secret");
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"token = "${{_STUDYHUB_TEST_TOKEN}}""#).unwrap();

        let config = load_config_from(Some(file.path())).unwrap();
        assert_eq!(config.token.as_deref(), Some("secret"));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/no/such/studyhub.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"user_id = "u1""#).unwrap();

        let config = load_config_from(Some(file.path())).unwrap();
        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert!(config.token.is_none());
    }
}
