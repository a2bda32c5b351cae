use crate::Cli;
use crate::error::ConfigError;
use crate::llm::{ollama, openai};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Which summarizer runs, with what it needs to authenticate.
#[derive(Clone, PartialEq, Eq)]
pub enum Backend {
    Ollama,
    OpenAi { api_key: String },
    Noop,
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Ollama => "ollama",
            Backend::OpenAi { .. } => "openai",
            Backend::Noop => "none",
        }
    }
}

// Keeps the API key out of debug logs.
impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Backend names accepted on the command line, in env, and in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackendKind {
    Ollama,
    OpenAi,
    Noop,
}

impl BackendKind {
    fn parse(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_lowercase().as_str() {
            "ollama" => Ok(BackendKind::Ollama),
            "openai" => Ok(BackendKind::OpenAi),
            "none" => Ok(BackendKind::Noop),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }

    fn default_model(self) -> &'static str {
        match self {
            BackendKind::Ollama => ollama::DEFAULT_MODEL,
            BackendKind::OpenAi => openai::DEFAULT_MODEL,
            BackendKind::Noop => "none",
        }
    }

    fn default_base_url(self) -> &'static str {
        match self {
            BackendKind::Ollama => ollama::DEFAULT_BASE_URL,
            BackendKind::OpenAi => openai::DEFAULT_BASE_URL,
            BackendKind::Noop => "",
        }
    }
}

/// Final resolved configuration for commit-pilot.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    pub model: String,
    pub base_url: String,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--backend`, `--model`, `--base-url`, `--api-key`, `--no-model`)
    ///   2. Env vars `COMMIT_PILOT_*` (plus `OLLAMA_HOST`, `OPENAI_API_KEY`)
    ///   3. TOML `~/.config/commit-pilot.toml`
    ///   4. Per-backend defaults
    pub fn from_sources(cli: &Cli) -> Result<Self, ConfigError> {
        let file_cfg = load_file_config()?.unwrap_or_default();
        Self::resolve(cli, |key| env::var(key).ok(), file_cfg)
    }

    fn resolve(
        cli: &Cli,
        env_var: impl Fn(&str) -> Option<String>,
        file_cfg: FileConfig,
    ) -> Result<Self, ConfigError> {
        let model = cli
            .model
            .clone()
            .or_else(|| env_var("COMMIT_PILOT_MODEL"))
            .or(file_cfg.model);

        let model_disabled = model
            .as_deref()
            .is_some_and(|m| m.trim().eq_ignore_ascii_case("none"));

        let kind = if cli.no_model || model_disabled {
            BackendKind::Noop
        } else {
            match cli
                .backend
                .clone()
                .or_else(|| env_var("COMMIT_PILOT_BACKEND"))
                .or(file_cfg.backend)
            {
                Some(name) => BackendKind::parse(&name)?,
                None => BackendKind::Ollama,
            }
        };

        let model = model.unwrap_or_else(|| kind.default_model().to_string());

        let backend_env_url = match kind {
            BackendKind::Ollama => env_var("OLLAMA_HOST"),
            _ => None,
        };
        let base_url = cli
            .base_url
            .clone()
            .or_else(|| env_var("COMMIT_PILOT_BASE_URL"))
            .or(backend_env_url)
            .or(file_cfg.base_url)
            .map(|url| with_scheme(&url))
            .unwrap_or_else(|| kind.default_base_url().to_string());

        // clap already folds OPENAI_API_KEY into --api-key.
        let openai_api_key = cli
            .api_key
            .clone()
            .or_else(|| env_var("OPENAI_API_KEY"))
            .or(file_cfg.openai_api_key)
            .filter(|k| !k.trim().is_empty());

        let backend = match kind {
            BackendKind::Ollama => Backend::Ollama,
            BackendKind::Noop => Backend::Noop,
            BackendKind::OpenAi => Backend::OpenAi {
                api_key: openai_api_key.ok_or(ConfigError::MissingApiKey)?,
            },
        };

        Ok(Config {
            backend,
            model,
            base_url,
        })
    }
}

/// `OLLAMA_HOST` is commonly given as `host:port`.
fn with_scheme(url: &str) -> String {
    let url = url.trim();
    if url.contains("://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    pub backend: Option<String>,
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub openai_api_key: Option<String>,
}

/// Return `~/.config/commit-pilot.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("commit-pilot.toml"))
}

fn load_file_config() -> Result<Option<FileConfig>, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(None);
    };
    let Ok(data) = fs::read_to_string(&path) else {
        return Ok(None);
    };

    log::debug!("Loading config from {}", path.display());
    parse_file_config(&data, &path).map(Some)
}

fn parse_file_config(data: &str, path: &std::path::Path) -> Result<FileConfig, ConfigError> {
    toml::from_str::<FileConfig>(data).map_err(|source| ConfigError::InvalidFile {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;
    use std::path::Path;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["commit-pilot"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn bare_cli() -> Cli {
        // Avoid picking up OPENAI_API_KEY from the test environment via clap.
        Cli::default()
    }

    #[test]
    fn defaults_to_local_ollama() {
        let cfg = Config::resolve(&bare_cli(), env_of(&[]), FileConfig::default()).unwrap();
        assert_eq!(cfg.backend, Backend::Ollama);
        assert_eq!(cfg.model, ollama::DEFAULT_MODEL);
        assert_eq!(cfg.base_url, ollama::DEFAULT_BASE_URL);
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let file = || FileConfig {
            model: Some("from-file".into()),
            ..FileConfig::default()
        };
        let env = env_of(&[("COMMIT_PILOT_MODEL", "from-env")]);

        let cfg = Config::resolve(&cli(&["--model", "from-cli"]), &env, file()).unwrap();
        assert_eq!(cfg.model, "from-cli");

        let cfg = Config::resolve(&bare_cli(), &env, file()).unwrap();
        assert_eq!(cfg.model, "from-env");

        let cfg = Config::resolve(&bare_cli(), env_of(&[]), file()).unwrap();
        assert_eq!(cfg.model, "from-file");
    }

    #[test]
    fn model_none_disables_backend() {
        let cfg = Config::resolve(&cli(&["--model", "None"]), env_of(&[]), FileConfig::default())
            .unwrap();
        assert_eq!(cfg.backend, Backend::Noop);

        let cfg = Config::resolve(&cli(&["--no-model"]), env_of(&[]), FileConfig::default())
            .unwrap();
        assert_eq!(cfg.backend, Backend::Noop);
    }

    #[test]
    fn ollama_host_without_scheme_gets_http() {
        let env = env_of(&[("OLLAMA_HOST", "127.0.0.1:11500")]);
        let cfg = Config::resolve(&bare_cli(), env, FileConfig::default()).unwrap();
        assert_eq!(cfg.base_url, "http://127.0.0.1:11500");
    }

    #[test]
    fn openai_backend_requires_key() {
        let file = FileConfig {
            backend: Some("openai".into()),
            ..FileConfig::default()
        };
        let err = Config::resolve(&bare_cli(), env_of(&[]), file).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));

        let env = env_of(&[("OPENAI_API_KEY", "sk-1")]);
        let file = FileConfig {
            backend: Some("openai".into()),
            ..FileConfig::default()
        };
        let cfg = Config::resolve(&bare_cli(), env, file).unwrap();
        assert_eq!(cfg.model, openai::DEFAULT_MODEL);
        assert_eq!(cfg.base_url, openai::DEFAULT_BASE_URL);
        assert_eq!(
            cfg.backend,
            Backend::OpenAi {
                api_key: "sk-1".into()
            }
        );
        assert_eq!(format!("{:?}", cfg.backend), "openai");
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let err = Config::resolve(&cli(&["--backend", "gpt"]), env_of(&[]), FileConfig::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownBackend(name) if name == "gpt"));
    }

    #[test]
    fn file_config_parses_and_reports_errors() {
        let path = Path::new("commit-pilot.toml");
        let cfg =
            parse_file_config("backend = \"ollama\"\nmodel = \"qwen2.5:0.5b\"\n", path).unwrap();
        assert_eq!(cfg.model.as_deref(), Some("qwen2.5:0.5b"));

        let err = parse_file_config("model = [", path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFile { .. }));
    }
}
