use serde::Deserialize;
use skillhost_search::SearchSettings;
use skillhost_skills::BuiltinOptions;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Default config template created when no config exists
const DEFAULT_CONFIG: &str = r#"
[cli]
default_skill = "EchoSkill"
exit_commands = ["exit", "quit"]

[web_search]
max_results = 5

[search]
endpoint = "https://html.duckduckgo.com/html/"
# timeout_secs = 15

[summary]
max_items = 3

[logging]
level = "warn"  # trace, debug, info, warn, error
"#;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    pub default_skill: String,
    pub exit_commands: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_skill: "EchoSkill".to_string(),
            exit_commands: vec!["exit".to_string(), "quit".to_string()],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WebSearchConfig {
    pub max_results: usize,
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self { max_results: 5 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SummaryConfig {
    pub max_items: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { max_items: 3 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub cli: CliConfig,
    pub web_search: WebSearchConfig,
    pub search: SearchSettings,
    pub summary: SummaryConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.skillhost/skillhost.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".skillhost").join("skillhost.toml"))
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<Option<PathBuf>> {
        let Some(config_path) = Self::global_config_path() else {
            warn!("Could not find home directory, skipping global config");
            return Ok(None);
        };

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)?;
                eprintln!("Created config directory: {}", config_dir.display());
            }
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())?;
            eprintln!("Created default config: {}", config_path.display());
        }

        Ok(Some(config_path))
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.skillhost/skillhost.toml (auto-created if missing)
    /// 2. Local override: ./skillhost.toml (workspace, optional)
    /// 3. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut config_builder = config::Config::builder();

        // Layer 1: Global config
        if let Some(global_config_path) = Self::ensure_global_config()? {
            config_builder = config_builder.add_source(config::File::from(global_config_path));
        }

        let config_builder = config_builder
            // Layer 2: Local workspace config (optional override)
            .add_source(config::File::with_name("skillhost").required(false))
            // Layer 3: Environment variables with SKILLHOST__ prefix
            .add_source(
                config::Environment::with_prefix("SKILLHOST")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(" ")
                    .with_list_parse_key("cli.exit_commands"),
            );

        let config: Self = config_builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Options for the bundled skills
    pub fn builtin_options(&self) -> BuiltinOptions {
        BuiltinOptions {
            max_results: self.web_search.max_results,
            max_items: self.summary.max_items,
            search: self.search.clone(),
        }
    }
}
