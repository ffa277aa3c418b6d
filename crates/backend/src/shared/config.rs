use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub magento: MagentoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MagentoConfig {
    /// Базовый URL Magento
    pub endpoint: String,

    /// Пользователь API
    pub api_user: String,

    /// Ключ API
    pub api_key: String,

    /// Размер группы записей на один вызов Inventory API
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    /// Логировать каждую сформированную запись
    #[serde(default)]
    pub debug: bool,
}

fn default_max_connections() -> usize {
    50
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[magento]
endpoint = "http://localhost/magento"
api_user = "exporter"
api_key = ""
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}
