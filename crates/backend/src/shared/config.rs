use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub company: CompanyConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Built frontend bundle. Unknown GET paths answer with its index.html.
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            static_dir: "dist".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

/// Sender identity used in notification emails
#[derive(Debug, Deserialize, Clone)]
pub struct CompanyConfig {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: "Sobti Enterprises".into(),
            email: "sobtienterprises02@gmail.com".into(),
            phone: "+91 98120 52133".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AdminConfig {
    /// Bearer token for admin routes. Empty disables them.
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    /// Allowed frontend origin. Empty allows any origin.
    #[serde(default)]
    pub allowed_origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Insert the demo catalog when the product table is empty
    pub seed_demo: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { seed_demo: true }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[database]
path = "target/db/storefront.db"

[company]
name = "Sobti Enterprises"
email = "sobtienterprises02@gmail.com"
phone = "+91 98120 52133"

[admin]
token = ""

[cors]
allowed_origin = ""

[catalog]
seed_demo = true
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/storefront.db");
        assert_eq!(config.server.port, 3000);
        assert!(config.admin.token.is_empty());
        assert!(config.catalog.seed_demo);
    }

    #[test]
    fn test_minimal_config_uses_section_defaults() {
        let config = parse_config("[database]\npath = \"/tmp/x.db\"\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.company.name, "Sobti Enterprises");
        assert!(config.cors.allowed_origin.is_empty());
        assert_eq!(
            get_database_path(&config).unwrap(),
            PathBuf::from("/tmp/x.db")
        );
    }

    #[test]
    fn test_partial_server_section_keeps_other_defaults() {
        let config =
            parse_config("[server]\nport = 8081\n[database]\npath = \":memory:\"\n").unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.static_dir, "dist");
    }

    #[test]
    fn test_missing_database_section_is_an_error() {
        assert!(parse_config("[server]\nhost = \"h\"\nport = 1\n").is_err());
    }
}
