//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 兼容旧部署的环境变量 `DB_URI`、`SERVER_PORT`
//! 2. 环境变量（前缀 `CLIENTDESK_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::infrastructure::persistence::sqlite::is_valid_collection_name;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 旧部署使用的环境变量（大小写两种写法都接受）
const LEGACY_DB_URI_VARS: &[&str] = &["DB_URI", "db_uri"];
const LEGACY_SERVER_PORT_VARS: &[&str] = &["SERVER_PORT", "server_port"];

/// 旧环境变量中读取到的覆盖项
#[derive(Debug, Default, PartialEq, Eq)]
struct LegacyOverrides {
    db_uri: Option<String>,
    server_port: Option<u16>,
}

fn first_set(names: &[&str], lookup: &impl Fn(&str) -> Option<String>) -> Option<String> {
    names
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
}

fn legacy_overrides(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<LegacyOverrides, ConfigError> {
    let server_port = first_set(LEGACY_SERVER_PORT_VARS, &lookup)
        .map(|raw| {
            raw.trim().parse::<u16>().map_err(|e| {
                ConfigError::ParseError(format!("SERVER_PORT {:?} is not a port: {}", raw, e))
            })
        })
        .transpose()?;

    Ok(LegacyOverrides {
        db_uri: first_set(LEGACY_DB_URI_VARS, &lookup),
        server_port,
    })
}

/// 加载应用配置
///
/// # 环境变量示例
/// - `CLIENTDESK_SERVER__PORT=8080`
/// - `CLIENTDESK_DATABASE__URI=sqlite:/data/clients.db?mode=rwc`
/// - `DB_URI=memory:`
/// - `SERVER_PORT=3000`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("server.public_dir", "public")?
        .set_default("database.uri", "sqlite:data/clientdesk.db?mode=rwc")?
        .set_default("database.collection", "clients")?
        .set_default("database.max_connections", 5)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量，例如 CLIENTDESK_SERVER__PORT=8080
    builder = builder.add_source(
        Environment::with_prefix("CLIENTDESK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 旧环境变量（最高优先级）
    let legacy = legacy_overrides(|name| std::env::var(name).ok())?;
    builder = builder
        .set_override_option("database.uri", legacy.db_uri)?
        .set_override_option("server.port", legacy.server_port.map(i64::from))?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.uri.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Database URI cannot be empty".to_string(),
        ));
    }

    if !is_valid_collection_name(&config.database.collection) {
        return Err(ConfigError::ValidationError(format!(
            "Collection name {:?} may only contain letters, digits and '_'",
            config.database.collection
        )));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max_connections must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Directory: {:?}", config.server.public_dir);
    tracing::info!("Database: {}", config.database.masked_uri());
    tracing::info!("Collection: {}", config.database.collection);
    if !config.database.is_in_memory() {
        tracing::info!("Database Max Connections: {}", config.database.max_connections);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
