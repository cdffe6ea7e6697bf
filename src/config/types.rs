//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静态页面目录（html/、js/）
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
        }
    }
}

/// 内存存储的 URI 前缀
pub const MEMORY_URI_PREFIX: &str = "memory:";

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 连接串；`memory:` 开头时使用内存存储
    #[serde(default = "default_db_uri")]
    pub uri: String,

    /// 集合（表）名
    #[serde(default = "default_collection")]
    pub collection: String,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_uri() -> String {
    "sqlite:data/clientdesk.db?mode=rwc".to_string()
}

fn default_collection() -> String {
    "clients".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: default_db_uri(),
            collection: default_collection(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    pub fn is_in_memory(&self) -> bool {
        self.uri.starts_with(MEMORY_URI_PREFIX)
    }

    /// 隐藏连接串中的密码，用于日志输出
    pub fn masked_uri(&self) -> String {
        let Some(scheme_end) = self.uri.find("://") else {
            return self.uri.clone();
        };
        let authority_start = scheme_end + 3;
        let rest = &self.uri[authority_start..];
        let Some(at) = rest.find('@') else {
            return self.uri.clone();
        };
        match rest[..at].find(':') {
            Some(colon) => format!(
                "{}{}:****{}",
                &self.uri[..authority_start],
                &rest[..colon],
                &rest[at..]
            ),
            None => self.uri.clone(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
