//! SQLite Database - 数据库连接和迁移

use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库连接串
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// 每个连接是独立的内存库，因此只允许一个连接
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    // 启用 WAL 模式，允许并发读写
    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await?;

    // 遇到锁时等待而不是立即失败
    sqlx::query("PRAGMA busy_timeout=5000")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA synchronous=NORMAL")
        .execute(&pool)
        .await?;

    tracing::info!("SQLite pool created with WAL mode and busy_timeout=5000ms");

    Ok(pool)
}

/// 集合名只允许字母、数字和下划线（会被拼接进 SQL）
pub fn is_valid_collection_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// 运行数据库迁移：为集合建表
pub async fn run_migrations(pool: &DbPool, collection: &str) -> Result<(), sqlx::Error> {
    if !is_valid_collection_name(collection) {
        return Err(sqlx::Error::Configuration(
            format!("invalid collection name: {:?}", collection).into(),
        ));
    }

    // 每行一个文档：document 列保存 {firstName, lastName, email}
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {collection} (
            id TEXT PRIMARY KEY,
            document TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        r#"
        CREATE INDEX IF NOT EXISTS idx_{collection}_created_at
        ON {collection}(created_at)
        "#
    ))
    .execute(pool)
    .await?;

    tracing::info!(collection = %collection, "Database migrations completed");
    Ok(())
}
