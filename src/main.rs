//! clientdesk - 客户管理服务
//!
//! 启动顺序：配置 → 日志 → 存储 → HTTP 服务
//! 关闭顺序：停止接受连接 → 关闭存储连接 → 退出

use clientdesk::config::{load_config, print_config, LogConfig};
use clientdesk::infrastructure::http::{AppState, HttpServer, ServerConfig};
use clientdesk::infrastructure::persistence::open_client_store;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("clientdesk - client management service");
    print_config(&config);

    // 确保 SQLite 文件所在目录存在
    if let Some(parent) = sqlite_parent_dir(&config.database.uri) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let client_store = match open_client_store(&config.database).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database");
            return Err(e.into());
        }
    };
    tracing::info!("Connected to database");

    let server_config = ServerConfig::new(
        &config.server.host,
        config.server.port,
        config.server.public_dir.clone(),
    );
    let state = AppState::new(client_store.clone());
    let server = HttpServer::new(server_config, state);

    let served = server.run_with_shutdown(shutdown_signal()).await;

    tracing::info!("Closing database connection...");
    client_store.close().await;
    tracing::info!("Exiting...");

    served?;
    Ok(())
}

/// SQLite 连接串中数据库文件的父目录；内存库与其他后端返回 None
fn sqlite_parent_dir(uri: &str) -> Option<&std::path::Path> {
    let rest = uri
        .strip_prefix("sqlite://")
        .or_else(|| uri.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path.starts_with(':') {
        return None;
    }
    std::path::Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}

/// 初始化日志：RUST_LOG 优先，否则使用配置中的级别
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},clientdesk={},tower_http=debug", log.level, log.level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 等待 Ctrl+C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received interrupt signal"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}
