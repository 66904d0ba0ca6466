//! user-api - 用户资料 CRUD 服务
//!
//! 启动顺序：配置 → 日志 → 数据库 → HTTP 服务器

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use user_api::config::{load_config, print_config, LogConfig};
use user_api::infrastructure::http::{AppState, HttpServer, ServerConfig};
use user_api::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteUserRepository,
};

/// 初始化日志（RUST_LOG 优先于配置文件中的级别）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},user_api={}", log.level, log.level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("user-api v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = config
        .database
        .sqlite_file_path()
        .and_then(|p| std::path::Path::new(p).parent())
    {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.url.clone(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, AppState::new(user_repo));

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                // 无法监听信号时不主动关闭
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
