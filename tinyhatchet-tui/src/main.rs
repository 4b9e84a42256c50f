//! tinyhatchet TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 后台请求与配置 (`backend/`)
//!
//!
//! main.rs
//! tinyhatchet TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()                // --config <PATH>，默认 ~/.tinyhatchet.config
//!     config_service.load()       // 读取 YAML 配置（文件不存在时使用默认值）
//!     init_logging()              // debugpath 不为空时写调试日志
//!     Session::from_config()      // 服务器地址、邮箱、HTTP 客户端
//!     tokio Runtime               // 后台请求在这里执行
//!     init_terminal()             // 原始模式 + 备用屏幕
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!     config_service.save()       // 写回服务器地址和邮箱
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use backend::{ConfigService, Executor, YamlConfigService};
use model::{App, Session, Viewport};
use util::{init_logging, init_terminal, restore_terminal};

/// Terminal client for the tinyhatchet log service
#[derive(Debug, Parser)]
#[command(name = "tinyhatchet", version, about)]
struct Cli {
    /// Configuration file [default: ~/.tinyhatchet.config]
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 读取配置
    let config_path = match cli.config {
        Some(path) => path,
        None => YamlConfigService::default_path()
            .context("cannot determine the home directory, pass --config")?,
    };
    let config_service = YamlConfigService::new(config_path);
    let mut config = config_service.load()?;

    // 2. 调试日志
    init_logging(&config.debug_path)?;
    log::info!("Using config {}", config_service.path().display());

    // 3. 会话与后台运行时
    let session = Session::from_config(&config)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("tinyhatchet-worker")
        .build()
        .context("failed to start the async runtime")?;
    let mut executor = Executor::new(runtime.handle().clone());

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let mut app = App::new(session, Viewport::default());
    let result = util::viewport(&terminal).and_then(|viewport| {
        app.viewport = viewport;
        app::run(&mut terminal, &mut app, &mut executor)
    });

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;
    runtime.shutdown_background();

    // 7. 写回配置（同样无论成功失败）
    app.session.store_into(&mut config);
    let saved = config_service.save(&config);

    result?;
    saved?;
    Ok(())
}
