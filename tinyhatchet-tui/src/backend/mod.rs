//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│   ┌─────────┐      ┌───────────┐      ┌──────────┐      Vec<Command>       │
//！│   │  Event  │ ───▶ │  Message  │ ───▶ │  Update  │ ─────────────┐         │
//！│   └─────────┘      └───────────┘      └──────────┘              │         │
//！│                          ▲                                      ▼         │
//！│                          │ AppMessage::Outcome           ┌────────────┐   │
//！│                          └────────────────────────────── │  Executor  │   │
//！│                                                          └─────┬──────┘   │
//！│                                                                │ spawn    │
//！│                                                                ▼          │
//！│                                                      ┌───────────────────┐│
//！│                                                      │ tinyhatchet-client││
//！│                                                      └───────────────────┘│
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：后台请求与配置
//!
//! Backend 层与 UI 完全解耦。UI 只产生 [`Command`] 值，并在稍后收到
//! [`Outcome`](crate::message::Outcome)；中间的网络请求都在这里。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod command;            // 命令：一次 API 调用的描述，及其结果映射
//!         mod config_service;     // 配置文件（YAML）读写
//!         mod executor;           // 在 tokio 运行时上执行命令，收集结果
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、命令（Command）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层从不直接发起网络请求。它返回 Vec<Command>：
//!
//!         Command::Login { email, password }
//!         Command::ListTokens
//!         Command::SearchEntries(SearchQuery)
//!         ...
//!
//!     `Command::run(self, &HatchetClient) -> Outcome` 执行请求，
//!     并把 ClientResult 翻译成界面能理解的 Outcome：
//!
//!         Ok(AuthStatus::Success)               → Outcome::Success
//!         Ok(AuthStatus::VerificationRequired)  → Outcome::VerificationRequired
//!         Ok(AuthStatus::Rejected(errors))      → Outcome::ValidationErrors(errors)
//!         Err(ClientError)                      → Outcome::Failure(message)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、执行器（Executor）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Executor 持有 tokio 运行时句柄和一个 mpsc 通道：
//!
//!         dispatch(commands, &session)
//!             ↓  每条命令 tokio::spawn 一个任务（客户端在派发时快照）
//!         task: command.run(&client).await  →  tx.send(outcome)
//!             ↓
//!         主循环每一轮 try_next() 取回结果，作为 AppMessage::Outcome 交给 update
//!
//!     主循环从不阻塞在网络上；未完成的请求数量显示在状态栏。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ~/.tinyhatchet.config（YAML）：
//!
//!         serverurl: https://tinyhatchet.com
//!         emailaddress: me@example.com
//!         debugpath: /tmp/tinyhatchet.log
//!
//!     启动时 load()（文件不存在 → 默认值），退出时 save()（权限 0600）。
//!

mod command;
mod config_service;
mod executor;

pub use command::Command;
pub use config_service::{AppConfig, ConfigError, ConfigService, YamlConfigService};
pub use executor::Executor;
