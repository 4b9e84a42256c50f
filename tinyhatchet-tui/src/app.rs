//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，App 的初始状态为：
//!
//! App {
//!     should_quit: false,
//!     screen: Screen::LoginForm(..),      // 总是从登录页开始
//!     session: Session { .. },            // 来自配置文件
//!     viewport: 终端尺寸,
//!     status_message: None,
//!     in_flight: 0,
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     while let Some(outcome) = executor.try_next() { // 取回已完成的后台请求
//!         let cmds = update(&mut app, Outcome(outcome));
//!         executor.dispatch(cmds, &app.session);
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event, &app);            // 接收原始事件并翻译成消息
//!         let cmds = update(&mut app, msg);               // 更新状态
//!         executor.dispatch(cmds, &app.session);          // 在后台执行命令
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::Executor;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// How long one poll for input may block
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, executor: &mut Executor) -> Result<()> {
    loop {
        // 1. 渲染 UI
        app.in_flight = executor.in_flight();
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理已完成的后台请求
        while let Some(outcome) = executor.try_next() {
            let commands = update::update(app, AppMessage::Outcome(outcome));
            executor.dispatch(commands, &app.session);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            let msg = event::handle_event(event, app);
            let commands = update::update(app, msg);
            executor.dispatch(commands, &app.session);
        }
    }

    Ok(())
}
