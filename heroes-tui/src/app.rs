//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无按键）：
//!
//! ```text
//! loop {
//!     drain UiRequest         // 控制器发来的确认、通知与导航
//!     update(Tick)            // 关闭到期的瞬时通知
//!     draw                    // 渲染 UI
//!     if should_quit { break }
//!     poll_event(100ms)       // 按键 → AppMessage → update
//! }
//! ```

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::{self, error::TryRecvError};

use crate::backend::UiRequest;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    requests: &mut mpsc::UnboundedReceiver<UiRequest>,
) -> Result<()> {
    loop {
        // 1. 处理控制器请求
        drain_requests(app, requests);
        update::update(app, AppMessage::Tick);

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}

fn drain_requests(app: &mut App, requests: &mut mpsc::UnboundedReceiver<UiRequest>) {
    loop {
        match requests.try_recv() {
            Ok(request) => update::update(app, AppMessage::Ui(request)),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                log::warn!("Controller channel closed");
                break;
            }
        }
    }
}
