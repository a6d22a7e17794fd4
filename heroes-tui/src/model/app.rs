use heroes_core::types::Route;

use super::{ListPageState, ModalState, Page};
use crate::backend::HeroService;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前页面
    pub page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,

    /// 控制器工厂与异步执行
    pub service: HeroService,
}

impl App {
    /// 创建新的应用实例，从列表页开始
    pub fn new(service: HeroService) -> Self {
        let list = ListPageState::new(service.open_list());
        Self {
            should_quit: false,
            page: Page::List(list),
            status_message: None,
            modal: ModalState::new(),
            service,
        }
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
