//! 列表页面状态

use std::sync::Arc;

use heroes_client::Hero;
use heroes_core::{ListController, ListState};
use tokio::sync::watch;

/// 列表页面状态
pub struct ListPageState {
    pub controller: Arc<ListController>,
    /// 控制器状态快照
    state: watch::Receiver<ListState>,
    /// 当前选中的索引
    pub selected: usize,
}

impl ListPageState {
    pub fn new(controller: Arc<ListController>) -> Self {
        let state = controller.subscribe();
        Self {
            controller,
            state,
            selected: 0,
        }
    }

    /// 最新快照
    pub fn snapshot(&self) -> ListState {
        self.state.borrow().clone()
    }

    /// 请求进行中（加载或删除）
    pub fn is_busy(&self) -> bool {
        self.state.borrow().loading
    }

    fn len(&self) -> usize {
        self.state.borrow().heroes.len()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.clamp();
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        self.clamp();
        if self.selected + 1 < self.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.len().saturating_sub(1);
    }

    /// Keep the selection inside the rows after a reload shrank them.
    pub fn clamp(&mut self) {
        let len = self.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// 获取当前选中的英雄
    pub fn selected_hero(&self) -> Option<Hero> {
        self.state.borrow().heroes.get(self.selected).cloned()
    }
}
