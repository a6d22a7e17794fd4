//! 当前页面

use heroes_core::types::Route;

use super::state::{FormPageState, ListPageState};

/// 当前页面，携带该页面本次激活的状态
///
/// 切换页面时旧页面被丢弃，其控制器被停用。
pub enum Page {
    /// `/heroes`
    List(ListPageState),
    /// `/heroe/{id|nuevo}`
    Editor(FormPageState),
}

impl Page {
    pub fn route(&self) -> Route {
        match self {
            Page::List(_) => Route::List,
            Page::Editor(form) => Route::Editor(form.route_param.clone()),
        }
    }

    /// Stop the page's controller from applying late results.
    pub fn deactivate(&self) {
        match self {
            Page::List(list) => list.controller.deactivate(),
            Page::Editor(form) => form.controller.deactivate(),
        }
    }
}
