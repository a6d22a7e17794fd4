//! 页面切换

use heroes_core::types::Route;

use crate::model::state::{FormPageState, ListPageState};
use crate::model::{App, Page};

/// Leave the current page and activate a fresh controller for `route`.
///
/// The old controller is deactivated so that its in-flight requests no
/// longer touch state, post notifications or navigate.
pub fn navigate(app: &mut App, route: Route) {
    log::debug!("Navigating {} -> {route}", app.route());
    app.page.deactivate();

    app.page = match route {
        Route::List => Page::List(ListPageState::new(app.service.open_list())),
        Route::Editor(param) => {
            let controller = app.service.open_editor(Some(param.clone()));
            Page::Editor(FormPageState::new(controller, param))
        }
    };
    app.clear_status();
}
