//! TUI 核心服务
//!
//! 持有控制器上下文与 tokio 运行时句柄，为每次页面激活创建新的控制器，
//! 并把控制器的异步操作派发到运行时上执行。

use std::sync::Arc;

use heroes_client::{HeroId, HeroesApi};
use heroes_core::{ControllerContext, ListController, RecordFormController, Texts};
use tokio::runtime::Handle;

use super::bridge::{ChannelInteraction, ChannelNavigator};

pub struct HeroService {
    ctx: Arc<ControllerContext>,
    runtime: Handle,
}

impl HeroService {
    pub fn new(
        api: Arc<dyn HeroesApi>,
        interaction: ChannelInteraction,
        navigator: ChannelNavigator,
        texts: &'static Texts,
        runtime: Handle,
    ) -> Self {
        let ctx = Arc::new(ControllerContext::new(
            api,
            Arc::new(interaction),
            Arc::new(navigator),
            texts,
        ));
        Self { ctx, runtime }
    }

    /// Texts the controllers use, for the modal buttons.
    pub fn texts(&self) -> &'static Texts {
        self.ctx.texts
    }

    // ========== 列表页面 ==========

    /// New list controller, already loading.
    pub fn open_list(&self) -> Arc<ListController> {
        let controller = Arc::new(ListController::new(self.ctx.clone()));
        let task = controller.clone();
        self.runtime.spawn(async move { task.activate().await });
        controller
    }

    pub fn reload(&self, controller: &Arc<ListController>) {
        let task = controller.clone();
        self.runtime.spawn(async move { task.load().await });
    }

    pub fn delete(&self, controller: &Arc<ListController>, id: HeroId) {
        let task = controller.clone();
        self.runtime.spawn(async move { task.delete(&id).await });
    }

    // ========== 编辑页面 ==========

    /// New form controller activated with the route parameter.
    pub fn open_editor(&self, route_param: Option<String>) -> Arc<RecordFormController> {
        let controller = Arc::new(RecordFormController::new(self.ctx.clone()));
        let task = controller.clone();
        self.runtime
            .spawn(async move { task.activate(route_param.as_deref()).await });
        controller
    }

    pub fn submit(&self, controller: &Arc<RecordFormController>) {
        let task = controller.clone();
        self.runtime.spawn(async move { task.submit().await });
    }
}
