use std::sync::Arc;

use reflect_core::model::GuideContent;
use services::ReflectionService;

pub trait UiApp: Send + Sync {
    fn reflection(&self) -> Arc<ReflectionService>;
}

#[derive(Clone)]
pub struct AppContext {
    reflection: Arc<ReflectionService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            reflection: app.reflection(),
        }
    }

    #[must_use]
    pub fn reflection(&self) -> Arc<ReflectionService> {
        Arc::clone(&self.reflection)
    }

    #[must_use]
    pub fn content(&self) -> Arc<GuideContent> {
        self.reflection.content()
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
