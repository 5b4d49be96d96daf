use std::sync::Arc;

use quiz_core::model::QUESTION_SECONDS;
use services::QuestionSupplier;

/// What the front-end needs from the composition root.
pub trait UiApp: Send + Sync {
    fn supplier(&self) -> Arc<dyn QuestionSupplier>;

    /// Seconds per question; the standard countdown unless overridden.
    fn question_seconds(&self) -> u32 {
        QUESTION_SECONDS
    }
}

#[derive(Clone)]
pub struct AppContext {
    supplier: Arc<dyn QuestionSupplier>,
    question_seconds: u32,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            supplier: app.supplier(),
            question_seconds: app.question_seconds(),
        }
    }

    #[must_use]
    pub fn supplier(&self) -> Arc<dyn QuestionSupplier> {
        Arc::clone(&self.supplier)
    }

    #[must_use]
    pub fn question_seconds(&self) -> u32 {
        self.question_seconds
    }
}

// Provided by the composition root (`crates/app`) before the first render.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
