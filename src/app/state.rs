// ABOUTME: Application state for the Ajo terminal shell
// Owns the tutorial controller and shell-level flags

use crate::components::tutorial::{StepCatalog, TutorialController};
use crate::config::completion::CompletionStore;

#[derive(Debug)]
pub struct AppState<S: CompletionStore> {
    /// First-run walkthrough mounted over the shell
    pub tutorial: TutorialController<S>,
    /// Set when the user asked to leave the application
    pub should_quit: bool,
    /// Redraw requested by the last processed event
    pub ui_needs_refresh: bool,
}

impl<S: CompletionStore> AppState<S> {
    pub fn new(tutorial: TutorialController<S>) -> Self {
        Self {
            tutorial,
            should_quit: false,
            ui_needs_refresh: true,
        }
    }
}

#[derive(Debug)]
pub struct App<S: CompletionStore> {
    pub state: AppState<S>,
}

impl<S: CompletionStore> App<S> {
    /// Mount the shell with the given catalog; the tutorial reads the
    /// seen marker from `store` exactly once here.
    pub fn mount(catalog: StepCatalog, store: S) -> Self {
        Self {
            state: AppState::new(TutorialController::mount(catalog, store)),
        }
    }

    /// Mount with the catalog shipped in the binary
    pub fn with_builtin_tutorial(store: S) -> Self {
        Self::mount(StepCatalog::builtin().clone(), store)
    }
}
