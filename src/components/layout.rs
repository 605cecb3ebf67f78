// ABOUTME: Main layout component composing the shell and the tutorial overlay

use ratatui::prelude::*;

use super::{ShellComponent, TutorialComponent};
use crate::app::AppState;
use crate::config::completion::CompletionStore;

pub struct LayoutComponent {
    shell: ShellComponent,
    tutorial: TutorialComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            shell: ShellComponent::new(),
            tutorial: TutorialComponent::new(),
        }
    }

    pub fn render<S: CompletionStore>(&mut self, frame: &mut Frame, state: &AppState<S>) {
        let area = frame.size();
        let highlight = state.tutorial.current_step().and_then(|step| step.highlight);

        self.shell.render(frame, area, highlight);

        // Overlay on top of the shell while the tutorial is open
        if state.tutorial.is_visible() {
            tracing::trace!("Rendering tutorial overlay");
            self.tutorial.render(frame, area, &state.tutorial);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
