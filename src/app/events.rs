// ABOUTME: Event handling for keyboard input and tutorial navigation

use crate::app::AppState;
use crate::components::tutorial::Transition;
use crate::config::completion::CompletionStore;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    TutorialNext, // Next step, or finish on the last one
    TutorialBack,
    TutorialSkip, // Dismiss from any step
}

pub struct EventHandler;

impl EventHandler {
    /// Map a key press to an application event
    pub fn handle_key_event<S: CompletionStore>(
        key_event: KeyEvent,
        state: &AppState<S>,
    ) -> Option<AppEvent> {
        if key_event.kind == KeyEventKind::Release {
            return None;
        }

        // Ctrl+C always quits, even over the tutorial
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        if state.tutorial.is_visible() {
            return match key_event.code {
                KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
                    Some(AppEvent::TutorialNext)
                }
                KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Char('b') => {
                    Some(AppEvent::TutorialBack)
                }
                KeyCode::Esc | KeyCode::Char('s') => Some(AppEvent::TutorialSkip),
                KeyCode::Char('q') => Some(AppEvent::Quit),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            _ => None,
        }
    }

    /// Apply an event to the application state
    pub fn process_event<S: CompletionStore>(event: AppEvent, state: &mut AppState<S>) {
        let transition = match event {
            AppEvent::Quit => {
                info!("Quit requested");
                state.should_quit = true;
                return;
            }
            AppEvent::TutorialNext => state.tutorial.advance(),
            AppEvent::TutorialBack => state.tutorial.retreat(),
            AppEvent::TutorialSkip => state.tutorial.skip(),
        };

        debug!("{:?} -> {:?}", event, transition);
        state.ui_needs_refresh = transition != Transition::Ignored;
    }
}
