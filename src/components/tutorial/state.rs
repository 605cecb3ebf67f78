// ABOUTME: State machine for the first-run tutorial overlay
// Tracks visibility and step position, persists the seen marker on close

use tracing::{debug, info, warn};

use super::catalog::{Step, StepCatalog};
use crate::config::completion::{CompletionStore, SEEN_MARKER, TUTORIAL_SEEN_KEY};

/// Primary button label on every step but the last
pub const NEXT_LABEL: &str = "Next";
/// Primary button label on the last step
pub const FINISH_LABEL: &str = "Get Started";

/// Visibility and position of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialState {
    /// Overlay hidden; terminal for the lifetime of a controller
    Closed,
    /// Overlay shown at the given step index
    Open(usize),
}

impl TutorialState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn current_index(&self) -> Option<usize> {
        match self {
            Self::Open(idx) => Some(*idx),
            Self::Closed => None,
        }
    }
}

/// Outcome of a navigation action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved between two open steps
    Moved { from: usize, to: usize },
    /// Overlay closed and the seen marker was written (or attempted)
    Closed,
    /// Action had no effect at the current boundary
    Ignored,
}

/// Owns the tutorial state and the persistence handle used to remember
/// that the walkthrough was dismissed.
#[derive(Debug)]
pub struct TutorialController<S: CompletionStore> {
    catalog: StepCatalog,
    state: TutorialState,
    store: S,
}

impl<S: CompletionStore> TutorialController<S> {
    /// Initialize from the result of a persistence read.
    pub fn new(catalog: StepCatalog, already_seen: bool, store: S) -> Self {
        let state = if already_seen {
            TutorialState::Closed
        } else {
            TutorialState::Open(0)
        };

        Self {
            catalog,
            state,
            store,
        }
    }

    /// Read the seen marker once and initialize accordingly.
    ///
    /// An unreadable store counts as "not seen": showing the walkthrough
    /// again beats hiding it from a user who never saw it.
    pub fn mount(catalog: StepCatalog, store: S) -> Self {
        let already_seen = match store.contains(TUTORIAL_SEEN_KEY) {
            Ok(seen) => seen,
            Err(e) => {
                warn!("Could not read tutorial state, showing walkthrough: {}", e);
                false
            }
        };

        if already_seen {
            debug!("Tutorial already seen, staying closed");
        } else {
            info!("First run detected - opening tutorial");
        }

        Self::new(catalog, already_seen, store)
    }

    pub fn state(&self) -> TutorialState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Step currently displayed, if open
    pub fn current_step(&self) -> Option<&Step> {
        self.state
            .current_index()
            .and_then(|idx| self.catalog.get(idx))
    }

    /// `(i + 1) / N` while open
    pub fn progress_fraction(&self) -> Option<f64> {
        self.state
            .current_index()
            .map(|idx| (idx + 1) as f64 / self.catalog.len() as f64)
    }

    /// Progress rounded to a whole percent, for gauges
    pub fn progress_percent(&self) -> Option<u16> {
        self.progress_fraction()
            .map(|fraction| (fraction * 100.0).round() as u16)
    }

    /// "Step i of N" while open
    pub fn step_label(&self) -> Option<String> {
        self.state
            .current_index()
            .map(|idx| format!("Step {} of {}", idx + 1, self.catalog.len()))
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.state, TutorialState::Open(idx) if idx > 0)
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_index() == Some(self.catalog.last_index())
    }

    /// Label for the primary button
    pub fn primary_label(&self) -> &'static str {
        if self.is_last_step() {
            FINISH_LABEL
        } else {
            NEXT_LABEL
        }
    }

    /// Move forward, closing after the last step
    pub fn advance(&mut self) -> Transition {
        let TutorialState::Open(idx) = self.state else {
            return Transition::Ignored;
        };

        if idx < self.catalog.last_index() {
            self.state = TutorialState::Open(idx + 1);
            debug!("Tutorial advanced {} -> {}", idx, idx + 1);
            Transition::Moved {
                from: idx,
                to: idx + 1,
            }
        } else {
            info!("Tutorial finished");
            self.close()
        }
    }

    /// Move back one step; ignored on the first step
    pub fn retreat(&mut self) -> Transition {
        match self.state {
            TutorialState::Open(idx) if idx > 0 => {
                self.state = TutorialState::Open(idx - 1);
                debug!("Tutorial went back {} -> {}", idx, idx - 1);
                Transition::Moved {
                    from: idx,
                    to: idx - 1,
                }
            }
            _ => Transition::Ignored,
        }
    }

    /// Dismiss from any step
    pub fn skip(&mut self) -> Transition {
        let TutorialState::Open(idx) = self.state else {
            return Transition::Ignored;
        };

        info!("Tutorial skipped at step {}", idx + 1);
        self.close()
    }

    fn close(&mut self) -> Transition {
        // Write first, but the overlay closes whatever the outcome
        if let Err(e) = self.store.set(TUTORIAL_SEEN_KEY, SEEN_MARKER) {
            warn!("Failed to persist tutorial completion, it may reappear: {}", e);
        }
        self.state = TutorialState::Closed;
        Transition::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tutorial::catalog::Step;
    use crate::config::completion::{MockCompletionStore, StoreError};
    use std::io;
    use std::path::PathBuf;

    fn catalog(n: usize) -> StepCatalog {
        StepCatalog::new(
            (0..n)
                .map(|i| Step::new(format!("Step {i}"), format!("Description {i}")))
                .collect(),
        )
    }

    fn expect_single_write(store: &mut MockCompletionStore) {
        store
            .expect_set()
            .withf(|key, marker| key == TUTORIAL_SEEN_KEY && marker == SEEN_MARKER)
            .times(1)
            .returning(|_, _| Ok(()));
    }

    #[test]
    fn test_mount_reads_marker_once() {
        let mut store = MockCompletionStore::new();
        store
            .expect_contains()
            .withf(|key| key == TUTORIAL_SEEN_KEY)
            .times(1)
            .returning(|_| Ok(true));

        let controller = TutorialController::mount(catalog(3), store);
        assert_eq!(controller.state(), TutorialState::Closed);
    }

    #[test]
    fn test_mount_read_failure_opens_tutorial() {
        let mut store = MockCompletionStore::new();
        store.expect_contains().returning(|_| Err(StoreError::NoHomeDir));

        let controller = TutorialController::mount(catalog(3), store);
        assert_eq!(controller.state(), TutorialState::Open(0));
    }

    #[test]
    fn test_finishing_writes_exactly_once() {
        let mut store = MockCompletionStore::new();
        expect_single_write(&mut store);

        let mut controller = TutorialController::new(catalog(3), false, store);
        assert_eq!(controller.advance(), Transition::Moved { from: 0, to: 1 });
        assert_eq!(controller.advance(), Transition::Moved { from: 1, to: 2 });
        assert_eq!(controller.advance(), Transition::Closed);

        // Further actions are no-ops and must not write again
        assert_eq!(controller.advance(), Transition::Ignored);
        assert_eq!(controller.skip(), Transition::Ignored);
        assert_eq!(controller.retreat(), Transition::Ignored);
    }

    #[test]
    fn test_skip_writes_exactly_once() {
        let mut store = MockCompletionStore::new();
        expect_single_write(&mut store);

        let mut controller = TutorialController::new(catalog(3), false, store);
        controller.advance();
        assert_eq!(controller.skip(), Transition::Closed);
        assert_eq!(controller.skip(), Transition::Ignored);
        assert!(!controller.is_visible());
    }

    #[test]
    fn test_write_failure_still_closes() {
        let mut store = MockCompletionStore::new();
        store.expect_set().times(1).returning(|_, _| {
            Err(StoreError::Io {
                path: PathBuf::from("/read-only/tutorial.toml"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            })
        });

        let mut controller = TutorialController::new(catalog(2), false, store);
        assert_eq!(controller.skip(), Transition::Closed);
        assert_eq!(controller.state(), TutorialState::Closed);
    }

    #[test]
    fn test_closed_controller_never_touches_store() {
        let mut store = MockCompletionStore::new();
        store.expect_set().never();

        let mut controller = TutorialController::new(catalog(2), true, store);
        assert_eq!(controller.advance(), Transition::Ignored);
        assert_eq!(controller.retreat(), Transition::Ignored);
        assert_eq!(controller.skip(), Transition::Ignored);
        assert_eq!(controller.progress_fraction(), None);
        assert_eq!(controller.step_label(), None);
        assert!(controller.current_step().is_none());
    }

    #[test]
    fn test_retreat_at_first_step_is_ignored() {
        let mut controller = TutorialController::new(catalog(3), false, MockCompletionStore::new());
        assert_eq!(controller.retreat(), Transition::Ignored);
        assert_eq!(controller.retreat(), Transition::Ignored);
        assert_eq!(controller.state(), TutorialState::Open(0));
        assert!(!controller.can_go_back());
    }

    #[test]
    fn test_single_step_catalog_finishes_immediately() {
        let mut store = MockCompletionStore::new();
        expect_single_write(&mut store);

        let mut controller = TutorialController::new(catalog(1), false, store);
        assert!(controller.is_last_step());
        assert_eq!(controller.primary_label(), FINISH_LABEL);
        assert_eq!(controller.progress_fraction(), Some(1.0));
        assert_eq!(controller.advance(), Transition::Closed);
    }

    #[test]
    fn test_labels_follow_position() {
        let mut controller = TutorialController::new(catalog(2), false, MockCompletionStore::new());
        assert_eq!(controller.primary_label(), NEXT_LABEL);
        assert_eq!(controller.step_label().as_deref(), Some("Step 1 of 2"));

        controller.advance();
        assert_eq!(controller.primary_label(), FINISH_LABEL);
        assert_eq!(controller.step_label().as_deref(), Some("Step 2 of 2"));
        assert!(controller.can_go_back());
    }
}
