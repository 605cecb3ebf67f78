// ABOUTME: First-run tutorial overlay module
// Walks new users through the main areas of the app once, then never reappears

pub mod catalog;
pub mod component;
pub mod state;

pub use catalog::{Highlight, Step, StepCatalog};
pub use component::TutorialComponent;
pub use state::{Transition, TutorialController, TutorialState, FINISH_LABEL, NEXT_LABEL};
