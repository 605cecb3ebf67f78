// ABOUTME: UI components for the terminal shell and the first-run tutorial overlay

pub mod layout;
pub mod shell;
pub mod tutorial;

pub use layout::LayoutComponent;
pub use shell::{ShellComponent, ShellRegions};
pub use tutorial::TutorialComponent;
