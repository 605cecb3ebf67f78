// ABOUTME: Step catalog for the first-run tutorial
// Fixed, ordered list of instructional steps compiled into the binary

use lazy_static::lazy_static;

/// Region of the host shell a step refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Wallet button in the header
    Wallet,
    /// Create / join groups panel
    Create,
    /// Dashboard panel
    Dashboard,
}

impl Highlight {
    /// Stable lowercase tag for this region
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Wallet => "wallet",
            Self::Create => "create",
            Self::Dashboard => "dashboard",
        }
    }

    /// Human readable region name shown in the overlay hint
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wallet => "Wallet button (top right)",
            Self::Create => "Groups panel",
            Self::Dashboard => "Dashboard",
        }
    }
}

/// A single tutorial step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub title: String,
    pub description: String,
    /// Advisory pointer at a UI region; not enforced
    pub highlight: Option<Highlight>,
}

impl Step {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            highlight: None,
        }
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = Some(highlight);
        self
    }
}

/// Immutable, non-empty ordered sequence of steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCatalog {
    steps: Vec<Step>,
}

lazy_static! {
    static ref BUILTIN: StepCatalog = StepCatalog::new(vec![
        Step::new(
            "Welcome to Soroban Ajo",
            "A decentralized rotational savings platform on Stellar. Join groups, contribute regularly, and receive payouts in rotation.",
        ),
        Step::new(
            "Connect Your Wallet",
            "Click the wallet button in the top right to connect your Stellar wallet and start participating.",
        )
        .with_highlight(Highlight::Wallet),
        Step::new(
            "Create or Join Groups",
            "Create a new savings group or browse existing groups to join. Set contribution amounts and cycle duration.",
        )
        .with_highlight(Highlight::Create),
        Step::new(
            "Track Your Progress",
            "View your groups, contribution status, and upcoming payouts from the dashboard.",
        )
        .with_highlight(Highlight::Dashboard),
    ]);
}

impl StepCatalog {
    /// Build a catalog. Panics on an empty list or a step with blank text,
    /// since the walkthrough is undefined without at least one real step.
    pub fn new(steps: Vec<Step>) -> Self {
        assert!(!steps.is_empty(), "step catalog must contain at least one step");
        for (idx, step) in steps.iter().enumerate() {
            assert!(!step.title.trim().is_empty(), "step {idx} has an empty title");
            assert!(
                !step.description.trim().is_empty(),
                "step {idx} has an empty description"
            );
        }
        Self { steps }
    }

    /// The catalog shipped with the application
    pub fn builtin() -> &'static StepCatalog {
        &*BUILTIN
    }

    /// All steps in order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps, always at least one
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the catalog has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Index of the final step
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }
}
