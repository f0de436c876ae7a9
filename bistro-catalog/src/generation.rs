//! Generation tokens
//!
//! Each request is tagged with the generation current when it started.
//! Advancing the gate supersedes every outstanding request; their
//! responses are discarded when they arrive.

/// Monotonically increasing request tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source of generations for one piece of state
#[derive(Debug, Default)]
pub struct GenerationGate {
    current: Generation,
}

impl GenerationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding all earlier ones
    pub fn advance(&mut self) -> Generation {
        self.current = Generation(self.current.0 + 1);
        self.current
    }

    pub fn current(&self) -> Generation {
        self.current
    }

    /// Whether a response tagged `generation` may still be applied
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current == generation
    }
}
