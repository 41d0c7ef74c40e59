//! Literal evaluation: invoking the generation library at transform time.
//!
//! This is the only point where the core executes generator code during
//! compilation. The evaluator owns an explicit [`IdReservoir`] with a
//! defined lifecycle: created with the transform, never reset
//! mid-compilation, so reserved ids stay monotonic across the whole unit
//! and output is reproducible for a fixed input sequence.

use solidselectors_runtime::{create_live_selector, create_selector, IdReservoir, SelectorOptions};

use super::locate::Role;
use super::matcher::CallSite;

/// Computes concrete replacement strings for validated call sites.
#[derive(Debug)]
pub struct LiteralEvaluator {
    reservoir: IdReservoir,
}

impl LiteralEvaluator {
    /// Evaluator over a deterministic sequential reservoir.
    pub fn new() -> Self {
        Self {
            reservoir: IdReservoir::sequential(),
        }
    }

    /// Evaluator over a caller-supplied reservoir.
    pub fn with_reservoir(reservoir: IdReservoir) -> Self {
        Self { reservoir }
    }

    /// Invoke the generation function matched by the call site, passing
    /// the validated literal prefix as the only option.
    ///
    /// Both roles evaluate through the real generator: a live-selector
    /// call inlines the factory's namespace-qualified base string.
    pub fn evaluate(&mut self, site: &CallSite) -> String {
        let options = site
            .prefix
            .as_deref()
            .map(SelectorOptions::with_prefix);
        match site.role {
            Role::Selector => create_selector(&mut self.reservoir, options.as_ref()),
            Role::LiveSelector => {
                create_live_selector(&mut self.reservoir, options.as_ref()).base()
            }
        }
    }
}

impl Default for LiteralEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
