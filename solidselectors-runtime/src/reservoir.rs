//! Identifier reservation with an explicit lifecycle.
//!
//! The reservoir owns the next-id state instead of hiding it in ambient
//! module globals. Callers create one at process start and hold it for the
//! lifetime of the process; it is never reset mid-run, so every reserved
//! id is unique within that run.
//!
//! Two sources are available:
//! - `sequential`: a monotonic counter. Deterministic for a fixed sequence
//!   of reservations, which is what compile-time evaluation needs for
//!   reproducible builds.
//! - `random`: UUID v4. For runtime use where determinism is irrelevant
//!   and ids must not collide across processes.

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdSource {
    Sequential,
    Random,
}

/// Owns id-reservation state for one process.
///
/// Reservation is monotonic: once an id is handed out it is never handed
/// out again by the same reservoir.
#[derive(Debug, Clone)]
pub struct IdReservoir {
    source: IdSource,
    next: u64,
}

impl IdReservoir {
    /// A deterministic counter-backed reservoir starting at zero.
    pub fn sequential() -> Self {
        Self {
            source: IdSource::Sequential,
            next: 0,
        }
    }

    /// A UUID v4 backed reservoir.
    pub fn random() -> Self {
        Self {
            source: IdSource::Random,
            next: 0,
        }
    }

    /// Whether ids from this reservoir are reproducible across runs.
    pub fn is_deterministic(&self) -> bool {
        self.source == IdSource::Sequential
    }

    /// Reserve the next unique id.
    pub fn reserve(&mut self) -> String {
        match self.source {
            IdSource::Sequential => {
                let id = self.next;
                self.next += 1;
                id.to_string()
            }
            IdSource::Random => Uuid::new_v4().to_string(),
        }
    }
}

impl Default for IdReservoir {
    fn default() -> Self {
        Self::sequential()
    }
}
