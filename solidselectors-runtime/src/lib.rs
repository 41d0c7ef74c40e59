//! solidselectors-runtime: unique, human-inspectable selectors for tagging
//! UI elements under test.
//!
//! Two generation functions are exposed:
//!
//! - [`create_selector`]: mints one selector string, `"<prefix>:<id>"`.
//! - [`create_live_selector`]: reserves a namespace and returns a
//!   [`LiveSelector`] factory minting `"<prefix>:<namespace>:<key>"`
//!   selectors at run time, with a strict variant that rejects reused or
//!   missing keys.
//!
//! Id state lives in an explicit [`IdReservoir`] with a defined lifecycle:
//! create one at process start, never reset it mid-run. The sequential
//! source is deterministic, which the compile-time transform in
//! `solidselectors-core` relies on for reproducible builds.
//!
//! # Quick Start
//!
//! ```rust
//! use solidselectors_runtime::{create_selector, IdReservoir, SelectorOptions};
//!
//! let mut reservoir = IdReservoir::sequential();
//! let options = SelectorOptions::with_prefix("cool");
//! let selector = create_selector(&mut reservoir, Some(&options));
//! assert_eq!(selector, "cool:0");
//! ```

pub mod error;
pub mod live;
pub mod reservoir;
pub mod selector;

pub use error::{SelectorError, SelectorResult};
pub use live::{create_live_selector, LiveSelector};
pub use reservoir::IdReservoir;
pub use selector::{create_selector, SelectorOptions, DEFAULT_PREFIX};
