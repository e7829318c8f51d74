//! Section collectors — one per subsystem.
//!
//! Each collector reads one model and returns one [`Section`]. A property
//! that cannot be read never fails the snapshot: it is logged and either
//! left out or written as [`NOT_EXTRACTED`](crate::model::NOT_EXTRACTED).

pub mod general;
pub mod filter;
pub mod layout;
pub mod appearance;
pub mod statistics;
pub mod preview;

use tracing::warn;

use crate::model::SectionKind;
use crate::Error;

/// Log a property the collector had to give up on.
fn skipped(kind: SectionKind, key: &str, err: &Error) {
    warn!(section = kind.title(), key, error = %err, "property not extracted");
}
