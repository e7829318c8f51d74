//! # Snapshot Model
//!
//! Plain data that flows through the export: typed property values, the
//! graph records they describe, and the sections a snapshot is built from.
//!
//! Design rule: no session handles and no I/O here. Formatting is a pure
//! function of the value.

pub mod node;
pub mod edge;
pub mod value;
pub mod format;
pub mod section;

pub use node::{Node, NodeId};
pub use edge::{Edge, EdgeId};
pub use value::{
    PropertyValue, Color, Range,
    DependentColor, DependentColorMode,
    DependentOriginalColor, DependentOriginalColorMode,
    EdgeColor, EdgeColorMode,
};
pub use format::{format_value, normalize_key, NOT_EXTRACTED};
pub use section::{Section, SectionKind, SnapshotDocument};
