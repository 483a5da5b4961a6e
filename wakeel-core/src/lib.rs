//! WAKEEL Core - Client Behavior
//!
//! State machines and list datasets shared by every WAKEEL page. Nothing in
//! this crate touches a terminal or the network; hosts feed events in and
//! read state back out.

pub mod binding;
pub mod code_input;
pub mod layers;
pub mod listing;
pub mod records;
pub mod selection;

pub use binding::{ListBinding, ListSurface, LoadOutcome};
pub use code_input::SegmentedCode;
pub use layers::{LayerStack, Panel};
pub use listing::{filter_items, FilterQuery, ListDataset, ListRecord, Provenance, StarRating};
pub use records::{ChatSummary, Document, Lawyer};
pub use selection::{GroupKind, OptionGroup};
