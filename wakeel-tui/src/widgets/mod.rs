//! Reusable widget components.

pub mod card;
pub mod code;
pub mod filter;
pub mod status;

pub use card::Card;
pub use code::CodeCells;
pub use filter::FilterBar;
pub use status::ToastBar;
