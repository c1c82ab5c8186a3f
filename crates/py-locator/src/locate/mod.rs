//! Cursor-to-node lookup for hover and evaluate requests.

pub mod finder;
pub mod located;
pub mod options;
mod walker;

pub use finder::TreeLocator;
pub use located::LocatedNode;
pub use options::QueryOptions;
