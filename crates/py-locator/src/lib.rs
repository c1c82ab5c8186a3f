pub mod config;
pub mod error;
pub mod locate;
pub mod store;
pub mod syntax;

pub use config::LocatorSettings;
pub use error::LocateError;
pub use locate::{LocatedNode, QueryOptions, TreeLocator};
pub use store::{LocatedExpr, TreeStore};
pub use syntax::{SyntaxTree, SyntaxTreeBuilder};
pub use syntax::kind::SyntaxKind;

#[cfg(test)]
#[path = "../tests/src/fixtures.rs"]
pub(crate) mod fixtures;
