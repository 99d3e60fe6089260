/// Word dictionary builder with suffix-sharing minimization.
pub mod builder;
/// Trait for code-unit types that can serve as dictionary keys.
pub mod char_trait;
/// Compiled, read-only dictionary.
pub mod dict;
/// Content-addressed table of canonical states.
pub(crate) mod registry;
/// Builder-side automaton state.
pub(crate) mod state;
/// One-shot construction from pairs and word-list files.
pub mod wordlist;

pub use builder::{BuildError, DawgBuilder, InsertError, IntoKey};
pub use char_trait::{DictBase, DictChar, DictValue};
pub use dict::{DawgDict, Entries};
pub use registry::DictStats;
pub use wordlist::LoadError;
