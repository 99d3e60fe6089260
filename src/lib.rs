//! # worddict
//!
//! A compact word dictionary built as a minimal acyclic deterministic finite-state
//! automaton ([DAWG](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton))
//! that maps strings to non-negative integer values.
//!
//! Keys are inserted in ascending order. Shared prefixes fall out of the trie shape,
//! and shared suffixes are found by interning every finished state in a
//! content-addressed table, following the incremental algorithm of
//! [Daciuk et al. (2000)](https://arxiv.org/abs/cs/0007009v1). The result is a
//! read-only automaton with O(key length) lookups.
//!
//! ## Features
//!
//! - **Generic over character width**: 8-bit (`u8`, `i8`), 16-bit (`u16`, `i16`)
//!   and 32-bit (`u32`) code units, each with its own value and state-index types
//!   (see [`DictChar`](dawg::DictChar))
//! - **Compact**: one cell per transition, values stored in terminator cells
//! - **Thread-safe lookups**: [`DawgDict`](dawg::DawgDict) is immutable once built
//!
//! ## Quick Start
//!
//! ```
//! use worddict::{DawgBuilder, DawgDict};
//!
//! let mut builder = DawgBuilder::<u8>::new();
//! builder.insert("bugaga", 1).unwrap();
//! builder.insert("bugagb", 2).unwrap();
//! builder.insert("bugora", 4).unwrap();
//!
//! let mut dict = DawgDict::default();
//! builder.finish(&mut dict).unwrap();
//!
//! assert_eq!(dict.find("bugagb"), 2);
//! assert_eq!(dict.find("buga"), -1);
//! ```
//!
//! ## Walking the automaton
//!
//! ```
//! use worddict::DawgBuilder;
//!
//! let mut builder = DawgBuilder::<u16>::new();
//! builder.insert("über", 1).unwrap();
//! builder.insert("übermut", 2).unwrap();
//! let dict = builder.build().unwrap();
//!
//! let mut idx = dict.root();
//! assert!(dict.follow_key("über", &mut idx));
//! assert_eq!(dict.value(idx), Some(1));
//! assert!(!dict.follow_key("all", &mut idx));
//! // a failed walk stays at the last state it reached
//! assert!(dict.has_value(idx));
//! assert_eq!(dict.value(idx), Some(1));
//! ```

#![warn(missing_docs)]

/// Core dictionary data structure: builder, compiled automaton and character trait.
pub mod dawg;

pub use dawg::{
    BuildError, DawgBuilder, DawgDict, DictChar, DictStats, InsertError, IntoKey, LoadError,
};
