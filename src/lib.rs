//! # Namespaced Map
//!
//! An in-memory map where one value can be looked up through any of several
//! independent keys ("namespaces") belonging to a composite key.
//!
//! ## Core idea
//! Values live once, in a record store keyed by an internal id. Next to it
//! sits one index per namespace, mapping raw key → record id. All indexes
//! are kept in lock-step with the store: setting a composite key that
//! overlaps an existing record in *any* namespace evicts that record from
//! every namespace, so two live records never partially alias.
//!
//! ```
//! use namespaced_map::{CompositeKey, NamespacedMap};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Id {
//!     Primary,
//!     Secondary,
//! }
//!
//! let mut map: NamespacedMap<Id, &str> = NamespacedMap::new();
//! map.set(CompositeKey::new().with(Id::Primary, 1).with(Id::Secondary, "1"), "hello")?;
//!
//! assert_eq!(map.get(Id::Secondary, "1")?, Some(&"hello"));
//! assert!(map.delete(Id::Primary, 1)?);
//! assert!(!map.has(Id::Secondary, "1"));
//! # Ok::<(), namespaced_map::Error>(())
//! ```

pub mod error;
pub mod id;
pub mod key;
pub mod map;
pub mod options;
pub mod types;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use id::{IdSource, RandomIds, SequentialIds};
pub use key::CompositeKey;
pub use map::NamespacedMap;
pub use options::Options;
pub use types::{Namespace, RawKey, RecordId};
