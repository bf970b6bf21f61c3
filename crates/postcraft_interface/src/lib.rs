//! Trait definitions for the postcraft pipeline.
//!
//! The outline and image pipelines are pure text transformations. Everything that
//! touches the outside world (model calls, persistence, template files, randomness)
//! is reached through the traits in this crate.
//!
//! # Example
//!
//! ```
//! use postcraft_interface::KeyValueStore;
//! use postcraft_error::PostcraftResult;
//! use std::collections::HashMap;
//! use std::sync::Mutex;
//!
//! struct MapStore(Mutex<HashMap<String, String>>);
//!
//! impl KeyValueStore for MapStore {
//!     fn get(&self, key: &str) -> PostcraftResult<Option<String>> {
//!         Ok(self.0.lock().unwrap().get(key).cloned())
//!     }
//!
//!     fn set(&self, key: &str, value: &str) -> PostcraftResult<()> {
//!         self.0.lock().unwrap().insert(key.to_string(), value.to_string());
//!         Ok(())
//!     }
//! }
//!
//! let store = MapStore(Mutex::new(HashMap::new()));
//! store.set("k", "v").unwrap();
//! assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ImageGenerator, KeyValueStore, RandomSource, TemplateSource, TextGenerator};
