//! Persistence backends for postcraft.
//!
//! Implementations of [`postcraft_interface::KeyValueStore`], the favorites list
//! built on top of it, and a directory-backed [`postcraft_interface::TemplateSource`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod favorites;
mod filesystem;
mod memory;
mod templates;

pub use favorites::Favorites;
pub use filesystem::FileStore;
pub use memory::InMemoryStore;
pub use templates::DirectoryTemplateSource;
