//! Media module for item representation and album resolution.

pub mod item;
pub mod resolver;

pub use item::{AlbumTarget, ItemDescriptor};
pub use resolver::{descriptor_for, normalize_scheme, resolve_account_albums, resolve_album};
