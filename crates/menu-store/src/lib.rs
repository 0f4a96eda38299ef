//! Menu data model and store abstraction.
//!
//! This crate provides the [`Menu`] and [`Item`] records, the [`MenuStore`]
//! trait used by the tree assembler to read them, and the write-time
//! validation rules the stored data is expected to satisfy.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`MenuStore`] trait with `menus()`, `menu()` and `items()` methods
//! - [`validate_menu`] for the write-time invariants (no self-parenting,
//!   parents within the same menu, unique targets)
//! - [`MockStore`] for testing (behind `mock` feature flag)
//!
//! Readers never rely on validation having happened: a store may hand out
//! any state, including parent cycles.
//!
//! # Example
//!
//! ```ignore
//! use menu_store::{Item, MenuStore, MockStore};
//!
//! let store = MockStore::new()
//!     .with_menu(1, "main", 3)
//!     .with_item(Item::new(1, 1, "Index", "index"));
//! let items = store.items("main")?;
//! ```

#[cfg(feature = "mock")]
mod mock;
mod model;
mod store;
mod validate;

#[cfg(feature = "mock")]
pub use mock::MockStore;
pub use model::{DEFAULT_DEPTH, Item, ItemId, Menu, MenuId, Target};
pub use store::{MenuStore, StoreError, StoreErrorKind};
pub use validate::{ValidationError, validate_menu, validate_store};
