//! Menu tree assembly.
//!
//! Given the items of a menu and the path of the current page, this crate
//! draws the slice of the menu a page shows: the path from the root down to
//! the current item, the siblings of every item on that path, the current
//! item's children and the other root items.
//!
//! # Overview
//!
//! - [`ItemIndex`]: adjacency index built once per draw
//! - [`assemble`]: pure, bounded tree-slice assembly
//! - [`Router`]: resolution between route names and paths
//! - [`Menus`]: drawing facade over a [`MenuStore`](menu_store::MenuStore)
//! - [`render_html`]: HTML list rendering
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use menu_tree::{DrawOptions, Menus, RouteTable};
//!
//! let routes = RouteTable::new().with_route("index", "/");
//! let menus = Menus::new(store, Arc::new(routes), DrawOptions::default());
//!
//! let tree = menus.draw("main", "/");
//! println!("{}", menu_tree::render_html(&tree));
//! ```

mod assemble;
mod html;
mod index;
mod menus;
mod router;
mod tree;

pub use assemble::{AssembledLevel, Assembly, ItemClass, Placed, WalkEnd, assemble};
pub use html::{escape_html, render_html};
pub use index::ItemIndex;
pub use menus::{DEFAULT_PLACEHOLDER, DrawError, DrawOptions, Menus};
pub use router::{RouteTable, Router, Unresolvable};
pub use tree::{Diagnostic, DiagnosticKind, Level, MenuEntry, MenuTree};
