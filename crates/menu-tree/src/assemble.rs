//! Bounded tree-slice assembly.
//!
//! [`assemble`] walks from the current item up through its ancestors, then
//! collects the current item's children, the root items and the siblings of
//! every node on the walked path. Each item is classified once; the first
//! classification wins.
//!
//! Levels are relative to the current item: `0` is the current item, negative
//! levels are ancestors, `1` holds the children.

use std::collections::{BTreeMap, HashSet};

use menu_store::{Item, ItemId};
use serde::{Deserialize, Serialize};

use crate::index::ItemIndex;

/// Role of an item in a drawn menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemClass {
    /// The item matching the current page.
    Current,
    /// An ancestor of the current item.
    Selected,
    /// A direct child of the current item.
    Child,
    /// A root item not on the path to the current item.
    Root,
    /// A sibling of an item on the path.
    Neighbour,
}

impl ItemClass {
    /// Lowercase label, as used in HTML classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Selected => "selected",
            Self::Child => "child",
            Self::Root => "root",
            Self::Neighbour => "neighbour",
        }
    }
}

/// Why the ancestor walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkEnd {
    /// Reached an item without a parent.
    Root,
    /// Took `max_depth` hops without reaching a root.
    DepthLimit,
    /// The next parent id does not exist in the menu.
    MissingParent(ItemId),
    /// The next parent was already on the path.
    Cycle(ItemId),
}

impl WalkEnd {
    /// True if the walk stopped before reaching a root.
    #[must_use]
    pub fn is_truncated(self) -> bool {
        !matches!(self, Self::Root)
    }
}

/// An item placed at a level with a class.
#[derive(Clone, Copy, Debug)]
pub struct Placed<'a> {
    pub item: &'a Item,
    pub class: ItemClass,
    pub level: i32,
}

/// Items of one level, sorted.
#[derive(Debug)]
pub struct AssembledLevel<'a> {
    pub level: i32,
    pub items: Vec<Placed<'a>>,
}

/// Result of [`assemble`], borrowing from the index.
#[derive(Debug)]
pub struct Assembly<'a> {
    /// Non-empty levels in ascending order.
    pub levels: Vec<AssembledLevel<'a>>,
    /// How the ancestor walk ended.
    pub end: WalkEnd,
    /// Ancestor path from the current item upwards.
    pub path: Vec<ItemId>,
}

impl Assembly<'_> {
    /// Total number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.iter().map(|l| l.items.len()).sum()
    }

    /// True if nothing was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Accumulates placements, ignoring items that were already placed.
struct Placement<'a> {
    seen: HashSet<ItemId>,
    levels: BTreeMap<i32, Vec<Placed<'a>>>,
}

impl<'a> Placement<'a> {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            levels: BTreeMap::new(),
        }
    }

    fn place(&mut self, item: &'a Item, class: ItemClass, level: i32) {
        if self.seen.insert(item.id) {
            self.levels.entry(level).or_default().push(Placed {
                item,
                class,
                level,
            });
        }
    }

    fn into_levels(self) -> Vec<AssembledLevel<'a>> {
        self.levels
            .into_iter()
            .map(|(level, mut items)| {
                items.sort_by(|a, b| {
                    (a.item.parent_id, a.item.order, &a.item.name, a.item.id).cmp(&(
                        b.item.parent_id,
                        b.item.order,
                        &b.item.name,
                        b.item.id,
                    ))
                });
                AssembledLevel { level, items }
            })
            .collect()
    }
}

/// Walk from `current` towards the root.
///
/// Returns the path (current item first) and why the walk stopped.
fn walk_up<'a>(
    index: &'a ItemIndex,
    current: &'a Item,
    max_depth: u32,
) -> (Vec<&'a Item>, WalkEnd) {
    let mut path = vec![current];
    let mut visited = HashSet::from([current.id]);
    let mut node = current;
    let mut hops = 0;

    let end = loop {
        let Some(parent_id) = node.parent_id else {
            break WalkEnd::Root;
        };
        if hops >= max_depth {
            break WalkEnd::DepthLimit;
        }
        let Some(parent) = index.get(parent_id) else {
            break WalkEnd::MissingParent(parent_id);
        };
        if !visited.insert(parent.id) {
            break WalkEnd::Cycle(parent.id);
        }
        path.push(parent);
        node = parent;
        hops += 1;
    };

    (path, end)
}

/// Level of the `depth`-th node on the ancestor path.
fn level_of(depth: usize) -> i32 {
    -i32::try_from(depth).unwrap_or(i32::MAX)
}

/// Assemble the menu slice around the item `current_id`.
///
/// The ancestor walk takes at most `max_depth` hops and stops early at a root,
/// at a parent id missing from the index, or on a revisited item. Root items
/// share the top path level when the walk reached a root, and sit one level
/// above it otherwise.
///
/// Returns `None` if `current_id` is not in the index.
#[must_use]
pub fn assemble(index: &ItemIndex, current_id: ItemId, max_depth: u32) -> Option<Assembly<'_>> {
    let current = index.get(current_id)?;
    let (path, end) = walk_up(index, current, max_depth);

    let mut placement = Placement::new();

    for (depth, node) in path.iter().enumerate() {
        let class = if depth == 0 {
            ItemClass::Current
        } else {
            ItemClass::Selected
        };
        placement.place(node, class, level_of(depth));
    }

    for child in index.children(Some(current.id)) {
        placement.place(child, ItemClass::Child, 1);
    }

    let top = level_of(path.len() - 1);
    let root_level = if end.is_truncated() { top - 1 } else { top };
    for root in index.roots() {
        placement.place(root, ItemClass::Root, root_level);
    }

    for (depth, node) in path.iter().enumerate() {
        for sibling in index.children(node.parent_id) {
            placement.place(sibling, ItemClass::Neighbour, level_of(depth));
        }
    }

    Some(Assembly {
        levels: placement.into_levels(),
        end,
        path: path.iter().map(|item| item.id).collect(),
    })
}
