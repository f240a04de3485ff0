//! Queryable parent→children projection of one entity's flat folder list.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use doctree_core::types::FolderId;
use doctree_entity::Folder;

/// In-memory index over the flat folder list of one entity.
///
/// The index is a pure projection of the last-fetched list: it is
/// rebuilt from scratch on every refetch and never mutated in place.
/// No network calls, no side effects.
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    by_id: HashMap<FolderId, Folder>,
    children: HashMap<Option<FolderId>, Vec<FolderId>>,
}

impl TreeIndex {
    /// Builds the index from a flat, unordered folder list.
    ///
    /// Children are ordered by case-insensitive name (ties broken by id)
    /// so the view stays deterministic across refetches.
    pub fn build(folders: Vec<Folder>) -> Self {
        let mut children: HashMap<Option<FolderId>, Vec<FolderId>> = HashMap::new();
        let mut by_id: HashMap<FolderId, Folder> = HashMap::with_capacity(folders.len());

        for folder in folders {
            children.entry(folder.parent_id).or_default().push(folder.id);
            by_id.insert(folder.id, folder);
        }

        for siblings in children.values_mut() {
            siblings.sort_by(|a, b| {
                let name_a = by_id.get(a).map(|f| f.name.to_lowercase()).unwrap_or_default();
                let name_b = by_id.get(b).map(|f| f.name.to_lowercase()).unwrap_or_default();
                name_a.cmp(&name_b).then(a.cmp(b))
            });
        }

        Self { by_id, children }
    }

    /// Returns the ordered children of a folder; `None` selects
    /// root-level folders (normally just the single root).
    pub fn children_of(&self, parent: Option<FolderId>) -> Vec<&Folder> {
        self.children
            .get(&parent)
            .map(|ids| ids.iter().filter_map(|id| self.by_id.get(id)).collect())
            .unwrap_or_default()
    }

    /// Looks up a folder by id.
    pub fn find_by_id(&self, folder_id: FolderId) -> Option<&Folder> {
        self.by_id.get(&folder_id)
    }

    /// Whether the folder has at least one child folder.
    pub fn has_children(&self, folder_id: FolderId) -> bool {
        self.children
            .get(&Some(folder_id))
            .is_some_and(|ids| !ids.is_empty())
    }

    /// Returns the entity's root folder, when present in the list.
    pub fn root(&self) -> Option<&Folder> {
        self.children_of(None).into_iter().next()
    }

    /// Number of folders in the index.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the index holds no folders.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Walks parent links upward from `folder_id`, returning the strict
    /// ancestor ids nearest-first.
    ///
    /// The walk stops at the first unresolved parent link (stale cache
    /// during an external deletion) and is bounded by a visited set
    /// should the fetched list ever contain a cycle; both cases are
    /// logged as warnings and yield a best-effort partial chain.
    pub fn ancestor_ids(&self, folder_id: FolderId) -> Vec<FolderId> {
        let mut chain = Vec::new();
        let mut seen: HashSet<FolderId> = HashSet::from([folder_id]);
        let mut cursor = self.by_id.get(&folder_id).and_then(|f| f.parent_id);

        while let Some(id) = cursor {
            if !seen.insert(id) {
                warn!(folder_id = %id, "Cycle in folder parent links; stopping ancestor walk");
                break;
            }
            let Some(folder) = self.by_id.get(&id) else {
                warn!(folder_id = %id, "Parent folder missing from index; stopping ancestor walk");
                break;
            };
            chain.push(id);
            cursor = folder.parent_id;
        }

        chain
    }
}
