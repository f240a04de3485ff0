//! Breadcrumb derivation from parent links.

use doctree_entity::Folder;

use super::TreeIndex;

/// Resolves root-to-folder breadcrumb trails against a [`TreeIndex`].
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    index: &'a TreeIndex,
}

impl<'a> PathResolver<'a> {
    /// Creates a resolver over the given index.
    pub fn new(index: &'a TreeIndex) -> Self {
        Self { index }
    }

    /// Returns the breadcrumb trail for a folder, root first, the given
    /// folder last.
    ///
    /// An unresolved parent link truncates the trail at that point and
    /// the partial breadcrumb is returned; cycles are prevented upstream
    /// by move validation, so the bounded walk here is defensive only.
    pub fn breadcrumb_of(&self, folder: &Folder) -> Vec<Folder> {
        let mut trail: Vec<Folder> = self
            .index
            .ancestor_ids(folder.id)
            .into_iter()
            .rev()
            .filter_map(|id| self.index.find_by_id(id).cloned())
            .collect();
        trail.push(folder.clone());
        trail
    }
}
