//! Folder tree navigation
//!
//! The backend returns the entire folder tree in one response. The navigator
//! keeps that tree in memory together with a navigation cursor (current
//! folder + ancestor stack) and derives the currently displayed children,
//! so stepping into and out of folders never re-fetches.
//!
//! Mutations (create/delete) are handled by the caller as "mutate remotely,
//! then reload the whole tree"; there is no incremental or optimistic
//! insert. The tree is replaced wholesale via [`FolderNavigator::replace_tree`].

use serde::{Deserialize, Serialize};

/// A document reference carried inline on a folder node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    #[serde(default, alias = "documentId")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// A folder node as returned by the backend tree endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderNode {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub children: Vec<FolderNode>,
    #[serde(default, rename = "userDocuments")]
    pub user_documents: Vec<DocumentRef>,
}

impl FolderNode {
    /// Number of immediate subfolders.
    pub fn subfolder_count(&self) -> usize {
        self.children.len()
    }

    /// Number of documents held directly in this folder.
    pub fn document_count(&self) -> usize {
        self.user_documents.len()
    }
}

/// The full folder tree for one session, wrapped in a synthetic root.
///
/// The root itself is never displayed; only its children are. Lookup assumes
/// ids are globally unique across the tree, matching the backend contract.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FolderTree {
    top_level: Vec<FolderNode>,
}

impl FolderTree {
    /// Wrap the top-level folders returned by the API in a synthetic root.
    pub fn new(top_level: Vec<FolderNode>) -> Self {
        Self { top_level }
    }

    /// The root's immediate children.
    pub fn root_children(&self) -> &[FolderNode] {
        &self.top_level
    }

    /// Depth-first lookup of a folder anywhere in the tree.
    pub fn find(&self, folder_id: &str) -> Option<&FolderNode> {
        fn walk<'a>(nodes: &'a [FolderNode], id: &str) -> Option<&'a FolderNode> {
            for node in nodes {
                if node.id == id {
                    return Some(node);
                }
                if let Some(found) = walk(&node.children, id) {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.top_level, folder_id)
    }

    /// Flatten the tree depth-first into (depth, node) pairs.
    ///
    /// Used to build indented folder pickers.
    pub fn flatten(&self) -> Vec<(usize, &FolderNode)> {
        fn walk<'a>(nodes: &'a [FolderNode], depth: usize, out: &mut Vec<(usize, &'a FolderNode)>) {
            for node in nodes {
                out.push((depth, node));
                walk(&node.children, depth + 1, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.top_level, 0, &mut out);
        out
    }
}

/// Navigation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigatorError {
    #[error("Folder not found")]
    NotFound,
}

/// Breadcrumb-navigable cursor over a [`FolderTree`].
///
/// Invariant: `stack` is always the true ancestry (root-exclusive) of
/// `current` within the last-loaded tree. Opening a child pushes the prior
/// current folder; going back pops it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FolderNavigator {
    tree: FolderTree,
    current: Option<FolderNode>,
    stack: Vec<FolderNode>,
}

impl FolderNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tree with a freshly fetched one and reset the cursor to
    /// root, so the displayed children are the root's immediate children.
    pub fn replace_tree(&mut self, tree: FolderTree) {
        self.tree = tree;
        self.current = None;
        self.stack.clear();
    }

    pub fn tree(&self) -> &FolderTree {
        &self.tree
    }

    /// The folder the cursor points at, or `None` at root.
    pub fn current(&self) -> Option<&FolderNode> {
        self.current.as_ref()
    }

    /// Ancestors of the current folder, root-exclusive, oldest first.
    pub fn stack(&self) -> &[FolderNode] {
        &self.stack
    }

    /// The children currently on display.
    pub fn displayed(&self) -> &[FolderNode] {
        match &self.current {
            Some(folder) => &folder.children,
            None => self.tree.root_children(),
        }
    }

    /// Whether the cursor is somewhere below root.
    pub fn in_subfolder(&self) -> bool {
        self.current.is_some()
    }

    /// Step into a folder looked up by id within the loaded tree.
    ///
    /// Does not re-fetch: an id absent from the loaded tree is an error.
    pub fn open(&mut self, folder_id: &str) -> Result<(), NavigatorError> {
        let target = self
            .tree
            .find(folder_id)
            .cloned()
            .ok_or(NavigatorError::NotFound)?;
        if let Some(prev) = self.current.take() {
            self.stack.push(prev);
        }
        self.current = Some(target);
        Ok(())
    }

    /// Step one level up. With an empty stack this returns to root.
    pub fn back(&mut self) {
        self.current = self.stack.pop();
    }

    /// Jump directly to a breadcrumb position.
    ///
    /// Index 0 is root (clears the cursor and stack); index `i > 0` selects
    /// the ancestor at stack position `i - 1`, truncating the stack before
    /// it, equivalent to repeated [`back`](Self::back) calls in one step.
    /// Out-of-range indices clamp to the deepest ancestor.
    pub fn jump_to_breadcrumb(&mut self, index: usize) {
        if index == 0 {
            self.current = None;
            self.stack.clear();
            return;
        }
        let pos = (index - 1).min(self.stack.len().saturating_sub(1));
        if pos < self.stack.len() {
            self.current = Some(self.stack[pos].clone());
            self.stack.truncate(pos);
        }
    }

    /// Breadcrumb labels from root to the current folder, paired with the
    /// index accepted by [`jump_to_breadcrumb`](Self::jump_to_breadcrumb).
    /// The final entry (the current folder) is not clickable and carries no
    /// jump target below itself, but is included for display.
    pub fn breadcrumbs(&self) -> Vec<(usize, String)> {
        let mut crumbs = vec![(0, "Root".to_string())];
        for (i, folder) in self.stack.iter().enumerate() {
            crumbs.push((i + 1, folder.name.clone()));
        }
        if let Some(current) = &self.current {
            crumbs.push((self.stack.len() + 1, current.name.clone()));
        }
        crumbs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str, name: &str, children: Vec<FolderNode>) -> FolderNode {
        FolderNode {
            id: id.to_string(),
            name: name.to_string(),
            created_at: None,
            children,
            user_documents: Vec::new(),
        }
    }

    /// Root children [A, B], A has child A1.
    fn sample_tree() -> FolderTree {
        let a1 = folder("a1", "A1", vec![]);
        let a = folder("a", "A", vec![a1]);
        let b = folder("b", "B", vec![]);
        FolderTree::new(vec![a, b])
    }

    fn ids(nodes: &[FolderNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_load_resets_to_root() {
        let mut nav = FolderNavigator::new();
        nav.replace_tree(sample_tree());
        nav.open("a").unwrap();

        nav.replace_tree(sample_tree());
        assert!(nav.current().is_none());
        assert!(nav.stack().is_empty());
        assert_eq!(ids(nav.displayed()), vec!["a", "b"]);
    }

    #[test]
    fn test_open_descends_and_pushes_stack() {
        let mut nav = FolderNavigator::new();
        nav.replace_tree(sample_tree());

        nav.open("a").unwrap();
        assert_eq!(nav.current().unwrap().id, "a");
        assert!(nav.stack().is_empty());
        assert_eq!(ids(nav.displayed()), vec!["a1"]);

        nav.open("a1").unwrap();
        assert_eq!(nav.current().unwrap().id, "a1");
        assert_eq!(ids(nav.stack()), ["a"].to_vec());
        assert!(nav.displayed().is_empty());
    }

    #[test]
    fn test_open_then_back_restores_prior_view() {
        let mut nav = FolderNavigator::new();
        nav.replace_tree(sample_tree());
        nav.open("a").unwrap();

        let before_current = nav.current().cloned();
        let before_displayed: Vec<String> =
            nav.displayed().iter().map(|f| f.id.clone()).collect();

        nav.open("a1").unwrap();
        nav.back();

        assert_eq!(nav.current().cloned(), before_current);
        let after: Vec<String> = nav.displayed().iter().map(|f| f.id.clone()).collect();
        assert_eq!(after, before_displayed);
    }

    #[test]
    fn test_back_from_depth_one_returns_to_root() {
        let mut nav = FolderNavigator::new();
        nav.replace_tree(sample_tree());
        nav.open("b").unwrap();

        nav.back();
        assert!(nav.current().is_none());
        assert_eq!(ids(nav.displayed()), vec!["a", "b"]);

        // Back at root is a no-op.
        nav.back();
        assert!(nav.current().is_none());
        assert_eq!(ids(nav.displayed()), vec!["a", "b"]);
    }

    #[test]
    fn test_open_unknown_id_fails_without_moving() {
        let mut nav = FolderNavigator::new();
        nav.replace_tree(sample_tree());
        nav.open("a").unwrap();

        assert_eq!(nav.open("missing"), Err(NavigatorError::NotFound));
        assert_eq!(nav.current().unwrap().id, "a");
        assert!(nav.stack().is_empty());
    }

    #[test]
    fn test_open_finds_deep_nodes() {
        let deep = folder(
            "x",
            "X",
            vec![folder("y", "Y", vec![folder("z", "Z", vec![])])],
        );
        let mut nav = FolderNavigator::new();
        nav.replace_tree(FolderTree::new(vec![deep]));

        nav.open("z").unwrap();
        assert_eq!(nav.current().unwrap().id, "z");
    }

    #[test]
    fn test_scenario_from_listing_contract() {
        // load() -> displayed [A, B]; open(A) -> [A1], stack [];
        // open(A1) -> [], stack [A]; back() -> [A1], stack [], current A.
        let mut nav = FolderNavigator::new();
        nav.replace_tree(sample_tree());
        assert_eq!(ids(nav.displayed()), vec!["a", "b"]);

        nav.open("a").unwrap();
        assert_eq!(ids(nav.displayed()), vec!["a1"]);
        assert!(nav.stack().is_empty());

        nav.open("a1").unwrap();
        assert!(nav.displayed().is_empty());
        assert_eq!(ids(nav.stack()), ["a"].to_vec());

        nav.back();
        assert_eq!(ids(nav.displayed()), vec!["a1"]);
        assert!(nav.stack().is_empty());
        assert_eq!(nav.current().unwrap().id, "a");
    }

    #[test]
    fn test_jump_to_root_is_idempotent() {
        let mut nav = FolderNavigator::new();
        nav.replace_tree(sample_tree());
        nav.open("a").unwrap();
        nav.open("a1").unwrap();

        nav.jump_to_breadcrumb(0);
        assert!(nav.current().is_none());
        assert!(nav.stack().is_empty());
        assert_eq!(ids(nav.displayed()), vec!["a", "b"]);

        nav.jump_to_breadcrumb(0);
        assert!(nav.current().is_none());
        assert_eq!(ids(nav.displayed()), vec!["a", "b"]);
    }

    #[test]
    fn test_jump_to_ancestor_truncates_stack() {
        let deep = folder(
            "x",
            "X",
            vec![folder("y", "Y", vec![folder("z", "Z", vec![])])],
        );
        let mut nav = FolderNavigator::new();
        nav.replace_tree(FolderTree::new(vec![deep]));
        nav.open("x").unwrap();
        nav.open("y").unwrap();
        nav.open("z").unwrap();
        assert_eq!(ids(nav.stack()), ["x", "y"].to_vec());

        // Index 1 selects the first stacked ancestor (X).
        nav.jump_to_breadcrumb(1);
        assert_eq!(nav.current().unwrap().id, "x");
        assert!(nav.stack().is_empty());
        assert_eq!(ids(nav.displayed()), vec!["y"]);
    }

    #[test]
    fn test_jump_matches_repeated_back() {
        let deep = folder(
            "x",
            "X",
            vec![folder("y", "Y", vec![folder("z", "Z", vec![])])],
        );

        let mut jumped = FolderNavigator::new();
        jumped.replace_tree(FolderTree::new(vec![deep.clone()]));
        jumped.open("x").unwrap();
        jumped.open("y").unwrap();
        jumped.open("z").unwrap();
        jumped.jump_to_breadcrumb(2);

        let mut stepped = FolderNavigator::new();
        stepped.replace_tree(FolderTree::new(vec![deep]));
        stepped.open("x").unwrap();
        stepped.open("y").unwrap();
        stepped.open("z").unwrap();
        stepped.back();

        assert_eq!(jumped, stepped);
    }

    #[test]
    fn test_breadcrumbs_list_root_stack_and_current() {
        let mut nav = FolderNavigator::new();
        nav.replace_tree(sample_tree());
        assert_eq!(nav.breadcrumbs(), vec![(0, "Root".to_string())]);

        nav.open("a").unwrap();
        nav.open("a1").unwrap();
        assert_eq!(
            nav.breadcrumbs(),
            vec![
                (0, "Root".to_string()),
                (1, "A".to_string()),
                (2, "A1".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_orders_depth_first() {
        let tree = sample_tree();
        let flat: Vec<(usize, &str)> = tree
            .flatten()
            .into_iter()
            .map(|(d, n)| (d, n.id.as_str()))
            .collect();
        assert_eq!(flat, vec![(0, "a"), (1, "a1"), (0, "b")]);
    }

    #[test]
    fn test_folder_node_deserializes_wire_shape() {
        let json = r#"{
            "id": "f1",
            "name": "Reports",
            "createdAt": "2025-03-01T10:00:00Z",
            "children": [{"id": "f2", "name": "Q1"}],
            "userDocuments": [{"id": "d1", "title": "summary.pdf"}]
        }"#;

        let node: FolderNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.id, "f1");
        assert_eq!(node.subfolder_count(), 1);
        assert_eq!(node.document_count(), 1);
        assert_eq!(node.children[0].name, "Q1");
        // Nested nodes tolerate missing optional fields.
        assert!(node.children[0].created_at.is_none());
    }

    #[test]
    fn test_empty_tree_displays_nothing() {
        let nav = FolderNavigator::new();
        assert!(nav.displayed().is_empty());
        assert!(nav.tree().find("anything").is_none());
    }
}
