//! Flat reference tree scoped to the pinned repository

use std::rc::Rc;

use crate::matcher::RefMatcher;
use crate::model::{GitRef, RepoId, TreeNode};

use super::{
    PopupData, TreeModel, VariantKind, bucket_members, default_selectable, filter_refs,
    first_selectable, ref_rows, root_rows,
};

/// Multi-repository data shown through the single pinned repository's
/// reference tree, bypassing grouping entirely. Chosen only while no
/// search is active; a search swaps the step to the filtering grouped
/// layout so it covers every repository.
pub struct PinnedRepoModel {
    data: Rc<PopupData>,
    pinned: RepoId,
    filter: Option<Rc<RefMatcher>>,
    prefix_grouping: bool,
    visible: Vec<GitRef>,
}

impl PinnedRepoModel {
    pub fn new(data: Rc<PopupData>, pinned: RepoId, prefix_grouping: bool) -> Self {
        let visible = data
            .repo_state(&pinned)
            .map(|s| s.refs.clone())
            .unwrap_or_default();
        Self {
            data,
            pinned,
            filter: None,
            prefix_grouping,
            visible,
        }
    }

    fn recompute(&mut self) {
        let refs = self
            .data
            .repo_state(&self.pinned)
            .map(|s| s.refs.as_slice())
            .unwrap_or(&[]);
        self.visible = filter_refs(refs, self.filter.as_deref());
    }
}

impl TreeModel for PinnedRepoModel {
    fn kind(&self) -> VariantKind {
        VariantKind::PinnedRepo
    }

    fn children(&self, node: Option<&TreeNode>) -> Vec<TreeNode> {
        match node {
            None => root_rows(&self.data, ref_rows(&self.visible, self.prefix_grouping, None)),
            Some(TreeNode::RefBucket(bucket)) => bucket_members(&self.visible, bucket, None),
            Some(_) => Vec::new(),
        }
    }

    fn preferred_selection(&self) -> Option<Vec<TreeNode>> {
        let state = self.data.repo_state(&self.pinned)?;
        if let Some(current) = &state.repo.current {
            if let Some(r) = self.visible.iter().find(|r| &r.name == current) {
                let target = TreeNode::Ref(r.clone());
                let rows = ref_rows(&self.visible, self.prefix_grouping, None);
                if rows.contains(&target) {
                    return Some(vec![target]);
                }
                for row in rows {
                    if let TreeNode::RefBucket(bucket) = &row {
                        if bucket_members(&self.visible, bucket, None).contains(&target) {
                            return Some(vec![row, target]);
                        }
                    }
                }
            }
        }
        first_selectable(&self.children(None)).map(|n| vec![n])
    }

    fn is_selectable(&self, node: &TreeNode) -> bool {
        default_selectable(node)
    }

    fn set_filter(&mut self, matcher: Option<Rc<RefMatcher>>) {
        self.filter = matcher;
        self.recompute();
    }

    fn set_prefix_grouping(&mut self, enabled: bool) {
        self.prefix_grouping = enabled;
    }
}
