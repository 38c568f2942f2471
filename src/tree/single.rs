//! Flat reference tree over a single repository

use std::rc::Rc;

use crate::matcher::RefMatcher;
use crate::model::{GitRef, TreeNode};

use super::{
    PopupData, TreeModel, VariantKind, bucket_members, default_selectable, filter_refs,
    first_selectable, ref_rows, root_rows,
};

/// The layout for a popup scoped to exactly one repository: action rows,
/// then the repository's references as a flat (optionally bucketed) list.
/// Filtering applies when a matcher is set.
pub struct SingleRepoModel {
    data: Rc<PopupData>,
    filter: Option<Rc<RefMatcher>>,
    prefix_grouping: bool,
    /// References surviving the current filter, in input order
    visible: Vec<GitRef>,
}

impl SingleRepoModel {
    pub fn new(data: Rc<PopupData>, prefix_grouping: bool) -> Self {
        let visible = data.repos.first().map(|s| s.refs.clone()).unwrap_or_default();
        Self {
            data,
            filter: None,
            prefix_grouping,
            visible,
        }
    }

    fn recompute(&mut self) {
        let refs = self
            .data
            .repos
            .first()
            .map(|s| s.refs.as_slice())
            .unwrap_or(&[]);
        self.visible = filter_refs(refs, self.filter.as_deref());
    }
}

impl TreeModel for SingleRepoModel {
    fn kind(&self) -> VariantKind {
        VariantKind::SingleRepo
    }

    fn children(&self, node: Option<&TreeNode>) -> Vec<TreeNode> {
        match node {
            None => root_rows(&self.data, ref_rows(&self.visible, self.prefix_grouping, None)),
            Some(TreeNode::RefBucket(bucket)) => bucket_members(&self.visible, bucket, None),
            Some(_) => Vec::new(),
        }
    }

    fn preferred_selection(&self) -> Option<Vec<TreeNode>> {
        let state = self.data.repos.first()?;
        if let Some(current) = &state.repo.current {
            if let Some(r) = self.visible.iter().find(|r| &r.name == current) {
                let rows = ref_rows(&self.visible, self.prefix_grouping, None);
                let target = TreeNode::Ref(r.clone());
                if rows.contains(&target) {
                    return Some(vec![target]);
                }
                // current ref lives inside a prefix bucket
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
