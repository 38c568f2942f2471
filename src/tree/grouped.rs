//! Multi-repository layout: references nested under their owning repository

use std::rc::Rc;

use tracing::debug;

use crate::matcher::RefMatcher;
use crate::model::{RefUnderRepo, TreeNode};

use super::{
    PopupData, TreeModel, VariantKind, bucket_members, default_selectable, first_selectable,
    ref_rows, root_rows,
};

/// The unfiltered grouped layout: one top-level row per repository, each
/// expanding into that repository's references. Active only while no
/// search filter is set; filtering swaps the step over to
/// [`super::FilteringGroupedModel`].
pub struct GroupedModel {
    data: Rc<PopupData>,
    prefix_grouping: bool,
}

impl GroupedModel {
    pub fn new(data: Rc<PopupData>, prefix_grouping: bool) -> Self {
        Self {
            data,
            prefix_grouping,
        }
    }
}

impl TreeModel for GroupedModel {
    fn kind(&self) -> VariantKind {
        VariantKind::Grouped
    }

    fn children(&self, node: Option<&TreeNode>) -> Vec<TreeNode> {
        match node {
            None => {
                let repos = self
                    .data
                    .repos
                    .iter()
                    .map(|s| TreeNode::TopLevelRepo(s.repo.clone()))
                    .collect();
                root_rows(&self.data, repos)
            }
            Some(TreeNode::TopLevelRepo(repo)) | Some(TreeNode::Repo(repo)) => self
                .data
                .repo_state(&repo.id)
                .map(|s| ref_rows(&s.refs, self.prefix_grouping, Some(&repo.id)))
                .unwrap_or_default(),
            Some(TreeNode::RefBucket(bucket)) => {
                let Some(repo) = &bucket.repo else {
                    return Vec::new();
                };
                self.data
                    .repo_state(repo)
                    .map(|s| bucket_members(&s.refs, bucket, Some(repo)))
                    .unwrap_or_default()
            }
            Some(_) => Vec::new(),
        }
    }

    fn preferred_selection(&self) -> Option<Vec<TreeNode>> {
        let state = self.data.repos.first()?;
        if let Some(current) = &state.repo.current {
            if let Some(r) = state.refs.iter().find(|r| &r.name == current) {
                return Some(vec![
                    TreeNode::TopLevelRepo(state.repo.clone()),
                    TreeNode::RefUnderRepo(RefUnderRepo {
                        repo: state.repo.id.clone(),
                        reference: r.clone(),
                    }),
                ]);
            }
        }
        first_selectable(&self.children(None)).map(|n| vec![n])
    }

    fn is_selectable(&self, node: &TreeNode) -> bool {
        default_selectable(node)
    }

    fn set_filter(&mut self, matcher: Option<Rc<RefMatcher>>) {
        // Grouped is the no-filter layout; activation swaps the model, so
        // only a clear can legitimately arrive here.
        if let Some(m) = matcher {
            debug!(pattern = m.pattern(), "filter ignored by unfiltered grouped model");
        }
    }

    fn set_prefix_grouping(&mut self, enabled: bool) {
        self.prefix_grouping = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GitRef, Repo, RepoState};

    fn data() -> Rc<PopupData> {
        Rc::new(PopupData {
            repos: vec![
                RepoState::new(
                    Repo::new("a", "frontend").with_current("main"),
                    vec![GitRef::branch("main"), GitRef::branch("develop")],
                ),
                RepoState::new(
                    Repo::new("b", "backend").with_current("main"),
                    vec![GitRef::branch("main"), GitRef::tag("v2.0")],
                ),
            ],
            top_actions: Vec::new(),
        })
    }

    #[test]
    fn root_lists_one_row_per_repo() {
        let model = GroupedModel::new(data(), false);
        let rows = model.children(None);
        let labels: Vec<&str> = rows.iter().map(|n| n.label()).collect();
        assert_eq!(labels, vec!["frontend", "backend"]);
        assert!(rows.iter().all(|n| matches!(n, TreeNode::TopLevelRepo(_))));
    }

    #[test]
    fn repo_rows_expand_into_refs_under_repo() {
        let model = GroupedModel::new(data(), false);
        let rows = model.children(None);
        let refs = model.children(Some(&rows[1]));
        let labels: Vec<&str> = refs.iter().map(|n| n.label()).collect();
        assert_eq!(labels, vec!["main", "v2.0"]);
        assert!(refs.iter().all(|n| matches!(n, TreeNode::RefUnderRepo(_))));
    }

    #[test]
    fn preferred_selection_descends_into_first_repo() {
        let model = GroupedModel::new(data(), false);
        let path = model.preferred_selection().unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].label(), "frontend");
        assert_eq!(path[1].label(), "main");
    }

    #[test]
    fn clearing_a_filter_is_a_no_op() {
        let mut model = GroupedModel::new(data(), false);
        let before = model.children(None);
        model.set_filter(None);
        assert_eq!(model.children(None), before);
    }
}
