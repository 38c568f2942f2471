//! Grouped layout with speed-search pruning across repositories

use std::rc::Rc;

use tracing::trace;

use crate::matcher::RefMatcher;
use crate::model::{GitRef, Repo, TreeNode};

use super::{
    PopupData, TreeModel, VariantKind, bucket_members, default_selectable, filter_refs,
    first_selectable, ref_rows, root_rows,
};

/// One repository's surviving slice of the filtered tree
#[derive(Clone, Debug)]
struct VisibleRepo {
    repo: Repo,
    /// References whose own name satisfied the matcher
    refs: Vec<GitRef>,
}

/// The grouped layout while a search is active. The matcher applies to
/// both reference and repository names; a repository survives when its own
/// name matches or at least one of its references does, and pruning always
/// walks the references rather than stopping at the repository name.
pub struct FilteringGroupedModel {
    data: Rc<PopupData>,
    filter: Option<Rc<RefMatcher>>,
    prefix_grouping: bool,
    visible: Vec<VisibleRepo>,
}

impl FilteringGroupedModel {
    pub fn new(data: Rc<PopupData>, prefix_grouping: bool) -> Self {
        let mut model = Self {
            data,
            filter: None,
            prefix_grouping,
            visible: Vec::new(),
        };
        model.recompute();
        model
    }

    fn recompute(&mut self) {
        self.visible = self
            .data
            .repos
            .iter()
            .filter_map(|s| match self.filter.as_deref() {
                None => Some(VisibleRepo {
                    repo: s.repo.clone(),
                    refs: s.refs.clone(),
                }),
                Some(m) => {
                    let refs = filter_refs(&s.refs, Some(m));
                    if m.matches(&s.repo.name) || !refs.is_empty() {
                        Some(VisibleRepo {
                            repo: s.repo.clone(),
                            refs,
                        })
                    } else {
                        None
                    }
                }
            })
            .collect();
        trace!(visible_repos = self.visible.len(), "refiltered grouped tree");
    }

    fn visible_repo(&self, repo: &Repo) -> Option<&VisibleRepo> {
        self.visible.iter().find(|v| v.repo.id == repo.id)
    }
}

impl TreeModel for FilteringGroupedModel {
    fn kind(&self) -> VariantKind {
        VariantKind::FilteringGrouped
    }

    fn children(&self, node: Option<&TreeNode>) -> Vec<TreeNode> {
        match node {
            None => {
                let repos = self
                    .visible
                    .iter()
                    .map(|v| TreeNode::TopLevelRepo(v.repo.clone()))
                    .collect();
                root_rows(&self.data, repos)
            }
            Some(TreeNode::TopLevelRepo(repo)) | Some(TreeNode::Repo(repo)) => self
                .visible_repo(repo)
                .map(|v| ref_rows(&v.refs, self.prefix_grouping, Some(&repo.id)))
                .unwrap_or_default(),
            Some(TreeNode::RefBucket(bucket)) => {
                let Some(repo_id) = &bucket.repo else {
                    return Vec::new();
                };
                self.visible
                    .iter()
                    .find(|v| &v.repo.id == repo_id)
                    .map(|v| bucket_members(&v.refs, bucket, Some(repo_id)))
                    .unwrap_or_default()
            }
            Some(_) => Vec::new(),
        }
    }

    fn preferred_selection(&self) -> Option<Vec<TreeNode>> {
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
