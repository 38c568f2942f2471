//! Tree model variants - interchangeable providers over one reference set
//!
//! The engine picks one of four variants per step and swaps in a freshly
//! built one whenever the filter-activation state changes. Variants share
//! the read-only [`PopupData`] snapshot and differ only in grouping and
//! filtering strategy.

mod filtering;
mod grouped;
mod pinned;
mod single;

pub use filtering::FilteringGroupedModel;
pub use grouped::GroupedModel;
pub use pinned::PinnedRepoModel;
pub use single::SingleRepoModel;

use std::rc::Rc;

use crate::matcher::RefMatcher;
use crate::model::{GitRef, RefBucket, RefUnderRepo, RepoId, RepoState, TreeNode};

/// Which tree layout a step is currently presenting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantKind {
    SingleRepo,
    Grouped,
    FilteringGrouped,
    PinnedRepo,
}

/// Pick the layout for the current step.
///
/// Grouping is noise with a single repository, so that collapses to a flat
/// list; the pinned shortcut only applies while no search is active, since
/// searching implies the user wants to look across everything.
pub fn choose_variant(
    filter_active: bool,
    repo_count: usize,
    prefers_grouped: bool,
    has_pinned: bool,
) -> VariantKind {
    if !filter_active && repo_count > 1 && !prefers_grouped && has_pinned {
        VariantKind::PinnedRepo
    } else if filter_active && repo_count > 1 {
        VariantKind::FilteringGrouped
    } else if !filter_active && repo_count > 1 {
        VariantKind::Grouped
    } else {
        VariantKind::SingleRepo
    }
}

/// The read-only inputs every variant draws from: repository snapshots and
/// the top-level action rows, which are built once per step and reused
/// across model swaps so action ordering and identity stay stable.
#[derive(Debug)]
pub struct PopupData {
    pub repos: Vec<RepoState>,
    pub top_actions: Vec<TreeNode>,
}

impl PopupData {
    pub fn repo_state(&self, id: &RepoId) -> Option<&RepoState> {
        self.repos.iter().find(|s| &s.repo.id == id)
    }
}

/// One interchangeable tree data provider.
///
/// `children(None)` yields the root row set: top-level action items first,
/// then a separator if any were added, then repository/reference rows.
pub trait TreeModel {
    fn kind(&self) -> VariantKind;

    /// Ordered children of `node`, or the root rows when `None`
    fn children(&self, node: Option<&TreeNode>) -> Vec<TreeNode>;

    /// Path to highlight when the popup first opens
    fn preferred_selection(&self) -> Option<Vec<TreeNode>>;

    fn is_selectable(&self, node: &TreeNode) -> bool;

    /// Re-derive visible children against `matcher`; `None` clears
    /// filtering. Idempotent, no side effects beyond the visible-set cache.
    fn set_filter(&mut self, matcher: Option<Rc<RefMatcher>>);

    /// Toggle slash-prefix bucketing. Purely presentational; the underlying
    /// reference set never changes.
    fn set_prefix_grouping(&mut self, enabled: bool);
}

/// Build a fresh model of the requested variant over shared data.
pub(crate) fn build_model(
    kind: VariantKind,
    data: Rc<PopupData>,
    pinned: Option<RepoId>,
    prefix_grouping: bool,
    matcher: Option<Rc<RefMatcher>>,
) -> Box<dyn TreeModel> {
    let mut model: Box<dyn TreeModel> = match kind {
        VariantKind::SingleRepo => Box::new(SingleRepoModel::new(data, prefix_grouping)),
        VariantKind::Grouped => Box::new(GroupedModel::new(data, prefix_grouping)),
        VariantKind::FilteringGrouped => {
            Box::new(FilteringGroupedModel::new(data, prefix_grouping))
        }
        VariantKind::PinnedRepo => {
            // choose_variant only returns PinnedRepo when a pin exists
            let pinned = pinned.expect("pinned variant requires a pinned repository");
            Box::new(PinnedRepoModel::new(data, pinned, prefix_grouping))
        }
    };
    if matcher.is_some() {
        model.set_filter(matcher);
    }
    model
}

/// Default selectability shared by all variants: references and repository
/// rows can be chosen, enabled leaf actions can be chosen, separators and
/// disabled items cannot. Buckets and group actions expand via
/// `has_substep` instead.
pub(crate) fn default_selectable(node: &TreeNode) -> bool {
    match node {
        TreeNode::Ref(_) | TreeNode::RefUnderRepo(_) => true,
        TreeNode::TopLevelRepo(_) | TreeNode::Repo(_) => true,
        TreeNode::Action(item) => item.enabled && !item.is_group(),
        TreeNode::Separator(_) => false,
        TreeNode::RefBucket(_) => false,
    }
}

/// First selectable node of a row set, in order.
pub(crate) fn first_selectable(rows: &[TreeNode]) -> Option<TreeNode> {
    rows.iter().find(|n| default_selectable(n)).cloned()
}

/// The shared first path segment of a slash-delimited name, if any.
fn slash_prefix(name: &str) -> Option<&str> {
    name.split_once('/').map(|(prefix, _)| prefix)
}

/// Turn a filtered reference list into display rows, bucketing names that
/// share a first slash segment when `prefix_grouping` is on. A bucket is
/// only formed for two or more members; lone members stay top-level.
pub(crate) fn ref_rows(
    refs: &[GitRef],
    prefix_grouping: bool,
    repo: Option<&RepoId>,
) -> Vec<TreeNode> {
    let wrap = |r: &GitRef| match repo {
        Some(id) => TreeNode::RefUnderRepo(RefUnderRepo {
            repo: id.clone(),
            reference: r.clone(),
        }),
        None => TreeNode::Ref(r.clone()),
    };

    if !prefix_grouping {
        return refs.iter().map(wrap).collect();
    }

    let mut rows = Vec::new();
    let mut seen_prefixes: Vec<&str> = Vec::new();
    for r in refs {
        match slash_prefix(&r.name) {
            Some(prefix) => {
                let members = refs
                    .iter()
                    .filter(|other| slash_prefix(&other.name) == Some(prefix))
                    .count();
                if members < 2 {
                    rows.push(wrap(r));
                } else if !seen_prefixes.contains(&prefix) {
                    seen_prefixes.push(prefix);
                    rows.push(TreeNode::RefBucket(RefBucket {
                        repo: repo.cloned(),
                        prefix: prefix.to_string(),
                    }));
                }
            }
            None => rows.push(wrap(r)),
        }
    }
    rows
}

/// Members of a prefix bucket, drawn from the same filtered list the
/// bucket was derived from.
pub(crate) fn bucket_members(
    refs: &[GitRef],
    bucket: &RefBucket,
    repo: Option<&RepoId>,
) -> Vec<TreeNode> {
    refs.iter()
        .filter(|r| slash_prefix(&r.name) == Some(bucket.prefix.as_str()))
        .map(|r| match repo {
            Some(id) => TreeNode::RefUnderRepo(RefUnderRepo {
                repo: id.clone(),
                reference: r.clone(),
            }),
            None => TreeNode::Ref(r.clone()),
        })
        .collect()
}

/// Apply a filter to a reference list by display name.
pub(crate) fn filter_refs(refs: &[GitRef], matcher: Option<&RefMatcher>) -> Vec<GitRef> {
    match matcher {
        None => refs.to_vec(),
        Some(m) => refs.iter().filter(|r| m.matches(&r.name)).cloned().collect(),
    }
}

/// Root rows common to every variant: the prebuilt action rows, one
/// unlabeled separator when any exist, then the variant's own rows.
pub(crate) fn root_rows(data: &PopupData, tree_rows: Vec<TreeNode>) -> Vec<TreeNode> {
    let mut rows = data.top_actions.clone();
    if !rows.is_empty() {
        rows.push(TreeNode::Separator(None));
    }
    rows.extend(tree_rows);
    rows
}
