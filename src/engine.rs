//! Popup step state machine - descent into repositories and action groups,
//! live model swapping, and the deferred terminal action

use std::rc::Rc;

use tracing::debug;

use crate::actions::{
    ActionGroupResolver, ActionId, ActionItem, ActionItemKind, ActionScope, PendingAction,
    REF_ACTIONS_GROUP, build_action_items,
};
use crate::matcher::RefMatcher;
use crate::model::{GitRef, RepoId, RepoState, TreeNode};
use crate::search::{SearchController, SearchUpdate};
use crate::settings::PopupPrefs;
use crate::tree::{PopupData, TreeModel, VariantKind, build_model, choose_variant};

/// Outcome of handling a chosen value
pub enum StepOutcome {
    /// Push this nested step onto the popup stack
    Push(Box<dyn PopupStep>),
    /// The step is done; a pending action may be waiting in the step
    Final,
}

/// The step contract the host popup framework drives.
///
/// The host queries [`has_substep`](PopupStep::has_substep) before
/// [`on_chosen`](PopupStep::on_chosen) to decide whether hovering should
/// pre-expand a submenu, and consumes the pending action after a final
/// choice. Execution timing stays entirely with the host.
pub trait PopupStep {
    fn title(&self) -> Option<String>;

    /// The rows this step presents (root rows for tree-backed steps)
    fn values(&self) -> Vec<TreeNode>;

    fn is_selectable(&self, value: &TreeNode) -> bool;

    /// Whether choosing `value` would open a nested step
    fn has_substep(&self, value: &TreeNode) -> bool;

    fn on_chosen(&mut self, value: TreeNode, is_final: bool) -> StepOutcome;

    /// Consume the deferred terminal action, if a final choice set one
    fn take_pending_action(&mut self) -> Option<PendingAction>;

    /// Text the speed search matches against for `value`
    fn speed_search_text(&self, value: &TreeNode) -> String;
}

/// One level of the popup navigation stack over a repository scope.
///
/// Owns the active tree model and swaps it for a freshly built variant
/// when the filter-activation state flips; the swap publishes a complete
/// replacement, never a half-mutated model.
pub struct PopupStepEngine {
    data: Rc<PopupData>,
    is_first_step: bool,
    prefs: PopupPrefs,
    pinned: Option<RepoId>,
    resolver: Rc<dyn ActionGroupResolver>,
    top_group: ActionId,
    model: Box<dyn TreeModel>,
    search: SearchController,
    matcher: Option<Rc<RefMatcher>>,
    pending: Option<PendingAction>,
    last_chosen: Option<GitRef>,
}

impl PopupStepEngine {
    /// Root step over the full repository set.
    ///
    /// `top_group` names the action group whose resolved items head the
    /// tree; the pinned repository named in `prefs` takes effect only when
    /// it matches one of `repos`.
    pub fn new_root(
        repos: Vec<RepoState>,
        prefs: PopupPrefs,
        resolver: Rc<dyn ActionGroupResolver>,
        top_group: ActionId,
    ) -> Self {
        let pinned = prefs
            .pinned_repo
            .as_ref()
            .map(|id| RepoId::new(id.clone()))
            .filter(|id| repos.iter().any(|s| &s.repo.id == id));
        Self::build(repos, prefs, pinned, resolver, top_group, true)
    }

    fn build(
        repos: Vec<RepoState>,
        prefs: PopupPrefs,
        pinned: Option<RepoId>,
        resolver: Rc<dyn ActionGroupResolver>,
        top_group: ActionId,
        is_first_step: bool,
    ) -> Self {
        let scope = ActionScope::repos(repos.iter().map(|s| s.repo.id.clone()).collect());
        let top_actions = build_action_items(&*resolver, &top_group, &scope);
        let data = Rc::new(PopupData { repos, top_actions });
        let kind = choose_variant(
            false,
            data.repos.len(),
            prefs.grouped_by_repo,
            pinned.is_some(),
        );
        let model = build_model(
            kind,
            Rc::clone(&data),
            pinned.clone(),
            prefs.prefix_grouping,
            None,
        );
        Self {
            data,
            is_first_step,
            prefs,
            pinned,
            resolver,
            top_group,
            model,
            search: SearchController::new(),
            matcher: None,
            pending: None,
            last_chosen: None,
        }
    }

    pub fn is_first_step(&self) -> bool {
        self.is_first_step
    }

    /// The layout the active model presents
    pub fn variant(&self) -> VariantKind {
        self.model.kind()
    }

    /// Children of `node` in the active model; `None` for the root rows
    pub fn children(&self, node: Option<&TreeNode>) -> Vec<TreeNode> {
        self.model.children(node)
    }

    /// The path to highlight when the popup opens
    pub fn preferred_selection(&self) -> Option<Vec<TreeNode>> {
        self.model.preferred_selection()
    }

    /// Feed a raw speed-search pattern into the step.
    ///
    /// Clearing patterns (`None`, `"/"`, whitespace) restore unfiltered
    /// children; anything else filters. An activation edge re-evaluates
    /// the variant choice and swaps the model when it changed, reusing the
    /// already-built top-level action rows.
    pub fn set_search_pattern(&mut self, pattern: Option<&str>) {
        let update = self.search.on_pattern_changed(pattern);
        self.matcher = match &update {
            SearchUpdate::Clear { .. } => None,
            SearchUpdate::Filter { matcher, .. } => Some(Rc::clone(matcher)),
        };
        if update.activation_changed() {
            self.swap_model_if_needed();
        }
        self.model.set_filter(self.matcher.clone());
    }

    /// Toggle slash-prefix bucketing on the active model (and all models
    /// built after future swaps).
    pub fn set_prefix_grouping(&mut self, enabled: bool) {
        self.prefs.prefix_grouping = enabled;
        self.model.set_prefix_grouping(enabled);
    }

    /// Advisory flag for the host UI: the repositories in scope disagree
    /// on their current reference while synchronized control is on. Has no
    /// effect on model selection.
    pub fn is_branches_diverged(&self) -> bool {
        if self.data.repos.len() <= 1 || !self.prefs.sync_control {
            return false;
        }
        match self.data.repos[0].repo.current.as_deref() {
            // an absent current reference counts as disagreement
            None => true,
            Some(name) => !self
                .data
                .repos
                .iter()
                .all(|s| s.repo.current.as_deref() == Some(name)),
        }
    }

    /// The reference most recently chosen on this step, regardless of
    /// kind. Always written on a reference choice, even when the same
    /// choice also fills [`last_chosen_tag`](Self::last_chosen_tag).
    pub fn last_chosen_ref(&self) -> Option<&str> {
        self.last_chosen.as_ref().map(|r| r.name.as_str())
    }

    /// The most recently chosen reference, only when it was a tag.
    pub fn last_chosen_tag(&self) -> Option<&str> {
        self.last_chosen
            .as_ref()
            .filter(|r| r.is_tag())
            .map(|r| r.name.as_str())
    }

    fn scope(&self) -> ActionScope {
        ActionScope::repos(self.data.repos.iter().map(|s| s.repo.id.clone()).collect())
    }

    fn swap_model_if_needed(&mut self) {
        let kind = choose_variant(
            self.search.filter_active(),
            self.data.repos.len(),
            self.prefs.grouped_by_repo,
            self.pinned.is_some(),
        );
        if kind != self.model.kind() {
            debug!(from = ?self.model.kind(), to = ?kind, "swapping tree model variant");
            self.model = build_model(
                kind,
                Rc::clone(&self.data),
                self.pinned.clone(),
                self.prefs.prefix_grouping,
                self.matcher.clone(),
            );
        }
    }

    fn descend_into_repo(&self, id: &RepoId) -> StepOutcome {
        let Some(state) = self.data.repo_state(id) else {
            // stale node from a previous model; treat as unrecognized
            return StepOutcome::Final;
        };
        let engine = PopupStepEngine::build(
            vec![state.clone()],
            self.prefs.clone(),
            None,
            Rc::clone(&self.resolver),
            self.top_group.clone(),
            false,
        );
        StepOutcome::Push(Box::new(engine))
    }

    /// One level of action resolution for a chosen reference, scoped to
    /// its owning repository when known.
    fn ref_substep(&mut self, reference: GitRef, repo: Option<RepoId>) -> StepOutcome {
        self.last_chosen = Some(reference.clone());
        let repos = match repo {
            Some(id) => vec![id],
            None => self.data.repos.iter().map(|s| s.repo.id.clone()).collect(),
        };
        let title = reference.name.clone();
        let scope = ActionScope::repos(repos).with_reference(reference);
        let items = build_action_items(&*self.resolver, &ActionId::new(REF_ACTIONS_GROUP), &scope);
        StepOutcome::Push(Box::new(ActionListStep::new(
            Some(title),
            items,
            scope,
            Rc::clone(&self.resolver),
        )))
    }

    fn action_chosen(&mut self, item: ActionItem, is_final: bool) -> StepOutcome {
        if !item.enabled {
            return StepOutcome::Final;
        }
        match item.kind {
            ActionItemKind::Leaf => {
                self.set_pending(item);
                StepOutcome::Final
            }
            ActionItemKind::Group { perform_as_group } => {
                if is_final && perform_as_group {
                    self.set_pending(item);
                    return StepOutcome::Final;
                }
                let scope = self.scope();
                let items = build_action_items(&*self.resolver, &item.id, &scope);
                StepOutcome::Push(Box::new(ActionListStep::new(
                    Some(item.label),
                    items,
                    scope,
                    Rc::clone(&self.resolver),
                )))
            }
        }
    }

    fn set_pending(&mut self, item: ActionItem) {
        // unset -> set exactly once per step instance
        assert!(
            self.pending.is_none(),
            "pending action already set for this popup step"
        );
        self.pending = Some(PendingAction {
            action: item.id,
            label: item.label,
            scope: self.scope(),
        });
    }
}

impl PopupStep for PopupStepEngine {
    fn title(&self) -> Option<String> {
        if self.is_first_step {
            Some("Git Branches".to_string())
        } else {
            self.data.repos.first().map(|s| s.repo.name.clone())
        }
    }

    fn values(&self) -> Vec<TreeNode> {
        self.children(None)
    }

    fn is_selectable(&self, value: &TreeNode) -> bool {
        self.model.is_selectable(value)
    }

    fn has_substep(&self, value: &TreeNode) -> bool {
        match value {
            TreeNode::TopLevelRepo(_) | TreeNode::Repo(_) => true,
            TreeNode::RefBucket(_) => true,
            // a reference expands into its action list
            TreeNode::Ref(_) | TreeNode::RefUnderRepo(_) => true,
            TreeNode::Action(item) => item.enabled && item.is_group(),
            TreeNode::Separator(_) => false,
        }
    }

    fn on_chosen(&mut self, value: TreeNode, is_final: bool) -> StepOutcome {
        match value {
            TreeNode::TopLevelRepo(repo) | TreeNode::Repo(repo) => {
                self.descend_into_repo(&repo.id)
            }
            TreeNode::Ref(reference) => self.ref_substep(reference, None),
            TreeNode::RefUnderRepo(rr) => self.ref_substep(rr.reference, Some(rr.repo)),
            TreeNode::Action(item) => self.action_chosen(item, is_final),
            // buckets expand inside the tree widget; separators are inert
            TreeNode::Separator(_) | TreeNode::RefBucket(_) => StepOutcome::Final,
        }
    }

    fn take_pending_action(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    fn speed_search_text(&self, value: &TreeNode) -> String {
        match value {
            TreeNode::Ref(r) => r.name.clone(),
            TreeNode::RefUnderRepo(rr) => rr.reference.name.clone(),
            other => other.label().to_string(),
        }
    }
}

/// A nested flat step over one resolved action group: a single level of
/// action resolution, not a full engine recursion.
pub struct ActionListStep {
    title: Option<String>,
    items: Vec<TreeNode>,
    scope: ActionScope,
    resolver: Rc<dyn ActionGroupResolver>,
    pending: Option<PendingAction>,
}

impl ActionListStep {
    pub fn new(
        title: Option<String>,
        items: Vec<TreeNode>,
        scope: ActionScope,
        resolver: Rc<dyn ActionGroupResolver>,
    ) -> Self {
        Self {
            title,
            items,
            scope,
            resolver,
            pending: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn set_pending(&mut self, item: ActionItem) {
        assert!(
            self.pending.is_none(),
            "pending action already set for this popup step"
        );
        self.pending = Some(PendingAction {
            action: item.id,
            label: item.label,
            scope: self.scope.clone(),
        });
    }
}

impl PopupStep for ActionListStep {
    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn values(&self) -> Vec<TreeNode> {
        self.items.clone()
    }

    fn is_selectable(&self, value: &TreeNode) -> bool {
        match value {
            TreeNode::Action(item) => item.enabled && !item.is_group(),
            _ => false,
        }
    }

    fn has_substep(&self, value: &TreeNode) -> bool {
        match value {
            TreeNode::Action(item) => item.enabled && item.is_group(),
            _ => false,
        }
    }

    fn on_chosen(&mut self, value: TreeNode, is_final: bool) -> StepOutcome {
        match value {
            TreeNode::Action(item) if item.enabled => match item.kind {
                ActionItemKind::Leaf => {
                    self.set_pending(item);
                    StepOutcome::Final
                }
                ActionItemKind::Group { perform_as_group } => {
                    if is_final && perform_as_group {
                        self.set_pending(item);
                        return StepOutcome::Final;
                    }
                    let items =
                        build_action_items(&*self.resolver, &item.id, &self.scope);
                    StepOutcome::Push(Box::new(ActionListStep::new(
                        Some(item.label),
                        items,
                        self.scope.clone(),
                        Rc::clone(&self.resolver),
                    )))
                }
            },
            // disabled actions and every other node kind terminate quietly
            _ => StepOutcome::Final,
        }
    }

    fn take_pending_action(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    fn speed_search_text(&self, value: &TreeNode) -> String {
        value.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ActionEntry, ActionSpec, GroupSpec};
    use crate::model::{Repo, RepoState};

    /// Resolver with a fixed catalog: a top group, a nested group, and
    /// per-reference actions.
    struct TestResolver;

    impl ActionGroupResolver for TestResolver {
        fn resolve(&self, group: &ActionId, scope: &ActionScope) -> Vec<ActionEntry> {
            match group.as_str() {
                "top" => vec![
                    ActionEntry::Action(ActionSpec::new("branch.new", "New Branch...")),
                    ActionEntry::Group(GroupSpec::new("more", "More Actions")),
                ],
                "more" => vec![
                    ActionEntry::Action(ActionSpec::new("fetch", "Fetch All")),
                    ActionEntry::Action(ActionSpec::new("prune", "Prune").disabled()),
                ],
                REF_ACTIONS_GROUP => {
                    if scope.reference.is_some() {
                        vec![
                            ActionEntry::Action(ActionSpec::new("checkout", "Checkout")),
                            ActionEntry::Group(
                                GroupSpec::new("compare", "Compare With").perform_as_group(),
                            ),
                        ]
                    } else {
                        vec![ActionEntry::EmptyPlaceholder]
                    }
                }
                _ => vec![ActionEntry::EmptyPlaceholder],
            }
        }
    }

    fn two_repos() -> Vec<RepoState> {
        vec![
            RepoState::new(
                Repo::new("a", "frontend").with_current("main"),
                vec![GitRef::branch("main"), GitRef::branch("feature/login")],
            ),
            RepoState::new(
                Repo::new("b", "backend").with_current("main"),
                vec![GitRef::branch("main"), GitRef::tag("v2.0")],
            ),
        ]
    }

    fn engine(repos: Vec<RepoState>, prefs: PopupPrefs) -> PopupStepEngine {
        PopupStepEngine::new_root(repos, prefs, Rc::new(TestResolver), ActionId::new("top"))
    }

    #[test]
    fn root_step_starts_grouped_for_multiple_repos() {
        let engine = engine(two_repos(), PopupPrefs::default());
        assert!(engine.is_first_step());
        assert_eq!(engine.variant(), VariantKind::Grouped);

        let rows = engine.values();
        let labels: Vec<&str> = rows.iter().map(|n| n.label()).collect();
        assert_eq!(
            labels,
            vec!["New Branch...", "More Actions", "", "frontend", "backend"]
        );
    }

    #[test]
    fn filter_activation_swaps_variant_and_clear_swaps_back() {
        let mut engine = engine(two_repos(), PopupPrefs::default());
        let before = engine.values();

        engine.set_search_pattern(Some("feat"));
        assert_eq!(engine.variant(), VariantKind::FilteringGrouped);

        // action rows keep their identity across the swap
        assert_eq!(&engine.values()[..3], &before[..3]);

        engine.set_search_pattern(Some("/"));
        assert_eq!(engine.variant(), VariantKind::Grouped);
        assert_eq!(engine.values(), before);
    }

    #[test]
    fn refining_a_pattern_refilters_without_another_swap() {
        let mut engine = engine(two_repos(), PopupPrefs::default());
        engine.set_search_pattern(Some("f"));
        engine.set_search_pattern(Some("feat"));
        assert_eq!(engine.variant(), VariantKind::FilteringGrouped);

        let repo_rows: Vec<String> = engine
            .values()
            .into_iter()
            .filter(|n| matches!(n, TreeNode::TopLevelRepo(_)))
            .map(|n| n.label().to_string())
            .collect();
        assert_eq!(repo_rows, vec!["frontend"]);
    }

    #[test]
    fn pinned_repo_bypasses_grouping_until_search() {
        let prefs = PopupPrefs {
            pinned_repo: Some("b".into()),
            ..PopupPrefs::default()
        };
        let mut engine = engine(two_repos(), prefs);
        assert_eq!(engine.variant(), VariantKind::PinnedRepo);

        // searching overrides the pinned shortcut
        engine.set_search_pattern(Some("main"));
        assert_eq!(engine.variant(), VariantKind::FilteringGrouped);

        engine.set_search_pattern(None);
        assert_eq!(engine.variant(), VariantKind::PinnedRepo);
    }

    #[test]
    fn grouped_preference_beats_the_pin() {
        let prefs = PopupPrefs {
            pinned_repo: Some("b".into()),
            grouped_by_repo: true,
            ..PopupPrefs::default()
        };
        let engine = engine(two_repos(), prefs);
        assert_eq!(engine.variant(), VariantKind::Grouped);
    }

    #[test]
    fn single_repo_scope_stays_flat() {
        let repos = vec![two_repos().remove(0)];
        let mut engine = engine(repos, PopupPrefs::default());
        assert_eq!(engine.variant(), VariantKind::SingleRepo);
        engine.set_search_pattern(Some("x"));
        assert_eq!(engine.variant(), VariantKind::SingleRepo);
    }

    #[test]
    fn choosing_a_repo_descends_into_a_scoped_step() {
        let mut engine = engine(two_repos(), PopupPrefs::default());
        let repo_row = engine
            .values()
            .into_iter()
            .find(|n| n.label() == "backend")
            .unwrap();
        match engine.on_chosen(repo_row, false) {
            StepOutcome::Push(step) => {
                assert_eq!(step.title().as_deref(), Some("backend"));
                let labels: Vec<String> = step
                    .values()
                    .iter()
                    .map(|n| n.label().to_string())
                    .collect();
                assert!(labels.contains(&"v2.0".to_string()));
            }
            StepOutcome::Final => panic!("expected a nested step"),
        }
    }

    #[test]
    fn choosing_a_ref_opens_its_action_list_and_records_channels() {
        let mut engine = engine(two_repos(), PopupPrefs::default());
        let backend = Repo::new("b", "backend").with_current("main");
        let node = TreeNode::RefUnderRepo(crate::model::RefUnderRepo {
            repo: backend.id.clone(),
            reference: GitRef::tag("v2.0"),
        });
        assert!(engine.has_substep(&node));

        match engine.on_chosen(node, false) {
            StepOutcome::Push(step) => {
                let labels: Vec<String> = step
                    .values()
                    .iter()
                    .map(|n| n.label().to_string())
                    .collect();
                assert_eq!(labels, vec!["Checkout", "Compare With"]);
            }
            StepOutcome::Final => panic!("expected an action list step"),
        }

        // both observable channels, per the recorded open question
        assert_eq!(engine.last_chosen_ref(), Some("v2.0"));
        assert_eq!(engine.last_chosen_tag(), Some("v2.0"));
    }

    #[test]
    fn branch_choice_leaves_the_tag_channel_empty() {
        let mut engine = engine(two_repos(), PopupPrefs::default());
        engine.on_chosen(TreeNode::Ref(GitRef::branch("main")), false);
        assert_eq!(engine.last_chosen_ref(), Some("main"));
        assert_eq!(engine.last_chosen_tag(), None);
    }

    #[test]
    fn leaf_action_sets_the_pending_action_once() {
        let mut engine = engine(two_repos(), PopupPrefs::default());
        let action = engine
            .values()
            .into_iter()
            .find(|n| n.label() == "New Branch...")
            .unwrap();
        assert!(matches!(engine.on_chosen(action, true), StepOutcome::Final));

        let pending = engine.take_pending_action().unwrap();
        assert_eq!(pending.action.as_str(), "branch.new");
        assert_eq!(pending.scope.repos.len(), 2);
        assert!(engine.take_pending_action().is_none());
    }

    #[test]
    fn disabled_action_terminates_without_pending() {
        let resolver: Rc<dyn ActionGroupResolver> = Rc::new(TestResolver);
        let scope = ActionScope::repos(vec![RepoId::new("a")]);
        let items = build_action_items(&*resolver, &ActionId::new("more"), &scope);
        let mut step = ActionListStep::new(None, items, scope, resolver);

        let disabled = step
            .values()
            .into_iter()
            .find(|n| n.label() == "Prune")
            .unwrap();
        for is_final in [false, true] {
            assert!(matches!(
                step.on_chosen(disabled.clone(), is_final),
                StepOutcome::Final
            ));
            assert!(step.take_pending_action().is_none());
        }
    }

    #[test]
    fn group_action_expands_unless_performed_as_group() {
        let mut engine = engine(two_repos(), PopupPrefs::default());
        let group = engine
            .values()
            .into_iter()
            .find(|n| n.label() == "More Actions")
            .unwrap();
        assert!(engine.has_substep(&group));

        match engine.on_chosen(group, true) {
            StepOutcome::Push(step) => {
                let labels: Vec<String> = step
                    .values()
                    .iter()
                    .map(|n| n.label().to_string())
                    .collect();
                assert_eq!(labels, vec!["Fetch All", "Prune"]);
            }
            StepOutcome::Final => panic!("plain group should expand, not perform"),
        }
    }

    #[test]
    fn perform_as_group_runs_whole_group_on_final_invocation() {
        let mut engine = engine(two_repos(), PopupPrefs::default());
        let outcome = engine.on_chosen(TreeNode::Ref(GitRef::branch("main")), false);
        let mut step = match outcome {
            StepOutcome::Push(step) => step,
            StepOutcome::Final => panic!("expected action list"),
        };
        let compare = step
            .values()
            .into_iter()
            .find(|n| n.label() == "Compare With")
            .unwrap();

        // non-final: expands
        assert!(matches!(
            step.on_chosen(compare.clone(), false),
            StepOutcome::Push(_)
        ));
        // final: performs as a group
        assert!(matches!(step.on_chosen(compare, true), StepOutcome::Final));
        let pending = step.take_pending_action().unwrap();
        assert_eq!(pending.action.as_str(), "compare");
        assert_eq!(pending.scope.reference, Some(GitRef::branch("main")));
    }

    #[test]
    fn unrecognized_values_terminate_quietly() {
        let mut engine = engine(two_repos(), PopupPrefs::default());
        assert!(matches!(
            engine.on_chosen(TreeNode::Separator(None), true),
            StepOutcome::Final
        ));
        assert!(engine.take_pending_action().is_none());
    }

    #[test]
    fn divergence_tracks_current_refs_and_sync_preference() {
        let mut repos = two_repos();
        let engine_same = engine(repos.clone(), PopupPrefs::default());
        assert!(!engine_same.is_branches_diverged());

        repos[1].repo.current = Some("dev".into());
        let engine_diverged = engine(repos.clone(), PopupPrefs::default());
        assert!(engine_diverged.is_branches_diverged());

        let prefs_no_sync = PopupPrefs {
            sync_control: false,
            ..PopupPrefs::default()
        };
        let engine_no_sync = engine(repos.clone(), prefs_no_sync);
        assert!(!engine_no_sync.is_branches_diverged());

        repos[1].repo.current = None;
        let engine_missing = engine(repos, PopupPrefs::default());
        assert!(engine_missing.is_branches_diverged());
    }

    #[test]
    fn speed_search_text_uses_short_ref_names() {
        let engine = engine(two_repos(), PopupPrefs::default());
        assert_eq!(
            engine.speed_search_text(&TreeNode::Ref(GitRef::branch("feature/login"))),
            "feature/login"
        );
        let repo = Repo::new("a", "frontend");
        assert_eq!(
            engine.speed_search_text(&TreeNode::TopLevelRepo(repo)),
            "frontend"
        );
    }
}
