//! Menu actions - the resolver capability, item building, and the deferred
//! terminal action handed back to the host

use crate::model::{GitRef, RepoId, TreeNode};

/// Identifier of an abstract action or action group
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActionId(String);

impl ActionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The narrowed repository scope an action resolves or runs against.
///
/// Captured as a snapshot at resolution/choice time so the host framework
/// can invoke the action later (or never) without touching live engine
/// state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionScope {
    pub repos: Vec<RepoId>,
    /// Set when the scope was narrowed through a chosen reference
    pub reference: Option<GitRef>,
}

impl ActionScope {
    pub fn repos(repos: Vec<RepoId>) -> Self {
        Self {
            repos,
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: GitRef) -> Self {
        self.reference = Some(reference);
        self
    }
}

/// A directly performable action, enablement already evaluated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSpec {
    pub id: ActionId,
    pub label: String,
    pub enabled: bool,
    pub separator_above: bool,
    pub separator_caption: Option<String>,
}

impl ActionSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: ActionId::new(id),
            label: label.into(),
            enabled: true,
            separator_above: false,
            separator_caption: None,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_separator_above(mut self) -> Self {
        self.separator_above = true;
        self
    }

    pub fn with_separator_caption(mut self, caption: impl Into<String>) -> Self {
        self.separator_above = true;
        self.separator_caption = Some(caption.into());
        self
    }
}

/// A nested group that expands into a submenu (or, when flagged, performs
/// as a whole on final invocation)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSpec {
    pub id: ActionId,
    pub label: String,
    pub enabled: bool,
    pub perform_as_group: bool,
    pub separator_above: bool,
    pub separator_caption: Option<String>,
}

impl GroupSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: ActionId::new(id),
            label: label.into(),
            enabled: true,
            perform_as_group: false,
            separator_above: false,
            separator_caption: None,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn perform_as_group(mut self) -> Self {
        self.perform_as_group = true;
        self
    }

    pub fn with_separator_above(mut self) -> Self {
        self.separator_above = true;
        self
    }
}

/// One concrete entry produced by resolving an action group
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionEntry {
    Action(ActionSpec),
    Group(GroupSpec),
    /// Synthetic placeholder meaning "nothing applicable here"
    EmptyPlaceholder,
}

/// Resolves abstract group identifiers into concrete entries, with
/// visibility and enablement already evaluated against the scope.
///
/// Injected into the engine at construction; the engine never looks up
/// groups by name in any global registry.
pub trait ActionGroupResolver {
    fn resolve(&self, group: &ActionId, scope: &ActionScope) -> Vec<ActionEntry>;
}

/// How an [`ActionItem`] behaves when chosen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionItemKind {
    /// Performs directly
    Leaf,
    /// Expands into a submenu; `perform_as_group` lets a final invocation
    /// run the whole group instead of expanding it
    Group { perform_as_group: bool },
}

/// A presentable, possibly disabled wrapper around a resolved action or
/// group. Built fresh per popup step; owned by the step that created it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionItem {
    pub id: ActionId,
    pub label: String,
    pub enabled: bool,
    pub kind: ActionItemKind,
}

impl ActionItem {
    pub fn is_group(&self) -> bool {
        matches!(self.kind, ActionItemKind::Group { .. })
    }
}

/// The well-known group resolved when a reference is chosen
pub const REF_ACTIONS_GROUP: &str = "ref.actions";

/// The deferred terminal action: what to run and against what snapshot.
/// Returned to the host on final choice; the host decides when, and
/// whether, to execute it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAction {
    pub action: ActionId,
    pub label: String,
    pub scope: ActionScope,
}

/// Resolve a group and turn it into an ordered run of tree nodes.
///
/// A group that resolves to the single empty-menu placeholder contributes
/// nothing at all, not a disabled row. Entries flagged `separator_above`
/// get a [`TreeNode::Separator`] woven in before them, relative order
/// otherwise preserved.
pub fn build_action_items(
    resolver: &dyn ActionGroupResolver,
    group: &ActionId,
    scope: &ActionScope,
) -> Vec<TreeNode> {
    let entries = resolver.resolve(group, scope);
    if entries.len() == 1 && matches!(entries[0], ActionEntry::EmptyPlaceholder) {
        return Vec::new();
    }

    let mut items = Vec::new();
    for entry in entries {
        match entry {
            ActionEntry::Action(spec) => {
                if spec.separator_above {
                    items.push(TreeNode::Separator(spec.separator_caption.clone()));
                }
                items.push(TreeNode::Action(ActionItem {
                    id: spec.id,
                    label: spec.label,
                    enabled: spec.enabled,
                    kind: ActionItemKind::Leaf,
                }));
            }
            ActionEntry::Group(spec) => {
                if spec.separator_above {
                    items.push(TreeNode::Separator(spec.separator_caption.clone()));
                }
                items.push(TreeNode::Action(ActionItem {
                    id: spec.id,
                    label: spec.label,
                    enabled: spec.enabled,
                    kind: ActionItemKind::Group {
                        perform_as_group: spec.perform_as_group,
                    },
                }));
            }
            ActionEntry::EmptyPlaceholder => {}
        }
    }
    items
}
