//! branch-popup - a popup-menu navigation engine for git references
//!
//! Browses branches and tags across one or more repositories with live
//! fuzzy filtering, submenu expansion backed by action groups, and runtime
//! switching between tree layouts depending on filter state and how many
//! repositories are in scope.
//!
//! The crate owns no UI. A host popup framework drives the [`PopupStep`]
//! state machine, renders whatever the active tree model yields, feeds
//! keystrokes in via [`PopupStepEngine::set_search_pattern`], and executes
//! the [`PendingAction`] it takes after a final choice - or discards it on
//! cancel.

pub mod actions;
pub mod engine;
pub mod git;
pub mod matcher;
pub mod model;
pub mod search;
pub mod settings;
pub mod tree;

pub use actions::{
    ActionEntry, ActionGroupResolver, ActionId, ActionItem, ActionScope, PendingAction,
};
pub use engine::{ActionListStep, PopupStep, PopupStepEngine, StepOutcome};
pub use matcher::RefMatcher;
pub use model::{GitRef, RefKind, Repo, RepoId, RepoState, TreeNode};
pub use search::{SearchController, SearchUpdate};
pub use settings::PopupPrefs;
pub use tree::{TreeModel, VariantKind, choose_variant};
