//! Core data model - repositories, references, and the popup tree node set

/// Stable identity of a repository within one popup session
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RepoId(String);

impl RepoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An owning scope for references (one repository)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repo {
    pub id: RepoId,
    /// Display name (basename of the working directory)
    pub name: String,
    /// Name of the currently checked-out reference, if any
    pub current: Option<String>,
}

impl Repo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RepoId::new(id),
            name: name.into(),
            current: None,
        }
    }

    pub fn with_current(mut self, current: impl Into<String>) -> Self {
        self.current = Some(current.into());
        self
    }
}

/// Kind of reference, used only for action routing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefKind {
    Branch,
    Tag,
}

/// A named branch or tag pointer. Immutable for the popup session.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GitRef {
    /// Short name, e.g. "main" or "feature/login"
    pub name: String,
    pub kind: RefKind,
}

impl GitRef {
    pub fn branch(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RefKind::Branch,
        }
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RefKind::Tag,
        }
    }

    pub fn is_tag(&self) -> bool {
        self.kind == RefKind::Tag
    }
}

/// A reference paired with the repository it was found under.
///
/// Constructed transiently by the grouped model variants, where the same
/// reference name can appear under several repositories; flat variants
/// always yield bare [`GitRef`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefUnderRepo {
    pub repo: RepoId,
    pub reference: GitRef,
}

/// A repository plus its loaded references - the engine's input snapshot.
/// Read-only for the lifetime of the popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoState {
    pub repo: Repo,
    pub refs: Vec<GitRef>,
}

impl RepoState {
    pub fn new(repo: Repo, refs: Vec<GitRef>) -> Self {
        Self { repo, refs }
    }
}

/// A slash-prefix bucket of references ("folder" row in the tree)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefBucket {
    /// Owning repository when shown inside a grouped view
    pub repo: Option<RepoId>,
    /// The shared first path segment, e.g. "feature"
    pub prefix: String,
}

/// Any value the popup tree can hold.
///
/// This is the complete, closed set of node kinds; everything that consumes
/// "a selected value" matches exhaustively over it.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode {
    /// Repository entry at the root of a grouped view (descends into a
    /// repository-scoped step)
    TopLevelRepo(Repo),
    /// Repository entry anywhere else in the tree
    Repo(Repo),
    /// A bare reference, as yielded by the flat variants
    Ref(GitRef),
    /// A reference disambiguated by its owning repository
    RefUnderRepo(RefUnderRepo),
    /// A menu action or action group
    Action(crate::actions::ActionItem),
    /// Visual divider, optionally captioned
    Separator(Option<String>),
    /// A prefix-grouping bucket containing references
    RefBucket(RefBucket),
}

impl TreeNode {
    /// Rendered display label. Also serves as the speed-search text for
    /// every node kind except references, which match on their short name.
    pub fn label(&self) -> &str {
        match self {
            TreeNode::TopLevelRepo(repo) | TreeNode::Repo(repo) => &repo.name,
            TreeNode::Ref(r) => &r.name,
            TreeNode::RefUnderRepo(rr) => &rr.reference.name,
            TreeNode::Action(item) => &item.label,
            TreeNode::Separator(caption) => caption.as_deref().unwrap_or(""),
            TreeNode::RefBucket(bucket) => &bucket.prefix,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, TreeNode::Separator(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_map_to_display_names() {
        let repo = Repo::new("a", "frontend").with_current("main");
        assert_eq!(TreeNode::Repo(repo.clone()).label(), "frontend");
        assert_eq!(TreeNode::TopLevelRepo(repo.clone()).label(), "frontend");
        assert_eq!(TreeNode::Ref(GitRef::branch("feature/login")).label(), "feature/login");
        assert_eq!(
            TreeNode::RefUnderRepo(RefUnderRepo {
                repo: repo.id.clone(),
                reference: GitRef::tag("v1.0"),
            })
            .label(),
            "v1.0"
        );
        assert_eq!(TreeNode::Separator(None).label(), "");
        assert_eq!(TreeNode::Separator(Some("Tags".into())).label(), "Tags");
    }

    #[test]
    fn ref_kinds_are_distinguished() {
        assert!(GitRef::tag("v1.0").is_tag());
        assert!(!GitRef::branch("v1.0").is_tag());
        assert_ne!(GitRef::tag("x"), GitRef::branch("x"));
    }
}
