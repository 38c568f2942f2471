//! git2-backed snapshot provider
//!
//! The engine works on pre-loaded [`RepoState`] values; this module is the
//! one bundled way of producing them from a real repository. Hosts with
//! their own data layer can skip it entirely.

use anyhow::{Context, Result};
use git2::{BranchType, Repository};
use std::path::Path;

use crate::model::{GitRef, Repo, RepoState};

/// Load the repository at `path` into a popup snapshot: local branches,
/// tags, and the currently checked-out branch.
pub fn load_repo_state(path: impl AsRef<Path>) -> Result<RepoState> {
    let repo = Repository::discover(path.as_ref())
        .with_context(|| format!("Failed to open repository at {:?}", path.as_ref()))?;

    let mut refs = local_branches(&repo)?;
    refs.extend(tags(&repo)?);

    let mut snapshot = Repo::new(repo_id(&repo), repo_name(&repo));
    snapshot.current = current_branch(&repo);
    Ok(RepoState::new(snapshot, refs))
}

/// Stable identity: the canonical path of the `.git` directory.
fn repo_id(repo: &Repository) -> String {
    repo.path().to_string_lossy().to_string()
}

/// Display name: basename of the workdir, or of the bare repo path.
fn repo_name(repo: &Repository) -> String {
    repo.workdir()
        .or_else(|| repo.path().parent())
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// The checked-out branch's short name; `None` on detached HEAD or an
/// unborn repository.
fn current_branch(repo: &Repository) -> Option<String> {
    let head = repo.head().ok()?;
    if head.is_branch() {
        head.shorthand().map(|s| s.to_string())
    } else {
        None
    }
}

fn local_branches(repo: &Repository) -> Result<Vec<GitRef>> {
    let branches = repo
        .branches(Some(BranchType::Local))
        .context("Failed to list local branches")?;
    let mut refs: Vec<GitRef> = branches
        .filter_map(|b| {
            let (branch, _) = b.ok()?;
            branch.name().ok()?.map(GitRef::branch)
        })
        .collect();
    refs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(refs)
}

fn tags(repo: &Repository) -> Result<Vec<GitRef>> {
    let mut refs = Vec::new();
    repo.tag_foreach(|_oid, name| {
        let name = String::from_utf8_lossy(name)
            .trim_start_matches("refs/tags/")
            .to_string();
        refs.push(GitRef::tag(name));
        true
    })
    .context("Failed to list tags")?;
    refs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(refs)
}
