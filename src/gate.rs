//! The release gate workflow
//!
//! A straight-line sequence of guard clauses over the [Repository] and
//! [TagHelper] seams: resolve project identity, verify the release branch,
//! verify a clean working tree, read the current version, and tag the
//! release unless it is already tagged. The first failing check aborts the
//! whole run.

use crate::config::Config;
use crate::domain::{BranchContext, TagPattern};
use crate::error::{ReleaseGateError, Result};
use crate::git::Repository;
use crate::helper::{HelperContext, TagHelper};
use crate::version;

/// Per-run options for the gate
///
/// Mirrors the CLI flags but in a format suitable for the workflow logic,
/// so the gate can be called programmatically without depending on clap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GateOptions {
    /// Override for the configured release branch
    pub branch_override: Option<String>,

    /// Run every check but stop before invoking the helper
    pub dry_run: bool,
}

/// Result of a successful gate run
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    /// The version was already tagged; the helper was not invoked
    AlreadyTagged { project: String, tag: String },

    /// The helper was invoked and created the tag
    Tagged {
        project: String,
        tag: String,
        previous: Option<String>,
    },

    /// Dry-run stopped before invoking the helper
    DryRun {
        project: String,
        tag: String,
        previous: Option<String>,
    },
}

/// Run the release gate
///
/// Sequential checks, each able to short-circuit the rest:
/// 1. Resolve the project name for diagnostics
/// 2. Verify the current branch is the release branch
/// 3. Verify the working tree has no uncommitted modifications
/// 4. Read and validate the current version
/// 5. Tag the release via the helper unless already tagged
///
/// The only side effect of a successful run is the tag created by the
/// helper; every check is read-only.
pub fn run<R, H>(
    repo: &R,
    helper: &H,
    config: &Config,
    options: &GateOptions,
) -> Result<GateOutcome>
where
    R: Repository + ?Sized,
    H: TagHelper + ?Sized,
{
    let project = version::resolve_project_name(config)?;

    let release_branch = options
        .branch_override
        .as_deref()
        .unwrap_or(&config.release_branch);

    check_branch(repo, release_branch)?;
    check_clean(repo)?;

    let current_version = version::read_version(&config.version)?;

    let pattern = TagPattern::new(&config.tag_pattern)?;
    let tag = pattern.format(&current_version);

    if repo.find_tag_oid(&tag)?.is_some() {
        return Ok(GateOutcome::AlreadyTagged { project, tag });
    }

    let previous = latest_release_tag(repo, &pattern)?;

    if options.dry_run {
        return Ok(GateOutcome::DryRun {
            project,
            tag,
            previous,
        });
    }

    let context = HelperContext {
        project: project.clone(),
        branch: release_branch.to_string(),
        version: current_version,
        tag: tag.clone(),
    };

    helper.tag_release(&context)?;

    Ok(GateOutcome::Tagged {
        project,
        tag,
        previous,
    })
}

fn check_branch<R: Repository + ?Sized>(repo: &R, release_branch: &str) -> Result<()> {
    let branch = BranchContext::new(repo.current_branch()?);

    if !branch.is_release_branch(release_branch) {
        log::debug!(
            "branch check failed: on '{}', expected '{}'",
            branch.name,
            release_branch
        );
        return Err(ReleaseGateError::wrong_branch(release_branch, branch.name));
    }

    Ok(())
}

fn check_clean<R: Repository + ?Sized>(repo: &R) -> Result<()> {
    let files = repo.modified_files()?;

    if !files.is_empty() {
        return Err(ReleaseGateError::dirty_tree(files));
    }

    Ok(())
}

/// The most recent existing release tag, by semver ordering of the versions
/// embedded in tags matching the pattern. Tags that don't match are ignored.
fn latest_release_tag<R: Repository + ?Sized>(
    repo: &R,
    pattern: &TagPattern,
) -> Result<Option<String>> {
    let latest = repo
        .list_tags()?
        .into_iter()
        .filter_map(|tag| pattern.extract(&tag).map(|version| (version, tag)))
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, tag)| tag);

    Ok(latest)
}
