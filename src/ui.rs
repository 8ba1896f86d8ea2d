//! User-facing output formatting.
//!
//! The gate is non-interactive; this module only renders status, success,
//! and error lines plus the proposed-tag summary.

use console::style;

use crate::gate::GateOutcome;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display the tag a run created or would create, with the previous
/// release tag when one exists.
pub fn display_proposed_tag(previous: Option<&str>, tag: &str) {
    match previous {
        Some(previous) => {
            println!("  From: {}", style(previous).red());
            println!("  To:   {}", style(tag).green());
        }
        None => {
            println!("  New tag: {}", style(tag).green());
        }
    }
}

/// Render the outcome of a gate run.
pub fn display_outcome(outcome: &GateOutcome) {
    match outcome {
        GateOutcome::AlreadyTagged { project, tag } => {
            display_success(&format!("{}: release {} is already tagged", project, tag));
        }
        GateOutcome::Tagged {
            project,
            tag,
            previous,
        } => {
            display_proposed_tag(previous.as_deref(), tag);
            display_success(&format!("{}: tagged release {}", project, tag));
        }
        GateOutcome::DryRun {
            project,
            tag,
            previous,
        } => {
            display_proposed_tag(previous.as_deref(), tag);
            display_status(&format!(
                "{}: dry run, would tag release {}",
                project, tag
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_outcome_variants() {
        display_outcome(&GateOutcome::AlreadyTagged {
            project: "demo".to_string(),
            tag: "v1.0.0".to_string(),
        });
        display_outcome(&GateOutcome::Tagged {
            project: "demo".to_string(),
            tag: "v1.1.0".to_string(),
            previous: Some("v1.0.0".to_string()),
        });
        display_outcome(&GateOutcome::DryRun {
            project: "demo".to_string(),
            tag: "v1.1.0".to_string(),
            previous: None,
        });
    }
}
