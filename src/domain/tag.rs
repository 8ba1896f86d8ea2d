use crate::error::{ReleaseGateError, Result};

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
///
/// The pattern must contain the `{version}` placeholder exactly where the
/// version identifier appears in tag names.
#[derive(Debug, Clone)]
pub struct TagPattern {
    pattern: String,
}

impl TagPattern {
    /// Create a tag pattern, rejecting patterns without a `{version}` placeholder
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains("{version}") {
            return Err(ReleaseGateError::config(format!(
                "Tag pattern '{}' must contain the {{version}} placeholder",
                pattern
            )));
        }
        Ok(TagPattern { pattern })
    }

    /// Format a version according to the pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &str) -> String {
        self.pattern.replace("{version}", version)
    }

    /// Extract the version embedded in a tag name, if the tag matches the
    /// pattern and the embedded value is a valid semantic version
    pub fn extract(&self, tag: &str) -> Option<semver::Version> {
        let escaped = regex::escape(&self.pattern);
        let regex_pattern = escaped.replace(r"\{version\}", "(.+)");

        let re = regex::Regex::new(&format!("^{}$", regex_pattern)).ok()?;
        let captured = re.captures(tag)?.get(1)?.as_str();
        semver::Version::parse(captured).ok()
    }
}
