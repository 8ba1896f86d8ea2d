use std::collections::HashMap;

/// Context information passed to the tagging helper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperContext {
    /// Project name, for the helper's own diagnostics
    pub project: String,
    /// Branch the release is being cut from
    pub branch: String,
    /// Version identifier being released
    pub version: String,
    /// Tag name the helper is expected to create
    pub tag: String,
}

impl HelperContext {
    /// Convert context to environment variables for the helper process
    ///
    /// Maps context fields to RELEASEGATE_* environment variables
    pub fn to_env_vars(&self) -> HashMap<String, String> {
        let mut env = HashMap::new();

        env.insert("RELEASEGATE_PROJECT".to_string(), self.project.clone());
        env.insert("RELEASEGATE_BRANCH".to_string(), self.branch.clone());
        env.insert("RELEASEGATE_VERSION".to_string(), self.version.clone());
        env.insert("RELEASEGATE_TAG_NAME".to_string(), self.tag.clone());

        env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_to_env_vars() {
        let ctx = HelperContext {
            project: "pyonepassword".to_string(),
            branch: "master".to_string(),
            version: "1.2.0".to_string(),
            tag: "v1.2.0".to_string(),
        };

        let env = ctx.to_env_vars();
        assert_eq!(env.len(), 4);
        assert_eq!(
            env.get("RELEASEGATE_PROJECT"),
            Some(&"pyonepassword".to_string())
        );
        assert_eq!(env.get("RELEASEGATE_BRANCH"), Some(&"master".to_string()));
        assert_eq!(env.get("RELEASEGATE_VERSION"), Some(&"1.2.0".to_string()));
        assert_eq!(env.get("RELEASEGATE_TAG_NAME"), Some(&"v1.2.0".to_string()));
    }
}
