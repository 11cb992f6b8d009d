//! Hook configuration read from the environment.

use std::env;

use tracing::warn;

/// Environment variable holding the displayed commit id prefix length.
pub const HASH_LENGTH_VAR: &str = "SUBMODULE_HOOK_HASH_LENGTH";

/// Environment variable capping how many commits are listed per submodule.
pub const MAX_COMMITS_VAR: &str = "SUBMODULE_HOOK_MAX_COMMIT_SHOWN";

/// Default id prefix length when the variable is absent or invalid.
const DEFAULT_HASH_LENGTH: usize = 8;

/// Formatting configuration for one hook invocation.
///
/// Populated once at process start and passed by reference into the
/// formatter; nothing below `main` reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    /// Commit id prefix length in the per-commit lines; `0` suppresses ids.
    pub hash_length: usize,
    /// Cap on listed commits per submodule; `None` means unbounded.
    pub max_commits_shown: Option<usize>,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            hash_length: DEFAULT_HASH_LENGTH,
            max_commits_shown: None,
        }
    }
}

impl HookConfig {
    /// Read the configuration from the environment.
    ///
    /// Absent or invalid values fall back to the defaults; invalid values
    /// are logged. A cap of `0` is invalid (at least one commit must be
    /// shown) and falls back to unbounded.
    pub fn from_env() -> Self {
        let hash_length = parse_var(HASH_LENGTH_VAR).unwrap_or(DEFAULT_HASH_LENGTH);

        let max_commits_shown = parse_var(MAX_COMMITS_VAR).and_then(|cap: usize| {
            if cap == 0 {
                warn!("{} must be at least 1, ignoring", MAX_COMMITS_VAR);
                None
            } else {
                Some(cap)
            }
        });

        Self {
            hash_length,
            max_commits_shown,
        }
    }
}

fn parse_var(name: &str) -> Option<usize> {
    match env::var(name) {
        Ok(v) if !v.is_empty() => match v.parse::<usize>() {
            Ok(n) => Some(n),
            Err(_) => {
                warn!("Invalid {} value '{}', using default", name, v);
                None
            }
        },
        _ => None,
    }
}
