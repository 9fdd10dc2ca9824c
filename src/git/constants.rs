//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and error patterns.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const DIFF: &str = "diff";
}

/// git command flags
pub mod flags {
    /// Disable color output for parsing
    pub const NO_COLOR: &str = "--no-color";
    /// Force `commit <hash>` headers regardless of `format.pretty` config
    pub const PRETTY_MEDIUM: &str = "--pretty=medium";
    /// Run as if git was started in the given directory (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Separates revisions from paths
    pub const PATH_SEPARATOR: &str = "--";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}
