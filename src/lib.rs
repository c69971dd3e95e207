//! # Skill Helper
//!
//! Example helper script bundled with a Claude Code skill. It shows the
//! convention of shipping utility code next to a `SKILL.md`, under
//! `.claude/skills/<name>/scripts/`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use skill_helper::example_function;
//!
//! assert!(example_function());
//! ```
//!
//! ## Architecture
//!
//! - [`helper`]: the example function skill authors replace with their own code
//! - [`skill`]: skill directory layout conventions
//! - [`app`]: CLI, configuration and logging for the `helper` binary
//!
//! ## Skill Layout
//!
//! ```text
//! .claude/skills/
//! └── example-skill/
//!     ├── SKILL.md
//!     ├── helper.toml      (optional)
//!     └── scripts/
//!         └── helper
//! ```

pub mod app;
pub mod helper;
pub mod skill;

// Re-export commonly used items
pub use helper::{example_function, write_example, EXAMPLE_LINES};
pub use skill::SkillLayout;

/// Result type alias for the skill helper
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the skill helper
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}
