//! Skill Directory Layout
//!
//! Path arithmetic for `<skills_root>/<name>/{SKILL.md, scripts/}`.
//! Nothing here touches the filesystem.

use std::path::{Path, PathBuf};

/// Skill instruction file name
pub const SKILL_FILE: &str = "SKILL.md";

/// Directory holding a skill's utility scripts
pub const SCRIPTS_DIR: &str = "scripts";

/// Name of the bundled example skill
pub const EXAMPLE_SKILL_NAME: &str = "example-skill";

/// Helper configuration file, stored in the skill directory
pub const CONFIG_FILE_NAME: &str = "helper.toml";

/// Location of one skill on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLayout {
    /// Directory containing all skills (e.g. `~/.claude/skills`)
    pub skills_root: PathBuf,
    /// Skill directory name
    pub name: String,
}

impl SkillLayout {
    pub fn new(skills_root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            skills_root: skills_root.into(),
            name: name.into(),
        }
    }

    /// The example skill under the user's `~/.claude/skills`
    pub fn user_default() -> Self {
        let root = dirs::home_dir()
            .map(|h| h.join(".claude").join("skills"))
            .unwrap_or_else(|| PathBuf::from("skills"));
        Self::new(root, EXAMPLE_SKILL_NAME)
    }

    /// The example skill under a project's `.claude/skills`
    pub fn project(project_root: &Path) -> Self {
        Self::new(
            project_root.join(".claude").join("skills"),
            EXAMPLE_SKILL_NAME,
        )
    }

    pub fn skill_dir(&self) -> PathBuf {
        self.skills_root.join(&self.name)
    }

    pub fn skill_file(&self) -> PathBuf {
        self.skill_dir().join(SKILL_FILE)
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.skill_dir().join(SCRIPTS_DIR)
    }

    pub fn config_path(&self) -> PathBuf {
        self.skill_dir().join(CONFIG_FILE_NAME)
    }

    /// Recover the layout from a file sitting in a skill's `scripts/` directory.
    ///
    /// Returns `None` unless `path` looks like `<root>/<name>/scripts/<file>`.
    pub fn from_script_path(path: &Path) -> Option<Self> {
        path.file_name()?;
        let scripts = path.parent()?;
        if scripts.file_name()? != SCRIPTS_DIR {
            return None;
        }
        let skill_dir = scripts.parent()?;
        let name = skill_dir.file_name()?.to_str()?;
        let root = skill_dir.parent()?;
        if root.as_os_str().is_empty() {
            return None;
        }
        Some(Self::new(root, name))
    }
}
