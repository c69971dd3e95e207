//! Skill Conventions
//!
//! Where a skill and its scripts live on disk.

pub mod layout;

pub use layout::SkillLayout;
