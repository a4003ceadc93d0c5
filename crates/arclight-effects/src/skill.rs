//! Skill descriptors and the on-disk skill library.
//!
//! This module provides:
//! - Externally authored skill descriptors with defaulted combat fields
//! - Archetype and silhouette inference from skill names
//! - Loading skills from `assets/skills/*.toml` or inline JSON
//! - Skill registry with lookup by ID and name

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use arclight_common::{Rgba, SkillId};

use crate::archetype::{ArchetypeKind, ProjectileStyle};
use crate::element::Element;
use crate::status::StatusFlags;

/// Default asset path for skill files.
pub const DEFAULT_SKILL_PATH: &str = "assets/skills";

/// Hit budget granted to piercing skills.
const PIERCE_HIT_BUDGET: u32 = 999;

/// Errors that can occur while loading skill files.
#[derive(Debug, Error)]
pub enum SkillLoadError {
    /// File not found.
    #[error("Skill file not found: {0}")]
    NotFound(PathBuf),

    /// Failed to read file.
    #[error("Failed to read skill file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML.
    #[error("Failed to parse skill TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to parse JSON.
    #[error("Failed to parse skill JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Duplicate skill ID.
    #[error("Duplicate skill ID: {0}")]
    DuplicateId(u32),
}

/// Result type for skill loading operations.
pub type SkillLoadResult<T> = Result<T, SkillLoadError>;

/// Data-driven description of a combat skill.
///
/// Combat content is externally authored, so every field a file might omit
/// is defaulted (damage 0, physical element, no flags) rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDescriptor {
    /// Skill identity.
    pub id: SkillId,
    /// Display name; also drives archetype inference.
    pub name: String,
    /// Damage applied per hit.
    #[serde(default)]
    pub damage: f32,
    /// Damage element.
    #[serde(default)]
    pub element: Element,
    /// Whether shots pierce through targets.
    #[serde(default)]
    pub pierce: bool,
    /// Whether hits chain to nearby targets.
    #[serde(default)]
    pub chain: bool,
    /// Applies a burn on hit.
    #[serde(default)]
    pub burn: bool,
    /// Applies a freeze on hit.
    #[serde(default)]
    pub freeze: bool,
    /// Applies a stun on hit.
    #[serde(default)]
    pub stun: bool,
    /// Explicit archetype; inferred from the name when absent.
    #[serde(default)]
    pub archetype: Option<ArchetypeKind>,
}

impl SkillDescriptor {
    /// Creates a descriptor with defaulted combat fields.
    #[must_use]
    pub fn new(id: SkillId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            damage: 0.0,
            element: Element::default(),
            pierce: false,
            chain: false,
            burn: false,
            freeze: false,
            stun: false,
            archetype: None,
        }
    }

    /// Set damage.
    #[must_use]
    pub fn with_damage(mut self, damage: f32) -> Self {
        self.damage = damage;
        self
    }

    /// Set element.
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    /// Mark as piercing.
    #[must_use]
    pub fn with_pierce(mut self) -> Self {
        self.pierce = true;
        self
    }

    /// Set status flags applied on hit.
    #[must_use]
    pub fn with_status(mut self, burn: bool, freeze: bool, stun: bool) -> Self {
        self.burn = burn;
        self.freeze = freeze;
        self.stun = stun;
        self
    }

    /// Force an explicit archetype.
    #[must_use]
    pub fn with_archetype(mut self, kind: ArchetypeKind) -> Self {
        self.archetype = Some(kind);
        self
    }

    /// Resolved archetype: explicit if set, otherwise inferred from the name.
    #[must_use]
    pub fn archetype(&self) -> ArchetypeKind {
        self.archetype
            .unwrap_or_else(|| ArchetypeKind::infer(&self.name))
    }

    /// Resolved projectile silhouette.
    #[must_use]
    pub fn style(&self) -> ProjectileStyle {
        ProjectileStyle::infer(&self.name, self.element)
    }

    /// Base tint for instances spawned from this skill.
    #[must_use]
    pub fn color(&self) -> Rgba {
        self.element.base_color()
    }

    /// Hits a projectile spawned from this skill may land before expiring.
    #[must_use]
    pub const fn hit_budget(&self) -> u32 {
        if self.pierce {
            PIERCE_HIT_BUDGET
        } else {
            1
        }
    }

    /// Status effects applied to targets on hit.
    #[must_use]
    pub const fn status_flags(&self) -> StatusFlags {
        StatusFlags {
            burn: self.burn,
            freeze: self.freeze,
            stun: self.stun,
        }
    }

    /// Clamps out-of-range authored values, warning once per offender.
    fn sanitize(&mut self) {
        if self.damage < 0.0 {
            warn!(skill = self.id.raw(), "negative damage clamped to 0");
            self.damage = 0.0;
        }
    }
}

/// On-disk skill file: a list of `[[skill]]` tables.
#[derive(Debug, Default, Deserialize)]
struct SkillFile {
    #[serde(default)]
    skill: Vec<SkillDescriptor>,
}

/// Registry of skill descriptors with fast lookup by ID and name.
#[derive(Debug, Default)]
pub struct SkillLibrary {
    skills: HashMap<SkillId, SkillDescriptor>,
    name_index: HashMap<String, SkillId>,
}

impl SkillLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a descriptor, rejecting duplicate IDs.
    pub fn insert(&mut self, mut skill: SkillDescriptor) -> SkillLoadResult<()> {
        if self.skills.contains_key(&skill.id) {
            return Err(SkillLoadError::DuplicateId(skill.id.raw()));
        }
        skill.sanitize();
        self.name_index
            .insert(skill.name.to_lowercase(), skill.id);
        self.skills.insert(skill.id, skill);
        Ok(())
    }

    /// Loads one TOML skill file, returning the number of skills added.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> SkillLoadResult<usize> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SkillLoadError::NotFound(path.to_path_buf()));
        }

        let text = fs::read_to_string(path)?;
        let file: SkillFile = toml::from_str(&text)?;
        let count = file.skill.len();
        for skill in file.skill {
            self.insert(skill)?;
        }

        debug!(?path, count, "loaded skill file");
        Ok(count)
    }

    /// Loads every `.toml` file in a directory. Files that fail to parse are
    /// skipped with a warning; authored content must not take the game down.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> SkillLoadResult<usize> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Err(SkillLoadError::NotFound(dir.to_path_buf()));
        }

        let mut total = 0;
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().map_or(true, |e| e != "toml") {
                continue;
            }
            match self.load_file(&path) {
                Ok(count) => total += count,
                Err(err) => warn!(?path, %err, "skipping unreadable skill file"),
            }
        }

        info!(?dir, total, "skill library loaded");
        Ok(total)
    }

    /// Loads descriptors from an inline JSON array.
    pub fn load_json_str(&mut self, json: &str) -> SkillLoadResult<usize> {
        let skills: Vec<SkillDescriptor> = serde_json::from_str(json)?;
        let count = skills.len();
        for skill in skills {
            self.insert(skill)?;
        }
        Ok(count)
    }

    /// Looks up a skill by ID.
    #[must_use]
    pub fn get(&self, id: SkillId) -> Option<&SkillDescriptor> {
        self.skills.get(&id)
    }

    /// Looks up a skill by case-insensitive name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&SkillDescriptor> {
        self.name_index
            .get(&name.to_lowercase())
            .and_then(|id| self.skills.get(id))
    }

    /// Number of registered skills.
    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Whether the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Iterates over all registered skills.
    pub fn iter(&self) -> impl Iterator<Item = &SkillDescriptor> {
        self.skills.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_defaults() {
        let json = r#"{"id": 1, "name": "Mystery Move"}"#;
        let skill: SkillDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(skill.damage, 0.0);
        assert_eq!(skill.element, Element::Physical);
        assert!(!skill.pierce);
        assert_eq!(skill.hit_budget(), 1);
    }

    #[test]
    fn test_pierce_hit_budget() {
        let skill = SkillDescriptor::new(SkillId::new(2), "Drill Shot").with_pierce();
        assert_eq!(skill.hit_budget(), PIERCE_HIT_BUDGET);
    }

    #[test]
    fn test_archetype_inference_and_override() {
        let beam = SkillDescriptor::new(SkillId::new(3), "Ion Beam");
        assert_eq!(beam.archetype(), ArchetypeKind::Beam);

        let forced = SkillDescriptor::new(SkillId::new(4), "Ion Beam")
            .with_archetype(ArchetypeKind::Explosion);
        assert_eq!(forced.archetype(), ArchetypeKind::Explosion);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut lib = SkillLibrary::new();
        lib.insert(SkillDescriptor::new(SkillId::new(1), "First"))
            .unwrap();

        let err = lib.insert(SkillDescriptor::new(SkillId::new(1), "Second"));
        assert!(matches!(err, Err(SkillLoadError::DuplicateId(1))));
    }

    #[test]
    fn test_negative_damage_sanitized() {
        let mut lib = SkillLibrary::new();
        lib.insert(
            SkillDescriptor::new(SkillId::new(5), "Cursed").with_damage(-10.0),
        )
        .unwrap();

        assert_eq!(lib.get(SkillId::new(5)).map(|s| s.damage), Some(0.0));
    }

    #[test]
    fn test_json_loading_and_name_lookup() {
        let mut lib = SkillLibrary::new();
        let count = lib
            .load_json_str(
                r#"[
                    {"id": 10, "name": "Crimson Slash", "damage": 25.0, "element": "fire", "burn": true},
                    {"id": 11, "name": "Frost Beam", "damage": 8.0, "element": "ice"}
                ]"#,
            )
            .unwrap();

        assert_eq!(count, 2);
        let slash = lib.get_by_name("crimson slash").unwrap();
        assert!(slash.burn);
        assert_eq!(slash.archetype(), ArchetypeKind::Standard);
        assert_eq!(
            lib.get_by_name("Frost Beam").unwrap().archetype(),
            ArchetypeKind::Beam
        );
    }

    #[test]
    fn test_toml_parse() {
        let text = r#"
            [[skill]]
            id = 20
            name = "Nova Explosion"
            damage = 40.0
            element = "plasma"

            [[skill]]
            id = 21
            name = "Pet Summon"
        "#;
        let file: SkillFile = toml::from_str(text).unwrap();
        assert_eq!(file.skill.len(), 2);
        assert_eq!(file.skill[0].archetype(), ArchetypeKind::Explosion);
        assert_eq!(file.skill[1].archetype(), ArchetypeKind::Summon);
    }
}
