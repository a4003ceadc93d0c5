//! Element tags and their color palettes.

use arclight_common::Rgba;
use serde::{Deserialize, Serialize};

use crate::archetype::ProjectileStyle;

/// Damage element carried by a combat effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// Physical (untyped) damage.
    #[default]
    Physical,
    /// Fire damage.
    Fire,
    /// Ice damage.
    Ice,
    /// Lightning damage.
    Lightning,
    /// Shadow damage.
    Shadow,
    /// Light damage.
    Light,
    /// Plasma damage.
    Plasma,
    /// Raw energy damage.
    Energy,
    /// Arcane damage.
    Arcane,
    /// Summon-aligned damage.
    Summon,
}

/// Color palette for the detailed render path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementPalette {
    /// Main body color.
    pub primary: Rgba,
    /// Accent/edge color.
    pub secondary: Rgba,
    /// Glow halo color.
    pub glow: Rgba,
}

impl Element {
    /// Base tint used for projectile bodies and particles.
    #[must_use]
    pub const fn base_color(&self) -> Rgba {
        match self {
            Self::Physical => Rgba::rgb(1.0, 1.0, 1.0),
            Self::Fire => Rgba::rgb(1.0, 0.267, 0.0),
            Self::Ice => Rgba::rgb(0.0, 0.867, 1.0),
            Self::Lightning => Rgba::rgb(1.0, 1.0, 0.0),
            Self::Shadow => Rgba::rgb(0.667, 0.0, 1.0),
            Self::Light => Rgba::rgb(1.0, 0.933, 0.0),
            Self::Plasma => Rgba::rgb(0.0, 1.0, 0.533),
            Self::Energy => Rgba::rgb(0.0, 0.667, 1.0),
            Self::Arcane => Rgba::rgb(1.0, 0.0, 1.0),
            Self::Summon => Rgba::rgb(0.533, 1.0, 0.533),
        }
    }

    /// Three-tone palette for layered glow rendering.
    #[must_use]
    pub const fn palette(&self) -> ElementPalette {
        match self {
            Self::Physical => ElementPalette {
                primary: Rgba::rgb(1.0, 0.0, 0.0),
                secondary: Rgba::rgb(0.0, 0.0, 0.0),
                glow: Rgba::rgb(1.0, 0.0, 0.0),
            },
            Self::Fire => ElementPalette {
                primary: Rgba::rgb(1.0, 0.4, 0.0),
                secondary: Rgba::rgb(1.0, 0.0, 0.0),
                glow: Rgba::rgb(1.0, 0.667, 0.0),
            },
            Self::Ice => ElementPalette {
                primary: Rgba::rgb(0.0, 1.0, 1.0),
                secondary: Rgba::rgb(0.0, 0.502, 1.0),
                glow: Rgba::rgb(0.529, 0.808, 0.922),
            },
            Self::Lightning => ElementPalette {
                primary: Rgba::rgb(1.0, 1.0, 0.0),
                secondary: Rgba::rgb(1.0, 1.0, 1.0),
                glow: Rgba::rgb(1.0, 1.0, 0.0),
            },
            Self::Shadow => ElementPalette {
                primary: Rgba::rgb(0.0, 0.0, 0.0),
                secondary: Rgba::rgb(0.4, 0.0, 0.4),
                glow: Rgba::rgb(1.0, 0.0, 1.0),
            },
            Self::Light => ElementPalette {
                primary: Rgba::rgb(1.0, 1.0, 1.0),
                secondary: Rgba::rgb(1.0, 1.0, 0.0),
                glow: Rgba::rgb(1.0, 1.0, 1.0),
            },
            Self::Plasma => ElementPalette {
                primary: Rgba::rgb(0.0, 1.0, 1.0),
                secondary: Rgba::rgb(0.0, 0.502, 1.0),
                glow: Rgba::rgb(0.0, 1.0, 1.0),
            },
            Self::Energy => ElementPalette {
                primary: Rgba::rgb(0.0, 1.0, 0.0),
                secondary: Rgba::rgb(0.0, 1.0, 0.0),
                glow: Rgba::rgb(0.533, 1.0, 0.533),
            },
            Self::Arcane => ElementPalette {
                primary: Rgba::rgb(1.0, 0.0, 1.0),
                secondary: Rgba::rgb(0.533, 0.0, 1.0),
                glow: Rgba::rgb(1.0, 0.0, 1.0),
            },
            Self::Summon => ElementPalette {
                primary: Rgba::rgb(1.0, 0.667, 0.0),
                secondary: Rgba::rgb(1.0, 0.4, 0.0),
                glow: Rgba::rgb(1.0, 1.0, 0.0),
            },
        }
    }

    /// Default projectile silhouette when a skill name implies nothing.
    #[must_use]
    pub const fn default_style(&self) -> ProjectileStyle {
        match self {
            Self::Physical | Self::Shadow => ProjectileStyle::Wave,
            Self::Ice => ProjectileStyle::Crescent,
            _ => ProjectileStyle::Bolt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_element() {
        assert_eq!(Element::default(), Element::Physical);
    }

    #[test]
    fn test_base_colors_distinct() {
        assert_ne!(
            Element::Fire.base_color(),
            Element::Ice.base_color()
        );
    }

    #[test]
    fn test_element_styles() {
        assert_eq!(Element::Physical.default_style(), ProjectileStyle::Wave);
        assert_eq!(Element::Ice.default_style(), ProjectileStyle::Crescent);
        assert_eq!(Element::Fire.default_style(), ProjectileStyle::Bolt);
    }

    #[test]
    fn test_serde_lowercase() {
        let e: Element = serde_json::from_str("\"lightning\"").unwrap();
        assert_eq!(e, Element::Lightning);
    }
}
