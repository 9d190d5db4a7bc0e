use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every form the particle cloud can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShapeKind {
    /// The "36" numeral glyph.
    #[default]
    #[serde(rename = "36")]
    Glyph,
    #[serde(rename = "PYRAMID")]
    Pyramid,
    #[serde(rename = "CUBE")]
    Cube,
    #[serde(rename = "PLANET")]
    Planet,
    #[serde(rename = "ROCKET")]
    Rocket,
    /// (2,3) torus knot, shown to users as the Möbius form.
    #[serde(rename = "MOBIUS")]
    Mobius,
    #[serde(rename = "HEART")]
    Heart,
}

impl ShapeKind {
    /// Canonical ordering used when picking a random next shape.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Glyph,
        ShapeKind::Pyramid,
        ShapeKind::Cube,
        ShapeKind::Planet,
        ShapeKind::Rocket,
        ShapeKind::Mobius,
        ShapeKind::Heart,
    ];

    /// Display label shown in the HUD.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Glyph => "36",
            ShapeKind::Pyramid => "PYRAMID",
            ShapeKind::Cube => "CUBE",
            ShapeKind::Planet => "PLANET",
            ShapeKind::Rocket => "ROCKET",
            ShapeKind::Mobius => "MOBIUS",
            ShapeKind::Heart => "HEART",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeKind::ALL
            .iter()
            .copied()
            .find(|k| k.label().eq_ignore_ascii_case(wanted))
            .or_else(|| match wanted.to_ascii_lowercase().as_str() {
                "glyph" => Some(ShapeKind::Glyph),
                "torus_knot" | "torus-knot" => Some(ShapeKind::Mobius),
                _ => None,
            })
            .ok_or_else(|| format!("unknown shape '{wanted}'"))
    }
}
