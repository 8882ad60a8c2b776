//! Border value types and the dominance rule used when adjacent cells share
//! a border line.
use folio_types::color::Color;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
}

impl BorderStyle {
    /// Tie-break rank when two borders of equal width meet.
    fn rank(&self) -> u8 {
        match self {
            BorderStyle::Double => 3,
            BorderStyle::Solid => 2,
            BorderStyle::Dashed => 1,
            BorderStyle::Dotted => 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Border {
    pub width: f32,
    #[serde(default)]
    pub style: BorderStyle,
    #[serde(default)]
    pub color: Color,
}

impl Eq for Border {}

impl Hash for Border {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.to_bits().hash(state);
        self.style.hash(state);
        self.color.hash(state);
    }
}

impl Border {
    pub fn new(width: f32, style: BorderStyle, color: Color) -> Self {
        Self {
            width,
            style,
            color,
        }
    }

    pub fn solid(width: f32, color: Color) -> Self {
        Self {
            width,
            style: BorderStyle::Solid,
            color,
        }
    }

    /// Whether this border visually dominates `other` where the two meet.
    /// Wider wins; equal widths fall back to the style rank.
    pub fn wins_over(&self, other: &Border) -> bool {
        if self.width != other.width {
            return self.width > other.width;
        }
        self.style.rank() > other.style.rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_border_dominates() {
        let thick = Border::solid(2.0, Color::default());
        let thin = Border::solid(0.5, Color::default());
        assert!(thick.wins_over(&thin));
        assert!(!thin.wins_over(&thick));
    }

    #[test]
    fn equal_width_falls_back_to_style_rank() {
        let double = Border::new(1.0, BorderStyle::Double, Color::default());
        let dotted = Border::new(1.0, BorderStyle::Dotted, Color::default());
        assert!(double.wins_over(&dotted));
        assert!(!dotted.wins_over(&double));
    }
}
