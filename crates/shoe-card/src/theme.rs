//! Design tokens shared by every card.

use serde::Serialize;
use std::fmt;

/// Named palette colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    White,
    Gray100,
    Gray300,
    Gray500,
    Gray700,
    Gray900,
    /// Primary accent (sale).
    Primary,
    /// Secondary accent (new releases).
    Secondary,
}

impl Color {
    /// CSS value for this token.
    pub fn css(&self) -> &'static str {
        match self {
            Color::White => "hsl(0deg 0% 100%)",
            Color::Gray100 => "hsl(185deg 5% 95%)",
            Color::Gray300 => "hsl(190deg 5% 80%)",
            Color::Gray500 => "hsl(196deg 4% 60%)",
            Color::Gray700 => "hsl(220deg 5% 40%)",
            Color::Gray900 => "hsl(220deg 3% 20%)",
            Color::Primary => "hsl(340deg 65% 47%)",
            Color::Secondary => "hsl(240deg 60% 63%)",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

/// Font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Normal,
    Medium,
    Bold,
}

impl Weight {
    pub fn value(&self) -> u16 {
        match self {
            Weight::Normal => 500,
            Weight::Medium => 600,
            Weight::Bold => 800,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
