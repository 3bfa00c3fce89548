//! Border style types

use super::table::{Attribute, AttributeKind};
use super::Color;

/// Border record; each edge is merged independently
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    /// Left border
    pub left: Option<BorderEdge>,
    /// Right border
    pub right: Option<BorderEdge>,
    /// Top border
    pub top: Option<BorderEdge>,
    /// Bottom border
    pub bottom: Option<BorderEdge>,
    /// Diagonal border
    pub diagonal: Option<BorderEdge>,
    /// Draw the diagonal from bottom-left to top-right
    pub diagonal_up: Option<bool>,
    /// Draw the diagonal from top-left to bottom-right
    pub diagonal_down: Option<bool>,
}

impl Border {
    /// Create a border record with no edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the four outline edges to the same style
    pub fn outline(style: BorderLineStyle, color: Color) -> Self {
        let edge = Some(BorderEdge::new(style, color));
        Self {
            left: edge,
            right: edge,
            top: edge,
            bottom: edge,
            ..Self::default()
        }
    }

    /// Set the left border
    pub fn with_left(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.left = Some(BorderEdge::new(style, color));
        self
    }

    /// Set the right border
    pub fn with_right(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.right = Some(BorderEdge::new(style, color));
        self
    }

    /// Set the top border
    pub fn with_top(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.top = Some(BorderEdge::new(style, color));
        self
    }

    /// Set the bottom border
    pub fn with_bottom(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.bottom = Some(BorderEdge::new(style, color));
        self
    }
}

impl Attribute for Border {
    const KIND: AttributeKind = AttributeKind::Border;

    fn merge(&self, overlay: &Self) -> Self {
        Self {
            left: overlay.left.or(self.left),
            right: overlay.right.or(self.right),
            top: overlay.top.or(self.top),
            bottom: overlay.bottom.or(self.bottom),
            diagonal: overlay.diagonal.or(self.diagonal),
            diagonal_up: overlay.diagonal_up.or(self.diagonal_up),
            diagonal_down: overlay.diagonal_down.or(self.diagonal_down),
        }
    }
}

/// A single border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderEdge {
    /// Line style
    pub style: BorderLineStyle,
    /// Line color
    pub color: Color,
}

impl BorderEdge {
    /// Create a new border edge
    pub fn new(style: BorderLineStyle, color: Color) -> Self {
        Self { style, color }
    }

    /// Create a thin black border
    pub fn thin() -> Self {
        Self::new(BorderLineStyle::Thin, Color::BLACK)
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderLineStyle {
    None,
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
    /// Hair line (very thin)
    Hair,
    MediumDashed,
    DashDot,
    MediumDashDot,
    DashDotDot,
    MediumDashDotDot,
    SlantDashDot,
}
