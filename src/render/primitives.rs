use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Horizontal text alignment relative to the label anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

impl TextHAlign {
    #[must_use]
    pub fn svg_anchor(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// Floating tooltip shown next to a hovered bar.
///
/// Coordinates are page pixels (`left`, `top` CSS offsets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipElement {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub label: String,
    pub value: String,
}

impl Default for TooltipElement {
    fn default() -> Self {
        Self {
            visible: false,
            left: 0.0,
            top: 0.0,
            label: String::new(),
            value: String::new(),
        }
    }
}

impl TooltipElement {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.left.is_finite() || !self.top.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip position must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    /// CSS `display` value for the current visibility.
    #[must_use]
    pub fn display(&self) -> &'static str {
        if self.visible { "inline-block" } else { "none" }
    }
}
