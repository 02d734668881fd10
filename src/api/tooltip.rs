use crate::core::Margin;
use crate::render::{BarElement, TooltipElement};

/// Owner of the single tooltip element shown over hovered bars.
///
/// One controller lives per chart renderer and is reused across renders;
/// a render only resets its state.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipController {
    element: TooltipElement,
    offset_x: f64,
    offset_y: f64,
}

impl TooltipController {
    #[must_use]
    pub fn new(offset_x: f64, offset_y: f64) -> Self {
        Self {
            element: TooltipElement::default(),
            offset_x,
            offset_y,
        }
    }

    #[must_use]
    pub fn element(&self) -> &TooltipElement {
        &self.element
    }

    pub fn show(&mut self) {
        self.element.visible = true;
    }

    pub fn hide(&mut self) {
        self.element.visible = false;
    }

    /// Hidden, empty tooltip.
    pub fn reset(&mut self) {
        self.element = TooltipElement::default();
    }

    /// Places the tooltip above `bar` and fills it with the bar's labels.
    ///
    /// The anchor is the bar's horizontal center shifted by the chart's left
    /// margin; vertically it follows the bar top plus the surface offset.
    pub fn track(&mut self, bar: &BarElement, margin: Margin, surface_offset_top: f64) {
        let center_x = bar.to.x + margin.left + bar.to.width * 0.5;
        self.element.left = center_x + self.offset_x;
        self.element.top = surface_offset_top + self.offset_y + bar.to.y;
        self.element.label.clone_from(&bar.label);
        self.element.value.clone_from(&bar.value_label);
    }
}
