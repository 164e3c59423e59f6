//! Screen geometry of the carousel and its control panel.
//!
//! Kept free of raylib types so hit testing can be exercised without a
//! window.

use crate::config::{CarouselConfig, ConfigField};
use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Anything on screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
    Input(ConfigField),
}

impl Control {
    /// Stable identifier for UI automation.
    pub fn test_id(&self) -> &'static str {
        match self {
            Control::Prev => "prev",
            Control::Next => "next",
            Control::Input(field) => field.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputRow {
    pub field: ConfigField,
    pub label: Bounds,
    pub input: Bounds,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub prev: Bounds,
    pub list: Bounds,
    pub next: Bounds,
    pub inputs: Vec<InputRow>,
}

impl Layout {
    /// Buttons are `item_width` squares on either side of a list that is
    /// `frame_size` items wide; the inputs stack underneath.
    pub fn compute(config: &CarouselConfig) -> Self {
        let item = config.item_width.max(0.0) as f32;
        let frame = config.frame_width().max(0.0) as f32;

        let prev = Bounds::new(MARGIN, MARGIN, item, item);
        let list = Bounds::new(prev.right() + MARGIN, MARGIN, frame, item);
        let next = Bounds::new(list.right() + MARGIN, MARGIN, item, item);

        let mut y = list.bottom().max(prev.bottom()) + MARGIN;
        let inputs = ConfigField::ALL
            .into_iter()
            .map(|field| {
                let label = Bounds::new(MARGIN, y, INPUT_LABEL_WIDTH, INPUT_ROW_HEIGHT);
                let input = Bounds::new(label.right(), y, INPUT_BOX_WIDTH, INPUT_ROW_HEIGHT);
                y += INPUT_ROW_HEIGHT + MARGIN * 0.5;
                InputRow { field, label, input }
            })
            .collect();

        Self { prev, list, next, inputs }
    }

    pub fn control_at(&self, x: f32, y: f32) -> Option<Control> {
        if self.prev.contains(x, y) {
            return Some(Control::Prev);
        }
        if self.next.contains(x, y) {
            return Some(Control::Next);
        }
        self.inputs
            .iter()
            .find(|row| row.input.contains(x, y))
            .map(|row| Control::Input(row.field))
    }

    /// Where a control sits, looked up by its automation id.
    pub fn find(&self, test_id: &str) -> Option<Bounds> {
        match test_id {
            "prev" => Some(self.prev),
            "next" => Some(self.next),
            name => self.inputs.iter().find(|row| row.field.name() == name).map(|row| row.input),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn layout() -> Layout {
        Layout::compute(&CarouselConfig {
            step: 1.0,
            frame_size: 3.0,
            item_width: 100.0,
            animation_duration: 500.0,
        })
    }

    #[test]
    fn list_is_frame_size_items_wide() {
        let layout = layout();
        assert_eq!(layout.list.width, 300.0);
        assert_eq!(layout.prev.width, 100.0);
        assert_eq!(layout.next.height, 100.0);
        assert!(layout.next.x > layout.list.right());
    }

    #[test]
    fn next_button_is_found_by_test_id() {
        let layout = layout();
        let bounds = layout.find("next").unwrap();
        let (x, y) = bounds.center();
        let control = layout.control_at(x, y).unwrap();
        assert_eq!(control, Control::Next);
        assert_eq!(control.test_id(), "next");
    }

    #[test]
    fn inputs_are_hit_tested_by_field() {
        let layout = layout();
        let (x, y) = layout.find("step").unwrap().center();
        assert_eq!(layout.control_at(x, y), Some(Control::Input(ConfigField::Step)));
        let (x, y) = layout.list.center();
        assert_eq!(layout.control_at(x, y), None);
    }
}
