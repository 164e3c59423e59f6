/// Scroll state of the horizontally scrollable image strip.
///
/// Behaves like a DOM scroll container: `scroll_left` is clamped to
/// `[0, scroll_width - client_width]` on every write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scroll_left: f64,
    scroll_width: f64,
    client_width: f64,
}

impl Viewport {
    pub fn new(content_width: f64, client_width: f64) -> Self {
        let mut viewport = Self { scroll_left: 0.0, scroll_width: 0.0, client_width: 0.0 };
        viewport.resize(content_width, client_width);
        viewport
    }

    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    pub fn scroll_width(&self) -> f64 {
        self.scroll_width
    }

    pub fn client_width(&self) -> f64 {
        self.client_width
    }

    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    pub fn set_scroll_left(&mut self, value: f64) {
        self.scroll_left = value.clamp(0.0, self.max_scroll_left());
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_left(self.scroll_left + delta);
    }

    /// Updates the content and client widths, re-clamping the offset.
    pub fn resize(&mut self, content_width: f64, client_width: f64) {
        self.client_width = client_width.max(0.0);
        self.scroll_width = content_width.max(self.client_width);
        self.set_scroll_left(self.scroll_left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut viewport = Viewport::new(600.0, 300.0);
        viewport.scroll_by(-50.0);
        assert_eq!(viewport.scroll_left(), 0.0);
        viewport.set_scroll_left(1000.0);
        assert_eq!(viewport.scroll_left(), 300.0);
    }

    #[test]
    fn short_content_still_fills_the_client_area() {
        let viewport = Viewport::new(100.0, 300.0);
        assert_eq!(viewport.scroll_width(), 300.0);
        assert_eq!(viewport.max_scroll_left(), 0.0);
    }

    #[test]
    fn shrinking_content_reclamps_the_offset() {
        let mut viewport = Viewport::new(1200.0, 300.0);
        viewport.set_scroll_left(900.0);
        viewport.resize(600.0, 300.0);
        assert_eq!(viewport.scroll_left(), 300.0);
    }
}
