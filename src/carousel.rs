use log::debug;

use crate::animator::ScrollAnimator;
use crate::config::{CarouselConfig, ConfigField};
use crate::error::CarouselError;
use crate::images::{self, Edge};
use crate::state::{AnimationState, OverlapPolicy};
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Prev => -1.0,
            Direction::Next => 1.0,
        }
    }

    /// Maps a boolean "move forward" flag onto a direction: `true` scrolls
    /// towards later images, which is what the forward control sends.
    pub fn from_forward_flag(forward: bool) -> Self {
        if forward { Direction::Next } else { Direction::Prev }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Offset the move animates towards.
    pub target: f64,
    /// False when the move was refused because another one is in flight.
    pub started: bool,
    /// Edge that received a copy of the image list, if any.
    pub extended: Option<Edge>,
}

/// A horizontally scrolling strip of images.
///
/// Owns the original image list, the list currently laid out (which only
/// grows in infinite mode), the runtime config, and the scroll animation.
#[derive(Debug)]
pub struct Carousel {
    images: Vec<String>,
    visible: Vec<String>,
    config: CarouselConfig,
    infinite: bool,
    overlap: OverlapPolicy,
    viewport: Option<Viewport>,
    animator: ScrollAnimator,
}

impl Carousel {
    pub fn new(images: Vec<String>, config: CarouselConfig, infinite: bool) -> Self {
        Self {
            visible: images.clone(),
            images,
            config,
            infinite,
            overlap: OverlapPolicy::default(),
            viewport: None,
            animator: ScrollAnimator::new(),
        }
    }

    pub fn with_overlap_policy(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    /// Lays out the scroll container. Moves before this are no-ops.
    pub fn mount(&mut self) {
        if self.viewport.is_none() {
            self.viewport = Some(Viewport::new(self.content_width(), self.config.frame_width()));
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn visible_images(&self) -> &[String] {
        &self.visible
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn infinite(&self) -> bool {
        self.infinite
    }

    pub fn overlap_policy(&self) -> OverlapPolicy {
        self.overlap
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn scroll_left(&self) -> Option<f64> {
        self.viewport.as_ref().map(Viewport::scroll_left)
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animator.state()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Index into [`Carousel::images`] shown at visible position `index`.
    ///
    /// The visible list is always whole copies of the original one, so the
    /// mapping is a plain modulo.
    pub fn source_index(&self, index: usize) -> Option<usize> {
        if self.images.is_empty() || index >= self.visible.len() {
            None
        } else {
            Some(index % self.images.len())
        }
    }

    /// Applies a change coming from one of the numeric inputs.
    pub fn handle_change(&mut self, name: &str, value: &str) -> Result<ConfigField, CarouselError> {
        let field = self.config.apply_change(name, value)?;
        debug!("{} set to {}", field, self.config.get(field));
        self.sync_viewport();
        Ok(field)
    }

    pub fn next(&mut self) -> Result<MoveOutcome, CarouselError> {
        self.handle_move(Direction::Next)
    }

    pub fn prev(&mut self) -> Result<MoveOutcome, CarouselError> {
        self.handle_move(Direction::Prev)
    }

    /// Starts a move of `step` items in `direction`.
    ///
    /// In infinite mode the list is extended up front, based on where the
    /// strip would be one move after this one, not on where it ends up.
    pub fn handle_move(&mut self, direction: Direction) -> Result<MoveOutcome, CarouselError> {
        let Some(viewport) = self.viewport.as_ref() else {
            debug!("{:?} ignored: {}", direction, CarouselError::ContainerNotReady);
            return Err(CarouselError::ContainerNotReady);
        };

        let current = viewport.scroll_left();
        let scroll_width = viewport.scroll_width();

        if self.overlap == OverlapPolicy::Serialize && self.animator.is_animating() {
            debug!("{:?} ignored: a move is already in flight", direction);
            return Ok(MoveOutcome { target: current, started: false, extended: None });
        }

        let distance = direction.sign() * self.config.move_distance();
        let target = current + distance;
        self.animator.start(current, target, self.config.animation_duration);

        let next_scroll = target + distance;
        let mut extended = None;
        if self.infinite {
            if next_scroll > scroll_width {
                extended = Some(Edge::End);
            } else if next_scroll < 0.0 {
                extended = Some(Edge::Start);
            }
        }

        if let Some(edge) = extended {
            self.visible = images::extend(&self.visible, &self.images, edge);
            debug!("extended at {:?}, {} images now visible", edge, self.visible.len());
            self.sync_viewport();
        }

        Ok(MoveOutcome { target, started: true, extended })
    }

    /// Feeds `dt_ms` of elapsed time to the running moves.
    /// Returns the number of offset updates applied.
    pub fn tick(&mut self, dt_ms: f64) -> usize {
        match self.viewport.as_mut() {
            Some(viewport) => self.animator.advance(dt_ms, viewport),
            None => 0,
        }
    }

    pub fn cancel(&mut self) -> usize {
        self.animator.cancel()
    }

    fn content_width(&self) -> f64 {
        self.visible.len() as f64 * self.config.item_width
    }

    fn sync_viewport(&mut self) {
        let content_width = self.content_width();
        let client_width = self.config.frame_width();
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.resize(content_width, client_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn six_images() -> Vec<String> {
        (1..=6).map(|i| format!("img/img{i}.png")).collect()
    }

    fn config(step: f64, frame_size: f64, item_width: f64) -> CarouselConfig {
        CarouselConfig { step, frame_size, item_width, animation_duration: 600.0 }
    }

    fn mounted(infinite: bool, config: CarouselConfig) -> Carousel {
        let mut carousel = Carousel::new(six_images(), config, infinite);
        carousel.mount();
        carousel
    }

    fn settle(carousel: &mut Carousel) -> usize {
        carousel.tick(f64::from(u32::MAX))
    }

    #[test]
    fn forward_flag_maps_true_to_next() {
        assert_eq!(Direction::from_forward_flag(true), Direction::Next);
        assert_eq!(Direction::from_forward_flag(false), Direction::Prev);
        assert_eq!(Direction::Next.sign(), 1.0);
        assert_eq!(Direction::Prev.sign(), -1.0);
    }

    #[test]
    fn move_before_mount_is_a_no_op() {
        let mut carousel = Carousel::new(six_images(), config(1.0, 3.0, 100.0), true);
        assert_eq!(carousel.next(), Err(CarouselError::ContainerNotReady));
        assert_eq!(carousel.tick(1000.0), 0);
        assert_eq!(carousel.visible_images().len(), 6);
        assert!(!carousel.is_animating());
    }

    #[test]
    fn next_scrolls_forward_and_prev_back() {
        let mut carousel = mounted(false, config(1.0, 3.0, 100.0));

        let outcome = carousel.next().unwrap();
        assert_eq!(outcome, MoveOutcome { target: 100.0, started: true, extended: None });
        settle(&mut carousel);
        assert!((carousel.scroll_left().unwrap() - 100.0).abs() < 1e-9);

        carousel.prev().unwrap();
        settle(&mut carousel);
        assert!(carousel.scroll_left().unwrap().abs() < 1e-9);
    }

    #[test]
    fn finite_mode_never_grows_the_list() {
        let mut carousel = mounted(false, config(2.0, 3.0, 100.0));
        for _ in 0..10 {
            carousel.next().unwrap();
            settle(&mut carousel);
        }
        for _ in 0..20 {
            carousel.prev().unwrap();
            settle(&mut carousel);
        }
        assert_eq!(carousel.visible_images().len(), 6);
        assert_eq!(carousel.scroll_left(), Some(0.0));
    }

    #[test]
    fn infinite_mode_appends_copies_at_the_end() {
        let mut carousel = mounted(true, config(3.0, 3.0, 100.0));

        // 0 -> 300, projected 600 does not exceed the 600px strip
        assert_eq!(carousel.next().unwrap().extended, None);
        settle(&mut carousel);

        // 300 -> 600, projected 900 exceeds it
        assert_eq!(carousel.next().unwrap().extended, Some(Edge::End));
        assert_eq!(carousel.visible_images().len(), 12);
        settle(&mut carousel);
        assert!((carousel.scroll_left().unwrap() - 600.0).abs() < 1e-9);

        assert_eq!(carousel.next().unwrap().extended, None);
        settle(&mut carousel);
        assert_eq!(carousel.next().unwrap().extended, Some(Edge::End));
        assert_eq!(carousel.visible_images().len(), 18);
        assert_eq!(&carousel.visible_images()[12..], carousel.images());
    }

    #[test]
    fn infinite_mode_prepends_copies_at_the_start() {
        let mut carousel = mounted(true, config(1.0, 3.0, 100.0));

        assert_eq!(carousel.prev().unwrap().extended, Some(Edge::Start));
        assert_eq!(carousel.visible_images().len(), 12);
        settle(&mut carousel);

        assert_eq!(carousel.prev().unwrap().extended, Some(Edge::Start));
        assert_eq!(carousel.visible_images().len(), 18);
    }

    #[test]
    fn serialize_refuses_moves_in_flight() {
        let mut carousel = mounted(true, config(1.0, 3.0, 100.0));
        assert_eq!(carousel.overlap_policy(), OverlapPolicy::Serialize);

        carousel.next().unwrap();
        carousel.tick(100.0);
        let refused = carousel.prev().unwrap();
        assert!(!refused.started);
        assert_eq!(refused.extended, None);
        assert_eq!(carousel.visible_images().len(), 6);

        settle(&mut carousel);
        assert!((carousel.scroll_left().unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn stack_runs_overlapping_moves_together() {
        let mut carousel = mounted(false, config(1.0, 3.0, 100.0))
            .with_overlap_policy(OverlapPolicy::Stack);

        carousel.next().unwrap();
        // Half way: 30 ticks of 100/60
        carousel.tick(300.0);
        let second = carousel.next().unwrap();
        assert!(second.started);
        assert!((second.target - 150.0).abs() < 1e-9);
        assert_eq!(carousel.animator.in_flight(), 2);

        let fired = settle(&mut carousel);
        assert_eq!(fired, 30 + 60);
        assert!((carousel.scroll_left().unwrap() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn cancel_leaves_the_offset_mid_move() {
        let mut carousel = mounted(false, config(1.0, 3.0, 100.0));
        carousel.next().unwrap();
        carousel.tick(300.0);
        assert_eq!(carousel.cancel(), 1);
        assert_eq!(carousel.animation_state(), AnimationState::Idle);
        assert!((carousel.scroll_left().unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn config_changes_resize_the_viewport() {
        let mut carousel = mounted(false, config(1.0, 3.0, 100.0));
        carousel.handle_change("itemWidth", "50").unwrap();
        let viewport = carousel.viewport().unwrap();
        assert_eq!(viewport.scroll_width(), 300.0);
        assert_eq!(viewport.client_width(), 150.0);

        carousel.next().unwrap();
        assert_eq!(carousel.next().err(), None);
    }

    #[test]
    fn bad_config_values_are_rejected() {
        let mut carousel = mounted(false, config(1.0, 3.0, 100.0));
        let err = carousel.handle_change("step", "x").unwrap_err();
        assert!(matches!(err, CarouselError::Config(_)));
        assert_eq!(carousel.config().step, 1.0);
    }

    #[test]
    fn source_index_wraps_over_copies() {
        let mut carousel = mounted(true, config(1.0, 3.0, 100.0));
        carousel.prev().unwrap();
        assert_eq!(carousel.source_index(7), Some(1));
        assert_eq!(carousel.source_index(12), None);
    }
}
