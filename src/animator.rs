//! Fixed-tick scroll animation.
//!
//! A move is split into [`TOTAL_TICKS`] equal offset increments fired every
//! `animation_duration / TOTAL_TICKS` milliseconds. This is linear
//! interpolation with a fixed tick count: a slow frame loop stretches the
//! wall-clock time but every tick still fires.

use crate::constants::TOTAL_TICKS;
use crate::state::AnimationState;
use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
struct Move {
    ticks_remaining: u32,
    per_tick_delta: f64,
    interval_ms: f64,
    elapsed_ms: f64,
}

impl Move {
    /// Fires every tick that is due and returns how many fired.
    fn advance(&mut self, dt_ms: f64, viewport: &mut Viewport) -> usize {
        let mut fired = 0;

        if self.interval_ms <= 0.0 {
            while self.ticks_remaining > 0 {
                self.fire(viewport);
                fired += 1;
            }
            return fired;
        }

        self.elapsed_ms += dt_ms;
        while self.ticks_remaining > 0 && self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            self.fire(viewport);
            fired += 1;
        }
        fired
    }

    fn fire(&mut self, viewport: &mut Viewport) {
        viewport.scroll_by(self.per_tick_delta);
        self.ticks_remaining -= 1;
    }
}

#[derive(Debug, Default)]
pub struct ScrollAnimator {
    moves: Vec<Move>,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AnimationState {
        if self.moves.is_empty() {
            AnimationState::Idle
        } else {
            AnimationState::Animating
        }
    }

    pub fn is_animating(&self) -> bool {
        self.state() == AnimationState::Animating
    }

    /// Number of moves currently in flight.
    pub fn in_flight(&self) -> usize {
        self.moves.len()
    }

    /// Queues a move from `from` to `target` taking `duration_ms`.
    pub fn start(&mut self, from: f64, target: f64, duration_ms: f64) {
        let ticks = TOTAL_TICKS as f64;
        self.moves.push(Move {
            ticks_remaining: TOTAL_TICKS,
            per_tick_delta: (target - from) / ticks,
            interval_ms: duration_ms / ticks,
            elapsed_ms: 0.0,
        });
    }

    /// Advances every in-flight move by `dt_ms` and returns the number of
    /// offset updates applied. Finished moves are dropped.
    pub fn advance(&mut self, dt_ms: f64, viewport: &mut Viewport) -> usize {
        let fired: usize = self
            .moves
            .iter_mut()
            .map(|m| m.advance(dt_ms, viewport))
            .sum();
        self.moves.retain(|m| m.ticks_remaining > 0);
        fired
    }

    /// Drops all in-flight moves, leaving the offset where it is.
    pub fn cancel(&mut self) -> usize {
        let cancelled = self.moves.len();
        self.moves.clear();
        cancelled
    }
}
