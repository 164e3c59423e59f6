#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AnimationState {
    Idle,      // No move in flight
    Animating, // At least one move still has ticks to fire
}

/// What happens when a move is requested while another is still running.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub enum OverlapPolicy {
    Stack,     // Run both; each keeps nudging the shared offset
    #[default]
    Serialize, // Ignore the new move until the running one finishes
}
