use super::collision::{detect_collision, BoundingBox};

/// Flags raised for a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub collision: bool,
    pub passed_barrier: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionState {
    Idle,
    /// The objects overlapped and have not separated since. Holds the boxes
    /// from the most recent overlapping frame.
    Collided { blue: BoundingBox, orange: BoundingBox },
}

/// Remembers a collision across frames so that the objects moving apart
/// afterwards can be reported as passing the barrier.
///
/// Owned by the frame loop and updated exactly once per frame.
#[derive(Debug, Clone)]
pub struct CrossingTracker {
    state: CollisionState,
}

impl Default for CrossingTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossingTracker {
    pub fn new() -> Self {
        Self {
            state: CollisionState::Idle,
        }
    }

    pub fn state(&self) -> &CollisionState {
        &self.state
    }

    pub fn is_collided(&self) -> bool {
        matches!(self.state, CollisionState::Collided { .. })
    }

    /// Advances the state machine with this frame's detections.
    ///
    /// Separation is judged on the current boxes, not the recorded ones.
    /// Without both boxes nothing is emitted and the state is kept.
    pub fn update(&mut self, blue: Option<&BoundingBox>, orange: Option<&BoundingBox>) -> FrameEvents {
        let collision = detect_collision(blue, orange);
        let (Some(blue), Some(orange)) = (blue, orange) else {
            return FrameEvents::default();
        };

        let mut events = FrameEvents::default();

        if collision {
            if !self.is_collided() {
                log::info!("Collision started: blue {blue:?}, orange {orange:?}");
            }
            events.collision = true;
            self.state = CollisionState::Collided {
                blue: *blue,
                orange: *orange,
            };
        } else if self.is_collided() && blue.is_separated_from(orange) {
            log::info!("Passed barrier: blue {blue:?}, orange {orange:?}");
            events.passed_barrier = true;
            self.state = CollisionState::Idle;
        }

        events
    }
}
