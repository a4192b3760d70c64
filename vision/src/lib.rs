mod annotate;
mod utils;
mod vision;
pub mod config;
pub mod preprocess;

use anyhow::Ok;
use opencv::core::Mat;
use vision::{regions::largest_region, segmentation::segment};

pub use annotate::{COLLISION_TEXT, PASSED_BARRIER_TEXT};
pub use config::{DetectorConfig, HsvRange};
pub use vision::collision::{detect_collision, BoundingBox};
pub use vision::regions::{contour::Contour, selector::select_largest};
pub use vision::tracker::{CollisionState, CrossingTracker, FrameEvents};

/// Largest region found for each colour in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Detections {
    pub blue: Option<BoundingBox>,
    pub orange: Option<BoundingBox>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub detections: Detections,
    pub events: FrameEvents,
}

pub struct FrameProcessor {
    config: DetectorConfig,
}

impl FrameProcessor {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn detect(&self, frame: &Mat) -> anyhow::Result<Detections> {
        let masks = segment(frame, &self.config)?;

        Ok(Detections {
            blue: largest_region(&masks.blue)?,
            orange: largest_region(&masks.orange)?,
        })
    }

    /// Runs detection on `frame`, advances `tracker` and draws the boxes and
    /// event text onto `frame`.
    pub fn process_frame(&self, frame: &mut Mat, tracker: &mut CrossingTracker) -> anyhow::Result<FrameReport> {
        let detections = self.detect(frame)?;
        let (blue, orange) = (detections.blue.as_ref(), detections.orange.as_ref());

        let events = tracker.update(blue, orange);
        log::debug!(
            "Blue: {:?}, orange: {:?}, collision: {}, passed barrier: {}",
            detections.blue, detections.orange, events.collision, events.passed_barrier
        );

        annotate::draw_boxes(frame, blue, orange)?;
        annotate::draw_events(frame, &events)?;

        Ok(FrameReport { detections, events })
    }
}

impl Default for FrameProcessor {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
