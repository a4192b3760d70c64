use std::path::Path;

use anyhow::bail;
use opencv::{
    core::Mat,
    prelude::*,
    videoio::{VideoCapture, CAP_ANY, CAP_PROP_FPS, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH},
};

/// Yields decoded frames until the stream ends.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<Mat>;
}

pub struct VideoSource {
    capture: VideoCapture,
}

impl VideoSource {
    pub fn open(path: &Path) -> anyhow::Result<VideoSource> {
        let capture = VideoCapture::from_file(&path.to_string_lossy(), CAP_ANY)?;
        if !capture.is_opened()? {
            bail!("Failed to open video {}", path.display());
        }

        log::info!(
            "Opened {} ({}x{} @ {} fps)",
            path.display(),
            capture.get(CAP_PROP_FRAME_WIDTH).unwrap_or(0.0),
            capture.get(CAP_PROP_FRAME_HEIGHT).unwrap_or(0.0),
            capture.get(CAP_PROP_FPS).unwrap_or(0.0),
        );

        Ok(VideoSource { capture })
    }

    pub fn release(&mut self) {
        if let Err(e) = self.capture.release() {
            log::warn!("Error releasing video: {e}");
        }
    }
}

impl FrameSource for VideoSource {
    /// End of stream and read errors both give `None`.
    fn next_frame(&mut self) -> Option<Mat> {
        let mut frame = Mat::default();
        match self.capture.read(&mut frame) {
            Ok(true) if !frame.empty() => Some(frame),
            Ok(_) => None,
            Err(e) => {
                log::warn!("Error reading frame: {e}");
                None
            }
        }
    }
}
