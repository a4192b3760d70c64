use opencv::{core::Mat, highgui::{destroy_all_windows, imshow, wait_key}};

/// Receives each annotated frame. Returns true when the run should stop.
pub trait FrameSink {
    fn show(&self, frame: &Mat) -> anyhow::Result<bool>;
}

pub struct Display {
    window: String,
    wait_ms: i32,
    quit_key: char,
}

impl Display {
    pub fn new(window: &str, wait_ms: i32, quit_key: char) -> Self {
        Self {
            window: window.to_string(),
            wait_ms,
            quit_key,
        }
    }

    pub fn close(&self) {
        if let Err(e) = destroy_all_windows() {
            log::warn!("Error closing windows: {e}");
        }
    }
}

impl FrameSink for Display {
    /// Shows `frame` and waits for a key press. Returns true if the user
    /// asked to quit.
    fn show(&self, frame: &Mat) -> anyhow::Result<bool> {
        imshow(&self.window, frame)?;
        let key = wait_key(self.wait_ms)?;

        Ok(is_quit_key(key, self.quit_key))
    }
}

fn is_quit_key(key: i32, quit_key: char) -> bool {
    key >= 0 && (key & 0xFF) as u32 == quit_key as u32
}
