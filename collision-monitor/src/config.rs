use std::path::PathBuf;

use clap::Parser;

/// Watches a video for a blue and an orange object colliding and then
/// separating again.
#[derive(Parser, Debug)]
#[command(name = "collision-monitor")]
pub struct Args {
    /// Video file to process
    pub source: PathBuf,
    /// Width frames are scaled to before detection
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,
    /// Milliseconds each frame is shown while polling for the quit key
    #[arg(long, default_value_t = 30)]
    pub wait_ms: i32,
    #[arg(long, default_value_t = 'q')]
    pub quit_key: char,
    #[arg(long, default_value = "Processed Video")]
    pub window: String,
}
