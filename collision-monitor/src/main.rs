mod config;
mod display;
mod video;

use clap::Parser;
use config::Args;
use display::{Display, FrameSink};
use video::{FrameSource, VideoSource};
use vision::{preprocess::resize_to_width, CrossingTracker, FrameProcessor};

#[derive(Debug, Default)]
struct RunSummary {
    frames: u64,
    collision_frames: u64,
    barrier_passes: u64,
}

fn main() -> anyhow::Result<()> {
    setup_logging();
    let args = Args::parse();

    log::info!("Opening video {}", args.source.display());
    let mut source = match VideoSource::open(&args.source) {
        Ok(source) => source,
        Err(e) => {
            log::error!("Error: could not open video {}: {e}", args.source.display());
            return Err(e);
        }
    };
    let display = Display::new(&args.window, args.wait_ms, args.quit_key);
    let processor = FrameProcessor::default();
    let mut tracker = CrossingTracker::new();

    log::info!("Starting main loop");
    let result = run_loop(args.width, &mut source, &display, &processor, &mut tracker);

    source.release();
    display.close();

    let summary = result?;
    log::info!(
        "Processed {} frames, {} with a collision, {} barrier passes",
        summary.frames, summary.collision_frames, summary.barrier_passes
    );

    Ok(())
}

fn run_loop(
    width: i32,
    source: &mut impl FrameSource,
    sink: &impl FrameSink,
    processor: &FrameProcessor,
    tracker: &mut CrossingTracker,
) -> anyhow::Result<RunSummary> {
    let mut summary = RunSummary::default();

    loop {
        let Some(frame) = source.next_frame() else {
            log::info!("Video finished or failed to read frame");
            break;
        };

        let mut frame = resize_to_width(&frame, width)?;
        let report = processor.process_frame(&mut frame, tracker)?;

        summary.frames += 1;
        summary.collision_frames += report.events.collision as u64;
        summary.barrier_passes += report.events.passed_barrier as u64;

        if sink.show(&frame)? {
            log::info!("Quit key pressed");
            break;
        }
    }

    Ok(summary)
}

fn setup_logging() {
    simple_log::quick!();
}
