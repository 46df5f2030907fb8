// THEORY:
// The `pipeline` module is the top-level API for the motion engine. It bundles
// the tuning knobs into a single `MotionConfig` and exposes the detector and
// blender behind one configured entry point, so a capture loop holds its
// parameters in one place instead of threading them through every call.
//
// The pipeline itself is stateless: it owns tuning, never frames. Frame
// history (keeping the previous frame around) is the caller's concern, which
// is why `should_process_frame` takes the previous frame as an `Option`
// rather than remembering it.

use crate::blender;
use crate::core_modules::smart_pixel::smart_pixel::BrightnessDelta;
use crate::detector;
use image::{GenericImageView, Rgba, RgbaImage};
use std::num::NonZeroU32;

/// Configuration for the motion pipeline, allowing for tunable behavior.
#[derive(Debug, Clone)]
pub struct MotionConfig {
    /// The percentage (1-100) of the frame that must change to declare motion.
    pub min_change_percent: u8,
    /// The brightness delta (0-255 scale) at or below which a per-pixel
    /// difference is discarded as noise.
    pub noise_threshold: BrightnessDelta,
    /// The sampling stride; 1 analyzes every pixel.
    pub step: NonZeroU32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            min_change_percent: 10,
            // The original tuning recommended 2500 on 16-bit channels for
            // JPEG sources; that is ~10 on this crate's 8-bit scale.
            noise_threshold: 10,
            step: NonZeroU32::MIN,
        }
    }
}

/// A configured, stateless front end over the detector and blender.
pub struct MotionPipeline {
    config: MotionConfig,
}

impl MotionPipeline {
    pub fn new(config: MotionConfig) -> Self {
        Self { config }
    }

    /// Determines whether motion occurred between two frames using the
    /// configured quota, threshold and stride.
    pub fn motion_detected<A, B>(&self, current: &A, previous: &B) -> bool
    where
        A: GenericImageView<Pixel = Rgba<u8>>,
        B: GenericImageView<Pixel = Rgba<u8>>,
    {
        detector::motion_with_step(
            current,
            previous,
            self.config.min_change_percent,
            self.config.noise_threshold,
            self.config.step,
        )
    }

    /// Renders the black and white difference mask for two frames using the
    /// configured noise threshold. Always full resolution.
    pub fn difference_mask<A, B>(&self, current: &A, previous: &B) -> RgbaImage
    where
        A: GenericImageView<Pixel = Rgba<u8>>,
        B: GenericImageView<Pixel = Rgba<u8>>,
    {
        blender::blended(current, previous, self.config.noise_threshold)
    }

    /// Frame-gating helper for capture loops: decides whether `current` is
    /// worth processing given the last processed frame. The first frame
    /// (no previous) is always processed.
    pub fn should_process_frame<A, B>(&self, current: &A, previous: Option<&B>) -> bool
    where
        A: GenericImageView<Pixel = Rgba<u8>>,
        B: GenericImageView<Pixel = Rgba<u8>>,
    {
        match previous {
            Some(previous) => self.motion_detected(current, previous),
            None => true,
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }
}
