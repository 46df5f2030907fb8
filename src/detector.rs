// THEORY:
// The `detector` module holds the motion decision itself. The algorithm is a
// straight frame difference: walk a lattice of coordinates shared by both
// frames, measure the brightness delta at each one, count the deltas that
// clear the noise threshold, and declare motion once the count reaches a
// percentage quota of the frame.
//
// Key architectural principles:
// 1.  **Defined Fallbacks, Not Errors**: Frames of different dimensions are
//     not comparable, and the answer to "did this scene move?" for two
//     incomparable frames is simply "no". There is no error path anywhere in
//     this module.
// 2.  **Short-Circuit on Quota**: The scan returns the moment the change
//     counter reaches the quota. On frames with large-scale motion this exits
//     after a fraction of the image.
// 3.  **Stride-Scaled Quota**: When sampling every step-th pixel, the quota is
//     scaled by 1/step² to match the reduced sample population. A quota
//     computed against the full-resolution pixel count would be unreachable
//     from a subsampled scan.
// 4.  **Pure Functions**: No internal state, no mutation of the inputs. Both
//     frames may be shared freely across concurrent callers.

use crate::core_modules::pixel::pixel::Pixel;
use crate::core_modules::sample_grid::sample_grid::SampleGrid;
use crate::core_modules::smart_pixel::smart_pixel::{BrightnessDelta, SmartPixel};
use image::{GenericImageView, Rgba};
use log::debug;
use std::num::NonZeroU32;

/// Determines whether motion occurred between two frames.
///
/// `min_change_percent` is a 1-100 value: the percentage of the frame whose
/// brightness must change for motion to be declared. `noise_threshold` is the
/// brightness delta (0-255 scale) at or below which a per-pixel difference is
/// ignored as sensor or compression noise; around 10 is a reasonable default
/// for JPEG sources.
///
/// Frames with mismatched dimensions always compare as "no motion".
pub fn motion<A, B>(
    current: &A,
    previous: &B,
    min_change_percent: u8,
    noise_threshold: BrightnessDelta,
) -> bool
where
    A: GenericImageView<Pixel = Rgba<u8>>,
    B: GenericImageView<Pixel = Rgba<u8>>,
{
    motion_with_step(
        current,
        previous,
        min_change_percent,
        noise_threshold,
        NonZeroU32::MIN,
    )
}

/// Determines whether motion occurred, sampling every `step`-th pixel.
///
/// `step` dials down processing cost quadratically at the cost of precision:
/// a step of 1 analyzes every pixel, a step of 2 analyzes a quarter of them.
/// The change quota is scaled to the sample population, so a given
/// `min_change_percent` keeps roughly the same meaning at every step.
pub fn motion_with_step<A, B>(
    current: &A,
    previous: &B,
    min_change_percent: u8,
    noise_threshold: BrightnessDelta,
    step: NonZeroU32,
) -> bool
where
    A: GenericImageView<Pixel = Rgba<u8>>,
    B: GenericImageView<Pixel = Rgba<u8>>,
{
    if current.dimensions() != previous.dimensions() {
        debug!(
            "frames are not comparable: {:?} vs {:?}",
            current.dimensions(),
            previous.dimensions()
        );
        return false;
    }

    let (width, height) = current.dimensions();
    let required_changes = change_quota(width, height, min_change_percent, step);
    let mut changes = 0u64;

    for (x, y) in SampleGrid::new(width, height, step) {
        let sample = SmartPixel::new(Pixel::from(current.get_pixel(x, y)));
        let reference = SmartPixel::new(Pixel::from(previous.get_pixel(x, y)));
        if sample.delta_brightness(&reference) > noise_threshold {
            changes += 1;
            if changes as f64 >= required_changes {
                debug!("motion: quota of {required_changes} changes reached at ({x}, {y})");
                return true;
            }
        }
    }
    false
}

/// The number of changed samples required to declare motion: the requested
/// percentage of the frame's pixel count, scaled down by step² to match the
/// sample population.
fn change_quota(width: u32, height: u32, min_change_percent: u8, step: NonZeroU32) -> f64 {
    let pixels = width as f64 * height as f64;
    let step = step.get() as f64;
    (pixels / (step * step)) * (min_change_percent as f64 / 100.0)
}
