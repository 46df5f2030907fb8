// THEORY:
// The `SmartPixel` module provides the pairwise-comparison layer of the motion
// engine. It acts as a "smart" wrapper around a "dumb" `Pixel` data object. A
// `SmartPixel` is meaningless on its own; its entire purpose is to quantify
// how different two pixels are.
//
// Key architectural principles:
// 1.  **Comparative Analysis**: The core method (`delta_brightness`) takes
//     another pixel as input and returns the magnitude of the difference.
// 2.  **Optimization**: The brightness is computed once in the constructor and
//     cached. The detector compares every sampled coordinate of one frame
//     against the same coordinate of another, so each wrapped pixel is built
//     exactly once per comparison and never recomputed.
// 3.  **Thresholding Lives Elsewhere**: A `SmartPixel` reports raw deltas. The
//     decision of whether a delta is noise or signal belongs to the detector,
//     which owns the noise threshold.

pub mod smart_pixel {
    use crate::core_modules::pixel::pixel::{Brightness, Pixel};

    pub type BrightnessDelta = u16;

    /// An analytical wrapper around a `Pixel` providing cached comparison data.
    pub struct SmartPixel {
        /// The raw `Pixel` data this `SmartPixel` is analyzing.
        pub pixel: Pixel,
        /// The pre-calculated brightness of the pixel, cached for performance.
        brightness: Brightness,
    }

    impl SmartPixel {
        pub fn new(pixel: Pixel) -> Self {
            Self {
                brightness: pixel.brightness(),
                pixel,
            }
        }

        /// The absolute brightness difference between this pixel and another.
        pub fn delta_brightness(&self, other: &SmartPixel) -> BrightnessDelta {
            self.brightness.abs_diff(other.brightness)
        }
    }
}
