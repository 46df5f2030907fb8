// THEORY:
// The `blender` module renders the motion decision as an image instead of a
// boolean. It walks the same lattice as the detector (always at full
// resolution) and paints each coordinate white where the brightness delta
// clears the noise threshold, black where it does not. The result is a
// human-inspectable mask of exactly what the detector would count.
//
// Key architectural principles:
// 1.  **Same Measurement, Different Output**: The per-pixel comparison is the
//     one the detector uses (`SmartPixel::delta_brightness` against the
//     threshold). A white pixel in the mask is precisely a pixel the detector
//     would have counted as changed.
// 2.  **Defined Fallback**: Incomparable frames produce the untouched,
//     all-black mask rather than an error, mirroring the detector's "no
//     motion" fallback.
// 3.  **Fresh Ownership**: The mask is freshly allocated with the first
//     frame's dimensions and handed to the caller outright; it never aliases
//     the inputs.

use crate::core_modules::pixel::pixel::Pixel;
use crate::core_modules::sample_grid::sample_grid::SampleGrid;
use crate::core_modules::smart_pixel::smart_pixel::{BrightnessDelta, SmartPixel};
use image::{GenericImageView, Rgba, RgbaImage};
use log::debug;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Renders a black and white mask where white pixels denote a brightness
/// change between the two frames greater than the given threshold.
///
/// The mask has `current`'s dimensions. If the frames' dimensions differ,
/// the mask is returned all black, untouched.
pub fn blended<A, B>(current: &A, previous: &B, noise_threshold: BrightnessDelta) -> RgbaImage
where
    A: GenericImageView<Pixel = Rgba<u8>>,
    B: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = current.dimensions();
    let mut mask = RgbaImage::new(width, height);

    if current.dimensions() != previous.dimensions() {
        debug!(
            "frames are not comparable: {:?} vs {:?}, returning a black mask",
            current.dimensions(),
            previous.dimensions()
        );
        return mask;
    }

    for (x, y) in SampleGrid::full(width, height) {
        let sample = SmartPixel::new(Pixel::from(current.get_pixel(x, y)));
        let reference = SmartPixel::new(Pixel::from(previous.get_pixel(x, y)));
        let color = if sample.delta_brightness(&reference) > noise_threshold {
            WHITE
        } else {
            BLACK
        };
        mask.put_pixel(x, y, color);
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn frame(width: u32, height: u32, value: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255]))
    }

    fn is_black(pixel: &Rgba<u8>) -> bool {
        pixel.0[0] == 0 && pixel.0[1] == 0 && pixel.0[2] == 0
    }

    #[test]
    fn mismatched_dimensions_yield_an_all_black_mask() {
        let current = frame(3, 2, 0);
        let previous = frame(4, 4, 255);
        let mask = blended(&current, &previous, 10);
        assert_eq!(mask.dimensions(), (3, 2));
        assert!(mask.pixels().all(is_black));
    }

    #[test]
    fn identical_frames_yield_an_all_black_mask() {
        let current = frame(4, 4, 77);
        let previous = frame(4, 4, 77);
        let mask = blended(&current, &previous, 0);
        assert_eq!(mask.dimensions(), (4, 4));
        assert!(mask.pixels().all(is_black));
        assert!(mask.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn changed_pixels_are_white_and_unchanged_are_black() {
        let previous = frame(3, 3, 0);
        let mut current = frame(3, 3, 0);
        current.put_pixel(1, 1, Rgba([255, 255, 255, 255]));
        current.put_pixel(2, 0, Rgba([200, 200, 200, 255]));

        let mask = blended(&current, &previous, 50);
        for (x, y, pixel) in mask.enumerate_pixels() {
            if (x, y) == (1, 1) || (x, y) == (2, 0) {
                assert_eq!(*pixel, Rgba([255, 255, 255, 255]), "({x}, {y})");
            } else {
                assert_eq!(*pixel, Rgba([0, 0, 0, 255]), "({x}, {y})");
            }
        }
    }

    #[test]
    fn delta_equal_to_threshold_stays_black() {
        let previous = frame(1, 1, 100);
        let current = frame(1, 1, 120);
        // Delta is exactly 20.
        assert!(blended(&current, &previous, 20).pixels().all(is_black));
        assert_eq!(
            blended(&current, &previous, 19).get_pixel(0, 0),
            &Rgba([255, 255, 255, 255])
        );
    }

    #[test]
    fn mask_is_independent_of_the_inputs() {
        let previous = frame(2, 2, 0);
        let current = frame(2, 2, 255);
        let mask = blended(&current, &previous, 10);
        // Writing to the mask must not disturb the inputs.
        let mut mask = mask;
        mask.put_pixel(0, 0, Rgba([1, 2, 3, 4]));
        assert_eq!(current.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(previous.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }
}
