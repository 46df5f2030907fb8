// THEORY:
// The `Pixel` module is the most fundamental unit of the motion engine. It is a
// "dumb" data container for a single RGBA pixel plus the one single-pixel
// heuristic this engine needs: `brightness`. Anything that requires a second
// pixel (deltas, thresholding) belongs one layer up, in `SmartPixel`.
//
// Key architectural principles:
// 1.  **Single-Pixel Scope**: A `Pixel` knows nothing about neighbors in space
//     or time. It can only summarize itself.
// 2.  **Deliberately Crude Brightness**: `brightness` is the plain integer mean
//     of the R, G, B channels — floor((R + G + B) / 3) — with no perceptual
//     luminance weighting (no Rec. 601/709 coefficients). This is intentional:
//     the unweighted average is what the detection thresholds were tuned
//     against, and "improving" it to a weighted luma would silently shift
//     every threshold. Alpha never participates.
// 3.  **Native 8-bit Scale**: Channels are the raw 0-255 bytes as decoded.
//     Brightness therefore also lives on the 0-255 scale, which is the scale
//     all noise thresholds in this crate are expressed in.

pub mod pixel {
    use image::Rgba;

    pub type Channel = u8;
    pub type Brightness = u16;

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Self {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Fast brightness proxy: the integer-truncated mean of R, G and B.
        ///
        /// - Range 0..=255, on the same scale as the raw channels.
        /// - Not a perceptual luminance; the channels are weighted equally.
        /// - Alpha is ignored.
        pub fn brightness(&self) -> Brightness {
            (self.red as Brightness + self.green as Brightness + self.blue as Brightness) / 3
        }
    }

    impl From<Rgba<u8>> for Pixel {
        fn from(rgba: Rgba<u8>) -> Self {
            let [red, green, blue, alpha] = rgba.0;
            Pixel::new(red, green, blue, alpha)
        }
    }

    impl From<Pixel> for Rgba<u8> {
        fn from(pixel: Pixel) -> Self {
            Rgba([pixel.red, pixel.green, pixel.blue, pixel.alpha])
        }
    }
}
