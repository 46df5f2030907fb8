// THEORY:
// The `SampleGrid` module owns the coordinate traversal shared by the detector
// and the blender. Both operations walk the same rectangular lattice; the only
// difference is the stride. Centralizing the walk in one iterator keeps the
// two consumers in lockstep and makes the traversal itself testable.
//
// Key architectural principles:
// 1.  **Half-Open Bounds**: Coordinates run over `0..width` and `0..height`.
//     The grid can never yield a coordinate outside the pixel data, so a
//     consumer may index its image unconditionally. (Earlier designs of this
//     algorithm iterated the bounds inclusively and silently sampled one
//     phantom row and column past the edge.)
// 2.  **Stride Sampling**: A `step` of 1 visits every pixel; larger steps
//     visit every step-th column of every step-th row. This trades detection
//     granularity for a quadratic reduction in work.
// 3.  **Row-Major Order**: The grid yields (x, y) pairs left-to-right,
//     top-to-bottom, matching the memory layout of the image buffers it
//     samples.

pub mod sample_grid {
    use std::num::NonZeroU32;

    pub type Coordinate = (u32, u32);

    /// An iterator over the stride lattice of a `width` x `height` pixel grid.
    #[derive(Debug, Clone)]
    pub struct SampleGrid {
        /// The width of the sampled image in pixels.
        width: u32,
        /// The height of the sampled image in pixels.
        height: u32,
        /// The sampling stride on both axes.
        step: u32,
        /// The x coordinate of the next sample.
        x: u32,
        /// The y coordinate of the next sample.
        y: u32,
    }

    impl SampleGrid {
        /// Creates a grid that visits every step-th coordinate on both axes.
        pub fn new(width: u32, height: u32, step: NonZeroU32) -> Self {
            Self {
                width,
                height,
                step: step.get(),
                x: 0,
                // An empty axis means there is nothing to yield.
                y: if width == 0 { height } else { 0 },
            }
        }

        /// Creates a full-resolution grid (stride 1) that visits every pixel.
        pub fn full(width: u32, height: u32) -> Self {
            Self::new(width, height, NonZeroU32::MIN)
        }

        /// The number of coordinates this grid visits in total:
        /// `ceil(width / step) * ceil(height / step)`.
        pub fn sample_count(&self) -> u64 {
            let columns = self.width.div_ceil(self.step) as u64;
            let rows = self.height.div_ceil(self.step) as u64;
            columns * rows
        }
    }

    impl Iterator for SampleGrid {
        type Item = Coordinate;

        fn next(&mut self) -> Option<Coordinate> {
            if self.y >= self.height {
                return None;
            }
            let coordinate = (self.x, self.y);
            self.x += self.step;
            if self.x >= self.width {
                self.x = 0;
                self.y += self.step;
            }
            Some(coordinate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::sample_grid::*;
    use std::num::NonZeroU32;

    fn step(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn full_grid_visits_every_pixel_in_row_major_order() {
        let coordinates: Vec<_> = SampleGrid::full(3, 2).collect();
        assert_eq!(
            coordinates,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn stride_grid_stays_on_the_lattice() {
        let coordinates: Vec<_> = SampleGrid::new(5, 5, step(2)).collect();
        assert_eq!(
            coordinates,
            vec![
                (0, 0),
                (2, 0),
                (4, 0),
                (0, 2),
                (2, 2),
                (4, 2),
                (0, 4),
                (2, 4),
                (4, 4)
            ]
        );
    }

    #[test]
    fn no_coordinate_ever_leaves_the_pixel_grid() {
        for s in 1..=7 {
            for (x, y) in SampleGrid::new(6, 4, step(s)) {
                assert!(x < 6 && y < 4, "({x}, {y}) escaped with step {s}");
            }
        }
    }

    #[test]
    fn sample_count_matches_the_iterator() {
        for (width, height, s) in [(6, 4, 1), (6, 4, 2), (5, 5, 2), (1, 1, 3), (7, 3, 4)] {
            let grid = SampleGrid::new(width, height, step(s));
            assert_eq!(
                grid.sample_count(),
                grid.clone().count() as u64,
                "{width}x{height} step {s}"
            );
        }
    }

    #[test]
    fn empty_axes_yield_nothing() {
        assert_eq!(SampleGrid::full(0, 10).count(), 0);
        assert_eq!(SampleGrid::full(10, 0).count(), 0);
        assert_eq!(SampleGrid::full(0, 0).count(), 0);
    }

    #[test]
    fn oversized_step_still_samples_the_origin() {
        let coordinates: Vec<_> = SampleGrid::new(2, 2, step(10)).collect();
        assert_eq!(coordinates, vec![(0, 0)]);
    }
}
