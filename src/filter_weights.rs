/*
 * Copyright (c) Radzivon Bartoshyk. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::scale_error::try_vec;
use crate::ScaleError;

/// How destination sample positions are projected back onto the source grid.
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum CoordinateMapping {
    /// First and last destination samples land exactly on the first and last
    /// source samples, `x_src = x_dst * (src - 1) / (dst - 1)`.
    #[default]
    AlignCorners,
    /// Pixel centers are aligned, `x_src = (x_dst + 0.5) * src / dst - 0.5`,
    /// clamped to the source extent.
    PixelCenter,
}

impl CoordinateMapping {
    /// Continuous source position of destination sample `i`.
    #[inline]
    pub(crate) fn source_position(&self, i: usize, in_size: usize, out_size: usize) -> f64 {
        match self {
            CoordinateMapping::AlignCorners => {
                if out_size == 1 {
                    return 0.;
                }
                // Multiplying first keeps the last sample exactly on `in_size - 1`
                (i as f64 * (in_size - 1) as f64) / (out_size - 1) as f64
            }
            CoordinateMapping::PixelCenter => {
                let scale = in_size as f64 / out_size as f64;
                ((i as f64 + 0.5) * scale - 0.5).clamp(0., (in_size - 1) as f64)
            }
        }
    }
}

/// Pair of neighbouring source samples and the weight of the far one.
///
/// `end == start` whenever `weight` is zero, so a tap never refers to a sample
/// that does not contribute.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct FilterBounds {
    pub start: usize,
    pub end: usize,
    pub weight: f64,
}

impl FilterBounds {
    pub(crate) fn new(start: usize, end: usize, weight: f64) -> FilterBounds {
        FilterBounds { start, end, weight }
    }
}

/// Per-axis sampling table, one entry per destination sample.
#[derive(Debug, Clone)]
pub(crate) struct FilterWeights {
    pub bounds: Vec<FilterBounds>,
}

impl FilterWeights {
    pub(crate) fn generate(
        in_size: usize,
        out_size: usize,
        mapping: CoordinateMapping,
    ) -> Result<FilterWeights, ScaleError> {
        if in_size == 0 || out_size == 0 {
            return Err(ScaleError::ZeroImageDimensions);
        }
        let last = in_size - 1;
        let mut bounds = try_vec![FilterBounds::new(0, 0, 0.); out_size];
        for (i, dst) in bounds.iter_mut().enumerate() {
            let position = mapping.source_position(i, in_size, out_size);
            let start = (position.floor() as usize).min(last);
            let weight = position - start as f64;
            let end = if weight > 0. {
                (start + 1).min(last)
            } else {
                start
            };
            *dst = FilterBounds::new(start, end, weight);
        }
        Ok(FilterWeights { bounds })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_exact() {
        for (in_size, out_size) in [(4, 8), (4, 2), (3, 7), (10, 3), (7, 49), (5, 5)] {
            let weights =
                FilterWeights::generate(in_size, out_size, CoordinateMapping::AlignCorners)
                    .unwrap();
            let first = weights.bounds[0];
            let last = weights.bounds[out_size - 1];
            assert_eq!(first, FilterBounds::new(0, 0, 0.));
            assert_eq!(last, FilterBounds::new(in_size - 1, in_size - 1, 0.));
        }
    }

    #[test]
    fn upsampling_four_to_eight() {
        let weights = FilterWeights::generate(4, 8, CoordinateMapping::AlignCorners).unwrap();
        let bound = weights.bounds[4];
        assert_eq!(bound.start, 1);
        assert_eq!(bound.end, 2);
        assert!((bound.weight - 5. / 7.).abs() < 1e-12);
    }

    #[test]
    fn single_output_maps_to_origin() {
        let weights = FilterWeights::generate(9, 1, CoordinateMapping::AlignCorners).unwrap();
        assert_eq!(weights.bounds, vec![FilterBounds::new(0, 0, 0.)]);
    }

    #[test]
    fn single_input_repeats() {
        let weights = FilterWeights::generate(1, 5, CoordinateMapping::AlignCorners).unwrap();
        assert!(weights
            .bounds
            .iter()
            .all(|b| *b == FilterBounds::new(0, 0, 0.)));
    }

    #[test]
    fn pixel_center_is_clamped() {
        let weights = FilterWeights::generate(4, 8, CoordinateMapping::PixelCenter).unwrap();
        assert_eq!(weights.bounds[0], FilterBounds::new(0, 0, 0.));
        assert_eq!(weights.bounds[7], FilterBounds::new(3, 3, 0.));
        // (1 + 0.5) * 0.5 - 0.5 = 0.25
        assert_eq!(weights.bounds[1], FilterBounds::new(0, 1, 0.25));
    }

    #[test]
    fn pixel_center_halving_averages_pairs() {
        let weights = FilterWeights::generate(4, 2, CoordinateMapping::PixelCenter).unwrap();
        assert_eq!(weights.bounds[0], FilterBounds::new(0, 1, 0.5));
        assert_eq!(weights.bounds[1], FilterBounds::new(2, 3, 0.5));
    }

    #[test]
    fn rejects_empty_axes() {
        assert!(FilterWeights::generate(0, 4, CoordinateMapping::AlignCorners).is_err());
        assert!(FilterWeights::generate(4, 0, CoordinateMapping::PixelCenter).is_err());
    }
}
