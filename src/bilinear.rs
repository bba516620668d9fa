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
use crate::filter_weights::{FilterBounds, FilterWeights};
use crate::ImageStore;
use num_traits::AsPrimitive;
use std::fmt::Debug;

#[inline(always)]
fn blend<T>(row0: &[T], row1: &[T], fy: f64, bounds: &FilterBounds) -> f64
where
    T: Copy + AsPrimitive<f64>,
{
    let fx = bounds.weight;
    let s00: f64 = row0[bounds.start].as_();
    let s01: f64 = row0[bounds.end].as_();
    let s10: f64 = row1[bounds.start].as_();
    let s11: f64 = row1[bounds.end].as_();
    (1. - fy) * (1. - fx) * s00 + (1. - fy) * fx * s01 + fy * (1. - fx) * s10 + fy * fx * s11
}

/// Fills one destination row, `dst.len()` must match the horizontal table.
pub(crate) fn resize_row<T, O>(
    src: &ImageStore<T>,
    horizontal: &FilterWeights,
    vertical: &FilterBounds,
    dst: &mut [O],
) where
    T: Copy + Debug + AsPrimitive<f64>,
    O: Copy + 'static,
    f64: AsPrimitive<O>,
{
    let row0 = src.row(vertical.start);
    let row1 = src.row(vertical.end);
    let fy = vertical.weight;
    for (dst, bounds) in dst.iter_mut().zip(horizontal.bounds.iter()) {
        *dst = blend(row0, row1, fy, bounds).as_();
    }
}

/// Marks a destination sample valid only when every contributing source sample is.
pub(crate) fn resize_mask_row(
    mask: &ImageStore<bool>,
    horizontal: &FilterWeights,
    vertical: &FilterBounds,
    dst: &mut [bool],
) {
    let row0 = mask.row(vertical.start);
    let row1 = mask.row(vertical.end);
    for (dst, bounds) in dst.iter_mut().zip(horizontal.bounds.iter()) {
        *dst = row0[bounds.start] && row0[bounds.end] && row1[bounds.start] && row1[bounds.end];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoordinateMapping;

    #[test]
    fn blend_weights_four_neighbours() {
        let row0 = [0u8, 10];
        let row1 = [20u8, 30];
        let bounds = FilterBounds::new(0, 1, 0.25);
        let value = blend(&row0, &row1, 0.5, &bounds);
        // top 2.5, bottom 22.5
        assert!((value - 12.5).abs() < 1e-12);
    }

    #[test]
    fn row_promotes_to_float() {
        let data = [1u8, 2, 3, 4];
        let src = ImageStore::from_slice(&data, 2, 2).unwrap();
        let horizontal = FilterWeights::generate(2, 3, CoordinateMapping::AlignCorners).unwrap();
        let vertical = FilterBounds::new(0, 1, 0.5);
        let mut dst = [0f64; 3];
        resize_row(&src, &horizontal, &vertical, &mut dst);
        assert_eq!(dst, [2., 2.5, 3.]);
    }

    #[test]
    fn row_into_f32() {
        let data = [0i32, -8];
        let src = ImageStore::from_slice(&data, 2, 1).unwrap();
        let horizontal = FilterWeights::generate(2, 3, CoordinateMapping::AlignCorners).unwrap();
        let mut dst = [0f32; 3];
        resize_row(&src, &horizontal, &FilterBounds::new(0, 0, 0.), &mut dst);
        assert_eq!(dst, [0., -4., -8.]);
    }

    #[test]
    fn mask_ignores_zero_weight_neighbours() {
        let mask_data = [true, false, true, true];
        let mask = ImageStore::from_slice(&mask_data, 2, 2).unwrap();
        let horizontal = FilterWeights::generate(2, 3, CoordinateMapping::AlignCorners).unwrap();
        let mut dst = [false; 3];
        resize_mask_row(&mask, &horizontal, &FilterBounds::new(1, 1, 0.), &mut dst);
        assert_eq!(dst, [true, true, true]);
        resize_mask_row(&mask, &horizontal, &FilterBounds::new(0, 0, 0.), &mut dst);
        assert_eq!(dst, [true, false, false]);
    }
}
