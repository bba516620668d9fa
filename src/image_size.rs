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
use crate::ScaleError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: usize,
    pub height: usize,
}

impl ImageSize {
    pub fn new(width: usize, height: usize) -> ImageSize {
        ImageSize { width, height }
    }

    /// Size this one becomes when both dimensions are multiplied by `factor`.
    ///
    /// Each dimension is rounded half up independently, so `(4, 4)` scaled by `0.5`
    /// is `(2, 2)` and `(5, 5)` scaled by `0.5` is `(3, 3)`.
    pub fn scaled(&self, factor: f64) -> Result<ImageSize, ScaleError> {
        get_scaled_output_size(*self, factor)
    }
}

#[inline]
fn scale_dimension(dimension: usize, factor: f64) -> Result<usize, ScaleError> {
    let scaled = (dimension as f64 * factor + 0.5).floor();
    if scaled >= isize::MAX as f64 {
        return Err(ScaleError::DestinationImageIsTooLarge);
    }
    let scaled = scaled as usize;
    if scaled == 0 {
        return Err(ScaleError::ZeroImageDimensions);
    }
    Ok(scaled)
}

/// Computes output size for a raster of `size` rescaled by `factor`.
pub fn get_scaled_output_size(size: ImageSize, factor: f64) -> Result<ImageSize, ScaleError> {
    if !factor.is_finite() || factor <= 0. {
        return Err(ScaleError::InvalidScaleFactor(factor));
    }
    if size.width == 0 || size.height == 0 {
        return Err(ScaleError::ZeroImageDimensions);
    }
    let width = scale_dimension(size.width, factor)?;
    let height = scale_dimension(size.height, factor)?;
    if width.checked_mul(height).is_none() {
        return Err(ScaleError::DestinationImageIsTooLarge);
    }
    Ok(ImageSize::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_and_doubles() {
        let size = ImageSize::new(4, 4);
        assert_eq!(size.scaled(0.5).unwrap(), ImageSize::new(2, 2));
        assert_eq!(size.scaled(2.).unwrap(), ImageSize::new(8, 8));
    }

    #[test]
    fn identity_factor() {
        let size = ImageSize::new(7, 3);
        assert_eq!(size.scaled(1.).unwrap(), size);
    }

    #[test]
    fn dimensions_scale_independently() {
        let size = ImageSize::new(10, 3);
        assert_eq!(size.scaled(1.5).unwrap(), ImageSize::new(15, 5));
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(
            get_scaled_output_size(ImageSize::new(5, 3), 0.5).unwrap(),
            ImageSize::new(3, 2)
        );
        assert_eq!(
            get_scaled_output_size(ImageSize::new(10, 10), 0.33).unwrap(),
            ImageSize::new(3, 3)
        );
    }

    #[test]
    fn rejects_bad_factors() {
        let size = ImageSize::new(4, 4);
        assert_eq!(size.scaled(0.), Err(ScaleError::InvalidScaleFactor(0.)));
        assert_eq!(size.scaled(-2.), Err(ScaleError::InvalidScaleFactor(-2.)));
        assert!(matches!(
            size.scaled(f64::NAN),
            Err(ScaleError::InvalidScaleFactor(_))
        ));
        assert!(matches!(
            size.scaled(f64::INFINITY),
            Err(ScaleError::InvalidScaleFactor(_))
        ));
    }

    #[test]
    fn rejects_collapsed_dimensions() {
        assert_eq!(
            ImageSize::new(4, 4).scaled(0.1),
            Err(ScaleError::ZeroImageDimensions)
        );
        assert_eq!(
            ImageSize::new(0, 4).scaled(2.),
            Err(ScaleError::ZeroImageDimensions)
        );
    }

    #[test]
    fn single_pixel_result_is_allowed() {
        assert_eq!(
            ImageSize::new(4, 4).scaled(0.25).unwrap(),
            ImageSize::new(1, 1)
        );
    }

    #[test]
    fn rejects_oversized_results() {
        assert_eq!(
            ImageSize::new(usize::MAX / 2, 4).scaled(4.),
            Err(ScaleError::DestinationImageIsTooLarge)
        );
    }
}
