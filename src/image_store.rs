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
use crate::{ImageSize, ScaleBufferMismatch, ScaleError};
use std::borrow::Cow;
use std::fmt::Debug;

/// Read-only single channel raster.
///
/// Samples are laid out row-major, `stride` elements apart, with only the first
/// `width` samples of each row being part of the image.
#[derive(Debug, Clone)]
pub struct ImageStore<'a, T>
where
    T: Clone + Copy + Debug,
{
    pub buffer: Cow<'a, [T]>,
    pub width: usize,
    pub height: usize,
    /// Row stride in elements, 0 means `width`
    pub stride: usize,
}

/// Writable single channel raster, borrowed from the caller or owned.
#[derive(Debug)]
pub struct ImageStoreMut<'a, T>
where
    T: Clone + Copy + Debug,
{
    pub buffer: BufferStore<'a, T>,
    pub width: usize,
    pub height: usize,
    /// Row stride in elements, 0 means `width`
    pub stride: usize,
}

#[derive(Debug)]
pub enum BufferStore<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStore<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

#[inline]
fn validate_layout(
    slice_len: usize,
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), ScaleError> {
    if width == 0 || height == 0 {
        return Err(ScaleError::ZeroImageDimensions);
    }
    if stride < width {
        return Err(ScaleError::InvalidStride(width, stride));
    }
    let expected = stride
        .checked_mul(height)
        .ok_or(ScaleError::DestinationImageIsTooLarge)?;
    if slice_len != expected {
        return Err(ScaleError::BufferMismatch(ScaleBufferMismatch {
            expected,
            width,
            height,
            stride,
            slice_len,
        }));
    }
    Ok(())
}

impl<'a, T> ImageStore<'a, T>
where
    T: Clone + Copy + Debug,
{
    pub fn new(
        buffer: Vec<T>,
        width: usize,
        height: usize,
    ) -> Result<ImageStore<'a, T>, ScaleError> {
        validate_layout(buffer.len(), width, height, width)?;
        Ok(ImageStore::<T> {
            buffer: Cow::Owned(buffer),
            width,
            height,
            stride: width,
        })
    }

    pub fn from_slice(
        slice_ref: &'a [T],
        width: usize,
        height: usize,
    ) -> Result<ImageStore<'a, T>, ScaleError> {
        ImageStore::from_slice_with_stride(slice_ref, width, height, width)
    }

    pub fn from_slice_with_stride(
        slice_ref: &'a [T],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<ImageStore<'a, T>, ScaleError> {
        validate_layout(slice_ref.len(), width, height, stride)?;
        Ok(ImageStore::<T> {
            buffer: Cow::Borrowed(slice_ref),
            width,
            height,
            stride,
        })
    }

    #[inline]
    pub fn get_size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    #[inline]
    pub fn stride(&self) -> usize {
        if self.stride == 0 {
            return self.width;
        }
        self.stride
    }

    /// Checks that fields describe the underlying buffer, they are public and
    /// may have been changed after construction.
    pub fn validate(&self) -> Result<(), ScaleError> {
        validate_layout(self.buffer.len(), self.width, self.height, self.stride())
    }

    /// Output size this raster gets when rescaled by `factor`.
    pub fn scaled_size(&self, factor: f64) -> Result<ImageSize, ScaleError> {
        self.get_size().scaled(factor)
    }

    #[inline]
    pub(crate) fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride();
        &self.buffer[start..start + self.width]
    }
}

impl<'a, T> ImageStoreMut<'a, T>
where
    T: Clone + Copy + Debug + Default,
{
    pub fn new(
        buffer: Vec<T>,
        width: usize,
        height: usize,
    ) -> Result<ImageStoreMut<'a, T>, ScaleError> {
        validate_layout(buffer.len(), width, height, width)?;
        Ok(ImageStoreMut::<T> {
            buffer: BufferStore::Owned(buffer),
            width,
            height,
            stride: width,
        })
    }

    pub fn from_slice(
        slice_ref: &'a mut [T],
        width: usize,
        height: usize,
    ) -> Result<ImageStoreMut<'a, T>, ScaleError> {
        ImageStoreMut::from_slice_with_stride(slice_ref, width, height, width)
    }

    pub fn from_slice_with_stride(
        slice_ref: &'a mut [T],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<ImageStoreMut<'a, T>, ScaleError> {
        validate_layout(slice_ref.len(), width, height, stride)?;
        Ok(ImageStoreMut::<T> {
            buffer: BufferStore::Borrowed(slice_ref),
            width,
            height,
            stride,
        })
    }

    /// Allocates a zeroed raster, failing instead of aborting when memory is short.
    pub fn try_alloc(width: usize, height: usize) -> Result<ImageStoreMut<'a, T>, ScaleError> {
        if width == 0 || height == 0 {
            return Err(ScaleError::ZeroImageDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(ScaleError::DestinationImageIsTooLarge)?;
        let buffer = try_vec![T::default(); len];
        Ok(ImageStoreMut::<T> {
            buffer: BufferStore::Owned(buffer),
            width,
            height,
            stride: width,
        })
    }

    pub fn try_alloc_for_size(size: ImageSize) -> Result<ImageStoreMut<'a, T>, ScaleError> {
        ImageStoreMut::try_alloc(size.width, size.height)
    }
}

impl<T> ImageStoreMut<'_, T>
where
    T: Clone + Copy + Debug,
{
    #[inline]
    pub fn get_size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    #[inline]
    pub fn stride(&self) -> usize {
        if self.stride == 0 {
            return self.width;
        }
        self.stride
    }

    pub fn validate(&self) -> Result<(), ScaleError> {
        validate_layout(
            self.buffer.borrow().len(),
            self.width,
            self.height,
            self.stride(),
        )
    }

    pub fn as_bytes(&self) -> &[T] {
        self.buffer.borrow()
    }

    /// Sample at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.buffer.borrow().get(y * self.stride() + x).copied()
    }

    /// Copies the image region into a tightly packed `Vec`, dropping row padding.
    pub fn to_vec(&self) -> Vec<T> {
        let stride = self.stride();
        self.buffer
            .borrow()
            .chunks_exact(stride)
            .take(self.height)
            .flat_map(|row| row[..self.width].iter().copied())
            .collect()
    }

    /// Read-only view over the same samples.
    pub fn to_immutable(&self) -> ImageStore<'_, T> {
        ImageStore::<T> {
            buffer: Cow::Borrowed(self.buffer.borrow()),
            width: self.width,
            height: self.height,
            stride: self.stride(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_checks_length() {
        let data = [0u8; 15];
        match ImageStore::from_slice(&data, 4, 4) {
            Err(ScaleError::BufferMismatch(mismatch)) => {
                assert_eq!(mismatch.expected, 16);
                assert_eq!(mismatch.slice_len, 15);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_raster() {
        let data: [u8; 0] = [];
        assert_eq!(
            ImageStore::from_slice(&data, 0, 4).unwrap_err(),
            ScaleError::ZeroImageDimensions
        );
        assert_eq!(
            ImageStoreMut::<f64>::try_alloc(3, 0).unwrap_err(),
            ScaleError::ZeroImageDimensions
        );
    }

    #[test]
    fn rejects_short_stride() {
        let data = [0u16; 12];
        assert_eq!(
            ImageStore::from_slice_with_stride(&data, 4, 4, 3).unwrap_err(),
            ScaleError::InvalidStride(4, 3)
        );
    }

    #[test]
    fn rows_skip_padding() {
        let data = [1u8, 2, 99, 3, 4, 99];
        let store = ImageStore::from_slice_with_stride(&data, 2, 2, 3).unwrap();
        assert_eq!(store.row(0), &[1, 2]);
        assert_eq!(store.row(1), &[3, 4]);
    }

    #[test]
    fn zero_stride_means_width() {
        let store = ImageStore::<u8> {
            buffer: Cow::Owned(vec![0; 6]),
            width: 3,
            height: 2,
            stride: 0,
        };
        assert_eq!(store.stride(), 3);
        assert!(store.validate().is_ok());
    }

    #[test]
    fn to_vec_drops_padding() {
        let mut data = [1f64, 2., -1., 3., 4., -1.];
        let store = ImageStoreMut::from_slice_with_stride(&mut data, 2, 2, 3).unwrap();
        assert_eq!(store.to_vec(), vec![1., 2., 3., 4.]);
        assert_eq!(store.get(1, 1), Some(4.));
        assert_eq!(store.get(2, 1), None);
    }

    #[test]
    fn scaled_size_of_store() {
        let data = [0u8; 16];
        let store = ImageStore::from_slice(&data, 4, 4).unwrap();
        assert_eq!(store.scaled_size(0.5).unwrap(), ImageSize::new(2, 2));
        assert_eq!(store.scaled_size(2.).unwrap(), ImageSize::new(8, 8));
    }
}
