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
use crate::ImageSize;
use std::error::Error;
use std::fmt::Display;

/// Buffer mismatch error description
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScaleBufferMismatch {
    pub expected: usize,
    pub width: usize,
    pub height: usize,
    pub stride: usize,
    pub slice_len: usize,
}

/// Error enumeration type
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleError {
    ZeroImageDimensions,
    InvalidScaleFactor(f64),
    DestinationImageIsTooLarge,
    BufferMismatch(ScaleBufferMismatch),
    InvalidStride(usize, usize),
    SizeMismatch(ImageSize, ImageSize),
    OutOfMemory(usize),
}

impl ScaleError {
    /// Returns error as int code
    #[inline]
    pub fn code(&self) -> usize {
        match self {
            ScaleError::ZeroImageDimensions => 1,
            ScaleError::InvalidScaleFactor(_) => 2,
            ScaleError::DestinationImageIsTooLarge => 3,
            ScaleError::BufferMismatch(_) => 4,
            ScaleError::InvalidStride(_, _) => 5,
            ScaleError::SizeMismatch(_, _) => 6,
            ScaleError::OutOfMemory(_) => 7,
        }
    }

    /// Everything except an allocation failure is a usage error.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, ScaleError::OutOfMemory(_))
    }
}

impl Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::ZeroImageDimensions => {
                f.write_str("One of image dimensions is 0, this should not happen")
            }
            ScaleError::InvalidScaleFactor(factor) => f.write_fmt(format_args!(
                "Scale factor must be finite and greater than 0, but received {factor}"
            )),
            ScaleError::DestinationImageIsTooLarge => {
                f.write_str("Destination image larger than memory capabilities")
            }
            ScaleError::BufferMismatch(buffer_mismatch) => f.write_fmt(format_args!(
                "Image buffer len expected to be {} [stride({})*h({}), w({})] but received {}",
                buffer_mismatch.expected,
                buffer_mismatch.stride,
                buffer_mismatch.height,
                buffer_mismatch.width,
                buffer_mismatch.slice_len,
            )),
            ScaleError::InvalidStride(min_stride, real_stride) => f.write_fmt(format_args!(
                "Stride must be at least {min_stride}, but received {real_stride}",
            )),
            ScaleError::SizeMismatch(expected, received) => f.write_fmt(format_args!(
                "Mask size expected to be {}x{} but received {}x{}",
                expected.width, expected.height, received.width, received.height,
            )),
            ScaleError::OutOfMemory(capacity) => f.write_fmt(format_args!(
                "There is no enough memory to allocate {capacity} elements"
            )),
        }
    }
}

impl Error for ScaleError {}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::scale_error::ScaleError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
