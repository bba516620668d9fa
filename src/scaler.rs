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
use crate::bilinear::{resize_mask_row, resize_row};
use crate::filter_weights::{CoordinateMapping, FilterWeights};
use crate::image_store::{ImageStore, ImageStoreMut};
use crate::threading_policy::ThreadingPolicy;
use crate::ScaleError;
use num_traits::AsPrimitive;
use rayon::prelude::*;
use std::fmt::Debug;

#[derive(Debug, Copy, Clone, Default)]
/// Represents base scaling structure
pub struct Scaler {
    pub(crate) threading_policy: ThreadingPolicy,
    pub(crate) mapping: CoordinateMapping,
}

impl Scaler {
    /// Creates new Scaler instance, corner aligned and single threaded
    pub fn new() -> Self {
        Scaler::default()
    }

    pub fn set_threading_policy(&mut self, threading_policy: ThreadingPolicy) {
        self.threading_policy = threading_policy;
    }

    pub fn set_coordinate_mapping(&mut self, mapping: CoordinateMapping) {
        self.mapping = mapping;
    }

    pub fn threading_policy(&self) -> ThreadingPolicy {
        self.threading_policy
    }

    pub fn coordinate_mapping(&self) -> CoordinateMapping {
        self.mapping
    }

    fn generate_weights<T, O>(
        &self,
        store: &ImageStore<T>,
        into: &ImageStoreMut<O>,
    ) -> Result<(FilterWeights, FilterWeights), ScaleError>
    where
        T: Clone + Copy + Debug,
        O: Clone + Copy + Debug,
    {
        store.validate()?;
        into.validate()?;
        let horizontal = FilterWeights::generate(store.width, into.width, self.mapping)?;
        let vertical = FilterWeights::generate(store.height, into.height, self.mapping)?;
        Ok((horizontal, vertical))
    }

    /// Rescales `store` into the already allocated `into`.
    ///
    /// The destination dimensions define the output grid, width and height are resized
    /// independently. Every sample of the destination image region is overwritten,
    /// row padding is left as is.
    pub fn resize_plane<T, O>(
        &self,
        store: &ImageStore<T>,
        into: &mut ImageStoreMut<O>,
    ) -> Result<(), ScaleError>
    where
        T: Clone + Copy + Debug + Send + Sync + AsPrimitive<f64>,
        O: Clone + Copy + Debug + Send + Sync + 'static,
        f64: AsPrimitive<O>,
    {
        let (horizontal, vertical) = self.generate_weights(store, into)?;
        log::debug!(
            "resizing plane {}x{} -> {}x{} with {:?}",
            store.width,
            store.height,
            into.width,
            into.height,
            self.mapping
        );

        let pool = self.threading_policy.get_pool(into.get_size());
        let dst_stride = into.stride();
        let dst_width = into.width;
        let dispatch = |(y, row): (usize, &mut [O])| {
            resize_row(store, &horizontal, &vertical.bounds[y], &mut row[..dst_width]);
        };

        let dst = into.buffer.borrow_mut();
        if let Some(pool) = pool {
            pool.install(|| {
                dst.par_chunks_exact_mut(dst_stride)
                    .enumerate()
                    .for_each(dispatch)
            });
        } else {
            dst.chunks_exact_mut(dst_stride)
                .enumerate()
                .for_each(dispatch);
        }
        Ok(())
    }

    /// Rescales `store` by `factor` into a newly allocated `f64` plane.
    ///
    /// Output size follows [`crate::get_scaled_output_size`].
    pub fn resize_plane_by_factor<T>(
        &self,
        store: &ImageStore<T>,
        factor: f64,
    ) -> Result<ImageStoreMut<'static, f64>, ScaleError>
    where
        T: Clone + Copy + Debug + Send + Sync + AsPrimitive<f64>,
    {
        store.validate()?;
        let new_size = store.scaled_size(factor)?;
        let mut target = ImageStoreMut::<f64>::try_alloc_for_size(new_size)?;
        self.resize_plane(store, &mut target)?;
        Ok(target)
    }

    /// Rescales `store` and its validity mask together.
    ///
    /// Samples are computed exactly as [`Scaler::resize_plane`] does. A destination mask
    /// entry is `true` only when every source sample blended into it with a non-zero
    /// weight is marked valid in `store_mask`.
    pub fn resize_plane_with_mask<T, O>(
        &self,
        store: &ImageStore<T>,
        store_mask: &ImageStore<bool>,
        into: &mut ImageStoreMut<O>,
        into_mask: &mut ImageStoreMut<bool>,
    ) -> Result<(), ScaleError>
    where
        T: Clone + Copy + Debug + Send + Sync + AsPrimitive<f64>,
        O: Clone + Copy + Debug + Send + Sync + 'static,
        f64: AsPrimitive<O>,
    {
        store_mask.validate()?;
        into_mask.validate()?;
        if store_mask.get_size() != store.get_size() {
            return Err(ScaleError::SizeMismatch(
                store.get_size(),
                store_mask.get_size(),
            ));
        }
        if into_mask.get_size() != into.get_size() {
            return Err(ScaleError::SizeMismatch(
                into.get_size(),
                into_mask.get_size(),
            ));
        }

        self.resize_plane(store, into)?;

        let (horizontal, vertical) = self.generate_weights(store_mask, into_mask)?;
        let pool = self.threading_policy.get_pool(into_mask.get_size());
        let dst_stride = into_mask.stride();
        let dst_width = into_mask.width;
        let dispatch = |(y, row): (usize, &mut [bool])| {
            resize_mask_row(
                store_mask,
                &horizontal,
                &vertical.bounds[y],
                &mut row[..dst_width],
            );
        };

        let dst = into_mask.buffer.borrow_mut();
        if let Some(pool) = pool {
            pool.install(|| {
                dst.par_chunks_exact_mut(dst_stride)
                    .enumerate()
                    .for_each(dispatch)
            });
        } else {
            dst.chunks_exact_mut(dst_stride)
                .enumerate()
                .for_each(dispatch);
        }
        Ok(())
    }
}

/// Rescales `store` into `into` with a default [`Scaler`].
pub fn scale_into<T, O>(
    store: &ImageStore<T>,
    into: &mut ImageStoreMut<O>,
) -> Result<(), ScaleError>
where
    T: Clone + Copy + Debug + Send + Sync + AsPrimitive<f64>,
    O: Clone + Copy + Debug + Send + Sync + 'static,
    f64: AsPrimitive<O>,
{
    Scaler::new().resize_plane(store, into)
}

/// Rescales `store` by `factor` with a default [`Scaler`].
pub fn scale<T>(
    store: &ImageStore<T>,
    factor: f64,
) -> Result<ImageStoreMut<'static, f64>, ScaleError>
where
    T: Clone + Copy + Debug + Send + Sync + AsPrimitive<f64>,
{
    Scaler::new().resize_plane_by_factor(store, factor)
}
