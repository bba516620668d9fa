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
#![deny(deprecated)]
//! Bilinear rescaling of single channel rasters.
//!
//! ```
//! use plane_scale::{scale, ImageStore};
//!
//! let source = [0u8, 2, 4, 6, 2, 4, 8, 12, 4, 8, 16, 24, 8, 16, 32, 48];
//! let store = ImageStore::from_slice(&source, 4, 4).unwrap();
//! let halved = scale(&store, 0.5).unwrap();
//! assert_eq!(halved.as_bytes(), &[0., 6., 8., 48.]);
//! ```

mod bilinear;
mod filter_weights;
mod image_size;
mod image_store;
mod scale_error;
mod scaler;
mod threading_policy;

pub use filter_weights::CoordinateMapping;
pub use image_size::{get_scaled_output_size, ImageSize};
pub use image_store::{BufferStore, ImageStore, ImageStoreMut};
pub use scale_error::{ScaleBufferMismatch, ScaleError};
pub use scaler::{scale, scale_into, Scaler};
pub use threading_policy::ThreadingPolicy;
