/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
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
use crate::images::DepthFrame;
use crate::numerics::normalize_to_u8_range;
use crate::sensor_error::check_max_depth;
use crate::SensorFrameError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};
use tracing::{debug, trace};

const OPAQUE_BLACK: u32 = 0xff00_0000;

#[inline(always)]
fn gray_word(intensity: u8) -> u32 {
    let c = intensity as u32;
    OPAQUE_BLACK | (c << 16) | (c << 8) | c
}

/// Near is bright, far is dark. Zero depth means "no data" and stays opaque black,
/// depth beyond `max_depth` is treated as zero range and renders white.
#[inline(always)]
fn depth_to_argb_word(depth: u16, max_depth: u16) -> u32 {
    if depth == 0 {
        return OPAQUE_BLACK;
    }
    let clamped = if depth > max_depth { 0 } else { depth };
    let normalized = normalize_to_u8_range(clamped, max_depth);
    gray_word((255 - normalized) as u8)
}

/// The zero check runs on the normalized value, so tiny nonzero depths also map to 0.
#[inline(always)]
fn depth_to_gray_value(depth: u16, max_depth: u16) -> u8 {
    let normalized = normalize_to_u8_range(depth, max_depth) as u8;
    if normalized == 0 {
        0
    } else {
        255 - normalized
    }
}

/// Renders depth ranges as opaque grayscale ARGB words for display.
///
/// # Arguments
///
/// * `frame` - Depth ranges, typically the output of [decode_depth16](crate::decode_depth16).
/// * `max_depth` - Range mapped to black, usually in millimetres. Must not be zero.
///
pub fn depth_to_argb8888(frame: &DepthFrame, max_depth: u16) -> Result<Vec<u32>, SensorFrameError> {
    trace!(
        width = frame.width,
        height = frame.height,
        max_depth,
        "depth -> argb8888"
    );
    if let Err(err) = check_max_depth(max_depth).and_then(|_| frame.check_constraints()) {
        debug!(width = frame.width, height = frame.height, %err, "rejected depth frame");
        return Err(err);
    }

    let width = frame.width as usize;
    let mut dst = vec![0u32; frame.data.len()];

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_exact_mut(width)
            .zip(frame.data.par_chunks_exact(width));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_exact_mut(width)
            .zip(frame.data.chunks_exact(width));
    }
    iter.for_each(|(dst, src)| {
        for (dst, &depth) in dst.iter_mut().zip(src.iter()) {
            *dst = depth_to_argb_word(depth, max_depth);
        }
    });

    Ok(dst)
}

/// Normalizes depth ranges into an 8-bit grayscale buffer, near is bright.
///
/// The normalized value is truncated to 8 bits, so depths beyond `max_depth` wrap.
///
/// # Arguments
///
/// * `samples` - Depth ranges, every sample is converted.
/// * `max_depth` - Range mapped to black. Must not be zero.
///
pub fn depth_to_gray8(samples: &[u16], max_depth: u16) -> Result<Vec<u8>, SensorFrameError> {
    trace!(length = samples.len(), max_depth, "depth -> gray8");
    if let Err(err) = check_max_depth(max_depth) {
        debug!(%err, "rejected depth samples");
        return Err(err);
    }
    Ok(samples
        .iter()
        .map(|&depth| depth_to_gray_value(depth, max_depth))
        .collect())
}

/// Expands 8-bit grayscale into opaque ARGB words.
pub fn gray8_to_argb8888(gray: &[u8]) -> Vec<u32> {
    gray.iter().map(|&intensity| gray_word(intensity)).collect()
}
