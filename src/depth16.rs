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
use crate::SensorFrameError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};
use tracing::{debug, trace};

/// Low 13 bits of a DEPTH16 sample hold the range, usually in millimetres.
pub const DEPTH16_RANGE_MASK: u16 = 0x1fff;
/// Confidence code lives in bits 13..=15.
pub const DEPTH16_CONFIDENCE_SHIFT: u16 = 13;
pub const DEPTH16_CONFIDENCE_MASK: u16 = 0x7;

const SAMPLE_CHUNK: usize = 4096;

/// One packed DEPTH16 sample.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Depth16(pub u16);

impl Depth16 {
    #[inline(always)]
    pub const fn range(self) -> u16 {
        self.0 & DEPTH16_RANGE_MASK
    }

    #[inline(always)]
    pub const fn confidence_code(self) -> u8 {
        ((self.0 >> DEPTH16_CONFIDENCE_SHIFT) & DEPTH16_CONFIDENCE_MASK) as u8
    }

    /// Confidence in `[0, 1]`. Code 0 is full confidence, codes 1..=7 map to `(code - 1) / 7`.
    #[inline(always)]
    pub fn confidence(self) -> f32 {
        match self.confidence_code() {
            0 => 1.0,
            code => (code - 1) as f32 / 7.0,
        }
    }

    /// Range if confidence is strictly above `threshold`, zero otherwise.
    #[inline(always)]
    pub fn filtered(self, threshold: f32) -> u16 {
        if self.confidence() > threshold {
            self.range()
        } else {
            0
        }
    }
}

#[inline(always)]
fn filter_chunk(src: &[u16], dst: &mut [u16], threshold: f32) {
    for (dst, &raw) in dst.iter_mut().zip(src.iter()) {
        *dst = Depth16(raw).filtered(threshold);
    }
}

/// Unpacks a DEPTH16 frame into plain ranges, dropping samples with insufficient confidence.
///
/// # Arguments
///
/// * `frame` - Raw DEPTH16 samples.
/// * `confidence_threshold` - Samples whose confidence is at or below this value become 0.
///   Any finite value is accepted, a threshold of 1 or more rejects everything.
///
/// # Errors
///
/// Returns an error for a NaN threshold or a frame whose length does not match its size.
///
pub fn decode_depth16(
    frame: &DepthFrame,
    confidence_threshold: f32,
) -> Result<Vec<u16>, SensorFrameError> {
    trace!(
        width = frame.width,
        height = frame.height,
        confidence_threshold,
        "decode depth16"
    );
    if confidence_threshold.is_nan() {
        debug!("rejected NaN confidence threshold");
        return Err(SensorFrameError::InvalidConfidenceThreshold(
            confidence_threshold,
        ));
    }
    if let Err(err) = frame.check_constraints() {
        debug!(width = frame.width, height = frame.height, %err, "rejected depth frame");
        return Err(err);
    }

    let mut dst = vec![0u16; frame.data.len()];

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_mut(SAMPLE_CHUNK)
            .zip(frame.data.par_chunks(SAMPLE_CHUNK));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_mut(SAMPLE_CHUNK)
            .zip(frame.data.chunks(SAMPLE_CHUNK));
    }
    iter.for_each(|(dst, src)| filter_chunk(src, dst, confidence_threshold));

    Ok(dst)
}

/// Serializes samples as little-endian `uint16` bytes, e.g. for a `16UC1` image message.
pub fn depth16_to_le_bytes(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|sample| sample.to_le_bytes()).collect()
}
