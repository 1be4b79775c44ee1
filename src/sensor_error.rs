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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SensorFrameError {
    PointerOverflow,
    ZeroBaseSize,
    LumaStrideTooSmall(MismatchedSize),
    LumaPlaneMinimumSizeMismatch(MismatchedSize),
    ZeroChromaPixelStride,
    ChromaStrideTooSmall(MismatchedSize),
    ChromaPlaneMinimumSizeMismatch(MismatchedSize),
    PackedPlaneSizeMismatch(MismatchedSize),
    ZeroMaxDepth,
    InvalidConfidenceThreshold(f32),
    UnsupportedAspectRatio { width: u32, height: u32 },
    InvalidIntrinsics,
    DegenerateMatrix,
    CalibrationSizeMismatch(MismatchedSize),
    UnknownPixelLayout(u8),
}

impl Display for SensorFrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SensorFrameError::PointerOverflow => {
                f.write_str("Image size overflow pointer capabilities")
            }
            SensorFrameError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            SensorFrameError::LumaStrideTooSmall(size) => f.write_fmt(format_args!(
                "Luma row stride must be at least {}, but it was {}",
                size.expected, size.received
            )),
            SensorFrameError::LumaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            SensorFrameError::ZeroChromaPixelStride => {
                f.write_str("Chroma pixel stride must be greater than zero")
            }
            SensorFrameError::ChromaStrideTooSmall(size) => f.write_fmt(format_args!(
                "Chroma row stride must be at least {}, but it was {}",
                size.expected, size.received
            )),
            SensorFrameError::ChromaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            SensorFrameError::PackedPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Packed plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            SensorFrameError::ZeroMaxDepth => f.write_str("Max depth threshold must not be zero"),
            SensorFrameError::InvalidConfidenceThreshold(value) => f.write_fmt(format_args!(
                "Confidence threshold must be a number, but it was {}",
                value
            )),
            SensorFrameError::UnsupportedAspectRatio { width, height } => f.write_fmt(
                format_args!("Frame size {}x{} does not match 4:3 aspect ratio", width, height),
            ),
            SensorFrameError::InvalidIntrinsics => {
                f.write_str("Camera focal length must be finite and non zero")
            }
            SensorFrameError::DegenerateMatrix => f.write_str("1.0f - kr - kb must not be 0"),
            SensorFrameError::CalibrationSizeMismatch(size) => f.write_fmt(format_args!(
                "Calibration describes {} pixels, but the frame has {}",
                size.expected, size.received
            )),
            SensorFrameError::UnknownPixelLayout(value) => {
                f.write_fmt(format_args!("Unknown pixel layout {}", value))
            }
        }
    }
}

impl Error for SensorFrameError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, SensorFrameError> {
    v0.checked_mul(v1).ok_or(SensorFrameError::PointerOverflow)
}

#[inline]
pub(crate) fn check_base_size(width: u32, height: u32) -> Result<usize, SensorFrameError> {
    if width == 0 || height == 0 {
        return Err(SensorFrameError::ZeroBaseSize);
    }
    check_overflow_v2(width as usize, height as usize)
}

/// Luma rows are `stride` apart, the last row only needs `width` samples.
#[inline]
pub(crate) fn check_y8_channel(
    data: &[u8],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), SensorFrameError> {
    check_base_size(width, height)?;
    if stride < width {
        return Err(SensorFrameError::LumaStrideTooSmall(MismatchedSize {
            expected: width as usize,
            received: stride as usize,
        }));
    }
    let required = check_overflow_v2(stride as usize, height as usize - 1)?
        .checked_add(width as usize)
        .ok_or(SensorFrameError::PointerOverflow)?;
    if data.len() < required {
        return Err(SensorFrameError::LumaPlaneMinimumSizeMismatch(
            MismatchedSize {
                expected: required,
                received: data.len(),
            },
        ));
    }
    Ok(())
}

/// Chroma is 4:2:0: `ceil(height / 2)` rows of `ceil(width / 2)` samples,
/// each sample `pixel_stride` apart.
#[inline]
pub(crate) fn check_chroma_channel(
    data: &[u8],
    row_stride: u32,
    pixel_stride: u32,
    image_width: u32,
    image_height: u32,
) -> Result<(), SensorFrameError> {
    check_base_size(image_width, image_height)?;
    if pixel_stride == 0 {
        return Err(SensorFrameError::ZeroChromaPixelStride);
    }
    let chroma_height = (image_height as usize).div_ceil(2);
    let row_extent = check_overflow_v2((image_width as usize - 1) >> 1, pixel_stride as usize)?
        .checked_add(1)
        .ok_or(SensorFrameError::PointerOverflow)?;
    if chroma_height > 1 && (row_stride as usize) < row_extent {
        return Err(SensorFrameError::ChromaStrideTooSmall(MismatchedSize {
            expected: row_extent,
            received: row_stride as usize,
        }));
    }
    let required = check_overflow_v2(row_stride as usize, chroma_height - 1)?
        .checked_add(row_extent)
        .ok_or(SensorFrameError::PointerOverflow)?;
    if data.len() < required {
        return Err(SensorFrameError::ChromaPlaneMinimumSizeMismatch(
            MismatchedSize {
                expected: required,
                received: data.len(),
            },
        ));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_packed_channel<V>(
    data: &[V],
    width: u32,
    height: u32,
) -> Result<(), SensorFrameError> {
    let expected = check_base_size(width, height)?;
    if data.len() != expected {
        return Err(SensorFrameError::PackedPlaneSizeMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_max_depth(max_depth: u16) -> Result<(), SensorFrameError> {
    if max_depth == 0 {
        return Err(SensorFrameError::ZeroMaxDepth);
    }
    Ok(())
}
