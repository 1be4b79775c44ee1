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
use crate::sensor_error::SensorFrameError;

#[derive(Debug, Copy, Clone)]
pub struct CbCrInverseTransform<T> {
    pub y_coef: T,
    pub cr_coef: T,
    pub cb_coef: T,
    pub g_coeff_1: T,
    pub g_coeff_2: T,
}

impl<T> CbCrInverseTransform<T> {
    pub const fn new(
        y_coef: T,
        cr_coef: T,
        cb_coef: T,
        g_coeff_1: T,
        g_coeff_2: T,
    ) -> CbCrInverseTransform<T> {
        CbCrInverseTransform {
            y_coef,
            cr_coef,
            cb_coef,
            g_coeff_1,
            g_coeff_2,
        }
    }
}

impl CbCrInverseTransform<f32> {
    /// Integral transformation adds an error not less than 1%
    pub fn to_integers(&self, precision: u32) -> CbCrInverseTransform<i32> {
        let precision_scale: i32 = 1i32 << (precision as i32);
        let cr_coef = (self.cr_coef * precision_scale as f32).round() as i32;
        let cb_coef = (self.cb_coef * precision_scale as f32).round() as i32;
        let y_coef = (self.y_coef * precision_scale as f32).round() as i32;
        let g_coef_1 = (self.g_coeff_1 * precision_scale as f32).round() as i32;
        let g_coef_2 = (self.g_coeff_2 * precision_scale as f32).round() as i32;
        CbCrInverseTransform::<i32> {
            y_coef,
            cr_coef,
            cb_coef,
            g_coeff_1: g_coef_1,
            g_coeff_2: g_coef_2,
        }
    }
}

/// Transformation YUV to RGB with coefficients as specified in [ITU-R](https://www.itu.int/rec/T-REC-H.273/en)
///
/// Returns `None` when `1 - kr - kb` is zero.
pub fn get_inverse_transform(
    range_rgba: u32,
    range_y: u32,
    range_uv: u32,
    kr: f32,
    kb: f32,
) -> Option<CbCrInverseTransform<f32>> {
    let range_uv = range_rgba as f32 / range_uv as f32;
    let y_coef = range_rgba as f32 / range_y as f32;
    let cr_coeff = (2f32 * (1f32 - kr)) * range_uv;
    let cb_coeff = (2f32 * (1f32 - kb)) * range_uv;
    let kg = 1.0f32 - kr - kb;
    if kg.abs() < f32::EPSILON {
        return None;
    }
    let g_coeff_1 = (2f32 * ((1f32 - kr) * kr / kg)) * range_uv;
    let g_coeff_2 = (2f32 * ((1f32 - kb) * kb / kg)) * range_uv;
    Some(CbCrInverseTransform::new(
        y_coef, cr_coeff, cb_coeff, g_coeff_1, g_coeff_2,
    ))
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
/// Declares YUV range TV (limited) or Full
pub enum YuvRange {
    /// Limited range Y ∈ [16 << (depth - 8), 16 << (depth - 8) + 224 << (depth - 8)], UV ∈ [-1 << (depth - 1), -1 << (depth - 1) + 1 << (depth - 1)]
    Limited,
    /// Full range Y ∈ [0, 2^bit_depth - 1], UV ∈ [-1 << (depth - 1), -1 << (depth - 1) + 2^bit_depth - 1]
    Full,
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct YuvChromaRange {
    pub bias_y: u32,
    pub bias_uv: u32,
    pub range_y: u32,
    pub range_uv: u32,
    pub range: YuvRange,
}

pub const fn get_yuv_range(depth: u32, range: YuvRange) -> YuvChromaRange {
    match range {
        YuvRange::Limited => YuvChromaRange {
            bias_y: 16 << (depth - 8),
            bias_uv: 1 << (depth - 1),
            range_y: 219 << (depth - 8),
            range_uv: 224 << (depth - 8),
            range,
        },
        YuvRange::Full => YuvChromaRange {
            bias_y: 0,
            bias_uv: 1 << (depth - 1),
            range_uv: (1 << depth) - 1,
            range_y: (1 << depth) - 1,
            range,
        },
    }
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct YuvBias {
    pub kr: f32,
    pub kb: f32,
}

/// ITU-R BT.601 luma weights.
pub const BT601_BIAS: YuvBias = YuvBias {
    kr: 0.299f32,
    kb: 0.114f32,
};

/// Derives a fixed point inverse transform for 8-bit studio range input.
///
/// With [BT601_BIAS] and precision 10 this reproduces
/// [Bt601FixedPoint::TRANSFORM](crate::Bt601FixedPoint::TRANSFORM) within one unit per coefficient.
pub fn derive_inverse_transform(
    bias: YuvBias,
    precision: u32,
) -> Result<CbCrInverseTransform<i32>, SensorFrameError> {
    let range = get_yuv_range(8, YuvRange::Limited);
    get_inverse_transform(255, range.range_y, range.range_uv, bias.kr, bias.kb)
        .map(|transform| transform.to_integers(precision))
        .ok_or(SensorFrameError::DegenerateMatrix)
}

/// One 8-bit RGB pixel, every channel already clamped to [0, 255].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Output serialization of converted color frames.
pub enum PixelLayout {
    /// One `u32` per pixel, `0xAARRGGBB` with opaque alpha.
    Argb8888 = 0,
    /// Four bytes per pixel in R, G, B, A order with opaque alpha.
    Rgba8888 = 1,
}

impl TryFrom<u8> for PixelLayout {
    type Error = SensorFrameError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PixelLayout::Argb8888),
            1 => Ok(PixelLayout::Rgba8888),
            _ => Err(SensorFrameError::UnknownPixelLayout(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limited_range_biases() {
        let range = get_yuv_range(8, YuvRange::Limited);
        assert_eq!(range.bias_y, 16);
        assert_eq!(range.bias_uv, 128);
        assert_eq!(range.range_y, 219);
        assert_eq!(range.range_uv, 224);
    }

    #[test]
    fn degenerate_bias_has_no_transform() {
        assert!(get_inverse_transform(255, 219, 224, 0.5, 0.5).is_none());
        // 1.0 - 0.6 - 0.4 rounds to -2.98e-8 in f32
        assert!(get_inverse_transform(255, 219, 224, 0.6, 0.4).is_none());
        assert_eq!(
            derive_inverse_transform(YuvBias { kr: 0.6, kb: 0.4 }, 10).unwrap_err(),
            SensorFrameError::DegenerateMatrix
        );
        assert!(derive_inverse_transform(BT601_BIAS, 10).is_ok());
    }

    #[test]
    fn layout_round_trips_through_u8() {
        assert_eq!(
            PixelLayout::try_from(PixelLayout::Argb8888 as u8),
            Ok(PixelLayout::Argb8888)
        );
        assert_eq!(
            PixelLayout::try_from(PixelLayout::Rgba8888 as u8),
            Ok(PixelLayout::Rgba8888)
        );
    }

    #[test]
    fn unknown_layout_is_an_error() {
        for value in 2..=u8::MAX {
            assert_eq!(
                PixelLayout::try_from(value),
                Err(SensorFrameError::UnknownPixelLayout(value))
            );
        }
    }
}
