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
use crate::numerics::clamp_shr;
use crate::yuv_support::{get_yuv_range, CbCrInverseTransform, Rgb8, YuvChromaRange, YuvRange};

/// BT.601 studio range to full range RGB in Q10 fixed point.
///
/// Coefficients are the BT.601 inverse matrix (kr = 0.299, kb = 0.114) scaled by
/// 255/219 for luma and 255/224 for chroma, multiplied by 1024 and rounded:
///
/// | term  | real      | Q10  |
/// |-------|-----------|------|
/// | Y     | 1.164     | 1192 |
/// | V → R | 1.596     | 1634 |
/// | V → G | 0.813     | 833  |
/// | U → G | 0.391     | 400  |
/// | U → B | 2.018     | 2066 |
///
/// Channels are clamped to `[0, MAX_CHANNEL_VALUE]` *before* the shift.
pub struct Bt601FixedPoint;

impl Bt601FixedPoint {
    pub const PRECISION: i32 = 10;
    pub const MAX_CHANNEL_VALUE: i32 = 262143;
    pub const TRANSFORM: CbCrInverseTransform<i32> =
        CbCrInverseTransform::new(1192, 1634, 2066, 833, 400);
}

const RANGE: YuvChromaRange = get_yuv_range(8, YuvRange::Limited);

/// Converts one studio range YUV triple into an 8-bit RGB pixel.
///
/// Luma below 16 is floored at 16, negative chroma contributions are left to the
/// channel clamp.
#[inline(always)]
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> Rgb8 {
    let transform = &Bt601FixedPoint::TRANSFORM;

    let y_value = (y as i32 - RANGE.bias_y as i32).max(0) * transform.y_coef;
    let cb_value = u as i32 - RANGE.bias_uv as i32;
    let cr_value = v as i32 - RANGE.bias_uv as i32;

    let r = y_value + transform.cr_coef * cr_value;
    let g = y_value - transform.g_coeff_1 * cr_value - transform.g_coeff_2 * cb_value;
    let b = y_value + transform.cb_coef * cb_value;

    const PRECISION: i32 = Bt601FixedPoint::PRECISION;
    const MAX: i32 = Bt601FixedPoint::MAX_CHANNEL_VALUE;
    Rgb8 {
        r: clamp_shr::<PRECISION>(r, MAX) as u8,
        g: clamp_shr::<PRECISION>(g, MAX) as u8,
        b: clamp_shr::<PRECISION>(b, MAX) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yuv_support::{derive_inverse_transform, BT601_BIAS};

    fn reference(y: u8, u: u8, v: u8) -> (i32, i32, i32) {
        let mut n_y = y as i32 - 16;
        let n_u = u as i32 - 128;
        let n_v = v as i32 - 128;
        if n_y < 0 {
            n_y = 0;
        }
        let n_r = (1192 * n_y + 1634 * n_v).clamp(0, 262143);
        let n_g = (1192 * n_y - 833 * n_v - 400 * n_u).clamp(0, 262143);
        let n_b = (1192 * n_y + 2066 * n_u).clamp(0, 262143);
        ((n_r >> 10) & 0xff, (n_g >> 10) & 0xff, (n_b >> 10) & 0xff)
    }

    #[test]
    fn mid_gray_is_130() {
        assert_eq!(
            yuv_to_rgb(128, 128, 128),
            Rgb8 {
                r: 130,
                g: 130,
                b: 130
            }
        );
    }

    #[test]
    fn black_and_white_points() {
        assert_eq!(yuv_to_rgb(16, 128, 128), Rgb8::default());
        assert_eq!(yuv_to_rgb(0, 128, 128), Rgb8::default());
        let white = yuv_to_rgb(235, 128, 128);
        assert_eq!((white.r, white.g, white.b), (254, 254, 254));
        let saturated = yuv_to_rgb(255, 128, 128);
        assert_eq!((saturated.r, saturated.g, saturated.b), (255, 255, 255));
    }

    #[test]
    fn matches_literal_arithmetic_everywhere() {
        for y in (0..=255u16).step_by(3) {
            for u in (0..=255u16).step_by(5) {
                for v in (0..=255u16).step_by(7) {
                    let px = yuv_to_rgb(y as u8, u as u8, v as u8);
                    let (r, g, b) = reference(y as u8, u as u8, v as u8);
                    assert_eq!((px.r as i32, px.g as i32, px.b as i32), (r, g, b));
                }
            }
        }
    }

    #[test]
    fn derived_table_agrees_with_literal_table() {
        let derived = derive_inverse_transform(BT601_BIAS, 10).unwrap();
        let literal = Bt601FixedPoint::TRANSFORM;
        assert!((derived.y_coef - literal.y_coef).abs() <= 1);
        assert!((derived.cr_coef - literal.cr_coef).abs() <= 1);
        assert!((derived.cb_coef - literal.cb_coef).abs() <= 1);
        assert!((derived.g_coeff_1 - literal.g_coeff_1).abs() <= 1);
        assert!((derived.g_coeff_2 - literal.g_coeff_2).abs() <= 1);
    }
}
