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
#![forbid(unsafe_code)]

#[inline(always)]
/// Clamps to `[0, max]` before shifting right, so the result never exceeds `max >> PRECISION`.
pub(crate) fn clamp_shr<const PRECISION: i32>(val: i32, max: i32) -> i32 {
    (val.max(0).min(max) >> PRECISION) & 0xff
}

#[inline(always)]
/// Scales `value` into `[0, 255]` against `max` with truncating integer division
pub(crate) fn normalize_to_u8_range(value: u16, max: u16) -> u32 {
    value as u32 * 255 / max as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_happens_before_shift() {
        assert_eq!(clamp_shr::<10>(-5000, 262143), 0);
        assert_eq!(clamp_shr::<10>(262143, 262143), 255);
        assert_eq!(clamp_shr::<10>(1 << 20, 262143), 255);
        assert_eq!(clamp_shr::<10>(133504, 262143), 130);
    }

    #[test]
    fn normalization_truncates() {
        assert_eq!(normalize_to_u8_range(0, 5000), 0);
        assert_eq!(normalize_to_u8_range(5000, 5000), 255);
        assert_eq!(normalize_to_u8_range(2500, 5000), 127);
        assert_eq!(normalize_to_u8_range(19, 5000), 0);
        assert_eq!(normalize_to_u8_range(10000, 5000), 510);
    }
}
