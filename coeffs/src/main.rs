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
use rug::float::Round;
use rug::Float;
use sensorframe::{get_yuv_range, Bt601FixedPoint, CbCrInverseTransform, YuvRange, BT601_BIAS};

const BITS: u32 = 150;

fn get_inverse_transform(kr: f32, kb: f32) -> CbCrInverseTransform<Float> {
    let get_kg = || -> Float {
        Float::with_val(BITS, 1.0f32) - Float::with_val(BITS, kr) - Float::with_val(BITS, kb)
    };
    let range = get_yuv_range(8, YuvRange::Limited);
    let range_uv =
        || Float::with_val(BITS, 255f32) / Float::with_val(BITS, range.range_uv as f32);
    let y_coef = Float::with_val(BITS, 255f32) / Float::with_val(BITS, range.range_y as f32);
    let cr_coeff = (2f32 * (Float::with_val(BITS, 1f32) - Float::with_val(BITS, kr))) * range_uv();
    let cb_coeff = (2f32 * (Float::with_val(BITS, 1f32) - Float::with_val(BITS, kb))) * range_uv();
    let g_coeff_1 = (2f32
        * ((Float::with_val(BITS, 1f32) - Float::with_val(BITS, kr)) * Float::with_val(BITS, kr)
            / get_kg()))
        * range_uv();
    let g_coeff_2 = (2f32
        * ((Float::with_val(BITS, 1f32) - Float::with_val(BITS, kb)) * Float::with_val(BITS, kb)
            / get_kg()))
        * range_uv();
    CbCrInverseTransform::new(y_coef, cr_coeff, cb_coeff, g_coeff_1, g_coeff_2)
}

fn to_fixed(value: &Float, precision: i32) -> i32 {
    let scaled = Float::with_val(BITS, value * Float::with_val(BITS, 1i32 << precision));
    scaled
        .to_i32_saturating_round(Round::Nearest)
        .unwrap_or_default()
}

fn main() {
    let precision = Bt601FixedPoint::PRECISION;
    let literal = Bt601FixedPoint::TRANSFORM;
    let inverse = get_inverse_transform(BT601_BIAS.kr, BT601_BIAS.kb);

    println!("BT.601 studio range -> full range RGB, Q{precision}");
    println!("{:<6} {:>22} {:>8} {:>8}", "term", "precise", "derived", "table");
    let rows = [
        ("Y", &inverse.y_coef, literal.y_coef),
        ("V->R", &inverse.cr_coef, literal.cr_coef),
        ("U->B", &inverse.cb_coef, literal.cb_coef),
        ("V->G", &inverse.g_coeff_1, literal.g_coeff_1),
        ("U->G", &inverse.g_coeff_2, literal.g_coeff_2),
    ];
    for (name, precise, table) in rows {
        println!(
            "{:<6} {:>22.16} {:>8} {:>8}",
            name,
            precise.to_f64(),
            to_fixed(precise, precision),
            table
        );
    }
    println!(
        "Channel clamp before shift: {} ({} >> {} = {})",
        Bt601FixedPoint::MAX_CHANNEL_VALUE,
        Bt601FixedPoint::MAX_CHANNEL_VALUE,
        precision,
        Bt601FixedPoint::MAX_CHANNEL_VALUE >> precision
    );
}
