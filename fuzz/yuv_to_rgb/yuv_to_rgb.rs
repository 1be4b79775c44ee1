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

#![no_main]

use libfuzzer_sys::fuzz_target;
use sensorframe::{
    convert_yuv420, yuv420_to_argb8888, yuv420_to_rgba8888, PixelLayout, PlanarYuvFrame,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8, u8)| {
    fuzz_i420(data.0, data.1, data.2, data.3, data.4, data.5);
    fuzz_nv21(data.0, data.1, data.2, data.3, data.4, data.6);
});

fn fuzz_i420(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8, padding: u8) {
    let chroma_width = (i_width as usize).div_ceil(2);
    let chroma_height = (i_height as usize).div_ceil(2);
    let y_stride = i_width as usize + padding as usize;
    let uv_stride = chroma_width + padding as usize;
    let y_plane = vec![y_value; y_stride * i_height as usize];
    let u_plane = vec![u_value; uv_stride * chroma_height];
    let v_plane = vec![v_value; uv_stride * chroma_height];

    let frame = PlanarYuvFrame {
        y_plane: &y_plane,
        y_stride: y_stride as u32,
        u_plane: &u_plane,
        v_plane: &v_plane,
        uv_stride: uv_stride as u32,
        uv_pixel_stride: 1,
        width: i_width as u32,
        height: i_height as u32,
    };

    if i_width == 0 || i_height == 0 {
        assert!(yuv420_to_argb8888(&frame).is_err());
        return;
    }

    let argb = yuv420_to_argb8888(&frame).unwrap();
    let rgba = yuv420_to_rgba8888(&frame).unwrap();
    assert_eq!(argb.len(), i_width as usize * i_height as usize);
    assert_eq!(rgba.len(), argb.len() * 4);
    for (word, px) in argb.iter().zip(rgba.chunks_exact(4)) {
        let [a, r, g, b] = word.to_be_bytes();
        assert_eq!([r, g, b, a], [px[0], px[1], px[2], px[3]]);
    }
}

fn fuzz_nv21(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8, trim: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let uv_stride = (i_width as usize).div_ceil(2) * 2;
    let y_plane = vec![y_value; i_width as usize * i_height as usize];
    let mut vu_plane = vec![v_value; uv_stride * (i_height as usize).div_ceil(2)];
    for pair in vu_plane.chunks_exact_mut(2) {
        pair[1] = u_value;
    }
    let trim = (trim as usize).min(vu_plane.len());
    let vu_plane = &vu_plane[..vu_plane.len() - trim];
    let u_plane = if vu_plane.is_empty() { vu_plane } else { &vu_plane[1..] };

    let frame = PlanarYuvFrame {
        y_plane: &y_plane,
        y_stride: i_width as u32,
        u_plane,
        v_plane: vu_plane,
        uv_stride: uv_stride as u32,
        uv_pixel_stride: 2,
        width: i_width as u32,
        height: i_height as u32,
    };

    // Out of range planes must be reported rather than read.
    _ = convert_yuv420(&frame, PixelLayout::Argb8888);
    _ = convert_yuv420(&frame, PixelLayout::Rgba8888);
}
