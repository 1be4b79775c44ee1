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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use sensorframe::{
    decode_depth16, depth_to_argb8888, depth_to_gray8, rectify_depth, undistort,
    yuv420_to_argb8888, yuv420_to_rgba8888, CameraParams, DepthFrame, PlanarYuvFrame,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();
    let width = 1440u32;
    let height = 1080u32;
    let y_plane: Vec<u8> = (0..width as usize * height as usize)
        .map(|_| rng.random())
        .collect();
    let uv_stride = width.div_ceil(2) as usize * 2;
    let vu_plane: Vec<u8> = (0..uv_stride * height.div_ceil(2) as usize)
        .map(|_| rng.random())
        .collect();
    let u_plane: Vec<u8> = (0..width.div_ceil(2) as usize * height.div_ceil(2) as usize)
        .map(|_| rng.random())
        .collect();
    let v_plane: Vec<u8> = (0..width.div_ceil(2) as usize * height.div_ceil(2) as usize)
        .map(|_| rng.random())
        .collect();

    let nv21 = PlanarYuvFrame {
        y_plane: &y_plane,
        y_stride: width,
        u_plane: &vu_plane[1..],
        v_plane: &vu_plane,
        uv_stride: uv_stride as u32,
        uv_pixel_stride: 2,
        width,
        height,
    };

    let i420 = PlanarYuvFrame {
        y_plane: &y_plane,
        y_stride: width,
        u_plane: &u_plane,
        v_plane: &v_plane,
        uv_stride: width.div_ceil(2),
        uv_pixel_stride: 1,
        width,
        height,
    };

    c.bench_function("sensorframe NV21 -> ARGB8888", |b| {
        b.iter(|| {
            yuv420_to_argb8888(&nv21).unwrap();
        })
    });

    c.bench_function("sensorframe NV21 -> RGBA8888", |b| {
        b.iter(|| {
            yuv420_to_rgba8888(&nv21).unwrap();
        })
    });

    c.bench_function("sensorframe I420 -> ARGB8888", |b| {
        b.iter(|| {
            yuv420_to_argb8888(&i420).unwrap();
        })
    });

    let depth_params = CameraParams::depth_default();
    let size = depth_params.size();
    let raw_depth: Vec<u16> = (0..size.width as usize * size.height as usize)
        .map(|_| rng.random())
        .collect();
    let depth_frame = DepthFrame::new(&raw_depth, size.width, size.height).unwrap();

    c.bench_function("sensorframe DEPTH16 decode", |b| {
        b.iter(|| {
            decode_depth16(&depth_frame, 0.3).unwrap();
        })
    });

    let filtered = decode_depth16(&depth_frame, 0.3).unwrap();
    let filtered_frame = DepthFrame::new(&filtered, size.width, size.height).unwrap();

    c.bench_function("sensorframe Depth -> ARGB8888", |b| {
        b.iter(|| {
            depth_to_argb8888(&filtered_frame, 8191).unwrap();
        })
    });

    c.bench_function("sensorframe Depth -> Gray8", |b| {
        b.iter(|| {
            depth_to_gray8(&filtered, 8191).unwrap();
        })
    });

    c.bench_function("sensorframe Undistort depth", |b| {
        b.iter(|| {
            undistort(&filtered, &depth_params).unwrap();
        })
    });

    let color_params = CameraParams::color_default()
        .rescaled(size, 320. / 1440. * 0.3571)
        .unwrap();

    c.bench_function("sensorframe Rectify depth", |b| {
        b.iter(|| {
            rectify_depth(&filtered, &depth_params, &color_params).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
