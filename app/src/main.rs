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
use image::{Rgb, RgbImage, RgbaImage};
use rand::Rng;
use sensorframe::{
    convert_yuv420, decode_depth16, depth16_to_le_bytes, depth_to_argb8888, depth_to_gray8,
    gray8_to_argb8888, rectify_depth, undistort, yuv420_to_argb8888, CameraParams, DepthFrame,
    OutputImage, PixelLayout, PlanarYuvFrame,
};
use std::time::Instant;

/// Builds an NV21 frame from RGB with the BT.601 studio range forward matrix.
fn rgb_to_nv21(rgb: &[u8], width: usize, height: usize) -> (Vec<u8>, Vec<u8>) {
    let mut y_plane = vec![0u8; width * height];
    let chroma_width = width.div_ceil(2);
    let mut vu_plane = vec![0u8; chroma_width * 2 * height.div_ceil(2)];
    for y in 0..height {
        for x in 0..width {
            let px = &rgb[(y * width + x) * 3..(y * width + x) * 3 + 3];
            let (r, g, b) = (px[0] as i32, px[1] as i32, px[2] as i32);
            y_plane[y * width + x] = (((66 * r + 129 * g + 25 * b + 128) >> 8) + 16) as u8;
            if y % 2 == 0 && x % 2 == 0 {
                let u = ((-38 * r - 74 * g + 112 * b + 128) >> 8) + 128;
                let v = ((112 * r - 94 * g - 18 * b + 128) >> 8) + 128;
                let offset = (y / 2) * chroma_width * 2 + (x / 2) * 2;
                vu_plane[offset] = v.clamp(0, 255) as u8;
                vu_plane[offset + 1] = u.clamp(0, 255) as u8;
            }
        }
    }
    (y_plane, vu_plane)
}

fn argb_to_image(argb: &[u32], width: u32, height: u32) -> RgbaImage {
    let mut rgba = Vec::with_capacity(argb.len() * 4);
    for &word in argb {
        let [a, r, g, b] = word.to_be_bytes();
        rgba.extend_from_slice(&[r, g, b, a]);
    }
    RgbaImage::from_raw(width, height, rgba).unwrap()
}

fn synthesize_depth(width: usize, height: usize) -> Vec<u16> {
    let mut rng = rand::rng();
    let mut samples = vec![0u16; width * height];
    for (i, sample) in samples.iter_mut().enumerate() {
        let (x, y) = ((i % width) as f32, (i / width) as f32);
        let dx = x - width as f32 / 2.;
        let dy = y - height as f32 / 2.;
        let range = (400. + (dx * dx + dy * dy).sqrt() * 12.) as u16 & 0x1fff;
        let confidence: u16 = rng.random_range(0..8);
        *sample = (confidence << 13) | range;
    }
    samples
}

fn main() {
    let (width, height) = (641u32, 481u32);
    let rgb = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width) as u8,
            (y * 255 / height) as u8,
            ((x + y) % 256) as u8,
        ])
    });
    let (y_plane, vu_plane) = rgb_to_nv21(rgb.as_raw(), width as usize, height as usize);

    let frame = PlanarYuvFrame {
        y_plane: &y_plane,
        y_stride: width,
        u_plane: &vu_plane[1..],
        v_plane: &vu_plane,
        uv_stride: width.div_ceil(2) * 2,
        uv_pixel_stride: 2,
        width,
        height,
    };

    let start_time = Instant::now();
    let argb = yuv420_to_argb8888(&frame).unwrap();
    println!("NV21 -> ARGB time: {:?}", start_time.elapsed());
    argb_to_image(&argb, width, height)
        .save("converted_argb.png")
        .unwrap();

    let start_time = Instant::now();
    let rgba = convert_yuv420(&frame, PixelLayout::Rgba8888).unwrap();
    println!("NV21 -> RGBA time: {:?}", start_time.elapsed());
    if let OutputImage::Rgba(bytes) = rgba {
        RgbaImage::from_raw(width, height, bytes)
            .unwrap()
            .save("converted_rgba.png")
            .unwrap();
    }

    let depth_params = CameraParams::depth_default();
    let size = depth_params.size();
    let raw_depth = synthesize_depth(size.width as usize, size.height as usize);
    let depth_frame = DepthFrame::new(&raw_depth, size.width, size.height).unwrap();

    let start_time = Instant::now();
    let filtered = decode_depth16(&depth_frame, 0.3).unwrap();
    println!("DEPTH16 decode time: {:?}", start_time.elapsed());
    let dropped = filtered.iter().filter(|&&d| d == 0).count();
    println!("Dropped {dropped} of {} samples", filtered.len());
    std::fs::write("depth_filtered.raw", depth16_to_le_bytes(&filtered)).unwrap();

    let filtered_frame = DepthFrame::new(&filtered, size.width, size.height).unwrap();
    let depth_argb = depth_to_argb8888(&filtered_frame, 4000).unwrap();
    argb_to_image(&depth_argb, size.width, size.height)
        .save("depth_argb.png")
        .unwrap();

    let gray = depth_to_gray8(&filtered, 4000).unwrap();
    let gray_argb = gray8_to_argb8888(&gray);
    argb_to_image(&gray_argb, size.width, size.height)
        .save("depth_gray.png")
        .unwrap();

    let start_time = Instant::now();
    let undistorted = undistort(&filtered, &depth_params).unwrap();
    println!("Undistort time: {:?}", start_time.elapsed());

    let color_params = CameraParams::color_default()
        .rescaled(size, 320. / 1440. * 0.3571)
        .unwrap();
    let start_time = Instant::now();
    let rectified = rectify_depth(&undistorted, &depth_params, &color_params).unwrap();
    println!("Rectify time: {:?}", start_time.elapsed());
    let hit = rectified.iter().filter(|&&d| d != 0).count();
    println!("Rectified {hit} of {} samples", rectified.len());

    let rectified_frame = DepthFrame::new(&rectified, size.width, size.height).unwrap();
    let rectified_argb = depth_to_argb8888(&rectified_frame, 4000).unwrap();
    let bytes: &[u8] = bytemuck::cast_slice(&rectified_argb);
    std::fs::write("depth_rectified.raw", bytes).unwrap();
}
