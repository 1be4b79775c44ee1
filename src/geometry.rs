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
use crate::camera_model::{CameraParams, Intrinsics};
use crate::sensor_error::{check_packed_channel, MismatchedSize};
use crate::SensorFrameError;
use num_traits::Zero;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;
use tracing::{debug, trace};

/// Forward Brown-Conrady model in pixel coordinates.
struct LensModel {
    fx: f64,
    fy: f64,
    cx: f64,
    cy: f64,
    k1: f64,
    k2: f64,
    k3: f64,
    p1: f64,
    p2: f64,
    width: usize,
    height: usize,
}

impl LensModel {
    fn new(params: &CameraParams) -> LensModel {
        let k = params.intrinsics();
        let d = params.distortion();
        let size = params.size();
        LensModel {
            fx: k.fx as f64,
            fy: k.fy as f64,
            cx: k.cx as f64,
            cy: k.cy as f64,
            k1: d.k1 as f64,
            k2: d.k2 as f64,
            k3: d.k3 as f64,
            p1: d.p1 as f64,
            p2: d.p2 as f64,
            width: size.width as usize,
            height: size.height as usize,
        }
    }

    /// Index of the distorted source pixel that lands on `(u, v)` after correction.
    #[inline]
    fn source_index(&self, u: usize, v: usize) -> Option<usize> {
        let x = (u as f64 - self.cx) / self.fx;
        let y = (v as f64 - self.cy) / self.fy;
        let r2 = x * x + y * y;
        let radial = 1. + self.k1 * r2 + self.k2 * r2 * r2 + self.k3 * r2 * r2 * r2;
        let x_distorted = x * radial + 2. * self.p1 * x * y + self.p2 * (r2 + 2. * x * x);
        let y_distorted = y * radial + self.p1 * (r2 + 2. * y * y) + 2. * self.p2 * x * y;
        let u_distorted = self.fx * x_distorted + self.cx;
        let v_distorted = self.fy * y_distorted + self.cy;
        pixel_index(u_distorted, v_distorted, self.width, self.height)
    }
}

#[inline]
fn pixel_index(u: f64, v: f64, width: usize, height: usize) -> Option<usize> {
    if u >= 0. && v >= 0. && u < width as f64 && v < height as f64 {
        Some(v as usize * width + u as usize)
    } else {
        None
    }
}

/// Removes lens distortion from a frame described by `params`.
///
/// Works on any single element per pixel buffer: `u16` depth or `u32` ARGB.
/// Output pixels whose source falls outside the frame are zero.
pub fn undistort<T>(input: &[T], params: &CameraParams) -> Result<Vec<T>, SensorFrameError>
where
    T: Copy + Zero + Send + Sync,
{
    let size = params.size();
    trace!(width = size.width, height = size.height, "undistort");
    if let Err(err) = check_packed_channel(input, size.width, size.height) {
        debug!(length = input.len(), %err, "rejected undistort input");
        return Err(err);
    }

    let lens = LensModel::new(params);
    let mut dst = vec![T::zero(); input.len()];

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_exact_mut(lens.width);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_exact_mut(lens.width);
    }
    iter.enumerate().for_each(|(v, row)| {
        for (u, dst) in row.iter_mut().enumerate() {
            if let Some(index) = lens.source_index(u, v) {
                *dst = input[index];
            }
        }
    });

    Ok(dst)
}

#[inline]
fn rotate_transposed(r: &[f64; 9], p: [f64; 3]) -> [f64; 3] {
    [
        r[0] * p[0] + r[3] * p[1] + r[6] * p[2],
        r[1] * p[0] + r[4] * p[1] + r[7] * p[2],
        r[2] * p[0] + r[5] * p[1] + r[8] * p[2],
    ]
}

/// Reprojects a millimetre depth frame into the color camera's view.
///
/// `color_params` must describe the color camera at the depth frame's size,
/// see [CameraParams::rescaled]. Pixels are scattered in row-major order, so
/// when two depth pixels land on the same target the later one wins.
/// Targets behind the color camera or outside the frame are dropped.
pub fn rectify_depth(
    depth: &[u16],
    depth_params: &CameraParams,
    color_params: &CameraParams,
) -> Result<Vec<u16>, SensorFrameError> {
    let size = depth_params.size();
    trace!(width = size.width, height = size.height, "rectify depth");
    if let Err(err) = check_packed_channel(depth, size.width, size.height) {
        debug!(length = depth.len(), %err, "rejected depth frame");
        return Err(err);
    }
    let color_size = color_params.size();
    if color_size != size {
        debug!(
            color_width = color_size.width,
            color_height = color_size.height,
            "color calibration does not match depth frame size"
        );
        return Err(SensorFrameError::CalibrationSizeMismatch(MismatchedSize {
            expected: size.width as usize * size.height as usize,
            received: color_size.width as usize * color_size.height as usize,
        }));
    }

    let width = size.width as usize;
    let height = size.height as usize;
    let depth_k: Intrinsics = depth_params.intrinsics();
    let color_k: Intrinsics = color_params.intrinsics();
    let depth_rotation = depth_params.rotation_matrix();
    let color_rotation = color_params.rotation_matrix();
    let translation = depth_params.translation().map(|t| t as f64);

    let mut dst = vec![0u16; depth.len()];
    let mut dropped = 0usize;

    for (v, row) in depth.chunks_exact(width).enumerate() {
        for (u, &raw) in row.iter().enumerate() {
            if raw == 0 {
                continue;
            }
            let z = raw as f64 / 1000.;
            let x = (u as f64 - depth_k.cx as f64) / depth_k.fx as f64 * z;
            let y = (v as f64 - depth_k.cy as f64) / depth_k.fy as f64 * z;

            let sensor = rotate_transposed(&depth_rotation, [x, y, z]);
            let sensor = [
                sensor[0] + translation[0],
                sensor[1] + translation[1],
                sensor[2] + translation[2],
            ];
            let [cx, cy, cz] = rotate_transposed(&color_rotation, sensor);
            if cz <= 0. {
                dropped += 1;
                continue;
            }

            let color_u = color_k.fx as f64 * cx / cz + color_k.cx as f64;
            let color_v = color_k.fy as f64 * cy / cz + color_k.cy as f64;
            match pixel_index(color_u, color_v, width, height) {
                Some(index) => dst[index] = raw,
                None => dropped += 1,
            }
        }
    }

    trace!(dropped, "rectified depth");
    Ok(dst)
}
