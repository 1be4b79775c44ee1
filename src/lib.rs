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
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Pixel transforms for mobile camera and depth sensor frames.
//!
//! Planar YUV 4:2:0 frames with arbitrary row and pixel strides become packed ARGB
//! words or interleaved RGBA bytes, DEPTH16 frames are split into range and confidence,
//! filtered, and rendered as grayscale for display.
//!
//! Every converter borrows its input for the duration of the call and returns a
//! freshly allocated buffer. With the `rayon` feature frames are split by rows.
mod camera_model;
mod depth16;
mod depth_visualization;
mod geometry;
mod images;
mod numerics;
mod sensor_error;
mod ycbcr_compute;
mod yuv_support;
mod yuv_to_rgba;

pub use sensor_error::{MismatchedSize, SensorFrameError};

pub use images::{DepthFrame, OutputImage, PlanarYuvFrame};

pub use yuv_support::{
    derive_inverse_transform, get_inverse_transform, get_yuv_range, CbCrInverseTransform,
    PixelLayout, Rgb8, YuvBias, YuvChromaRange, YuvRange, BT601_BIAS,
};

pub use ycbcr_compute::{yuv_to_rgb, Bt601FixedPoint};

pub use yuv_to_rgba::{convert_yuv420, yuv420_to_argb8888, yuv420_to_rgba8888};

pub use depth16::{
    decode_depth16, depth16_to_le_bytes, Depth16, DEPTH16_CONFIDENCE_MASK,
    DEPTH16_CONFIDENCE_SHIFT, DEPTH16_RANGE_MASK,
};

pub use depth_visualization::{depth_to_argb8888, depth_to_gray8, gray8_to_argb8888};

pub use camera_model::{
    quaternion_to_rotation, CameraParams, Distortion, Extrinsics, FrameSize, Intrinsics,
    COLOR_OUTPUT_SIZES, DEPTH_OUTPUT_SIZES,
};

pub use geometry::{rectify_depth, undistort};
