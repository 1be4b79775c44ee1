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
use crate::images::{OutputImage, PlanarYuvFrame};
use crate::sensor_error::{check_base_size, check_overflow_v2};
use crate::ycbcr_compute::yuv_to_rgb;
use crate::yuv_support::{PixelLayout, Rgb8};
use crate::SensorFrameError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;
use tracing::{debug, trace};

/// Storage element of one output layout.
pub(crate) trait PackedPixel: Copy + Default + Send + Sync {
    /// Elements written per pixel.
    const ELEMENTS: usize;

    fn pack(dst: &mut [Self], px: Rgb8);
}

impl PackedPixel for u32 {
    const ELEMENTS: usize = 1;

    #[inline(always)]
    fn pack(dst: &mut [u32], px: Rgb8) {
        dst[0] = 0xff00_0000 | ((px.r as u32) << 16) | ((px.g as u32) << 8) | px.b as u32;
    }
}

impl PackedPixel for u8 {
    const ELEMENTS: usize = 4;

    #[inline(always)]
    fn pack(dst: &mut [u8], px: Rgb8) {
        dst[0] = px.r;
        dst[1] = px.g;
        dst[2] = px.b;
        dst[3] = 255;
    }
}

#[inline(always)]
fn yuv420_row<V: PackedPixel>(frame: &PlanarYuvFrame, y: usize, dst: &mut [V]) {
    let y_plane = frame.luma_row(y);
    let uv_offset = frame.chroma_offset(y);
    let u_plane = &frame.u_plane[uv_offset..];
    let v_plane = &frame.v_plane[uv_offset..];
    let uv_pixel_stride = frame.uv_pixel_stride as usize;

    for (x, (dst, &y_src)) in dst
        .chunks_exact_mut(V::ELEMENTS)
        .zip(y_plane.iter())
        .enumerate()
    {
        let uv_x = (x >> 1) * uv_pixel_stride;
        V::pack(dst, yuv_to_rgb(y_src, u_plane[uv_x], v_plane[uv_x]));
    }
}

fn yuv420_to_packed<V: PackedPixel>(frame: &PlanarYuvFrame) -> Result<Vec<V>, SensorFrameError> {
    if let Err(err) = frame.check_constraints() {
        debug!(width = frame.width, height = frame.height, %err, "rejected YUV 4:2:0 frame");
        return Err(err);
    }
    let row_length = check_overflow_v2(frame.width as usize, V::ELEMENTS)?;
    let length = check_overflow_v2(check_base_size(frame.width, frame.height)?, V::ELEMENTS)?;

    let mut dst = vec![V::default(); length];

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_exact_mut(row_length);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_exact_mut(row_length);
    }
    iter.enumerate()
        .for_each(|(y, row)| yuv420_row::<V>(frame, y, row));

    Ok(dst)
}

/// Convert YUV 420 planar format to packed ARGB words.
///
/// Every pixel becomes `0xFF000000 | R << 16 | G << 8 | B`, alpha is always opaque.
///
/// # Arguments
///
/// * `frame` - Source planar frame, strides are taken as supplied by the camera.
///
/// # Errors
///
/// Returns an error when the planes are too short for the declared geometry
/// or the frame has zero size.
///
pub fn yuv420_to_argb8888(frame: &PlanarYuvFrame) -> Result<Vec<u32>, SensorFrameError> {
    trace!(
        width = frame.width,
        height = frame.height,
        uv_pixel_stride = frame.uv_pixel_stride,
        "yuv420 -> argb8888"
    );
    yuv420_to_packed::<u32>(frame)
}

/// Convert YUV 420 planar format to interleaved RGBA bytes.
///
/// Each pixel takes 4 bytes, R G B A respectively, alpha is always 255.
///
/// # Arguments
///
/// * `frame` - Source planar frame, strides are taken as supplied by the camera.
///
/// # Errors
///
/// Returns an error when the planes are too short for the declared geometry
/// or the frame has zero size.
///
pub fn yuv420_to_rgba8888(frame: &PlanarYuvFrame) -> Result<Vec<u8>, SensorFrameError> {
    trace!(
        width = frame.width,
        height = frame.height,
        uv_pixel_stride = frame.uv_pixel_stride,
        "yuv420 -> rgba8888"
    );
    yuv420_to_packed::<u8>(frame)
}

/// Convert YUV 420 planar format into the requested [PixelLayout].
pub fn convert_yuv420(
    frame: &PlanarYuvFrame,
    layout: PixelLayout,
) -> Result<OutputImage, SensorFrameError> {
    match layout {
        PixelLayout::Argb8888 => yuv420_to_argb8888(frame).map(OutputImage::Argb),
        PixelLayout::Rgba8888 => yuv420_to_rgba8888(frame).map(OutputImage::Rgba),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    struct OwnedFrame {
        y_plane: Vec<u8>,
        vu_plane: Vec<u8>,
        y_stride: u32,
        uv_stride: u32,
        width: u32,
        height: u32,
    }

    impl OwnedFrame {
        /// NV21 layout with padded rows, U and V alias the interleaved buffer
        fn random(width: u32, height: u32, padding: u32) -> OwnedFrame {
            let mut rng = rand::rng();
            let y_stride = width + padding;
            let uv_stride = width.div_ceil(2) * 2 + padding;
            let y_plane = (0..y_stride as usize * height as usize)
                .map(|_| rng.random::<u8>())
                .collect();
            let vu_plane = (0..uv_stride as usize * height.div_ceil(2) as usize)
                .map(|_| rng.random::<u8>())
                .collect();
            OwnedFrame {
                y_plane,
                vu_plane,
                y_stride,
                uv_stride,
                width,
                height,
            }
        }

        fn view(&self) -> PlanarYuvFrame<'_> {
            PlanarYuvFrame {
                y_plane: &self.y_plane,
                y_stride: self.y_stride,
                u_plane: &self.vu_plane[1..],
                v_plane: &self.vu_plane,
                uv_stride: self.uv_stride,
                uv_pixel_stride: 2,
                width: self.width,
                height: self.height,
            }
        }
    }

    #[test]
    fn mid_gray_frame() {
        let width = 6u32;
        let height = 4u32;
        let y_plane = vec![128u8; 24];
        let chroma = vec![128u8; 6];
        let frame = PlanarYuvFrame {
            y_plane: &y_plane,
            y_stride: width,
            u_plane: &chroma,
            v_plane: &chroma,
            uv_stride: 3,
            uv_pixel_stride: 1,
            width,
            height,
        };
        let argb = yuv420_to_argb8888(&frame).unwrap();
        assert_eq!(argb.len(), 24);
        assert!(argb.iter().all(|&px| px == 0xff82_8282));

        let rgba = yuv420_to_rgba8888(&frame).unwrap();
        assert_eq!(rgba.len(), 96);
        for px in rgba.chunks_exact(4) {
            assert_eq!(px, &[130, 130, 130, 255]);
        }
    }

    #[test]
    fn layouts_agree_on_channels() {
        for (width, height) in [(64u32, 48u32), (33, 17), (1, 1), (2, 3)] {
            let owned = OwnedFrame::random(width, height, 7);
            let frame = owned.view();
            let argb = yuv420_to_argb8888(&frame).unwrap();
            let rgba = yuv420_to_rgba8888(&frame).unwrap();
            assert_eq!(argb.len() * 4, rgba.len());
            for (&word, bytes) in argb.iter().zip(rgba.chunks_exact(4)) {
                assert_eq!(word >> 24, 0xff);
                assert_eq!(bytes[3], 255);
                assert_eq!(((word >> 16) & 0xff) as u8, bytes[0]);
                assert_eq!(((word >> 8) & 0xff) as u8, bytes[1]);
                assert_eq!((word & 0xff) as u8, bytes[2]);
            }
        }
    }

    #[test]
    fn chroma_is_shared_by_two_by_two_blocks() {
        let width = 4u32;
        let height = 4u32;
        let y_plane = vec![128u8; 16];
        let u_plane = [100u8, 150, 200, 50];
        let v_plane = [90u8, 140, 190, 60];
        let frame = PlanarYuvFrame {
            y_plane: &y_plane,
            y_stride: width,
            u_plane: &u_plane,
            v_plane: &v_plane,
            uv_stride: 2,
            uv_pixel_stride: 1,
            width,
            height,
        };
        let argb = yuv420_to_argb8888(&frame).unwrap();
        let pack = |px: Rgb8| {
            0xff00_0000 | ((px.r as u32) << 16) | ((px.g as u32) << 8) | px.b as u32
        };
        for y in 0..4usize {
            for x in 0..4usize {
                let chroma = (y >> 1) * 2 + (x >> 1);
                let expected = pack(yuv_to_rgb(128, u_plane[chroma], v_plane[chroma]));
                assert_eq!(argb[y * 4 + x], expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn padding_does_not_leak_into_output() {
        let owned = OwnedFrame::random(10, 6, 0);
        let mut padded = OwnedFrame::random(10, 6, 22);
        for y in 0..6usize {
            let src = &owned.y_plane[y * 10..y * 10 + 10];
            let start = y * padded.y_stride as usize;
            padded.y_plane[start..start + 10].copy_from_slice(src);
        }
        for y in 0..3usize {
            let src = &owned.vu_plane[y * 10..y * 10 + 10];
            let start = y * padded.uv_stride as usize;
            padded.vu_plane[start..start + 10].copy_from_slice(src);
        }
        assert_eq!(
            yuv420_to_rgba8888(&owned.view()).unwrap(),
            yuv420_to_rgba8888(&padded.view()).unwrap()
        );
    }

    #[test]
    fn conversion_is_idempotent() {
        let owned = OwnedFrame::random(31, 19, 3);
        let frame = owned.view();
        assert_eq!(
            convert_yuv420(&frame, PixelLayout::Argb8888).unwrap(),
            convert_yuv420(&frame, PixelLayout::Argb8888).unwrap()
        );
        assert_eq!(
            convert_yuv420(&frame, PixelLayout::Rgba8888).unwrap(),
            convert_yuv420(&frame, PixelLayout::Rgba8888).unwrap()
        );
    }

    #[test]
    fn layout_selects_output_variant() {
        let owned = OwnedFrame::random(8, 8, 0);
        let frame = owned.view();
        let argb = convert_yuv420(&frame, PixelLayout::Argb8888).unwrap();
        assert_eq!(argb.as_words().map(|w| w.len()), Some(64));
        assert!(argb.as_bytes().is_none());
        let rgba = convert_yuv420(&frame, PixelLayout::Rgba8888).unwrap();
        assert_eq!(rgba.as_bytes().map(|b| b.len()), Some(256));
    }

    #[test]
    fn short_planes_fail_fast() {
        let owned = OwnedFrame::random(8, 8, 0);
        let frame = PlanarYuvFrame {
            y_plane: &owned.y_plane[..60],
            ..owned.view()
        };
        assert!(matches!(
            yuv420_to_argb8888(&frame),
            Err(SensorFrameError::LumaPlaneMinimumSizeMismatch(_))
        ));
        let frame = PlanarYuvFrame {
            uv_pixel_stride: 3,
            ..owned.view()
        };
        assert!(yuv420_to_rgba8888(&frame).is_err());
    }
}
