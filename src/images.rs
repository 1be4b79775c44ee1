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
use crate::sensor_error::{check_chroma_channel, check_packed_channel, check_y8_channel};
use crate::SensorFrameError;

#[derive(Debug, Clone, Copy)]
/// Borrowed planar YUV 4:2:0 frame as delivered by a camera `Image`.
///
/// Covers I420 (`uv_pixel_stride == 1`) as well as NV12/NV21 views where the U and V
/// planes alias one interleaved buffer (`uv_pixel_stride == 2`).
pub struct PlanarYuvFrame<'a> {
    pub y_plane: &'a [u8],
    /// Bytes between the starts of consecutive luma rows.
    pub y_stride: u32,
    pub u_plane: &'a [u8],
    pub v_plane: &'a [u8],
    /// Bytes between the starts of consecutive chroma rows, shared by U and V.
    pub uv_stride: u32,
    /// Bytes between consecutive chroma samples within a row.
    pub uv_pixel_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl PlanarYuvFrame<'_> {
    pub fn check_constraints(&self) -> Result<(), SensorFrameError> {
        check_y8_channel(self.y_plane, self.y_stride, self.width, self.height)?;
        check_chroma_channel(
            self.u_plane,
            self.uv_stride,
            self.uv_pixel_stride,
            self.width,
            self.height,
        )?;
        check_chroma_channel(
            self.v_plane,
            self.uv_stride,
            self.uv_pixel_stride,
            self.width,
            self.height,
        )?;
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn luma_row(&self, y: usize) -> &[u8] {
        let start = y * self.y_stride as usize;
        &self.y_plane[start..start + self.width as usize]
    }

    #[inline(always)]
    pub(crate) fn chroma_offset(&self, y: usize) -> usize {
        (y >> 1) * self.uv_stride as usize
    }
}

#[derive(Debug, Clone, Copy)]
/// Borrowed tightly packed frame of `width * height` 16-bit depth samples.
pub struct DepthFrame<'a> {
    pub data: &'a [u16],
    pub width: u32,
    pub height: u32,
}

impl<'a> DepthFrame<'a> {
    pub fn new(data: &'a [u16], width: u32, height: u32) -> Result<Self, SensorFrameError> {
        let frame = DepthFrame {
            data,
            width,
            height,
        };
        frame.check_constraints()?;
        Ok(frame)
    }

    pub fn check_constraints(&self) -> Result<(), SensorFrameError> {
        check_packed_channel(self.data, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Freshly allocated color frame, owned by the caller.
pub enum OutputImage {
    /// `width * height` words, `0xAARRGGBB`.
    Argb(Vec<u32>),
    /// `width * height * 4` bytes, R, G, B, A.
    Rgba(Vec<u8>),
}

impl OutputImage {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            OutputImage::Rgba(bytes) => Some(bytes),
            OutputImage::Argb(_) => None,
        }
    }

    pub fn as_words(&self) -> Option<&[u32]> {
        match self {
            OutputImage::Argb(words) => Some(words),
            OutputImage::Rgba(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_rows_are_cropped_to_width() {
        let y_plane: Vec<u8> = (0..8 * 2).map(|x| x as u8).collect();
        let chroma = [128u8; 2];
        let frame = PlanarYuvFrame {
            y_plane: &y_plane,
            y_stride: 8,
            u_plane: &chroma,
            v_plane: &chroma,
            uv_stride: 2,
            uv_pixel_stride: 1,
            width: 3,
            height: 2,
        };
        frame.check_constraints().unwrap();
        assert_eq!(frame.luma_row(1), &[8, 9, 10]);
        assert_eq!(frame.chroma_offset(1), 0);
        assert_eq!(frame.chroma_offset(2), 2);
    }

    #[test]
    fn depth_frame_rejects_short_buffers() {
        let samples = [0u16; 5];
        assert!(DepthFrame::new(&samples, 3, 2).is_err());
        assert!(DepthFrame::new(&samples[..4], 2, 2).is_ok());
    }
}
