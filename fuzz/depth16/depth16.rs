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
    decode_depth16, depth16_to_le_bytes, depth_to_argb8888, depth_to_gray8, gray8_to_argb8888,
    DepthFrame,
};

fuzz_target!(|data: (u8, u8, u16, u16, i8, Vec<u16>)| {
    let (i_width, i_height, fill, max_depth, threshold, tail) = data;
    let mut samples = vec![fill; i_width as usize * i_height as usize];
    for (dst, src) in samples.iter_mut().zip(tail.iter()) {
        *dst = *src;
    }
    let threshold = threshold as f32 / 100.;

    let frame = match DepthFrame::new(&samples, i_width as u32, i_height as u32) {
        Ok(frame) => frame,
        Err(_) => {
            assert!(i_width == 0 || i_height == 0);
            return;
        }
    };

    let filtered = decode_depth16(&frame, threshold).unwrap();
    assert_eq!(filtered.len(), samples.len());
    assert!(filtered.iter().all(|&d| d <= 0x1fff));
    assert_eq!(depth16_to_le_bytes(&filtered).len(), filtered.len() * 2);

    let filtered_frame = DepthFrame::new(&filtered, i_width as u32, i_height as u32).unwrap();
    match depth_to_argb8888(&filtered_frame, max_depth) {
        Ok(argb) => assert!(argb.iter().all(|&w| w >> 24 == 0xff)),
        Err(_) => assert_eq!(max_depth, 0),
    }
    if let Ok(gray) = depth_to_gray8(&filtered, max_depth) {
        assert_eq!(gray8_to_argb8888(&gray).len(), filtered.len());
    }
});
