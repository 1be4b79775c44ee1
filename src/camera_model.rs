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
use crate::SensorFrameError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub const fn new(width: u32, height: u32) -> FrameSize {
        FrameSize { width, height }
    }

    pub const fn is_four_by_three(&self) -> bool {
        self.width as u64 * 3 == self.height as u64 * 4
    }
}

/// Color stream sizes of the reference device, scale factors relative to the first entry
/// are 1.0, 0.3571, 0.2381, 0.1587 and 0.0794.
pub const COLOR_OUTPUT_SIZES: [FrameSize; 5] = [
    FrameSize::new(4032, 3024),
    FrameSize::new(1440, 1080),
    FrameSize::new(960, 720),
    FrameSize::new(640, 480),
    FrameSize::new(320, 240),
];

/// Depth stream sizes, scale factors 1.0 and 0.5.
pub const DEPTH_OUTPUT_SIZES: [FrameSize; 2] = [FrameSize::new(640, 480), FrameSize::new(320, 240)];

#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Pinhole intrinsics in pixels.
pub struct Intrinsics {
    pub fx: f32,
    pub fy: f32,
    pub cx: f32,
    pub cy: f32,
    pub skew: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Pose in the sensor frame: x right, y up, z out of the screen.
pub struct Extrinsics {
    pub translation: [f32; 3],
    /// Quaternion as `[x, y, z, w]`.
    pub rotation: [f32; 4],
}

impl Default for Extrinsics {
    fn default() -> Self {
        Extrinsics {
            translation: [0.; 3],
            rotation: [0., 0., 0., 1.],
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Brown-Conrady lens distortion.
pub struct Distortion {
    pub k1: f32,
    pub k2: f32,
    pub k3: f32,
    pub p1: f32,
    pub p2: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "CameraParamsRepr", into = "CameraParamsRepr")
)]
/// Calibration of one camera stream.
///
/// Intrinsics are stored at the sensor's native resolution and reported scaled
/// to `size` through [CameraParams::intrinsics].
pub struct CameraParams {
    size: FrameSize,
    scale_factor: f32,
    native_intrinsics: Intrinsics,
    extrinsics: Extrinsics,
    distortion: Distortion,
}

/// Serialized form of [CameraParams], validated through [CameraParams::new] on load.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct CameraParamsRepr {
    size: FrameSize,
    scale_factor: f32,
    native_intrinsics: Intrinsics,
    extrinsics: Extrinsics,
    distortion: Distortion,
}

#[cfg(feature = "serde")]
impl TryFrom<CameraParamsRepr> for CameraParams {
    type Error = SensorFrameError;

    fn try_from(repr: CameraParamsRepr) -> Result<Self, Self::Error> {
        CameraParams::new(
            repr.size,
            repr.scale_factor,
            repr.native_intrinsics,
            repr.extrinsics,
            repr.distortion,
        )
    }
}

#[cfg(feature = "serde")]
impl From<CameraParams> for CameraParamsRepr {
    fn from(params: CameraParams) -> Self {
        CameraParamsRepr {
            size: params.size,
            scale_factor: params.scale_factor,
            native_intrinsics: params.native_intrinsics,
            extrinsics: params.extrinsics,
            distortion: params.distortion,
        }
    }
}

impl CameraParams {
    pub fn new(
        size: FrameSize,
        scale_factor: f32,
        native_intrinsics: Intrinsics,
        extrinsics: Extrinsics,
        distortion: Distortion,
    ) -> Result<CameraParams, SensorFrameError> {
        if !size.is_four_by_three() {
            debug!(width = size.width, height = size.height, "rejected camera frame size");
            return Err(SensorFrameError::UnsupportedAspectRatio {
                width: size.width,
                height: size.height,
            });
        }
        let focal_x = native_intrinsics.fx * scale_factor;
        let focal_y = native_intrinsics.fy * scale_factor;
        if !focal_x.is_normal() || !focal_y.is_normal() {
            debug!(focal_x, focal_y, "rejected camera intrinsics");
            return Err(SensorFrameError::InvalidIntrinsics);
        }
        Ok(CameraParams {
            size,
            scale_factor,
            native_intrinsics,
            extrinsics,
            distortion,
        })
    }

    /// Factory calibration of the reference device's depth camera at 320x240.
    pub fn depth_default() -> CameraParams {
        CameraParams {
            size: DEPTH_OUTPUT_SIZES[1],
            scale_factor: 0.5,
            native_intrinsics: Intrinsics {
                fx: 536.9581,
                fy: 536.7106,
                cx: 312.9077,
                cy: 233.22255,
                skew: 0.,
            },
            extrinsics: Extrinsics {
                translation: [-0.011234, 0., 0.],
                rotation: [0.70304, -0.71113, 0.00172, 0.],
            },
            distortion: Distortion {
                k1: 0.32826,
                k2: -0.56677,
                k3: 0.12383,
                p1: 0.,
                p2: 0.,
            },
        }
    }

    /// Factory calibration of the reference device's color camera at 1440x1080.
    pub fn color_default() -> CameraParams {
        CameraParams {
            size: COLOR_OUTPUT_SIZES[1],
            scale_factor: 0.3571,
            native_intrinsics: Intrinsics {
                fx: 3054.3071,
                fy: 3052.0754,
                cx: 1990.2135,
                cy: 1512.378,
                skew: 0.,
            },
            extrinsics: Extrinsics {
                translation: [0., 0., 0.],
                rotation: [0.7071, -0.7071, 0., 0.],
            },
            distortion: Distortion {
                k1: 0.05797,
                k2: -0.05520,
                k3: 0.00144,
                p1: 0.,
                p2: 0.,
            },
        }
    }

    /// Same camera at another output size.
    pub fn rescaled(
        &self,
        size: FrameSize,
        scale_factor: f32,
    ) -> Result<CameraParams, SensorFrameError> {
        CameraParams::new(
            size,
            scale_factor,
            self.native_intrinsics,
            self.extrinsics,
            self.distortion,
        )
    }

    pub fn size(&self) -> FrameSize {
        self.size
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Intrinsics at [CameraParams::size]; skew is not scaled.
    pub fn intrinsics(&self) -> Intrinsics {
        let native = &self.native_intrinsics;
        Intrinsics {
            fx: native.fx * self.scale_factor,
            fy: native.fy * self.scale_factor,
            cx: native.cx * self.scale_factor,
            cy: native.cy * self.scale_factor,
            skew: native.skew,
        }
    }

    pub fn native_intrinsics(&self) -> Intrinsics {
        self.native_intrinsics
    }

    pub fn extrinsics(&self) -> Extrinsics {
        self.extrinsics
    }

    pub fn distortion(&self) -> Distortion {
        self.distortion
    }

    /// Row-major 3x3 camera matrix `K`.
    pub fn camera_matrix(&self) -> [f64; 9] {
        let k = self.intrinsics();
        [
            k.fx as f64,
            0.,
            k.cx as f64,
            0.,
            k.fy as f64,
            k.cy as f64,
            0.,
            0.,
            1.,
        ]
    }

    pub fn rotation_matrix(&self) -> [f64; 9] {
        quaternion_to_rotation(self.extrinsics.rotation)
    }

    pub fn translation(&self) -> [f32; 3] {
        self.extrinsics.translation
    }

    /// Distortion in OpenCV order `[k1, k2, p1, p2, k3]`.
    pub fn distortion_coefficients(&self) -> [f64; 5] {
        let d = &self.distortion;
        [
            d.k1 as f64,
            d.k2 as f64,
            d.p1 as f64,
            d.p2 as f64,
            d.k3 as f64,
        ]
    }
}

/// Row-major rotation matrix of a unit quaternion `[x, y, z, w]`.
pub fn quaternion_to_rotation(quaternion: [f32; 4]) -> [f64; 9] {
    let [x, y, z, w] = quaternion.map(|v| v as f64);
    [
        1. - 2. * y * y - 2. * z * z,
        2. * x * y - 2. * z * w,
        2. * x * z + 2. * y * w,
        2. * x * y + 2. * z * w,
        1. - 2. * x * x - 2. * z * z,
        2. * y * z - 2. * x * w,
        2. * x * z - 2. * y * w,
        2. * y * z + 2. * x * w,
        1. - 2. * x * x - 2. * y * y,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn presets_are_four_by_three() {
        assert!(COLOR_OUTPUT_SIZES.iter().all(FrameSize::is_four_by_three));
        assert!(DEPTH_OUTPUT_SIZES.iter().all(FrameSize::is_four_by_three));
        assert!(!FrameSize::new(1920, 1080).is_four_by_three());
    }

    #[test]
    fn intrinsics_follow_scale_factor() {
        let depth = CameraParams::depth_default();
        let k = depth.intrinsics();
        assert_close(k.fx as f64, 268.47905);
        assert_close(k.cy as f64, 116.611275);
        let matrix = depth.camera_matrix();
        assert_close(matrix[0], k.fx as f64);
        assert_close(matrix[2], k.cx as f64);
        assert_close(matrix[4], k.fy as f64);
        assert_close(matrix[8], 1.);

        let full = depth.rescaled(DEPTH_OUTPUT_SIZES[0], 1.0).unwrap();
        assert_eq!(full.intrinsics(), depth.native_intrinsics());
    }

    #[test]
    fn non_standard_aspect_is_rejected() {
        let depth = CameraParams::depth_default();
        assert_eq!(
            depth.rescaled(FrameSize::new(640, 360), 1.0),
            Err(SensorFrameError::UnsupportedAspectRatio {
                width: 640,
                height: 360
            })
        );
        assert_eq!(
            depth.rescaled(FrameSize::new(640, 480), 0.0),
            Err(SensorFrameError::InvalidIntrinsics)
        );
    }

    #[test]
    fn identity_quaternion() {
        let r = quaternion_to_rotation([0., 0., 0., 1.]);
        assert_eq!(r, [1., 0., 0., 0., 1., 0., 0., 0., 1.]);
    }

    #[test]
    fn quarter_turn_about_z() {
        let half = std::f32::consts::FRAC_1_SQRT_2;
        let r = quaternion_to_rotation([0., 0., half, half]);
        let expected = [0., -1., 0., 1., 0., 0., 0., 0., 1.];
        for (a, b) in r.iter().zip(expected.iter()) {
            assert_close(*a, *b);
        }
    }

    #[test]
    fn distortion_is_reported_in_opencv_order() {
        let color = CameraParams::color_default();
        let d = color.distortion_coefficients();
        assert_close(d[0], 0.05797);
        assert_close(d[1], -0.05520);
        assert_close(d[2], 0.);
        assert_close(d[3], 0.);
        assert_close(d[4], 0.00144);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn calibration_round_trips_through_json() {
        let color = CameraParams::color_default();
        let json = serde_json::to_string(&color).unwrap();
        let restored: CameraParams = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, color);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_calibration_is_validated() {
        let color = CameraParams::color_default();

        let mut wide = serde_json::to_value(color).unwrap();
        wide["size"]["width"] = serde_json::json!(1920);
        assert!(serde_json::from_value::<CameraParams>(wide).is_err());

        let mut unfocused = serde_json::to_value(color).unwrap();
        unfocused["native_intrinsics"]["fx"] = serde_json::json!(0.0);
        assert!(serde_json::from_value::<CameraParams>(unfocused).is_err());

        let mut both = serde_json::to_value(color).unwrap();
        both["size"] = serde_json::json!({ "width": 1920, "height": 1080 });
        both["native_intrinsics"]["fx"] = serde_json::json!(0.0);
        let err = serde_json::from_value::<CameraParams>(both).unwrap_err();
        assert!(err.to_string().contains("4:3"), "{err}");
    }
}
