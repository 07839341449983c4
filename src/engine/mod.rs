//! Encoder and hardware argument selection for the ffmpeg passes

use serde::{Deserialize, Serialize};

pub mod hwaccel;

pub use hwaccel::{HardwareAcceleration, HardwarePlan, VaapiDecimate};

/// Video encoder configuration for the transcode pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderSettings {
    /// Software encoder
    pub codec: String,
    /// Software encoding preset
    pub preset: String,
    /// Constant Rate Factor (0-51)
    pub crf: u8,
    /// Encoder used with VA-API
    pub vaapi_codec: String,
    /// Constant quantizer for VA-API
    pub vaapi_qp: u8,
    /// Encoder used with VideoToolbox
    pub videotoolbox_codec: String,
    /// VideoToolbox quality (1-100)
    pub videotoolbox_quality: u8,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            codec: "libx265".to_string(),
            preset: "fast".to_string(),
            crf: 30,
            vaapi_codec: "hevc_vaapi".to_string(),
            vaapi_qp: 23,
            videotoolbox_codec: "hevc_videotoolbox".to_string(),
            videotoolbox_quality: 65,
        }
    }
}

impl EncoderSettings {
    /// `-c:v` and quality arguments for the chosen acceleration
    pub fn codec_args(&self, hw: &HardwareAcceleration) -> Vec<String> {
        match hw {
            HardwareAcceleration::VideoToolbox => vec![
                "-c:v".to_string(),
                self.videotoolbox_codec.clone(),
                "-q:v".to_string(),
                self.videotoolbox_quality.to_string(),
            ],
            HardwareAcceleration::Vaapi(_) => vec![
                "-c:v".to_string(),
                self.vaapi_codec.clone(),
                "-qp".to_string(),
                self.vaapi_qp.to_string(),
            ],
            HardwareAcceleration::None => vec![
                "-c:v".to_string(),
                self.codec.clone(),
                "-preset".to_string(),
                self.preset.clone(),
                "-crf".to_string(),
                self.crf.to_string(),
            ],
        }
    }
}
