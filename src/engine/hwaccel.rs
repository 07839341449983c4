//! Hardware acceleration argument selection

use crate::domain::errors::DomainError;

/// Hardware acceleration options
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HardwareAcceleration {
    /// No hardware acceleration (software only)
    #[default]
    None,
    /// Video Acceleration API on the given DRM render node
    Vaapi(String),
    /// Apple VideoToolbox (macOS)
    VideoToolbox,
}

/// `--vaapi-decimate` with or without a device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaapiDecimate {
    /// Reuse the transcode device
    SameAsTranscode,
    Device(String),
}

impl VaapiDecimate {
    /// An empty value means the flag was given without a device
    pub fn from_flag(value: &str) -> Self {
        if value.is_empty() {
            VaapiDecimate::SameAsTranscode
        } else {
            VaapiDecimate::Device(value.to_string())
        }
    }
}

/// Hardware selection for both ffmpeg invocations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HardwarePlan {
    pub decimate: HardwareAcceleration,
    pub transcode: HardwareAcceleration,
}

impl HardwarePlan {
    /// Resolve the command-line flags into one plan
    pub fn resolve(
        vaapi: Option<&str>,
        vaapi_decimate: Option<VaapiDecimate>,
        videotoolbox: bool,
        videotoolbox_decimate: bool,
    ) -> Result<Self, DomainError> {
        let decimate = if videotoolbox_decimate {
            HardwareAcceleration::VideoToolbox
        } else {
            match vaapi_decimate {
                None => HardwareAcceleration::None,
                Some(VaapiDecimate::Device(device)) => HardwareAcceleration::Vaapi(device),
                Some(VaapiDecimate::SameAsTranscode) => match vaapi {
                    Some(device) => HardwareAcceleration::Vaapi(device.to_string()),
                    None => {
                        return Err(DomainError::BadArgs(
                            "--vaapi-decimate set to use --vaapi device, but --vaapi not set"
                                .to_string(),
                        ))
                    }
                },
            }
        };

        let transcode = if videotoolbox {
            HardwareAcceleration::VideoToolbox
        } else if let Some(device) = vaapi {
            HardwareAcceleration::Vaapi(device.to_string())
        } else {
            HardwareAcceleration::None
        };

        Ok(Self {
            decimate,
            transcode,
        })
    }

    /// Input-side arguments for the decimation pass
    pub fn decimate_args(&self) -> Vec<String> {
        match &self.decimate {
            HardwareAcceleration::None => Vec::new(),
            HardwareAcceleration::VideoToolbox => args(&["-hwaccel", "videotoolbox"]),
            HardwareAcceleration::Vaapi(device) => {
                args(&["-hwaccel", "vaapi", "-hwaccel_device", device.as_str()])
            }
        }
    }

    /// Input-side arguments for the transcode pass.
    ///
    /// VideoToolbox only affects the encoder choice here.
    pub fn transcode_args(&self) -> Vec<String> {
        match &self.transcode {
            HardwareAcceleration::Vaapi(device) => args(&[
                "-hwaccel",
                "vaapi",
                "-hwaccel_device",
                device.as_str(),
                "-hwaccel_output_format",
                "vaapi",
            ]),
            _ => Vec::new(),
        }
    }
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_software_plan_has_no_args() {
        let plan = HardwarePlan::resolve(None, None, false, false).unwrap();
        assert!(plan.decimate_args().is_empty());
        assert!(plan.transcode_args().is_empty());
    }

    #[test]
    fn test_vaapi_decimate_reuses_transcode_device() {
        let plan = HardwarePlan::resolve(
            Some("/dev/dri/renderD128"),
            Some(VaapiDecimate::from_flag("")),
            false,
            false,
        )
        .unwrap();
        assert_eq!(
            plan.decimate_args(),
            vec!["-hwaccel", "vaapi", "-hwaccel_device", "/dev/dri/renderD128"]
        );
        assert_eq!(
            plan.transcode_args(),
            vec![
                "-hwaccel",
                "vaapi",
                "-hwaccel_device",
                "/dev/dri/renderD128",
                "-hwaccel_output_format",
                "vaapi"
            ]
        );
    }

    #[test]
    fn test_vaapi_decimate_without_device_is_an_error() {
        let result = HardwarePlan::resolve(None, Some(VaapiDecimate::SameAsTranscode), false, false);
        assert!(matches!(result, Err(DomainError::BadArgs(_))));
    }

    #[test]
    fn test_vaapi_decimate_with_own_device() {
        let plan = HardwarePlan::resolve(
            None,
            Some(VaapiDecimate::from_flag("/dev/dri/renderD129")),
            false,
            false,
        )
        .unwrap();
        assert_eq!(
            plan.decimate,
            HardwareAcceleration::Vaapi("/dev/dri/renderD129".to_string())
        );
        assert_eq!(plan.transcode, HardwareAcceleration::None);
    }

    #[test]
    fn test_videotoolbox_decimate_wins() {
        let plan = HardwarePlan::resolve(
            None,
            Some(VaapiDecimate::Device("/dev/dri/renderD128".to_string())),
            true,
            true,
        )
        .unwrap();
        assert_eq!(plan.decimate_args(), vec!["-hwaccel", "videotoolbox"]);
        assert!(plan.transcode_args().is_empty());
        assert_eq!(plan.transcode, HardwareAcceleration::VideoToolbox);
    }
}
