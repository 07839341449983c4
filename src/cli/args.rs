//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

use crate::config::ConfigOverrides;
use crate::domain::errors::DomainError;
use crate::domain::model::ParseStrategy;
use crate::engine::{HardwarePlan, VaapiDecimate};

fn parse_strategy(value: &str) -> Result<ParseStrategy, String> {
    ParseStrategy::parse(value).map_err(|e| e.to_string())
}

/// Options shared by every command that interprets a decimation log
#[derive(Args, Debug, Clone)]
pub struct InterpretArgs {
    /// Log dialect of the decimation filter (keep-drop, drop-count)
    #[arg(long, value_parser = parse_strategy, env = "MPDECIMATE_TRIM_STRATEGY")]
    pub strategy: Option<ParseStrategy>,

    /// Discard closed intervals no longer than this many seconds (drop-count)
    #[arg(long, env = "MPDECIMATE_TRIM_MIN_DURATION")]
    pub min_duration: Option<f64>,

    /// Merge drop runs closer than this many seconds (drop-count)
    #[arg(long, env = "MPDECIMATE_TRIM_MERGE_DISTANCE")]
    pub merge_distance: Option<f64>,

    /// Skip trimming, if less than SKIP parts found
    #[arg(long)]
    pub skip: Option<usize>,

    /// Never carry audio into the output
    #[arg(long)]
    pub no_audio: bool,
}

/// Arguments for the trim command
#[derive(Args, Debug)]
pub struct TrimArgs {
    /// File to trim
    pub filepath: PathBuf,

    #[command(flatten)]
    pub interpret: InterpretArgs,

    /// Keep original file
    #[arg(long)]
    pub keep: bool,

    /// Use VA-API device for hardware accelerated transcoding
    #[arg(long, value_name = "DEVICE")]
    pub vaapi: Option<String>,

    /// Use VA-API device for hardware accelerated decimate filter (default: the --vaapi device)
    #[arg(long, value_name = "DEVICE", num_args = 0..=1, default_missing_value = "")]
    pub vaapi_decimate: Option<String>,

    /// Use Apple Video Toolbox for hardware accelerated transcoding
    #[arg(long)]
    pub videotoolbox: bool,

    /// Use Apple Video Toolbox for hardware accelerated decimate filter
    #[arg(long)]
    pub videotoolbox_decimate: bool,

    /// Do not remove anything even on successful run. Use loglevel debug for all ffmpeg calls
    #[arg(long)]
    pub debug: bool,

    /// Write the trimmed file to the current directory instead of next to the input
    #[arg(long)]
    pub output_to_cwd: bool,

    /// ffmpeg executable
    #[arg(long, env = "MPDECIMATE_TRIM_FFMPEG")]
    pub ffmpeg: Option<String>,

    /// Decimation filter expression
    #[arg(long, env = "MPDECIMATE_TRIM_DECIMATE_FILTER")]
    pub decimate_filter: Option<String>,

    /// Software video encoder
    #[arg(long)]
    pub codec: Option<String>,

    /// Software encoding preset
    #[arg(long)]
    pub preset: Option<String>,

    /// Constant Rate Factor (0-51)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=51))]
    pub crf: Option<u8>,
}

impl TrimArgs {
    /// CLI layer of the configuration
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            ffmpeg: self.ffmpeg.clone(),
            decimate_filter: self.decimate_filter.clone(),
            codec: self.codec.clone(),
            preset: self.preset.clone(),
            crf: self.crf,
            ..self.interpret.overrides()
        }
    }

    /// Hardware acceleration for both passes
    pub fn hardware(&self) -> Result<HardwarePlan, DomainError> {
        HardwarePlan::resolve(
            self.vaapi.as_deref(),
            self.vaapi_decimate.as_deref().map(VaapiDecimate::from_flag),
            self.videotoolbox,
            self.videotoolbox_decimate,
        )
    }
}

impl InterpretArgs {
    /// CLI layer of the interval configuration
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            strategy: self.strategy,
            min_duration: self.min_duration,
            merge_distance: self.merge_distance,
            ..ConfigOverrides::default()
        }
    }
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Captured standard error of a decimation run
    pub log: PathBuf,

    #[command(flatten)]
    pub interpret: InterpretArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::engine::HardwareAcceleration;
    use clap::Parser;

    fn trim_args(argv: &[&str]) -> TrimArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Trim(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_vaapi_decimate_without_value() {
        let args = trim_args(&[
            "mpdecimate-trim",
            "trim",
            "--vaapi",
            "/dev/dri/renderD128",
            "--vaapi-decimate",
            "--",
            "in.mp4",
        ]);
        assert_eq!(args.vaapi_decimate.as_deref(), Some(""));
        assert_eq!(
            args.hardware().unwrap().decimate,
            HardwareAcceleration::Vaapi("/dev/dri/renderD128".to_string())
        );
    }

    #[test]
    fn test_overrides_from_flags() {
        let args = trim_args(&[
            "mpdecimate-trim",
            "trim",
            "in.mp4",
            "--strategy",
            "drop-count",
            "--skip",
            "3",
            "--crf",
            "22",
            "--merge-distance",
            "5",
        ]);
        let overrides = args.overrides();
        assert_eq!(overrides.strategy, Some(ParseStrategy::DropCount));
        assert_eq!(overrides.crf, Some(22));
        assert_eq!(overrides.merge_distance, Some(5.0));
        assert_eq!(overrides.min_duration, None);
        assert_eq!(args.interpret.skip, Some(3));
    }

    #[test]
    fn test_crf_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["mpdecimate-trim", "trim", "in.mp4", "--crf", "60"]).is_err());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(
            Cli::try_parse_from(["mpdecimate-trim", "plan", "log.txt", "--strategy", "vdecimate"])
                .is_err()
        );
    }
}
