//! Filter graph synthesis
//!
//! Builds the `-filter_complex_script` program that cuts every retained
//! interval out of the input and concatenates the pieces:
//!
//! ```text
//! [0:v]trim=0.000000:5.000000,setpts=PTS-STARTPTS[v0];
//! [0:a]atrim=0.000000:5.000000,asetpts=PTS-STARTPTS[a0];
//! [0:v]trim=12.000000,setpts=PTS-STARTPTS[v1];
//! [0:a]atrim=12.000000,asetpts=PTS-STARTPTS[a1];
//! [v0][a0][v1][a1]concat=n=2:v=1:a=1[vout][aout]
//! ```

use std::fmt;

use crate::domain::errors::DomainError;
use crate::domain::model::Interval;

/// Label of the concatenated video output
pub const VIDEO_OUT: &str = "vout";
/// Label of the concatenated audio output
pub const AUDIO_OUT: &str = "aout";

/// Media type of a sub-clip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Video,
    Audio,
}

impl StreamKind {
    /// Stream specifier and label prefix
    fn tag(&self) -> &'static str {
        match self {
            StreamKind::Video => "v",
            StreamKind::Audio => "a",
        }
    }

    /// Filter name prefix, `atrim`/`asetpts` for audio
    fn filter_prefix(&self) -> &'static str {
        match self {
            StreamKind::Video => "",
            StreamKind::Audio => "a",
        }
    }
}

/// `[0:v]trim=S:E,setpts=PTS-STARTPTS[vN];`
#[derive(Debug, Clone, PartialEq)]
pub struct TrimStatement {
    pub kind: StreamKind,
    pub index: usize,
    pub interval: Interval,
}

impl TrimStatement {
    /// Output label without brackets, e.g. `v3`
    pub fn label(&self) -> String {
        format!("{}{}", self.kind.tag(), self.index)
    }
}

impl fmt::Display for TrimStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.kind.filter_prefix();
        write!(f, "[0:{}]{}trim=", self.kind.tag(), prefix)?;
        match self.interval.end {
            Some(end) => write!(f, "{:.6}:{:.6}", self.interval.start, end)?,
            None => write!(f, "{:.6}", self.interval.start)?,
        }
        write!(f, ",{}setpts=PTS-STARTPTS[{}];", prefix, self.label())
    }
}

/// Final concatenation of all sub-clips
#[derive(Debug, Clone, PartialEq)]
pub struct ConcatStatement {
    pub segments: usize,
    pub with_audio: bool,
}

impl fmt::Display for ConcatStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.segments {
            write!(f, "[v{}]", index)?;
            if self.with_audio {
                write!(f, "[a{}]", index)?;
            }
        }
        if self.with_audio {
            write!(
                f,
                "concat=n={}:v=1:a=1[{}][{}]",
                self.segments, VIDEO_OUT, AUDIO_OUT
            )
        } else {
            write!(f, "concat=n={}:v=1:a=0[{}]", self.segments, VIDEO_OUT)
        }
    }
}

/// Complete trim/concat program, one statement per line
#[derive(Debug, Clone, PartialEq)]
pub struct FilterGraphProgram {
    pub trims: Vec<TrimStatement>,
    pub concat: ConcatStatement,
}

impl FilterGraphProgram {
    /// Synthesize the program for a non-empty interval sequence
    pub fn synthesize(intervals: &[Interval], with_audio: bool) -> Result<Self, DomainError> {
        if intervals.is_empty() {
            return Err(DomainError::NoIntervals);
        }

        let mut trims = Vec::with_capacity(intervals.len() * 2);
        for (index, interval) in intervals.iter().enumerate() {
            trims.push(TrimStatement {
                kind: StreamKind::Video,
                index,
                interval: *interval,
            });
            if with_audio {
                trims.push(TrimStatement {
                    kind: StreamKind::Audio,
                    index,
                    interval: *interval,
                });
            }
        }

        Ok(Self {
            trims,
            concat: ConcatStatement {
                segments: intervals.len(),
                with_audio,
            },
        })
    }

    pub fn with_audio(&self) -> bool {
        self.concat.with_audio
    }

    /// `-map` arguments selecting the program's outputs
    pub fn output_maps(&self) -> Vec<String> {
        let mut args = vec!["-map".to_string(), format!("[{}]", VIDEO_OUT)];
        if self.with_audio() {
            args.push("-map".to_string());
            args.push(format!("[{}]", AUDIO_OUT));
        }
        args
    }
}

impl fmt::Display for FilterGraphProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trim in &self.trims {
            writeln!(f, "{}", trim)?;
        }
        write!(f, "{}", self.concat)
    }
}
