//! Stream geometry probing and classification
//!
//! Parses ffprobe's JSON stream listing and buckets the first video
//! stream's dimensions into a coarse orientation class. The class is
//! derived once per upload and used only to namespace the storage key.

use crate::error::ProbeError;
use serde::Deserialize;

/// Target aspect ratio for the landscape/portrait buckets.
const TARGET_RATIO: f64 = 16.0 / 9.0;
/// Tolerance around the target ratio. Encoders round dimensions, so the
/// bands are an approximate match, not an exact comparison.
const RATIO_TOLERANCE: f64 = 0.1;

/// Coarse orientation bucket of a video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryClass {
    Landscape,
    Portrait,
    Other,
}

impl GeometryClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryClass::Landscape => "landscape",
            GeometryClass::Portrait => "portrait",
            GeometryClass::Other => "other",
        }
    }

    /// Classify pixel dimensions. `height` must be nonzero; probing rejects
    /// zero-height streams before this is reached.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        let ratio = width as f64 / height as f64;
        if ratio > TARGET_RATIO - RATIO_TOLERANCE && ratio < TARGET_RATIO + RATIO_TOLERANCE {
            GeometryClass::Landscape
        } else if ratio > 1.0 / TARGET_RATIO - RATIO_TOLERANCE
            && ratio < 1.0 / TARGET_RATIO + RATIO_TOLERANCE
        {
            GeometryClass::Portrait
        } else {
            GeometryClass::Other
        }
    }
}

impl std::fmt::Display for GeometryClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pixel dimensions of the first video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamDimensions {
    pub width: u32,
    pub height: u32,
}

impl StreamDimensions {
    pub fn geometry(&self) -> GeometryClass {
        GeometryClass::from_dimensions(self.width, self.height)
    }
}

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    width: Option<u32>,
    height: Option<u32>,
}

/// Parse ffprobe `-show_streams` JSON output into stream dimensions.
///
/// Audio and data streams carry no dimensions; the first stream with both
/// width and height wins. An empty stream list or a zero height is an error.
pub fn parse_ffprobe_output(output: &[u8]) -> Result<StreamDimensions, ProbeError> {
    let parsed: FfprobeOutput = serde_json::from_slice(output)?;

    let (width, height) = parsed
        .streams
        .iter()
        .find_map(|s| s.width.zip(s.height))
        .ok_or(ProbeError::NoVideoStream)?;

    if height == 0 {
        return Err(ProbeError::ZeroHeight);
    }

    Ok(StreamDimensions { width, height })
}
