use crate::config::SplashConfig;
use crate::document;
use crate::error::SplashError;
use lottie_data::model::LottieJson;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Indented JSON (two spaces) unless `pretty` is off.
pub fn to_json(doc: &LottieJson, pretty: bool) -> Result<Vec<u8>, SplashError> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(doc)?
    } else {
        serde_json::to_vec(doc)?
    };
    Ok(bytes)
}

/// Serialize `doc` in memory, then write it to `path` in one go.
///
/// The parent directory must already exist.
pub fn write(doc: &LottieJson, path: &Path, pretty: bool) -> Result<usize, SplashError> {
    let bytes = to_json(doc, pretty)?;
    fs::write(path, &bytes).map_err(|source| SplashError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote animation");
    Ok(bytes.len())
}

/// Build, check and write the splash animation for `config`.
pub fn generate(
    config: &SplashConfig,
    path: &Path,
    pretty: bool,
) -> Result<SplashSummary, SplashError> {
    let doc = document::build(config);
    let report = lottie_core::audit_with_duration(&doc, config.duration_seconds)?;
    tracing::debug!(layers = report.layers, tracks = report.tracks.len(), "timing checked");

    write(&doc, path, pretty)?;

    Ok(SplashSummary {
        output: path.to_path_buf(),
        duration_seconds: config.duration_seconds,
        total_frames: doc.op,
        fps: doc.fr,
        width: doc.w,
        height: doc.h,
    })
}

/// What was generated, printed as three status lines.
#[derive(Debug, Clone, PartialEq)]
pub struct SplashSummary {
    pub output: PathBuf,
    pub duration_seconds: f32,
    pub total_frames: f32,
    pub fps: f32,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for SplashSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ Lottie animation saved to {}", self.output.display())?;
        writeln!(
            f,
            "  - Duration: {:?}s ({} frames @ {}fps)",
            self.duration_seconds, self.total_frames, self.fps
        )?;
        write!(f, "  - Canvas: {}x{}", self.width, self.height)
    }
}
