use lottie_core::AuditError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplashError {
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize animation: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("inconsistent animation timing: {0}")]
    Audit(#[from] AuditError),
}
