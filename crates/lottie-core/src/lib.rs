//! Builders for Lottie documents.
//!
//! Everything here is a pure constructor over `lottie_data::model` types,
//! plus [`audit`] for checking the timing of a finished document.

pub mod animatable;
pub mod audit;
pub mod easing;
pub mod shapes;
pub mod transform;

pub use animatable::{animated, keyframe, static_value, KeyframeExt};
pub use audit::{audit, audit_with_duration, AuditError, AuditReport, Track};
pub use easing::{EASE_IN_OUT, EASE_OUT, EASE_OUT_BACK};
pub use transform::TransformBuilder;
