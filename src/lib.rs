//! ReceiptKeeper splash screen animation.
//!
//! A receipt sheet pops in, four lines draw across it, a green circle pops
//! in and a checkmark is drawn over it. The result is a Lottie document
//! built from fixed constants and written as JSON.

pub mod config;
pub mod document;
pub mod error;
pub mod layers;
pub mod output;

pub use config::{SplashConfig, DEFAULT_OUTPUT};
pub use document::{build, splash_animation};
pub use error::SplashError;
pub use output::{generate, to_json, write, SplashSummary};
