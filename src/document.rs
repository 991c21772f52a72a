use crate::config::{SplashConfig, LINES, LOTTIE_VERSION};
use crate::layers;
use lottie_data::model::LottieJson;

/// Assemble the splash animation.
///
/// Layers are listed front to back: the first one is drawn on top, so the
/// checkmark leads and the receipt sheet closes the list.
pub fn build(config: &SplashConfig) -> LottieJson {
    let mut stack = vec![layers::checkmark(config), layers::circle(config)];
    stack.extend(LINES.iter().map(|line| layers::line(config, line)));
    stack.push(layers::receipt(config));

    for layer in &stack {
        tracing::debug!(
            layer = layer.nm.as_deref().unwrap_or_default(),
            groups = layer.shapes.len(),
            "built layer"
        );
    }

    LottieJson {
        v: LOTTIE_VERSION.to_string(),
        fr: config.fps,
        ip: 0.0,
        op: config.total_frames(),
        w: config.width,
        h: config.height,
        nm: Some(config.title.clone()),
        ddd: 0,
        assets: Vec::new(),
        layers: stack,
    }
}

/// The splash animation with its stock settings.
pub fn splash_animation() -> LottieJson {
    build(&SplashConfig::default())
}
