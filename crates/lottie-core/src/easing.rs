use lottie_data::model::{BezierTangent, Easing};
use std::sync::LazyLock;

/// Cubic-bezier timing curve from the CSS-style control numbers
/// `(x1, y1)` (outgoing) and `(x2, y2)` (incoming).
pub fn cubic(x1: f32, y1: f32, x2: f32, y2: f32) -> Easing {
    Easing {
        i: BezierTangent {
            x: vec![x2],
            y: vec![y2],
        },
        o: BezierTangent {
            x: vec![x1],
            y: vec![y1],
        },
    }
}

pub static EASE_OUT: LazyLock<Easing> = LazyLock::new(|| cubic(0.0, 0.0, 0.2, 1.0));
pub static EASE_IN_OUT: LazyLock<Easing> = LazyLock::new(|| cubic(0.42, 0.0, 0.58, 1.0));
/// Ease-out that overshoots past the target before settling, for pop-ins.
pub static EASE_OUT_BACK: LazyLock<Easing> = LazyLock::new(|| cubic(0.0, 0.0, 0.2, 1.4));

/// True when the curve leaves the [0, 1] value range on the way.
pub fn overshoots(easing: &Easing) -> bool {
    easing
        .i
        .y
        .iter()
        .chain(&easing.o.y)
        .any(|y| !(0.0..=1.0).contains(y))
}
