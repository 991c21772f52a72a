use lottie_data::model::{Easing, Keyframe, KeyframeValue, Property};

/// Wrap a constant as a non-animated property.
pub fn static_value<T: KeyframeValue>(value: T) -> Property<T> {
    Property::Static(value)
}

/// Wrap keyframes as an animated property.
///
/// Keyframes must already be sorted by time; `audit` reports sequences that
/// are not.
pub fn animated<T: KeyframeValue>(keyframes: Vec<Keyframe<T>>) -> Property<T> {
    Property::Animated(keyframes)
}

/// A linear keyframe at `time`. Chain `.eased(..)` or `.hold()` to change
/// how the segment towards the next keyframe is interpolated.
pub fn keyframe<T: KeyframeValue>(time: f32, value: T) -> Keyframe<T> {
    Keyframe::new(time, value)
}

pub trait KeyframeExt: Sized {
    fn eased(self, easing: &Easing) -> Self;
    fn hold(self) -> Self;
}

impl<T> KeyframeExt for Keyframe<T> {
    fn eased(mut self, easing: &Easing) -> Self {
        self.easing = Some(easing.clone());
        self
    }

    fn hold(mut self) -> Self {
        self.hold = true;
        self
    }
}

/// Time of the last keyframe, if the property is animated.
pub fn last_time<T>(prop: &Property<T>) -> Option<f32> {
    prop.keyframes().last().map(|kf| kf.t)
}

/// Value held at `time` for a property sampled on its keyframes only.
///
/// Returns the value of the latest keyframe at or before `time` (the first
/// keyframe before the animation starts). Interpolated in-between values are
/// a player's concern.
pub fn value_at<T>(prop: &Property<T>, time: f32) -> Option<&T> {
    match prop {
        Property::Static(v) => Some(v),
        Property::Animated(kfs) => kfs
            .iter()
            .take_while(|kf| kf.t <= time)
            .last()
            .or_else(|| kfs.first())
            .map(|kf| &kf.s),
    }
}
