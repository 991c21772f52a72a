use lottie_data::model::{Property, Shape, Transform, Vec2};

/// Builds a [`Transform`], starting from the identity (anchor and position
/// at the origin, 100% scale, no rotation, full opacity).
///
/// Every setter takes a whole [`Property`], so each call site says whether
/// the sub-property is static or keyframed.
#[derive(Debug, Clone, Default)]
pub struct TransformBuilder {
    transform: Transform,
}

impl TransformBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(mut self, anchor: Property<Vec2>) -> Self {
        self.transform.a = anchor;
        self
    }

    pub fn position(mut self, position: Property<Vec2>) -> Self {
        self.transform.p = position;
        self
    }

    pub fn scale(mut self, scale: Property<Vec2>) -> Self {
        self.transform.s = scale;
        self
    }

    pub fn rotation(mut self, degrees: Property<f32>) -> Self {
        self.transform.r = degrees;
        self
    }

    pub fn opacity(mut self, opacity: Property<f32>) -> Self {
        self.transform.o = opacity;
        self
    }

    pub fn build(self) -> Transform {
        self.transform
    }

    /// The transform as the `tr` item closing a shape group
    pub fn into_item(self) -> Shape {
        Shape::Transform(self.transform)
    }
}

/// Identity `tr` item
pub fn identity_item() -> Shape {
    TransformBuilder::new().into_item()
}
