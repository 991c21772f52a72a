use serde::de::{self, DeserializeOwned};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Layer type id for shape layers
pub const SHAPE_LAYER: u8 = 4;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LottieJson {
    pub v: String,
    #[serde(serialize_with = "write_number")]
    pub fr: f32,
    #[serde(serialize_with = "write_number")]
    pub ip: f32,
    #[serde(serialize_with = "write_number")]
    pub op: f32,
    pub w: u32,
    pub h: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm: Option<String>,
    #[serde(default)]
    pub ddd: u8, // 3D flag (0=2D, 1=3D)
    #[serde(default)]
    pub assets: Vec<Asset>,
    pub layers: Vec<Layer>,
}

impl LottieJson {
    /// Number of frames between the in and out point
    pub fn frame_count(&self) -> f32 {
        self.op - self.ip
    }

    pub fn duration_seconds(&self) -> f32 {
        if self.fr > 0.0 {
            self.frame_count() / self.fr
        } else {
            0.0
        }
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.nm.as_deref() == Some(name))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Layer {
    #[serde(default = "shape_layer")]
    pub ty: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm: Option<String>,
    #[serde(default = "default_one", serialize_with = "write_number")]
    pub sr: f32, // Time stretch (1.0 = normal)
    #[serde(default)]
    pub ks: Transform,
    #[serde(default)]
    pub shapes: Vec<Shape>,
    #[serde(default, serialize_with = "write_number")]
    pub ip: f32,
    #[serde(default, serialize_with = "write_number")]
    pub op: f32,
    #[serde(default, serialize_with = "write_number")]
    pub st: f32, // Start time
}

fn shape_layer() -> u8 {
    SHAPE_LAYER
}

fn default_one() -> f32 {
    1.0
}

// Shapes

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "ty")]
pub enum Shape {
    #[serde(rename = "gr")]
    Group(GroupShape),
    #[serde(rename = "rc")]
    Rect(RectShape),
    #[serde(rename = "el")]
    Ellipse(EllipseShape),
    #[serde(rename = "fl")]
    Fill(FillShape),
    #[serde(rename = "st")]
    Stroke(StrokeShape),
    #[serde(rename = "sh")]
    Path(PathShape),
    #[serde(rename = "tm")]
    Trim(TrimShape),
    #[serde(rename = "tr")]
    Transform(Transform),
}

impl Shape {
    /// Short type tag as written in the `ty` field
    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Group(_) => "gr",
            Shape::Rect(_) => "rc",
            Shape::Ellipse(_) => "el",
            Shape::Fill(_) => "fl",
            Shape::Stroke(_) => "st",
            Shape::Path(_) => "sh",
            Shape::Trim(_) => "tm",
            Shape::Transform(_) => "tr",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GroupShape {
    pub it: Vec<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RectShape {
    // Center, a halved size, so it keeps its fraction on the wire
    #[serde(serialize_with = "write_real")]
    pub p: Property<Vec2>,
    pub s: Property<Vec2>,
    pub r: Property<f32>, // Corner roundness
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EllipseShape {
    pub p: Property<Vec2>,
    pub s: Property<Vec2>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FillShape {
    pub c: Property<Vec4>,
    pub o: Property<f32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StrokeShape {
    pub c: Property<Vec4>,
    pub o: Property<f32>,
    pub w: Property<f32>,
    pub lc: LineCap,
    pub lj: LineJoin,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PathShape {
    pub ks: Property<BezierPath>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TrimShape {
    pub s: Property<f32>,
    pub e: Property<f32>,
    pub o: Property<f32>,
    pub m: TrimMode,
}

/// Layer transform (`ks`) and the `tr` item closing a shape group.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Transform {
    pub a: Property<Vec2>, // Anchor
    pub p: Property<Vec2>, // Position
    pub s: Property<Vec2>, // Scale in percent
    pub r: Property<f32>,  // Rotation in degrees
    pub o: Property<f32>,  // Opacity in percent
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            a: Property::Static([0.0, 0.0]),
            p: Property::Static([0.0, 0.0]),
            s: Property::Static([100.0, 100.0]),
            r: Property::Static(0.0),
            o: Property::Static(100.0),
        }
    }
}

macro_rules! wire_enum {
    ($name:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        #[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
        #[serde(into = "u8", try_from = "u8")]
        pub enum $name {
            $($variant = $value),+
        }

        impl From<$name> for u8 {
            fn from(v: $name) -> u8 {
                v as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = String;

            fn try_from(v: u8) -> Result<Self, Self::Error> {
                match v {
                    $($value => Ok($name::$variant),)+
                    other => Err(format!("invalid {} value {}", stringify!($name), other)),
                }
            }
        }
    };
}

wire_enum!(LineCap { Butt = 1, Round = 2, Square = 3 });
wire_enum!(LineJoin { Miter = 1, Round = 2, Bevel = 3 });
wire_enum!(TrimMode { Simultaneously = 1, Individually = 2 });

// Properties

/// A property is either one constant value (`"a": 0`) or a keyframe
/// sequence (`"a": 1`). The `a` flag is derived from the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Property<T> {
    Static(T),
    Animated(Vec<Keyframe<T>>),
}

impl<T> Property<T> {
    pub fn is_animated(&self) -> bool {
        matches!(self, Property::Animated(_))
    }

    /// Keyframes of an animated property, empty for static ones
    pub fn keyframes(&self) -> &[Keyframe<T>] {
        match self {
            Property::Static(_) => &[],
            Property::Animated(kfs) => kfs.as_slice(),
        }
    }

    pub fn static_value(&self) -> Option<&T> {
        match self {
            Property::Static(v) => Some(v),
            Property::Animated(_) => None,
        }
    }
}

impl<T: KeyframeValue> Serialize for Property<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        PropertyRepr(self, NumberStyle::Integer).serialize(serializer)
    }
}

struct PropertyRepr<'a, T>(&'a Property<T>, NumberStyle);

impl<T: KeyframeValue> Serialize for PropertyRepr<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let style = self.1;
        let mut state = serializer.serialize_struct("Property", 2)?;
        match self.0 {
            Property::Static(value) => {
                state.serialize_field("a", &0u8)?;
                state.serialize_field("k", &ValueRepr(value, style))?;
            }
            Property::Animated(keyframes) => {
                let keyframes: Vec<_> =
                    keyframes.iter().map(|kf| KeyframeRepr(kf, style)).collect();
                state.serialize_field("a", &1u8)?;
                state.serialize_field("k", &keyframes)?;
            }
        }
        state.end()
    }
}

fn write_real<S>(prop: &Property<Vec2>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    PropertyRepr(prop, NumberStyle::Real).serialize(serializer)
}

impl<'de, T: KeyframeValue> Deserialize<'de> for Property<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawProperty {
            #[serde(default)]
            a: u8,
            k: serde_json::Value,
        }

        let raw = RawProperty::deserialize(deserializer)?;
        if raw.a == 1 {
            serde_json::from_value(raw.k)
                .map(Property::Animated)
                .map_err(de::Error::custom)
        } else {
            serde_json::from_value(raw.k)
                .map(Property::Static)
                .map_err(de::Error::custom)
        }
    }
}

/// Values that can sit in a keyframe's `s` slot.
///
/// Scalars and whole shapes are wrapped in a one-element sequence inside
/// keyframes (`"s": [100]`), vectors are written as they are.
pub trait KeyframeValue: DeserializeOwned + Clone {
    const WRAPPED: bool;

    fn write<S: Serializer>(&self, serializer: S, style: NumberStyle) -> Result<S::Ok, S::Error>;
}

impl KeyframeValue for f32 {
    const WRAPPED: bool = true;

    fn write<S: Serializer>(&self, serializer: S, style: NumberStyle) -> Result<S::Ok, S::Error> {
        Number(*self, style).serialize(serializer)
    }
}

impl<const N: usize> KeyframeValue for [f32; N]
where
    [f32; N]: DeserializeOwned,
{
    const WRAPPED: bool = false;

    fn write<S: Serializer>(&self, serializer: S, style: NumberStyle) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|v| Number(*v, style)))
    }
}

impl KeyframeValue for BezierPath {
    const WRAPPED: bool = true;

    fn write<S: Serializer>(&self, serializer: S, _style: NumberStyle) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }
}

struct ValueRepr<'a, T>(&'a T, NumberStyle);

impl<T: KeyframeValue> Serialize for ValueRepr<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.write(serializer, self.1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe<T> {
    pub t: f32,
    pub s: T,
    pub easing: Option<Easing>,
    pub hold: bool, // Step to the next keyframe without interpolating
}

impl<T> Keyframe<T> {
    pub fn new(t: f32, s: T) -> Self {
        Keyframe {
            t,
            s,
            easing: None,
            hold: false,
        }
    }
}

struct KeyframeSlot<'a, T>(&'a T, NumberStyle);

impl<T: KeyframeValue> Serialize for KeyframeSlot<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = ValueRepr(self.0, self.1);
        if T::WRAPPED {
            serializer.collect_seq(std::iter::once(value))
        } else {
            value.serialize(serializer)
        }
    }
}

impl<T: KeyframeValue> Serialize for Keyframe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        KeyframeRepr(self, NumberStyle::Integer).serialize(serializer)
    }
}

struct KeyframeRepr<'a, T>(&'a Keyframe<T>, NumberStyle);

impl<T: KeyframeValue> Serialize for KeyframeRepr<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let (kf, style) = (self.0, self.1);
        let len = 2 + if kf.easing.is_some() { 2 } else { 0 } + usize::from(kf.hold);
        let mut state = serializer.serialize_struct("Keyframe", len)?;
        state.serialize_field("t", &Number(kf.t, NumberStyle::Integer))?;
        state.serialize_field("s", &KeyframeSlot(&kf.s, style))?;
        if let Some(easing) = &kf.easing {
            state.serialize_field("i", &easing.i)?;
            state.serialize_field("o", &easing.o)?;
        }
        if kf.hold {
            state.serialize_field("h", &1u8)?;
        }
        state.end()
    }
}

impl<'de, T: KeyframeValue> Deserialize<'de> for Keyframe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawKeyframe {
            t: f32,
            s: serde_json::Value,
            #[serde(default)]
            i: Option<BezierTangent>,
            #[serde(default)]
            o: Option<BezierTangent>,
            #[serde(default)]
            h: Option<u8>,
        }

        let raw = RawKeyframe::deserialize(deserializer)?;
        let s = if T::WRAPPED {
            let values: Vec<T> = serde_json::from_value(raw.s).map_err(de::Error::custom)?;
            values
                .into_iter()
                .next()
                .ok_or_else(|| de::Error::custom("empty keyframe value"))?
        } else {
            serde_json::from_value(raw.s).map_err(de::Error::custom)?
        };
        let easing = match (raw.i, raw.o) {
            (Some(i), Some(o)) => Some(Easing { i, o }),
            (None, None) => None,
            _ => return Err(de::Error::custom("keyframe easing needs both `i` and `o`")),
        };

        Ok(Keyframe {
            t: raw.t,
            s,
            easing,
            hold: raw.h == Some(1),
        })
    }
}

pub type Vec2 = [f32; 2];
pub type Vec4 = [f32; 4];

// Numbers

/// How a whole number is written: `Integer` drops the fraction (`100`),
/// `Real` keeps it (`100.0`). Fractional values are written the same way
/// by both. Easing tangents are always real.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    Integer,
    Real,
}

#[derive(Clone, Copy)]
struct Number(f32, NumberStyle);

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let Number(value, style) = *self;
        if style == NumberStyle::Integer && value.fract() == 0.0 && value.abs() < 1e15 {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f32(value)
        }
    }
}

fn write_number<S>(value: &f32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    Number(*value, NumberStyle::Integer).serialize(serializer)
}

fn write_points<S>(points: &[Vec2], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let points = points.iter().map(|p| p.map(|v| Number(v, NumberStyle::Integer)));
    serializer.collect_seq(points)
}

/// Bezier tangent control points for keyframe easing
/// Matches the JSON format: {"x": [0.48], "y": [1]}
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BezierTangent {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
}

/// Cubic timing curve between a keyframe and the next one.
/// `o` is the outgoing control point, `i` the incoming one.
#[derive(Debug, Clone, PartialEq)]
pub struct Easing {
    pub i: BezierTangent,
    pub o: BezierTangent,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct BezierPath {
    #[serde(default)]
    pub c: bool, // Closed
    #[serde(default, serialize_with = "write_points")]
    pub v: Vec<Vec2>,
    #[serde(default, serialize_with = "write_points")]
    pub i: Vec<Vec2>, // In tangents, relative to the vertex
    #[serde(default, serialize_with = "write_points")]
    pub o: Vec<Vec2>, // Out tangents, relative to the vertex
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Asset {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<Layer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u: Option<String>, // Directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>, // File name or data URL
}
