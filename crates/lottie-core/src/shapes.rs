use crate::animatable::{animated, keyframe, static_value, KeyframeExt};
use crate::easing::EASE_OUT;
use glam::Vec4;
use kurbo::{Point, Rect};
use lottie_data::model::{
    BezierPath, EllipseShape, FillShape, GroupShape, LineCap, LineJoin, PathShape, RectShape,
    Shape, StrokeShape, TrimMode, TrimShape,
};

/// Rounded rectangle from its top-left corner. Lottie stores rectangles by
/// center, so the origin is shifted by half the size.
pub fn rect(x: f32, y: f32, width: f32, height: f32, roundness: f32) -> Shape {
    let bounds = Rect::from_origin_size((x as f64, y as f64), (width as f64, height as f64));
    let center = bounds.center();
    Shape::Rect(RectShape {
        p: static_value([center.x as f32, center.y as f32]),
        s: static_value([bounds.width() as f32, bounds.height() as f32]),
        r: static_value(roundness),
    })
}

/// Ellipse from its center and radii, stored by its bounding box size.
pub fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32) -> Shape {
    let center = Point::new(cx as f64, cy as f64);
    let bounds = Rect::from_center_size(center, (rx as f64 * 2.0, ry as f64 * 2.0));
    Shape::Ellipse(EllipseShape {
        p: static_value([bounds.center().x as f32, bounds.center().y as f32]),
        s: static_value([bounds.width() as f32, bounds.height() as f32]),
    })
}

/// Straight-segment path through `points`; every tangent is zero.
pub fn polyline(points: &[Point], closed: bool) -> BezierPath {
    BezierPath {
        c: closed,
        v: points.iter().map(|p| [p.x as f32, p.y as f32]).collect(),
        i: vec![[0.0, 0.0]; points.len()],
        o: vec![[0.0, 0.0]; points.len()],
    }
}

pub fn path(data: BezierPath) -> Shape {
    Shape::Path(PathShape {
        ks: static_value(data),
    })
}

pub fn fill(color: Vec4) -> Shape {
    Shape::Fill(FillShape {
        c: static_value(color.to_array()),
        o: static_value(100.0),
    })
}

/// Fully opaque stroke with round caps and joins.
pub fn stroke(color: Vec4, width: f32) -> Shape {
    Shape::Stroke(StrokeShape {
        c: static_value(color.to_array()),
        o: static_value(100.0),
        w: static_value(width),
        lc: LineCap::Round,
        lj: LineJoin::Round,
    })
}

/// Trim that reveals the preceding paths.
///
/// Both ends sit at 0 from `start_frames[0]` through `start_frames[1]`
/// (eased out of each), then `e` runs to 100 while `s` stays at 0, landing
/// exactly on `end_frame`.
pub fn trim(start_frames: [f32; 2], end_frame: f32) -> Shape {
    let ramp = |target: f32| {
        animated(vec![
            keyframe(start_frames[0], 0.0).eased(&EASE_OUT),
            keyframe(start_frames[1], 0.0).eased(&EASE_OUT),
            keyframe(end_frame, target),
        ])
    };
    Shape::Trim(TrimShape {
        s: ramp(0.0),
        e: ramp(100.0),
        o: static_value(0.0),
        m: TrimMode::Simultaneously,
    })
}

pub fn group(name: &str, items: Vec<Shape>) -> Shape {
    Shape::Group(GroupShape {
        it: items,
        nm: Some(name.to_string()),
    })
}
