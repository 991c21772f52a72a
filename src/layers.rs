//! The four kinds of layer in the splash animation.
//!
//! Timing is in frames at the composition frame rate. Each layer spans the
//! whole composition and reveals itself through its own keyframes.

use crate::config::{LineSpec, SplashConfig, GRAY_LINE, GREEN, LINE_DRAW_FRAMES, LINE_LEFT, WHITE};
use kurbo::Point;
use lottie_core::shapes::{ellipse, fill, group, path, polyline, rect, stroke, trim};
use lottie_core::transform::identity_item;
use lottie_core::{animated, keyframe, static_value, KeyframeExt, TransformBuilder};
use lottie_core::{EASE_OUT, EASE_OUT_BACK};
use lottie_data::model::{Layer, Property, Shape, Transform, Vec2, SHAPE_LAYER};

const RECEIPT_ORIGIN: [f32; 2] = [40.0, 20.0];
const RECEIPT_SIZE: [f32; 2] = [120.0, 160.0];
const RECEIPT_CORNER: f32 = 8.0;
const RECEIPT_CENTER: [f32; 2] = [
    RECEIPT_ORIGIN[0] + RECEIPT_SIZE[0] / 2.0,
    RECEIPT_ORIGIN[1] + RECEIPT_SIZE[1] / 2.0,
];
const RECEIPT_POP_END: f32 = 25.0;
const RECEIPT_FADE_END: f32 = RECEIPT_POP_END - 10.0;

const CIRCLE_CENTER: [f32; 2] = [140.0, 140.0];
const CIRCLE_RADIUS: f32 = 35.0;
const CIRCLE_POP: (f32, f32) = (45.0, 65.0);

const CHECK_DRAW: (f32, f32) = (60.0, 85.0);

fn shape_layer(config: &SplashConfig, name: &str, ks: Transform, shapes: Vec<Shape>) -> Layer {
    Layer {
        ty: SHAPE_LAYER,
        nm: Some(name.to_string()),
        sr: 1.0,
        ks,
        shapes,
        ip: 0.0,
        op: config.total_frames(),
        st: 0.0,
    }
}

/// Scale from nothing to full size with an overshoot between `start` and `end`.
fn pop_in(start: f32, end: f32) -> Property<Vec2> {
    animated(vec![
        keyframe(start, [0.0, 0.0]).eased(&EASE_OUT_BACK),
        keyframe(end, [100.0, 100.0]),
    ])
}

/// White receipt sheet. Pops in around its own center while fading in.
pub fn receipt(config: &SplashConfig) -> Layer {
    let ks = TransformBuilder::new()
        .anchor(static_value(RECEIPT_CENTER))
        .position(static_value(RECEIPT_CENTER))
        .scale(pop_in(0.0, RECEIPT_POP_END))
        .opacity(animated(vec![
            keyframe(0.0, 0.0).eased(&EASE_OUT),
            keyframe(RECEIPT_FADE_END, 100.0),
        ]))
        .build();

    let [x, y] = RECEIPT_ORIGIN;
    let [width, height] = RECEIPT_SIZE;
    let paper = group(
        "Paper",
        vec![
            rect(x, y, width, height, RECEIPT_CORNER),
            fill(WHITE),
            identity_item(),
        ],
    );

    shape_layer(config, "Receipt Paper", ks, vec![paper])
}

/// Gray text line that draws in from the left once `line.delay` is reached.
pub fn line(config: &SplashConfig, line: &LineSpec) -> Layer {
    let data = polyline(
        &[
            Point::new(LINE_LEFT as f64, line.y as f64),
            Point::new(line.extent as f64, line.y as f64),
        ],
        false,
    );

    let content = group(
        line.name,
        vec![
            path(data),
            stroke(GRAY_LINE, 3.0),
            trim([line.delay, line.delay], line.delay + LINE_DRAW_FRAMES),
            identity_item(),
        ],
    );

    shape_layer(config, line.name, TransformBuilder::new().build(), vec![content])
}

/// Green badge behind the checkmark, popping in around its own center.
pub fn circle(config: &SplashConfig) -> Layer {
    let ks = TransformBuilder::new()
        .anchor(static_value(CIRCLE_CENTER))
        .position(static_value(CIRCLE_CENTER))
        .scale(pop_in(CIRCLE_POP.0, CIRCLE_POP.1))
        .build();

    let badge = group(
        "Circle",
        vec![
            ellipse(CIRCLE_CENTER[0], CIRCLE_CENTER[1], CIRCLE_RADIUS, CIRCLE_RADIUS),
            fill(GREEN),
            identity_item(),
        ],
    );

    shape_layer(config, "Green Circle", ks, vec![badge])
}

/// White checkmark, drawn while the circle settles.
pub fn checkmark(config: &SplashConfig) -> Layer {
    let data = polyline(
        &[
            Point::new(125.0, 140.0),
            Point::new(135.0, 150.0),
            Point::new(158.0, 125.0),
        ],
        false,
    );

    let check = group(
        "Check",
        vec![
            path(data),
            stroke(WHITE, 6.0),
            trim([CHECK_DRAW.0, CHECK_DRAW.0], CHECK_DRAW.1),
            identity_item(),
        ],
    );

    shape_layer(config, "Checkmark", TransformBuilder::new().build(), vec![check])
}
