//! Timing audit tests.
//! Run with: cargo test -p lottie-core --test audit

use lottie_core::shapes::{group, trim};
use lottie_core::transform::identity_item;
use lottie_core::{animated, audit, audit_with_duration, keyframe, AuditError, TransformBuilder};
use lottie_data::model::{Layer, LottieJson, SHAPE_LAYER};

fn layer(name: &str, op: f32, ks: lottie_data::model::Transform, trim_window: (f32, f32)) -> Layer {
    Layer {
        ty: SHAPE_LAYER,
        nm: Some(name.to_string()),
        sr: 1.0,
        ks,
        shapes: vec![group(
            name,
            vec![trim([trim_window.0, trim_window.0], trim_window.1), identity_item()],
        )],
        ip: 0.0,
        op,
        st: 0.0,
    }
}

fn document(layers: Vec<Layer>) -> LottieJson {
    LottieJson {
        v: "5.7.4".to_string(),
        fr: 60.0,
        ip: 0.0,
        op: 120.0,
        w: 200,
        h: 200,
        nm: Some("Audit".to_string()),
        ddd: 0,
        assets: Vec::new(),
        layers,
    }
}

#[test]
fn collects_every_animated_track() {
    let ks = TransformBuilder::new()
        .opacity(animated(vec![keyframe(0.0, 0.0), keyframe(15.0, 100.0)]))
        .build();
    let doc = document(vec![layer("Line", 120.0, ks, (20.0, 35.0))]);

    let report = audit(&doc).expect("valid timing");
    assert_eq!(report.layers, 1);
    assert_eq!(report.tracks.len(), 3);
    assert_eq!(report.track("Line/ks.o").unwrap().times, vec![0.0, 15.0]);
    assert_eq!(report.track("Line/Line/tm0.s").unwrap().times, vec![20.0, 20.0, 35.0]);
    assert_eq!(report.track("Line/Line/tm0.e").unwrap().times, vec![20.0, 20.0, 35.0]);
}

#[test]
fn rejects_layers_that_do_not_span_the_composition() {
    let doc = document(vec![layer("Short", 90.0, TransformBuilder::new().build(), (0.0, 10.0))]);
    assert_eq!(
        audit(&doc),
        Err(AuditError::LayerRange {
            layer: "Short".to_string(),
            ip: 0.0,
            op: 90.0,
            expected: 120.0,
        })
    );
}

#[test]
fn rejects_keyframes_out_of_order() {
    let ks = TransformBuilder::new()
        .rotation(animated(vec![keyframe(30.0, 0.0), keyframe(10.0, 90.0)]))
        .build();
    let doc = document(vec![layer("Spin", 120.0, ks, (0.0, 10.0))]);

    let err = audit(&doc).unwrap_err();
    assert_eq!(
        err,
        AuditError::Unordered {
            track: "Spin/ks.r".to_string(),
            previous: 30.0,
            next: 10.0,
        }
    );
    assert!(err.to_string().contains("goes back in time"));
}

#[test]
fn rejects_tracks_past_the_out_point() {
    let doc = document(vec![layer("Late", 120.0, TransformBuilder::new().build(), (100.0, 130.0))]);
    let Err(AuditError::PastEnd { track, last, op }) = audit(&doc) else {
        panic!("expected a past-end error");
    };
    assert_eq!(track, "Late/Late/tm0.s");
    assert_eq!(last, 130.0);
    assert_eq!(op, 120.0);
}

#[test]
fn checks_frame_count_against_duration() {
    let doc = document(Vec::new());
    assert!(audit_with_duration(&doc, 2.0).is_ok());

    let err = audit_with_duration(&doc, 1.5).unwrap_err();
    assert_eq!(
        err,
        AuditError::FrameCount {
            op: 120.0,
            fps: 60.0,
            duration: 1.5,
            expected: 90.0,
        }
    );
}
