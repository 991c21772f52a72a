//! Timing checks over a finished document.
//!
//! Every layer must span the whole composition, and every animated property
//! must keep its keyframes in time order and finish by the out point.

use lottie_data::model::{LottieJson, Property, Shape, Transform};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuditError {
    #[error("layer `{layer}` is active over [{ip}, {op}] instead of [0, {expected}]")]
    LayerRange {
        layer: String,
        ip: f32,
        op: f32,
        expected: f32,
    },
    #[error("track `{track}` goes back in time: keyframe at {next} follows {previous}")]
    Unordered {
        track: String,
        previous: f32,
        next: f32,
    },
    #[error("track `{track}` ends at frame {last}, after the out point {op}")]
    PastEnd { track: String, last: f32, op: f32 },
    #[error("out point {op} does not match {fps} fps over {duration}s ({expected} frames)")]
    FrameCount {
        op: f32,
        fps: f32,
        duration: f32,
        expected: f32,
    },
}

/// Keyframe times of one animated property, addressed as
/// `<layer>/<group>/<item>.<property>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub path: String,
    pub times: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditReport {
    pub layers: usize,
    pub tracks: Vec<Track>,
}

impl AuditReport {
    pub fn track(&self, path: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.path == path)
    }
}

pub fn audit(doc: &LottieJson) -> Result<AuditReport, AuditError> {
    for (index, layer) in doc.layers.iter().enumerate() {
        if layer.ip != 0.0 || layer.op != doc.op {
            return Err(AuditError::LayerRange {
                layer: layer_name(layer.nm.as_deref(), index),
                ip: layer.ip,
                op: layer.op,
                expected: doc.op,
            });
        }
    }

    let tracks = collect_tracks(doc);
    for track in &tracks {
        for pair in track.times.windows(2) {
            if pair[1] < pair[0] {
                return Err(AuditError::Unordered {
                    track: track.path.clone(),
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }
        if let Some(&last) = track.times.last() {
            if last > doc.op {
                return Err(AuditError::PastEnd {
                    track: track.path.clone(),
                    last,
                    op: doc.op,
                });
            }
        }
    }

    tracing::debug!(
        layers = doc.layers.len(),
        tracks = tracks.len(),
        "timing audit passed"
    );

    Ok(AuditReport {
        layers: doc.layers.len(),
        tracks,
    })
}

/// [`audit`], plus a check that the out point equals the frame count of
/// `duration` seconds at the document frame rate.
pub fn audit_with_duration(doc: &LottieJson, duration: f32) -> Result<AuditReport, AuditError> {
    let expected = (doc.fr * duration).round();
    if doc.op != expected {
        return Err(AuditError::FrameCount {
            op: doc.op,
            fps: doc.fr,
            duration,
            expected,
        });
    }
    audit(doc)
}

pub fn collect_tracks(doc: &LottieJson) -> Vec<Track> {
    let mut tracks = Vec::new();
    for (index, layer) in doc.layers.iter().enumerate() {
        let root = layer_name(layer.nm.as_deref(), index);
        push_transform(&mut tracks, &format!("{root}/ks"), &layer.ks);
        push_shapes(&mut tracks, &root, &layer.shapes);
    }
    tracks
}

fn layer_name(nm: Option<&str>, index: usize) -> String {
    nm.map(str::to_string)
        .unwrap_or_else(|| format!("layer {index}"))
}

fn push_shapes(tracks: &mut Vec<Track>, prefix: &str, shapes: &[Shape]) {
    for (index, shape) in shapes.iter().enumerate() {
        let here = format!("{prefix}/{}{index}", shape.tag());
        match shape {
            Shape::Group(g) => {
                let name = g
                    .nm
                    .as_deref()
                    .map(|nm| format!("{prefix}/{nm}"))
                    .unwrap_or(here);
                push_shapes(tracks, &name, &g.it);
            }
            Shape::Rect(r) => {
                push(tracks, &here, "p", &r.p);
                push(tracks, &here, "s", &r.s);
                push(tracks, &here, "r", &r.r);
            }
            Shape::Ellipse(e) => {
                push(tracks, &here, "p", &e.p);
                push(tracks, &here, "s", &e.s);
            }
            Shape::Fill(f) => {
                push(tracks, &here, "c", &f.c);
                push(tracks, &here, "o", &f.o);
            }
            Shape::Stroke(s) => {
                push(tracks, &here, "c", &s.c);
                push(tracks, &here, "o", &s.o);
                push(tracks, &here, "w", &s.w);
            }
            Shape::Path(p) => push(tracks, &here, "ks", &p.ks),
            Shape::Trim(t) => {
                push(tracks, &here, "s", &t.s);
                push(tracks, &here, "e", &t.e);
                push(tracks, &here, "o", &t.o);
            }
            Shape::Transform(t) => push_transform(tracks, &here, t),
        }
    }
}

fn push_transform(tracks: &mut Vec<Track>, prefix: &str, t: &Transform) {
    push(tracks, prefix, "a", &t.a);
    push(tracks, prefix, "p", &t.p);
    push(tracks, prefix, "s", &t.s);
    push(tracks, prefix, "r", &t.r);
    push(tracks, prefix, "o", &t.o);
}

fn push<T>(tracks: &mut Vec<Track>, prefix: &str, name: &str, prop: &Property<T>) {
    if prop.is_animated() {
        tracks.push(Track {
            path: format!("{prefix}.{name}"),
            times: prop.keyframes().iter().map(|kf| kf.t).collect(),
        });
    }
}
