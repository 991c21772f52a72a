use glam::Vec4;

/// Where the Android app picks the animation up, relative to `scripts/`.
pub const DEFAULT_OUTPUT: &str = "../assets/splash_animation.json";

/// Lottie format version the document claims to follow.
pub const LOTTIE_VERSION: &str = "5.7.4";

// Colors as normalized RGBA
pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
pub const GRAY_LINE: Vec4 = Vec4::new(0.878, 0.878, 0.878, 1.0); // #E0E0E0
pub const GREEN: Vec4 = Vec4::new(0.133, 0.773, 0.369, 1.0); // #22C55E

/// Composition-wide settings of the splash animation.
#[derive(Debug, Clone, PartialEq)]
pub struct SplashConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: f32,
    pub duration_seconds: f32,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            title: "ReceiptKeeper Splash".to_string(),
            width: 200,
            height: 200,
            fps: 60.0,
            duration_seconds: 2.0,
        }
    }
}

impl SplashConfig {
    /// Out point of the composition and of every layer.
    pub fn total_frames(&self) -> f32 {
        (self.fps * self.duration_seconds).round()
    }
}

/// One receipt text line drawn in by a trim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpec {
    pub name: &'static str,
    pub y: f32,
    /// x coordinate where the line ends; every line starts at [`LINE_LEFT`].
    pub extent: f32,
    pub delay: f32,
}

pub const LINE_LEFT: f32 = 55.0;

/// Frames a line takes to draw in after its delay.
pub const LINE_DRAW_FRAMES: f32 = 15.0;

/// Receipt lines in layer order (latest first).
pub const LINES: [LineSpec; 4] = [
    LineSpec {
        name: "Line 4",
        y: 110.0,
        extent: 120.0,
        delay: 35.0,
    },
    LineSpec {
        name: "Line 3",
        y: 90.0,
        extent: 140.0,
        delay: 30.0,
    },
    LineSpec {
        name: "Line 2",
        y: 70.0,
        extent: 130.0,
        delay: 25.0,
    },
    LineSpec {
        name: "Line 1",
        y: 50.0,
        extent: 145.0,
        delay: 20.0,
    },
];
