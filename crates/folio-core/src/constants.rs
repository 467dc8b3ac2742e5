use crate::motion::BlobDrift;
use glam::Vec2;

// Shared layout/motion tuning constants used by the web frontend.

// Scroll tracking
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0; // highlight switches slightly before a section tops out
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.85; // how far into the viewport an element must be to reveal

// Cursor follower spring
pub const FOLLOWER_STIFFNESS: f32 = 100.0;
pub const FOLLOWER_DAMPING: f32 = 10.0;
pub const FOLLOWER_MASS: f32 = 0.1;
pub const FOLLOWER_SIZE_PX: f32 = 32.0; // rendered diameter; transforms are offset by half of this
pub const FOLLOWER_PRESSED_SCALE: f32 = 1.5; // swell while a pointer button is held
pub const FOLLOWER_SCALE_TAU_SEC: f32 = 0.08; // smoothing time constant for the swell

// Frame stepping
pub const FRAME_DT_MAX_SEC: f32 = 0.05; // clamp deltas after tab switches so the spring stays stable
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0; // integration grain; the follower spring is stiff

// Background blob drift paths (closed loops, linear ease)
pub const BLOB_DRIFTS: [BlobDrift; 3] = [
    BlobDrift {
        amplitude: Vec2::new(100.0, -100.0),
        period_secs: 20.0,
    },
    BlobDrift {
        amplitude: Vec2::new(-100.0, 100.0),
        period_secs: 25.0,
    },
    BlobDrift {
        amplitude: Vec2::new(50.0, -50.0),
        period_secs: 15.0,
    },
];

// Reveal-on-scroll stagger
pub const STAGGER_STEP_SEC: f32 = 0.1;
