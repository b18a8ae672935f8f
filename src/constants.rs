//! Constants used throughout the application

/// Number of landmarks emitted per face when iris refinement is enabled
pub const FACE_LANDMARK_COUNT: usize = 478;

/// Landmark index of the left iris center
pub const LEFT_IRIS_CENTER: usize = 468;

/// Landmark index of the right iris center
pub const RIGHT_IRIS_CENTER: usize = 473;

/// Landmark index of the nose tip
pub const NOSE_TIP: usize = 1;

/// Landmark index of the left temple
pub const LEFT_TEMPLE: usize = 234;

/// Landmark index of the right temple
pub const RIGHT_TEMPLE: usize = 454;

/// Landmark index of the top of the forehead
pub const FOREHEAD_TOP: usize = 10;

/// Landmark index of the chin
pub const CHIN: usize = 152;

/// Landmark indices that must be present for a usable observation
pub const REQUIRED_LANDMARKS: [usize; 7] = [
    LEFT_IRIS_CENTER,
    RIGHT_IRIS_CENTER,
    NOSE_TIP,
    LEFT_TEMPLE,
    RIGHT_TEMPLE,
    FOREHEAD_TOP,
    CHIN,
];

/// Default vertical field of view in degrees
pub const DEFAULT_FOV_Y_DEGREES: f64 = 75.0;

/// Default camera aspect ratio (width / height)
pub const DEFAULT_ASPECT: f64 = 16.0 / 9.0;

/// Fixed reference depth matching the scene's static camera distance
pub const DEFAULT_REFERENCE_DEPTH: f64 = 5.0;

/// Default detection confidence threshold
pub const DEFAULT_DETECTION_CONFIDENCE: f32 = 0.5;

/// Default tracking confidence threshold
pub const DEFAULT_TRACKING_CONFIDENCE: f32 = 0.5;

/// Default maximum number of tracked faces
pub const DEFAULT_MAX_FACES: usize = 1;

/// Default smoothing alpha for the exponential position filter
pub const DEFAULT_SMOOTHING_ALPHA: f64 = 0.5;

/// Default headless frame width in pixels
pub const DEFAULT_FRAME_WIDTH: u32 = 1280;

/// Default headless frame height in pixels
pub const DEFAULT_FRAME_HEIGHT: u32 = 720;

/// Squared-length threshold below which a basis vector is degenerate
pub const DEGENERACY_EPSILON: f64 = 1e-10;
