/// Radians of yaw per unit of horizontal pointer deflection.
pub const HOVER_YAW_GAIN: f32 = 0.2;

/// Radians of pitch per unit of vertical pointer deflection.
pub const HOVER_PITCH_GAIN: f32 = -0.15;

/// Fraction of the remaining distance covered each frame while following.
pub const HOVER_EASING: f32 = 0.03;

/// Radians of rotation per pixel dragged.
pub const DRAG_RADIANS_PER_PIXEL: f32 = 0.003;

/// Height of the visual rotation anchor above the model origin.
pub const PIVOT_OFFSET: f32 = 1.5;
