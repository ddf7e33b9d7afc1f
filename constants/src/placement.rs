/// Scale tiers keyed on the smallest visible dimension, as `(upper_bound, factor)`.
/// Bounds are exclusive: a dimension equal to a bound falls into the next tier.
pub const SCALE_TIERS: &[(f32, f32)] = &[(3.0, 0.10), (6.0, 0.13), (10.0, 0.16)];

/// Factor applied when the smallest dimension clears every tier.
pub const SCALE_FALLBACK_FACTOR: f32 = 0.20;

/// Absolute cap on the uniform model scale.
pub const MAX_MODEL_SCALE: f32 = 2.0;

/// Vertical anchor before the scale-dependent drop is applied.
pub const BASE_Y_OFFSET: f32 = -0.5;

/// Extra downward shift per unit of scale.
pub const SCALE_Y_DROP: f32 = 0.8;
