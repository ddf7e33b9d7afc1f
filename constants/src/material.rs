/// Material names that get swapped for the matte body finish.
pub const BODY_MATERIAL_NAMES: &[&str] = &["BATTERY BODY", "Material.005", "Material.006"];

/// Material names that are always treated as logo surfaces.
pub const LOGO_MATERIAL_NAMES: &[&str] = &["Logo"];

/// Mesh names that are always treated as logo surfaces.
pub const LOGO_MESH_NAMES: &[&str] = &["LOGO_LEFT", "LOGO_RIGHT"];

/// Case-insensitive fragment that marks a mesh as a logo.
pub const LOGO_NAME_FRAGMENT: &str = "logo";

/// Body finish, sRGB hex.
pub const BODY_COLOUR_HEX: u32 = 0x100f0f;
pub const BODY_METALNESS: f32 = 0.0;
pub const BODY_ROUGHNESS: f32 = 0.8;

/// Texture repeat applied to maps carried onto the body finish.
pub const BODY_TEXTURE_REPEAT: f32 = 5.0;

/// Logo finish, sRGB hex.
pub const LOGO_COLOUR_HEX: u32 = 0xffffff;
pub const LOGO_EMISSIVE_HEX: u32 = 0xaaaaaa;
pub const LOGO_METALNESS: f32 = 0.0;
pub const LOGO_ROUGHNESS: f32 = 0.3;
