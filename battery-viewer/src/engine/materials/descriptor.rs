use bevy::math::Affine2;
use bevy::prelude::*;
use bevy::render::render_resource::Face;

/// Which faces of a polygon are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

/// Addressing for a texture map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureWrap {
    /// Whatever sampler the asset shipped with.
    #[default]
    Source,
    Repeat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextureMap {
    pub image: Handle<Image>,
    pub repeat: Vec2,
    pub wrap: TextureWrap,
}

impl TextureMap {
    pub fn new(image: Handle<Image>) -> Self {
        Self {
            image,
            repeat: Vec2::ONE,
            wrap: TextureWrap::Source,
        }
    }

    /// Tile `factor` times per UV unit with repeat addressing. Sets rather
    /// than multiplies, so applying twice gives the same map.
    pub fn retiled(&self, factor: f32) -> Self {
        Self {
            image: self.image.clone(),
            repeat: Vec2::splat(factor),
            wrap: TextureWrap::Repeat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextureMaps {
    pub base_color: Option<TextureMap>,
    pub emissive: Option<TextureMap>,
    pub normal: Option<TextureMap>,
    pub roughness: Option<TextureMap>,
    pub metalness: Option<TextureMap>,
    pub occlusion: Option<TextureMap>,
}

impl TextureMaps {
    pub fn iter(&self) -> impl Iterator<Item = &TextureMap> {
        [
            &self.base_color,
            &self.emissive,
            &self.normal,
            &self.roughness,
            &self.metalness,
            &self.occlusion,
        ]
        .into_iter()
        .flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Engine-independent view of a surface material.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDescriptor {
    pub name: Option<String>,
    pub base_color: Color,
    pub emissive: LinearRgba,
    pub metalness: f32,
    pub roughness: f32,
    pub opacity: f32,
    pub transparent: bool,
    /// Alpha cutoff; zero disables alpha testing.
    pub alpha_test: f32,
    pub depth_write: bool,
    pub depth_test: bool,
    pub side: Side,
    pub maps: TextureMaps,
}

impl Default for MaterialDescriptor {
    fn default() -> Self {
        Self {
            name: None,
            base_color: Color::WHITE,
            emissive: LinearRgba::BLACK,
            metalness: 0.0,
            roughness: 0.5,
            opacity: 1.0,
            transparent: false,
            alpha_test: 0.0,
            depth_write: true,
            depth_test: true,
            side: Side::Front,
            maps: TextureMaps::default(),
        }
    }
}

/// A mesh and the materials its primitives use.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshDescriptor {
    pub name: String,
    pub materials: Vec<MaterialDescriptor>,
}

impl MaterialDescriptor {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Read a Bevy material. Depth state follows the alpha mode, since Bevy
    /// derives depth writes from it.
    pub fn from_standard(name: Option<String>, material: &StandardMaterial) -> Self {
        let transparent = !matches!(material.alpha_mode, AlphaMode::Opaque | AlphaMode::Mask(_));
        let alpha_test = match material.alpha_mode {
            AlphaMode::Mask(cutoff) => cutoff,
            _ => 0.0,
        };
        let side = match material.cull_mode {
            None => Side::Double,
            Some(Face::Front) => Side::Back,
            Some(Face::Back) => Side::Front,
        };
        let repeat = Vec2::new(
            material.uv_transform.matrix2.x_axis.x,
            material.uv_transform.matrix2.y_axis.y,
        );
        let map = |texture: &Option<Handle<Image>>| {
            texture.clone().map(|image| TextureMap {
                repeat,
                ..TextureMap::new(image)
            })
        };

        Self {
            name,
            base_color: material.base_color.with_alpha(1.0),
            emissive: material.emissive,
            metalness: material.metallic,
            roughness: material.perceptual_roughness,
            opacity: material.base_color.alpha(),
            transparent,
            alpha_test,
            depth_write: !transparent,
            depth_test: true,
            side,
            maps: TextureMaps {
                base_color: map(&material.base_color_texture),
                emissive: map(&material.emissive_texture),
                normal: map(&material.normal_map_texture),
                roughness: map(&material.metallic_roughness_texture),
                metalness: map(&material.metallic_roughness_texture),
                occlusion: map(&material.occlusion_texture),
            },
        }
    }

    /// Write this descriptor over `base`. Properties the descriptor does not
    /// model (clearcoat, transmission, ...) are kept from `base`.
    pub fn to_standard(&self, base: StandardMaterial) -> StandardMaterial {
        let alpha_mode = if self.transparent {
            AlphaMode::Blend
        } else if self.alpha_test > 0.0 {
            AlphaMode::Mask(self.alpha_test)
        } else {
            AlphaMode::Opaque
        };
        let (double_sided, cull_mode) = match self.side {
            Side::Front => (false, Some(Face::Back)),
            Side::Back => (false, Some(Face::Front)),
            Side::Double => (true, None),
        };
        let image = |map: &Option<TextureMap>| map.as_ref().map(|m| m.image.clone());

        let mut material = StandardMaterial {
            base_color: self.base_color.with_alpha(self.opacity),
            emissive: self.emissive,
            metallic: self.metalness,
            perceptual_roughness: self.roughness,
            alpha_mode,
            double_sided,
            cull_mode,
            base_color_texture: image(&self.maps.base_color),
            emissive_texture: image(&self.maps.emissive),
            normal_map_texture: image(&self.maps.normal),
            metallic_roughness_texture: image(&self.maps.roughness)
                .or_else(|| image(&self.maps.metalness)),
            occlusion_texture: image(&self.maps.occlusion),
            ..base
        };

        // Only retiled maps own the UV transform; anything else keeps the
        // source's offset and rotation.
        if let Some(repeat) = self
            .maps
            .iter()
            .find(|m| m.wrap == TextureWrap::Repeat)
            .map(|m| m.repeat)
        {
            material.uv_transform = Affine2::from_scale(repeat);
        }

        material
    }
}

/// sRGB colour from a `0xRRGGBB` literal.
pub fn srgb_hex(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}
