use bevy::prelude::*;
use constants::material::{
    BODY_COLOUR_HEX, BODY_MATERIAL_NAMES, BODY_METALNESS, BODY_ROUGHNESS, BODY_TEXTURE_REPEAT,
    LOGO_COLOUR_HEX, LOGO_EMISSIVE_HEX, LOGO_MATERIAL_NAMES, LOGO_MESH_NAMES, LOGO_METALNESS,
    LOGO_NAME_FRAGMENT, LOGO_ROUGHNESS,
};

use super::descriptor::{
    MaterialDescriptor, MeshDescriptor, Side, TextureMap, TextureMaps, srgb_hex,
};

/// What a material is rewritten into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialRole {
    /// Swapped for the matte body finish.
    Body,
    /// Forced to flat white with an emissive lift.
    Logo,
    /// Only the opacity/depth/side fixes.
    Plain,
}

impl MaterialRole {
    /// Body names win over logo names when both match.
    pub fn classify(material: &MaterialDescriptor, mesh_name: &str) -> Self {
        let material_name = material.name();

        if BODY_MATERIAL_NAMES.contains(&material_name) {
            MaterialRole::Body
        } else if LOGO_MATERIAL_NAMES.contains(&material_name) || is_logo_mesh(mesh_name) {
            MaterialRole::Logo
        } else {
            MaterialRole::Plain
        }
    }
}

fn is_logo_mesh(mesh_name: &str) -> bool {
    LOGO_MESH_NAMES.contains(&mesh_name)
        || mesh_name.to_lowercase().contains(LOGO_NAME_FRAGMENT)
}

/// Opaque, depth tested and written, both faces drawn.
fn force_opaque(mut material: MaterialDescriptor) -> MaterialDescriptor {
    material.opacity = 1.0;
    material.transparent = false;
    material.alpha_test = 0.0;
    material.depth_write = true;
    material.depth_test = true;
    material.side = Side::Double;
    material
}

/// Fresh matte body material with no texture maps; nothing from the source
/// survives except its name.
fn body_finish(source: &MaterialDescriptor) -> MaterialDescriptor {
    force_opaque(MaterialDescriptor {
        name: source.name.clone(),
        base_color: srgb_hex(BODY_COLOUR_HEX),
        emissive: LinearRgba::BLACK,
        metalness: BODY_METALNESS,
        roughness: BODY_ROUGHNESS,
        maps: TextureMaps::default(),
        ..default()
    })
}

/// The source body's colour, normal and roughness maps at five times the
/// tiling density with repeat addressing. Only the source textures are
/// retiled; the replacement from [`patch_material`] does not use them.
pub fn retile_body_maps(source: &MaterialDescriptor) -> TextureMaps {
    let retile = |map: &Option<TextureMap>| map.as_ref().map(|m| m.retiled(BODY_TEXTURE_REPEAT));

    TextureMaps {
        base_color: retile(&source.maps.base_color),
        normal: retile(&source.maps.normal),
        roughness: retile(&source.maps.roughness),
        ..default()
    }
}

/// White logo surface with every texture map removed, so nothing tinted
/// shows through.
fn logo_finish(mut material: MaterialDescriptor) -> MaterialDescriptor {
    material.base_color = srgb_hex(LOGO_COLOUR_HEX);
    material.emissive = srgb_hex(LOGO_EMISSIVE_HEX).into();
    material.metalness = LOGO_METALNESS;
    material.roughness = LOGO_ROUGHNESS;
    material.maps = TextureMaps::default();
    force_opaque(material)
}

/// Patch one material belonging to the mesh called `mesh_name`.
pub fn patch_material(material: MaterialDescriptor, mesh_name: &str) -> MaterialDescriptor {
    match MaterialRole::classify(&material, mesh_name) {
        MaterialRole::Body => body_finish(&material),
        MaterialRole::Logo => logo_finish(material),
        MaterialRole::Plain => force_opaque(material),
    }
}

/// Patch every material of every mesh. Meshes without materials pass
/// through untouched.
pub fn patch_materials(meshes: Vec<MeshDescriptor>) -> Vec<MeshDescriptor> {
    meshes
        .into_iter()
        .map(|mesh| {
            let materials = mesh
                .materials
                .into_iter()
                .map(|material| patch_material(material, &mesh.name))
                .collect();
            MeshDescriptor {
                name: mesh.name,
                materials,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::descriptor::TextureWrap;
    use super::*;

    fn image(id: u128) -> Handle<Image> {
        Handle::weak_from_u128(id)
    }

    fn translucent(name: &str) -> MaterialDescriptor {
        MaterialDescriptor {
            name: Some(name.to_string()),
            base_color: Color::srgb(0.2, 0.4, 0.9),
            opacity: 0.3,
            transparent: true,
            alpha_test: 0.5,
            depth_write: false,
            depth_test: false,
            side: Side::Front,
            ..default()
        }
    }

    fn fully_textured(name: &str) -> MaterialDescriptor {
        MaterialDescriptor {
            maps: TextureMaps {
                base_color: Some(TextureMap::new(image(1))),
                emissive: Some(TextureMap::new(image(2))),
                normal: Some(TextureMap::new(image(3))),
                roughness: Some(TextureMap::new(image(4))),
                metalness: Some(TextureMap::new(image(4))),
                occlusion: Some(TextureMap::new(image(5))),
            },
            ..translucent(name)
        }
    }

    fn assert_opaque_double_sided(material: &MaterialDescriptor) {
        assert_eq!(material.opacity, 1.0);
        assert!(!material.transparent);
        assert_eq!(material.alpha_test, 0.0);
        assert!(material.depth_write);
        assert!(material.depth_test);
        assert_eq!(material.side, Side::Double);
    }

    #[test]
    fn plain_materials_only_lose_transparency() {
        let patched = patch_material(fully_textured("Terminal"), "Cap");

        assert_opaque_double_sided(&patched);
        assert_eq!(patched.base_color, Color::srgb(0.2, 0.4, 0.9));
        assert_eq!(patched.maps, fully_textured("Terminal").maps);
    }

    #[test]
    fn every_body_name_gets_matte_finish() {
        for name in ["BATTERY BODY", "Material.005", "Material.006"] {
            let patched = patch_material(fully_textured(name), "Body");

            assert_eq!(MaterialRole::classify(&patched, "Body"), MaterialRole::Body);
            assert_opaque_double_sided(&patched);
            assert_eq!(patched.base_color, srgb_hex(0x100f0f));
            assert_eq!(patched.metalness, 0.0);
            assert_eq!(patched.roughness, 0.8);
            assert_eq!(patched.emissive, LinearRgba::BLACK);
        }
    }

    #[test]
    fn body_replacement_carries_no_maps() {
        let patched = patch_material(fully_textured("BATTERY BODY"), "Body");
        assert!(patched.maps.is_empty());

        let material = patched.to_standard(StandardMaterial::default());
        assert!(material.base_color_texture.is_none());
        assert!(material.normal_map_texture.is_none());
        assert!(material.metallic_roughness_texture.is_none());
    }

    #[test]
    fn source_body_maps_tile_five_times_with_repeat() {
        let maps = retile_body_maps(&fully_textured("BATTERY BODY"));

        for map in [&maps.base_color, &maps.normal, &maps.roughness] {
            let map = map.as_ref().unwrap();
            assert_eq!(map.repeat, Vec2::splat(5.0));
            assert_eq!(map.wrap, TextureWrap::Repeat);
        }
        assert_eq!(maps.base_color.as_ref().unwrap().image, image(1));
        assert!(maps.emissive.is_none());
        assert!(maps.metalness.is_none());
        assert!(maps.occlusion.is_none());
    }

    #[test]
    fn logo_material_name_is_whitened() {
        let patched = patch_material(fully_textured("Logo"), "Sticker");

        assert_opaque_double_sided(&patched);
        assert_eq!(patched.base_color.to_srgba(), Srgba::WHITE);
        assert_eq!(patched.emissive, LinearRgba::from(srgb_hex(0xaaaaaa)));
        assert_eq!(patched.metalness, 0.0);
        assert_eq!(patched.roughness, 0.3);
        assert!(patched.maps.is_empty());
    }

    #[test]
    fn logo_mesh_names_match() {
        let material = fully_textured("Paint");
        for mesh in ["LOGO_LEFT", "LOGO_RIGHT", "front_logo", "BrandLogo", "LOGO_TOP"] {
            assert_eq!(MaterialRole::classify(&material, mesh), MaterialRole::Logo);
        }
        for mesh in ["Body", "Terminal", "lo_go"] {
            assert_eq!(MaterialRole::classify(&material, mesh), MaterialRole::Plain);
        }
    }

    #[test]
    fn body_name_beats_logo_mesh() {
        let material = fully_textured("BATTERY BODY");
        assert_eq!(MaterialRole::classify(&material, "LOGO_LEFT"), MaterialRole::Body);
    }

    #[test]
    fn unnamed_material_on_plain_mesh_is_plain() {
        let material = MaterialDescriptor::default();
        assert_eq!(MaterialRole::classify(&material, ""), MaterialRole::Plain);
    }

    #[test]
    fn patch_materials_walks_every_material() {
        let meshes = vec![
            MeshDescriptor {
                name: "Body".into(),
                materials: vec![translucent("BATTERY BODY"), translucent("Terminal")],
            },
            MeshDescriptor {
                name: "LOGO_RIGHT".into(),
                materials: vec![translucent("Paint")],
            },
            MeshDescriptor {
                name: "Empty".into(),
                materials: vec![],
            },
        ];

        let patched = patch_materials(meshes);

        assert_eq!(patched.len(), 3);
        assert_eq!(patched[0].materials[0].base_color, srgb_hex(0x100f0f));
        assert_eq!(patched[0].materials[1].base_color, Color::srgb(0.2, 0.4, 0.9));
        assert_eq!(patched[1].materials[0].roughness, 0.3);
        assert!(patched[2].materials.is_empty());
        for material in patched.iter().flat_map(|mesh| &mesh.materials) {
            assert_opaque_double_sided(material);
        }
    }

    #[test]
    fn patching_twice_changes_nothing() {
        let meshes = vec![
            MeshDescriptor {
                name: "Body".into(),
                materials: vec![fully_textured("Material.005"), fully_textured("Cap")],
            },
            MeshDescriptor {
                name: "LOGO_LEFT".into(),
                materials: vec![fully_textured("Logo")],
            },
        ];

        let once = patch_materials(meshes);
        let twice = patch_materials(once.clone());
        assert_eq!(once, twice);
    }
}
