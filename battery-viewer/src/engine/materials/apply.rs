use std::collections::HashMap;

use bevy::gltf::GltfMaterialName;
use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;

use super::descriptor::{MaterialDescriptor, TextureMaps, TextureWrap};
use super::normalizer::{MaterialRole, patch_material, retile_body_maps};
use crate::engine::loading::model_loader::BatteryModel;
use crate::engine::loading::progress::LoadingProgress;

/// Marks a mesh whose material has already been rewritten.
#[derive(Component)]
pub struct MaterialNormalized;

/// Rewrite the material of every mesh under the battery model, once, after
/// the scene has been instantiated.
///
/// Shared source materials are cloned at most once per role, so a material
/// used by both a logo and a plain mesh ends up as two assets.
pub fn normalize_model_materials(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    models: Query<Entity, With<BatteryModel>>,
    children: Query<&Children>,
    meshes: Query<
        (
            &MeshMaterial3d<StandardMaterial>,
            Option<&Name>,
            Option<&GltfMaterialName>,
            Option<&ChildOf>,
        ),
        Without<MaterialNormalized>,
    >,
    names: Query<&Name>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    if !loading_progress.scene_ready || loading_progress.materials_normalized {
        return;
    }

    let mut patched: HashMap<(AssetId<StandardMaterial>, MaterialRole), Handle<StandardMaterial>> =
        HashMap::new();
    let mut mesh_count = 0;

    for model in &models {
        for entity in children.iter_descendants(model) {
            let Ok((material_handle, name, material_name, child_of)) = meshes.get(entity) else {
                continue;
            };
            // Mesh without a loaded material: nothing to patch.
            let Some(source) = materials.get(&material_handle.0).cloned() else {
                continue;
            };

            let parent_name = child_of.and_then(|child_of| names.get(child_of.parent()).ok());
            let mesh_name = mesh_name(name, parent_name);
            let descriptor =
                MaterialDescriptor::from_standard(material_name.map(|n| n.0.clone()), &source);
            let role = MaterialRole::classify(&descriptor, &mesh_name);

            let handle = patched
                .entry((material_handle.id(), role))
                .or_insert_with(|| {
                    // Body materials are replaced outright; only the source's
                    // own textures are retiled.
                    let base = match role {
                        MaterialRole::Body => {
                            set_repeat_addressing(&retile_body_maps(&descriptor), &mut images);
                            StandardMaterial::default()
                        }
                        MaterialRole::Logo | MaterialRole::Plain => source,
                    };
                    let descriptor = patch_material(descriptor, &mesh_name);
                    debug!("Patched {:?} material '{}' on '{}'", role, descriptor.name(), mesh_name);
                    materials.add(descriptor.to_standard(base))
                })
                .clone();

            commands
                .entity(entity)
                .insert((MeshMaterial3d(handle), MaterialNormalized));
            mesh_count += 1;
        }
    }

    info!(
        "✓ Normalised {} meshes using {} materials",
        mesh_count,
        patched.len()
    );
    loading_progress.materials_normalized = true;
}

/// glTF puts the node name on the parent and a primitive name on the mesh
/// entity; the node name is what artists set.
fn mesh_name(own: Option<&Name>, parent: Option<&Name>) -> String {
    parent
        .or(own)
        .map(|name| name.as_str().to_string())
        .unwrap_or_default()
}

/// Switch every retiled map's sampler to repeat addressing, keeping its
/// filtering.
fn set_repeat_addressing(maps: &TextureMaps, images: &mut Assets<Image>) {
    for map in maps.iter() {
        if map.wrap != TextureWrap::Repeat {
            continue;
        }
        let Some(image) = images.get_mut(&map.image) else {
            continue;
        };

        let mut sampler = match &image.sampler {
            ImageSampler::Descriptor(existing) => existing.clone(),
            ImageSampler::Default => ImageSamplerDescriptor::linear(),
        };
        sampler.address_mode_u = ImageAddressMode::Repeat;
        sampler.address_mode_v = ImageAddressMode::Repeat;
        image.sampler = ImageSampler::Descriptor(sampler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_name_preferred_over_primitive_name() {
        let own = Name::new("LOGO_LEFT.0");
        let parent = Name::new("LOGO_LEFT");
        assert_eq!(mesh_name(Some(&own), Some(&parent)), "LOGO_LEFT");
        assert_eq!(mesh_name(Some(&own), None), "LOGO_LEFT.0");
        assert_eq!(mesh_name(None, None), "");
    }

    fn image_with_sampler(sampler: ImageSampler) -> Image {
        Image {
            sampler,
            ..default()
        }
    }

    #[test]
    fn retiled_maps_get_repeat_sampler() {
        use super::super::descriptor::TextureMap;

        let mut images = Assets::<Image>::default();
        let nearest = images.add(image_with_sampler(ImageSampler::nearest()));
        let untouched = images.add(image_with_sampler(ImageSampler::Default));

        let maps = TextureMaps {
            base_color: Some(TextureMap::new(nearest.clone()).retiled(5.0)),
            occlusion: Some(TextureMap::new(untouched.clone())),
            ..default()
        };
        set_repeat_addressing(&maps, &mut images);

        let ImageSampler::Descriptor(sampler) = &images.get(&nearest).unwrap().sampler else {
            panic!("expected explicit sampler");
        };
        assert!(matches!(sampler.address_mode_u, ImageAddressMode::Repeat));
        assert!(matches!(sampler.address_mode_v, ImageAddressMode::Repeat));
        assert!(matches!(
            sampler.mag_filter,
            bevy::image::ImageFilterMode::Nearest
        ));

        assert!(matches!(
            images.get(&untouched).unwrap().sampler,
            ImageSampler::Default
        ));
    }
}
