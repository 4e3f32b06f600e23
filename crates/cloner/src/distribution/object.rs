//! Distribution over another object's vertices or face centroids.
use glam::Vec3;

use crate::config::{ObjectConfig, ObjectTarget};
use crate::distribution::finite_or;
use crate::geometry::SourceMesh;
use crate::instance::BaseInstance;
use crate::math::euler_from_direction;

pub fn resolve(config: &ObjectConfig, source: Option<&SourceMesh>) -> Vec<BaseInstance> {
    let Some(mesh) = source else {
        tracing::warn!("object cloner has no resolved source mesh; producing no instances");
        return Vec::new();
    };

    let scale = finite_or(config.scale, 1.0, "object scale");

    let count = match config.target {
        ObjectTarget::Vertices => mesh.vertex_count(),
        ObjectTarget::Faces => mesh.face_count(),
    };

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let (position, normal) = match config.target {
            ObjectTarget::Vertices => (mesh.positions()[i], mesh.vertex_normal(i)),
            ObjectTarget::Faces => (mesh.face_centroid(i), mesh.face_normal(i)),
        };

        let mut instance = BaseInstance::at(i as u32, position);
        instance.scale = Vec3::splat(scale);
        if config.align_to_normal {
            instance.rotation = euler_from_direction(normal);
        }
        out.push(instance);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> SourceMesh {
        SourceMesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
    }

    #[test]
    fn missing_source_is_a_no_op() {
        assert!(resolve(&ObjectConfig::default(), None).is_empty());
    }

    #[test]
    fn vertex_mode_places_one_instance_per_vertex() {
        let mesh = quad();
        let out = resolve(&ObjectConfig::default(), Some(&mesh));
        assert_eq!(out.len(), 4);
        assert_eq!(out[2].position, Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn face_mode_places_instances_at_centroids() {
        let mesh = quad();
        let config = ObjectConfig {
            target: ObjectTarget::Faces,
            ..Default::default()
        };
        let out = resolve(&config, Some(&mesh));
        assert_eq!(out.len(), 2);
        assert!((out[0].position - mesh.face_centroid(0)).length() < 1e-6);
    }

    #[test]
    fn align_to_normal_orients_up_for_a_flat_quad() {
        let mesh = quad();
        let config = ObjectConfig {
            target: ObjectTarget::Faces,
            align_to_normal: true,
            ..Default::default()
        };
        for inst in resolve(&config, Some(&mesh)) {
            // +Y normal pitches the +Z forward up by 90 degrees.
            assert!((inst.rotation.x + std::f32::consts::FRAC_PI_2).abs() < 1e-5);
        }
    }

    #[test]
    fn uniform_scale_multiplier_is_applied() {
        let mesh = quad();
        let config = ObjectConfig {
            scale: 2.5,
            ..Default::default()
        };
        for inst in resolve(&config, Some(&mesh)) {
            assert_eq!(inst.scale, Vec3::splat(2.5));
        }
    }
}
