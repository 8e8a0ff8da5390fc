//! Leaf placement along grown ribbons
//!
//! A pure stage run after meshing: every ribbon vertex independently
//! rolls for a leaf, and winners get a pose (position, up axis, twist).
//! Instantiating actual leaf geometry at those poses is the host's job.

use crate::core::rng::GrowthRng;
use crate::core::types::{Mat4, Quat, Vec3};
use crate::growth::config::GrowthConfig;
use crate::growth::path::GrowthPath;
use crate::mesh::MeshData;

/// Pose for one decorative leaf
#[derive(Clone, Copy, Debug)]
pub struct LeafPlacement {
    pub position: Vec3,
    /// Axis the leaf twists about (the growth normal where it sprouted)
    pub up: Vec3,
    /// Twist about `up`, degrees
    pub twist_degrees: f32,
}

impl LeafPlacement {
    /// World transform for instancing leaf geometry at this placement
    pub fn transform(&self) -> Mat4 {
        let rotation = Quat::from_axis_angle(
            self.up.normalize_or(Vec3::Y),
            self.twist_degrees.to_radians(),
        );
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

/// Roll for a leaf at one candidate spot. Emits when the roll lands at or
/// under `leaf_probability`; the twist is only drawn on a success, so
/// rejected spots consume a single draw.
pub fn decide(
    position: Vec3,
    up: Vec3,
    config: &GrowthConfig,
    rng: &mut GrowthRng,
) -> Option<LeafPlacement> {
    let roll = rng.range(0.0, 100.0);
    if roll > config.leaf_probability {
        return None;
    }
    let twist_degrees = rng.range(-config.leaf_max_twist, config.leaf_max_twist);
    Some(LeafPlacement { position, up, twist_degrees })
}

/// Consider every ribbon vertex in order. Vertices pair with waypoints
/// two to one, as [`crate::mesh::build_strip`] lays them out; each vertex
/// uses its waypoint's growth normal as the leaf's up axis, and the two
/// vertices of a waypoint roll independently. Vertices beyond the last
/// waypoint pair are skipped.
pub fn place_leaves(
    mesh: &MeshData,
    path: &GrowthPath,
    config: &GrowthConfig,
    rng: &mut GrowthRng,
) -> Vec<LeafPlacement> {
    let mut placements = Vec::new();

    for (pair, point) in mesh.positions.chunks_exact(2).zip(path.points()) {
        for position in pair {
            if let Some(placement) = decide(*position, point.normal, config, rng) {
                placements.push(placement);
            }
        }
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::path::OrientedPoint;
    use crate::mesh::build_strip;

    fn leaf_config(probability: f32) -> GrowthConfig {
        GrowthConfig {
            leaf_probability: probability,
            leaf_max_twist: 100.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_emission_fraction_tracks_probability() {
        let config = leaf_config(60.0);
        let mut rng = GrowthRng::new(42);

        let emitted = (0..10_000)
            .filter(|_| decide(Vec3::ZERO, Vec3::Y, &config, &mut rng).is_some())
            .count();
        let fraction = emitted as f32 / 10_000.0;
        assert!((fraction - 0.6).abs() < 0.02, "fraction was {}", fraction);
    }

    #[test]
    fn test_full_probability_always_emits() {
        let config = leaf_config(100.0);
        let mut rng = GrowthRng::new(42);
        for _ in 0..1000 {
            assert!(decide(Vec3::ZERO, Vec3::Y, &config, &mut rng).is_some());
        }
    }

    #[test]
    fn test_zero_probability_never_emits() {
        let config = leaf_config(0.0);
        let mut rng = GrowthRng::new(42);
        for _ in 0..1000 {
            assert!(decide(Vec3::ZERO, Vec3::Y, &config, &mut rng).is_none());
        }
    }

    #[test]
    fn test_twist_stays_in_bounds() {
        let config = GrowthConfig {
            leaf_probability: 100.0,
            leaf_max_twist: 35.0,
            ..Default::default()
        };
        let mut rng = GrowthRng::new(7);
        for _ in 0..1000 {
            let leaf = decide(Vec3::ZERO, Vec3::Y, &config, &mut rng).unwrap();
            assert!(leaf.twist_degrees.abs() <= 35.0);
        }
    }

    #[test]
    fn test_transform_places_origin_at_position() {
        let leaf = LeafPlacement {
            position: Vec3::new(3.0, -1.0, 2.5),
            up: Vec3::Y,
            twist_degrees: 72.0,
        };
        let moved = leaf.transform().transform_point3(Vec3::ZERO);
        assert!(moved.distance(leaf.position) < 1e-5);
    }

    #[test]
    fn test_transform_twists_about_up() {
        let leaf = LeafPlacement {
            position: Vec3::ZERO,
            up: Vec3::Y,
            twist_degrees: 90.0,
        };
        let spun = leaf.transform().transform_vector3(Vec3::X);
        assert!(spun.distance(Vec3::NEG_Z) < 1e-5);
    }

    #[test]
    fn test_place_leaves_covers_every_vertex() {
        let mut path = GrowthPath::new();
        path.push(OrientedPoint::new(Vec3::ZERO, Vec3::Y));
        path.push(OrientedPoint::new(Vec3::X, Vec3::Z));
        path.push(OrientedPoint::new(Vec3::X * 2.0, Vec3::Y));
        let mesh = build_strip(&path, 0.4);

        let config = leaf_config(100.0);
        let mut rng = GrowthRng::new(9);
        let placements = place_leaves(&mesh, &path, &config, &mut rng);

        assert_eq!(placements.len(), mesh.vertex_count());
        // Up axes come from the owning waypoint's growth normal
        assert_eq!(placements[0].up, Vec3::Y);
        assert_eq!(placements[1].up, Vec3::Y);
        assert_eq!(placements[2].up, Vec3::Z);
        assert_eq!(placements[3].up, Vec3::Z);
        for (i, placement) in placements.iter().enumerate() {
            assert_eq!(placement.position, mesh.positions[i]);
        }
    }

    #[test]
    fn test_mesh_longer_than_path_is_truncated() {
        let mut long_path = GrowthPath::new();
        for i in 0..3 {
            long_path.push(OrientedPoint::new(Vec3::X * i as f32, Vec3::Y));
        }
        let mesh = build_strip(&long_path, 0.4);

        // Pair the 6-vertex mesh with a 2-waypoint path; the unmatched
        // vertices roll nothing instead of reading out of bounds.
        let mut short_path = GrowthPath::new();
        short_path.push(OrientedPoint::new(Vec3::ZERO, Vec3::Y));
        short_path.push(OrientedPoint::new(Vec3::X, Vec3::Y));

        let config = leaf_config(100.0);
        let mut rng = GrowthRng::new(5);
        let placements = place_leaves(&mesh, &short_path, &config, &mut rng);
        assert_eq!(placements.len(), 4);
    }
}
