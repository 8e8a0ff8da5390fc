//! Oriented points and the paths they form

use crate::core::types::Vec3;

/// One waypoint of a growth path: where it sits and how the surface
/// faces there. Immutable once appended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedPoint {
    pub position: Vec3,
    /// Unit surface normal at this waypoint
    pub normal: Vec3,
}

impl OrientedPoint {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}

/// Ordered, append-only sequence of oriented points produced by one
/// branch attempt. Order defines traversal and winding direction.
#[derive(Clone, Debug, Default)]
pub struct GrowthPath {
    points: Vec<OrientedPoint>,
}

impl GrowthPath {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a waypoint to the end of the path
    pub fn push(&mut self, point: OrientedPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[OrientedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last appended waypoint, if any
    pub fn tail(&self) -> Option<&OrientedPoint> {
        self.points.last()
    }

    /// Whether the path holds enough points to produce a ribbon
    pub fn is_viable(&self) -> bool {
        self.points.len() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order() {
        let mut path = GrowthPath::new();
        path.push(OrientedPoint::new(Vec3::ZERO, Vec3::Y));
        path.push(OrientedPoint::new(Vec3::X, Vec3::Y));

        assert_eq!(path.len(), 2);
        assert_eq!(path.points()[0].position, Vec3::ZERO);
        assert_eq!(path.tail().unwrap().position, Vec3::X);
    }

    #[test]
    fn test_viability_threshold() {
        let mut path = GrowthPath::new();
        assert!(!path.is_viable());

        path.push(OrientedPoint::new(Vec3::ZERO, Vec3::Y));
        assert!(!path.is_viable());

        path.push(OrientedPoint::new(Vec3::X, Vec3::Y));
        assert!(path.is_viable());
    }
}
