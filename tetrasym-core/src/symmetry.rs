/// The rotational symmetry group of the regular tetrahedron
///
/// The group has 12 elements: eight 120° turns about the four axes through a
/// vertex and the opposite face centre, three half turns about the axes
/// through opposite edge midpoints, and the identity.

use std::f32::consts::{FRAC_PI_3, PI};
use std::fmt;
use std::ops::Index;

use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};

use crate::transform::Orientation;

/// Number of rotations in the group, identity included
pub const GROUP_ORDER: usize = 12;

/// Axes through a vertex and the centre of the opposite face
pub const VERTEX_AXES: [[f32; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
];

/// Axes through the midpoints of opposite edges
pub const EDGE_AXES: [[f32; 3]; 3] = [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];

/// Which family a symmetry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryKind {
    /// +120° about a vertex axis
    VertexPositive,
    /// -120° about a vertex axis
    VertexNegative,
    /// 180° about an edge axis
    Edge,
    Identity,
}

/// One rotation of the group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Symmetry {
    pub kind: SymmetryKind,
    /// Rotation axis; `None` for the identity
    pub axis: Option<Unit<Vector3<f32>>>,
    /// Signed rotation angle in radians
    pub angle: f32,
    pub rotation: Orientation,
}

impl Symmetry {
    fn about(kind: SymmetryKind, axis: [f32; 3], angle: f32) -> Self {
        let axis = Unit::new_normalize(Vector3::from(axis));
        Self {
            kind,
            axis: Some(axis),
            angle,
            rotation: UnitQuaternion::from_axis_angle(&axis, angle),
        }
    }

    fn identity() -> Self {
        Self {
            kind: SymmetryKind::Identity,
            axis: None,
            angle: 0.0,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Endpoints of a line along the rotation axis, centred on the origin
    pub fn axis_segment(&self, half_length: f32) -> Option<(Point3<f32>, Point3<f32>)> {
        self.axis.map(|axis| {
            let reach = axis.into_inner() * half_length;
            (Point3::from(-reach), Point3::from(reach))
        })
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.axis {
            None => write!(f, "identity"),
            Some(axis) => write!(
                f,
                "{:+.0}° about ({:.2}, {:.2}, {:.2})",
                self.angle.to_degrees(),
                axis.x,
                axis.y,
                axis.z
            ),
        }
    }
}

/// The fixed, ordered list of the 12 group rotations.
///
/// Order: indices 0–3 turn +120° about [`VERTEX_AXES`], 4–7 turn -120° about
/// the same axes, 8–10 are half turns about [`EDGE_AXES`], 11 is the identity.
#[derive(Debug, Clone)]
pub struct SymmetryGroup {
    elements: [Symmetry; GROUP_ORDER],
}

impl SymmetryGroup {
    pub fn tetrahedral() -> Self {
        let angle = 2.0 * FRAC_PI_3;
        let vertex = |i: usize, kind, angle| Symmetry::about(kind, VERTEX_AXES[i], angle);
        let edge = |i: usize| Symmetry::about(SymmetryKind::Edge, EDGE_AXES[i], PI);

        let elements = [
            vertex(0, SymmetryKind::VertexPositive, angle),
            vertex(1, SymmetryKind::VertexPositive, angle),
            vertex(2, SymmetryKind::VertexPositive, angle),
            vertex(3, SymmetryKind::VertexPositive, angle),
            vertex(0, SymmetryKind::VertexNegative, -angle),
            vertex(1, SymmetryKind::VertexNegative, -angle),
            vertex(2, SymmetryKind::VertexNegative, -angle),
            vertex(3, SymmetryKind::VertexNegative, -angle),
            edge(0),
            edge(1),
            edge(2),
            Symmetry::identity(),
        ];

        Self { elements }
    }

    pub const fn len(&self) -> usize {
        GROUP_ORDER
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Symmetry> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symmetry> {
        self.elements.iter()
    }

    /// Index of the element representing `rotation`, if any.
    ///
    /// `q` and `-q` describe the same rotation, so both match.
    pub fn position_of(&self, rotation: &Orientation, tolerance: f32) -> Option<usize> {
        self.elements
            .iter()
            .position(|s| s.rotation.angle_to(rotation) < tolerance)
    }
}

impl Default for SymmetryGroup {
    fn default() -> Self {
        Self::tetrahedral()
    }
}

impl Index<usize> for SymmetryGroup {
    type Output = Symmetry;

    fn index(&self, index: usize) -> &Symmetry {
        &self.elements[index]
    }
}
