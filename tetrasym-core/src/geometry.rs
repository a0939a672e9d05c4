/// Geometry primitives for the tetrahedron mesh
use nalgebra::{Point3, Vector3};

/// Corners of the regular tetrahedron inscribed in the cube [-1, 1]^3.
///
/// These are alternating cube corners, so every rotation in the symmetry
/// group maps this set onto itself.
pub const TETRAHEDRON_CORNERS: [[f32; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
];

/// Vertex indices of the four tetrahedron faces
pub const TETRAHEDRON_FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

/// The tetrahedron corners as points
pub fn tetrahedron_vertices() -> [Point3<f32>; 4] {
    TETRAHEDRON_CORNERS.map(|[x, y, z]| Point3::new(x, y, z))
}

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self { position, normal }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Calculate the face normal from the triangle's vertices
    pub fn calculate_normal(&self) -> Vector3<f32> {
        let v0 = self.vertices[0].position;
        let v1 = self.vertices[1].position;
        let v2 = self.vertices[2].position;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1.cross(&edge2).normalize()
    }

    pub fn centroid(&self) -> Point3<f32> {
        let sum = self.vertices[0].position.coords
            + self.vertices[1].position.coords
            + self.vertices[2].position.coords;
        Point3::from(sum / 3.0)
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Build the regular tetrahedron, scaled uniformly about the origin.
    ///
    /// Faces are wound so their normals point away from the centre.
    pub fn tetrahedron(scale: f32) -> Self {
        let corners = tetrahedron_vertices().map(|p| Point3::from(p.coords * scale));
        let mut mesh = Self::with_capacity(TETRAHEDRON_FACES.len());

        for [a, b, c] in TETRAHEDRON_FACES {
            let (p0, mut p1, mut p2) = (corners[a], corners[b], corners[c]);
            let mut normal = (p1 - p0).cross(&(p2 - p0)).normalize();

            // The mesh is centred on the origin, so an outward normal agrees
            // with the direction to any vertex of the face.
            if normal.dot(&p0.coords) < 0.0 {
                std::mem::swap(&mut p1, &mut p2);
                normal = -normal;
            }

            mesh.add_triangle(Triangle::new(
                Vertex::new(p0, normal),
                Vertex::new(p1, normal),
                Vertex::new(p2, normal),
            ));
        }

        mesh
    }

    /// Unique edges of the mesh, as pairs of endpoints.
    ///
    /// Edges shared by two triangles are reported once.
    pub fn edges(&self) -> Vec<(Point3<f32>, Point3<f32>)> {
        const EPSILON: f32 = 1e-5;
        let same = |a: &Point3<f32>, b: &Point3<f32>| (a - b).norm() < EPSILON;

        let mut edges: Vec<(Point3<f32>, Point3<f32>)> = Vec::new();
        for triangle in &self.triangles {
            for i in 0..3 {
                let a = triangle.vertices[i].position;
                let b = triangle.vertices[(i + 1) % 3].position;
                let known = edges.iter().any(|(p, q)| {
                    (same(p, &a) && same(q, &b)) || (same(p, &b) && same(q, &a))
                });
                if !known {
                    edges.push((a, b));
                }
            }
        }
        edges
    }
}
