/// Example: Print every symmetry of the tetrahedron with its rotation matrix
///
/// Usage: cargo run --example list_symmetries

use tetrasym_core::{geometry::tetrahedron_vertices, RotationReadout, SymmetryGroup};

fn main() {
    let group = SymmetryGroup::tetrahedral();
    let vertices = tetrahedron_vertices();

    for (index, symmetry) in group.iter().enumerate() {
        // Where each corner lands, as a permutation of corner indices
        let permutation: Vec<String> = vertices
            .iter()
            .map(|v| {
                let moved = symmetry.rotation * v;
                vertices
                    .iter()
                    .position(|w| (w - moved).norm() < 1e-4)
                    .map_or_else(|| "?".to_string(), |i| i.to_string())
            })
            .collect();

        println!("#{index:<2} {symmetry}");
        println!("    corners -> [{}]", permutation.join(" "));
        for line in RotationReadout::from_orientation(&symmetry.rotation)
            .to_string()
            .lines()
        {
            println!("    {line}");
        }
    }
}
