/// 3x3 rotation matrix readout
use std::fmt;

use nalgebra::Matrix3;

use crate::transform::{Orientation, Transform};

/// Entries with a smaller magnitude are shown de-emphasized
pub const NEGLIGIBLE: f32 = 0.01;

/// One formatted matrix entry
#[derive(Debug, Clone, PartialEq)]
pub struct ReadoutCell {
    pub value: f32,
    /// Two decimal places, never `-0.00`
    pub text: String,
    pub negligible: bool,
}

/// Display model for the rotation matrix of the current symmetry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationReadout {
    matrix: Matrix3<f32>,
}

impl RotationReadout {
    pub fn from_orientation(orientation: &Orientation) -> Self {
        Self {
            matrix: Transform::rotation_matrix(orientation),
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> ReadoutCell {
        let value = self.matrix[(row, col)];
        let negligible = value.abs() < NEGLIGIBLE;
        let text = if negligible {
            "0.00".to_string()
        } else {
            format!("{:.2}", value)
        };
        ReadoutCell {
            value,
            text,
            negligible,
        }
    }

    /// Cells in row-major order
    pub fn rows(&self) -> [[ReadoutCell; 3]; 3] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.cell(row, col)))
    }
}

impl fmt::Display for RotationReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "[{:>5} {:>5} {:>5}]",
                row[0].text, row[1].text, row[2].text
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetry::SymmetryGroup;

    #[test]
    fn test_identity_readout() {
        let readout = RotationReadout::from_orientation(&Orientation::identity());
        assert_eq!(
            readout.to_string(),
            "[ 1.00  0.00  0.00]\n[ 0.00  1.00  0.00]\n[ 0.00  0.00  1.00]"
        );
        assert!(readout.cell(0, 1).negligible);
        assert!(!readout.cell(0, 0).negligible);
    }

    #[test]
    fn test_half_turn_has_no_negative_zero() {
        let group = SymmetryGroup::tetrahedral();
        let readout = RotationReadout::from_orientation(&group[8].rotation);
        let text = readout.to_string();
        assert!(!text.contains("-0.00"));
        assert_eq!(text, "[-1.00  0.00  0.00]\n[ 0.00  1.00  0.00]\n[ 0.00  0.00 -1.00]");
    }

    #[test]
    fn test_vertex_turn_is_a_permutation_matrix() {
        let group = SymmetryGroup::tetrahedral();
        let readout = RotationReadout::from_orientation(&group[0].rotation);
        for row in readout.rows() {
            let significant: Vec<_> = row.iter().filter(|c| !c.negligible).collect();
            assert_eq!(significant.len(), 1);
            assert_eq!(significant[0].text, "1.00");
        }
    }

    #[test]
    fn test_cell_formatting() {
        let orientation = Orientation::from_axis_angle(&nalgebra::Vector3::z_axis(), 0.5);
        let readout = RotationReadout::from_orientation(&orientation);
        let cell = readout.cell(0, 1);
        assert_eq!(cell.text, format!("{:.2}", -0.5_f32.sin()));
        assert!(!cell.negligible);
    }
}
