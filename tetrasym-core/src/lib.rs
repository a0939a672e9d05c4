/// TetraSym Core Library - Symmetry cycling and shared geometry
///
/// This library provides the host-independent core: the rotational symmetry
/// group of the tetrahedron, the cycling state machine, the interval trigger,
/// the rotation matrix readout, and the mesh/camera math the renderers share.

pub mod config;
pub mod cycler;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod readout;
pub mod showcase;
pub mod symmetry;
pub mod timer;
pub mod transform;

// Re-export commonly used types
pub use config::{Config, CyclerConfig, TimerConfig, ViewConfig};
pub use cycler::{CycleEvent, Cursor, Cycler, Pacing};
pub use error::ConfigError;
pub use geometry::{Mesh, Triangle, Vertex};
pub use projection::{Camera, ProjectionMode};
pub use readout::{ReadoutCell, RotationReadout};
pub use showcase::{CurrentSymmetry, Showcase};
pub use symmetry::{Symmetry, SymmetryGroup, SymmetryKind, GROUP_ORDER};
pub use timer::TriggerTimer;
pub use transform::{Orientation, Transform};
