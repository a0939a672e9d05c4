/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

use crate::config::ViewConfig;

/// Closest the camera may get to its target
pub const MIN_DISTANCE: f32 = 1.5;
/// Farthest the camera may get from its target
pub const MAX_DISTANCE: f32 = 20.0;

const PITCH_LIMIT: f32 = 1.5;

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

/// Camera configuration for 3D rendering
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub mode: ProjectionMode,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 4.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: 75.0_f32.to_radians(),
            aspect: width as f32 / height.max(1) as f32,
            near: 0.1,
            far: 1000.0,
            mode: ProjectionMode::Perspective,
        }
    }

    /// Camera looking down -Z at the origin from the configured distance
    pub fn from_view(view: &ViewConfig, width: u32, height: u32) -> Self {
        let mut camera = Self::new(width, height);
        camera.fov = view.fov_degrees.to_radians();
        camera.position = Point3::new(0.0, 0.0, view.camera_distance);
        if view.orthographic {
            camera.mode = ProjectionMode::Orthographic;
        }
        camera
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn distance(&self) -> f32 {
        (self.position - self.target).norm()
    }

    /// Orbit around the target, keeping the distance.
    ///
    /// Pitch is clamped short of the poles so the up vector stays valid.
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        let offset = self.position - self.target;
        let distance = offset.norm();
        if distance <= f32::EPSILON {
            return;
        }

        let yaw = offset.x.atan2(offset.z) + d_yaw;
        let pitch = ((offset.y / distance).asin() + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let offset = Vector3::new(
            distance * pitch.cos() * yaw.sin(),
            distance * pitch.sin(),
            distance * pitch.cos() * yaw.cos(),
        );
        self.position = self.target + offset;
    }

    /// Scale the distance to the target (factor < 1 moves closer)
    pub fn zoom(&mut self, factor: f32) {
        let offset = self.position - self.target;
        let distance = offset.norm();
        if distance <= f32::EPSILON {
            return;
        }
        let new_distance = (distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.position = self.target + offset * (new_distance / distance);
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        match self.mode {
            ProjectionMode::Perspective => {
                Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let height = self.distance();
                let width = height * self.aspect;
                Matrix4::new_orthographic(
                    -width / 2.0,
                    width / 2.0,
                    -height / 2.0,
                    height / 2.0,
                    self.near,
                    self.far,
                )
            }
        }
    }

    /// Project a 3D point to 2D screen space.
    ///
    /// Returns `(x, y, depth)` with depth in normalized device units, or
    /// `None` when the point is behind the near plane or off screen.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        model_matrix: &Matrix4<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let view_point = (self.view_matrix() * model_matrix).transform_point(point);
        if view_point.z > -self.near {
            return None;
        }

        // transform_point performs the perspective divide
        let ndc = self.projection_matrix().transform_point(&view_point);

        if ndc.x < -1.0 || ndc.x > 1.0 || ndc.y < -1.0 || ndc.y > 1.0 || ndc.z > 1.0 {
            return None;
        }

        let screen_x = (ndc.x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc.y) * 0.5 * height as f32;

        Some((screen_x, screen_y, ndc.z))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
