/// ASCII rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::{Matrix4, Point3};
use std::io::Write;
use tetrasym_core::{Camera, Mesh, Triangle};

/// Character luminosity ramp for depth/shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Lines drawn over surfaces win depth ties by this margin
const LINE_DEPTH_BIAS: f32 = 1e-4;

/// ASCII renderer that converts 3D meshes to terminal characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
    color_buffer: Vec<Option<Color>>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
            color_buffer: vec![None; size],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.char_buffer.fill(' ');
        self.color_buffer.fill(None);
    }

    /// Character at a cell, for inspection
    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.char_buffer[y * self.width + x])
    }

    pub fn render_mesh(&mut self, mesh: &Mesh, model_matrix: &Matrix4<f32>, camera: &Camera) {
        for triangle in &mesh.triangles {
            self.render_triangle(triangle, model_matrix, camera);
        }
    }

    /// Draw only the mesh edges
    pub fn render_wireframe(&mut self, mesh: &Mesh, model_matrix: &Matrix4<f32>, camera: &Camera) {
        for (a, b) in mesh.edges() {
            self.draw_line(&a, &b, model_matrix, camera, '#', Color::Cyan);
        }
    }

    fn render_triangle(&mut self, triangle: &Triangle, model_matrix: &Matrix4<f32>, camera: &Camera) {
        // Project vertices to screen space
        let mut screen_coords = [(0.0, 0.0, 0.0); 3];
        for (slot, vertex) in screen_coords.iter_mut().zip(&triangle.vertices) {
            match camera.project_to_screen(
                &vertex.position,
                model_matrix,
                self.width as u32,
                self.height as u32,
            ) {
                Some(coords) => *slot = coords,
                None => return, // Triangle is clipped
            }
        }

        // Shade by the angle between the rotated face normal and the view ray.
        // Faces are lit from both sides.
        let normal = model_matrix
            .transform_vector(&triangle.calculate_normal())
            .normalize();
        let centroid = model_matrix.transform_point(&triangle.centroid());
        let to_camera = (camera.position - centroid).normalize();
        let brightness = normal.dot(&to_camera).abs();

        // Map brightness to character, keeping the blank for empty cells
        let steps = (LUMINOSITY_RAMP.len() - 2) as f32;
        let char_index = 1 + (brightness * steps).round() as usize;
        let character = LUMINOSITY_RAMP[char_index.min(LUMINOSITY_RAMP.len() - 1)];

        self.rasterize_triangle(&screen_coords, character);
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32); 3], character: char) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        // Scanline rasterization
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                // Barycentric coordinates
                if let Some((w0, w1, w2)) = barycentric(
                    (v0.0, v0.1),
                    (v1.0, v1.1),
                    (v2.0, v2.1),
                    (px, py),
                ) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        // Interpolate depth
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;
                        self.plot(x as usize, y as usize, depth, character, None);
                    }
                }
            }
        }
    }

    /// Draw a depth-tested line between two model-space points
    pub fn draw_line(
        &mut self,
        from: &Point3<f32>,
        to: &Point3<f32>,
        model_matrix: &Matrix4<f32>,
        camera: &Camera,
        character: char,
        color: Color,
    ) {
        let (w, h) = (self.width as u32, self.height as u32);
        let (Some(a), Some(b)) = (
            camera.project_to_screen(from, model_matrix, w, h),
            camera.project_to_screen(to, model_matrix, w, h),
        ) else {
            return;
        };

        let steps = (b.0 - a.0).abs().max((b.1 - a.1).abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = a.0 + (b.0 - a.0) * t;
            let y = a.1 + (b.1 - a.1) * t;
            let depth = a.2 + (b.2 - a.2) * t - LINE_DEPTH_BIAS;
            if x >= 0.0 && y >= 0.0 {
                self.plot(x as usize, y as usize, depth, character, Some(color));
            }
        }
    }

    fn plot(&mut self, x: usize, y: usize, depth: f32, character: char, color: Option<Color>) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        if depth < self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.char_buffer[idx] = character;
            self.color_buffer[idx] = color;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let c = self.char_buffer[idx];

                // Color based on character intensity unless the cell has its own
                let color = self.color_buffer[idx].unwrap_or(match c {
                    ' ' | '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    '#' | '%' | '@' => Color::Blue,
                    _ => Color::White,
                });

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetrasym_core::{Orientation, Transform};

    fn filled_cells(renderer: &AsciiRenderer) -> usize {
        renderer.char_buffer.iter().filter(|&&c| c != ' ').count()
    }

    #[test]
    fn test_barycentric_inside_and_degenerate() {
        let (w0, w1, w2) = barycentric((0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (1.0, 1.0)).unwrap();
        assert!(w0 > 0.0 && w1 > 0.0 && w2 > 0.0);
        assert!((w0 + w1 + w2 - 1.0).abs() < 1e-6);
        assert!(barycentric((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (1.0, 0.0)).is_none());
    }

    #[test]
    fn test_render_tetrahedron_fills_cells() {
        let mut renderer = AsciiRenderer::new(80, 40);
        let camera = Camera::new(80, 40);
        let model = Transform::model_matrix(&Orientation::identity(), 1.0);
        renderer.render_mesh(&Mesh::tetrahedron(1.0), &model, &camera);
        assert!(filled_cells(&renderer) > 50);

        renderer.clear();
        assert_eq!(filled_cells(&renderer), 0);
    }

    #[test]
    fn test_wireframe_draws_edges_only() {
        let camera = Camera::new(80, 40);
        let model = Transform::model_matrix(&Orientation::identity(), 1.0);
        let mesh = Mesh::tetrahedron(1.0);

        let mut solid = AsciiRenderer::new(80, 40);
        solid.render_mesh(&mesh, &model, &camera);
        let mut wire = AsciiRenderer::new(80, 40);
        wire.render_wireframe(&mesh, &model, &camera);

        assert!(filled_cells(&wire) > 0);
        assert!(filled_cells(&wire) < filled_cells(&solid));
    }

    #[test]
    fn test_line_through_centre() {
        let mut renderer = AsciiRenderer::new(41, 21);
        let camera = Camera::new(41, 21);
        renderer.draw_line(
            &Point3::new(-1.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Matrix4::identity(),
            &camera,
            '~',
            Color::Magenta,
        );
        assert_eq!(renderer.char_at(20, 10), Some('~'));
        assert_eq!(renderer.char_at(20, 0), Some(' '));
    }

    #[test]
    fn test_draw_writes_every_cell() {
        let renderer = AsciiRenderer::new(4, 2);
        let mut out = Vec::new();
        renderer.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(' ').count(), 8);
        assert_eq!(text.matches("\r\n").count(), 1);
    }
}
