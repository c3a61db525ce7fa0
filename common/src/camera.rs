//! 2D orthographic camera with a fixed meter-to-pixel scale

use glam::{Mat4, Vec3};

/// 2D orthographic camera
///
/// `zoom` is the half-height of the visible world in meters; the half-width
/// follows from the aspect ratio.
#[derive(Debug, Clone)]
pub struct Camera2D {
    pub position: Vec3,
    pub zoom: f32,
    pub aspect_ratio: f32,
}

impl Camera2D {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            zoom: 1.0,
            aspect_ratio,
        }
    }

    /// Pin the zoom so that one world meter covers exactly `pixels_per_meter`
    /// physical pixels, with the world origin at the center of the viewport.
    pub fn set_pixel_scale(&mut self, viewport_height: f32, pixels_per_meter: f32) {
        self.zoom = viewport_height / (2.0 * pixels_per_meter);
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        let half_width = self.zoom * self.aspect_ratio;
        let half_height = self.zoom;

        let projection = Mat4::orthographic_rh(
            -half_width,
            half_width,
            -half_height,
            half_height,
            -1.0,
            1.0,
        );

        let view = Mat4::from_translation(-self.position);

        projection * view
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub fn from_camera_2d(camera: &Camera2D) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            position: [camera.position.x, camera.position.y, camera.position.z, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_scale_zoom() {
        let mut camera = Camera2D::new(1280.0 / 720.0);
        camera.set_pixel_scale(720.0, 100.0);
        assert!((camera.zoom - 3.6).abs() < 1e-6);
    }

    #[test]
    fn test_pixel_scale_mapping() {
        // A point 6 m from the origin must land 600 px from screen center
        // at 100 px/m in a 1280x720 viewport.
        let (width, height) = (1280.0f32, 720.0f32);
        let mut camera = Camera2D::new(width / height);
        camera.set_pixel_scale(height, 100.0);

        let ndc = camera
            .view_projection()
            .project_point3(Vec3::new(6.0, 0.0, 0.0));
        let pixels_from_center = ndc.x * width / 2.0;
        assert!((pixels_from_center - 600.0).abs() < 1e-3);
    }

    #[test]
    fn test_viewport_edge_maps_to_ndc_one() {
        let mut camera = Camera2D::new(1280.0 / 720.0);
        camera.set_pixel_scale(720.0, 100.0);

        let ndc = camera
            .view_projection()
            .project_point3(Vec3::new(0.0, camera.zoom, 0.0));
        assert!((ndc.y - 1.0).abs() < 1e-6);
    }
}
