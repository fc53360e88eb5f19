/// Camera and view-volume normalization
use nalgebra::{Matrix4, Vector3};

/// Camera configuration: view-volume bounds, projection mode, and the
/// derived matrix that maps the configured view volume onto the canonical
/// `[-1, 1] x [-1, 1]` rectangle.
///
/// `normalize_matrix` is rebuilt eagerly by `proj_perspective` /
/// `proj_ortho`; the pipeline only ever applies it.
#[derive(Debug, Clone)]
pub struct Camera {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub perspective: bool,
    pub normalize_matrix: Matrix4<f32>,
}

impl Camera {
    /// Switch to a perspective view volume whose near rectangle is
    /// `[left, right] x [bottom, top]` at `z = -near`, and rebuild the
    /// normalization matrix.
    pub fn proj_perspective(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32) {
        self.left = left;
        self.right = right;
        self.bottom = bottom;
        self.top = top;
        self.near = near;
        self.perspective = true;
        self.normalize_matrix = perspective_normalization(left, right, bottom, top, near);
    }

    /// Switch to an orthographic view volume `[left, right] x [bottom, top]`
    /// and rebuild the normalization matrix.
    pub fn proj_ortho(&mut self, left: f32, right: f32, bottom: f32, top: f32) {
        self.left = left;
        self.right = right;
        self.bottom = bottom;
        self.top = top;
        self.perspective = false;
        self.normalize_matrix = ortho_normalization(left, right, bottom, top);
    }
}

impl Default for Camera {
    /// Symmetric unit frustum: perspective with bounds `(-1, 1, -1, 1)` at
    /// `near = 1`, whose normalization matrix is the identity.
    fn default() -> Self {
        let mut camera = Camera {
            left: 0.0,
            right: 0.0,
            bottom: 0.0,
            top: 0.0,
            near: 0.0,
            perspective: true,
            normalize_matrix: Matrix4::identity(),
        };
        camera.proj_perspective(-1.0, 1.0, -1.0, 1.0, 1.0);
        camera
    }
}

/// Recenter an asymmetric frustum onto the z-axis with a skew, then scale
/// its near rectangle to `[-1, 1]^2` (skew first, then scale).
fn perspective_normalization(left: f32, right: f32, bottom: f32, top: f32, near: f32) -> Matrix4<f32> {
    #[rustfmt::skip]
    let skew = Matrix4::new(
        1.0, 0.0, (right + left) / (2.0 * near), 0.0,
        0.0, 1.0, (top + bottom) / (2.0 * near), 0.0,
        0.0, 0.0, 1.0,                           0.0,
        0.0, 0.0, 0.0,                           1.0,
    );
    let scale = Matrix4::new_nonuniform_scaling(&Vector3::new(
        2.0 * near / (right - left),
        2.0 * near / (top - bottom),
        1.0,
    ));
    scale * skew
}

/// Translate the view rectangle to the origin, then scale it to `[-1, 1]^2`.
fn ortho_normalization(left: f32, right: f32, bottom: f32, top: f32) -> Matrix4<f32> {
    let translate = Matrix4::new_translation(&Vector3::new(
        -(right + left) / 2.0,
        -(top + bottom) / 2.0,
        0.0,
    ));
    let scale = Matrix4::new_nonuniform_scaling(&Vector3::new(
        2.0 / (right - left),
        2.0 / (top - bottom),
        1.0,
    ));
    scale * translate
}
