/// Geometry primitives for wire-frame rendering
use std::cell::RefCell;
use std::rc::Rc;

use nalgebra::{Matrix4, Vector4};

use crate::color::Color;

/// A point in homogeneous coordinates. Vertices are value types; transforms
/// always produce a new vertex rather than mutating one in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vector4<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vector4::new(x, y, z, 1.0),
        }
    }

    pub fn from_homogeneous(position: Vector4<f32>) -> Self {
        Self { position }
    }

    /// `matrix * self` under the column-vector convention.
    pub fn transformed(&self, matrix: &Matrix4<f32>) -> Vertex {
        Vertex {
            position: matrix * self.position,
        }
    }
}

/// A renderable line: two indices into the owning model's vertex list and
/// two into its color list. Clipping may repoint one endpoint's index pair
/// at a freshly appended vertex/color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment {
    pub vertices: [usize; 2],
    pub colors: [usize; 2],
}

impl LineSegment {
    pub fn new(v0: usize, v1: usize, c0: usize, c1: usize) -> Self {
        Self {
            vertices: [v0, v1],
            colors: [c0, c1],
        }
    }

    /// Both endpoints share a single color entry.
    pub fn solid(v0: usize, v1: usize, color: usize) -> Self {
        Self::new(v0, v1, color, color)
    }
}

/// Shared handle to a model. The same model may be nested under several
/// parents (a DAG), in which case each occurrence renders with its own
/// accumulated transform.
pub type SharedModel = Rc<RefCell<Model>>;

/// A wire-frame model: its geometry lists, a local transform applied to
/// itself and all descendants, and nested child models.
///
/// The pipeline never mutates a canonical model; it works on a `clone`,
/// which copies the geometry lists and shares the nested handles.
#[derive(Debug, Clone)]
pub struct Model {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub segments: Vec<LineSegment>,
    pub colors: Vec<Color>,
    pub visible: bool,
    pub debug: bool,
    pub nested_matrix: Matrix4<f32>,
    pub nested: Vec<SharedModel>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            segments: Vec::new(),
            colors: Vec::new(),
            visible: true,
            debug: false,
            nested_matrix: Matrix4::identity(),
            nested: Vec::new(),
        }
    }

    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Append a color and return its index.
    pub fn add_color(&mut self, color: Color) -> usize {
        self.colors.push(color);
        self.colors.len() - 1
    }

    pub fn add_segment(&mut self, segment: LineSegment) {
        self.segments.push(segment);
    }

    pub fn add_nested(&mut self, child: SharedModel) {
        self.nested.push(child);
    }

    /// Wrap into a shared handle so the model can sit under several parents.
    pub fn shared(self) -> SharedModel {
        Rc::new(RefCell::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform;

    #[test]
    fn test_vertex_transform_produces_new_vertex() {
        let v = Vertex::new(1.0, 2.0, 3.0);
        let moved = v.transformed(&Transform::translation(1.0, 0.0, 0.0));
        assert!((moved.position.x - 2.0).abs() < 1e-6);
        // The original is untouched.
        assert!((v.position.x - 1.0).abs() < 1e-6);
        assert!((v.position.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_add_returns_indices_in_order() {
        let mut model = Model::new("indices");
        assert_eq!(model.add_vertex(Vertex::new(0.0, 0.0, 0.0)), 0);
        assert_eq!(model.add_vertex(Vertex::new(1.0, 0.0, 0.0)), 1);
        assert_eq!(model.add_color(Color::RED), 0);
        model.add_segment(LineSegment::solid(0, 1, 0));
        assert_eq!(model.segments[0], LineSegment::new(0, 1, 0, 0));
    }

    #[test]
    fn test_clone_copies_geometry_lists() {
        let mut model = Model::new("canonical");
        model.add_vertex(Vertex::new(0.0, 0.0, 0.0));
        model.add_color(Color::WHITE);

        let mut copy = model.clone();
        copy.add_vertex(Vertex::new(5.0, 5.0, 5.0));
        copy.add_color(Color::RED);

        assert_eq!(model.vertices.len(), 1);
        assert_eq!(model.colors.len(), 1);
        assert_eq!(copy.vertices.len(), 2);
    }

    #[test]
    fn test_shared_model_under_two_parents() {
        let child = Model::new("child").shared();
        let mut a = Model::new("a");
        let mut b = Model::new("b");
        a.add_nested(Rc::clone(&child));
        b.add_nested(Rc::clone(&child));

        child.borrow_mut().visible = false;
        assert!(!a.nested[0].borrow().visible);
        assert!(!b.nested[0].borrow().visible);
    }
}
