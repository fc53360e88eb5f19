/// Scene graph: positions and the scene root
use std::cell::RefCell;
use std::rc::Rc;

use nalgebra::Matrix4;

use crate::geometry::SharedModel;
use crate::projection::Camera;

/// Shared handle to a position, with the same DAG semantics as models: one
/// position may be nested under several parents.
pub type SharedPosition = Rc<RefCell<Position>>;

/// A transform node in the scene graph: a matrix, an optional model, and
/// nested child positions. Purely structural; rendering lives in the
/// pipeline.
#[derive(Debug, Clone)]
pub struct Position {
    pub matrix: Matrix4<f32>,
    pub model: Option<SharedModel>,
    pub visible: bool,
    pub nested: Vec<SharedPosition>,
}

impl Position {
    pub fn new() -> Self {
        Self {
            matrix: Matrix4::identity(),
            model: None,
            visible: true,
            nested: Vec::new(),
        }
    }

    pub fn with_model(model: SharedModel) -> Self {
        Self {
            model: Some(model),
            ..Self::new()
        }
    }

    pub fn add_nested(&mut self, child: SharedPosition) {
        self.nested.push(child);
    }

    pub fn shared(self) -> SharedPosition {
        Rc::new(RefCell::new(self))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

/// A camera plus the ordered list of root positions. Insertion order is
/// traversal order, which decides pixel overdraw.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub positions: Vec<SharedPosition>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            positions: Vec::new(),
        }
    }

    pub fn add_position(&mut self, position: SharedPosition) {
        self.positions.push(position);
    }
}
