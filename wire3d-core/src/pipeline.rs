/// Scene traversal and the per-model rendering pipeline
use nalgebra::Matrix4;

use crate::clip::clip;
use crate::error::RenderError;
use crate::framebuffer::PixelSink;
use crate::geometry::{Model, Vertex};
use crate::projection::Camera;
use crate::raster::rasterize;
use crate::scene::{Position, Scene};

/// Feature toggles for one render pass. Passed by value so the settings are
/// snapshotted at the `render` boundary and cannot change mid-frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub anti_alias: bool,
    pub gamma: bool,
}

/// Render every visible position of the scene into the pixel sink.
///
/// The traversal is a pre-order depth-first walk over two nested tree
/// layers (positions, then models), accumulating the current transformation
/// matrix with the pure `*` product at every node. Canonical scene-graph
/// state is never mutated; each model renders from a private geometry copy.
pub fn render(
    scene: &Scene,
    options: RenderOptions,
    sink: &mut dyn PixelSink,
) -> Result<(), RenderError> {
    for position in &scene.positions {
        let position = position.borrow();
        if position.visible {
            render_position(&scene.camera, &position, &Matrix4::identity(), options, sink)?;
        }
    }
    Ok(())
}

fn render_position(
    camera: &Camera,
    position: &Position,
    ctm: &Matrix4<f32>,
    options: RenderOptions,
    sink: &mut dyn PixelSink,
) -> Result<(), RenderError> {
    let ctm = ctm * position.matrix;
    if let Some(model) = &position.model {
        render_model(camera, &model.borrow(), &ctm, options, sink)?;
    }
    for nested in &position.nested {
        let nested = nested.borrow();
        if nested.visible {
            render_position(camera, &nested, &ctm, options, sink)?;
        }
    }
    Ok(())
}

fn render_model(
    camera: &Camera,
    model: &Model,
    ctm: &Matrix4<f32>,
    options: RenderOptions,
    sink: &mut dyn PixelSink,
) -> Result<(), RenderError> {
    if !model.visible {
        return Ok(());
    }
    let ctm = ctm * model.nested_matrix;

    if model.debug {
        log::debug!("rendering model \"{}\"", model.name);
    }

    if check_geometry(model) {
        // Clipping appends vertices and colors, so every render pass works
        // on its own copy; a model shared between parents stays pristine.
        let mut copy = model.clone();
        copy.vertices = model_to_view(&copy.vertices, &ctm);
        copy.vertices = view_to_camera(&copy.vertices, &camera.normalize_matrix);
        copy.vertices = project(&copy.vertices, camera.perspective);

        let mut segments = std::mem::take(&mut copy.segments);
        for segment in &mut segments {
            if clip(&mut copy, segment)? {
                rasterize(&copy, segment, options, sink);
            }
        }
    }

    for nested in &model.nested {
        let nested = nested.borrow();
        if nested.visible {
            render_model(camera, &nested, &ctm, options, sink)?;
        }
    }
    Ok(())
}

/// Best-effort validation: a model whose segments cannot be resolved gets a
/// warning and its draws skipped rather than an abort.
fn check_geometry(model: &Model) -> bool {
    if !model.segments.is_empty() && (model.vertices.is_empty() || model.colors.is_empty()) {
        log::warn!(
            "model \"{}\" has line segments but an empty vertex or color list; skipping its draws",
            model.name
        );
        return false;
    }
    if model.segments.is_empty() && !model.vertices.is_empty() {
        log::warn!("model \"{}\" has vertices but no line segments", model.name);
    }
    !model.segments.is_empty()
}

/// Transform every vertex into view space with the accumulated CTM. A pure,
/// full-homogeneous transform; no division happens here.
pub fn model_to_view(vertices: &[Vertex], ctm: &Matrix4<f32>) -> Vec<Vertex> {
    vertices.iter().map(|v| v.transformed(ctm)).collect()
}

/// Map view space onto the camera's canonical view volume.
pub fn view_to_camera(vertices: &[Vertex], normalize: &Matrix4<f32>) -> Vec<Vertex> {
    vertices.iter().map(|v| v.transformed(normalize)).collect()
}

/// Flatten onto the canonical view rectangle: the perspective divide puts
/// vertices on the `z = -1` plane, the parallel projection onto `z = 0`.
/// Perspective assumes all geometry sits at safely negative z; near-zero
/// depth is the scene author's responsibility and is not special-cased.
pub fn project(vertices: &[Vertex], perspective: bool) -> Vec<Vertex> {
    vertices
        .iter()
        .map(|v| {
            let p = v.position;
            if perspective {
                Vertex::new(p.x / -p.z, p.y / -p.z, -1.0)
            } else {
                Vertex::new(p.x, p.y, 0.0)
            }
        })
        .collect()
}
