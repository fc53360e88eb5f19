/// Recursive line-segment clipping against the canonical view rectangle
use crate::color;
use crate::error::RenderError;
use crate::geometry::{LineSegment, Model, Vertex};

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Clip a projected line segment against `[-1, 1] x [-1, 1]`.
///
/// Returns `Ok(true)` when the (possibly shortened) segment should be
/// rasterized and `Ok(false)` when it lies fully outside. Each recursion
/// removes one boundary violation from one endpoint, so the call chain is
/// at most four deep for finite input; running out of cases means a NaN or
/// infinite coordinate and is reported as an error.
///
/// Clipping an endpoint appends the interpolated vertex and color to the
/// model's lists and repoints that endpoint's index pair, so this must only
/// ever run against the pipeline's private model copy.
pub fn clip(model: &mut Model, segment: &mut LineSegment) -> Result<bool, RenderError> {
    let p0 = model.vertices[segment.vertices[0]].position;
    let p1 = model.vertices[segment.vertices[1]].position;
    let (x0, y0) = (p0.x, p0.y);
    let (x1, y1) = (p1.x, p1.y);

    if model.debug {
        log::debug!("clip: ({x0}, {y0})-({x1}, {y1})");
    }

    // Trivial accept: both endpoints inside the canonical rectangle.
    if x0.abs() <= 1.0 && y0.abs() <= 1.0 && x1.abs() <= 1.0 && y1.abs() <= 1.0 {
        return Ok(true);
    }

    // Trivial reject: both endpoints beyond the same single boundary.
    if (x0 > 1.0 && x1 > 1.0)
        || (x0 < -1.0 && x1 < -1.0)
        || (y0 > 1.0 && y1 > 1.0)
        || (y0 < -1.0 && y1 < -1.0)
    {
        return Ok(false);
    }

    // Clip exactly one boundary, in fixed order, then re-examine the
    // shortened segment.
    if x0 > 1.0 || x1 > 1.0 {
        clip_boundary(model, segment, Axis::X, 1.0);
    } else if x0 < -1.0 || x1 < -1.0 {
        clip_boundary(model, segment, Axis::X, -1.0);
    } else if y0 > 1.0 || y1 > 1.0 {
        clip_boundary(model, segment, Axis::Y, 1.0);
    } else if y0 < -1.0 || y1 < -1.0 {
        clip_boundary(model, segment, Axis::Y, -1.0);
    } else {
        // Neither accept, reject, nor any boundary test matched.
        return Err(RenderError::NonFiniteSegment { x0, y0, x1, y1 });
    }
    clip(model, segment)
}

/// Replace the endpoint outside `axis = bound` with its intersection on the
/// boundary, interpolating position and color at the same parameter.
fn clip_boundary(model: &mut Model, segment: &mut LineSegment, axis: Axis, bound: f32) {
    let p0 = model.vertices[segment.vertices[0]].position;
    let p1 = model.vertices[segment.vertices[1]].position;
    let (a0, a1) = match axis {
        Axis::X => (p0.x, p1.x),
        Axis::Y => (p0.y, p1.y),
    };

    // The trivial-reject test already ruled out both endpoints violating
    // this boundary, so exactly one is outside.
    let outside_violates_0 = if bound > 0.0 { a0 > bound } else { a0 < bound };
    let (outside, inside) = if outside_violates_0 { (0, 1) } else { (1, 0) };
    let (p_out, p_in) = if outside == 0 { (p0, p1) } else { (p1, p0) };
    let (a_out, a_in) = if outside == 0 { (a0, a1) } else { (a1, a0) };

    let t = (bound - a_out) / (a_in - a_out);
    // The clipped coordinate lands exactly on the boundary; the other axis
    // is interpolated and z carries through the projection plane unchanged.
    let (x, y) = match axis {
        Axis::X => (bound, (1.0 - t) * p_out.y + t * p_in.y),
        Axis::Y => ((1.0 - t) * p_out.x + t * p_in.x, bound),
    };
    let vertex = Vertex::new(x, y, p_out.z);
    let color = color::lerp(
        model.colors[segment.colors[outside]],
        model.colors[segment.colors[inside]],
        t as f64,
    );

    if model.debug {
        log::debug!("clip at {axis:?} = {bound} with t = {t}: new endpoint ({x}, {y})");
    }

    model.vertices.push(vertex);
    model.colors.push(color);
    segment.vertices[outside] = model.vertices.len() - 1;
    segment.colors[outside] = model.colors.len() - 1;
}
