use thiserror::Error;

/// Errors surfaced by the rendering pipeline.
///
/// Out-of-range line-segment indices and near-zero-z perspective divides
/// are precondition violations by the geometry provider and are not
/// recovered here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The clipper exhausted every boundary case, which only happens when a
    /// projected endpoint coordinate is NaN or infinite.
    #[error("line segment endpoint is not finite after projection: ({x0}, {y0})-({x1}, {y1})")]
    NonFiniteSegment { x0: f32, y0: f32, x1: f32, y1: f32 },
}
