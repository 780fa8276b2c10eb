use crate::core::Viewport;
use crate::error::RondoResult;
use crate::imgsize::probe_size;
use crate::markup::render_document;
use crate::model::Storyboard;
use crate::patterns::{self, Choreography};

/// Resolve the drawing surface for a storyboard.
///
/// An explicit viewport wins. Without one, the first slide is asked for its
/// intrinsic size; sources that cannot be measured at compile time leave the
/// surface zero-sized, which still produces valid markup (travel distances
/// are never zero).
pub fn resolve_viewport(storyboard: &Storyboard) -> Viewport {
    if let Some(viewport) = storyboard.viewport {
        return viewport;
    }
    storyboard
        .slides
        .first()
        .and_then(|slide| probe_size(&slide.url).viewport())
        .unwrap_or(Viewport::ZERO)
}

/// Plan the layered scene for a storyboard: validation, viewport
/// resolution, scheduling and pattern layout.
#[tracing::instrument(skip(storyboard))]
pub fn plan_storyboard(storyboard: &Storyboard) -> RondoResult<Choreography> {
    let viewport = resolve_viewport(storyboard);
    patterns::plan(storyboard, viewport)
}

/// One storyboard in, one self-contained SVG document out.
#[tracing::instrument(skip(storyboard))]
pub fn compile_storyboard(storyboard: &Storyboard) -> RondoResult<String> {
    let plan = plan_storyboard(storyboard)?;
    render_document(&plan)
}
