//! Navigation controller
//!
//! Turns an indicator activation into a programmatic scroll. The controller
//! only moves the scroll offset; the active index follows once the induced
//! scrolling settles.

use crate::error::{CarouselError, Result};
use crate::surface::ScrollSurface;
use crate::viewport::Viewport;

/// Scroll offset for item `index`
pub fn target_offset(viewport: &Viewport, index: usize) -> Result<f32> {
    if viewport.is_empty() {
        return Err(CarouselError::EmptyCatalog);
    }
    if index >= viewport.len() {
        return Err(CarouselError::InvalidIndex {
            index,
            len: viewport.len(),
        });
    }
    let extent = viewport
        .measured_extent()
        .ok_or(CarouselError::NoGeometry)?;
    Ok(extent.offset_of(index))
}

/// Request a scroll to item `index`.
///
/// Returns the target offset and whether the offset already moved (instant
/// scrolling). Nothing is mutated on error.
pub fn navigate(
    viewport: &Viewport,
    surface: &mut ScrollSurface,
    index: usize,
    now_ms: f64,
) -> Result<(f32, bool)> {
    let target = target_offset(viewport, index)?;
    tracing::debug!(index, target, "navigate");
    let moved = surface.scroll_to(target, now_ms);
    Ok((target, moved))
}
