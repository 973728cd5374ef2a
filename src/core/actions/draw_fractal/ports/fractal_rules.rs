use crate::core::actions::draw_fractal::draw_fractal::Recursion;
use crate::core::actions::draw_fractal::ports::drawing_surface::DrawingSurface;
use crate::core::data::descriptor::Descriptor;

/// The geometric recipe of one fractal. The recursion itself (depth
/// tracking, choosing between the two rules, colouring) belongs to
/// [`Recursion`]; implementors only describe shapes.
pub trait FractalRules {
    /// Seeds the recursion, calling [`Recursion::recurse`] at level 0 once
    /// per initial descriptor.
    fn start<S: DrawingSurface + ?Sized>(&self, recursion: &mut Recursion<'_, S>);

    /// Draws the base primitive for `descriptor`.
    fn terminal<S: DrawingSurface + ?Sized>(
        &self,
        recursion: &mut Recursion<'_, S>,
        descriptor: Descriptor,
        level: u32,
    );

    /// Draws whatever is visible at `level` and recurses into the children
    /// at `level + 1`.
    fn subdivide<S: DrawingSurface + ?Sized>(
        &self,
        recursion: &mut Recursion<'_, S>,
        descriptor: Descriptor,
        level: u32,
    );
}
