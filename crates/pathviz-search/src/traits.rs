use pathviz_core::Grid;

/// Render hook invoked by the search after every exploration step and after
/// each cell marked during path reconstruction.
///
/// Implementations read cell tags to redraw; they only ever see the grid
/// through a shared reference.
pub trait StepObserver {
    fn on_step(&mut self, grid: &Grid);
}

impl<F: FnMut(&Grid)> StepObserver for F {
    #[inline]
    fn on_step(&mut self, grid: &Grid) {
        self(grid)
    }
}

impl StepObserver for () {
    #[inline]
    fn on_step(&mut self, _grid: &Grid) {}
}

/// An observer that ignores every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    #[inline]
    fn on_step(&mut self, _grid: &Grid) {}
}
