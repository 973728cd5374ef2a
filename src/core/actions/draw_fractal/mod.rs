#[allow(clippy::module_inception)]
pub mod draw_fractal;
pub mod draw_fractals_rayon;
pub mod ports;
