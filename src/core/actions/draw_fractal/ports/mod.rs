pub mod drawing_surface;
pub mod fractal_rules;
