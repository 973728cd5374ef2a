/// Side of the square world every seed is laid out in: `3^5 * 2`, so that
/// repeated thirds and halves stay whole for several levels.
pub const CANVAS_SIZE: f64 = (3_u32.pow(5) * 2) as f64;
