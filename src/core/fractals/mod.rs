pub mod canvas;
pub mod cantor_set;
pub mod fractal_kinds;
pub mod fractal_tree;
pub mod koch_line;
pub mod koch_snowflake;
pub mod sierpinski_carpet;
