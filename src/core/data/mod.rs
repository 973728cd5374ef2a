pub mod colour;
pub mod descriptor;
pub mod display_list;
pub mod draw_stats;
pub mod palette;
pub mod point;
pub mod render_config;
