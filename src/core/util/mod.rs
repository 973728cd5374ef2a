pub mod angle_to_vector;
pub mod gradient;
