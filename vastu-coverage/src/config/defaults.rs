//! Default value functions for serde deserialization.

pub fn enabled() -> bool {
    true
}

pub fn fov_radius() -> f32 {
    0.17
}

pub fn path_eps() -> f32 {
    0.1
}

pub fn robot_to_fov() -> [f32; 2] {
    [0.0, 0.0]
}

pub fn diagonal_cost() -> f32 {
    std::f32::consts::SQRT_2
}

pub fn max_iterations() -> usize {
    200_000
}

pub fn two_opt_passes() -> usize {
    50
}
