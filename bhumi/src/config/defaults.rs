//! Default value functions for serde deserialization.

pub fn frame_id() -> String {
    "velodyne".to_string()
}

pub fn radial_bins() -> usize {
    60
}

pub fn angular_bins() -> usize {
    180
}

pub fn radial_resolution() -> f32 {
    0.4
}

pub fn height_threshold() -> f32 {
    0.15
}

pub fn plane_tolerance() -> f32 {
    0.2
}

pub fn max_iterations() -> usize {
    500
}

pub fn min_passage_width() -> f32 {
    1.7
}

pub fn min_clip_radius() -> f32 {
    1.6
}

pub fn cell_size() -> f32 {
    0.2
}

pub fn lateral_cells() -> usize {
    50
}

pub fn forward_cells() -> usize {
    100
}

pub fn mount_offsets() -> [f32; 4] {
    [0.9, 0.65, -0.3, -1.05]
}

pub fn lateral_baseline() -> f32 {
    0.75
}

pub fn proximity_max_range() -> f32 {
    5.0
}
