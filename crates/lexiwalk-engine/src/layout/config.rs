/// Tunable layout policy, in world units (pixels at 1:1 zoom).
/// Fixed defaults; none of these are derived from candidate count or canvas
/// size, so the layout is deterministic for a given history of inputs.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Minimum center-to-center distance between any two displayed nodes.
    pub min_separation: f32,
    /// Maximum candidates per radius ring within one sector.
    pub ring_capacity: usize,
    /// Radius of the innermost candidate ring around the current word.
    pub base_radius: f32,
    /// Radius increment per overflow ring.
    pub ring_gap: f32,
    /// Horizontal spacing of the default path progression.
    pub path_spacing: f32,
    /// Vertical coordinate of the default path progression.
    pub path_y: f32,
    /// Collision search gives up after this many attempts and accepts the
    /// last position tried, even if it still overlaps.
    pub collision_attempts: u32,
    /// Radial growth per collision attempt.
    pub collision_radial_step: f32,
    /// Angular swing growth per pair of collision attempts, in radians.
    pub collision_angle_step: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_separation: 50.0,
            ring_capacity: 4,
            base_radius: 170.0,
            ring_gap: 80.0,
            path_spacing: 150.0,
            path_y: 0.0,
            collision_attempts: 24,
            collision_radial_step: 18.0,
            collision_angle_step: 0.22,
        }
    }
}
