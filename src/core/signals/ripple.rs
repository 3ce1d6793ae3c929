use crate::core::data::vec3::Vec3;

/// Vertical ripple that travels along x as frames advance:
/// `z' = z + amplitude * sin(time_scale * frame + x * spatial_frequency)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RippleDeformer {
    pub amplitude: f64,
    pub time_scale: f64,
    pub spatial_frequency: f64,
}

impl Default for RippleDeformer {
    fn default() -> Self {
        Self {
            amplitude: 0.02,
            time_scale: 0.2,
            spatial_frequency: 6.0,
        }
    }
}

impl RippleDeformer {
    /// Returns a displaced copy of `base`; the base cloud is never mutated.
    #[must_use]
    pub fn deform(&self, base: &[Vec3], frame_index: u32) -> Vec<Vec3> {
        let phase = self.time_scale * f64::from(frame_index);

        base.iter()
            .map(|point| Vec3 {
                z: point.z + self.amplitude * (phase + point.x * self.spatial_frequency).sin(),
                ..*point
            })
            .collect()
    }
}
