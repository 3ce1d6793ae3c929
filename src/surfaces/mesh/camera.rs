use crate::core::data::vec3::Vec3;

const DEFAULT_VIEW_ANGLE_DEG: f64 = 30.0;
const NEAR_PLANE: f64 = 1e-6;

/// Screen position plus distance along the view direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// Perspective camera looking from `position` at `focal_point`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    focal_point: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    view_angle_deg: f64,
}

impl Camera {
    #[must_use]
    pub fn look_at(position: Vec3, focal_point: Vec3, view_up: Vec3, view_angle_deg: f64) -> Self {
        let forward = (focal_point - position).normalized();
        let right = forward.cross(view_up).normalized();
        let up = right.cross(forward);

        Self {
            position,
            focal_point,
            forward,
            right,
            up,
            view_angle_deg,
        }
    }

    /// Isometric view along (1, 1, 1) with +z up, backed off until the
    /// bounding sphere of `min..max` fits the view angle.
    #[must_use]
    pub fn isometric(min: Vec3, max: Vec3) -> Self {
        let centre = (min + max) * 0.5;
        let radius = ((max - min) * 0.5).length().max(f64::EPSILON);
        let half_angle = (DEFAULT_VIEW_ANGLE_DEG / 2.0).to_radians();
        let distance = radius / half_angle.sin();
        let direction = Vec3::new(1.0, 1.0, 1.0).normalized();

        Self::look_at(
            centre + direction * distance,
            centre,
            Vec3::new(0.0, 0.0, 1.0),
            DEFAULT_VIEW_ANGLE_DEG,
        )
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub fn focal_point(&self) -> Vec3 {
        self.focal_point
    }

    /// Unit vector from the camera towards the focal point.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.forward
    }

    /// Projects onto a `width` x `height` viewport. The vertical view angle
    /// spans the full height; points behind the camera yield `None`.
    #[must_use]
    pub fn project(&self, point: Vec3, width: u32, height: u32) -> Option<ProjectedPoint> {
        let relative = point - self.position;
        let depth = relative.dot(self.forward);
        if depth <= NEAR_PLANE {
            return None;
        }

        let half_height = (self.view_angle_deg / 2.0).to_radians().tan() * depth;
        let scale = f64::from(height) / 2.0 / half_height;

        Some(ProjectedPoint {
            x: f64::from(width) / 2.0 + relative.dot(self.right) * scale,
            y: f64::from(height) / 2.0 - relative.dot(self.up) * scale,
            depth,
        })
    }
}
