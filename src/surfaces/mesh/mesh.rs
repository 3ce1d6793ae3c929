use crate::core::data::vec3::Vec3;
use crate::surfaces::mesh::errors::MeshError;
use rayon::prelude::*;

pub type Triangle = [u32; 3];

/// Triangle mesh with cached vertex normals.
///
/// Replacing the points does not invalidate the normals by itself; callers
/// signal the change with [`Mesh::mark_modified`], and the next
/// [`Mesh::update_normals`] recomputes them.
#[derive(Debug, Clone)]
pub struct Mesh {
    points: Vec<Vec3>,
    triangles: Vec<Triangle>,
    normals: Vec<Vec3>,
    modified: bool,
}

impl Mesh {
    pub fn new(points: Vec<Vec3>, triangles: Vec<Triangle>) -> Result<Self, MeshError> {
        for (triangle, indices) in triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= points.len()) {
                return Err(MeshError::TriangleIndexOutOfRange {
                    triangle,
                    index,
                    point_count: points.len(),
                });
            }
        }

        let normals = vec![Vec3::default(); points.len()];

        Ok(Self {
            points,
            triangles,
            normals,
            modified: true,
        })
    }

    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[must_use]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Replaces every point position. The count must stay the same since the
    /// triangles index into it.
    pub fn set_points(&mut self, points: Vec<Vec3>) -> Result<(), MeshError> {
        if points.len() != self.points.len() {
            return Err(MeshError::PointCountMismatch {
                expected: self.points.len(),
                actual: points.len(),
            });
        }

        self.points = points;
        Ok(())
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    /// Recomputes area-weighted vertex normals when the mesh was marked
    /// modified. Returns whether anything was recomputed.
    pub fn update_normals(&mut self) -> bool {
        if !self.modified {
            return false;
        }

        let points = &self.points;
        let face_normals: Vec<Vec3> = self
            .triangles
            .par_iter()
            .map(|&[a, b, c]| {
                let (a, b, c) = (points[a as usize], points[b as usize], points[c as usize]);
                (b - a).cross(c - a)
            })
            .collect();

        let mut normals = vec![Vec3::default(); points.len()];
        for (triangle, face_normal) in self.triangles.iter().zip(&face_normals) {
            for &index in triangle {
                normals[index as usize] = normals[index as usize] + *face_normal;
            }
        }

        normals.par_iter_mut().for_each(|normal| *normal = normal.normalized());

        self.normals = normals;
        self.modified = false;
        true
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.points.first()?;

        Some(self.points.iter().fold((first, first), |(min, max), p| {
            (
                Vec3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Vec3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            )
        }))
    }
}
