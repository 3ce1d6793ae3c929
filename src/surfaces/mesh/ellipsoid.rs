use crate::core::data::vec3::Vec3;
use crate::surfaces::mesh::errors::MeshError;
use crate::surfaces::mesh::mesh::{Mesh, Triangle};
use std::f64::consts::PI;

pub const DEFAULT_U_RESOLUTION: u32 = 50;
pub const DEFAULT_V_RESOLUTION: u32 = 50;

/// Triangulated ellipsoid centred on the origin.
///
/// `u_resolution` points go around each ring of latitude and `v_resolution`
/// bands run from the +z pole to the -z pole. Triangles wind outwards.
pub fn parametric_ellipsoid(
    x_radius: f64,
    y_radius: f64,
    z_radius: f64,
    u_resolution: u32,
    v_resolution: u32,
) -> Result<Mesh, MeshError> {
    if u_resolution < 3 || v_resolution < 2 {
        return Err(MeshError::InvalidResolution {
            u: u_resolution,
            v: v_resolution,
        });
    }

    let rings = v_resolution - 1;
    let mut points = Vec::with_capacity((u_resolution * rings + 2) as usize);

    points.push(Vec3::new(0.0, 0.0, z_radius));
    for ring in 1..=rings {
        let v = PI * f64::from(ring) / f64::from(v_resolution);
        for step in 0..u_resolution {
            let u = 2.0 * PI * f64::from(step) / f64::from(u_resolution);
            points.push(Vec3::new(
                x_radius * v.sin() * u.cos(),
                y_radius * v.sin() * u.sin(),
                z_radius * v.cos(),
            ));
        }
    }
    points.push(Vec3::new(0.0, 0.0, -z_radius));

    let south = u_resolution * rings + 1;
    let at = |ring: u32, step: u32| 1 + (ring - 1) * u_resolution + step % u_resolution;

    let mut triangles: Vec<Triangle> = Vec::with_capacity((2 * u_resolution * rings) as usize);
    for step in 0..u_resolution {
        triangles.push([0, at(1, step), at(1, step + 1)]);
    }
    for ring in 1..rings {
        for step in 0..u_resolution {
            triangles.push([at(ring, step), at(ring + 1, step), at(ring + 1, step + 1)]);
            triangles.push([at(ring, step), at(ring + 1, step + 1), at(ring, step + 1)]);
        }
    }
    for step in 0..u_resolution {
        triangles.push([south, at(rings, step + 1), at(rings, step)]);
    }

    Mesh::new(points, triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_and_triangle_counts() {
        let mesh = parametric_ellipsoid(1.0, 0.35, 0.18, 8, 4).unwrap();

        assert_eq!(mesh.points().len(), 8 * 3 + 2);
        assert_eq!(mesh.triangles().len(), 2 * 8 * 3);
    }

    #[test]
    fn test_points_lie_on_surface() {
        let (a, b, c) = (1.0, 0.35, 0.18);
        let mesh = parametric_ellipsoid(a, b, c, 12, 6).unwrap();

        for p in mesh.points() {
            let value = (p.x / a).powi(2) + (p.y / b).powi(2) + (p.z / c).powi(2);
            assert!((value - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_extent_matches_radii() {
        let mesh = parametric_ellipsoid(1.0, 0.35, 0.18, 16, 8).unwrap();
        let (min, max) = mesh.bounds().unwrap();

        assert!((max.x - 1.0).abs() < 1e-9);
        assert!((min.z + 0.18).abs() < 1e-9);
        assert!((max.z - 0.18).abs() < 1e-9);
    }

    #[test]
    fn test_normals_point_outwards() {
        let mut mesh = parametric_ellipsoid(1.0, 0.35, 0.18, 16, 8).unwrap();
        mesh.update_normals();

        for (point, normal) in mesh.points().iter().zip(mesh.normals()) {
            assert!(point.dot(*normal) > 0.0);
        }
    }

    #[test]
    fn test_rejects_coarse_resolution() {
        assert_eq!(
            parametric_ellipsoid(1.0, 1.0, 1.0, 2, 8).unwrap_err(),
            MeshError::InvalidResolution { u: 2, v: 8 }
        );
    }
}
