//! UV sphere meshes.

use crate::{Error, Result, Vector3};
use log::debug;
use std::f64::consts::PI;

/// A UV sphere centered on the origin, with the poles on the y axis.
///
/// The mesh is a grid of `width_segments + 1` by `height_segments + 1` vertices. The first and
/// last column share positions along the seam and each pole row collapses onto a single point,
/// so every vertex has exactly one texture coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    /// The radius.
    pub radius: f32,

    /// The number of segments around the y axis.
    pub width_segments: u32,

    /// The number of segments from pole to pole.
    pub height_segments: u32,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3::Sphere;
    /// let sphere = Sphere::new(5., 256, 256);
    /// assert_eq!(257 * 257, sphere.vertex_count().unwrap());
    /// ```
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Sphere {
        Sphere {
            radius,
            width_segments,
            height_segments,
        }
    }

    /// Returns the number of vertices in this sphere's mesh.
    ///
    /// Returns an error if either segment count is zero, or if the vertices can't all be addressed
    /// by a `u32` index.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3::Sphere;
    /// assert_eq!(33 * 17, Sphere::default().vertex_count().unwrap());
    /// assert!(Sphere::new(1., 0, 16).vertex_count().is_err());
    /// ```
    pub fn vertex_count(&self) -> Result<u32> {
        if self.width_segments == 0 || self.height_segments == 0 {
            return Err(Error::InvalidSegments {
                width: self.width_segments,
                height: self.height_segments,
            });
        }
        let count = (u64::from(self.width_segments) + 1) * (u64::from(self.height_segments) + 1);
        u32::try_from(count).map_err(|_| Error::TooManyVertices(count))
    }

    /// Returns the vertex positions, row by row from the +y pole to the -y pole.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3::{Sphere, Vector3};
    /// let positions = Sphere::new(2., 8, 4).positions().unwrap();
    /// assert_eq!(Vector3::new(0., 2., 0.), positions[0]);
    /// ```
    pub fn positions(&self) -> Result<Vec<Vector3>> {
        let count = self.vertex_count()?;
        let radius = f64::from(self.radius);
        let mut positions = Vec::with_capacity(count as usize);
        for y in 0..=self.height_segments {
            let theta = f64::from(y) / f64::from(self.height_segments) * PI;
            let (sin_theta, cos_theta) = theta.sin_cos();
            for x in 0..=self.width_segments {
                let phi = f64::from(x) / f64::from(self.width_segments) * 2. * PI;
                let (sin_phi, cos_phi) = phi.sin_cos();
                positions.push(Vector3::new(
                    (radius * sin_theta * cos_phi) as f32,
                    (radius * cos_theta) as f32,
                    (radius * sin_theta * sin_phi) as f32,
                ));
            }
        }
        debug!(
            "generated {} sphere positions ({}x{} segments)",
            positions.len(),
            self.width_segments,
            self.height_segments
        );
        Ok(positions)
    }

    /// Returns the triangle indices, two triangles per grid cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3::Sphere;
    /// let indices = Sphere::new(1., 2, 1).indices().unwrap();
    /// assert_eq!(vec![0, 1, 3, 1, 4, 3, 1, 2, 4, 2, 5, 4], indices);
    /// ```
    pub fn indices(&self) -> Result<Vec<u32>> {
        let _ = self.vertex_count()?;
        let stride = self.width_segments + 1;
        let mut indices =
            Vec::with_capacity(6 * self.width_segments as usize * self.height_segments as usize);
        for y in 0..self.height_segments {
            for x in 0..self.width_segments {
                let i0 = y * stride + x;
                let i1 = i0 + 1;
                let i2 = i0 + stride;
                let i3 = i2 + 1;
                indices.extend_from_slice(&[i0, i1, i2, i1, i3, i2]);
            }
        }
        debug!("generated {} sphere indices", indices.len());
        Ok(indices)
    }
}

impl Default for Sphere {
    fn default() -> Sphere {
        Sphere {
            radius: 1.,
            width_segments: 32,
            height_segments: 16,
        }
    }
}
