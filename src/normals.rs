//! Per-vertex normals for indexed triangle meshes.

use crate::{Error, Result, Vector3};
use log::warn;
use num_traits::Zero;

/// Computes a unit normal for every position from a triangle list.
///
/// Each triangle `(a, b, c)` contributes `(b - a) × (c - a)` to its three vertices, so larger
/// triangles weigh more. The sums are then normalized. A vertex that no triangle touches, or that
/// only touches zero-area triangles, keeps the zero vector.
///
/// The indices are checked before anything is computed.
///
/// # Examples
///
/// ```
/// use vector3::{Vector3, vertex_normals};
/// let positions = [
///     Vector3::new(0., 0., 0.),
///     Vector3::new(1., 0., 0.),
///     Vector3::new(0., 1., 0.),
/// ];
/// let normals = vertex_normals(&positions, &[0, 1, 2]).unwrap();
/// assert_eq!(vec![Vector3::new(0., 0., 1.); 3], normals);
/// ```
pub fn vertex_normals(positions: &[Vector3], indices: &[u32]) -> Result<Vec<Vector3>> {
    if indices.len() % 3 != 0 {
        return Err(Error::IncompleteTriangle(indices.len()));
    }
    if let Some(&index) = indices
        .iter()
        .find(|&&index| index as usize >= positions.len())
    {
        return Err(Error::IndexOutOfRange {
            index,
            len: positions.len(),
        });
    }

    let mut normals = vec![Vector3::ZERO; positions.len()];
    let mut degenerate = 0usize;
    for triangle in indices.chunks_exact(3) {
        let (a, b, c) = (
            triangle[0] as usize,
            triangle[1] as usize,
            triangle[2] as usize,
        );
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        if face.is_zero() {
            degenerate += 1;
            continue;
        }
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    if degenerate > 0 {
        warn!(
            "{} of {} triangles have zero area",
            degenerate,
            indices.len() / 3
        );
    }
    for normal in &mut normals {
        *normal = normal.normalize();
    }
    Ok(normals)
}
