//! A three-component `f32` vector, and the mesh helpers that are built on it.
//!
//! # Vectors
//!
//! Create a `Vector3` from three scalars, an array, or a tuple:
//!
//! ```
//! use vector3::Vector3;
//! let a = Vector3::new(1., 2., 3.);
//! let b = Vector3::from([4., 5., 6.]);
//! let c: Vector3 = (7., 8., 9.).into();
//! ```
//!
//! Every operation is a free function, a method, and (where it makes sense) an operator:
//!
//! ```
//! use vector3::{Vector3, add, cross, dot};
//! let a = Vector3::new(1., 1., 1.);
//! let b = Vector3::new(2., 2., 2.);
//! assert_eq!(add(a, b), a + b);
//! assert_eq!(Vector3::new(3., 3., 3.), a + b);
//! assert_eq!(Vector3::new(2., 2., 2.), b * 1.);
//! assert_eq!(6., dot(a, b));
//! assert_eq!(Vector3::ZERO, cross(a, b));
//! ```
//!
//! ## Normalizing
//!
//! `normalize` leaves a vector with no length untouched, rather than filling it with NaNs:
//!
//! ```
//! use vector3::Vector3;
//! assert_eq!(Vector3::ZERO, Vector3::ZERO.normalize());
//! ```
//!
//! Use `try_normalize` if that case is an error for you:
//!
//! ```
//! use vector3::{Error, Vector3};
//! assert_eq!(Err(Error::ZeroLength), Vector3::ZERO.try_normalize());
//! ```
//!
//! # Meshes
//!
//! Generate a UV sphere and its vertex normals:
//!
//! ```
//! use vector3::{Sphere, vertex_normals};
//! let sphere = Sphere::new(5., 64, 32);
//! let positions = sphere.positions().unwrap();
//! let indices = sphere.indices().unwrap();
//! let normals = vertex_normals(&positions, &indices).unwrap();
//! assert_eq!(positions.len(), normals.len());
//! ```
//!
//! Flatten vectors for a GPU buffer with the array conversion:
//!
//! ```
//! use vector3::Sphere;
//! let positions = Sphere::default().positions().unwrap();
//! let buffer: Vec<f32> = positions.into_iter().flat_map(<[f32; 3]>::from).collect();
//! assert_eq!(33 * 17 * 3, buffer.len());
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

mod error;
mod normals;
mod sphere;
mod vector;

pub use error::Error;
pub use normals::vertex_normals;
pub use sphere::Sphere;
pub use vector::{Vector3, add, cross, dot, length, normalize, scale, subtract};

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
