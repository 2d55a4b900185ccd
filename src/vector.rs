//! The `Vector3` value type and its arithmetic.
//!
//! Every operation is available three ways: as a free function (`add`, `dot`, ...), as a method,
//! and, where one exists, as an operator. All three produce identical results.

use crate::{Error, Result};
use log::trace;
use num_traits::Zero;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// An xyz triple of `f32`s.
///
/// A point or a direction in three-dimensional space. There are no invariants on the fields: any
/// IEEE-754 value, including NaN and the infinities, may be stored and propagates through the
/// arithmetic as usual.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    /// X
    pub x: f32,

    /// Y
    pub y: f32,

    /// Z
    pub z: f32,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3 {
        x: 0.,
        y: 0.,
        z: 0.,
    };

    /// Creates a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3::Vector3;
    /// let vector = Vector3::new(1., 2., 3.);
    /// assert_eq!(1., vector.x);
    /// assert_eq!(2., vector.y);
    /// assert_eq!(3., vector.z);
    /// ```
    pub const fn new(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }

    /// Returns the dot product of this vector and another.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3::Vector3;
    /// let a = Vector3::new(1., 2., 3.);
    /// let b = Vector3::new(4., 5., 6.);
    /// assert_eq!(32., a.dot(b));
    /// ```
    pub fn dot(self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the euclidean length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3::Vector3;
    /// assert_eq!(5., Vector3::new(3., 4., 0.).length());
    /// ```
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// If the length is not positive (the zero vector, or a vector with a NaN component) the
    /// vector is returned unchanged. Use [Vector3::try_normalize] to get an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3::Vector3;
    /// let unit = Vector3::new(0., 0., 2.).normalize();
    /// assert_eq!(Vector3::new(0., 0., 1.), unit);
    /// assert_eq!(Vector3::ZERO, Vector3::ZERO.normalize());
    /// ```
    pub fn normalize(self) -> Vector3 {
        let length = self.length();
        if length > 0. {
            self * (1. / length)
        } else {
            trace!("normalize of {} left unchanged, length is {}", self, length);
            self
        }
    }

    /// Returns a unit vector pointing in the same direction, or an error if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3::{Error, Vector3};
    /// assert_eq!(Err(Error::ZeroLength), Vector3::ZERO.try_normalize());
    /// assert!(Vector3::new(1., 1., 0.).try_normalize().is_ok());
    /// ```
    pub fn try_normalize(self) -> Result<Vector3> {
        let length = self.length();
        if length > 0. {
            Ok(self * (1. / length))
        } else {
            Err(Error::ZeroLength)
        }
    }

    /// Returns the right-handed cross product of this vector and another.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3::Vector3;
    /// let x = Vector3::new(1., 0., 0.);
    /// let y = Vector3::new(0., 1., 0.);
    /// assert_eq!(Vector3::new(0., 0., 1.), x.cross(y));
    /// ```
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Are all three components finite?
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3::Vector3;
    /// assert!(Vector3::new(1., 2., 3.).is_finite());
    /// assert!(!Vector3::new(f32::NAN, 2., 3.).is_finite());
    /// ```
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Returns the component-wise sum of two vectors.
pub fn add(a: Vector3, b: Vector3) -> Vector3 {
    a + b
}

/// Returns the component-wise difference of two vectors.
pub fn subtract(a: Vector3, b: Vector3) -> Vector3 {
    a - b
}

/// Multiplies each component by `s`.
pub fn scale(v: Vector3, s: f32) -> Vector3 {
    v * s
}

/// Returns the dot product of two vectors.
pub fn dot(a: Vector3, b: Vector3) -> f32 {
    a.dot(b)
}

/// Returns the length of a vector.
pub fn length(v: Vector3) -> f32 {
    v.length()
}

/// Returns the vector scaled to unit length, or unchanged if its length is zero.
///
/// # Examples
///
/// ```
/// use vector3::{Vector3, normalize};
/// assert_eq!(Vector3::ZERO, normalize(Vector3::ZERO));
/// ```
pub fn normalize(v: Vector3) -> Vector3 {
    v.normalize()
}

/// Returns the cross product `a × b`.
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    a.cross(b)
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Vector3) {
        *self = *self + other;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Vector3) {
        *self = *self - other;
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, s: f32) -> Vector3 {
        Vector3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self * -1.
    }
}

impl Zero for Vector3 {
    fn zero() -> Vector3 {
        Vector3::ZERO
    }

    fn is_zero(&self) -> bool {
        self.x == 0. && self.y == 0. && self.z == 0.
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Vector3 {
        Vector3 { x, y, z }
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Vector3 {
        Vector3 { x, y, z }
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> [f32; 3] {
        [v.x, v.y, v.z]
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
