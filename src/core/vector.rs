//! Dimensioned 3-component vectors backed by [`glam::Vec3`].
//!
//! `Vec3<U>` is an immutable value type: every operation returns a new vector.
//! Component math is delegated to glam; the unit tag rides along in the type
//! and is checked by the same product/quotient tables as [`Quantity`].

use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::units::{
    DivUnit, Meters, MetersPerSecond, MulUnit, Quantity, Radians, Scalar, Unit,
};

/// A 3-vector whose components all carry the unit `U`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""), transparent)]
pub struct Vec3<U: Unit> {
    raw: glam::Vec3,
    #[serde(skip)]
    _unit: PhantomData<U>,
}

/// A point in world or part-local space.
pub type Position = Vec3<Meters>;
/// A linear velocity.
pub type Velocity = Vec3<MetersPerSecond>;
/// A dimensionless direction; not necessarily normalized.
pub type Direction = Vec3<Scalar>;

impl<U: Unit> Vec3<U> {
    pub const ZERO: Self = Self::from_raw(glam::Vec3::ZERO);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_raw(glam::Vec3::new(x, y, z))
    }

    pub const fn from_raw(raw: glam::Vec3) -> Self {
        Self {
            raw,
            _unit: PhantomData,
        }
    }

    /// The untagged glam vector. Interop escape hatch, like [`Quantity::raw`].
    pub const fn raw(self) -> glam::Vec3 {
        self.raw
    }

    pub fn x(self) -> Quantity<U> {
        Quantity::new(self.raw.x)
    }

    pub fn y(self) -> Quantity<U> {
        Quantity::new(self.raw.y)
    }

    pub fn z(self) -> Quantity<U> {
        Quantity::new(self.raw.z)
    }

    pub fn is_zero(self) -> bool {
        self.raw == glam::Vec3::ZERO
    }

    pub fn dot<R: Unit>(self, rhs: Vec3<R>) -> Quantity<<U as MulUnit<R>>::Output>
    where
        U: MulUnit<R>,
    {
        Quantity::new(self.raw.dot(rhs.raw))
    }

    pub fn cross<R: Unit>(self, rhs: Vec3<R>) -> Vec3<<U as MulUnit<R>>::Output>
    where
        U: MulUnit<R>,
    {
        Vec3::from_raw(self.raw.cross(rhs.raw))
    }

    pub fn length(self) -> Quantity<U> {
        Quantity::new(self.raw.length())
    }

    pub fn length_squared(self) -> Quantity<<U as MulUnit<U>>::Output>
    where
        U: MulUnit<U>,
    {
        Quantity::new(self.raw.length_squared())
    }

    pub fn distance(self, other: Self) -> Quantity<U> {
        Quantity::new(self.raw.distance(other.raw))
    }

    /// Unit-length direction of this vector. The zero vector normalizes to
    /// zero rather than NaN, matching the reference behavior the rest of the
    /// engine relies on.
    pub fn normalize(self) -> Direction {
        Vec3::from_raw(self.raw.normalize_or_zero())
    }

    /// Shortens the vector to `limit` if it is longer; direction is kept.
    pub fn clamp_length(self, limit: Quantity<U>) -> Self
    where
        U: MulUnit<U>,
    {
        if self.length_squared() <= limit.squared() {
            self
        } else {
            Self::from_raw(self.raw.normalize_or_zero() * limit.raw())
        }
    }

    /// Drops the z component, projecting onto the XY plane.
    pub fn project_onto_xy(self) -> Self {
        Self::new(self.raw.x, self.raw.y, 0.0)
    }

    /// Rotates around the world Z axis.
    pub fn rotate_around_z(self, angle: Quantity<Radians>) -> Self {
        let (sin, cos) = angle.raw().sin_cos();
        Self::new(
            cos * self.raw.x - sin * self.raw.y,
            sin * self.raw.x + cos * self.raw.y,
            self.raw.z,
        )
    }
}

impl<U: Unit> Add for Vec3<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw + rhs.raw)
    }
}

impl<U: Unit> Sub for Vec3<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw - rhs.raw)
    }
}

impl<U: Unit> Neg for Vec3<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_raw(-self.raw)
    }
}

/// Scaling by a quantity multiplies the units: `Vec3<m/s> * Quantity<s> = Vec3<m>`.
impl<U, F> Mul<Quantity<F>> for Vec3<U>
where
    U: Unit + MulUnit<F>,
    F: Unit,
{
    type Output = Vec3<<U as MulUnit<F>>::Output>;

    fn mul(self, factor: Quantity<F>) -> Self::Output {
        Vec3::from_raw(self.raw * factor.raw())
    }
}

impl<U, F> Div<Quantity<F>> for Vec3<U>
where
    U: Unit + DivUnit<F>,
    F: Unit,
{
    type Output = Vec3<<U as DivUnit<F>>::Output>;

    fn div(self, divisor: Quantity<F>) -> Self::Output {
        Vec3::from_raw(self.raw / divisor.raw())
    }
}
