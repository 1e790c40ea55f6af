//! Compile-time-checked units of measure layered over `f32`.
//!
//! Every physical scalar in the engine is a [`Quantity`] tagged with a unit
//! marker. Adding meters to seconds, or forgetting to divide a distance by a
//! velocity before treating it as a time, fails to compile. Only the unit
//! combinations the engine actually performs are listed in the product and
//! quotient tables below; an unlisted combination is a compile error.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Marker trait for unit tags.
pub trait Unit:
    Copy + Clone + fmt::Debug + Default + PartialEq + PartialOrd + Send + Sync + 'static
{
    /// Symbol used when formatting quantities, e.g. `"m/s"`.
    const SYMBOL: &'static str;
}

/// Type-level product table: `Self * Rhs = Output`.
pub trait MulUnit<Rhs: Unit>: Unit {
    type Output: Unit;
}

/// Type-level quotient table: `Self / Rhs = Output`.
pub trait DivUnit<Rhs: Unit>: Unit {
    type Output: Unit;
}

/// Units with an exact square root, e.g. `m^2` to `m`.
pub trait SqrtUnit: Unit {
    type Output: Unit;
}

macro_rules! units {
    ($($(#[$doc:meta])* $name:ident => $symbol:literal),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
            pub struct $name;

            impl Unit for $name {
                const SYMBOL: &'static str = $symbol;
            }
        )+
    };
}

units! {
    /// Dimensionless ratio or direction component.
    Scalar => "",
    /// Plane angle.
    Radians => "rad",
    Meters => "m",
    SquareMeters => "m^2",
    CubicMeters => "m^3",
    QuarticMeters => "m^4",
    /// Distance scaled by a duration; shows up as an intermediate when a
    /// time-of-impact is recovered from a distance ratio.
    MeterSeconds => "m*s",
    Seconds => "s",
    Kilograms => "kg",
    /// Linear momentum.
    KilogramMetersPerSecond => "kg*m/s",
    MetersPerSecond => "m/s",
    SquareMetersPerSquareSecond => "m^2/s^2",
    MetersPerSquaredSecond => "m/s^2",
    /// Velocity change per unit mass; the intermediate of an impulse exchange.
    MetersPerSecondPerKilogram => "m/s/kg",
}

/// `$a * $b = $c`, and therefore `$c / $b = $a`.
macro_rules! unit_product {
    ($a:ty, $b:ty => $c:ty) => {
        impl MulUnit<$b> for $a {
            type Output = $c;
        }
        impl DivUnit<$b> for $c {
            type Output = $a;
        }
    };
}

/// Scalar is the multiplicative identity; every unit divided by itself is Scalar.
macro_rules! unit_scalar_rules {
    ($($u:ty),+ $(,)?) => {
        $(
            impl MulUnit<Scalar> for $u {
                type Output = $u;
            }
            impl MulUnit<$u> for Scalar {
                type Output = $u;
            }
            impl DivUnit<Scalar> for $u {
                type Output = $u;
            }
            impl DivUnit<$u> for $u {
                type Output = Scalar;
            }
        )+
    };
}

unit_scalar_rules!(
    Radians,
    Meters,
    SquareMeters,
    CubicMeters,
    QuarticMeters,
    MeterSeconds,
    Seconds,
    Kilograms,
    KilogramMetersPerSecond,
    MetersPerSecond,
    SquareMetersPerSquareSecond,
    MetersPerSquaredSecond,
    MetersPerSecondPerKilogram,
);

impl MulUnit<Scalar> for Scalar {
    type Output = Scalar;
}
impl DivUnit<Scalar> for Scalar {
    type Output = Scalar;
}

unit_product!(Meters, Meters => SquareMeters);
unit_product!(SquareMeters, Meters => CubicMeters);
unit_product!(Meters, SquareMeters => CubicMeters);
unit_product!(SquareMeters, SquareMeters => QuarticMeters);

unit_product!(MetersPerSecond, Seconds => Meters);
unit_product!(Seconds, MetersPerSecond => Meters);
unit_product!(MetersPerSquaredSecond, Seconds => MetersPerSecond);
unit_product!(Seconds, MetersPerSquaredSecond => MetersPerSecond);

unit_product!(Meters, Seconds => MeterSeconds);
unit_product!(Seconds, Meters => MeterSeconds);

unit_product!(MetersPerSecond, MetersPerSecond => SquareMetersPerSquareSecond);

unit_product!(MetersPerSecond, Kilograms => KilogramMetersPerSecond);
unit_product!(Kilograms, MetersPerSecond => KilogramMetersPerSecond);

unit_product!(MetersPerSecondPerKilogram, Kilograms => MetersPerSecond);
unit_product!(Kilograms, MetersPerSecondPerKilogram => MetersPerSecond);

impl SqrtUnit for Scalar {
    type Output = Scalar;
}
impl SqrtUnit for SquareMeters {
    type Output = Meters;
}
impl SqrtUnit for QuarticMeters {
    type Output = SquareMeters;
}
impl SqrtUnit for SquareMetersPerSquareSecond {
    type Output = MetersPerSecond;
}

/// A scalar physical quantity tagged with its unit.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""), transparent)]
pub struct Quantity<U: Unit> {
    value: f32,
    #[serde(skip)]
    _unit: PhantomData<U>,
}

impl<U: Unit> Quantity<U> {
    pub const ZERO: Self = Self {
        value: 0.0,
        _unit: PhantomData,
    };

    pub const fn new(value: f32) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// Raw magnitude, stripped of its unit. The escape hatch for display and
    /// interop; arithmetic should stay inside the unit system.
    pub const fn raw(self) -> f32 {
        self.value
    }

    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(self.value.min(other.value))
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(self.value.max(other.value))
    }

    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        Self::new(self.value.clamp(lo.value, hi.value))
    }

    pub fn is_zero(self) -> bool {
        self.value == 0.0
    }

    pub fn squared(self) -> Quantity<U::Output>
    where
        U: MulUnit<U>,
    {
        Quantity::new(self.value * self.value)
    }

    pub fn sqrt(self) -> Quantity<<U as SqrtUnit>::Output>
    where
        U: SqrtUnit,
    {
        Quantity::new(self.value.sqrt())
    }
}

impl<U: Unit> fmt::Debug for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, U::SYMBOL)
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if U::SYMBOL.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, U::SYMBOL)
        }
    }
}

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<U, R> Mul<Quantity<R>> for Quantity<U>
where
    U: Unit + MulUnit<R>,
    R: Unit,
{
    type Output = Quantity<<U as MulUnit<R>>::Output>;

    fn mul(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

impl<U, R> Div<Quantity<R>> for Quantity<U>
where
    U: Unit + DivUnit<R>,
    R: Unit,
{
    type Output = Quantity<<U as DivUnit<R>>::Output>;

    fn div(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::new(self.value / rhs.value)
    }
}

pub fn scalar(value: f32) -> Quantity<Scalar> {
    Quantity::new(value)
}

pub fn radians(value: f32) -> Quantity<Radians> {
    Quantity::new(value)
}

pub fn meters(value: f32) -> Quantity<Meters> {
    Quantity::new(value)
}

pub fn seconds(value: f32) -> Quantity<Seconds> {
    Quantity::new(value)
}

pub fn kilograms(value: f32) -> Quantity<Kilograms> {
    Quantity::new(value)
}

pub fn meters_per_second(value: f32) -> Quantity<MetersPerSecond> {
    Quantity::new(value)
}

pub fn meters_per_squared_second(value: f32) -> Quantity<MetersPerSquaredSecond> {
    Quantity::new(value)
}
