//! Quantity values: an `f32` tagged with a [`Unit`].

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::float_cmp::{float_eq, float_gt, float_lt};
use crate::unit::{
    ConvertibleTo, Kilograms, Metres, MetresPerSecond, MetresPerSecondSquared, Newtons, Prod, Quot,
    Seconds, Unit, Unitless,
};

/// A measurement expressed in `U`'s own scale.
///
/// The stored float is never rebased; converting to another unit multiplies
/// by the precomputed [`ConvertibleTo::FACTOR`] at the call site. A `Value`
/// occupies exactly `size_of::<f32>()` bytes.
#[derive(Clone, Copy, Default)]
pub struct Value<U: Unit> {
    raw: f32,
    unit: PhantomData<U>,
}

impl<U: Unit> Value<U> {
    pub const fn new(raw: f32) -> Self {
        Self {
            raw,
            unit: PhantomData,
        }
    }

    /// The measurement expressed in `T`'s scale.
    ///
    /// When the conversion factor is exactly one the stored float is returned
    /// untouched, so identity conversions cost nothing and introduce no
    /// `* 1.0` rounding artifacts. The branch is on a monomorphized constant.
    pub fn value_as<T: Unit>(self) -> f32
    where
        U: ConvertibleTo<T>,
    {
        let factor = <U as ConvertibleTo<T>>::FACTOR;
        if factor.is_one() {
            self.raw
        } else {
            self.raw * factor.as_f32()
        }
    }

    /// Rebuilds the measurement as a `Value<T>`.
    pub fn to<T: Unit>(self) -> Value<T>
    where
        U: ConvertibleTo<T>,
    {
        Value::new(self.value_as::<T>())
    }
}

/// Builds a [`Value`] from a unit tag instance, letting the tag drive type
/// inference: `make_value(Kilograms, 42.0)`.
pub fn make_value<U: Unit>(_unit: U, raw: f32) -> Value<U> {
    Value::new(raw)
}

pub type Mass = Value<Kilograms>;
pub type Distance = Value<Metres>;
pub type Duration = Value<Seconds>;
pub type Speed = Value<MetresPerSecond>;
pub type Acceleration = Value<MetresPerSecondSquared>;
pub type Force = Value<Newtons>;

impl<L: Unit, R: ConvertibleTo<L>> Add<Value<R>> for Value<L> {
    type Output = Value<L>;

    /// The right operand is converted into the left operand's unit; the
    /// result keeps the left unit.
    fn add(self, rhs: Value<R>) -> Self::Output {
        Value::new(self.raw + rhs.value_as::<L>())
    }
}

impl<L: Unit, R: ConvertibleTo<L>> AddAssign<Value<R>> for Value<L> {
    fn add_assign(&mut self, rhs: Value<R>) {
        self.raw += rhs.value_as::<L>();
    }
}

impl<L: Unit, R: ConvertibleTo<L>> Sub<Value<R>> for Value<L> {
    type Output = Value<L>;

    fn sub(self, rhs: Value<R>) -> Self::Output {
        Value::new(self.raw - rhs.value_as::<L>())
    }
}

impl<L: Unit, R: ConvertibleTo<L>> SubAssign<Value<R>> for Value<L> {
    fn sub_assign(&mut self, rhs: Value<R>) {
        self.raw -= rhs.value_as::<L>();
    }
}

impl<U: Unit> Neg for Value<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.raw)
    }
}

impl<L: Unit, R: Unit> Mul<Value<R>> for Value<L>
where
    Prod<L, R>: Unit,
{
    type Output = Value<Prod<L, R>>;

    /// Derived-unit arithmetic is unit-consistent by construction, so the raw
    /// scalars multiply directly with no conversion.
    fn mul(self, rhs: Value<R>) -> Self::Output {
        Value::new(self.raw * rhs.raw)
    }
}

impl<L: Unit, R: Unit> Div<Value<R>> for Value<L>
where
    Quot<L, R>: Unit,
{
    type Output = Value<Quot<L, R>>;

    fn div(self, rhs: Value<R>) -> Self::Output {
        Value::new(self.raw / rhs.raw)
    }
}

impl<U: Unit> Mul<f32> for Value<U> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.raw * rhs)
    }
}

impl<U: Unit> Mul<Value<U>> for f32 {
    type Output = Value<U>;

    fn mul(self, rhs: Value<U>) -> Value<U> {
        Value::new(self * rhs.raw)
    }
}

impl<U: Unit> Div<f32> for Value<U> {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.raw / rhs)
    }
}

impl<U: Unit> MulAssign<f32> for Value<U> {
    fn mul_assign(&mut self, rhs: f32) {
        self.raw *= rhs;
    }
}

impl<U: Unit> DivAssign<f32> for Value<U> {
    fn div_assign(&mut self, rhs: f32) {
        self.raw /= rhs;
    }
}

impl<L: Unit, R: ConvertibleTo<Unitless>> MulAssign<Value<R>> for Value<L> {
    /// Scaling in place is only unit-preserving for dimensionless factors.
    fn mul_assign(&mut self, rhs: Value<R>) {
        self.raw *= rhs.value_as::<Unitless>();
    }
}

impl<L: Unit, R: ConvertibleTo<Unitless>> DivAssign<Value<R>> for Value<L> {
    fn div_assign(&mut self, rhs: Value<R>) {
        self.raw /= rhs.value_as::<Unitless>();
    }
}

impl<L: Unit, R: ConvertibleTo<L>> PartialEq<Value<R>> for Value<L> {
    fn eq(&self, other: &Value<R>) -> bool {
        float_eq(self.raw, other.value_as::<L>())
    }
}

impl<L: Unit, R: ConvertibleTo<L>> PartialOrd<Value<R>> for Value<L> {
    fn partial_cmp(&self, other: &Value<R>) -> Option<Ordering> {
        let rhs = other.value_as::<L>();
        if float_lt(self.raw, rhs) {
            Some(Ordering::Less)
        } else if float_gt(self.raw, rhs) {
            Some(Ordering::Greater)
        } else if self.raw.is_nan() || rhs.is_nan() {
            None
        } else {
            Some(Ordering::Equal)
        }
    }
}

impl<U: Unit> fmt::Display for Value<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.raw, U::SYMBOL)
    }
}

impl<U: Unit> fmt::Debug for Value<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.raw, U::SYMBOL)
    }
}

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Value<U> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for Value<U> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f32::deserialize(deserializer).map(Value::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::float_cmp::float_eq;
    use crate::unit::{
        Grams, Hours, Kilograms, Kilometres, Metres, Milliseconds, Minutes, Prod, Seconds,
    };

    use super::*;

    #[test]
    fn value_is_exactly_one_float_wide() {
        assert_eq!(size_of::<Value<Kilograms>>(), size_of::<f32>());
        assert_eq!(size_of::<Value<Prod<Grams, Kilograms>>>(), size_of::<f32>());
    }

    #[test]
    fn distance_conversions() {
        let distance = Value::<Metres>::new(2.1);

        assert!(float_eq(distance.value_as::<Kilometres>(), 0.0021));
        assert!(float_eq(distance.value_as::<Metres>(), 2.1));

        let kms = distance.to::<Kilometres>();
        assert!(float_eq(kms.value_as::<Kilometres>(), 0.0021));
        assert!(float_eq(kms.value_as::<Metres>(), 2.1));
    }

    #[test]
    fn mass_conversions() {
        let mass = Value::<Kilograms>::new(2.1);

        assert!(float_eq(mass.value_as::<Kilograms>(), 2.1));
        assert!(float_eq(mass.value_as::<Grams>(), 2100.0));

        let grams = mass.to::<Grams>();
        assert!(float_eq(grams.value_as::<Kilograms>(), 2.1));
        assert!(float_eq(grams.value_as::<Grams>(), 2100.0));
    }

    #[test]
    fn time_conversions() {
        let time = Value::<Seconds>::new(2.1);

        assert!(float_eq(time.value_as::<Hours>(), 2.1 / 3600.0));
        assert!(float_eq(time.value_as::<Minutes>(), 2.1 / 60.0));
        assert!(float_eq(time.value_as::<Seconds>(), 2.1));
        assert!(float_eq(time.value_as::<Milliseconds>(), 2100.0));

        let hours = time.to::<Hours>();
        assert!(float_eq(hours.value_as::<Minutes>(), 2.1 / 60.0));
        assert!(float_eq(hours.value_as::<Seconds>(), 2.1));
    }

    #[test]
    fn conversion_round_trip() {
        let v = Value::<Kilometres>::new(4.2);
        assert!(float_eq(v.to::<Metres>().value_as::<Kilometres>(), 4.2));
    }

    #[test]
    fn addition_keeps_the_left_unit() {
        let sum: Value<Kilograms> = Value::<Kilograms>::new(3.0) + Value::<Grams>::new(2.0);
        assert!(float_eq(sum.value_as::<Kilograms>(), 3.002));

        let mut sum = Value::<Kilograms>::new(3.0);
        sum += Value::<Grams>::new(2.0);
        assert!(float_eq(sum.value_as::<Kilograms>(), 3.002));
    }

    #[test]
    fn subtraction_keeps_the_left_unit() {
        let diff: Value<Kilograms> = Value::<Kilograms>::new(3.0) - Value::<Grams>::new(2.0);
        assert!(float_eq(diff.value_as::<Kilograms>(), 2.998));

        let mut diff = Value::<Kilograms>::new(3.0);
        diff -= Value::<Grams>::new(2.0);
        assert!(float_eq(diff.value_as::<Kilograms>(), 2.998));
    }

    #[test]
    fn negation() {
        assert!(float_eq(
            (-Value::<Kilograms>::new(3.0)).value_as::<Kilograms>(),
            -3.0
        ));
    }

    #[test]
    fn multiplication_produces_derived_units() {
        type GKg = Prod<Grams, Kilograms>;
        type GramsSq = Prod<Grams, Grams>;
        type KilogramsSq = Prod<Kilograms, Kilograms>;

        let product = Value::<Kilograms>::new(3.0) * Value::<Grams>::new(2.0);
        assert!(float_eq(product.value_as::<GramsSq>(), 6000.0));
        assert!(float_eq(product.value_as::<GKg>(), 6.0));
        assert!(float_eq(product.value_as::<KilogramsSq>(), 0.006));

        let grams_sq = Value::<Grams>::new(3.0) * Value::<Grams>::new(2.0);
        assert!(float_eq(grams_sq.value_as::<GramsSq>(), 6.0));
        assert!(float_eq(grams_sq.value_as::<KilogramsSq>(), 0.000006));
    }

    #[test]
    fn division_by_equal_dimension_is_dimensionless() {
        let ratio = Value::<Kilograms>::new(4.0) / Value::<Grams>::new(2.0);
        assert!(float_eq(ratio.value_as::<Unitless>(), 2000.0));
    }

    #[test]
    fn scalar_scaling_preserves_the_unit() {
        let six_kg = Value::<Kilograms>::new(3.0) * 2.0;
        assert!(float_eq(six_kg.value_as::<Kilograms>(), 6.0));

        let six_kg = 2.0 * Value::<Kilograms>::new(3.0);
        assert!(float_eq(six_kg.value_as::<Kilograms>(), 6.0));

        let two_kg = Value::<Kilograms>::new(4.0) / 2.0;
        assert!(float_eq(two_kg.value_as::<Kilograms>(), 2.0));

        let mut scaled = Value::<Kilograms>::new(3.0);
        scaled *= Value::<Unitless>::new(2.0);
        assert!(float_eq(scaled.value_as::<Kilograms>(), 6.0));

        let mut scaled = Value::<Kilograms>::new(4.0);
        scaled /= Value::<Unitless>::new(2.0);
        assert!(float_eq(scaled.value_as::<Kilograms>(), 2.0));
    }

    #[test]
    fn comparisons_convert_to_a_common_unit() {
        assert_eq!(Value::<Kilograms>::new(2.0), Value::<Grams>::new(2000.0));
        assert_ne!(Value::<Kilograms>::new(2.0), Value::<Grams>::new(2001.0));

        assert!(Value::<Grams>::new(500.0) < Value::<Kilograms>::new(1.0));
        assert!(Value::<Kilograms>::new(1.0) > Value::<Grams>::new(500.0));
        assert!(Value::<Kilograms>::new(1.0) <= Value::<Grams>::new(1000.0));
        assert!(Value::<Kilograms>::new(1.0) >= Value::<Grams>::new(1000.0));
    }

    #[test]
    fn make_value_infers_from_the_tag() {
        let mass = make_value(Kilograms, 42.0);
        assert!(float_eq(mass.value_as::<Kilograms>(), 42.0));
    }

    #[test]
    fn display_appends_the_unit_suffix() {
        assert_eq!(format!("{}", Value::<Metres>::new(42.0)), "42_m");
        assert_eq!(format!("{}", Value::<Kilograms>::new(-3.0)), "-3_kg");
        assert_eq!(format!("{}", Value::<Kilometres>::new(0.5)), "0.5_km");
        assert_eq!(format!("{}", Value::<Unitless>::new(7.0)), "7");
    }
}
