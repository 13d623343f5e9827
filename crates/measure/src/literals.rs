//! Suffix-style constructors for literals: `42.0.kg()`, `90.0.deg()`.

use crate::angle::Angle;
use crate::unit::{
    Grams, Hours, Kilograms, Kilometres, KilometresPerHour, Metres, MetresPerSecond,
    MetresPerSecondSquared, Milliseconds, Minutes, Newtons, Seconds,
};
use crate::value::Value;

/// Unit-suffix constructors on `f32`.
pub trait MeasureExt {
    fn m(self) -> Value<Metres>;
    fn km(self) -> Value<Kilometres>;
    fn kg(self) -> Value<Kilograms>;
    fn g(self) -> Value<Grams>;
    fn ms(self) -> Value<Milliseconds>;
    fn s(self) -> Value<Seconds>;
    /// `min` would collide with `f32::min`, hence the plural.
    fn mins(self) -> Value<Minutes>;
    fn h(self) -> Value<Hours>;
    fn mps(self) -> Value<MetresPerSecond>;
    fn kmh(self) -> Value<KilometresPerHour>;
    fn mps2(self) -> Value<MetresPerSecondSquared>;
    fn newtons(self) -> Value<Newtons>;
}

impl MeasureExt for f32 {
    fn m(self) -> Value<Metres> {
        Value::new(self)
    }

    fn km(self) -> Value<Kilometres> {
        Value::new(self)
    }

    fn kg(self) -> Value<Kilograms> {
        Value::new(self)
    }

    fn g(self) -> Value<Grams> {
        Value::new(self)
    }

    fn ms(self) -> Value<Milliseconds> {
        Value::new(self)
    }

    fn s(self) -> Value<Seconds> {
        Value::new(self)
    }

    fn mins(self) -> Value<Minutes> {
        Value::new(self)
    }

    fn h(self) -> Value<Hours> {
        Value::new(self)
    }

    fn mps(self) -> Value<MetresPerSecond> {
        Value::new(self)
    }

    fn kmh(self) -> Value<KilometresPerHour> {
        Value::new(self)
    }

    fn mps2(self) -> Value<MetresPerSecondSquared> {
        Value::new(self)
    }

    fn newtons(self) -> Value<Newtons> {
        Value::new(self)
    }
}

/// Angle-suffix constructors on `f32`.
pub trait AngleExt {
    fn deg(self) -> Angle;
    fn rad(self) -> Angle;
    /// Half-turns: `1.0.pi()` is 180 degrees.
    fn pi(self) -> Angle;
}

impl AngleExt for f32 {
    fn deg(self) -> Angle {
        Angle::from_degrees(self)
    }

    fn rad(self) -> Angle {
        Angle::from_radians(self)
    }

    fn pi(self) -> Angle {
        Angle::from_pi_factor(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::float_cmp::float_eq;
    use crate::unit::{Kilograms, Metres};
    use crate::value::Value;

    use super::*;

    #[test]
    fn value_literals() {
        assert_eq!(42.0.kg(), Value::<Kilograms>::new(42.0));
        assert!(float_eq(4.2.km().value_as::<Metres>(), 4200.0));
        assert!(float_eq(3.0.g().value_as::<Kilograms>(), 0.003));
        assert!(float_eq(2.0.h().value_as::<Seconds>(), 7200.0));
        assert!(float_eq(36.0.kmh().value_as::<MetresPerSecond>(), 10.0));
    }

    #[test]
    fn angle_literals() {
        assert!(float_eq(90.0.deg().degrees(), 90.0));
        assert!(float_eq(1.5.rad().radians(), 1.5));
        assert!(float_eq((-1.0).pi().degrees(), -180.0));
    }
}
