//! The dimension/unit algebra.
//!
//! A unit is a zero-sized tag carrying, per base dimension (length, mass,
//! time, angle), a type-level integer exponent and a [`Ratio`] locating its
//! scale relative to the canonical unit of that dimension (metres, kilograms,
//! seconds, radians). The exponents live in [`typenum`] integers so that
//! multiplying and dividing units is ordinary type-level arithmetic, and so
//! that convertibility (all four exponents pairwise equal) is a trait bound
//! the compiler checks for free.
//!
//! Ratios are carried for all four dimensions independently, even where the
//! exponent is zero. Dividing kilograms by grams therefore yields a unit that
//! is *dimensionless* but still a thousand times larger than [`Unitless`],
//! which is exactly what makes `4 kg / 2 g == 2000` come out right.

use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Sub};

use typenum::{Diff, Integer, N1, N2, P1, Sum, Z0};

use crate::ratio::Ratio;

/// A compile-time unit tag.
pub trait Unit: Copy + Default + 'static {
    /// Length exponent.
    type Length: Integer;
    /// Mass exponent.
    type Mass: Integer;
    /// Time exponent.
    type Time: Integer;
    /// Angle exponent.
    type Angle: Integer;

    /// Scale relative to metres.
    const LENGTH_RATIO: Ratio;
    /// Scale relative to kilograms.
    const MASS_RATIO: Ratio;
    /// Scale relative to seconds.
    const TIME_RATIO: Ratio;
    /// Scale relative to radians.
    const ANGLE_RATIO: Ratio;

    /// Suffix rendered after the numeric value, e.g. `"_kg"`. Anonymous
    /// derived units leave it empty.
    const SYMBOL: &'static str;
}

/// Marks `Self` as convertible into `Target`: all four dimension exponents
/// agree. The blanket impl below is the only impl; attempting a conversion
/// between units of different dimensions is rejected at compile time because
/// the bound cannot be satisfied.
pub trait ConvertibleTo<Target: Unit>: Unit {
    /// Factor `F` such that `value_in_target = F * value_in_self`.
    const FACTOR: Ratio;
}

impl<U, Target> ConvertibleTo<Target> for U
where
    U: Unit,
    Target: Unit<Length = U::Length, Mass = U::Mass, Time = U::Time, Angle = U::Angle>,
{
    const FACTOR: Ratio = U::LENGTH_RATIO
        .div(Target::LENGTH_RATIO)
        .mul(U::MASS_RATIO.div(Target::MASS_RATIO))
        .mul(U::TIME_RATIO.div(Target::TIME_RATIO))
        .mul(U::ANGLE_RATIO.div(Target::ANGLE_RATIO));
}

/// The unit of `A * B`: exponents add, ratios multiply.
pub struct Prod<A, B>(PhantomData<(A, B)>);

/// The unit of `A / B`: exponents subtract, ratios divide.
pub struct Quot<A, B>(PhantomData<(A, B)>);

impl<A, B> Prod<A, B> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<A, B> Quot<A, B> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<A, B> Clone for Prod<A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B> Copy for Prod<A, B> {}

impl<A, B> Default for Prod<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> Clone for Quot<A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B> Copy for Quot<A, B> {}

impl<A, B> Default for Quot<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> Unit for Prod<A, B>
where
    A: Unit,
    B: Unit,
    A::Length: Add<B::Length>,
    A::Mass: Add<B::Mass>,
    A::Time: Add<B::Time>,
    A::Angle: Add<B::Angle>,
    Sum<A::Length, B::Length>: Integer,
    Sum<A::Mass, B::Mass>: Integer,
    Sum<A::Time, B::Time>: Integer,
    Sum<A::Angle, B::Angle>: Integer,
{
    type Length = Sum<A::Length, B::Length>;
    type Mass = Sum<A::Mass, B::Mass>;
    type Time = Sum<A::Time, B::Time>;
    type Angle = Sum<A::Angle, B::Angle>;

    const LENGTH_RATIO: Ratio = A::LENGTH_RATIO.mul(B::LENGTH_RATIO);
    const MASS_RATIO: Ratio = A::MASS_RATIO.mul(B::MASS_RATIO);
    const TIME_RATIO: Ratio = A::TIME_RATIO.mul(B::TIME_RATIO);
    const ANGLE_RATIO: Ratio = A::ANGLE_RATIO.mul(B::ANGLE_RATIO);

    const SYMBOL: &'static str = "";
}

impl<A, B> Unit for Quot<A, B>
where
    A: Unit,
    B: Unit,
    A::Length: Sub<B::Length>,
    A::Mass: Sub<B::Mass>,
    A::Time: Sub<B::Time>,
    A::Angle: Sub<B::Angle>,
    Diff<A::Length, B::Length>: Integer,
    Diff<A::Mass, B::Mass>: Integer,
    Diff<A::Time, B::Time>: Integer,
    Diff<A::Angle, B::Angle>: Integer,
{
    type Length = Diff<A::Length, B::Length>;
    type Mass = Diff<A::Mass, B::Mass>;
    type Time = Diff<A::Time, B::Time>;
    type Angle = Diff<A::Angle, B::Angle>;

    const LENGTH_RATIO: Ratio = A::LENGTH_RATIO.div(B::LENGTH_RATIO);
    const MASS_RATIO: Ratio = A::MASS_RATIO.div(B::MASS_RATIO);
    const TIME_RATIO: Ratio = A::TIME_RATIO.div(B::TIME_RATIO);
    const ANGLE_RATIO: Ratio = A::ANGLE_RATIO.div(B::ANGLE_RATIO);

    const SYMBOL: &'static str = "";
}

/// Declares unit tags: a doc comment, the four exponent types (length, mass,
/// time, angle), the four scale ratios in the same order, and the display
/// suffix. Also wires up `*` and `/` on the tag itself so unit expressions
/// like `Grams * Kilograms` name their derived unit.
///
/// ```
/// use measure::{units, Ratio};
/// use typenum::{P1, Z0};
///
/// units! {
///     /// Scale used by shipping manifests.
///     Tonnes: (Z0, P1, Z0, Z0), (Ratio::ONE, Ratio::new(1000, 1), Ratio::ONE, Ratio::ONE), "_t";
/// }
/// ```
#[macro_export]
macro_rules! units {
    ($(
        $(#[$meta:meta])*
        $name:ident: ($l:ty, $m:ty, $t:ty, $a:ty), ($lr:expr, $mr:expr, $tr:expr, $ar:expr), $symbol:literal;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $name;

            impl $crate::unit::Unit for $name {
                type Length = $l;
                type Mass = $m;
                type Time = $t;
                type Angle = $a;

                const LENGTH_RATIO: $crate::ratio::Ratio = $lr;
                const MASS_RATIO: $crate::ratio::Ratio = $mr;
                const TIME_RATIO: $crate::ratio::Ratio = $tr;
                const ANGLE_RATIO: $crate::ratio::Ratio = $ar;

                const SYMBOL: &'static str = $symbol;
            }

            impl<R: $crate::unit::Unit> ::core::ops::Mul<R> for $name {
                type Output = $crate::unit::Prod<$name, R>;

                fn mul(self, _rhs: R) -> Self::Output {
                    $crate::unit::Prod::new()
                }
            }

            impl<R: $crate::unit::Unit> ::core::ops::Div<R> for $name {
                type Output = $crate::unit::Quot<$name, R>;

                fn div(self, _rhs: R) -> Self::Output {
                    $crate::unit::Quot::new()
                }
            }
        )*
    };
}

units! {
    /// Dimensionless scalar.
    Unitless: (Z0, Z0, Z0, Z0), (Ratio::ONE, Ratio::ONE, Ratio::ONE, Ratio::ONE), "";

    /// Canonical length unit.
    Metres: (P1, Z0, Z0, Z0), (Ratio::ONE, Ratio::ONE, Ratio::ONE, Ratio::ONE), "_m";
    Kilometres: (P1, Z0, Z0, Z0), (Ratio::new(1000, 1), Ratio::ONE, Ratio::ONE, Ratio::ONE), "_km";

    /// Canonical mass unit.
    Kilograms: (Z0, P1, Z0, Z0), (Ratio::ONE, Ratio::ONE, Ratio::ONE, Ratio::ONE), "_kg";
    Grams: (Z0, P1, Z0, Z0), (Ratio::ONE, Ratio::new(1, 1000), Ratio::ONE, Ratio::ONE), "_g";

    /// Canonical time unit.
    Seconds: (Z0, Z0, P1, Z0), (Ratio::ONE, Ratio::ONE, Ratio::ONE, Ratio::ONE), "_s";
    Milliseconds: (Z0, Z0, P1, Z0), (Ratio::ONE, Ratio::ONE, Ratio::new(1, 1000), Ratio::ONE), "_ms";
    Minutes: (Z0, Z0, P1, Z0), (Ratio::ONE, Ratio::ONE, Ratio::new(60, 1), Ratio::ONE), "_min";
    Hours: (Z0, Z0, P1, Z0), (Ratio::ONE, Ratio::ONE, Ratio::new(3600, 1), Ratio::ONE), "_h";

    /// Canonical angle unit.
    Radians: (Z0, Z0, Z0, P1), (Ratio::ONE, Ratio::ONE, Ratio::ONE, Ratio::ONE), "_rad";

    MetresPerSecond: (P1, Z0, N1, Z0), (Ratio::ONE, Ratio::ONE, Ratio::ONE, Ratio::ONE), "_m/s";
    KilometresPerHour: (P1, Z0, N1, Z0), (Ratio::new(1000, 1), Ratio::ONE, Ratio::new(1, 3600), Ratio::ONE), "_km/h";
    MetresPerSecondSquared: (P1, Z0, N2, Z0), (Ratio::ONE, Ratio::ONE, Ratio::ONE, Ratio::ONE), "_m/s2";
    Newtons: (P1, P1, N2, Z0), (Ratio::ONE, Ratio::ONE, Ratio::ONE, Ratio::ONE), "_N";
}
