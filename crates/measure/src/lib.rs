//! # measure
//!
//! Compile-time dimensional analysis over `f32`.
//!
//! A [`Value<U>`] is a float tagged with a zero-sized [`Unit`] carrying an
//! integer exponent and a rational scale per base dimension (length, mass,
//! time, angle). Arithmetic resolves the result unit at compile time; the
//! only runtime work is the final scalar operation, so a `Value` is exactly
//! as big and exactly as fast as the raw float it wraps.
//!
//! ```rust
//! use measure::MeasureExt;
//! use measure::unit::Unitless;
//!
//! // Mixed scales convert into the left operand's unit.
//! let payload = 3.0.kg() + 250.0.g();
//! assert_eq!(payload, 3.25.kg());
//!
//! // Multiplying and dividing derive new units instead of failing.
//! let ratio = 4.0.kg() / 2.0.g();
//! assert!((ratio.value_as::<Unitless>() - 2000.0).abs() < 1e-1);
//! ```
//!
//! Adding a mass to a time is not a runtime error, it simply does not build:
//!
//! ```compile_fail
//! use measure::MeasureExt;
//!
//! let _ = 3.0.kg() + 2.0.s();
//! ```
//!
//! [`Angle`] wraps radians with degree/radian/half-turn constructors, and the
//! comparator in [`float_cmp`] supplies the tolerance semantics every
//! comparison in this crate uses.

pub mod angle;
pub mod float_cmp;
pub mod literals;
pub mod ratio;
pub mod unit;
pub mod value;

pub use angle::{Angle, PI};
pub use literals::{AngleExt, MeasureExt};
pub use ratio::Ratio;
pub use unit::{ConvertibleTo, Prod, Quot, Unit};
pub use value::{Value, make_value};
