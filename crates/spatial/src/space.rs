//! Space tags and the matching predicate.
//!
//! A space tag is a type identifying a coordinate frame. Whether two tags
//! *can* match is a compile-time question: an [`MatchesSpace`] impl must
//! exist between them. Whether two tag *instances* match is a runtime
//! question only for data-carrying tags like [`PlayerAtFrame`]; stateless
//! tags agree unconditionally once the types line up.

use thiserror::Error;

/// Marker trait for coordinate-frame tags.
pub trait Space: Copy + 'static {}

/// `Self` is statically allowed to stand in for `S`.
///
/// The existence of the impl is the compile-time half of the predicate;
/// [`MatchesSpace::spaces_match`] is the runtime half, and defaults to `true`
/// because stateless tags have nothing left to disagree about.
pub trait MatchesSpace<S: Space>: Space {
    fn spaces_match(&self, _other: &S) -> bool {
        true
    }
}

/// Two statically-compatible spaces disagreed on their runtime data.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("Run-time spaces don't match")]
pub struct SpaceMismatch;

/// Enforces the full matching predicate between two tag instances.
///
/// The type-level half is the `MatchesSpace` bound: calling this with
/// incompatible tag types does not build. The runtime half only ever fails
/// for data-carrying tags, and only when the `space-runtime-checks` feature
/// is enabled; without it the data is compiled out and the check degrades
/// to the type-level half alone.
pub fn check_spaces_match<L, R>(lhs: &L, rhs: &R) -> Result<(), SpaceMismatch>
where
    L: MatchesSpace<R>,
    R: Space,
{
    if lhs.spaces_match(rhs) {
        Ok(())
    } else {
        Err(SpaceMismatch)
    }
}

/// Matches any other space unconditionally, in either position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Wildcard;

impl Space for Wildcard {}

impl<S: Space> MatchesSpace<S> for Wildcard {}

/// Declares stateless space tags: a unit struct per name, matching itself
/// and [`Wildcard`].
///
/// ```
/// spatial::spaces! {
///     /// The rig the sensors hang off.
///     Rig,
/// }
/// ```
#[macro_export]
macro_rules! spaces {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $name;

            impl $crate::space::Space for $name {}

            impl $crate::space::MatchesSpace<$name> for $name {}

            impl $crate::space::MatchesSpace<$crate::space::Wildcard> for $name {}
        )*
    };
}

spaces! {
    /// The global frame everything else ultimately hangs off.
    World,
    Camera,
    Player,
}

/// A player-relative frame pinned to a simulation frame number.
///
/// The frame id only exists with `space-runtime-checks`; without the feature
/// the tag is zero-sized and two `PlayerAtFrame` instances are
/// indistinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerAtFrame {
    #[cfg(feature = "space-runtime-checks")]
    pub frame_id: i32,
}

impl PlayerAtFrame {
    #[cfg(feature = "space-runtime-checks")]
    pub const fn new(frame_id: i32) -> Self {
        Self { frame_id }
    }

    #[cfg(not(feature = "space-runtime-checks"))]
    pub const fn new(_frame_id: i32) -> Self {
        Self {}
    }
}

impl Space for PlayerAtFrame {}

impl MatchesSpace<PlayerAtFrame> for PlayerAtFrame {
    #[cfg(feature = "space-runtime-checks")]
    fn spaces_match(&self, other: &PlayerAtFrame) -> bool {
        self.frame_id == other.frame_id
    }
}

impl MatchesSpace<Wildcard> for PlayerAtFrame {}

// TODO: matching is symmetric, so letting PlayerAtFrame degrade to Player
// also lets Player stand in for PlayerAtFrame. One-way degradation needs a
// direction-aware rule before these two impls can be split.
impl MatchesSpace<Player> for PlayerAtFrame {}

impl MatchesSpace<PlayerAtFrame> for Player {}
