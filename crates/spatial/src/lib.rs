//! # spatial 🌐
//!
//! spatial tracks which coordinate frame your data lives in using Rust's
//! type system, and makes composing transforms across the wrong frames fail
//! to build.
//!
//! ## Space tags
//!
//! A frame is identified by a tag type implementing [`Space`]. Stateless tags
//! ([`World`], [`Camera`], [`Player`], or your own via [`spaces!`]) are
//! zero-sized and match purely by type. Data-carrying tags like
//! [`PlayerAtFrame`] additionally compare their data at runtime: an
//! [`Xform`] between `PlayerAtFrame(3)` and `PlayerAtFrame(2)` frames is a
//! real mismatch even though the types agree. [`Wildcard`] matches anything.
//!
//! ## Example
//!
//! ```rust
//! use spatial::{Camera, Player, PlayerAtFrame, World, Xform};
//!
//! let world_to_camera = Xform::<World, Camera>::default();
//! let camera_to_player = Xform::<Camera, Player>::default();
//!
//! // Adjacent frames line up, so this composes.
//! let world_to_player = world_to_camera.then(camera_to_player)?;
//!
//! // Frame *data* is checked at runtime where the types alone can't decide.
//! let to_frame_3 = Xform::<Player, PlayerAtFrame>::from_spaces(Player, PlayerAtFrame::new(3));
//! let from_frame_2 = Xform::<PlayerAtFrame, World>::from_spaces(PlayerAtFrame::new(2), World);
//! assert!(to_frame_3.then(from_frame_2).is_err());
//! # Ok::<(), spatial::SpaceMismatch>(())
//! ```
//!
//! Composing across frames that cannot match does not build:
//!
//! ```compile_fail
//! use spatial::{Camera, Player, World, Xform};
//!
//! let camera_to_player = Xform::<Camera, Player>::default();
//! let world_to_camera = Xform::<World, Camera>::default();
//!
//! // Player and World are different frames.
//! let _ = camera_to_player.then(world_to_camera);
//! ```
//!
//! ## Footprint
//!
//! Tags ride in a [`CompressedPair`], so an `Xform` between stateless frames
//! is exactly one [`Matrix`] wide; a data-carrying tag adds exactly its data.
//! The runtime data check can be compiled out entirely by disabling the
//! `space-runtime-checks` feature.

pub mod pair;
pub mod point;
pub mod space;
pub mod xform;

pub use pair::CompressedPair;
pub use point::{Point, Vector};
pub use space::{
    Camera, MatchesSpace, Player, PlayerAtFrame, Space, SpaceMismatch, Wildcard, World,
    check_spaces_match,
};
pub use xform::{Matrix, Xform, in_sequence};
