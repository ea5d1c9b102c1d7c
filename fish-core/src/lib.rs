#![cfg_attr(not(feature = "std"), no_std)]

//! Couzin-style fish school with a pointer-driven shill.
//!
//! Each tick every fish classifies its neighbors into repulsion, orientation
//! and attraction zones, turns toward the resulting direction by at most a
//! fixed rate, swims one step and wraps around the edges of the world. The
//! shill ignores the school and chases the pointer instead, and
//! [`PathPreview`] shows where that chase will take it.

pub mod config;
pub mod fish;
pub mod preview;
pub mod school;
pub mod steering;
pub mod vector;
pub mod zones;

pub use config::{Bounds, PointerState, SchoolConfig};
pub use fish::{Fish, Role, SeekPolicy};
pub use preview::{simulate, PathPreview, PreviewIter};
#[cfg(feature = "std")]
pub use school::School;
pub use school::SchoolFixed;
pub use steering::steer_towards;
pub use vector::Vector2;
pub use zones::{classify, ZoneSummary};
