//! # xfp
//!
//! Functional containers for Rust built around a biased two-branch
//! result type.
//!
//! ## Overview
//!
//! This library provides a small set of generic containers furnishing
//! monadic combinators (map, flat_map, filter, fold, foreach) atop
//! ordinary collections and a two-armed disjoint union:
//!
//! - **`Xresult<Y, X>`**: an immutable union of a LEFT (alternate) and a
//!   RIGHT (main) value, with RIGHT-biased combinators and explicit
//!   `_left`/`_right` variants for full symmetry
//! - **Façades**: `Xeither` (plain union vocabulary), `Xopt` (optional
//!   values), `Xtry` (fallible computations)
//! - **Comprehension**: the [`fors!`] macro and the `Xresult::fors` /
//!   `Xresult::flat_fors` functions for short-circuiting composition
//! - **Collections**: `Xlist` (eager), `Xiter` (lazy), `Xdict` (keyed)
//!
//! ## Feature Flags
//!
//! - `collection`: the `Xlist` / `Xiter` / `Xdict` wrappers (default)
//! - `serde`: serde support for `Xresult`, `Xlist` and `Xdict`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use xfp::fors;
//! use xfp::xresult::Xresult;
//!
//! let composed: Xresult<&str, i32> = fors! {
//!     x <= Xresult::<&str, i32>::Right(1);
//!     y <= Xresult::<&str, i32>::Right(2);
//!     yield x + y
//! };
//! assert_eq!(composed, Xresult::Right(3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use xfp::prelude::*;
/// ```
pub mod prelude {

    pub use crate::xresult::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;
}

pub mod xresult;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "collection")]
pub mod tools;
