//! Collection wrappers with functional behaviors.
//!
//! This module provides immutable-style containers whose transformation
//! methods consume the receiver and return a new container:
//!
//! - [`Xlist`]: an eager ordered sequence over a `Vec`
//! - [`Xiter`]: a lazy wrapper over any iterator
//! - [`Xdict`]: a keyed container with deterministic key-ordered iteration
//!
//! Fallible accessors come in two forms: a plain `Option`-returning one
//! and an `_fr` variant handing the failure to the core as a LEFT
//! [`Xresult`](crate::xresult::Xresult).
//!
//! # Examples
//!
//! ## `Xlist`
//!
//! ```rust
//! use xfp::collection::Xlist;
//!
//! let doubled: Xlist<i32> = Xlist::from(vec![1, 2, 3]).map(|element| element * 2);
//! assert_eq!(doubled, Xlist::from(vec![2, 4, 6]));
//! ```
//!
//! ## `Xiter`
//!
//! ```rust
//! use xfp::collection::{Xiter, Xlist};
//!
//! let taken = Xiter::new(0..)
//!     .filter(|value| value % 2 == 0)
//!     .take(3)
//!     .to_xlist();
//! assert_eq!(taken, Xlist::from(vec![0, 2, 4]));
//! ```
//!
//! ## `Xdict`
//!
//! ```rust
//! use xfp::collection::Xdict;
//!
//! let scores = Xdict::from_list([("ada", 1), ("grace", 2)]);
//! assert_eq!(scores.get(&"grace"), Some(&2));
//! ```

mod error;
mod xdict;
mod xiter;
mod xlist;

pub use error::{KeyNotFoundError, OutOfBoundsError};
pub use xdict::Xdict;
pub use xiter::Xiter;
pub use xlist::Xlist;
