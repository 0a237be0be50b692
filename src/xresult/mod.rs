//! The biased two-branch result container and its façades.
//!
//! This module provides control-flow types for functional programming:
//!
//! - [`Xresult`]: an immutable value that is either a LEFT (alternate
//!   channel) or a RIGHT (main channel), with RIGHT-biased combinators
//! - [`XrBranch`]: the two-valued tag discriminating the arms
//! - [`XresultError`]: the auto-generated error produced when a filter
//!   predicate rejects a value
//! - [`Xeither`], [`Xopt`], [`Xtry`]: semantic façades for instantiating
//!   and destructuring an [`Xresult`] with friendlier vocabulary
//! - [`fors!`](crate::fors): comprehension-style composition of several
//!   results with short-circuit on the first LEFT
//!
//! # Examples
//!
//! ## Chaining fallible computations
//!
//! ```rust
//! use xfp::xresult::{Xresult, Xtry};
//!
//! fn invert(value: f64) -> Result<f64, String> {
//!     if value == 0.0 {
//!         Err("division by zero".to_string())
//!     } else {
//!         Ok(1.0 / value)
//!     }
//! }
//!
//! let result: Xresult<String, f64> = Xtry::from_unsafe(|| invert(4.0));
//! assert_eq!(result, Xresult::Right(0.25));
//!
//! let failed: Xresult<String, f64> = Xtry::from_unsafe(|| invert(0.0));
//! assert!(failed.is_left());
//! ```
//!
//! ## Optional handling
//!
//! ```rust
//! use xfp::xresult::Xopt;
//!
//! let present = Xopt::from_optional(Some(3));
//! assert_eq!(present.get_or_else(0), 3);
//!
//! let absent = Xopt::<i32>::from_optional(None);
//! assert_eq!(absent.get_or_else(0), 0);
//! ```

mod fors_macro;
mod result;
mod xeither;
mod xopt;
mod xtry;

pub use result::{XrBranch, Xresult, XresultError};
pub use xeither::Xeither;
pub use xeither::{Left, Right};
pub use xopt::Xopt;
pub use xtry::{BoxedError, Xtry, safed};
