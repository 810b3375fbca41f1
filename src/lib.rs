//! Akima piecewise-cubic interpolation through irregularly spaced points.
//! The tangent at each knot is a weighted average of neighbouring secant
//! slopes, which suppresses the overshoot ordinary cubic splines show near
//! sharp local extrema.
//!
//! Building a [Spline] is separate from evaluating it: slopes and tangents
//! are computed once per knot set, then each query costs a single interval
//! lookup.
//!
//! # Example
//! ```
//! use akima_spline::{Knot, Spline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let knots = vec![
//!     Knot::new(0.0, 0.0),
//!     Knot::new(1.0, 0.5),
//!     Knot::new(2.0, 2.0),
//!     Knot::new(3.0, 1.5)
//! ];
//! let spline = Spline::build(knots).unwrap();
//!
//! assert_approx_eq!(2.0, spline.evaluate(2.0), 1e-9);
//! let curve = spline.evaluate_many(&[0.5, 1.5, 2.5]);
//! assert_eq!(3, curve.len());
//! ```

mod error;
mod knot;
mod segment;
mod spline;

pub use error::InvalidInput;
pub use knot::Knot;
pub use spline::Spline;
