use thiserror::Error;

/// Reasons for which [crate::Spline::build] rejects a knot set.
///
/// Every failure is a deterministic function of the input; evaluation of a
/// successfully built spline never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("spline must have at least 2 knots, got {0}")]
    TooFewKnots(usize),

    #[error("knot {index} has non-finite coordinates ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },

    #[error("knots share the same x value {x}")]
    DuplicateX { x: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = InvalidInput::TooFewKnots(1);
        assert_eq!("spline must have at least 2 knots, got 1", error.to_string());

        let error = InvalidInput::NonFiniteCoordinate { index: 2, x: 1.0, y: f64::NAN };
        assert_eq!("knot 2 has non-finite coordinates (1, NaN)", error.to_string());

        let error = InvalidInput::DuplicateX { x: 3.5 };
        assert_eq!("knots share the same x value 3.5", error.to_string());
    }
}
