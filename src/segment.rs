use crate::knot::Knot;

/// Cubic Hermite polynomial on one interval, expressed in the local
/// coordinate `u = x - x0`.
#[derive(Debug, Clone, Copy)]
pub struct HermiteSegment {
    x0: f64,
    y0: f64,
    t0: f64,
    c2: f64,
    c3: f64,
}

impl HermiteSegment {
    /// Builds the segment over `[k0.x, k1.x]` matching both endpoint values
    /// and the endpoint tangents `t0`, `t1`. Requires `k0.x < k1.x`.
    pub fn new(k0: &Knot, k1: &Knot, t0: f64, t1: f64) -> Self {
        let dx = k1.get_x() - k0.get_x();
        let m = (k1.get_y() - k0.get_y()) / dx;

        HermiteSegment {
            x0: k0.get_x(),
            y0: k0.get_y(),
            t0,
            c2: (3.0 * m - 2.0 * t0 - t1) / dx,
            c3: (t0 + t1 - 2.0 * m) / (dx * dx),
        }
    }

    /// Evaluates the polynomial at `x`, which may lay outside the defining
    /// interval; the cubic is simply extended.
    pub fn evaluate(&self, x: f64) -> f64 {
        let u = x - self.x0;
        self.y0 + u * (self.t0 + u * (self.c2 + u * self.c3))
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn matches_endpoint_values() {
        let eps = 1e-12;
        let k0 = Knot::new(1.0, -2.0);
        let k1 = Knot::new(3.5, 4.0);
        let segment = HermiteSegment::new(&k0, &k1, 0.5, -1.0);

        assert_approx_eq!(segment.evaluate(1.0), -2.0, eps);
        assert_approx_eq!(segment.evaluate(3.5), 4.0, eps);
    }

    #[test]
    fn matches_endpoint_tangents() {
        let eps = 1e-7;
        let k0 = Knot::new(0.0, 1.0);
        let k1 = Knot::new(2.0, 3.0);
        let t0 = -1.5;
        let t1 = 2.0;
        let segment = HermiteSegment::new(&k0, &k1, t0, t1);

        // central difference around each endpoint
        let h = 1e-6;
        let d0 = (segment.evaluate(h) - segment.evaluate(-h)) / (2.0 * h);
        let d1 = (segment.evaluate(2.0 + h) - segment.evaluate(2.0 - h)) / (2.0 * h);

        assert_approx_eq!(d0, t0, eps);
        assert_approx_eq!(d1, t1, eps);
    }

    #[test]
    fn reproduces_line_when_tangents_match_slope() {
        let eps = 1e-12;
        let k0 = Knot::new(-1.0, -3.0);
        let k1 = Knot::new(1.0, 1.0);
        let segment = HermiteSegment::new(&k0, &k1, 2.0, 2.0);

        assert_approx_eq!(segment.evaluate(0.0), -1.0, eps);
        assert_approx_eq!(segment.evaluate(0.5), 0.0, eps);
        assert_approx_eq!(segment.evaluate(4.0), 7.0, eps);
        assert_approx_eq!(segment.evaluate(-3.0), -7.0, eps);
    }
}
