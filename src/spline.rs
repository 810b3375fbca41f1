use crate::{error::InvalidInput, knot::Knot, segment::HermiteSegment};

/// Akima spline through a set of knots. Immutable once built; may be shared
/// read-only between threads.
pub struct Spline {
    knots: Vec<Knot>,
    tangents: Vec<f64>,
    segments: Vec<HermiteSegment>,
    min_x: f64,
    max_x: f64,
    is_knot_spacing_uniform: bool,
}

impl Spline {
    /// Builds a spline through `knots`. The knots are sorted by ascending `x`
    /// (stable with respect to input order) before slopes and tangents are
    /// computed.
    /// # Errors
    /// [InvalidInput] when there are fewer than 2 knots, any coordinate is
    /// non-finite, or two knots share an `x` value.
    pub fn build(knots: Vec<Knot>) -> Result<Self, InvalidInput> {
        if knots.len() < 2 {
            return Err(InvalidInput::TooFewKnots(knots.len()));
        }

        let number_of_intervals = knots.len() - 1;
        let mut spline = Spline {
            knots,
            tangents: Vec::new(),
            segments: Vec::with_capacity(number_of_intervals),
            min_x: 0.0,
            max_x: 0.0,
            is_knot_spacing_uniform: false,
        };

        spline.check_knots_finite()?;
        spline.sort_knots();
        spline.check_knots_spacing()?;
        spline.calculate_tangents();
        spline.calculate_segments();
        Ok(spline)
    }

    /// Builds a spline from plain `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, InvalidInput> {
        Self::build(pairs.iter().copied().map(Knot::from).collect())
    }

    /// Evaluates the spline at `x`. Defined over the entire real line: outside
    /// `[min_x, max_x]` the cubic of the nearest boundary interval is
    /// extended.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self.evaluate_on_boundaries(x) {
            Some(result) => result,
            None => {
                let index = self.find_interval_index(x);
                self.segments[index].evaluate(x)
            }
        }
    }

    /// Evaluates the spline at every element of `x_vector` in order. Results
    /// are identical to calling [Spline::evaluate] once per element.
    pub fn evaluate_many(&self, x_vector: &[f64]) -> Vec<f64> {
        x_vector.iter().map(|x| self.evaluate(*x)).collect()
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// Estimated derivative at each knot, aligned with [Spline::knots].
    pub fn tangents(&self) -> &[f64] {
        &self.tangents
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    fn check_knots_finite(&self) -> Result<(), InvalidInput> {
        for (index, knot) in self.knots.iter().enumerate() {
            if !knot.is_finite() {
                return Err(InvalidInput::NonFiniteCoordinate {
                    index,
                    x: knot.get_x(),
                    y: knot.get_y(),
                });
            }
        }
        Ok(())
    }

    fn sort_knots(&mut self) {
        self.knots.sort();
        self.min_x = self.knots[0].get_x();
        self.max_x = self.knots[self.knots.len() - 1].get_x();
    }

    fn check_knots_spacing(&mut self) -> Result<(), InvalidInput> {
        let x_spacing_vec: Vec<f64> = self.knots.iter()
            .map(|k| k.get_x())
            .collect::<Vec<f64>>()
            .windows(2)
            .map(|w| w[1] - w[0])
            .collect();

        for (i, spacing) in x_spacing_vec.iter().enumerate() {
            if *spacing < 1e-16 {
                return Err(InvalidInput::DuplicateX { x: self.knots[i].get_x() });
            }
        }

        self.is_knot_spacing_uniform = x_spacing_vec
            .windows(2)
            .map(|spacing| (spacing[1] - spacing[0]).abs())
            .all(|difference| difference < 1e-16);

        Ok(())
    }

    fn calculate_tangents(&mut self) {
        let extended = extended_slopes(&self.knots);
        self.tangents = akima_tangents(&extended);
    }

    fn calculate_segments(&mut self) {
        for i in 0..self.knots.len() - 1 {
            self.segments.push(HermiteSegment::new(
                &self.knots[i],
                &self.knots[i + 1],
                self.tangents[i],
                self.tangents[i + 1],
            ));
        }
    }

    fn find_interval_index(&self, x: f64) -> usize {
        if self.is_knot_spacing_uniform {
            return self.find_interval_index_uniform(x);
        } else {
            return self.find_interval_index_bisect(x);
        }
    }

    fn find_interval_index_bisect(&self, x: f64) -> usize {
        let size = self.knots.len();
        let mut min = 0;
        let mut max = size - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.knots[mid].get_x() {
                max = mid;
            } else {
                min = mid;
            }
        }
        return min;
    }

    // only called with x inside [min_x, max_x]
    fn find_interval_index_uniform(&self, x: f64) -> usize {
        let relative_x = (x - self.min_x) / (self.max_x - self.min_x);
        let index = (relative_x * (self.knots.len() - 1) as f64).floor() as usize;
        index.min(self.knots.len() - 2)
    }

    fn evaluate_on_boundaries(&self, x: f64) -> Option<f64> {
        let size = self.knots.len();
        if x < self.knots[1].get_x() {
            Some(self.segments[0].evaluate(x))
        } else if x > self.knots[size - 2].get_x() {
            Some(self.segments[size - 2].evaluate(x))
        } else {
            None
        }
    }
}

/// Secant slopes of consecutive knot pairs, extended by two extra slopes on
/// each side. Slope `m_i` of the conceptual index range `-2..=n` is stored at
/// `result[i + 2]`.
///
/// The extension linearly extrapolates the slope sequence
/// (`m_{-1} = 2m_0 - m_1` and so on), which keeps the endpoint tangents
/// consistent with the local trend of the curve. With only two knots every
/// extension slope collapses to the single interior slope.
fn extended_slopes(knots: &[Knot]) -> Vec<f64> {
    let n = knots.len();
    let mut slopes = Vec::with_capacity(n + 3);
    slopes.push(0.0);
    slopes.push(0.0);
    for w in knots.windows(2) {
        slopes.push((w[1].get_y() - w[0].get_y()) / (w[1].get_x() - w[0].get_x()));
    }

    if n == 2 {
        let m0 = slopes[2];
        slopes[0] = m0;
        slopes[1] = m0;
        slopes.push(m0);
        slopes.push(m0);
    } else {
        slopes[1] = 2.0 * slopes[2] - slopes[3];
        slopes[0] = 2.0 * slopes[1] - slopes[2];
        let last = slopes.len() - 1;
        slopes.push(2.0 * slopes[last] - slopes[last - 1]);
        let last = slopes.len() - 1;
        slopes.push(2.0 * slopes[last] - slopes[last - 1]);
    }
    slopes
}

/// Akima-weighted tangent at each knot. Each side's weight is the magnitude
/// of the recent slope change on the opposite side, so the tangent favors the
/// flatter neighborhood; when both weights vanish (collinear neighbors) the
/// unweighted average of the two adjacent slopes is used.
fn akima_tangents(extended_slopes: &[f64]) -> Vec<f64> {
    let n = extended_slopes.len() - 3;
    let mut tangents = Vec::with_capacity(n);

    for i in 0..n {
        let idx = i + 2;
        let weight_behind = (extended_slopes[idx + 1] - extended_slopes[idx]).abs();
        let weight_ahead = (extended_slopes[idx - 1] - extended_slopes[idx - 2]).abs();
        let denominator = weight_behind + weight_ahead;

        let tangent = if denominator == 0.0 {
            0.5 * (extended_slopes[idx - 1] + extended_slopes[idx])
        } else {
            (weight_behind * extended_slopes[idx - 1] + weight_ahead * extended_slopes[idx])
                / denominator
        };
        tangents.push(tangent);
    }
    tangents
}
