//! Streaming statistics used by the correlation signals.

/// Running sums for a Pearson correlation between two paired samples.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Moments {
    count: usize,
    sum_a: f64,
    sum_b: f64,
    sum_aa: f64,
    sum_bb: f64,
    sum_ab: f64,
}

impl Moments {
    pub(crate) fn push(&mut self, a: f64, b: f64) {
        self.count += 1;
        self.sum_a += a;
        self.sum_b += b;
        self.sum_aa += a * a;
        self.sum_bb += b * b;
        self.sum_ab += a * b;
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Pearson correlation in `[-1, 1]`, or `None` when either side is constant
    /// or fewer than two samples were pushed.
    pub(crate) fn correlation(&self) -> Option<f64> {
        if self.count < 2 {
            return None;
        }
        let n = self.count as f64;
        let cov = self.sum_ab - self.sum_a * self.sum_b / n;
        let var_a = self.sum_aa - self.sum_a * self.sum_a / n;
        let var_b = self.sum_bb - self.sum_b * self.sum_b / n;
        let denom = var_a * var_b;
        if !(denom > f64::EPSILON) {
            return None;
        }
        let r = cov / denom.sqrt();
        if r.is_finite() {
            Some(r.clamp(-1.0, 1.0))
        } else {
            None
        }
    }
}

/// Rescales values linearly so the minimum maps to 0 and the maximum to 1.
///
/// A constant slice maps to all zeros.
pub(crate) fn normalize_min_max(values: &mut [f64]) {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;
    if !(range > 0.0) {
        values.iter_mut().for_each(|v| *v = 0.0);
        return;
    }
    for value in values.iter_mut() {
        *value = (*value - min) / range;
    }
}

/// Pearson correlation between two equally sized histograms.
pub(crate) fn histogram_correlation(a: &[f64], b: &[f64]) -> Option<f64> {
    debug_assert_eq!(a.len(), b.len());
    let mut moments = Moments::default();
    for (&va, &vb) in a.iter().zip(b) {
        moments.push(va, vb);
    }
    moments.correlation()
}

#[cfg(test)]
mod tests {
    use super::{histogram_correlation, normalize_min_max, Moments};

    #[test]
    fn correlation_of_identical_samples_is_one() {
        let mut m = Moments::default();
        for v in [3.0, 9.0, 1.0, 4.0, 7.0] {
            m.push(v, v);
        }
        assert!((m.correlation().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_of_inverted_samples_is_minus_one() {
        let mut m = Moments::default();
        for v in [0.0, 10.0, 20.0, 30.0] {
            m.push(v, 255.0 - v);
        }
        assert!((m.correlation().unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_of_constant_side_is_undefined() {
        let mut m = Moments::default();
        for v in [1.0, 2.0, 3.0] {
            m.push(v, 42.0);
        }
        assert_eq!(m.correlation(), None);
        assert_eq!(Moments::default().correlation(), None);
    }

    #[test]
    fn min_max_maps_to_unit_range() {
        let mut values = [2.0, 4.0, 6.0];
        normalize_min_max(&mut values);
        assert_eq!(values, [0.0, 0.5, 1.0]);

        let mut flat = [5.0, 5.0];
        normalize_min_max(&mut flat);
        assert_eq!(flat, [0.0, 0.0]);
    }

    #[test]
    fn histogram_correlation_ignores_scale() {
        let a = [0.0, 1.0, 4.0, 2.0];
        let b = [0.0, 2.0, 8.0, 4.0];
        assert!((histogram_correlation(&a, &b).unwrap() - 1.0).abs() < 1e-12);
    }
}
