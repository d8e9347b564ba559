use std::ops::Index;
use std::slice;

/// Fraction of vertices in the largest connected component, recorded once
/// before any removal and once after every removal.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectivityTrajectory {
    ratios: Vec<f64>,
}

impl ConnectivityTrajectory {
    pub(crate) fn new(ratios: Vec<f64>) -> Self {
        debug_assert!(!ratios.is_empty());
        Self { ratios }
    }

    pub fn ratios(&self) -> &[f64] {
        self.ratios.as_slice()
    }

    pub fn into_ratios(self) -> Vec<f64> {
        self.ratios
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Number of removals the trajectory covers.
    pub fn removals(&self) -> usize {
        self.ratios.len().saturating_sub(1)
    }

    pub fn initial(&self) -> f64 {
        self.ratios[0]
    }

    pub fn last(&self) -> f64 {
        self.ratios[self.ratios.len() - 1]
    }

    pub fn is_non_increasing(&self) -> bool {
        self.ratios.windows(2).all(|w| w[1] <= w[0])
    }

    pub fn first_drop_below(&self, threshold: f64) -> usize {
        first_drop_below(&self.ratios, threshold)
    }

    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.ratios.iter()
    }
}

impl Index<usize> for ConnectivityTrajectory {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.ratios[index]
    }
}

impl<'a> IntoIterator for &'a ConnectivityTrajectory {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.ratios.iter()
    }
}

/// Smallest index whose ratio is strictly below `threshold`, or
/// `trajectory.len()` if the trajectory never drops below it.
pub fn first_drop_below(trajectory: &[f64], threshold: f64) -> usize {
    trajectory
        .iter()
        .position(|ratio| *ratio < threshold)
        .unwrap_or_else(|| trajectory.len())
}
