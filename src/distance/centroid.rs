/// Running mean of embeddings.
///
/// Vectors are absorbed one at a time, and the mean is only materialized
/// on [`Centroid::reveal`]. Absorbing nothing reveals nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Centroid {
    sum: Vec<f32>,
    n: usize,
}

impl Centroid {
    pub fn new(dimension: usize) -> Self {
        Self {
            sum: vec![0.; dimension],
            n: 0,
        }
    }
    pub fn absorb(&mut self, x: &[f32]) {
        debug_assert_eq!(x.len(), self.sum.len());
        self.sum.iter_mut().zip(x).for_each(|(s, x)| *s += x);
        self.n += 1;
    }
    pub fn reveal(&self) -> Option<Vec<f32>> {
        match self.n {
            0 => None,
            n => Some(self.sum.iter().map(|s| s / n as f32).collect()),
        }
    }
}
