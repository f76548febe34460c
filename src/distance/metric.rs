use crate::Energy;
use crate::Table;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

/// Distance between two embeddings. Lower always means closer, so the same
/// masked argmin / argmax applies whichever metric a strategy is configured
/// with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// L2 norm of the difference.
    #[default]
    Euclidean,
    /// Negative inner product. Equals negative cosine similarity on
    /// normalized embeddings, which is what sentence encoders emit.
    Dot,
}

impl Metric {
    pub fn distance(&self, x: &[f32], y: &[f32]) -> Energy {
        debug_assert_eq!(x.len(), y.len());
        match self {
            Self::Euclidean => Self::euclidean(x, y),
            Self::Dot => -Self::dot(x, y),
        }
    }

    /// One distance per candidate, in candidate order.
    pub fn distances<'a, I>(&self, reference: &[f32], candidates: I) -> Vec<Energy>
    where
        I: IntoIterator<Item = &'a [f32]>,
    {
        candidates
            .into_iter()
            .map(|candidate| self.distance(reference, candidate))
            .collect()
    }

    /// Distances from `reference` to every row of the table, indexed like the
    /// vocabulary.
    pub fn against(&self, reference: &[f32], table: &Table) -> Vec<Energy> {
        self.distances(reference, table.rows())
    }

    fn euclidean(x: &[f32], y: &[f32]) -> Energy {
        x.iter()
            .zip(y)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<Energy>()
            .sqrt()
    }

    fn dot(x: &[f32], y: &[f32]) -> Energy {
        x.iter().zip(y).map(|(a, b)| a * b).sum::<Energy>()
    }
}

impl FromStr for Metric {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "euclidean" | "l2" => Ok(Self::Euclidean),
            "dot" | "cosine" => Ok(Self::Dot),
            other => Err(format!("unknown metric {:?}", other)),
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Euclidean => write!(f, "euclidean"),
            Self::Dot => write!(f, "dot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn vector(rng: &mut SmallRng, n: usize) -> Vec<f32> {
        (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
    }

    #[test]
    fn is_euclidean_symmetric() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..256 {
            let ref x = vector(rng, 384);
            let ref y = vector(rng, 384);
            assert!(Metric::Euclidean.distance(x, y) == Metric::Euclidean.distance(y, x));
        }
    }

    #[test]
    fn is_euclidean_zero_on_self() {
        let ref x = vector(&mut SmallRng::seed_from_u64(1), 64);
        assert!(Metric::Euclidean.distance(x, x) == 0.);
    }

    #[test]
    fn euclidean_three_four_five() {
        assert_eq!(Metric::Euclidean.distance(&[0., 0.], &[3., 4.]), 5.);
    }

    #[test]
    fn dot_prefers_aligned_vectors() {
        let x = [1., 0.];
        let aligned = [1., 0.];
        let orthogonal = [0., 1.];
        let opposite = [-1., 0.];
        assert_eq!(Metric::Dot.distance(&x, &aligned), -1.);
        assert_eq!(Metric::Dot.distance(&x, &orthogonal), 0.);
        assert_eq!(Metric::Dot.distance(&x, &opposite), 1.);
    }

    #[test]
    fn against_covers_every_row() {
        let table = Table::random(32, 8, 5);
        let distances = Metric::Euclidean.against(table.row(3), &table);
        assert_eq!(distances.len(), 32);
        assert_eq!(distances[3], 0.);
    }

    #[test]
    fn parse_metric() {
        assert_eq!("L2".parse::<Metric>(), Ok(Metric::Euclidean));
        assert_eq!("cosine".parse::<Metric>(), Ok(Metric::Dot));
        assert!("manhattan".parse::<Metric>().is_err());
        assert_eq!(Metric::Dot.to_string().parse::<Metric>(), Ok(Metric::Dot));
    }
}
