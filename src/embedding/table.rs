use crate::Error;
use crate::Result;
use crate::Vocabulary;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Dense word embeddings, one row per [`Vocabulary`] word.
///
/// The matrix is stored row-major in a single contiguous buffer so that a
/// one-to-many distance query is a linear scan. Construction validates the
/// shape and rejects non-finite components; after that the table is never
/// mutated, so it can be shared by reference across every turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    vocabulary: Vocabulary,
    dimension: usize,
    matrix: Vec<f32>,
}

impl Table {
    pub fn new(vocabulary: Vocabulary, dimension: usize, matrix: Vec<f32>) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::CorruptCache("zero embedding dimension".into()));
        }
        if matrix.len() != vocabulary.len() * dimension {
            return Err(Error::CorruptCache(format!(
                "expected {} x {} = {} components, found {}",
                vocabulary.len(),
                dimension,
                vocabulary.len() * dimension,
                matrix.len()
            )));
        }
        if let Some(i) = matrix.iter().position(|x| !x.is_finite()) {
            return Err(Error::CorruptCache(format!(
                "non-finite component in row {} ({:?})",
                i / dimension,
                vocabulary.word(i / dimension)
            )));
        }
        Ok(Self {
            vocabulary,
            dimension,
            matrix,
        })
    }

    /// Builds a table from explicit `(word, vector)` rows.
    pub fn from_rows<'a, I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Vec<f32>)>,
    {
        let (words, vectors) = rows.into_iter().unzip::<_, _, Vec<_>, Vec<_>>();
        let dimension = vectors.first().map(Vec::len).unwrap_or(1);
        if let Some(row) = vectors.iter().position(|v| v.len() != dimension) {
            return Err(Error::CorruptCache(format!(
                "row {} ({:?}) has {} components, expected {}",
                row,
                words[row],
                vectors[row].len(),
                dimension
            )));
        }
        let vocabulary = Vocabulary::new(words)?;
        Self::new(vocabulary, dimension, vectors.concat())
    }

    /// Synthetic table of `n` words `w0..w{n-1}` with components drawn
    /// uniformly from [-1, 1). Deterministic in `seed`.
    pub fn random(n: usize, dimension: usize, seed: u64) -> Self {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let dimension = dimension.max(1);
        let vocabulary = Vocabulary::new((0..n).map(|i| format!("w{}", i)))
            .expect("generated words are distinct");
        let matrix = (0..n * dimension)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect::<Vec<f32>>();
        Self::new(vocabulary, dimension, matrix).expect("generated shape is consistent")
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// The raw row-major matrix, in vocabulary index order.
    pub fn matrix(&self) -> &[f32] {
        &self.matrix
    }

    pub fn row(&self, index: usize) -> &[f32] {
        &self.matrix[index * self.dimension..(index + 1) * self.dimension]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f32]> {
        self.matrix.chunks_exact(self.dimension)
    }

    pub fn word(&self, index: usize) -> &str {
        self.vocabulary.word(index)
    }

    pub fn index_of(&self, word: &str) -> Result<usize> {
        self.vocabulary.index_of(word)
    }

    pub fn vector_of(&self, word: &str) -> Result<&[f32]> {
        self.index_of(word).map(|i| self.row(i))
    }
}
