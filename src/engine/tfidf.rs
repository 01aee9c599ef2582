use std::collections::{BTreeMap, BTreeSet};

use super::text::tokenize;

/// Sparse row vector: parallel arrays of ascending column indices and
/// their weights.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Dot product by merge-join over the sorted index arrays.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let mut sum = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
            }
        }
        sum
    }

    /// True when the source document produced no indexable terms.
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    fn l2_normalize(&mut self) {
        let norm: f64 = self.values.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut self.values {
                *value /= norm;
            }
        }
    }
}

/// A fitted TF-IDF vector space: the vocabulary discovered from a corpus
/// and one unit-length weight vector per document.
///
/// Term weight is raw frequency scaled by smooth inverse document
/// frequency, `ln((1 + n) / (1 + df)) + 1`, so terms appearing in nearly
/// every document shrink toward the floor while rare distinguishing terms
/// dominate. Rows are L2-normalized, making a dot product between any two
/// of them their cosine similarity. Columns are assigned in sorted term
/// order, so refitting the same corpus reproduces the same vectors.
#[derive(Debug)]
pub struct VectorSpace {
    vocabulary: BTreeMap<String, u32>,
    vectors: Vec<SparseVector>,
}

impl VectorSpace {
    /// Builds the vocabulary and per-document vectors from a corpus.
    ///
    /// An empty document yields a zero vector rather than an error; its
    /// similarity to anything, itself included, is 0.
    pub fn fit<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokenized: Vec<Vec<String>> = documents.into_iter().map(tokenize).collect();
        let document_count = tokenized.len();

        // Document frequency per term, over unique terms per document.
        let mut document_frequency: BTreeMap<&str, u32> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let vocabulary: BTreeMap<String, u32> = document_frequency
            .keys()
            .enumerate()
            .map(|(column, term)| (term.to_string(), column as u32))
            .collect();

        let idf: Vec<f64> = document_frequency
            .values()
            .map(|&df| ((1 + document_count) as f64 / (1 + df) as f64).ln() + 1.0)
            .collect();

        let vectors = tokenized
            .iter()
            .map(|tokens| {
                let mut term_counts: BTreeMap<u32, f64> = BTreeMap::new();
                for token in tokens {
                    if let Some(&column) = vocabulary.get(token.as_str()) {
                        *term_counts.entry(column).or_insert(0.0) += 1.0;
                    }
                }
                let mut vector = SparseVector {
                    indices: term_counts.keys().copied().collect(),
                    values: term_counts
                        .iter()
                        .map(|(&column, &count)| count * idf[column as usize])
                        .collect(),
                };
                vector.l2_normalize();
                vector
            })
            .collect();

        Self {
            vocabulary,
            vectors,
        }
    }

    /// One unit-length vector per document, in corpus order.
    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    /// Number of distinct terms discovered from the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_excludes_stop_words() {
        let space = VectorSpace::fit(["the cat sat"]);
        assert_eq!(space.vocabulary_size(), 2);
        assert!(space.vocabulary.contains_key("cat"));
        assert!(space.vocabulary.contains_key("sat"));
        assert!(!space.vocabulary.contains_key("the"));
    }

    #[test]
    fn test_empty_document_yields_zero_vector() {
        let space = VectorSpace::fit(["space war", ""]);
        assert!(!space.vectors[0].is_zero());
        assert!(space.vectors[1].is_zero());
        assert_eq!(space.vectors[1].dot(&space.vectors[0]), 0.0);
        assert_eq!(space.vectors[1].dot(&space.vectors[1]), 0.0);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let space = VectorSpace::fit(["space war robots", "romantic comedy"]);
        for vector in space.vectors() {
            let norm: f64 = vector.values.iter().map(|v| v * v).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_corpus_wide_terms_are_down_weighted() {
        // "apple" occurs in every document; its idf floors at 1 while the
        // distinguishing terms score higher.
        let space = VectorSpace::fit(["apple banana", "apple cherry", "apple durian"]);
        let apple = space.vocabulary["apple"] as usize;
        let banana = space.vocabulary["banana"] as usize;
        let first = &space.vectors[0];
        let weight_of = |column: usize| {
            let position = first
                .indices
                .iter()
                .position(|&index| index as usize == column)
                .unwrap();
            first.values[position]
        };
        assert!(weight_of(banana) > weight_of(apple));
    }

    #[test]
    fn test_identical_documents_have_cosine_one() {
        let space = VectorSpace::fit(["space war robots", "space war robots"]);
        let similarity = space.vectors[0].dot(&space.vectors[1]);
        assert!((similarity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_documents_have_cosine_zero() {
        let space = VectorSpace::fit(["space war robots", "romantic comedy"]);
        assert_eq!(space.vectors[0].dot(&space.vectors[1]), 0.0);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let corpus = ["space war robots", "romantic comedy", "space romance"];
        let first = VectorSpace::fit(corpus);
        let second = VectorSpace::fit(corpus);
        assert_eq!(first.vectors, second.vectors);
        assert_eq!(first.vocabulary, second.vocabulary);
    }
}
