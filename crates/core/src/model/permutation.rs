use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PermutationError {
    #[error("index {index} is outside 0..{len}")]
    OutOfRange { index: usize, len: usize },

    #[error("index {index} appears more than once")]
    Duplicate { index: usize },
}

/// Display order of a question's options.
///
/// Slot `d` holds the authored index of the option shown at display position `d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self((0..len).collect())
    }

    /// Build a permutation from an explicit display order.
    ///
    /// # Errors
    ///
    /// Returns `PermutationError` unless `order` is a bijection over `0..order.len()`.
    pub fn from_order(order: Vec<usize>) -> Result<Self, PermutationError> {
        let len = order.len();
        let mut seen = vec![false; len];
        for &index in &order {
            let slot = seen
                .get_mut(index)
                .ok_or(PermutationError::OutOfRange { index, len })?;
            if *slot {
                return Err(PermutationError::Duplicate { index });
            }
            *slot = true;
        }
        Ok(Self(order))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Authored index shown at `display_index`.
    #[must_use]
    pub fn original_at(&self, display_index: usize) -> Option<usize> {
        self.0.get(display_index).copied()
    }

    /// Display position of the authored option `original_index`.
    #[must_use]
    pub fn display_index_of(&self, original_index: usize) -> Option<usize> {
        self.0.iter().position(|&i| i == original_index)
    }

    /// Reorders `items` (authored order) into display order.
    #[must_use]
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.0.iter().filter_map(|&i| items.get(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_maps_each_index_to_itself() {
        let p = Permutation::identity(4);
        for i in 0..4 {
            assert_eq!(p.original_at(i), Some(i));
            assert_eq!(p.display_index_of(i), Some(i));
        }
        assert_eq!(p.original_at(4), None);
    }

    #[test]
    fn from_order_rejects_non_bijections() {
        assert_eq!(
            Permutation::from_order(vec![0, 0, 1]).unwrap_err(),
            PermutationError::Duplicate { index: 0 }
        );
        assert_eq!(
            Permutation::from_order(vec![0, 3, 1]).unwrap_err(),
            PermutationError::OutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn apply_and_lookup_agree() {
        let p = Permutation::from_order(vec![2, 0, 1]).unwrap();
        let options = ["a", "b", "c"];
        assert_eq!(p.apply(&options), vec![&"c", &"a", &"b"]);
        assert_eq!(p.display_index_of(0), Some(1));
        assert_eq!(p.original_at(0), Some(2));
    }
}
