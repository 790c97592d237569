//! Language catalogs.
//!
//! A `Catalog` is an immutable pair of ordered lists: the programming
//! languages snippets can be generated in, and the spoken-language codes they
//! can be translated to. The compiler receives one at construction and draws
//! random subsets from it on every run.
//!
//! - `programming`: `ProgrammingLanguage` and the default programming catalog
//! - `spoken`: `SpokenLanguage`, the fixed set of translation targets

mod programming;
mod spoken;

pub use programming::{ProgrammingLanguage, PROGRAMMING_LANGUAGES};
pub use spoken::{SpokenLanguage, SPOKEN_LANGUAGES};

use crate::error::CompileError;
use rand::seq::IndexedRandom;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    programming: Vec<ProgrammingLanguage>,
    spoken: Vec<String>,
}

/// Languages drawn for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub programming: Vec<ProgrammingLanguage>,
    pub spoken: Vec<String>,
}

impl Catalog {
    /// Build a catalog from ordered lists. Repeated entries are dropped,
    /// keeping the first occurrence, so every entry can be drawn at most once.
    pub fn new<P, S>(programming: P, spoken: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<ProgrammingLanguage>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            programming: dedup_ordered(programming.into_iter().map(Into::into)),
            spoken: dedup_ordered(spoken.into_iter().map(Into::into)),
        }
    }

    pub fn programming(&self) -> &[ProgrammingLanguage] {
        &self.programming
    }

    pub fn spoken(&self) -> &[String] {
        &self.spoken
    }

    /// Draw `num_programming` programming languages and `num_spoken` spoken
    /// codes, uniformly and without replacement.
    ///
    /// # Errors
    /// `CompileError::SampleTooLarge` when a count exceeds its catalog.
    pub fn select<R: Rng + ?Sized>(
        &self,
        num_programming: usize,
        num_spoken: usize,
        rng: &mut R,
    ) -> Result<Selection, CompileError> {
        Ok(Selection {
            programming: sample(&self.programming, num_programming, "programming", &mut *rng)?,
            spoken: sample(&self.spoken, num_spoken, "spoken", &mut *rng)?,
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            PROGRAMMING_LANGUAGES.iter().copied(),
            SpokenLanguage::codes(),
        )
    }
}

fn dedup_ordered<T: PartialEq>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut unique: Vec<T> = Vec::new();
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

fn sample<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    amount: usize,
    catalog: &'static str,
    rng: &mut R,
) -> Result<Vec<T>, CompileError> {
    if amount > items.len() {
        return Err(CompileError::SampleTooLarge {
            requested: amount,
            available: items.len(),
            catalog,
        });
    }
    Ok(items.choose_multiple(rng, amount).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_default_catalog_contents() {
        let catalog = Catalog::default();
        let names: Vec<_> = catalog.programming().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Python", "JavaScript", "Java", "C++", "Ruby"]);
        assert_eq!(catalog.spoken(), ["es", "fr", "de", "zh", "ru"]);
    }

    #[test]
    fn test_new_drops_repeated_entries() {
        let catalog = Catalog::new(["Python", "Ruby", "Python"], ["es", "es", "fr"]);
        let names: Vec<_> = catalog.programming().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Python", "Ruby"]);
        assert_eq!(catalog.spoken(), ["es", "fr"]);
    }

    #[test]
    fn test_select_from_repeated_entries_never_repeats() {
        let catalog = Catalog::new(["Python", "Python"], ["es", "es"]);
        let selection = catalog.select(1, 1, &mut rand::rng()).expect("Should select");
        assert_eq!(selection.programming, vec![ProgrammingLanguage::new("Python")]);
        assert_eq!(selection.spoken, vec!["es"]);

        let err = catalog.select(2, 2, &mut rand::rng()).unwrap_err();
        assert!(matches!(
            err,
            CompileError::SampleTooLarge {
                requested: 2,
                available: 1,
                catalog: "programming"
            }
        ));
    }

    #[test]
    fn test_select_full_catalog_returns_everything() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(7);
        let selection = catalog.select(5, 5, &mut rng).expect("Should select");

        let mut names: Vec<_> = selection.programming.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["C++", "Java", "JavaScript", "Python", "Ruby"]);

        let mut codes = selection.spoken.clone();
        codes.sort_unstable();
        assert_eq!(codes, vec!["de", "es", "fr", "ru", "zh"]);
    }

    #[test]
    fn test_select_zero() {
        let catalog = Catalog::default();
        let selection = catalog.select(0, 0, &mut rand::rng()).expect("Should select");
        assert!(selection.programming.is_empty());
        assert!(selection.spoken.is_empty());
    }

    #[test]
    fn test_select_too_many_programming_languages() {
        let catalog = Catalog::new(["Python", "Ruby"], ["es"]);
        let err = catalog.select(3, 1, &mut rand::rng()).unwrap_err();
        assert!(matches!(
            err,
            CompileError::SampleTooLarge {
                requested: 3,
                available: 2,
                catalog: "programming"
            }
        ));
    }

    #[test]
    fn test_select_too_many_spoken_languages() {
        let catalog = Catalog::default();
        let err = catalog.select(1, 6, &mut rand::rng()).unwrap_err();
        assert!(matches!(
            err,
            CompileError::SampleTooLarge {
                catalog: "spoken",
                ..
            }
        ));
    }

    proptest! {
        #[test]
        fn prop_programming_sample_is_distinct_subset(n in 0usize..=5, seed in any::<u64>()) {
            let catalog = Catalog::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let selection = catalog.select(n, 0, &mut rng).unwrap();

            prop_assert_eq!(selection.programming.len(), n);
            let distinct: HashSet<_> = selection.programming.iter().collect();
            prop_assert_eq!(distinct.len(), n);
            for lang in &selection.programming {
                prop_assert!(catalog.programming().contains(lang));
            }
        }

        #[test]
        fn prop_spoken_sample_is_distinct_subset(n in 0usize..=5, seed in any::<u64>()) {
            let catalog = Catalog::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let selection = catalog.select(0, n, &mut rng).unwrap();

            prop_assert_eq!(selection.spoken.len(), n);
            let distinct: HashSet<_> = selection.spoken.iter().collect();
            prop_assert_eq!(distinct.len(), n);
            for code in &selection.spoken {
                prop_assert!(catalog.spoken().contains(code));
            }
        }
    }
}
