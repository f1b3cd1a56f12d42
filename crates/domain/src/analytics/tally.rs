use std::collections::BTreeMap;

use repo_visualiser_shared_kernel::Language;

use crate::model::{FileRecord, LanguageCount};

/// Counts files per detected language.
pub struct LanguageTally;

impl LanguageTally {
    /// Named languages by descending count, then the unknown bucket.
    ///
    /// Equal counts are ordered by language name so the table is stable
    /// across runs. The unknown bucket is omitted when empty.
    pub fn tally<'a, I>(classified: I) -> Vec<LanguageCount>
    where
        I: IntoIterator<Item = &'a FileRecord>,
    {
        Self::from_languages(classified.into_iter().map(|record| &record.language))
    }

    pub fn from_languages<'a, I>(languages: I) -> Vec<LanguageCount>
    where
        I: IntoIterator<Item = &'a Language>,
    {
        let mut named: BTreeMap<&str, usize> = BTreeMap::new();
        let mut unknown = 0usize;
        for language in languages {
            match language {
                Language::Named(name) => *named.entry(name.as_str()).or_insert(0) += 1,
                Language::Unknown => unknown += 1,
            }
        }

        let mut counts: Vec<LanguageCount> =
            named.into_iter().map(|(name, count)| LanguageCount::new(Language::named(name), count)).collect();
        // stable sort keeps the BTreeMap's name order for ties
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        if unknown > 0 {
            counts.push(LanguageCount::new(Language::Unknown, unknown));
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn languages(spec: &[(&str, usize)]) -> Vec<Language> {
        spec.iter()
            .flat_map(|(name, n)| std::iter::repeat_n(Language::from(*name), *n))
            .collect()
    }

    #[test]
    fn unknown_is_appended_last_regardless_of_size() {
        let langs = languages(&[("Go", 3), ("JavaScript", 1), ("", 2)]);
        let counts = LanguageTally::from_languages(&langs);
        assert_eq!(
            counts,
            vec![
                LanguageCount::new("Go", 3),
                LanguageCount::new("JavaScript", 1),
                LanguageCount::new(Language::Unknown, 2),
            ]
        );
    }

    #[test]
    fn large_unknown_bucket_still_last() {
        let langs = languages(&[("Rust", 1), ("", 40)]);
        let counts = LanguageTally::from_languages(&langs);
        assert_eq!(counts.last().map(|c| c.language.is_unknown()), Some(true));
        assert_eq!(counts[0].language, Language::from("Rust"));
    }

    #[test]
    fn ties_are_ordered_by_name() {
        let langs = languages(&[("Python", 2), ("C", 2), ("Go", 5)]);
        let names: Vec<String> =
            LanguageTally::from_languages(&langs).into_iter().map(|c| c.language.to_string()).collect();
        assert_eq!(names, vec!["Go", "C", "Python"]);
    }

    #[test]
    fn tally_reads_record_languages() {
        let records = vec![
            FileRecord::new("a.go", 1).with_language("Go"),
            FileRecord::new("b.go", 1).with_language("Go"),
            FileRecord::new("c.bin", 1),
        ];
        let counts = LanguageTally::tally(&records);
        assert_eq!(counts, vec![LanguageCount::new("Go", 2), LanguageCount::new(Language::Unknown, 1)]);
    }

    #[test]
    fn empty_input_is_empty_table() {
        assert!(LanguageTally::from_languages(&Vec::<Language>::new()).is_empty());
    }
}
