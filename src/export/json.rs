//! JSON export
//!
//! The document is one object keyed by raw input line, in input order:
//!
//! ```json
//! {
//!     "cat": {
//!         "original": "cat",
//!         "word": "cat",
//!         "proper": false,
//!         "palindrome": false,
//!         "counts": { "c": 1, "a": 1, "t": 1 },
//!         "anagrams": ["act"],
//!         "wordle": { "position": 1, "common": 3 }
//!     }
//! }
//! ```
//!
//! Key names and field order are relied on by consumers. Letters in `counts`
//! appear in the order they first occur in the word.

use super::Exporter;
use crate::core::{Similarity, WordRecord};
use crate::error::Result;
use crate::wordlists::WordCollection;
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use std::io::Write;

/// Pretty-printed JSON with four-space indentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn write_to<W: Write>(&self, words: &WordCollection, writer: W) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        Document(words).serialize(&mut serializer)?;
        Ok(())
    }
}

/// Whole collection, streamed in input order
struct Document<'a>(&'a WordCollection);

impl Serialize for Document<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let words = self.0;
        serializer.collect_map(
            words
                .iter()
                .map(|record| (record.original(), Entry::new(record, words))),
        )
    }
}

/// One record as consumers see it
#[derive(Serialize)]
struct Entry<'a> {
    original: &'a str,
    word: &'a str,
    proper: bool,
    palindrome: bool,
    counts: CountsInWordOrder<'a>,
    anagrams: Vec<&'a str>,
    wordle: Similarity,
}

impl<'a> Entry<'a> {
    fn new(record: &'a WordRecord, words: &'a WordCollection) -> Self {
        Self {
            original: record.original(),
            word: record.normalized(),
            proper: record.is_proper(),
            palindrome: record.is_palindrome(),
            counts: CountsInWordOrder(record),
            anagrams: words.anagram_words(record),
            wordle: record.similarity(),
        }
    }
}

/// Letter counts keyed in order of first occurrence in the normalized word
struct CountsInWordOrder<'a>(&'a WordRecord);

impl Serialize for CountsInWordOrder<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = self.0;
        let word = record.normalized();
        serializer.collect_map(
            word.char_indices()
                .filter(|&(at, letter)| !word[..at].contains(letter))
                .map(|(_, letter)| (letter, record.counts().get(letter))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisConfig, Scheduler};
    use crate::wordlists::loader::{LoadConfig, collection_from_lines};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn render(lines: &[&str]) -> String {
        let mut words = collection_from_lines("test", lines.iter().copied(), &LoadConfig::default());
        Scheduler::new(AnalysisConfig::default()).run(&mut words).unwrap();

        let mut out = Vec::new();
        JsonExporter.write_to(&words, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn record_shape() {
        let value: Value = serde_json::from_str(&render(&["cat", "act", "dog", "Cat"])).unwrap();

        assert_eq!(
            value["Cat"],
            json!({
                "original": "Cat",
                "word": "cat",
                "proper": true,
                "palindrome": false,
                "counts": {"a": 1, "c": 1, "t": 1},
                "anagrams": ["cat", "act"],
                "wordle": {"position": 4, "common": 6}
            })
        );
        assert_eq!(value["dog"]["anagrams"], json!([]));
        assert_eq!(value["dog"]["wordle"], json!({"position": 0, "common": 0}));
    }

    #[test]
    fn keys_follow_input_order() {
        let text = render(&["zebra", "apple", "mango"]);
        let zebra = text.find("\"zebra\":").unwrap();
        let apple = text.find("\"apple\":").unwrap();
        let mango = text.find("\"mango\":").unwrap();
        assert!(zebra < apple && apple < mango);
    }

    #[test]
    fn field_order_is_stable() {
        let text = render(&["level"]);
        let positions: Vec<usize> = [
            "\"original\"",
            "\"word\"",
            "\"proper\"",
            "\"palindrome\"",
            "\"counts\"",
            "\"anagrams\"",
            "\"wordle\"",
            "\"position\"",
            "\"common\"",
        ]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn counts_follow_first_occurrence() {
        let text = render(&["Tact"]);
        let counts = &text[text.find("\"counts\"").unwrap()..text.find("\"anagrams\"").unwrap()];
        let t = counts.find("\"t\"").unwrap();
        let a = counts.find("\"a\"").unwrap();
        let c = counts.find("\"c\"").unwrap();
        assert!(t < a && a < c, "{counts}");

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["Tact"]["counts"], json!({"t": 2, "a": 1, "c": 1}));
    }

    #[test]
    fn uses_four_space_indent() {
        let text = render(&["cat"]);
        assert!(text.starts_with("{\n    \"cat\": {\n        \"original\""));
    }

    #[test]
    fn empty_collection_is_empty_object() {
        assert_eq!(render(&[]), "{}");
    }
}
