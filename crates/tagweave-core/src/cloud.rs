//! Tag cloud pipeline.
//!
//! Ties the stages together: frequency counting, top-N selection, font
//! scaling, and document rendering. [`TagCloud`] is the built artifact;
//! [`CloudReport`] is its serializable summary for JSON output.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frequency::count_frequencies;
use crate::html::render_document;
use crate::scale::compute_font_sizes;
use crate::select::{Selection, WordCount, select_top};

/// A fully built tag cloud, ready to render.
#[derive(Debug, Clone)]
pub struct TagCloud {
    /// The word count that was requested (before clamping).
    pub requested: usize,
    /// Number of distinct words in the input.
    pub distinct: usize,
    /// The selected words, in both orders.
    pub selection: Selection,
    /// Font size class per selected word.
    pub font_sizes: HashMap<String, u32>,
}

/// Serializable summary of a built cloud.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CloudReport {
    /// The word count that was requested.
    pub requested: usize,
    /// Number of distinct words in the input.
    pub distinct_words: usize,
    /// Number of words actually rendered (requested, clamped to distinct).
    pub rendered: usize,
    /// Selected words by count descending.
    pub words: Vec<WordCount>,
}

impl TagCloud {
    /// Build a cloud from input text, selecting the top `n` words.
    ///
    /// `n` greater than the distinct word count is clamped, never an error.
    #[tracing::instrument(skip(text), fields(text_len = text.len(), n))]
    pub fn build(text: &str, n: usize) -> Self {
        let frequencies = count_frequencies(text);
        let distinct = frequencies.len();
        let selection = select_top(n, &frequencies);
        let font_sizes = compute_font_sizes(&selection.by_count);
        tracing::debug!(distinct, rendered = selection.len(), "cloud built");

        Self {
            requested: n,
            distinct,
            selection,
            font_sizes,
        }
    }

    /// Number of words the cloud will render.
    pub const fn len(&self) -> usize {
        self.selection.len()
    }

    /// Returns `true` if no words were selected.
    pub const fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Render the complete HTML document for this cloud.
    ///
    /// The title and heading state the rendered count, which after clamping
    /// may be smaller than the requested one.
    pub fn to_html(&self, source: &str) -> String {
        render_document(
            self.len(),
            source,
            &self.selection.alphabetical,
            &self.font_sizes,
        )
    }

    /// Summarize the cloud for JSON output.
    pub fn report(&self) -> CloudReport {
        CloudReport {
            requested: self.requested,
            distinct_words: self.distinct,
            rendered: self.len(),
            words: self.selection.by_count.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "the cat sat on the mat. The cat ran.";

    #[test]
    fn end_to_end_worked_example() {
        let cloud = TagCloud::build(SAMPLE, 3);
        assert_eq!(cloud.distinct, 6);
        assert_eq!(cloud.len(), 3);

        let by_count: Vec<(&str, usize)> = cloud
            .selection
            .by_count
            .iter()
            .map(|w| (w.word.as_str(), w.count))
            .collect();
        assert_eq!(by_count, vec![("the", 3), ("cat", 2), ("mat", 1)]);

        assert_eq!(cloud.font_sizes.get("the"), Some(&48));
        assert_eq!(cloud.font_sizes.get("cat"), Some(&29));
        assert_eq!(cloud.font_sizes.get("mat"), Some(&11));

        let html = cloud.to_html("input.txt");
        let cat = html.find(">cat</span>").unwrap();
        let mat = html.find(">mat</span>").unwrap();
        let the = html.find(">the</span>").unwrap();
        assert!(cat < mat && mat < the, "body must be alphabetical");
    }

    #[test]
    fn clamped_cloud_reports_truthfully() {
        let cloud = TagCloud::build("one two three", 99);
        assert_eq!(cloud.requested, 99);
        assert_eq!(cloud.len(), 3);

        let report = cloud.report();
        assert_eq!(report.rendered, 3);
        assert_eq!(report.distinct_words, 3);

        // Heading states the rendered count, not the request
        assert!(cloud.to_html("x.txt").contains("Top 3 words in x.txt"));
    }

    #[test]
    fn empty_input_builds_empty_cloud() {
        let cloud = TagCloud::build("", 5);
        assert!(cloud.is_empty());
        assert!(cloud.font_sizes.is_empty());
        let html = cloud.to_html("empty.txt");
        assert!(html.contains("Top 0 words"));
    }

    #[test]
    fn report_serializes_to_json() {
        let cloud = TagCloud::build(SAMPLE, 2);
        let json = serde_json::to_value(cloud.report()).unwrap();
        assert_eq!(json["rendered"], 2);
        assert_eq!(json["words"][0]["word"], "the");
        assert_eq!(json["words"][0]["count"], 3);
    }
}
