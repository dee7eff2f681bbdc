//! Frequency-to-font-size mapping.
//!
//! Linearly interpolates each selected word's count into the
//! [`MIN_FONT`]..=[`MAX_FONT`] range, with truncating integer division. When
//! every selected word shares one count (including zero or one selected
//! words) there is no spread to interpolate over and every word gets
//! [`DEFAULT_FONT`].

use std::collections::HashMap;

use crate::select::WordCount;

/// Font size assigned to the least-frequent selected word.
pub const MIN_FONT: u32 = 11;

/// Font size assigned to the most-frequent selected word.
pub const MAX_FONT: u32 = 48;

/// Font size used when all selected counts are identical.
pub const DEFAULT_FONT: u32 = 20;

/// Map each selected word to its font-size class.
///
/// Only words in `selected` are scored. Pure function; the returned map is
/// the only effect.
#[tracing::instrument(skip_all, fields(selected = selected.len()))]
pub fn compute_font_sizes(selected: &[WordCount]) -> HashMap<String, u32> {
    let Some(most) = selected.iter().map(|w| w.count).max() else {
        return HashMap::new();
    };
    let least = selected
        .iter()
        .map(|w| w.count)
        .min()
        .unwrap_or(most);

    selected
        .iter()
        .map(|w| {
            let size = if most == least {
                DEFAULT_FONT
            } else {
                let span = (MAX_FONT - MIN_FONT) as usize;
                MIN_FONT + (span * (w.count - least) / (most - least)) as u32
            };
            (w.word.clone(), size)
        })
        .collect()
}
