//! Text helpers for authored copy.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Split a label on `\n` for line-by-line rendering. Empty lines are kept.
pub fn label_lines(label: &str) -> impl Iterator<Item = &str> {
    label.split('\n')
}
