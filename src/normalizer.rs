//! Line Normalization
//!
//! OCR engines emit one fragment per visual line, which chops sentences
//! wherever the photographed page happened to wrap. This pass stitches the
//! fragments back into paragraphs.

/// Punctuation that marks the end of a paragraph-worthy line
const TERMINAL_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ':', ';'];

/// Merge raw OCR line fragments into paragraphs.
///
/// A fragment continues the previous paragraph unless that paragraph
/// already ends with terminal punctuation, in which case the fragment
/// starts a new one. Continuations are joined with a single space and
/// fragments are trimmed either way.
///
/// The heuristic is deliberately lossy: there is no real sentence-boundary
/// detection, only the punctuation test above.
pub fn merge_fragments<S: AsRef<str>>(fragments: &[S]) -> Vec<String> {
    let mut paragraphs: Vec<String> = Vec::new();

    for fragment in fragments {
        let line = fragment.as_ref().trim();
        match paragraphs.last_mut() {
            Some(last) if !ends_with_terminal(last) => {
                last.push(' ');
                last.push_str(line);
            }
            _ => paragraphs.push(line.to_string()),
        }
    }

    paragraphs
}

fn ends_with_terminal(text: &str) -> bool {
    text.chars()
        .last()
        .is_some_and(|c| TERMINAL_PUNCTUATION.contains(&c))
}
