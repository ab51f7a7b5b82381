use super::darkness::ink_percentage;
use super::raster::{rasterize_glyph, CanvasSpec, FontFace};

const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Supported characters in calibration order: lowercase, uppercase,
/// digits, punctuation, then the space. Equally dark characters keep
/// this order in the calibration, which makes nearest-character
/// lookup reproducible.
pub fn charset() -> impl Iterator<Item = char> {
    ('a'..='z')
        .chain('A'..='Z')
        .chain('0'..='9')
        .chain(PUNCTUATION.chars())
        .chain(std::iter::once(' '))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharDarkness {
    pub ch: char,
    pub darkness: f32,
}

/// Character to glyph-darkness table, sorted ascending by darkness.
/// Built once per font configuration and read-only afterward.
#[derive(Clone, Debug)]
pub struct Calibration {
    entries: Vec<CharDarkness>,
}

impl Calibration {
    /// Measure every supported character through the glyph rasterizer.
    pub fn measure(face: &FontFace, spec: &CanvasSpec, ink_budget: f32) -> Self {
        let entries = charset()
            .map(|ch| {
                let bitmap = rasterize_glyph(face, ch, spec);
                CharDarkness { ch, darkness: ink_percentage(&bitmap, ink_budget) }
            })
            .collect();
        Self::from_measured(entries)
    }

    /// Build a calibration from pre-computed values, e.g. cached
    /// measurements or a hand-picked table in tests.
    pub fn from_entries(entries: Vec<(char, f32)>) -> Self {
        Self::from_measured(
            entries.into_iter().map(|(ch, darkness)| CharDarkness { ch, darkness }).collect(),
        )
    }

    fn from_measured(mut entries: Vec<CharDarkness>) -> Self {
        assert!(!entries.is_empty(), "calibration must contain at least one character");
        // Stable sort: ties keep their insertion order.
        entries.sort_by(|a, b| a.darkness.total_cmp(&b.darkness));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending darkness order.
    pub fn entries(&self) -> &[CharDarkness] {
        &self.entries
    }

    /// The character whose calibrated darkness is closest to the
    /// target. Ties resolve to the earlier entry in ascending order.
    pub fn nearest(&self, darkness: f32) -> char {
        let mut best = self.entries[0];
        let mut best_distance = (best.darkness - darkness).abs();
        for entry in &self.entries[1..] {
            let distance = (entry.darkness - darkness).abs();
            if distance < best_distance {
                best = *entry;
                best_distance = distance;
            }
        }
        best.ch
    }

    pub fn lightest(&self) -> char {
        self.entries[0].ch
    }

    pub fn darkest(&self) -> char {
        self.entries[self.entries.len() - 1].ch
    }
}
