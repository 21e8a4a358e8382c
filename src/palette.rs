//! Luminance-to-glyph mapping

/// Ordered glyph ramp indexed by a luminance level.
///
/// Lookups are clamped to the brightest glyph; callers are expected to have
/// filtered out negative (unlit) levels before indexing.
#[derive(Debug, Clone)]
pub struct Palette {
    glyphs: Vec<char>,
    blank: char,
}

impl Palette {
    pub fn new(ramp: &str) -> Self {
        let glyphs: Vec<char> = ramp.chars().collect();
        assert!(!glyphs.is_empty(), "palette ramp must not be empty");
        Self { glyphs, blank: ' ' }
    }

    /// Glyph for a luminance level, clamped to the brightest entry
    pub fn glyph(&self, level: usize) -> char {
        self.glyphs[level.min(self.glyphs.len() - 1)]
    }

    /// The glyph used for cells no sample ever reached
    pub fn blank(&self) -> char {
        self.blank
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Whether a character is either the blank glyph or a ramp member
    pub fn contains(&self, c: char) -> bool {
        c == self.blank || self.glyphs.contains(&c)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(crate::ILLUMINATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_length() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 12);
    }

    #[test]
    fn test_glyph_order() {
        let palette = Palette::default();
        assert_eq!(palette.glyph(0), '.');
        assert_eq!(palette.glyph(11), '@');
    }

    #[test]
    fn test_glyph_clamps_past_end() {
        let palette = Palette::default();
        assert_eq!(palette.glyph(100), '@');
    }

    #[test]
    fn test_contains() {
        let palette = Palette::default();
        assert!(palette.contains(' '));
        assert!(palette.contains('~'));
        assert!(!palette.contains('x'));
    }
}
