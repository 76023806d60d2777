use serde::{Deserialize, Serialize};

/// Glyph table indexed by `[top_level][bottom_level]`.
pub type GlyphTable = [[char; 4]; 4];

/// Table fond sombre. Un caractère représente deux pixels superposés ; les
/// glyphes sont choisis selon la densité d'encre de leurs moitiés haute et
/// basse : ligne = pixel du haut, colonne = pixel du bas.
pub const PALETTE: GlyphTable = [
    [' ', '.', '+', 'u'],
    ['`', ':', 'L', 'd'],
    ['"', 'T', 'I', '6'],
    ['*', 'P', '9', '8'],
];

/// Table fond clair : [`PALETTE`] avec les deux axes inversés.
pub const INVERTED_PALETTE: GlyphTable = invert(&PALETTE);

const fn invert(table: &GlyphTable) -> GlyphTable {
    let mut out = [[' '; 4]; 4];
    let mut top = 0;
    while top < 4 {
        let mut bottom = 0;
        while bottom < 4 {
            out[top][bottom] = table[3 - top][3 - bottom];
            bottom += 1;
        }
        top += 1;
    }
    out
}

/// Palette choice for a canvas.
///
/// # Example
/// ```
/// use fc_core::palette::Palette;
/// assert_eq!(Palette::from_name("black-on-white"), Palette::BlackOnWhite);
/// assert_eq!(Palette::from_name("sepia"), Palette::WhiteOnBlack);
/// assert_eq!(Palette::default().glyph(3, 3), '8');
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Palette {
    /// Glyphes clairs sur terminal sombre.
    #[default]
    WhiteOnBlack,
    /// Glyphes sombres sur terminal clair.
    BlackOnWhite,
}

impl Palette {
    /// Resolve an option string. Anything other than `"black-on-white"`
    /// selects the dark-background palette.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "black-on-white" => Self::BlackOnWhite,
            "white-on-black" => Self::WhiteOnBlack,
            other => {
                log::warn!("Unknown palette '{other}', using white-on-black.");
                Self::WhiteOnBlack
            }
        }
    }

    /// Like [`Palette::from_name`], treating `None` as the default.
    #[must_use]
    pub fn from_option(name: Option<&str>) -> Self {
        name.map_or_else(Self::default, Self::from_name)
    }

    /// Option string for this palette.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WhiteOnBlack => "white-on-black",
            Self::BlackOnWhite => "black-on-white",
        }
    }

    /// The 4×4 table backing this palette.
    #[must_use]
    pub const fn table(self) -> &'static GlyphTable {
        match self {
            Self::WhiteOnBlack => &PALETTE,
            Self::BlackOnWhite => &INVERTED_PALETTE,
        }
    }

    /// Glyph for a (top, bottom) brightness-level pair, both in `0..=3`.
    #[inline(always)]
    #[must_use]
    pub fn glyph(self, top: u8, bottom: u8) -> char {
        self.table()[usize::from(top)][usize::from(bottom)]
    }
}
