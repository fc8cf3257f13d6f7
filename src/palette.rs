//! Character palettes for the digital rain.

use std::fmt;
use std::str::FromStr;

const BINARY: &str = "01";
const HEX: &str = "0123456789ABCDEF";
// Half-width katakana followed by ASCII digits and capitals.
const WIDE: &str = "ｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜﾝ0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Which glyph set the rain draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CharsetMode {
    Binary,
    Hex,
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "wide"))]
    Matrix,
}

impl CharsetMode {
    pub fn glyphs(self) -> Vec<char> {
        let src = match self {
            CharsetMode::Binary => BINARY,
            CharsetMode::Hex => HEX,
            CharsetMode::Matrix => WIDE,
        };
        src.chars().collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CharsetMode::Binary => "binary",
            CharsetMode::Hex => "hex",
            CharsetMode::Matrix => "matrix",
        }
    }

    /// Lenient parse used at the JS boundary: unknown names fall back to
    /// [`CharsetMode::Matrix`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for CharsetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown charset mode `{0}`")]
pub struct UnknownCharset(pub String);

impl FromStr for CharsetMode {
    type Err = UnknownCharset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" => Ok(CharsetMode::Binary),
            "hex" => Ok(CharsetMode::Hex),
            "matrix" | "wide" => Ok(CharsetMode::Matrix),
            other => Err(UnknownCharset(other.to_string())),
        }
    }
}

/// Immutable glyph list picked from a [`CharsetMode`].
#[derive(Debug, Clone)]
pub struct Palette {
    mode: CharsetMode,
    glyphs: Vec<char>,
}

impl Palette {
    pub fn new(mode: CharsetMode) -> Self {
        Self { mode, glyphs: mode.glyphs() }
    }

    pub fn mode(&self) -> CharsetMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyph(&self, idx: usize) -> char {
        self.glyphs[idx % self.glyphs.len()]
    }

    pub fn contains(&self, c: char) -> bool {
        self.glyphs.contains(&c)
    }
}
