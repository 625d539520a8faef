// --- Tokenizer ---
//
// A version string is scanned left to right one byte at a time. Every byte
// falls in one of three classes:
//
//   digit   0-9
//   alpha   a-z A-Z
//   other   everything else, '-' and every non-ascii byte included
//
// A maximal run of digits or of alphas becomes one piece. Runs of other are
// dropped, they only separate pieces.
//
//   "1.2.10"      -> (1, 2, 10)
//   "v2.0-beta"   -> ("v", 2, 0, "beta")
//   "2.0rc1"      -> (2, 0, "rc", 1)
//   "1.007"       -> (1, 7)
//
// With HyphenMode::PreRelease every '-' also injects a "pre" text piece
// where it stood:
//
//   "v2.0-beta"   -> ("v", 2, 0, "pre", "beta")
//   "1.0-1"       -> (1, 0, "pre", 1)
//
// Digit runs are parsed into a u64. A run that does not fit is kept as
// Piece::BigNum and is compared as text using its digits.

use crate::Error;

/// Text piece injected for every `-` under [`HyphenMode::PreRelease`].
pub const PRE_RELEASE: &str = "pre";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Num {
        n: u64,
        raw: &'a str,
    },
    /// digit run wider than a u64
    BigNum(&'a str),
    Text(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Numeric,
    Text,
}

impl<'a> Piece<'a> {

    pub fn kind(&self) -> PieceKind {
        match self {
            Piece::Num { .. } | Piece::BigNum(_) => PieceKind::Numeric,
            Piece::Text(_) => PieceKind::Text,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Piece::BigNum(_))
    }

    /// The digits or letters this piece was made from.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Piece::Num { raw, .. } => raw,
            Piece::BigNum(raw) => raw,
            Piece::Text(raw) => raw,
        }
    }
}

impl std::fmt::Display for Piece<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Num { raw, .. } => f.write_str(raw),
            Piece::BigNum(raw) => write!(f, "{raw}!"),
            Piece::Text(raw) => write!(f, "\"{raw}\""),
        }
    }
}

/// How a `-` in the input is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HyphenMode {
    /// plain separator, dropped like '.' or '_'
    #[default]
    Separator,
    /// marks a pre-release, see [`PRE_RELEASE`]
    #[cfg_attr(feature = "serde", serde(alias = "pre", alias = "prerelease"))]
    PreRelease,
}

impl std::str::FromStr for HyphenMode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "separator" | "sep" => Ok(HyphenMode::Separator),
            "pre-release" | "prerelease" | "pre" => Ok(HyphenMode::PreRelease),
            _ => Err(Error::UnknownHyphenMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for HyphenMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HyphenMode::Separator => f.write_str("separator"),
            HyphenMode::PreRelease => f.write_str("pre-release"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    hyphen: HyphenMode,
}

impl Tokenizer {

    pub const fn new(hyphen: HyphenMode) -> Self {
        Self { hyphen }
    }

    pub fn hyphen_mode(&self) -> HyphenMode {
        self.hyphen
    }

    pub fn pieces<'a>(&self, v: &'a str) -> PieceIter<'a> {
        PieceIter {
            v,
            idx: 0,
            hyphen: self.hyphen,
        }
    }

    pub fn tokenize<'a>(&self, v: &'a str) -> Vec<Piece<'a>> {
        self.pieces(v).collect()
    }

    /// Compare two version strings without collecting their pieces.
    pub fn compare(&self, a: &str, b: &str) -> std::cmp::Ordering {
        crate::compare::compare_iter(self.pieces(a), self.pieces(b))
    }
}

/// Split a version string into pieces, treating `-` as a plain separator.
pub fn tokenize(v: &str) -> Vec<Piece<'_>> {
    Tokenizer::default().tokenize(v)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Class {
    Digit,
    Alpha,
    Other,
}

fn classify(b: u8) -> Class {
    if b.is_ascii_digit() {
        Class::Digit
    } else if b.is_ascii_alphabetic() {
        Class::Alpha
    } else {
        Class::Other
    }
}

// raw is known to be all ascii digits, so the parse can only fail on overflow
fn parse_num(raw: &str) -> Piece<'_> {
    match raw.parse::<u64>() {
        Ok(n) => Piece::Num { n, raw },
        Err(_) => Piece::BigNum(raw),
    }
}

#[derive(Debug, Clone)]
pub struct PieceIter<'a> {
    v: &'a str,
    idx: usize,
    hyphen: HyphenMode,
}

impl<'a> Iterator for PieceIter<'a> {
    type Item = Piece<'a>;
    fn next(&mut self) -> Option<Self::Item> {

        let bytes = self.v.as_bytes();

        while self.idx < bytes.len() {

            let start = self.idx;
            let class = classify(bytes[start]);

            if class == Class::Other {
                self.idx += 1;
                if bytes[start] == b'-' && self.hyphen == HyphenMode::PreRelease {
                    return Some(Piece::Text(PRE_RELEASE));
                }
                continue;
            }

            let len = bytes[start..].iter().take_while(|&&b| classify(b) == class).count();
            self.idx = start + len;

            // start and end both sit next to ascii bytes, always a char boundary
            let raw = &self.v[start..self.idx];

            return Some(match class {
                Class::Digit => parse_num(raw),
                _ => Piece::Text(raw),
            });
        }

        None
    }
}

impl std::iter::FusedIterator for PieceIter<'_> {}
