// --- Comparator ---
//
// Two piece sequences are walked side by side. At each position:
//
//   num  vs num     by value, leading zeros do not count (007 == 7)
//   text vs text    by bytes, ascii order (upper case before lower case)
//   num  vs text    num is greater
//
// An overflowed number (Piece::BigNum) counts as text here.
//
// When one side runs out, the next piece of the longer side decides:
//
//   1.2 < 1.2.0       a number continues the version, longer is greater
//   1.2 > 1.2-beta    a word qualifies it, longer is lesser
//
// Every sequence behaves as if it ended in a marker that sorts after all
// text and before all numbers. Sequences of such symbols compared
// lexicographically form a total order.
//
// The empty sequence ("", "...") has no pieces to qualify and sorts before
// everything else.

use std::cmp::Ordering;

use crate::piece::{Piece, Tokenizer};

// order of what can show up at a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Text,
    End,
    Num,
}

fn rank(piece: Option<&Piece<'_>>) -> Rank {
    match piece {
        Some(Piece::Num { .. }) => Rank::Num,
        Some(Piece::BigNum(_)) | Some(Piece::Text(_)) => Rank::Text,
        None => Rank::End,
    }
}

fn eq_to_none(v: Ordering) -> Option<Ordering> {
    if matches!(v, Ordering::Equal) {
        return None;
    }
    Some(v)
}

fn piece_cmp(a: &Piece<'_>, b: &Piece<'_>) -> Ordering {
    match (a, b) {
        (Piece::Num { n: n1, .. }, Piece::Num { n: n2, .. }) => n1.cmp(n2),
        (Piece::Num { .. }, _) => Ordering::Greater,
        (_, Piece::Num { .. }) => Ordering::Less,
        (a, b) => a.as_str().as_bytes().cmp(b.as_str().as_bytes()),
    }
}

pub(crate) fn compare_iter<'a, 'b, A, B>(mut a: A, mut b: B) -> Ordering
where
    A: Iterator<Item = Piece<'a>>,
    B: Iterator<Item = Piece<'b>>,
{
    match (a.next(), b.next()) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Less,
        (Some(_), None) => return Ordering::Greater,
        (Some(pa), Some(pb)) => {
            if let Some(ret) = eq_to_none(piece_cmp(&pa, &pb)) {
                return ret;
            }
        }
    }
    loop {
        match (a.next(), b.next()) {
            (Some(pa), Some(pb)) => {
                if let Some(ret) = eq_to_none(piece_cmp(&pa, &pb)) {
                    return ret;
                }
            }
            (pa, pb) => {
                return rank(pa.as_ref()).cmp(&rank(pb.as_ref()));
            }
        }
    }
}

/// Order two tokenized versions.
pub fn compare_pieces(a: &[Piece<'_>], b: &[Piece<'_>]) -> Ordering {
    compare_iter(a.iter().copied(), b.iter().copied())
}

/// Natural order of two version strings, `-` being a plain separator.
///
/// ```
/// use std::cmp::Ordering;
///
/// assert_eq!(version_sorter::compare("1.2.9", "1.2.10"), Ordering::Less);
/// assert_eq!(version_sorter::compare("1.007", "1.7"), Ordering::Equal);
/// assert_eq!(version_sorter::compare("2.0-rc1", "2.0"), Ordering::Less);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    Tokenizer::default().compare(a, b)
}

// --- VersionKey ----------------------------------------------------

/// One tokenized batch item.
///
/// Equality and order only look at the pieces, the index is carried along so
/// a sort can report where each item came from.
#[derive(Debug, Clone)]
pub struct VersionKey<'a> {
    idx: usize,
    src: &'a str,
    pieces: Vec<Piece<'a>>,
}

impl<'a> VersionKey<'a> {

    pub fn new(tokenizer: &Tokenizer, idx: usize, src: &'a str) -> Self {
        Self {
            idx,
            src,
            pieces: tokenizer.tokenize(src),
        }
    }

    pub fn index(&self) -> usize {
        self.idx
    }

    pub fn as_str(&self) -> &'a str {
        self.src
    }

    pub fn pieces(&self) -> &[Piece<'a>] {
        &self.pieces
    }
}

impl PartialEq for VersionKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.cmp(other), Ordering::Equal)
    }
}
impl Eq for VersionKey<'_> {}
impl PartialOrd for VersionKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for VersionKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_pieces(&self.pieces, &other.pieces)
    }
}

// ---/VersionKey ----------------------------------------------------

// --- Natural -------------------------------------------------------

/// A string that orders naturally.
///
/// Handy wherever std wants `Ord`: `BTreeMap` keys, `max()`, `sort()`,
/// `dedup()`. No `Hash`, since "7" and "007" are equal.
///
/// ```
/// use version_sorter::Natural;
///
/// let newest = ["1.9", "1.10", "1.2"].into_iter().map(Natural).max().unwrap();
/// assert_eq!(newest.as_str(), "1.10");
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Natural<S>(pub S);

impl<S> Natural<S> {
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: AsRef<str>> Natural<S> {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl<S: AsRef<str>> PartialEq for Natural<S> {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.cmp(other), Ordering::Equal)
    }
}
impl<S: AsRef<str>> Eq for Natural<S> {}
impl<S: AsRef<str>> PartialOrd for Natural<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<S: AsRef<str>> Ord for Natural<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.as_str(), other.as_str())
    }
}

impl<S: AsRef<str>> std::ops::Deref for Natural<S> {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<S: AsRef<str>> std::fmt::Display for Natural<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<S> From<S> for Natural<S> {
    fn from(s: S) -> Self {
        Self(s)
    }
}

// ---/Natural -------------------------------------------------------

#[cfg(test)]
mod test {

    use super::*;
    use crate::piece::{HyphenMode, tokenize};

    fn assert_order(versions: &[&str]) {

        for (i, s1) in versions.iter().enumerate() {

            assert!(matches!(compare(s1, s1), Ordering::Equal), "{s1:?} != itself");

            for s2 in versions.iter().skip(i+1) {

                assert!(matches!(compare(s1, s2), Ordering::Less), "expected {s1:?} < {s2:?}");
                assert!(matches!(compare(s2, s1), Ordering::Greater), "expected {s2:?} > {s1:?}");

                let k1 = tokenize(s1);
                let k2 = tokenize(s2);
                assert!(matches!(compare_pieces(&k1, &k2), Ordering::Less));

                assert!(Natural(*s1) < Natural(*s2));
                assert!(Natural(s2.to_string()) > Natural(s1.to_string()));
            }
        }
    }

    #[test]
    fn order() {

        let versions = [

            // nothing at all comes first
            "",

            // overflowed numbers are text, and digits sort before letters
            "18446744073709551616",
            "18446744073709551617",

            // upper case before lower case
            "A",
            "a",
            "a1",
            "0",
            "0.1",
            "1",

            // a trailing word is lesser than no word at all
            "1.0-alpha",
            "1.0-beta",
            "1.0-beta.2",
            "1.0-beta.11",
            "1.0-rc1",
            "1.0",

            "1.0.1",
            "1.0.2",
            "1.0.10",
            "1.1A",
            "1.1a",
            "1.1",
            "1.1.0",
            "1.01.1",
            "1.2",
            "2.0",
            "9",
            "10",
            "4294967296",
            "18446744073709551615",
        ];

        assert_order(&versions);
    }

    #[test]
    fn magnitude_over_width() {
        assert_eq!(compare("1.007", "1.7"), Ordering::Equal);
        assert_eq!(compare("1.7", "1.10"), Ordering::Less);
        assert_eq!(compare("1.10", "1.9"), Ordering::Greater);
        assert_eq!(compare("010", "9"), Ordering::Greater);
    }

    #[test]
    fn tail_rule() {
        assert_eq!(compare("1.2", "1.2.0"), Ordering::Less);
        assert_eq!(compare("1.2.0", "1.2"), Ordering::Greater);
        assert_eq!(compare("1.2", "1.2-beta"), Ordering::Greater);
        assert_eq!(compare("1.2-beta", "1.2"), Ordering::Less);
        assert_eq!(compare("1.2", "1.2a"), Ordering::Greater);
    }

    #[test]
    fn number_outranks_text() {
        assert_eq!(compare("a1", "1a"), Ordering::Less);
        assert_eq!(compare("1.0.a", "1.0.0"), Ordering::Less);
        // an overflowed number is treated as text against a number
        assert_eq!(compare("99999999999999999999", "1"), Ordering::Less);
        // and as text against text
        assert_eq!(compare("99999999999999999999", "a"), Ordering::Less);
    }

    #[test]
    fn separators_do_not_matter() {
        assert_eq!(compare("1.2.3", "1-2-3"), Ordering::Equal);
        assert_eq!(compare("1.2.3", "1_2_3"), Ordering::Equal);
        assert_eq!(compare("", "..."), Ordering::Equal);
        assert_eq!(compare(" ", "-"), Ordering::Equal);
    }

    #[test]
    fn text_is_bytewise() {
        assert_eq!(compare("1.0-Beta", "1.0-alpha"), Ordering::Less);
        assert_eq!(compare("1.0-rc", "1.0-rca"), Ordering::Less);
    }

    #[test]
    fn empty_is_least() {
        for v in ["A", "a", "0", "99999999999999999999", "1.0-beta", "-1"] {
            assert_eq!(compare("", v), Ordering::Less, "{v:?}");
            assert_eq!(compare(v, "..."), Ordering::Greater, "{v:?}");
        }
        assert_eq!(compare_pieces(&[], &[]), Ordering::Equal);
        assert_eq!(compare_pieces(&[], &tokenize("a")), Ordering::Less);
    }

    #[test]
    fn pre_release_changes_hyphen_order() {
        let sep = Tokenizer::new(HyphenMode::Separator);
        let pre = Tokenizer::new(HyphenMode::PreRelease);

        assert_eq!(sep.compare("1.0-1", "1.0.1"), Ordering::Equal);
        assert_eq!(pre.compare("1.0-1", "1.0.1"), Ordering::Less);

        assert_eq!(sep.compare("1.0-1", "1.0"), Ordering::Greater);
        assert_eq!(pre.compare("1.0-1", "1.0"), Ordering::Less);

        assert_eq!(sep.compare("1.0-rc1", "1.0rc1"), Ordering::Equal);
        assert_eq!(pre.compare("1.0-rc1", "1.0rc1"), Ordering::Less);

        // both agree on bare words
        assert_eq!(pre.compare("1.0-beta", "1.0"), Ordering::Less);
        assert_eq!(sep.compare("1.0-beta", "1.0"), Ordering::Less);
    }

    #[test]
    fn version_key() {
        let tk = Tokenizer::default();
        let a = VersionKey::new(&tk, 3, "v1.007");
        let b = VersionKey::new(&tk, 0, "v1.7");
        assert_eq!(a.index(), 3);
        assert_eq!(a.as_str(), "v1.007");
        assert_eq!(a.pieces().len(), 2);
        assert_eq!(a, b);

        let c = VersionKey::new(&tk, 1, "v1.8");
        assert!(b < c);
    }

    #[test]
    fn natural() {
        let mut versions: Vec<Natural<&str>> = ["1.10", "1.9", "1.09", "1.2"].into_iter().map(Natural).collect();
        versions.sort();
        let sorted: Vec<&str> = versions.iter().map(|v| v.as_str()).collect();
        assert_eq!(sorted, ["1.2", "1.9", "1.09", "1.10"]);

        versions.dedup();
        assert_eq!(versions.len(), 3);

        let v = Natural::from(String::from("2.0"));
        assert_eq!(v.to_string(), "2.0");
        assert!(v.starts_with('2'));
        assert_eq!(v.into_inner(), "2.0");
    }

    #[test]
    fn natural_btree() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(Natural("1.10"), "ten");
        map.insert(Natural("1.9"), "nine");
        map.insert(Natural("1.09"), "nine again");

        assert_eq!(map.len(), 2);
        let last = map.last_key_value().map(|(k, v)| (k.as_str(), *v));
        assert_eq!(last, Some(("1.10", "ten")));
    }
}
