// version sorter
//
// --- General rules ---
//
// 1. A version is split into pieces: runs of ascii digits and runs of ascii letters
// 2. Anything else separates pieces and is otherwise ignored
// 3.    numbers compare by value          1.9 < 1.10, 1.007 == 1.7
// 4.      words compare by ascii bytes    1.0-RC < 1.0-beta < 1.0-rc
// 5.     a word is LESS than a number     1.0.a < 1.0.0
// 6. running out is GREATER than a word   1.0-rc1 < 1.0
// 7. running out is LESS than a number    1.0 < 1.0.1
// 8. no pieces at all is LESS than anything else
//
// --- Examples ---
//
//   1.0.9a < 1.0.9 < 1.0.10 < 2.0.pre < 2.0 < 3.1.4.2
//   yui3-309 < yui3-440 < yui3-1405
//   "" < a < a1 < 0 < 1a
//
// --- Details ---
//
// 1. Numbers are u64. A longer digit run keeps its digits and compares as a word.
//
//    example: 18446744073709551616 < 18446744073709551617 < 1 < 18446744073709551615
//
// 2. '-' is a plain separator by default. HyphenMode::PreRelease turns every '-'
//    into a "pre" word instead, so a hyphenated tail sorts before the bare version.
//
//    example: separator      1.0 < 1.0.1 == 1.0-1
//             pre-release    1.0-1 < 1.0 < 1.0.1
//
// 3. Sorting is stable. Descending order reverses the comparison, so equal
//    versions keep their input order both ways.
//
//    example: sort  (1.0, 1.00, 0.5) -> (0.5, 1.0, 1.00)
//             rsort (1.0, 1.00, 0.5) -> (1.0, 1.00, 0.5)

mod compare;
mod error;
mod piece;
mod sort;

pub use compare::{Natural, VersionKey, compare, compare_pieces};
pub use error::{Error, KeyError};
pub use piece::{HyphenMode, PRE_RELEASE, Piece, PieceIter, PieceKind, Tokenizer, tokenize};
pub use sort::Sorter;

/// Ascending natural order, returned as a new `Vec`.
///
/// ```
/// let sorted = version_sorter::sort(&["1.0.1", "1.0.10", "1.0.2", "2.0", "1.0"]);
/// assert_eq!(sorted, ["1.0", "1.0.1", "1.0.2", "1.0.10", "2.0"]);
/// ```
pub fn sort<S: AsRef<str> + Clone>(items: &[S]) -> Vec<S> {
    Sorter::new().sorted(items)
}

/// Descending natural order, returned as a new `Vec`.
pub fn rsort<S: AsRef<str> + Clone>(items: &[S]) -> Vec<S> {
    Sorter::new().descending(true).sorted(items)
}

/// Ascending natural order, in place.
pub fn sort_mut<S: AsRef<str>>(items: &mut [S]) {
    Sorter::new().sort(items)
}

/// Descending natural order, in place.
pub fn rsort_mut<S: AsRef<str>>(items: &mut [S]) {
    Sorter::new().descending(true).sort(items)
}

/// Original indices of `items` in ascending order, for reordering a parallel array.
pub fn sort_indices<S: AsRef<str>>(items: &[S]) -> Vec<usize> {
    Sorter::new().indices(items)
}

pub fn rsort_indices<S: AsRef<str>>(items: &[S]) -> Vec<usize> {
    Sorter::new().descending(true).indices(items)
}

/// Sort anything by a version string derived from it.
///
/// ```
/// #[derive(Clone)]
/// struct Release { tag: String }
///
/// let releases = vec![
///     Release { tag: "v10.0".into() },
///     Release { tag: "v1.0".into() },
///     Release { tag: "v2.0".into() },
/// ];
/// let releases = version_sorter::sort_by_key(&releases, |r| r.tag.as_str());
/// let tags: Vec<&str> = releases.iter().map(|r| r.tag.as_str()).collect();
/// assert_eq!(tags, ["v1.0", "v2.0", "v10.0"]);
/// ```
pub fn sort_by_key<'a, T, K, F>(items: &'a [T], key: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&'a T) -> K,
    K: AsRef<str>,
{
    Sorter::new().sorted_by_key(items, key)
}

pub fn rsort_by_key<'a, T, K, F>(items: &'a [T], key: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&'a T) -> K,
    K: AsRef<str>,
{
    Sorter::new().descending(true).sorted_by_key(items, key)
}
