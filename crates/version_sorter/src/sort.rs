// --- Batch sort ---
//
// Every item is tokenized exactly once into a VersionKey. The keys go
// through a stable sort and the order comes back either as a permutation of
// the original indices or by moving the items themselves.
//
// Descending order flips the comparator, not the result, so items that
// compare equal keep their input order in both directions.
//
// Key functions come in two flavors:
//
//   by_key        FnMut(&T) -> K              can not fail
//   try_by_key    FnMut(&T) -> Result<K, E>   every key is built before
//                                             anything is tokenized or moved

use std::cmp::Ordering;

use crate::compare::VersionKey;
use crate::error::KeyError;
use crate::piece::{HyphenMode, Tokenizer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sorter {
    tokenizer: Tokenizer,
    descending: bool,
}

impl Sorter {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn hyphen(mut self, mode: HyphenMode) -> Self {
        self.tokenizer = Tokenizer::new(mode);
        self
    }

    pub fn descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Compare two strings the way this sorter orders them.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let ord = self.tokenizer.compare(a, b);
        if self.descending {
            ord.reverse()
        } else {
            ord
        }
    }

    fn order<K: AsRef<str>>(&self, keys: &[K]) -> Vec<usize> {

        tracing::trace!(
            count = keys.len(),
            descending = self.descending,
            hyphen = %self.tokenizer.hyphen_mode(),
            "sorting versions"
        );

        let mut vks = keys.iter()
            .enumerate()
            .map(|(idx, k)| VersionKey::new(&self.tokenizer, idx, k.as_ref()))
            .collect::<Vec<_>>();

        if self.descending {
            vks.sort_by(|a, b| b.cmp(a));
        } else {
            vks.sort();
        }

        vks.iter().map(VersionKey::index).collect()
    }

    /// The permutation that sorts `items`: `result[i]` is the original index
    /// of the item that belongs at position `i`.
    pub fn indices<S: AsRef<str>>(&self, items: &[S]) -> Vec<usize> {
        self.order(items)
    }

    pub fn indices_by_key<'a, T, K, F>(&self, items: &'a [T], key: F) -> Vec<usize>
    where
        F: FnMut(&'a T) -> K,
        K: AsRef<str>,
    {
        let keys = items.iter().map(key).collect::<Vec<_>>();
        self.order(&keys)
    }

    pub fn try_indices_by_key<'a, T, K, E, F>(&self, items: &'a [T], mut key: F) -> Result<Vec<usize>, KeyError<E>>
    where
        F: FnMut(&'a T) -> Result<K, E>,
        K: AsRef<str>,
    {
        let keys = items.iter()
            .enumerate()
            .map(|(index, item)| key(item).map_err(|source| KeyError { index, source }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.order(&keys))
    }

    /// A sorted copy, `items` is left alone.
    pub fn sorted<S: AsRef<str> + Clone>(&self, items: &[S]) -> Vec<S> {
        self.indices(items).into_iter().map(|i| items[i].clone()).collect()
    }

    pub fn sorted_by_key<'a, T, K, F>(&self, items: &'a [T], key: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&'a T) -> K,
        K: AsRef<str>,
    {
        self.indices_by_key(items, key).into_iter().map(|i| items[i].clone()).collect()
    }

    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        let perm = self.indices(items);
        permute(items, perm);
    }

    /// In place sort on a derived key. The key can not borrow from the item,
    /// use [`Sorter::indices_by_key`] for that.
    pub fn sort_by_key<T, K, F>(&self, items: &mut [T], key: F)
    where
        F: FnMut(&T) -> K,
        K: AsRef<str>,
    {
        let perm = self.indices_by_key(&*items, key);
        permute(items, perm);
    }

    /// In place sort on a fallible key. On error `items` is untouched.
    pub fn try_sort_by_key<T, K, E, F>(&self, items: &mut [T], key: F) -> Result<(), KeyError<E>>
    where
        F: FnMut(&T) -> Result<K, E>,
        K: AsRef<str>,
    {
        let perm = self.try_indices_by_key(&*items, key)?;
        permute(items, perm);
        Ok(())
    }
}

// Move items so that items[i] ends up holding what was at items[perm[i]].
// Follows each cycle of the permutation once, marking visited slots by
// pointing them at themselves.
fn permute<T>(items: &mut [T], mut perm: Vec<usize>) {

    debug_assert_eq!(items.len(), perm.len());

    for start in 0..perm.len() {
        let mut cur = start;
        loop {
            let next = perm[cur];
            perm[cur] = cur;
            if next == start {
                break;
            }
            items.swap(cur, next);
            cur = next;
        }
    }
}
