//! Combinatorial enumeration
//!
//! Every ordering of every subset of a charset, produced lazily:
//!
//! - [`Combinations`]: all k-element index combinations, lexicographic
//! - [`Subsets`]: combinations of every size 0..=n, ascending size
//! - [`Permutations`]: all orderings of one subset, lexicographic by position
//! - [`Words`]: the above chained, each ordering concatenated into a word
//!
//! Nothing is materialized beyond the current subset and ordering, so memory
//! stays O(n) no matter how many words come out.

use crate::charset::Charset;
use std::iter::FlatMap;

/// Index combinations of `k` out of `n`, in lexicographic order
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }

    fn advance(&mut self) {
        let k = self.indices.len();
        // Rightmost index that can still move right
        let pivot = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i);
        match pivot {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        self.advance();
        Some(current)
    }
}

/// Index subsets of every size 0..=n: the empty subset first, then all
/// singletons, then all pairs, and so on
#[derive(Debug, Clone)]
pub struct Subsets {
    n: usize,
    size: usize,
    current: Combinations,
}

impl Subsets {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            size: 0,
            current: Combinations::new(n, 0),
        }
    }
}

impl Iterator for Subsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(subset) = self.current.next() {
                return Some(subset);
            }
            if self.size >= self.n {
                return None;
            }
            self.size += 1;
            self.current = Combinations::new(self.n, self.size);
        }
    }
}

/// All orderings of `items`, lexicographic by original position
///
/// Items are never compared, so duplicates yield repeated orderings.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    order: Vec<usize>,
    done: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        let order = (0..items.len()).collect();
        Self {
            items,
            order,
            done: false,
        }
    }

    /// Step `order` to its lexicographic successor
    fn advance(&mut self) {
        let order = &mut self.order;
        let Some(i) = (1..order.len()).rev().find(|&i| order[i - 1] < order[i]) else {
            self.done = true;
            return;
        };
        let pivot = i - 1;
        let j = (i..order.len())
            .rev()
            .find(|&j| order[j] > order[pivot])
            .unwrap_or(i);
        order.swap(pivot, j);
        order[i..].reverse();
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.order.iter().map(|&i| self.items[i].clone()).collect();
        self.advance();
        Some(current)
    }
}

type SubsetOrderings = FlatMap<Subsets, Permutations<usize>, fn(Vec<usize>) -> Permutations<usize>>;

/// Every word built from a charset, in generation order
pub struct Words<'a> {
    charset: &'a Charset,
    orderings: SubsetOrderings,
    remaining: Option<u128>,
}

impl<'a> Words<'a> {
    pub fn new(charset: &'a Charset) -> Self {
        let orderings = Subsets::new(charset.len())
            .flat_map(Permutations::<usize>::new as fn(Vec<usize>) -> Permutations<usize>);
        Self {
            charset,
            orderings,
            remaining: total_words(charset.len()),
        }
    }

    fn concat(&self, ordering: &[usize]) -> String {
        let tokens = self.charset.tokens();
        let len = ordering.iter().map(|&i| tokens[i].len()).sum();
        let mut word = String::with_capacity(len);
        for &i in ordering {
            word.push_str(&tokens[i]);
        }
        word
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let ordering = self.orderings.next()?;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(self.concat(&ordering))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

/// Lazily generate every word for `charset`
pub fn words(charset: &Charset) -> Words<'_> {
    Words::new(charset)
}

/// Number of k-permutations of n items, n!/(n-k)!; `None` on overflow or k > n
pub fn permutations_of_size(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return None;
    }
    ((n - k + 1)..=n).try_fold(1u128, |acc, f| acc.checked_mul(f as u128))
}

/// Exact number of words [`Words`] yields for a charset of `n` tokens:
/// the sum of n!/(n-k)! for k in 0..=n. `None` if it exceeds `u128`.
pub fn total_words(n: usize) -> Option<u128> {
    let mut term: u128 = 1;
    let mut total: u128 = 1;
    for k in 1..=n {
        term = term.checked_mul((n - k + 1) as u128)?;
        total = total.checked_add(term)?;
    }
    Some(total)
}
