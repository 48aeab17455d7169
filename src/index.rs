// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fixed-width sorted index
//!
//! Registry tables are single byte strings made of 4-byte records, sorted on a
//! key prefix. Lookups take a key of one to four bytes and compare it against
//! the same-length prefix of each record, so a table sorted on its first two
//! bytes can be searched with one- or two-byte keys but not with longer ones.

use crate::error::SubtagError;
use std::cmp::Ordering;

/// Width of every record in a registry index.
pub const RECORD_LEN: usize = 4;

/// An immutable table of [`RECORD_LEN`]-byte records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIndex {
    data: &'static [u8],
}

impl FixedIndex {
    pub const fn new(data: &'static [u8]) -> Self {
        Self { data }
    }

    /// Number of records.
    pub const fn len(&self) -> usize {
        self.data.len() / RECORD_LEN
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw bytes of the whole table.
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.data
    }

    /// Record `x`, including any payload bytes past the key.
    ///
    /// Panics if `x` is out of range; identifiers handed out by the resolvers
    /// are always in range.
    pub fn elem(&self, x: usize) -> &'static [u8] {
        &self.data[x * RECORD_LEN..(x + 1) * RECORD_LEN]
    }

    /// Returns the first record whose prefix equals `key`.
    pub fn index(&self, key: &[u8]) -> Option<usize> {
        let n = key.len();
        debug_assert!(n <= RECORD_LEN);
        let (mut lo, mut hi) = (0, self.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.elem(mid)[..n].cmp(key) == Ordering::Less {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        (lo < self.len() && self.elem(lo)[..n] == *key).then_some(lo)
    }

    /// Returns the record after `x` if it still shares the prefix `key`.
    pub fn next(&self, key: &[u8], x: usize) -> Option<usize> {
        let x = x + 1;
        (x < self.len() && self.elem(x)[..key.len()] == *key).then_some(x)
    }

    /// Iterates over all consecutive records sharing the prefix `key`.
    pub fn matches<'k>(&self, key: &'k [u8]) -> PrefixMatches<'k> {
        PrefixMatches {
            index: *self,
            key,
            next: self.index(key),
        }
    }
}

/// Iterator returned by [`FixedIndex::matches`].
#[derive(Debug, Clone)]
pub struct PrefixMatches<'k> {
    index: FixedIndex,
    key: &'k [u8],
    next: Option<usize>,
}

impl Iterator for PrefixMatches<'_> {
    type Item = (usize, &'static [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.next?;
        self.next = self.index.next(self.key, x);
        Some((x, self.index.elem(x)))
    }
}

/// Forces `b` into the case pattern of `form`, in place.
///
/// Every byte must belong to the same class as the byte at the same position
/// in `form`: an uppercase or lowercase letter, or a digit. Letters are
/// recased to match. Returns `false` on a length or class mismatch, in which
/// case `b` may have been partly rewritten.
pub fn fix_case(form: &str, b: &mut [u8]) -> bool {
    let form = form.as_bytes();
    if form.len() != b.len() {
        return false;
    }
    for (f, c) in form.iter().zip(b.iter_mut()) {
        let fixed = if f.is_ascii_digit() {
            c.is_ascii_digit().then_some(*c)
        } else if f.is_ascii_uppercase() {
            c.is_ascii_alphabetic().then(|| c.to_ascii_uppercase())
        } else {
            c.is_ascii_alphabetic().then(|| c.to_ascii_lowercase())
        };
        match fixed {
            Some(v) => *c = v,
            None => return false,
        }
    }
    true
}

/// Copies `s` into a stack buffer and fixes its case against `form`.
///
/// The returned buffer holds `form.len()` meaningful bytes.
pub(crate) fn fixed_key(form: &str, s: &str) -> Result<[u8; RECORD_LEN], SubtagError> {
    let mut buf = [0u8; RECORD_LEN];
    if s.len() != form.len() || s.len() > RECORD_LEN {
        return Err(SubtagError::Syntax);
    }
    let key = &mut buf[..s.len()];
    key.copy_from_slice(s.as_bytes());
    if !fix_case(form, key) {
        return Err(SubtagError::Syntax);
    }
    Ok(buf)
}

/// Looks up `s` after case-fixing it against `form`.
///
/// A malformed key is a syntax error; a well-formed key without a record is
/// reported as an invalid subtag carrying the case-fixed key.
pub fn find_index(index: &FixedIndex, s: &str, form: &str) -> Result<usize, SubtagError> {
    let buf = fixed_key(form, s)?;
    let key = &buf[..form.len()];
    index.index(key).ok_or_else(|| SubtagError::invalid(key))
}
