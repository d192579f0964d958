// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::bits::BitVector;
use crate::error::Error;
use crate::error::ErrorKind;
use crate::hash;

/// A Bloom filter over a fixed word set.
///
/// The filter owns a [`BitVector`] of `2^index_bits` bits. Every word
/// supplied at construction is digested once and `num_hashes` bits are set
/// from its derived index values; a membership query re-derives the same
/// values and answers `true` iff every one of those bits is set.
///
/// Whether `num_hashes` values of `index_bits` bits each actually fit the
/// digest is checked at the first derivation, not up front: a filter built
/// over an empty word list constructs successfully and surfaces the
/// incompatibility on its first query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    /// Bit-array size exponent: the vector holds `2^index_bits` bits.
    index_bits: u32,
    /// Number of index values derived per word (k).
    num_hashes: u16,
    /// Owned bit array, never shared or resized.
    bits: BitVector,
}

impl BloomFilter {
    /// Builds a filter sized at `2^index_bits` bits and populates it with
    /// every word in `words`.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    ///   if `num_hashes` is zero, `index_bits` is outside
    ///   `[1, MAX_INDEX_BITS]`, or the bit array does not fit the platform's
    ///   address space.
    /// - [`ErrorKind::InsufficientHashBits`](crate::error::ErrorKind::InsufficientHashBits)
    ///   if the digest cannot supply `num_hashes` values of `index_bits`
    ///   bits each; derivation fails identically for every word, so this
    ///   surfaces on the first one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::bloom::BloomFilter;
    ///
    /// let filter = BloomFilter::new(8, 4, ["apple", "banana"]).unwrap();
    /// assert_eq!(filter.capacity_bits(), 256);
    /// assert_eq!(filter.num_hashes(), 4);
    /// ```
    pub fn new<I>(index_bits: u32, num_hashes: u16, words: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        hash::validate_params(num_hashes, index_bits)?;

        let capacity = usize::try_from(1u64 << index_bits).map_err(|_| {
            Error::new(
                ErrorKind::InvalidArgument,
                "bit array too large for this platform",
            )
            .with_context("index_bits", index_bits)
        })?;

        let mut bits = BitVector::new(capacity)?;
        for word in words {
            for index in hash::derive_indices(word.as_ref(), num_hashes, index_bits)? {
                bits.set(index as usize)?;
            }
        }

        Ok(Self {
            index_bits,
            num_hashes,
            bits,
        })
    }

    /// Returns `true` if the filter possibly contains `word`.
    ///
    /// There are no false negatives: a word supplied at construction always
    /// returns `true`. A `false` answer is definitive. The check
    /// short-circuits on the first unset bit.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`ErrorKind::InsufficientHashBits`](crate::error::ErrorKind::InsufficientHashBits)
    /// if the filter's parameters exceed the digest's bit budget (possible
    /// only when no word was digested at construction).
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::bloom::BloomFilter;
    ///
    /// let filter = BloomFilter::new(16, 3, ["apple"]).unwrap();
    /// assert!(filter.check_word("apple").unwrap());
    /// ```
    pub fn check_word(&self, word: impl AsRef<[u8]>) -> Result<bool, Error> {
        for index in hash::derive_indices(word.as_ref(), self.num_hashes, self.index_bits)? {
            if !self.bits.get(index as usize)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns the fraction of bits set, in `[0, 1]`.
    ///
    /// Density only grows as distinct words are added at construction, and
    /// drives the false positive rate.
    pub fn density(&self) -> f64 {
        self.bits.density()
    }

    /// Returns the bit-array size exponent.
    pub fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Returns the number of index values derived per word.
    pub fn num_hashes(&self) -> u16 {
        self.num_hashes
    }

    /// Returns the total number of bits in the filter.
    pub fn capacity_bits(&self) -> usize {
        self.bits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserted_words_always_check_out() {
        let filter = BloomFilter::new(8, 4, ["apple", "banana"]).unwrap();

        assert!(filter.check_word("apple").unwrap());
        assert!(filter.check_word("banana").unwrap());
    }

    #[test]
    fn test_empty_filter_has_zero_density() {
        let words: [&str; 0] = [];
        let filter = BloomFilter::new(8, 4, words).unwrap();

        assert_eq!(filter.density(), 0.0);
        assert!(!filter.check_word("apple").unwrap());
    }

    #[test]
    fn test_accessors() {
        let filter = BloomFilter::new(10, 3, ["apple"]).unwrap();

        assert_eq!(filter.index_bits(), 10);
        assert_eq!(filter.num_hashes(), 3);
        assert_eq!(filter.capacity_bits(), 1024);
    }

    #[test]
    fn test_incompatible_parameters_fail_on_construction() {
        // 20 hashes of 8 bits each need 160 bits; the digest has 128.
        let err = BloomFilter::new(8, 20, ["apple"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientHashBits);
    }

    // With no word to digest, the budget violation is only detectable at
    // first use.
    #[test]
    fn test_incompatible_parameters_fail_on_first_query() {
        let words: [&str; 0] = [];
        let filter = BloomFilter::new(8, 20, words).unwrap();

        let err = filter.check_word("apple").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientHashBits);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let err = BloomFilter::new(0, 4, ["apple"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = BloomFilter::new(8, 0, ["apple"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_same_words_build_equal_filters() {
        let first = BloomFilter::new(12, 5, ["apple", "banana", "cherry"]).unwrap();
        let second = BloomFilter::new(12, 5, ["apple", "banana", "cherry"]).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_density_bounded_by_hash_budget() {
        let filter = BloomFilter::new(8, 2, ["apple", "banana", "cherry"]).unwrap();

        // Three words set at most six distinct bits out of 256.
        assert!(filter.density() > 0.0);
        assert!(filter.density() <= 6.0 / 256.0);
    }
}
