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

use md5::Digest;
use md5::Md5;

use crate::error::Error;
use crate::error::ErrorKind;

/// Number of bits supplied by one digest.
///
/// This is the total hash-bit budget: a parameter pair is satisfiable only if
/// `num_hashes` chunks of `index_bits` bits each (rounded up to whole bytes)
/// fit inside it.
pub const DIGEST_BITS: u32 = 128;

/// Widest supported index value, in bits.
///
/// Chunks are carved from a 64-bit unsigned accumulator that bytes are
/// appended to whole, so it holds at most `index_bits + 7` bits at a time.
/// Widths up to 57 therefore never lose high bits.
pub const MAX_INDEX_BITS: u32 = 57;

/// Derives `num_hashes` index values in `[0, 2^index_bits)` from `key`.
///
/// The key is digested once with MD5 and the digest is consumed as a bit
/// stream, most significant byte first. Each index value is carved from its
/// own byte-aligned run of the stream: bytes are appended to the accumulator
/// until at least `index_bits` bits are held, the top `index_bits` bits
/// become the next value, and any leftover bits of the run are discarded
/// rather than carried forward.
///
/// # Errors
///
/// - [`ErrorKind::InvalidArgument`] if `num_hashes` is zero or `index_bits`
///   is outside `[1, MAX_INDEX_BITS]`.
/// - [`ErrorKind::InsufficientHashBits`] if the digest runs out of bytes
///   before `num_hashes` values have been carved. This depends only on the
///   parameters, never on the key, so a given configuration fails
///   identically for every word.
///
/// # Examples
///
/// ```rust
/// use bloomsieve::hash::derive_indices;
///
/// let first = derive_indices(b"apple", 4, 16).unwrap();
/// let second = derive_indices(b"apple", 4, 16).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn derive_indices(key: &[u8], num_hashes: u16, index_bits: u32) -> Result<Vec<u64>, Error> {
    validate_params(num_hashes, index_bits)?;

    let digest = Md5::digest(key);

    let mut indices = Vec::with_capacity(num_hashes as usize);
    let mut working = 0u64;
    let mut working_bits = 0u32;

    for &byte in digest.iter() {
        working = (working << 8) | u64::from(byte);
        working_bits += 8;

        if working_bits >= index_bits {
            indices.push(working >> (working_bits - index_bits));
            if indices.len() == num_hashes as usize {
                return Ok(indices);
            }
            working = 0;
            working_bits = 0;
        }
    }

    Err(Error::insufficient_hash_bits(num_hashes, index_bits))
}

pub(crate) fn validate_params(num_hashes: u16, index_bits: u32) -> Result<(), Error> {
    if num_hashes == 0 {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "num_hashes must be at least 1",
        ));
    }
    if index_bits == 0 || index_bits > MAX_INDEX_BITS {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "index_bits outside supported range",
        )
        .with_context("index_bits", index_bits)
        .with_context("max_index_bits", MAX_INDEX_BITS));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // MD5("abc") = 900150983cd24fb0d6963f7d28e17f72 (RFC 1321 test suite).
    #[test]
    fn test_carves_byte_pairs_into_16_bit_chunks() {
        let indices = derive_indices(b"abc", 4, 16).unwrap();
        assert_eq!(indices, vec![0x9001, 0x5098, 0x3cd2, 0x4fb0]);
    }

    // A 12-bit chunk still consumes two whole bytes; the low nibble of each
    // pair is discarded at the reset.
    #[test]
    fn test_leftover_bits_discarded_between_chunks() {
        let indices = derive_indices(b"abc", 4, 12).unwrap();
        assert_eq!(indices, vec![0x900, 0x509, 0x3cd, 0x4fb]);
    }

    #[test]
    fn test_three_byte_chunks() {
        let indices = derive_indices(b"abc", 2, 20).unwrap();
        assert_eq!(indices, vec![0x90015, 0x983cd]);
    }

    // MD5("") = d41d8cd98f00b204e9800998ecf8427e (RFC 1321 test suite).
    // Width 1 takes the top bit of each byte.
    #[test]
    fn test_single_bit_width() {
        let indices = derive_indices(b"", 16, 1).unwrap();
        assert_eq!(indices, vec![1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_widest_supported_chunks() {
        let indices = derive_indices(b"abc", 2, MAX_INDEX_BITS).unwrap();
        assert_eq!(
            indices,
            vec![0x900150983cd24fb0u64 >> 7, 0xd6963f7d28e17f72u64 >> 7]
        );
    }

    #[test]
    fn test_deterministic_across_calls() {
        for width in [1, 7, 8, 13, 16, 24, 30, 57] {
            let first = derive_indices(b"banana", 2, width).unwrap();
            let second = derive_indices(b"banana", 2, width).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_values_stay_in_range() {
        for width in 1..=30u32 {
            let bound = 1u64 << width;
            let count = (DIGEST_BITS / (8 * width.div_ceil(8))) as u16;
            let indices = derive_indices(b"the quick brown fox", count, width).unwrap();

            assert_eq!(indices.len(), count as usize);
            assert!(indices.iter().all(|&idx| idx < bound));
        }
    }

    #[test]
    fn test_exhausts_digest_at_budget_boundary() {
        // Width 8 carves one value per byte: 16 fit, 17 do not.
        assert!(derive_indices(b"abc", 16, 8).is_ok());
        let err = derive_indices(b"abc", 17, 8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientHashBits);

        // Width 57 consumes 8 bytes per value: 2 fit, 3 do not.
        assert!(derive_indices(b"abc", 2, 57).is_ok());
        let err = derive_indices(b"abc", 3, 57).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientHashBits);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let err = derive_indices(b"abc", 0, 16).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = derive_indices(b"abc", 1, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = derive_indices(b"abc", 1, MAX_INDEX_BITS + 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
