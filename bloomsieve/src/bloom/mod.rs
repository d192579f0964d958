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

//! Bloom filter for probabilistic word-set membership testing.
//!
//! A [`BloomFilter`] is populated from a word list at construction time and
//! immutable afterward. Queries can return false positives, never false
//! negatives: a word supplied at construction always checks out.
//!
//! # Usage
//!
//! ```rust
//! use bloomsieve::bloom::BloomFilter;
//!
//! let filter = BloomFilter::new(16, 3, ["apple", "banana"]).unwrap();
//!
//! assert!(filter.check_word("apple").unwrap());
//! assert!(filter.check_word("banana").unwrap());
//! ```
//!
//! # Notes
//!
//! - The filter does not support insertion after construction, deletion,
//!   resizing, or merging.
//! - The false positive rate grows with bit density; [`BloomFilter::density`]
//!   reports the current fraction of set bits.

mod filter;
pub use self::filter::BloomFilter;
