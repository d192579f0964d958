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

//! A word-oriented Bloom filter built from two small pieces: a byte-packed
//! bit vector and a digest-splitting scheme that carves a single 128-bit
//! digest into a fixed number of fixed-width index values.
//!
//! A [`bloom::BloomFilter`] is populated once, at construction, from a word
//! list and is immutable afterward. Membership queries can return false
//! positives but never false negatives.
//!
//! # Usage
//!
//! ```rust
//! use bloomsieve::bloom::BloomFilter;
//!
//! let filter = BloomFilter::new(8, 4, ["apple", "banana"]).unwrap();
//!
//! assert!(filter.check_word("apple").unwrap());
//! assert!(filter.check_word("banana").unwrap());
//! assert!(filter.density() > 0.0);
//! ```

pub mod bits;
pub mod bloom;
pub mod common;
pub mod error;
pub mod hash;
