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

//! Packed bit-vector storage.
//!
//! A [`BitVector`] is a fixed-length sequence of single-bit flags stored in
//! byte-granular storage, with O(1) addressing of individual bits and an
//! aggregate density query.
//!
//! # Usage
//!
//! ```rust
//! use bloomsieve::bits::BitVector;
//!
//! let mut bits = BitVector::new(10).unwrap();
//! bits.set(3).unwrap();
//! bits.set(7).unwrap();
//!
//! assert!(bits.get(3).unwrap());
//! assert!(!bits.get(4).unwrap());
//! assert_eq!(bits.density(), 0.2);
//! ```

mod vector;
pub use self::vector::BitVector;
