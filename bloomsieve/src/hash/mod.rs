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

//! Digest-derived index values.
//!
//! A key is digested once and the digest is carved into a fixed number of
//! fixed-width index values, each addressing a bit in a `2^width`-bit array.
//! The carving is deterministic: the same key and parameters always yield the
//! same sequence.
//!
//! # Usage
//!
//! ```rust
//! use bloomsieve::hash::derive_indices;
//!
//! let indices = derive_indices(b"apple", 4, 16).unwrap();
//! assert_eq!(indices.len(), 4);
//! assert!(indices.iter().all(|&idx| idx < 1 << 16));
//! ```

mod split;
pub use self::split::DIGEST_BITS;
pub use self::split::MAX_INDEX_BITS;
pub use self::split::derive_indices;
pub(crate) use self::split::validate_params;
