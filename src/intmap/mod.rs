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

//! A compact ordered map for `u32` keys and `u32` values.
//!
//! # Overview
//!
//! [`OrderedIntMap`] keeps its entries in two parallel, densely packed arrays:
//! one holding the keys in strictly ascending order and one holding the value
//! for the key at the same position. An entry therefore costs exactly 8 bytes
//! plus spare capacity, far less than a general-purpose hash map.
//!
//! - Lookups are `O(log n)` binary searches.
//! - Single insertions and removals are `O(n)` because later entries shift.
//! - Batches should go through [`OrderedIntMap::merge`], which sorts once when
//!   the batch is large (see [`MergeStrategy`]).
//!
//! Lookup misses are reported as `None`. Position-based access past the end
//! and corrupt serialized data are reported as [`Error`](crate::error::Error)s.
//!
//! # Serialization
//!
//! [`OrderedIntMap::serialize`] writes an 8-byte big-endian length header
//! followed by the raw key and value arrays as little-endian `u32`s; see
//! [`serialization`] for the exact layout. A map with no entries cannot be
//! round-tripped: loading it fails with
//! [`ErrorKind::MalformedData`](crate::error::ErrorKind::MalformedData).
//!
//! # Concurrency
//!
//! The map has no internal synchronization. Wrap it in a lock to share it
//! mutably across threads.
//!
//! # Usage
//!
//! ```rust
//! use intdict::intmap::OrderedIntMap;
//!
//! let mut map = OrderedIntMap::new();
//! assert!(map.insert_or_update(2, 200));
//! assert!(map.insert_or_update(1, 10));
//! assert!(!map.insert_or_update(2, 20));
//!
//! assert_eq!(map.get(2), Some(20));
//! assert_eq!(map.get_or(7, 0), 0);
//! assert_eq!(map.to_string(), "{1: 10, 2: 20}");
//!
//! let restored = OrderedIntMap::deserialize(&map.serialize()).unwrap();
//! assert_eq!(restored, map);
//! ```

mod builder;
mod iter;
mod map;
mod merge;
mod search;
pub mod serialization;

pub use self::builder::OrderedIntMapBuilder;
pub use self::iter::IntoIter;
pub use self::iter::Iter;
pub use self::iter::Keys;
pub use self::iter::Values;
pub use self::map::OrderedIntMap;
pub use self::merge::MergeStrategy;
