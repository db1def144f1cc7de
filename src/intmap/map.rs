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

use std::fmt;

use crate::error::Error;
use crate::intmap::builder::OrderedIntMapBuilder;
use crate::intmap::search;

/// An ordered map from `u32` keys to `u32` values stored as two parallel sorted arrays.
///
/// See the [module documentation](super) for more details.
#[derive(Debug, Clone)]
pub struct OrderedIntMap {
    // strictly ascending, same length as `values`
    pub(super) keys: Vec<u32>,
    pub(super) values: Vec<u32>,
    pub(super) bulk_merge_threshold: usize,
}

impl Default for OrderedIntMap {
    fn default() -> Self {
        OrderedIntMap::new()
    }
}

impl PartialEq for OrderedIntMap {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl Eq for OrderedIntMap {}

impl OrderedIntMap {
    /// Size hint at which [`merge`](Self::merge) switches to the bulk algorithm.
    pub const DEFAULT_BULK_MERGE_THRESHOLD: usize = 1000;

    /// Creates an empty map.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty map with room for `capacity` entries before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedIntMap {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            bulk_merge_threshold: Self::DEFAULT_BULK_MERGE_THRESHOLD,
        }
    }

    /// Returns a builder to configure capacity and merge behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// use intdict::intmap::OrderedIntMap;
    ///
    /// let map = OrderedIntMap::builder()
    ///     .capacity(1024)
    ///     .bulk_merge_threshold(64)
    ///     .build();
    /// assert!(map.is_empty());
    /// assert_eq!(map.bulk_merge_threshold(), 64);
    /// ```
    pub fn builder() -> OrderedIntMapBuilder {
        OrderedIntMapBuilder::default()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the size hint at which [`merge`](Self::merge) goes bulk.
    pub fn bulk_merge_threshold(&self) -> usize {
        self.bulk_merge_threshold
    }

    /// Returns the position of `key`, or `None` if it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use intdict::intmap::OrderedIntMap;
    ///
    /// let map: OrderedIntMap = [(1, 10), (2, 200)].into_iter().collect();
    /// assert_eq!(map.find(2), Some(1));
    /// assert_eq!(map.find(3), None);
    /// ```
    pub fn find(&self, key: u32) -> Option<usize> {
        search::find(&self.keys, key)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: u32) -> bool {
        self.find(key).is_some()
    }

    /// Returns the value stored under `key`.
    ///
    /// A miss is `None`, which is never confused with a stored `0`.
    pub fn get(&self, key: u32) -> Option<u32> {
        self.find(key).map(|index| self.values[index])
    }

    /// Returns the value stored under `key`, or `default` on a miss.
    pub fn get_or(&self, key: u32, default: u32) -> u32 {
        self.get(key).unwrap_or(default)
    }

    /// Inserts `key` with `value`, or overwrites the value if `key` exists.
    ///
    /// Returns `true` if a new entry was created and `false` if an existing
    /// value was updated.
    ///
    /// # Performance
    ///
    /// Finding the slot is `O(log n)`, but a new key shifts every later entry
    /// of both arrays one position right, so an insertion is `O(n)`. This is
    /// the price for storing 8 bytes per entry with no per-entry overhead.
    /// Load many entries at once with [`merge`](Self::merge) instead.
    pub fn insert_or_update(&mut self, key: u32, value: u32) -> bool {
        let index = search::lower_bound(&self.keys, key);
        if index < self.keys.len() && self.keys[index] == key {
            self.values[index] = value;
            false
        } else {
            self.keys.insert(index, key);
            self.values.insert(index, value);
            true
        }
    }

    /// Removes the entry at `position` and returns its key.
    ///
    /// Later entries shift one position left.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`](crate::error::ErrorKind::OutOfRange)
    /// if `position >= self.len()`.
    pub fn remove_at(&mut self, position: usize) -> Result<u32, Error> {
        if position >= self.len() {
            return Err(Error::out_of_range(position, self.len()));
        }
        self.values.remove(position);
        Ok(self.keys.remove(position))
    }

    /// Removes `key` and returns its value, or `None` if it was absent.
    pub fn remove(&mut self, key: u32) -> Option<u32> {
        let index = self.find(key)?;
        self.keys.remove(index);
        Some(self.values.remove(index))
    }

    /// Removes every entry. Allocated capacity is kept.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// Returns the entry at `position` in key order.
    pub fn get_index(&self, position: usize) -> Option<(u32, u32)> {
        let key = *self.keys.get(position)?;
        Some((key, self.values[position]))
    }

    /// Returns the key at `position` in key order.
    pub fn key_at(&self, position: usize) -> Option<u32> {
        self.keys.get(position).copied()
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(u32, u32)> {
        self.get_index(0)
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(u32, u32)> {
        self.len().checked_sub(1).and_then(|i| self.get_index(i))
    }

    /// Returns the number of bytes held by this map, including spare capacity.
    pub fn memory_usage(&self) -> usize {
        size_of::<Self>()
            + (self.keys.capacity() + self.values.capacity()) * size_of::<u32>()
    }

    /// Releases spare capacity in both arrays.
    pub fn shrink_to_fit(&mut self) {
        self.keys.shrink_to_fit();
        self.values.shrink_to_fit();
    }
}

impl fmt::Display for OrderedIntMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}
