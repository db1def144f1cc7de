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

use crate::intmap::OrderedIntMap;

/// Builder for creating [`OrderedIntMap`]s.
///
/// # Examples
///
/// ```
/// use intdict::intmap::OrderedIntMap;
///
/// let mut map = OrderedIntMap::builder().capacity(3).build();
/// map.merge([(3, 30), (1, 10), (2, 20)]);
/// assert_eq!(map.keys().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedIntMapBuilder {
    capacity: usize,
    bulk_merge_threshold: usize,
}

impl Default for OrderedIntMapBuilder {
    fn default() -> Self {
        Self {
            capacity: 0,
            bulk_merge_threshold: OrderedIntMap::DEFAULT_BULK_MERGE_THRESHOLD,
        }
    }
}

impl OrderedIntMapBuilder {
    /// Reserves room for `capacity` entries in both arrays.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the input size hint at which [`OrderedIntMap::merge`] sorts once
    /// instead of inserting entry by entry.
    ///
    /// `0` makes every merge bulk; `usize::MAX` makes every merge incremental.
    /// The final contents do not depend on this setting.
    pub fn bulk_merge_threshold(mut self, threshold: usize) -> Self {
        self.bulk_merge_threshold = threshold;
        self
    }

    /// Builds an empty map.
    pub fn build(self) -> OrderedIntMap {
        let mut map = OrderedIntMap::with_capacity(self.capacity);
        map.bulk_merge_threshold = self.bulk_merge_threshold;
        map
    }
}
