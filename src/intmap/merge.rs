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

use tracing::debug;

use crate::intmap::OrderedIntMap;

/// Algorithm used to fold a batch of pairs into a map.
///
/// Both produce the same final map; they only differ in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// One [`OrderedIntMap::insert_or_update`] per pair: `O(n * m)` worst case.
    Incremental,
    /// Concatenate, sort once and rebuild: `O((n + m) log(n + m))`.
    Bulk,
}

impl OrderedIntMap {
    /// Inserts or updates every pair from `pairs`.
    ///
    /// When a key appears more than once, the last pair wins, exactly as if
    /// the pairs had been inserted one at a time. The bulk algorithm is used
    /// when the iterator's lower size hint reaches
    /// [`bulk_merge_threshold`](Self::bulk_merge_threshold).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use intdict::intmap::OrderedIntMap;
    ///
    /// let mut map: OrderedIntMap = [(1, 10), (2, 20)].into_iter().collect();
    /// map.merge(HashMap::from([(3, 30), (4, 40), (5, 50)]));
    /// assert_eq!(map.len(), 5);
    /// assert_eq!(map.keys().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn merge<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let pairs = pairs.into_iter();
        let strategy = if pairs.size_hint().0 >= self.bulk_merge_threshold {
            MergeStrategy::Bulk
        } else {
            MergeStrategy::Incremental
        };
        self.merge_with(pairs, strategy);
    }

    /// Inserts or updates every pair from `pairs` using the given algorithm.
    pub fn merge_with<I>(&mut self, pairs: I, strategy: MergeStrategy)
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let before = self.len();
        match strategy {
            MergeStrategy::Incremental => self.merge_incremental(pairs),
            MergeStrategy::Bulk => self.merge_bulk(pairs),
        }
        debug!(
            ?strategy,
            before,
            after = self.len(),
            "merged pairs into map"
        );
    }

    fn merge_incremental<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        for (key, value) in pairs {
            self.insert_or_update(key, value);
        }
    }

    fn merge_bulk<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let pairs = pairs.into_iter();
        let mut entries = Vec::with_capacity(self.len() + pairs.size_hint().0);
        entries.extend(self.iter());
        entries.extend(pairs);

        // Stable: existing entries stay ahead of incoming ones and incoming
        // ones keep their order, so the last of each equal-key run wins.
        entries.sort_by_key(|&(key, _)| key);

        self.clear();
        self.keys.reserve(entries.len());
        self.values.reserve(entries.len());
        for (key, value) in entries {
            if self.keys.last() == Some(&key) {
                if let Some(slot) = self.values.last_mut() {
                    *slot = value;
                }
            } else {
                self.keys.push(key);
                self.values.push(value);
            }
        }
    }
}

impl Extend<(u32, u32)> for OrderedIntMap {
    fn extend<I: IntoIterator<Item = (u32, u32)>>(&mut self, iter: I) {
        self.merge(iter);
    }
}
