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

use std::iter::Copied;
use std::iter::FusedIterator;
use std::slice;
use std::vec;

use crate::intmap::OrderedIntMap;

impl OrderedIntMap {
    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> Keys<'_> {
        Keys {
            inner: self.keys.iter().copied(),
        }
    }

    /// Returns an iterator over the values in ascending key order.
    pub fn values(&self) -> Values<'_> {
        Values {
            inner: self.values.iter().copied(),
        }
    }

    /// Returns an iterator over `(key, value)` pairs in ascending key order.
    ///
    /// The iterator borrows the map, so the map cannot be modified while it is alive.
    /// Each call starts a fresh pass from the smallest key.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            keys: self.keys.iter(),
            values: self.values.iter(),
        }
    }
}

/// Iterator over the keys of an [`OrderedIntMap`].
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    inner: Copied<slice::Iter<'a, u32>>,
}

impl Iterator for Keys<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Keys<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Keys<'_> {}
impl FusedIterator for Keys<'_> {}

/// Iterator over the values of an [`OrderedIntMap`].
#[derive(Debug, Clone)]
pub struct Values<'a> {
    inner: Copied<slice::Iter<'a, u32>>,
}

impl Iterator for Values<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Values<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Values<'_> {}
impl FusedIterator for Values<'_> {}

/// Iterator over the entries of an [`OrderedIntMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    keys: slice::Iter<'a, u32>,
    values: slice::Iter<'a, u32>,
}

impl Iterator for Iter<'_> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let key = *self.keys.next()?;
        let value = *self.values.next()?;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = *self.keys.next_back()?;
        let value = *self.values.next_back()?;
        Some((key, value))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Owning iterator over the entries of an [`OrderedIntMap`].
#[derive(Debug)]
pub struct IntoIter {
    keys: vec::IntoIter<u32>,
    values: vec::IntoIter<u32>,
}

impl Iterator for IntoIter {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.keys.next()?, self.values.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((self.keys.next_back()?, self.values.next_back()?))
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}

impl IntoIterator for OrderedIntMap {
    type Item = (u32, u32);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            keys: self.keys.into_iter(),
            values: self.values.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a OrderedIntMap {
    type Item = (u32, u32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(u32, u32)> for OrderedIntMap {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        let mut map = OrderedIntMap::default();
        map.merge(iter);
        map
    }
}
