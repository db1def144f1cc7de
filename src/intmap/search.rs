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

//! Binary search over a strictly ascending key array.

use std::cmp::Ordering;

/// Returns the position of `key` in `keys`, or `None` if it is not present.
///
/// Iterative search over the closed range `[0, len - 1]`. Keys are unique, so
/// there is at most one match.
pub(super) fn find(keys: &[u32], key: u32) -> Option<usize> {
    if keys.is_empty() {
        return None;
    }

    let mut lo = 0;
    let mut hi = keys.len() - 1;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match keys[mid].cmp(&key) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                hi = mid - 1;
            }
        }
    }
    None
}

/// Returns the first position whose key is not less than `key`.
///
/// This is where `key` must be inserted to keep `keys` sorted; it equals
/// `keys.len()` when every key is smaller.
pub(super) fn lower_bound(keys: &[u32], key: u32) -> usize {
    let mut lo = 0;
    let mut hi = keys.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if keys[mid] < key {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
