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

use std::error::Error as _;
use std::fs;

use googletest::assert_that;
use googletest::prelude::contains_substring;
use googletest::prelude::eq;
use intdict::error::ErrorKind;
use intdict::intmap::OrderedIntMap;
use intdict::intmap::serialization::ELEMENT_SIZE_BYTES;
use intdict::intmap::serialization::HEADER_SIZE_BYTES;
use proptest::prelude::*;

fn sample_map() -> OrderedIntMap {
    [(1, 10), (2, 200), (0x0102_0304, u32::MAX)]
        .into_iter()
        .collect()
}

#[test]
fn test_exact_layout() {
    let map: OrderedIntMap = [(1, 10), (2, 0x0a0b_0c0d)].into_iter().collect();
    let bytes = map.serialize();

    assert_eq!(bytes.len(), map.serialized_size_bytes());
    assert_eq!(
        bytes,
        vec![
            0, 0, 0, 0, 0, 0, 0, 8, // key array length, big-endian
            1, 0, 0, 0, 2, 0, 0, 0, // keys, little-endian
            10, 0, 0, 0, 0x0d, 0x0c, 0x0b, 0x0a, // values, little-endian
        ]
    );
}

#[test]
fn test_round_trip() {
    let map = sample_map();
    let bytes = map.serialize();
    assert_eq!(bytes.len(), HEADER_SIZE_BYTES + 2 * 3 * ELEMENT_SIZE_BYTES);

    let restored = OrderedIntMap::deserialize(&bytes).unwrap();
    assert_eq!(restored, map);
    assert_eq!(restored.serialize(), bytes);
}

#[test]
fn test_empty_map_does_not_round_trip() {
    let bytes = OrderedIntMap::new().serialize();
    assert_eq!(bytes.len(), HEADER_SIZE_BYTES);

    let err = OrderedIntMap::deserialize(&bytes).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::MalformedData));
    assert_that!(err.message(), contains_substring("no entries"));
}

#[test]
fn test_empty_input() {
    let err = OrderedIntMap::deserialize(&[]).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::MalformedData));
    assert_that!(err.message(), contains_substring("empty"));
}

#[test]
fn test_short_header() {
    let err = OrderedIntMap::deserialize(&[0, 0, 0]).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::MalformedData));
    assert_that!(err.message(), contains_substring("key array length"));
}

#[test]
fn test_truncated_value_array() {
    let mut bytes = sample_map().serialize();
    bytes.truncate(bytes.len() - ELEMENT_SIZE_BYTES);

    let err = OrderedIntMap::deserialize(&bytes).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InconsistentData));
    assert_eq!(err.context("keys"), Some("3"));
    assert_eq!(err.context("values"), Some("2"));
}

#[test]
fn test_missing_value_array() {
    let mut bytes = sample_map().serialize();
    bytes.truncate(HEADER_SIZE_BYTES + 3 * ELEMENT_SIZE_BYTES);

    let err = OrderedIntMap::deserialize(&bytes).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InconsistentData));
}

#[test]
fn test_cut_mid_element() {
    let mut bytes = sample_map().serialize();
    bytes.truncate(bytes.len() - 1);

    let err = OrderedIntMap::deserialize(&bytes).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::MalformedData));
    assert_that!(err.message(), contains_substring("mid-element"));
}

#[test]
fn test_bad_length_header() {
    let mut bytes = sample_map().serialize();
    bytes[7] = 11;

    let err = OrderedIntMap::deserialize(&bytes).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::MalformedData));
    assert_that!(err.message(), contains_substring("not a multiple of 4"));

    // a huge length only sees what is there
    let mut bytes = sample_map().serialize();
    bytes[0] = 0x7f;
    let err = OrderedIntMap::deserialize(&bytes).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InconsistentData));
}

#[test]
fn test_trailing_bytes() {
    let mut bytes = sample_map().serialize();
    bytes.extend_from_slice(&[0, 0, 0, 0]);

    let err = OrderedIntMap::deserialize(&bytes).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::MalformedData));
    assert_that!(err.message(), contains_substring("trailing"));
}

#[test]
fn test_unsorted_keys() {
    let mut bytes = sample_map().serialize();
    // swap the first two keys
    bytes[8] = 2;
    bytes[12] = 1;

    let err = OrderedIntMap::deserialize(&bytes).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::MalformedData));
    assert_that!(err.message(), contains_substring("strictly ascending"));
}

#[test]
fn test_failed_load_leaves_map_empty() {
    let mut map = OrderedIntMap::builder().bulk_merge_threshold(7).build();
    map.merge([(4, 40), (5, 50)]);

    let mut bytes = sample_map().serialize();
    bytes.truncate(bytes.len() - ELEMENT_SIZE_BYTES);
    assert!(map.load_bytes(&bytes).is_err());
    assert!(map.is_empty());
    assert_eq!(map.keys().len(), map.values().len());
    assert_eq!(map.bulk_merge_threshold(), 7);

    map.load_bytes(&sample_map().serialize()).unwrap();
    assert_eq!(map, sample_map());
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.bin");

    let map: OrderedIntMap = (0..5_000u32).map(|k| (k * 3, k)).collect();
    map.to_file(&path).unwrap();
    assert_eq!(
        fs::metadata(&path).unwrap().len() as usize,
        map.serialized_size_bytes()
    );

    let mut loaded: OrderedIntMap = [(1, 1)].into_iter().collect();
    loaded.from_file(&path).unwrap();
    assert_eq!(loaded, map);
}

#[test]
fn test_from_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.bin");
    fs::write(&path, b"").unwrap();

    let mut map: OrderedIntMap = [(1, 1)].into_iter().collect();
    let err = map.from_file(&path).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::MalformedData));
    assert!(err.context("path").is_some());
    assert!(map.is_empty());
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bin");

    let mut map: OrderedIntMap = [(1, 1)].into_iter().collect();
    let err = map.from_file(&path).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::IoFailure));
    assert!(err.source().is_some());
    assert!(map.is_empty());
}

proptest! {
    #[test]
    fn round_trip_preserves_entries(
        pairs in prop::collection::vec(any::<(u32, u32)>(), 1..1000),
    ) {
        let map: OrderedIntMap = pairs.into_iter().collect();
        let restored = OrderedIntMap::deserialize(&map.serialize()).unwrap();
        prop_assert_eq!(restored.keys().collect::<Vec<_>>(), map.keys().collect::<Vec<_>>());
        prop_assert_eq!(restored.values().collect::<Vec<_>>(), map.values().collect::<Vec<_>>());
    }
}
