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

//! Binary layout of a serialized [`OrderedIntMap`].
//!
//! ```text
//! offset 0..8        big-endian u64 L, byte length of the key array
//! offset 8..8+L      keys, little-endian u32, strictly ascending
//! offset 8+L..8+2L   values, little-endian u32, index-aligned with keys
//! ```
//!
//! The layout is identical on every platform.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::codec::MapBytes;
use crate::codec::MapSlice;
use crate::codec::U32_WIDTH;
use crate::codec::decode_u32_slice_le;
use crate::error::Error;
use crate::intmap::OrderedIntMap;

/// Size of the length header in bytes.
pub const HEADER_SIZE_BYTES: usize = 8;

/// Size of one encoded key or value in bytes.
pub const ELEMENT_SIZE_BYTES: usize = U32_WIDTH;

impl OrderedIntMap {
    /// Returns the exact length of [`serialize`](Self::serialize)'s output.
    pub fn serialized_size_bytes(&self) -> usize {
        HEADER_SIZE_BYTES + 2 * self.len() * ELEMENT_SIZE_BYTES
    }

    /// Serializes this map to bytes.
    ///
    /// An empty map serializes to a bare header, which
    /// [`deserialize`](Self::deserialize) rejects.
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = MapBytes::with_capacity(self.serialized_size_bytes());
        bytes.write_u64_be((self.len() * ELEMENT_SIZE_BYTES) as u64);
        bytes.write_u32_slice_le(&self.keys);
        bytes.write_u32_slice_le(&self.values);
        bytes.into_bytes()
    }

    /// Deserializes a map from bytes produced by [`serialize`](Self::serialize).
    ///
    /// # Errors
    ///
    /// * [`ErrorKind::MalformedData`](crate::error::ErrorKind::MalformedData) if the input is
    ///   empty, holds no entries, is cut mid-element, has trailing bytes, or its keys are not
    ///   strictly ascending.
    /// * [`ErrorKind::InconsistentData`](crate::error::ErrorKind::InconsistentData) if the key
    ///   and value arrays decode to different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use intdict::intmap::OrderedIntMap;
    ///
    /// let map: OrderedIntMap = [(1, 10), (2, 20)].into_iter().collect();
    /// let bytes = map.serialize();
    /// assert_eq!(bytes.len(), 24);
    /// assert_eq!(OrderedIntMap::deserialize(&bytes).unwrap(), map);
    /// ```
    pub fn deserialize(bytes: &[u8]) -> Result<OrderedIntMap, Error> {
        let mut map = OrderedIntMap::new();
        map.load_bytes(bytes)?;
        Ok(map)
    }

    /// Replaces the contents of this map with the decoded `bytes`.
    ///
    /// On failure the map is left empty, never partially loaded. The merge
    /// threshold of this map is kept either way.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.clear();
        match decode(bytes) {
            Ok((keys, values)) => {
                self.keys = keys;
                self.values = values;
                Ok(())
            }
            Err(err) => {
                debug!(kind = %err.kind(), message = err.message(), "failed to load map; left empty");
                Err(err)
            }
        }
    }

    /// Writes [`serialize`](Self::serialize)'s output to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IoFailure`](crate::error::ErrorKind::IoFailure) if the file
    /// cannot be written.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        fs::write(path, self.serialize()).map_err(|err| {
            Error::io("failed to write map file", err).with_context("path", path.display())
        })?;
        debug!(path = %path.display(), entries = self.len(), "wrote map file");
        Ok(())
    }

    /// Clears this map and loads the contents of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IoFailure`](crate::error::ErrorKind::IoFailure) if the file
    /// cannot be read, or any error of [`deserialize`](Self::deserialize). The map is empty
    /// after any failure.
    pub fn from_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        self.clear();
        let bytes = fs::read(path).map_err(|err| {
            Error::io("failed to read map file", err).with_context("path", path.display())
        })?;
        self.load_bytes(&bytes)
            .map_err(|err| err.with_context("path", path.display()))?;
        debug!(path = %path.display(), entries = self.len(), "loaded map file");
        Ok(())
    }
}

fn decode(bytes: &[u8]) -> Result<(Vec<u32>, Vec<u32>), Error> {
    if bytes.is_empty() {
        return Err(Error::malformed("input is empty"));
    }

    let mut cursor = MapSlice::new(bytes);
    let key_bytes = cursor
        .read_u64_be()
        .map_err(|_| Error::insufficient_data("key array length"))?;
    if key_bytes == 0 {
        return Err(Error::malformed("serialized map holds no entries"));
    }
    if key_bytes % ELEMENT_SIZE_BYTES as u64 != 0 {
        return Err(Error::malformed(format!(
            "key array length {key_bytes} is not a multiple of {ELEMENT_SIZE_BYTES}"
        ))
        .with_context("key_bytes", key_bytes));
    }
    // Clamp to what is actually there; a short region shows up as a count mismatch below.
    let key_bytes = usize::try_from(key_bytes).unwrap_or(usize::MAX);

    let keys = decode_u32_slice_le(cursor.take(key_bytes))
        .ok_or_else(|| Error::malformed("key array ends mid-element"))?;
    let values = decode_u32_slice_le(cursor.take(key_bytes))
        .ok_or_else(|| Error::malformed("value array ends mid-element"))?;
    if keys.len() != values.len() {
        return Err(Error::inconsistent(keys.len(), values.len()));
    }
    if cursor.remaining() > 0 {
        return Err(
            Error::malformed(format!("{} trailing bytes after value array", cursor.remaining()))
                .with_context("trailing", cursor.remaining()),
        );
    }
    if let Some(i) = keys.windows(2).position(|w| w[0] >= w[1]) {
        return Err(Error::malformed(format!(
            "keys are not strictly ascending at position {}",
            i + 1
        ))
        .with_context("position", i + 1));
    }

    Ok((keys, values))
}
