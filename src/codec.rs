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

use std::io;
use std::io::Cursor;

use byteorder::BigEndian;
use byteorder::ByteOrder;
use byteorder::LittleEndian;
use byteorder::ReadBytesExt;

/// Size in bytes of one encoded array element.
pub(crate) const U32_WIDTH: usize = size_of::<u32>();

pub(crate) struct MapBytes {
    bytes: Vec<u8>,
}

impl MapBytes {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn write_u64_be(&mut self, n: u64) {
        let mut buf = [0u8; 8];
        BigEndian::write_u64(&mut buf, n);
        self.bytes.extend_from_slice(&buf);
    }

    /// Appends every element of `src` as a little-endian `u32`.
    pub fn write_u32_slice_le(&mut self, src: &[u32]) {
        let start = self.bytes.len();
        self.bytes.resize(start + src.len() * U32_WIDTH, 0);
        LittleEndian::write_u32_into(src, &mut self.bytes[start..]);
    }
}

pub(crate) struct MapSlice<'a> {
    slice: Cursor<&'a [u8]>,
}

impl<'a> MapSlice<'a> {
    pub fn new(slice: &'a [u8]) -> MapSlice<'a> {
        MapSlice {
            slice: Cursor::new(slice),
        }
    }

    pub fn read_u64_be(&mut self) -> io::Result<u64> {
        self.slice.read_u64::<BigEndian>()
    }

    /// Number of bytes not consumed yet.
    pub fn remaining(&self) -> usize {
        let data = *self.slice.get_ref();
        data.len().saturating_sub(self.slice.position() as usize)
    }

    /// Consumes up to `len` bytes, returning fewer when the input ends first.
    pub fn take(&mut self, len: usize) -> &'a [u8] {
        let data: &'a [u8] = *self.slice.get_ref();
        let start = (self.slice.position() as usize).min(data.len());
        let end = start + len.min(data.len() - start);
        self.slice.set_position(end as u64);
        &data[start..end]
    }
}

/// Decodes a run of little-endian `u32`s. Returns `None` if `bytes` ends mid-element.
pub(crate) fn decode_u32_slice_le(bytes: &[u8]) -> Option<Vec<u32>> {
    if bytes.len() % U32_WIDTH != 0 {
        return None;
    }
    let mut out = vec![0u32; bytes.len() / U32_WIDTH];
    LittleEndian::read_u32_into(bytes, &mut out);
    Some(out)
}
