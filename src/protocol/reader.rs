//! Bounds-checked byte cursor
//!
//! Membaca field langsung dari borrowed buffer tanpa copy.
//! Semua read mengembalikan `None` kalau buffer tidak cukup,
//! posisi baca tidak berubah pada kegagalan.

/// Cursor di atas slice input
pub struct ByteReader<'a> {
    buffer: &'a [u8],
    read_pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Membuat reader dari buffer
    #[inline(always)]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            read_pos: 0,
        }
    }

    /// Baca satu byte
    #[inline(always)]
    pub fn read_u8(&mut self) -> Option<u8> {
        let byte = *self.buffer.get(self.read_pos)?;
        self.read_pos += 1;
        Some(byte)
    }

    /// Baca u32 little-endian (byte pertama = least significant)
    #[inline(always)]
    pub fn read_u32_le(&mut self) -> Option<u32> {
        let bytes = self.read_slice(4)?;
        Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Ambil tepat `len` byte berikutnya (zero-copy)
    #[inline(always)]
    pub fn read_slice(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.read_pos.checked_add(len)?;
        let slice = self.buffer.get(self.read_pos..end)?;
        self.read_pos = end;
        Some(slice)
    }

    /// Remaining bytes
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.read_pos)
    }
}
