use std::fmt;

use crate::ambe_err::AmbeErr;

/// Fixed-capacity, MSB-first bit buffer with a read/write cursor.
pub struct BitBuffer {
    buffer: Vec<u8>,
    pos: usize,         // next bit offset for read/write
    end: usize,         // bits at or after this are out of window
}

impl BitBuffer {
    /// Create a zeroed buffer capable of holding exactly `len_bits` bits.
    pub fn new(len_bits: usize) -> Self {
        let byte_len = len_bits.div_ceil(8);
        BitBuffer {
            buffer: vec![0; byte_len],
            pos: 0,
            end: len_bits,
        }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        BitBuffer {
            buffer: data.to_vec(),
            pos: 0,
            end: data.len() * 8,
        }
    }

    /// Construct a BitBuffer directly from a string of '0'/'1' characters.
    /// Panics if any other character is encountered.
    pub fn from_bitstr(bitstr: &str) -> Self {
        let mut buf = BitBuffer::new(bitstr.len());
        for c in bitstr.chars() {
            match c {
                '0' => buf.write_bit(0),
                '1' => buf.write_bit(1),
                other => panic!("from_bitstr: invalid character `{}`; only '0' or '1' allowed", other),
            }
        }
        buf.pos = 0;
        buf
    }

    /// Parse a string of hex digits, 4 bits per digit. Whitespace is skipped.
    pub fn from_hexstr(hexstr: &str) -> Result<Self, AmbeErr> {
        let mut nibbles = Vec::with_capacity(hexstr.len());
        for (position, c) in hexstr.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let nibble = c.to_digit(16).ok_or(AmbeErr::InvalidHex { position })?;
            nibbles.push(nibble as u64);
        }

        let mut buf = BitBuffer::new(nibbles.len() * 4);
        for nibble in nibbles {
            buf.write_bits(nibble, 4);
        }
        buf.pos = 0;
        Ok(buf)
    }

    /// Construct a BitBuffer directly from a byte array of '0'/'1' bytes.
    pub fn from_bitarr(data: &[u8]) -> Self {
        let mut buf = BitBuffer::new(data.len());
        for &bit in data {
            assert!(bit == 0 || bit == 1, "from_bitarr: invalid byte `{}`; only 0 or 1 allowed", bit);
            buf.write_bit(bit);
        }
        buf.pos = 0;
        buf
    }

    /// Reads out.len() bits starting at pos into `out`, one bit per byte. Advances pos.
    pub fn to_bitarr(&mut self, out: &mut [u8]) {
        assert!(
            out.len() <= self.get_len_remaining(),
            "to_bitarr: {} bits requested, {} remaining",
            out.len(),
            self.get_len_remaining()
        );
        for slot in out.iter_mut() {
            *slot = self.read_bit_at_unchecked(self.pos);
            self.pos += 1;
        }
    }

    /// Peek `num_bits` at the current pos, without advancing.
    /// Returns None on overflow or if `num_bits>64`.
    pub fn peek_bits(&self, num_bits: usize) -> Option<u64> {
        if num_bits > 64 || self.pos + num_bits > self.end {
            return None;
        }
        Some(self.read_bits_at_unchecked(self.pos, num_bits))
    }

    /// Read `num_bits` at the current pos, advancing on success.
    pub fn read_bits(&mut self, num_bits: usize) -> Option<u64> {
        let v = self.peek_bits(num_bits)?;
        self.pos += num_bits;
        Some(v)
    }

    /// Write a single bit to pos
    pub fn write_bit(&mut self, value: u8) {
        assert!(value == 0 || value == 1, "write_bit: value must be 0 or 1");
        assert!(self.pos < self.end, "write_bit would exceed buffer end");

        let index = self.pos / 8;
        let shift = 7 - (self.pos % 8);
        self.buffer[index] = (self.buffer[index] & !(1 << shift)) | (value << shift);
        self.pos += 1;
    }

    /// Write up to 64 bits MSB-first, advancing pos. Panics if exceeding end.
    pub fn write_bits(&mut self, value: u64, num_bits: usize) {
        assert!(num_bits <= 64, "can only write up to 64 bits");
        assert!(num_bits == 64 || value >> num_bits == 0, "value exceeds num_bits {} {}", value, num_bits);
        assert!(self.pos + num_bits <= self.end, "write would exceed buffer end");

        for i in (0..num_bits).rev() {
            self.write_bit(((value >> i) & 1) as u8);
        }
    }

    /// Read `num_bits` from a source bitbuffer, starting at its `pos`.
    /// Write this data into the current bitbuffer at the current `pos`.
    pub fn copy_bits(&mut self, src: &mut BitBuffer, num_bits: usize) {
        assert!(num_bits <= src.get_len_remaining(), "copy_bits: source too short");
        for _ in 0..num_bits {
            let bit = src.read_bit_at_unchecked(src.pos);
            src.pos += 1;
            self.write_bit(bit);
        }
    }

    /// Extract the internal byte-vector (all bytes, including any unused bits).
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Window length in bits
    pub fn get_len(&self) -> usize {
        self.end
    }

    /// Number of bits left in the window, from pos to end.
    pub fn get_len_remaining(&self) -> usize {
        self.end - self.pos
    }

    pub fn get_pos(&self) -> usize {
        self.pos
    }

    /// Seek `pos` to `offset` from the start of the buffer.
    pub fn seek(&mut self, offset: usize) {
        assert!(offset <= self.end, "seek out of window: got {}, allowed [0,{}]", offset, self.end);
        self.pos = offset;
    }

    /// Move the current bit pointer by `offset` bits (can be negative).
    pub fn seek_rel(&mut self, offset: isize) {
        let new_pos = self.pos as isize + offset;
        assert!(
            new_pos >= 0 && new_pos as usize <= self.end,
            "seek out of window: got {}, allowed [0,{}]",
            new_pos,
            self.end
        );
        self.pos = new_pos as usize;
    }

    fn read_bit_at_unchecked(&self, pos: usize) -> u8 {
        (self.buffer[pos / 8] >> (7 - (pos % 8))) & 1
    }

    fn read_bits_at_unchecked(&self, pos: usize, num_bits: usize) -> u64 {
        let mut v = 0u64;
        for p in pos..pos + num_bits {
            v = (v << 1) | self.read_bit_at_unchecked(p) as u64;
        }
        v
    }

    // String representations /////////////////////////////

    /// Dump the window as an uppercase hex string, no separators.
    /// A trailing partial nibble is padded on the right with zeros.
    pub fn dump_hex(&self) -> String {
        let mut s = String::with_capacity(self.end.div_ceil(4));
        let mut bit_pos = 0;
        while bit_pos < self.end {
            let take = usize::min(4, self.end - bit_pos);
            let v = self.read_bits_at_unchecked(bit_pos, take) as u8;
            let digit = v << (4 - take);
            s.push_str(&format!("{:X}", digit));
            bit_pos += take;
        }
        s
    }

    /// Dump the window as '0'/'1' characters, with a ^ marker before pos.
    pub fn dump_bin(&self) -> String {
        let mut s = String::with_capacity(self.end + 1);
        for p in 0..self.end {
            if p == self.pos {
                s.push('^');
            }
            s.push(if self.read_bit_at_unchecked(p) == 1 { '1' } else { '0' });
        }
        if self.pos == self.end {
            s.push('^');
        }
        s
    }
}

impl fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBuffer {{ ^{} >{} {} }}", self.pos, self.end, self.dump_bin())
    }
}
