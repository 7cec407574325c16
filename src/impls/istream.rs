/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::impls::{BitBuf, Mode, Whence};
use crate::manip::InputManip;
use crate::state::{Flags, StreamState};
use crate::traits::{BitField, Extract};

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An input stream of bits over a caller-owned byte buffer.
///
/// The stream wraps a [`BitBuf`] and layers the sticky error model on
/// top of it: every operation either completes, or records the failure
/// in the stream's [`Flags`] and keeps going. Nothing is propagated
/// through return values, so a caller can chain an entire header's
/// worth of extractions and test [`ok`](InputBitStream::ok) once at the
/// end.
///
/// ```
/// use wirestream::prelude::*;
///
/// let mut kind = Bits::<3>::default();
/// let mut ack = false;
/// let mut window = 0u16;
///
/// let mut bin = InputBitStream::new([0b101_1_0000u8, 0x12, 0x34, 0x00]);
/// bin.field(&mut kind).field(&mut ack).ignore(4).field(&mut window);
/// assert!(bin.ok());
/// assert_eq!((kind.value(), ack, window), (0b101, true, 0x1234));
/// ```
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[derive(Debug, Clone)]
pub struct InputBitStream<B> {
    buf: BitBuf<B>,
    state: StreamState,
    gcount: u64,
    gvalue: BitField,
    repeat: usize,
}

impl<B: AsRef<[u8]>> InputBitStream<B> {
    /// Create an input stream over every bit of `data`.
    pub fn new(data: B) -> Self {
        let bits = data.as_ref().len() as u64 * 8;
        Self::with_size(data, bits)
    }

    /// Create an input stream over the first `size` bits of `data`.
    pub fn with_size(data: B, size: u64) -> Self {
        Self::from_buf(BitBuf::with_mode(data, size, Mode::READ))
    }

    /// Create an input stream over an existing buffer. The buffer must
    /// have been constructed with a readable mode.
    pub fn from_buf(buf: BitBuf<B>) -> Self {
        debug_assert!(buf.mode().readable());
        Self {
            buf,
            state: StreamState::new(),
            gcount: 0,
            gvalue: 0,
            repeat: 0,
        }
    }

    /// The underlying buffer.
    pub fn buf(&self) -> &BitBuf<B> {
        &self.buf
    }

    /// The underlying buffer, mutably. Cursor moves made through it are
    /// not reflected in the stream flags.
    pub fn buf_mut(&mut self) -> &mut BitBuf<B> {
        &mut self.buf
    }

    /// Consume the stream and return the underlying buffer.
    pub fn into_inner(self) -> BitBuf<B> {
        self.buf
    }

    // Raw reads //////////////////////////////////////////////////////////

    /// Read exactly `bits` bits (at most 64), right justified.
    ///
    /// On success the value is returned and recorded
    /// ([`gvalue`](InputBitStream::gvalue), with
    /// [`gcount`](InputBitStream::gcount) set to `bits`); a read that
    /// lands exactly on the end of the accessible bits additionally
    /// sets [`Flags::EOF`], so the next operation cannot silently
    /// succeed. If fewer than `bits` bits remain, the cursor stays
    /// put, `EOF` and `FAIL` are both set, and zero is returned with
    /// `gcount` zero.
    pub fn read(&mut self, bits: u32) -> BitField {
        debug_assert!(bits <= BitField::BITS);
        if bits == 0 {
            self.gcount = 0;
            self.gvalue = 0;
            return 0;
        }
        match self.buf.get_bits(bits) {
            Some(value) => {
                self.gcount = u64::from(bits);
                self.gvalue = value;
                if self.buf.avail_get() == 0 {
                    self.state.set_eof();
                }
            }
            None => {
                self.state.set_fail();
                self.state.set_eof();
                self.gcount = 0;
                self.gvalue = 0;
            }
        }
        self.gvalue
    }

    /// Alias of [`read`](InputBitStream::read): an in-memory stream has
    /// no notion of "immediately available" bits beyond its bounds.
    pub fn read_some(&mut self, bits: u32) -> BitField {
        self.read(bits)
    }

    /// Read one bit.
    #[inline]
    pub fn get(&mut self) -> BitField {
        self.read(1)
    }

    /// Read one bit without advancing the cursor. Sets [`Flags::EOF`]
    /// at the end of the stream.
    pub fn peek(&mut self) -> BitField {
        match self.buf.peek_bit() {
            Some(bit) => {
                self.gcount = 1;
                self.gvalue = bit;
            }
            None => {
                self.state.set_eof();
                self.gcount = 0;
                self.gvalue = 0;
            }
        }
        self.gvalue
    }

    // Cursor operations //////////////////////////////////////////////////

    /// Skip `bits` bits without extracting a value. Sets [`Flags::EOF`]
    /// and leaves the cursor untouched when fewer bits remain.
    pub fn ignore(&mut self, bits: u64) -> &mut Self {
        debug_assert!(bits <= i64::MAX as u64);
        if self.buf.seek_get(bits as i64, Whence::Current).is_none() {
            self.state.set_eof();
            self.gcount = 0;
        } else {
            self.gcount = bits;
        }
        self
    }

    /// Advance the cursor to the next multiple of `multiple` bits, if
    /// it is not at one already. Does nothing on a stream that is not
    /// good or when `multiple` is zero. Resets
    /// [`gcount`](InputBitStream::gcount).
    pub fn align(&mut self, multiple: u32) -> &mut Self {
        debug_assert!(multiple > 0);
        if self.good() && multiple > 0 {
            let m = u64::from(multiple);
            let target = (self.tell() + m - 1) / m * m;
            if self.buf.seek_get_pos(target).is_none() {
                self.state.set_fail();
            }
        }
        self.gcount = 0;
        self
    }

    /// Whether the cursor is at a multiple of `multiple` bits.
    pub fn aligned(&self, multiple: u32) -> bool {
        debug_assert!(multiple > 0);
        multiple == 0 || self.tell() % u64::from(multiple) == 0
    }

    /// Move the cursor back one bit. Sets [`Flags::FAIL`] when already
    /// at the beginning.
    pub fn unget(&mut self) -> &mut Self {
        self.gcount = 0;
        if self.buf.seek_get(-1, Whence::Current).is_none() {
            self.state.set_fail();
        }
        self
    }

    /// Move the cursor back one bit, asserting that the bit it then
    /// addresses equals `bit`. Sets [`Flags::FAIL`] at the beginning of
    /// the stream and [`Flags::BAD`] when the bit differs; in both
    /// cases the cursor stays put.
    pub fn putback(&mut self, bit: bool) -> &mut Self {
        self.gcount = 0;
        if self.buf.get_pos() == self.buf.get_begin() {
            self.state.set_fail();
        } else if !self.buf.putback_bit(bit as BitField) {
            self.state.set_bad();
        }
        self
    }

    /// The cursor position, in bits.
    #[inline]
    pub fn tell(&self) -> u64 {
        self.buf.get_pos()
    }

    /// Move the cursor to the absolute bit `position`. Sets
    /// [`Flags::FAIL`] when the position is out of bounds.
    pub fn seek_to(&mut self, position: u64) -> &mut Self {
        if self.buf.seek_get_pos(position).is_none() {
            self.state.set_fail();
        }
        self
    }

    /// Move the cursor to the signed bit offset relative to `whence`.
    /// Sets [`Flags::FAIL`] when the target is out of bounds.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> &mut Self {
        if self.buf.seek_get(offset, whence).is_none() {
            self.state.set_fail();
        }
        self
    }

    /// Synchronize with the source of bits. There is none, so this
    /// always reports failure.
    pub fn sync(&mut self) -> Option<()> {
        self.buf.sync()
    }

    // Last-operation accounting //////////////////////////////////////////

    /// Number of bits extracted by the last operation.
    #[inline]
    pub fn gcount(&self) -> u64 {
        self.gcount
    }

    /// Value extracted by the last operation. Only meaningful when
    /// [`gcount`](InputBitStream::gcount) is nonzero.
    #[inline]
    pub fn gvalue(&self) -> BitField {
        self.gvalue
    }

    // Repeat count ///////////////////////////////////////////////////////

    /// Store a repeat count for the next variable-size container
    /// extraction. The cursor is untouched; the count persists until a
    /// container operation consumes it.
    pub fn repeat(&mut self, count: usize) -> &mut Self {
        self.repeat = count;
        self
    }

    /// Take the pending repeat count, resetting it to zero. Container
    /// implementations of [`Extract`] call this exactly once.
    pub fn take_repeat(&mut self) -> usize {
        core::mem::take(&mut self.repeat)
    }

    // Field protocol /////////////////////////////////////////////////////

    /// Extract `value` from the stream.
    pub fn field<T: Extract + ?Sized>(&mut self, value: &mut T) -> &mut Self {
        value.extract_from(self);
        self
    }

    /// Extract a value of the same kind as `want` and require it to be
    /// equal; a mismatch sets [`Flags::FAIL`] with the cursor advanced
    /// past the field.
    pub fn expect<T: Extract + ?Sized>(&mut self, want: &T) -> &mut Self {
        want.expect_from(self);
        self
    }

    /// Apply a manipulator, such as [`SetRepeat`](crate::manip::SetRepeat)
    /// or [`AlignTo`](crate::manip::AlignTo), in the middle of a field
    /// chain.
    pub fn with<M: InputManip>(&mut self, manip: M) -> &mut Self {
        manip.apply_to(self);
        self
    }

    // State //////////////////////////////////////////////////////////////

    /// The current flag set.
    #[inline]
    pub fn state(&self) -> Flags {
        self.state.state()
    }

    /// Whether no flag is set.
    #[inline]
    pub fn good(&self) -> bool {
        self.state.good()
    }

    /// Whether the end of the accessible bits was reached.
    #[inline]
    pub fn eof(&self) -> bool {
        self.state.eof()
    }

    /// Whether an operation failed or integrity was lost.
    #[inline]
    pub fn fail(&self) -> bool {
        self.state.fail()
    }

    /// Whether integrity was lost.
    #[inline]
    pub fn bad(&self) -> bool {
        self.state.bad()
    }

    /// The boolean value of the stream: `!self.fail()`.
    #[inline]
    pub fn ok(&self) -> bool {
        self.state.ok()
    }

    /// Replace the flag set, by default with the empty one.
    pub fn clear(&mut self, flags: Flags) {
        self.state.clear(flags);
    }

    /// Add flags without clearing any.
    pub fn set_state(&mut self, flags: Flags) {
        self.state.set_state(flags);
    }

    /// Set [`Flags::EOF`].
    pub fn set_eof(&mut self) {
        self.state.set_eof();
    }

    /// Set [`Flags::FAIL`].
    pub fn set_fail(&mut self) {
        self.state.set_fail();
    }

    /// Set [`Flags::BAD`].
    pub fn set_bad(&mut self) {
        self.state.set_bad();
    }
}

impl<B: AsRef<[u8]>> core::ops::Not for &InputBitStream<B> {
    type Output = bool;

    /// `!stream` is true when the stream has failed, mirroring the
    /// boolean contract of [`ok`](InputBitStream::ok).
    fn not(self) -> bool {
        self.fail()
    }
}
