/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::impls::{BitBuf, Mode, Whence};
use crate::manip::OutputManip;
use crate::state::{Flags, StreamState};
use crate::traits::{BitField, Insert};

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An output stream of bits over a caller-owned byte buffer.
///
/// The write-side counterpart of
/// [`InputBitStream`](crate::impls::InputBitStream): insertions update
/// the put cursor and record failures in the sticky flag set, and a
/// field that does not fit is not written at all — the buffer bytes
/// outside every written field keep their previous value.
///
/// ```
/// use wirestream::prelude::*;
///
/// let mut bout = OutputBitStream::new([0u8; 2]);
/// bout.field(&Bits::<3>::new(0b101))
///     .put(true)
///     .write(0x9, 4)
///     .align(8)
///     .field(&0x7fu8);
/// assert!(bout.ok());
/// assert_eq!(bout.buf().data(), &[0b101_1_1001, 0x7f]);
/// ```
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[derive(Debug, Clone)]
pub struct OutputBitStream<B> {
    buf: BitBuf<B>,
    state: StreamState,
    repeat: usize,
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> OutputBitStream<B> {
    /// Create an output stream over every bit of `data`.
    pub fn new(data: B) -> Self {
        let bits = data.as_ref().len() as u64 * 8;
        Self::with_size(data, bits)
    }

    /// Create an output stream over the first `size` bits of `data`.
    pub fn with_size(data: B, size: u64) -> Self {
        Self::from_buf(BitBuf::with_mode(data, size, Mode::WRITE))
    }

    /// Create an output stream over an existing buffer. The buffer must
    /// have been constructed with a writable mode.
    pub fn from_buf(buf: BitBuf<B>) -> Self {
        debug_assert!(buf.mode().writable());
        Self {
            buf,
            state: StreamState::new(),
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

    // Raw writes /////////////////////////////////////////////////////////

    /// Write the low `bits` bits of `value` (at most 64).
    ///
    /// A write that exactly fills the accessible bits sets
    /// [`Flags::EOF`]. If fewer than `bits` bits remain, nothing is
    /// written — no partial field — and `EOF` and `FAIL` are both set.
    pub fn write(&mut self, value: BitField, bits: u32) -> &mut Self {
        debug_assert!(bits <= BitField::BITS);
        if bits == 0 {
            return self;
        }
        match self.buf.put_bits(value, bits) {
            Some(_) => {
                if self.buf.avail_put() == 0 {
                    self.state.set_eof();
                }
            }
            None => {
                self.state.set_fail();
                self.state.set_eof();
            }
        }
        self
    }

    /// Write a single bit.
    #[inline]
    pub fn put(&mut self, bit: bool) -> &mut Self {
        self.write(bit as BitField, 1)
    }

    // Cursor operations //////////////////////////////////////////////////

    /// Advance the cursor to the next multiple of `multiple` bits, if
    /// it is not at one already. The skipped bits keep their previous
    /// value. Does nothing on a stream that is not good or when
    /// `multiple` is zero.
    pub fn align(&mut self, multiple: u32) -> &mut Self {
        debug_assert!(multiple > 0);
        if self.good() && multiple > 0 {
            let m = u64::from(multiple);
            let target = (self.tell() + m - 1) / m * m;
            if self.buf.seek_put_pos(target).is_none() {
                self.state.set_fail();
            }
        }
        self
    }

    /// Whether the cursor is at a multiple of `multiple` bits.
    pub fn aligned(&self, multiple: u32) -> bool {
        debug_assert!(multiple > 0);
        multiple == 0 || self.tell() % u64::from(multiple) == 0
    }

    /// The cursor position, in bits.
    #[inline]
    pub fn tell(&self) -> u64 {
        self.buf.put_pos()
    }

    /// Move the cursor to the absolute bit `position`. Sets
    /// [`Flags::FAIL`] when the position is out of bounds.
    pub fn seek_to(&mut self, position: u64) -> &mut Self {
        if self.buf.seek_put_pos(position).is_none() {
            self.state.set_fail();
        }
        self
    }

    /// Move the cursor to the signed bit offset relative to `whence`.
    /// Sets [`Flags::FAIL`] when the target is out of bounds.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> &mut Self {
        if self.buf.seek_put(offset, whence).is_none() {
            self.state.set_fail();
        }
        self
    }

    /// Writes are visible in the buffer as soon as they are made;
    /// flushing is a no-op kept for compositional symmetry.
    pub fn flush(&mut self) -> &mut Self {
        self
    }

    /// Synchronize with the destination of bits. There is none, so this
    /// always reports failure.
    pub fn sync(&mut self) -> Option<()> {
        self.buf.sync()
    }

    // Repeat count ///////////////////////////////////////////////////////

    /// Store a repeat count, consumed by the next container insertion.
    pub fn repeat(&mut self, count: usize) -> &mut Self {
        self.repeat = count;
        self
    }

    /// Take the pending repeat count, resetting it to zero.
    pub fn take_repeat(&mut self) -> usize {
        core::mem::take(&mut self.repeat)
    }

    // Field protocol /////////////////////////////////////////////////////

    /// Insert `value` into the stream.
    pub fn field<T: Insert + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.insert_into(self);
        self
    }

    /// Apply a manipulator, such as [`SetRepeat`](crate::manip::SetRepeat)
    /// or [`AlignTo`](crate::manip::AlignTo), in the middle of a field
    /// chain.
    pub fn with<M: OutputManip>(&mut self, manip: M) -> &mut Self {
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

impl<B: AsRef<[u8]> + AsMut<[u8]>> core::ops::Not for &OutputBitStream<B> {
    type Output = bool;

    /// `!stream` is true when the stream has failed, mirroring the
    /// boolean contract of [`ok`](OutputBitStream::ok).
    fn not(self) -> bool {
        self.fail()
    }
}
