/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Sticky error state shared by the stream façades.

Stream operations never propagate errors through return values; they
accumulate [`Flags`] on the stream instead. Once a flag is set it stays
set until [`StreamState::clear`] is called, so a caller can run a whole
sequence of extractions and check the stream once at the end.

*/

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// A set of stream error flags.
///
/// Flags combine with set union and are never cleared implicitly. The
/// empty set is the good state.
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    /// The empty flag set.
    pub const GOOD: Flags = Flags(0);
    /// The last operation reached the end of the accessible bit sequence.
    pub const EOF: Flags = Flags(1);
    /// The last operation could not complete as requested.
    pub const FAIL: Flags = Flags(1 << 1);
    /// The integrity of the stream was lost.
    pub const BAD: Flags = Flags(1 << 2);

    /// Whether every flag in `other` is also set in `self`.
    #[inline]
    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flag is set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOr for Flags {
    type Output = Flags;

    #[inline]
    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for Flags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

/// The sticky flag set of a stream, with the canonical query surface.
///
/// Both [`InputBitStream`](crate::impls::InputBitStream) and
/// [`OutputBitStream`](crate::impls::OutputBitStream) embed one of
/// these. The boolean contract is the classic one: a stream is usable,
/// in the eyes of its caller, exactly when [`ok`](StreamState::ok)
/// returns true, that is, when neither [`FAIL`](Flags::FAIL) nor
/// [`BAD`](Flags::BAD) is set.
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamState {
    flags: Flags,
}

impl StreamState {
    /// A fresh state with no flags set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current flag set.
    #[inline]
    pub fn state(&self) -> Flags {
        self.flags
    }

    /// Whether no flag is set.
    #[inline]
    pub fn good(&self) -> bool {
        self.flags.is_empty()
    }

    /// Whether the end of the accessible sequence was reached.
    #[inline]
    pub fn eof(&self) -> bool {
        self.flags.contains(Flags::EOF)
    }

    /// Whether an operation could not complete, or integrity was lost.
    #[inline]
    pub fn fail(&self) -> bool {
        self.flags.contains(Flags::FAIL) || self.bad()
    }

    /// Whether the integrity of the stream was lost.
    #[inline]
    pub fn bad(&self) -> bool {
        self.flags.contains(Flags::BAD)
    }

    /// The boolean value of the stream: `!self.fail()`.
    #[inline]
    pub fn ok(&self) -> bool {
        !self.fail()
    }

    /// Replace the flag set, by default with the empty one.
    #[inline]
    pub fn clear(&mut self, flags: Flags) {
        self.flags = flags;
    }

    /// Add flags to the current set. No flag is cleared.
    #[inline]
    pub fn set_state(&mut self, flags: Flags) {
        self.flags |= flags;
    }

    /// Set [`Flags::EOF`].
    #[inline]
    pub fn set_eof(&mut self) {
        self.flags |= Flags::EOF;
    }

    /// Set [`Flags::FAIL`].
    #[inline]
    pub fn set_fail(&mut self) {
        self.flags |= Flags::FAIL;
    }

    /// Set [`Flags::BAD`].
    #[inline]
    pub fn set_bad(&mut self) {
        self.flags |= Flags::BAD;
    }
}
