/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

The bit buffer engine and the stream façades built on it.

[`BitBuf`] owns the hard part: it maps bit-indexed get/put requests
onto an MSB-first byte slice, for field widths from 1 to 64 bits at any
intra-byte offset, tracks the bounds of both cursors, and reports
end-of-range conditions without panicking. It holds no error state of
its own — every operation answers with a sentinel and the caller
decides what that means.

[`InputBitStream`] and [`OutputBitStream`] wrap a `BitBuf` and add the
parts a protocol parser actually wants: the sticky
[`Flags`](crate::state::Flags) model, last-read accounting, alignment,
peek/unget/putback, the repeat count, and the generic field protocol of
[`Extract`](crate::traits::Extract) and
[`Insert`](crate::traits::Insert) elements.

The byte region behind a buffer is anything implementing `AsRef<[u8]>`
(plus `AsMut<[u8]>` for writing) — a borrowed slice, an array, a
`Vec<u8>` — and is owned by the caller for the whole lifetime of the
stream; the crate never allocates or frees it.

*/

mod bit_buf;
pub use bit_buf::{BitBuf, Mode, Whence};

mod istream;
pub use istream::InputBitStream;

mod ostream;
pub use ostream::OutputBitStream;
