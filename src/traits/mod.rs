/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits and element types for the field-level stream protocol.

A stream does not know anything about the shape of the value a caller
wants to move; it exposes raw bit reads and writes. The [`Extract`] and
[`Insert`] traits close the gap: an element type that implements them
knows its own bit width and how to pack or unpack its value through a
raw [`BitField`], and containers of such elements know their iteration
order. The stream façades in [`impls`](crate::impls) take any such
element through a single generic entry point
([`field`](crate::impls::InputBitStream::field),
[`expect`](crate::impls::InputBitStream::expect)), so a packed header
reads as one chain of field operations.

[`Bits`] is the element type for widths that no primitive integer has,
such as 2-, 4-, or 7-bit protocol fields.

*/

mod field;
pub use field::*;
