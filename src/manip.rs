/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Stream manipulators.

Manipulators are zero-cost values carrying a parameter; applied to a
stream through [`with`](crate::impls::InputBitStream::with), they call
back into the stream to adjust its state — the repeat count, or the
cursor — without extracting or inserting anything themselves. They let
structural adjustments sit inside a field chain:

```
use wirestream::prelude::*;

let data: &[u8] = &[0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0];
let mut words: Vec<u16> = Vec::new();

let mut bin = InputBitStream::new(data);
bin.with(SetRepeat(4)).field(&mut words);
assert!(bin.ok());
assert_eq!(words, [0x1234, 0x5678, 0x9abc, 0xdef0]);
```

*/

use crate::impls::{InputBitStream, OutputBitStream};

/// A manipulator that can be applied to an input stream.
pub trait InputManip {
    /// Apply the manipulator's effect to `bin`.
    fn apply_to<B: AsRef<[u8]>>(self, bin: &mut InputBitStream<B>);
}

/// A manipulator that can be applied to an output stream.
pub trait OutputManip {
    /// Apply the manipulator's effect to `bout`.
    fn apply_to<B: AsRef<[u8]> + AsMut<[u8]>>(self, bout: &mut OutputBitStream<B>);
}

/// Store a repeat count for the next container operation, on either
/// stream direction. Equivalent to calling
/// [`repeat`](crate::impls::InputBitStream::repeat).
#[derive(Debug, Clone, Copy)]
pub struct SetRepeat(pub usize);

impl InputManip for SetRepeat {
    fn apply_to<B: AsRef<[u8]>>(self, bin: &mut InputBitStream<B>) {
        bin.repeat(self.0);
    }
}

impl OutputManip for SetRepeat {
    fn apply_to<B: AsRef<[u8]> + AsMut<[u8]>>(self, bout: &mut OutputBitStream<B>) {
        bout.repeat(self.0);
    }
}

/// Skip over bits of the input stream. Equivalent to calling
/// [`ignore`](crate::impls::InputBitStream::ignore); skipping has no
/// meaning on the write side, where untouched bits keep their value.
#[derive(Debug, Clone, Copy)]
pub struct Skip(pub u64);

impl InputManip for Skip {
    fn apply_to<B: AsRef<[u8]>>(self, bin: &mut InputBitStream<B>) {
        bin.ignore(self.0);
    }
}

/// Advance the cursor to the next multiple of the given number of bits,
/// on either stream direction. Equivalent to calling
/// [`align`](crate::impls::InputBitStream::align).
#[derive(Debug, Clone, Copy)]
pub struct AlignTo(pub u32);

impl InputManip for AlignTo {
    fn apply_to<B: AsRef<[u8]>>(self, bin: &mut InputBitStream<B>) {
        bin.align(self.0);
    }
}

impl OutputManip for AlignTo {
    fn apply_to<B: AsRef<[u8]> + AsMut<[u8]>>(self, bout: &mut OutputBitStream<B>) {
        bout.align(self.0);
    }
}
