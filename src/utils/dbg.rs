/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::impls::{InputBitStream, OutputBitStream, Whence};
use crate::traits::{BitField, Extract, Insert};

/// A wrapper over an [`InputBitStream`] that reports every operation
/// performed, and its outcome, on standard error.
pub struct DbgInput<B> {
    inner: InputBitStream<B>,
}

impl<B: AsRef<[u8]>> DbgInput<B> {
    pub fn new(inner: InputBitStream<B>) -> Self {
        Self { inner }
    }

    /// The wrapped stream.
    pub fn inner(&self) -> &InputBitStream<B> {
        &self.inner
    }

    /// Consume the wrapper and return the wrapped stream.
    pub fn into_inner(self) -> InputBitStream<B> {
        self.inner
    }

    pub fn read(&mut self, bits: u32) -> BitField {
        let value = self.inner.read(bits);
        eprintln!(
            "read({}) = {:#x} (gcount = {}, pos = {})",
            bits,
            value,
            self.inner.gcount(),
            self.inner.tell()
        );
        value
    }

    pub fn get(&mut self) -> BitField {
        let value = self.inner.get();
        eprintln!("get() = {} (pos = {})", value, self.inner.tell());
        value
    }

    pub fn peek(&mut self) -> BitField {
        let value = self.inner.peek();
        eprintln!("peek() = {} (pos = {})", value, self.inner.tell());
        value
    }

    pub fn ignore(&mut self, bits: u64) -> &mut Self {
        self.inner.ignore(bits);
        eprintln!("ignore({}) (pos = {})", bits, self.inner.tell());
        self
    }

    pub fn align(&mut self, multiple: u32) -> &mut Self {
        self.inner.align(multiple);
        eprintln!("align({}) (pos = {})", multiple, self.inner.tell());
        self
    }

    pub fn seek(&mut self, offset: i64, whence: Whence) -> &mut Self {
        self.inner.seek(offset, whence);
        eprintln!("seek({}, {:?}) (pos = {})", offset, whence, self.inner.tell());
        self
    }

    pub fn unget(&mut self) -> &mut Self {
        self.inner.unget();
        eprintln!("unget() (pos = {})", self.inner.tell());
        self
    }

    pub fn putback(&mut self, bit: bool) -> &mut Self {
        self.inner.putback(bit);
        eprintln!("putback({}) (pos = {})", bit as u8, self.inner.tell());
        self
    }

    pub fn repeat(&mut self, count: usize) -> &mut Self {
        self.inner.repeat(count);
        eprintln!("repeat({})", count);
        self
    }

    pub fn field<T: Extract + ?Sized>(&mut self, value: &mut T) -> &mut Self {
        self.inner.field(value);
        eprintln!(
            "field = {:#x} (gcount = {}, pos = {})",
            self.inner.gvalue(),
            self.inner.gcount(),
            self.inner.tell()
        );
        self
    }

    pub fn expect<T: Extract + ?Sized>(&mut self, want: &T) -> &mut Self {
        self.inner.expect(want);
        eprintln!(
            "expect = {:#x} (ok = {}, pos = {})",
            self.inner.gvalue(),
            self.inner.ok(),
            self.inner.tell()
        );
        self
    }

    pub fn ok(&self) -> bool {
        self.inner.ok()
    }
}

/// A wrapper over an [`OutputBitStream`] that reports every operation
/// performed on standard error.
pub struct DbgOutput<B> {
    inner: OutputBitStream<B>,
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> DbgOutput<B> {
    pub fn new(inner: OutputBitStream<B>) -> Self {
        Self { inner }
    }

    /// The wrapped stream.
    pub fn inner(&self) -> &OutputBitStream<B> {
        &self.inner
    }

    /// Consume the wrapper and return the wrapped stream.
    pub fn into_inner(self) -> OutputBitStream<B> {
        self.inner
    }

    pub fn write(&mut self, value: BitField, bits: u32) -> &mut Self {
        self.inner.write(value, bits);
        eprintln!(
            "write({:#x}, {}) (ok = {}, pos = {})",
            value,
            bits,
            self.inner.ok(),
            self.inner.tell()
        );
        self
    }

    pub fn put(&mut self, bit: bool) -> &mut Self {
        self.inner.put(bit);
        eprintln!("put({}) (pos = {})", bit as u8, self.inner.tell());
        self
    }

    pub fn align(&mut self, multiple: u32) -> &mut Self {
        self.inner.align(multiple);
        eprintln!("align({}) (pos = {})", multiple, self.inner.tell());
        self
    }

    pub fn seek(&mut self, offset: i64, whence: Whence) -> &mut Self {
        self.inner.seek(offset, whence);
        eprintln!("seek({}, {:?}) (pos = {})", offset, whence, self.inner.tell());
        self
    }

    pub fn repeat(&mut self, count: usize) -> &mut Self {
        self.inner.repeat(count);
        eprintln!("repeat({})", count);
        self
    }

    pub fn field<T: Insert + ?Sized>(&mut self, value: &T) -> &mut Self {
        self.inner.field(value);
        eprintln!(
            "field (ok = {}, pos = {})",
            self.inner.ok(),
            self.inner.tell()
        );
        self
    }

    pub fn ok(&self) -> bool {
        self.inner.ok()
    }
}
