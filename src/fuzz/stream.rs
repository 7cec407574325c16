/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct ReadCase {
    init: Vec<u8>,
    commands: Vec<ReadCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum ReadCommand {
    Read(u8),
    Get,
    Peek,
    Ignore(u8),
    Align(u8),
    SeekTo(u16),
    Unget,
}

/// Expand bytes into MSB-first bits.
fn to_bits(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|&b| (0..8).rev().map(move |i| b >> i & 1 != 0))
        .collect()
}

fn assemble(bits: &[bool]) -> u64 {
    bits.iter().fold(0u64, |acc, &b| acc << 1 | b as u64)
}

/// Replay a command sequence on an [`InputBitStream`] and on a bit
/// vector, checking position, flags, and every extracted value.
pub fn read_harness(data: ReadCase) {
    let bits = to_bits(&data.init);
    let mut bin = InputBitStream::new(&data.init[..]);

    let mut pos = 0usize;
    let mut eof = false;
    let mut fail = false;

    for command in data.commands {
        match command {
            ReadCommand::Read(width) => {
                let width = u32::from(width) % 65;
                let value = bin.read(width);
                let width = width as usize;
                if width == 0 {
                    assert_eq!(value, 0);
                    assert_eq!(bin.gcount(), 0);
                } else if pos + width <= bits.len() {
                    assert_eq!(value, assemble(&bits[pos..pos + width]));
                    assert_eq!(bin.gcount(), width as u64);
                    pos += width;
                    if pos == bits.len() {
                        eof = true;
                    }
                } else {
                    assert_eq!(value, 0);
                    assert_eq!(bin.gcount(), 0);
                    eof = true;
                    fail = true;
                }
            }
            ReadCommand::Get => {
                let value = bin.get();
                if pos < bits.len() {
                    assert_eq!(value, bits[pos] as u64);
                    pos += 1;
                    if pos == bits.len() {
                        eof = true;
                    }
                } else {
                    eof = true;
                    fail = true;
                }
            }
            ReadCommand::Peek => {
                let value = bin.peek();
                if pos < bits.len() {
                    assert_eq!(value, bits[pos] as u64);
                } else {
                    eof = true;
                }
            }
            ReadCommand::Ignore(bits_to_skip) => {
                let n = usize::from(bits_to_skip);
                bin.ignore(n as u64);
                if pos + n <= bits.len() {
                    pos += n;
                } else {
                    eof = true;
                }
            }
            ReadCommand::Align(multiple) => {
                let multiple = usize::from(multiple) % 16 + 1;
                bin.align(multiple as u32);
                if !eof && !fail {
                    let target = (pos + multiple - 1) / multiple * multiple;
                    if target <= bits.len() {
                        pos = target;
                    } else {
                        fail = true;
                    }
                }
            }
            ReadCommand::SeekTo(position) => {
                let position = usize::from(position);
                bin.seek_to(position as u64);
                if position <= bits.len() {
                    pos = position;
                } else {
                    fail = true;
                }
            }
            ReadCommand::Unget => {
                bin.unget();
                if pos == 0 {
                    fail = true;
                } else {
                    pos -= 1;
                }
            }
        }
        assert_eq!(bin.tell(), pos as u64);
        assert_eq!(bin.eof(), eof);
        assert_eq!(bin.fail(), fail);
        assert!(!bin.bad());
    }
}

#[derive(Arbitrary, Debug)]
pub struct WriteCase {
    len: u8,
    commands: Vec<WriteCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum WriteCommand {
    Write(u64, u8),
    Put(bool),
    Align(u8),
    SeekTo(u16),
}

/// Replay a command sequence on an [`OutputBitStream`] and on a bit
/// vector, then compare the final buffers bit for bit.
pub fn write_harness(data: WriteCase) {
    let len = usize::from(data.len);
    let mut bout = OutputBitStream::new(vec![0u8; len]);
    let mut bits = vec![false; len * 8];

    let mut pos = 0usize;
    let mut eof = false;
    let mut fail = false;

    for command in data.commands {
        match command {
            WriteCommand::Write(value, width) => {
                let width = u32::from(width) % 65;
                bout.write(value, width);
                let width = width as usize;
                if width == 0 {
                    // nothing moves
                } else if pos + width <= bits.len() {
                    for i in 0..width {
                        bits[pos + i] = value >> (width - 1 - i) & 1 != 0;
                    }
                    pos += width;
                    if pos == bits.len() {
                        eof = true;
                    }
                } else {
                    eof = true;
                    fail = true;
                }
            }
            WriteCommand::Put(bit) => {
                bout.put(bit);
                if pos < bits.len() {
                    bits[pos] = bit;
                    pos += 1;
                    if pos == bits.len() {
                        eof = true;
                    }
                } else {
                    eof = true;
                    fail = true;
                }
            }
            WriteCommand::Align(multiple) => {
                let multiple = usize::from(multiple) % 16 + 1;
                bout.align(multiple as u32);
                if !eof && !fail {
                    let target = (pos + multiple - 1) / multiple * multiple;
                    if target <= bits.len() {
                        pos = target;
                    } else {
                        fail = true;
                    }
                }
            }
            WriteCommand::SeekTo(position) => {
                let position = usize::from(position);
                bout.seek_to(position as u64);
                if position <= bits.len() {
                    pos = position;
                } else {
                    fail = true;
                }
            }
        }
        assert_eq!(bout.tell(), pos as u64);
        assert_eq!(bout.eof(), eof);
        assert_eq!(bout.fail(), fail);
    }

    let written: Vec<u8> = bits
        .chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| acc << 1 | b as u8))
        .collect();
    assert_eq!(bout.buf().data(), &written[..]);
}
