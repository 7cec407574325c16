/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Fuzz harnesses.

Each harness takes an [`arbitrary`]-generated operation sequence and
replays it both on a stream and on a naive bit-vector model, asserting
after every operation that position, flags, and extracted or deposited
bits agree.

*/

pub mod stream;
