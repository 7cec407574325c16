/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Debug helpers.

[`DbgInput`] and [`DbgOutput`] wrap a stream and report on standard
error every operation performed on it, together with the resulting
value, position, and state, without changing any behavior.

*/

#[cfg(feature = "std")]
mod dbg;
#[cfg(feature = "std")]
pub use dbg::*;
