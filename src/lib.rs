/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#[cfg(feature = "alloc")]
extern crate alloc;

pub mod impls;
pub mod manip;
pub mod state;
pub mod traits;
pub mod utils;

#[cfg(feature = "fuzz")]
pub mod fuzz;

/// Prelude module to import everything from this crate
pub mod prelude {
    pub use crate::impls::*;
    pub use crate::manip::*;
    pub use crate::state::*;
    pub use crate::traits::*;
    pub use crate::utils::*;
}
