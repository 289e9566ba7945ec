// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IPv4 address and subnet mask notations: detection, parsing, validation,
//! conversion between notations and reserved block classification.

mod blocks;
mod convert;
mod detect;
mod parse;
mod radix;
mod strings;
mod structs;
mod summary;
mod validate;

use std::{error, fmt};
use strings::*;

pub use blocks::{classify, BlockLabel};
pub use convert::*;
pub use detect::detect;
pub use parse::parse;
pub use radix::{bits_to_cidr, cidr_to_octets, render};
pub use structs::{Context, Ipv4Input, Notation, Octets};
pub use summary::AddressInfo;
pub use validate::{is_contiguous, valid_address, valid_mask};

pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const OCTETS: usize = 4;
/// longest accepted textual input: four 8-bit groups and three dots
pub(crate) const MAX_INPUT_LEN: usize = 35;

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NotationError {
    /// input matches none of the known notations
    UnrecognizedNotation(String),
    /// wrong group count, malformed group or octet outside `0..=255`
    InvalidAddress(String),
    /// prefix outside `1..=32` or bits not contiguous ones followed by zeros
    InvalidSubnetMask(String),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::UnrecognizedNotation(raw) => {
                write!(f, "{ERR_UNRECOGNIZED}: '{raw}'")
            }
            NotationError::InvalidAddress(raw) => {
                write!(f, "{ERR_INVALID_ADDR}: '{raw}'")
            }
            NotationError::InvalidSubnetMask(raw) => {
                write!(f, "{ERR_INVALID_MASK}: '{raw}'")
            }
        }
    }
}

impl error::Error for NotationError {}

/* -------------------------------------------------------------------------- */
