// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, NotationError, OCTETS};
use serde::{Deserialize, Serialize};
use std::{fmt, net::Ipv4Addr};

/// Canonical form of an IPv4 address or mask: exactly four octets.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Octets(pub [u8; OCTETS]);

impl Octets {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    #[inline]
    pub fn as_array(&self) -> &[u8; OCTETS] {
        &self.0
    }

    pub fn to_tuple(self) -> (u8, u8, u8, u8) {
        let [a, b, c, d] = self.0;
        (a, b, c, d)
    }
}

impl fmt::Display for Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}{DOT}{b}{DOT}{c}{DOT}{d}")
    }
}

impl From<[u8; OCTETS]> for Octets {
    fn from(value: [u8; OCTETS]) -> Self {
        Self(value)
    }
}

impl From<Ipv4Addr> for Octets {
    fn from(value: Ipv4Addr) -> Self {
        Self(value.octets())
    }
}

impl From<Octets> for Ipv4Addr {
    fn from(value: Octets) -> Self {
        Ipv4Addr::from(value.0)
    }
}

/* ---------------------------------- */

/// The six supported notations.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Notation {
    /// `192.168.0.1`
    DottedDecimal,
    /// prefix length, `24`
    CidrInt,
    /// `0xC0A80001`
    Hex,
    /// `0b11000000101010000000000000000001`
    PrefixedBinary,
    /// `11000000.10101000.00000000.00000001`
    DottedBinary,
    /// `(192, 168, 0, 1)`
    OctetTuple,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            Notation::DottedDecimal => "dotted-decimal",
            Notation::CidrInt => "cidr",
            Notation::Hex => "hex",
            Notation::PrefixedBinary => "binary",
            Notation::DottedBinary => "dotted-bits",
            Notation::OctetTuple => "octets",
        };
        f.write_str(name)
    }
}

/* ---------------------------------- */

/// Whether a value is being read as an address or as a subnet mask.
/// Decides which error a parse failure is reported as.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Context {
    Address,
    Mask,
}

impl Context {
    pub(crate) fn error(&self, raw: impl fmt::Display) -> NotationError {
        match self {
            Context::Address => NotationError::InvalidAddress(raw.to_string()),
            Context::Mask => NotationError::InvalidSubnetMask(raw.to_string()),
        }
    }
}

/* ---------------------------------- */

/**
Raw, not yet validated input in any supported notation.

Integers are always prefix lengths. Octet lists use wide signed integers so
that out-of-range values and wrong lengths survive until validation.
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Ipv4Input {
    Text(String),
    Int(i64),
    Octets(Vec<i64>),
}

impl fmt::Display for Ipv4Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ipv4Input::Text(s) => f.write_str(s),
            Ipv4Input::Int(n) => write!(f, "{n}"),
            Ipv4Input::Octets(v) => {
                let parts: Vec<String> = v.iter().map(|n| n.to_string()).collect();
                write!(f, "({})", parts.join(", "))
            }
        }
    }
}

impl From<&str> for Ipv4Input {
    fn from(value: &str) -> Self {
        Ipv4Input::Text(value.to_string())
    }
}

impl From<String> for Ipv4Input {
    fn from(value: String) -> Self {
        Ipv4Input::Text(value)
    }
}

impl From<&String> for Ipv4Input {
    fn from(value: &String) -> Self {
        Ipv4Input::Text(value.clone())
    }
}

impl From<i64> for Ipv4Input {
    fn from(value: i64) -> Self {
        Ipv4Input::Int(value)
    }
}

impl From<(i64, i64, i64, i64)> for Ipv4Input {
    fn from((a, b, c, d): (i64, i64, i64, i64)) -> Self {
        Ipv4Input::Octets(vec![a, b, c, d])
    }
}

impl From<Vec<i64>> for Ipv4Input {
    fn from(value: Vec<i64>) -> Self {
        Ipv4Input::Octets(value)
    }
}

impl From<[u8; OCTETS]> for Ipv4Input {
    fn from(value: [u8; OCTETS]) -> Self {
        Ipv4Input::Octets(value.iter().map(|&o| o as i64).collect())
    }
}

impl From<Octets> for Ipv4Input {
    fn from(value: Octets) -> Self {
        Ipv4Input::from(value.0)
    }
}

impl From<Ipv4Addr> for Ipv4Input {
    fn from(value: Ipv4Addr) -> Self {
        Ipv4Input::from(value.octets())
    }
}

impl From<&Ipv4Input> for Ipv4Input {
    fn from(value: &Ipv4Input) -> Self {
        value.clone()
    }
}

/* -------------------------------------------------------------------------- */
