// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, structs::{Ipv4Input, Notation}, NotationError, MAX_INPUT_LEN};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

const HEX_LEN: usize = 10;
const BIN_LEN: usize = 34;
/// dotted groups longer than this can only be binary
const MAX_DEC_GROUP: usize = 3;

lazy_static! {
    static ref BIN_PREFIXED: Regex = Regex::new(RE_BIN_PREFIXED).unwrap();
}

/**
Decide which notation a raw input is written in.

Rules, first match wins:
1. integer: [Notation::CidrInt]
2. octet list: [Notation::OctetTuple]
3. `0x` prefix and exactly 10 characters: [Notation::Hex]
4. `0b` prefix, exactly 34 characters, only `0`/`1` after the prefix:
   [Notation::PrefixedBinary]
5. contains a dot: [Notation::DottedBinary] if any group is longer than
   3 characters, otherwise [Notation::DottedDecimal]

NOTE: rule 5 is a length heuristic. A binary address whose groups are all
3 characters or shorter (`"1.10.0.1"`) is read as decimal.

The hex rule does not look at the digits; bad digits are a parse failure.
*/
pub fn detect(input: &Ipv4Input) -> Result<Notation, NotationError> {
    let s: &str = match input {
        Ipv4Input::Int(_) => return Ok(Notation::CidrInt),
        Ipv4Input::Octets(_) => return Ok(Notation::OctetTuple),
        Ipv4Input::Text(s) => s,
    };

    if s.len() > MAX_INPUT_LEN {
        return Err(NotationError::UnrecognizedNotation(s.into()));
    }

    let tag: Notation = if s.starts_with(HEX_PREFIX) && s.len() == HEX_LEN {
        Notation::Hex
    } else if s.starts_with(BIN_PREFIX) && s.len() == BIN_LEN && BIN_PREFIXED.is_match(s) {
        Notation::PrefixedBinary
    } else if s.contains(DOT) {
        match s.split(DOT).any(|group| group.len() > MAX_DEC_GROUP) {
            true => Notation::DottedBinary,
            false => Notation::DottedDecimal,
        }
    } else {
        return Err(NotationError::UnrecognizedNotation(s.into()));
    };

    debug!(input = s, notation = %tag, "detected notation");
    Ok(tag)
}

/* -------------------------------------------------------------------------- */
