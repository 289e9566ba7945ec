// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    radix::{cidr_to_octets, from_radix},
    strings::*,
    structs::{Context, Ipv4Input, Notation, Octets},
    validate::{checked_octets, is_valid_prefix},
    NotationError, OCTETS,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    static ref HEX: Regex = Regex::new(RE_HEX).unwrap();
    static ref DEC_GROUP: Regex = Regex::new(RE_DEC_GROUP).unwrap();
    static ref BIN_GROUP: Regex = Regex::new(RE_BIN_GROUP).unwrap();
}

/**
Parse raw input written in notation `tag` into canonical octets.

- dotted forms: exactly 4 dot-separated groups, base 10 or base 2 per `tag`
- hex: 4 two-character pairs after `0x`, base 16
- prefixed binary: 4 eight-character groups after `0b`, base 2
- octet list: passed through, must hold exactly 4 values
- prefix length: expanded to mask octets, must be in `1..=32`

Any failure is reported as the error `ctx` selects, except input that does
not fit `tag` at all ([NotationError::UnrecognizedNotation]).
*/
pub fn parse(input: &Ipv4Input, tag: Notation, ctx: Context) -> Result<Octets, NotationError> {
    let values: Vec<i64> = match (input, tag) {
        (Ipv4Input::Int(prefix), Notation::CidrInt) => {
            if !is_valid_prefix(*prefix) {
                return Err(ctx.error(prefix));
            }
            return cidr_to_octets(*prefix as u8).ok_or_else(|| ctx.error(prefix));
        }
        (Ipv4Input::Octets(values), Notation::OctetTuple) => values.clone(),
        (Ipv4Input::Text(s), Notation::DottedDecimal) => {
            split_dotted(s, 10, &DEC_GROUP).ok_or_else(|| ctx.error(s))?
        }
        (Ipv4Input::Text(s), Notation::DottedBinary) => {
            split_dotted(s, 2, &BIN_GROUP).ok_or_else(|| ctx.error(s))?
        }
        (Ipv4Input::Text(s), Notation::Hex) => {
            if !HEX.is_match(s) {
                return Err(ctx.error(s));
            }
            split_fixed(&s[HEX_PREFIX.len()..], 2, 16).ok_or_else(|| ctx.error(s))?
        }
        (Ipv4Input::Text(s), Notation::PrefixedBinary) => s
            .strip_prefix(BIN_PREFIX)
            .and_then(|bits| split_fixed(bits, 8, 2))
            .ok_or_else(|| ctx.error(s))?,
        _ => return Err(NotationError::UnrecognizedNotation(input.to_string())),
    };

    checked_octets(&values).ok_or_else(|| ctx.error(input))
}

/// Split on dots into exactly 4 groups, each matching `shape`, read in `base`.
fn split_dotted(s: &str, base: u32, shape: &Regex) -> Option<Vec<i64>> {
    let groups: Vec<&str> = s.split(DOT).collect();
    if groups.len() != OCTETS {
        trace!(input = s, groups = groups.len(), "wrong group count");
        return None;
    }

    groups
        .into_iter()
        .map(|g| match shape.is_match(g) {
            true => from_radix(g, base),
            false => {
                trace!(input = s, group = g, base, "malformed group");
                None
            }
        })
        .collect()
}

/// Consume exactly 4 groups of `width` characters, read in `base`.
fn split_fixed(s: &str, width: usize, base: u32) -> Option<Vec<i64>> {
    if !s.is_ascii() || s.len() != width * OCTETS {
        return None;
    }
    (0..OCTETS)
        .map(|i| from_radix(&s[i * width..(i + 1) * width], base))
        .collect()
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: Octets = Octets::new(192, 168, 0, 1);

    fn text(s: &str, tag: Notation) -> Result<Octets, NotationError> {
        parse(&Ipv4Input::from(s), tag, Context::Address)
    }

    #[test]
    fn test_parse_each_notation() {
        assert_eq!(text("192.168.0.1", Notation::DottedDecimal), Ok(ADDR));
        assert_eq!(text("0xC0A80001", Notation::Hex), Ok(ADDR));
        assert_eq!(text("0xc0a80001", Notation::Hex), Ok(ADDR));
        assert_eq!(text("0b11000000101010000000000000000001", Notation::PrefixedBinary), Ok(ADDR));
        assert_eq!(text("11000000.10101000.00000000.00000001", Notation::DottedBinary), Ok(ADDR));
        assert_eq!(text("11000000.10101000.0.1", Notation::DottedBinary), Ok(ADDR));

        let tuple = Ipv4Input::from((192, 168, 0, 1));
        assert_eq!(parse(&tuple, Notation::OctetTuple, Context::Address), Ok(ADDR));
    }

    #[test]
    fn test_parse_cidr() {
        let mask = parse(&Ipv4Input::from(24), Notation::CidrInt, Context::Mask);
        assert_eq!(mask, Ok(Octets::new(255, 255, 255, 0)));

        let bad = parse(&Ipv4Input::from(0), Notation::CidrInt, Context::Mask);
        assert_eq!(bad, Err(NotationError::InvalidSubnetMask("0".into())));

        let bad = parse(&Ipv4Input::from(33), Notation::CidrInt, Context::Mask);
        assert_eq!(bad, Err(NotationError::InvalidSubnetMask("33".into())));
    }

    #[rustfmt::skip]
    #[test]
    fn test_parse_invalid() {
        let tests: Vec<(&str, Notation)> = vec![
            ("192.168.0.1.1",                       Notation::DottedDecimal),
            ("192.168.0",                           Notation::DottedDecimal),
            ("192.168.0.256",                       Notation::DottedDecimal),
            ("192.168.-1.0",                        Notation::DottedDecimal),
            ("192.168.+1.0",                        Notation::DottedDecimal),
            ("192.168. 1.0",                        Notation::DottedDecimal),
            ("192.168..0",                          Notation::DottedDecimal),
            ("111111111.0.0.0",                     Notation::DottedBinary),
            ("11000000.10101000.00000000.2",        Notation::DottedBinary),
            ("0xC0A8000G",                          Notation::Hex),
            ("0x+0A80001",                          Notation::Hex),
        ];

        for (input, tag) in tests {
            assert_eq!(
                text(input, tag),
                Err(NotationError::InvalidAddress(input.into())),
                "Failed: '{input}'"
            );
        }
    }

    #[test]
    fn test_parse_mask_context() {
        let res = parse(&Ipv4Input::from("255.255.256.0"), Notation::DottedDecimal, Context::Mask);
        assert_eq!(res, Err(NotationError::InvalidSubnetMask("255.255.256.0".into())));
    }

    #[test]
    fn test_parse_tuple_invalid() {
        let short = Ipv4Input::from(vec![1, 2, 3]);
        assert_eq!(
            parse(&short, Notation::OctetTuple, Context::Address),
            Err(NotationError::InvalidAddress("(1, 2, 3)".into()))
        );

        let big = Ipv4Input::from((1, 2, 3, 300));
        assert!(parse(&big, Notation::OctetTuple, Context::Address).is_err());
    }

    #[test]
    fn test_parse_tag_mismatch() {
        let res = parse(&Ipv4Input::from(24), Notation::Hex, Context::Address);
        assert_eq!(res, Err(NotationError::UnrecognizedNotation("24".into())));
    }
}
