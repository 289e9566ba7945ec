// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    convert::canonical,
    detect::detect,
    radix::render,
    structs::{Context, Ipv4Input, Notation, Octets},
    IPV4_BITS, OCTETS,
};
use tracing::trace;

/// Four values, each in `0..=255`, or nothing.
pub(crate) fn checked_octets(values: &[i64]) -> Option<Octets> {
    if values.len() != OCTETS {
        return None;
    }
    let mut out: [u8; OCTETS] = [0; OCTETS];
    for (slot, &v) in out.iter_mut().zip(values) {
        *slot = u8::try_from(v).ok()?;
    }
    Some(Octets(out))
}

/// Prefix lengths accepted as masks. `0` is rejected.
#[inline]
pub(crate) fn is_valid_prefix(prefix: i64) -> bool {
    (1..=IPV4_BITS as i64).contains(&prefix)
}

/**
Bit contiguity check on a 32-character bit string (separators allowed):
scanning from the most significant bit, once a `0` is seen every following
bit must be `0` as well. A leading `0` fails immediately.
*/
pub fn is_contiguous(bits: &str) -> bool {
    let mut bits = bits.chars().filter(|&c| c != '.');
    match bits.next() {
        Some('1') => {}
        _ => return false,
    }

    let mut seen_zero: bool = false;
    for c in bits {
        match (c, seen_zero) {
            ('1', false) => {}
            ('0', _) => seen_zero = true,
            _ => return false,
        }
    }
    true
}

/// Bit-string form used by the contiguity check.
pub(crate) fn mask_bits(octets: &Octets) -> String {
    render(octets, 2, 8, "", "")
}

/**
Whether the input is a well-formed IPv4 address in any notation except a
prefix length. Never fails.
*/
pub fn valid_address(input: impl Into<Ipv4Input>) -> bool {
    let input: Ipv4Input = input.into();
    let valid: bool = match detect(&input) {
        Ok(Notation::CidrInt) | Err(_) => false,
        Ok(_) => canonical(&input, Context::Address).is_ok(),
    };
    trace!(%input, valid, "valid_address");
    valid
}

/**
Whether the input is an acceptable subnet mask. Never fails.

- integer: a prefix length in `1..=32`
- anything else: a valid four-octet value whose bits are all ones followed
  by all zeros, with at least one leading one (`0.0.0.0` is rejected)
*/
pub fn valid_mask(input: impl Into<Ipv4Input>) -> bool {
    let input: Ipv4Input = input.into();
    let valid: bool = match &input {
        Ipv4Input::Int(n) => is_valid_prefix(*n),
        _ => match canonical(&input, Context::Mask) {
            Ok(octets) => is_contiguous(&mask_bits(&octets)),
            Err(_) => false,
        },
    };
    trace!(%input, valid, "valid_mask");
    valid
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_octets() {
        assert_eq!(checked_octets(&[192, 168, 0, 1]), Some(Octets::new(192, 168, 0, 1)));
        assert_eq!(checked_octets(&[0, 0, 0, 0]), Some(Octets::new(0, 0, 0, 0)));
        assert_eq!(checked_octets(&[256, 0, 0, 0]), None);
        assert_eq!(checked_octets(&[-1, 0, 0, 0]), None);
        assert_eq!(checked_octets(&[1, 2, 3]), None);
        assert_eq!(checked_octets(&[1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn test_is_valid_prefix() {
        assert!(!is_valid_prefix(0));
        assert!(is_valid_prefix(1));
        assert!(is_valid_prefix(32));
        assert!(!is_valid_prefix(33));
        assert!(!is_valid_prefix(-8));
    }

    #[rustfmt::skip]
    #[test]
    fn test_is_contiguous() {
        let tests: Vec<(&str, bool)> = vec![
            ("11111111.11111111.11111111.00000000", true),
            ("11111111111111111111111111111111",    true),
            ("10000000000000000000000000000000",    true),
            ("00000000000000000000000000000000",    false),
            ("01111111111111111111111111111111",    false),
            ("11111111.11111111.00000000.11111111", false),
            ("11111110.11111111.11111111.00000000", false),
            ("",                                    false),
        ];

        for (bits, expected) in tests {
            assert_eq!(is_contiguous(bits), expected, "Failed: '{bits}'");
        }
    }

    #[rustfmt::skip]
    #[test]
    fn test_valid_address() {
        let tests: Vec<(&str, bool)> = vec![
            ("192.168.0.1",                         true),
            ("0.0.0.0",                             true),
            ("255.255.255.255",                     true),
            ("192.168.0.1.1",                       false),
            ("192.168.0",                           false),
            ("192.168.0.256",                       false),
            ("192.168..1",                          false),
            ("192.168.0.x",                         false),
            ("0xC0A80001",                          true),
            ("0xC0A8000G",                          false),
            ("0b11000000101010000000000000000001",  true),
            ("11000000.10101000.00000000.00000001", true),
            ("11000000.10101000.00000000.00000002", false),
            ("nonsense",                            false),
        ];

        for (input, expected) in tests {
            assert_eq!(valid_address(input), expected, "Failed: '{input}'");
        }
    }

    #[test]
    fn test_valid_address_non_text() {
        assert!(valid_address((10, 0, 0, 1)));
        assert!(!valid_address((10, 0, 0, 256)));
        assert!(!valid_address(vec![10, 0, 0]));
        assert!(!valid_address(24));
    }

    #[rustfmt::skip]
    #[test]
    fn test_valid_mask() {
        let tests: Vec<(&str, bool)> = vec![
            ("255.255.255.0",                       true),
            ("255.255.255.255",                     true),
            ("128.0.0.0",                           true),
            ("0.0.0.0",                             false),
            ("255.0.255.0",                         false),
            ("255.255.255.256",                     false),
            ("0xFFFFFF00",                          true),
            ("0xFF00FF00",                          false),
            ("0b11111111111111111111000000000000",  true),
            ("0b11111111111111111111000000000001",  false),
            ("11111111.11111111.11110000.00000000", true),
            ("11111111.11111111.11110000.00010000", false),
        ];

        for (input, expected) in tests {
            assert_eq!(valid_mask(input), expected, "Failed: '{input}'");
        }
    }

    #[test]
    fn test_valid_mask_int() {
        assert!(!valid_mask(0));
        assert!(valid_mask(1));
        assert!(valid_mask(24));
        assert!(valid_mask(32));
        assert!(!valid_mask(33));
        assert!(!valid_mask(-1));
        assert!(valid_mask((255, 255, 252, 0)));
        assert!(!valid_mask((255, 255, 253, 0)));
    }
}
