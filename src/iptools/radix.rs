// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, structs::Octets, IPV4_BITS, OCTETS};

/// Value of a partially filled mask byte, indexed by its number of 1-bits.
const PARTIAL_BYTE: [u8; 9] = [0, 128, 192, 224, 240, 248, 252, 254, 255];

/// Digits of `value` in `base` (2..=36), upper-case, no padding.
pub(crate) fn to_radix(value: u8, base: u32) -> String {
    debug_assert!((2..=36).contains(&base), "base must be in 2..=36");
    if value == 0 {
        return "0".to_string();
    }

    let mut n: u32 = value as u32;
    let mut digits: Vec<char> = Vec::with_capacity(8);
    while n > 0 {
        if let Some(c) = char::from_digit(n % base, base) {
            digits.push(c.to_ascii_uppercase());
        }
        n /= base;
    }
    digits.iter().rev().collect()
}

/**
Render four octets in `base`, each left-padded with `'0'` to `group_width`
digits, joined with `separator` and prefixed with `prefix`.

Groups already `group_width` digits or longer are left as they are.

```ignore
render(&Octets::new(192, 168, 0, 1), 16, 2, "", "0x") == "0xC0A80001"
render(&Octets::new(255, 255, 0, 0), 2, 8, ".", "")
    == "11111111.11111111.00000000.00000000"
```
*/
pub fn render(octets: &Octets, base: u32, group_width: usize, separator: &str, prefix: &str) -> String {
    let groups: Vec<String> = octets
        .as_array()
        .iter()
        .map(|&o| format!("{:0>group_width$}", to_radix(o, base)))
        .collect();
    format!("{prefix}{}", groups.join(separator))
}

/// Parse one group of digits in `base`. Any non-digit, including a sign, fails.
pub(crate) fn from_radix(group: &str, base: u32) -> Option<i64> {
    if group.is_empty() || !group.chars().all(|c| c.is_digit(base)) {
        return None;
    }
    i64::from_str_radix(group, base).ok()
}

/**
Expand a prefix length into mask octets: full bytes before the partial byte
are 255, bytes after it are 0. Prefixes above 32 give `None`.

`0` gives `0.0.0.0`. Whether such a mask is *acceptable* is up to the
validator.
*/
pub fn cidr_to_octets(prefix: u8) -> Option<Octets> {
    if prefix > IPV4_BITS {
        return None;
    }
    let prefix: usize = prefix as usize;
    let full: usize = prefix / 8;
    let rest: usize = prefix % 8;

    let mut out: [u8; OCTETS] = [0; OCTETS];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = match i {
            i if i < full => 255,
            i if i == full => PARTIAL_BYTE[rest],
            _ => 0,
        };
    }
    Some(Octets(out))
}

/**
Prefix length of a mask written as bits (dotted or not, with or without the
`0b` prefix): trailing zeros are dropped and the remaining length is counted.

`None` for anything but `0`/`1` digits or more than 32 bits. Only meaningful
for bit strings that passed the contiguity check.
*/
pub fn bits_to_cidr(bits: &str) -> Option<u8> {
    let bits: &str = bits.strip_prefix(BIN_PREFIX).unwrap_or(bits);
    let digits: String = bits.replace(DOT, "");
    if digits.len() > IPV4_BITS as usize || !digits.chars().all(|c| matches!(c, '0' | '1')) {
        return None;
    }
    u8::try_from(digits.trim_end_matches('0').len()).ok()
}

/* -------------------------------------------------------------------------- */
