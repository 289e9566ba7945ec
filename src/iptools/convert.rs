// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    blocks::{classify, BlockLabel},
    detect::detect,
    parse::parse,
    radix::{bits_to_cidr, render},
    strings::*,
    structs::{Context, Ipv4Input, Notation, Octets},
    validate::{is_contiguous, is_valid_prefix, mask_bits},
    NotationError,
};
use tracing::debug;

/**
Detect and parse any input into canonical octets.

Integers are prefix lengths and always read in [Context::Mask], whatever
`ctx` says; everything else is read in `ctx`.
*/
pub(crate) fn canonical(input: &Ipv4Input, ctx: Context) -> Result<Octets, NotationError> {
    let tag: Notation = detect(input)?;
    let ctx: Context = match tag {
        Notation::CidrInt => Context::Mask,
        _ => ctx,
    };
    let octets: Octets = parse(input, tag, ctx)?;
    if tag == Notation::CidrInt {
        debug!(%input, mask = %octets, "expanded prefix length");
    }
    Ok(octets)
}

/// Dotted-decimal form, `"192.168.0.1"`. Integers give their mask.
pub fn to_dotted_dec(input: impl Into<Ipv4Input>) -> Result<String, NotationError> {
    let octets: Octets = canonical(&input.into(), Context::Address)?;
    Ok(render(&octets, 10, 1, DOT, ""))
}

/// Prefixed 32-bit binary form, `"0b11000000101010000000000000000001"`.
pub fn to_binary(input: impl Into<Ipv4Input>) -> Result<String, NotationError> {
    let octets: Octets = canonical(&input.into(), Context::Address)?;
    Ok(render(&octets, 2, 8, "", BIN_PREFIX))
}

/// Dotted bits, `"11000000.10101000.00000000.00000001"`.
pub fn to_bits(input: impl Into<Ipv4Input>) -> Result<String, NotationError> {
    let octets: Octets = canonical(&input.into(), Context::Address)?;
    Ok(render(&octets, 2, 8, DOT, ""))
}

/// Upper-case hex form, `"0xC0A80001"`.
pub fn to_hex(input: impl Into<Ipv4Input>) -> Result<String, NotationError> {
    let octets: Octets = canonical(&input.into(), Context::Address)?;
    Ok(render(&octets, 16, 2, "", HEX_PREFIX))
}

/// The four octets as a tuple.
pub fn to_octets(input: impl Into<Ipv4Input>) -> Result<(u8, u8, u8, u8), NotationError> {
    let octets: Octets = canonical(&input.into(), Context::Address)?;
    Ok(octets.to_tuple())
}

/**
Prefix length of a subnet mask in any notation.

Integers are checked against `1..=32` and returned as they are. Anything
else must be a contiguous mask, otherwise [NotationError::InvalidSubnetMask].
*/
pub fn to_cidr(input: impl Into<Ipv4Input>) -> Result<u8, NotationError> {
    let input: Ipv4Input = input.into();
    if let Ipv4Input::Int(prefix) = input {
        return match is_valid_prefix(prefix) {
            true => Ok(prefix as u8),
            false => Err(NotationError::InvalidSubnetMask(prefix.to_string())),
        };
    }

    let octets: Octets = canonical(&input, Context::Mask)?;
    let bits: String = mask_bits(&octets);
    if !is_contiguous(&bits) {
        return Err(NotationError::InvalidSubnetMask(input.to_string()));
    }
    bits_to_cidr(&bits).ok_or_else(|| NotationError::InvalidSubnetMask(input.to_string()))
}

/**
Reserved block of an address. Prefix lengths are not addresses and fail
with [NotationError::InvalidAddress].
*/
pub fn block(input: impl Into<Ipv4Input>) -> Result<BlockLabel, NotationError> {
    let input: Ipv4Input = input.into();
    if let Ipv4Input::Int(n) = input {
        return Err(NotationError::InvalidAddress(n.to_string()));
    }
    let octets: Octets = canonical(&input, Context::Address)?;
    Ok(classify(&octets))
}

/// Whether the address falls in any reserved block, i.e. is not public.
pub fn reserved(input: impl Into<Ipv4Input>) -> Result<bool, NotationError> {
    Ok(block(input)?.is_reserved())
}

/* -------------------------------------------------------------------------- */
