// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    blocks::BlockLabel,
    convert::{block, to_binary, to_bits, to_cidr, to_dotted_dec, to_hex, to_octets},
    strings::*,
    structs::Ipv4Input,
    validate::valid_mask,
    NotationError,
};
use serde::{Deserialize, Serialize};
use std::{fmt, panic, thread};

/// Every derived notation of one address, plus its block.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct AddressInfo {
    pub dotted_dec: String,
    pub binary: String,
    pub bits: String,
    pub hex: String,
    pub octets: (u8, u8, u8, u8),
    pub block: BlockLabel,
    pub reserved: bool,
    /// prefix length, only when the value is also a valid mask
    pub cidr: Option<u8>,
}

impl AddressInfo {
    /// Collect all fields one after another.
    pub fn collect(input: impl Into<Ipv4Input>) -> Result<Self, NotationError> {
        let input: Ipv4Input = input.into();
        let label: BlockLabel = block(&input)?;
        Ok(Self {
            dotted_dec: to_dotted_dec(&input)?,
            binary: to_binary(&input)?,
            bits: to_bits(&input)?,
            hex: to_hex(&input)?,
            octets: to_octets(&input)?,
            reserved: label.is_reserved(),
            block: label,
            cidr: Self::mask_prefix(&input),
        })
    }

    /**
    Same as [AddressInfo::collect], but the five independent conversions
    (binary, bits, hex, octets, block) run on scoped threads and are joined
    before the record is built.
    */
    pub fn collect_parallel(input: impl Into<Ipv4Input>) -> Result<Self, NotationError> {
        let input: Ipv4Input = input.into();
        let input: &Ipv4Input = &input;

        let (binary, bits, hex, octets, label) = thread::scope(|s| {
            let h_binary = s.spawn(|| to_binary(input));
            let h_bits = s.spawn(|| to_bits(input));
            let h_hex = s.spawn(|| to_hex(input));
            let h_octets = s.spawn(|| to_octets(input));
            let h_block = s.spawn(|| block(input));
            (
                join(h_binary),
                join(h_bits),
                join(h_hex),
                join(h_octets),
                join(h_block),
            )
        });

        let label: BlockLabel = label?;
        Ok(Self {
            dotted_dec: to_dotted_dec(input)?,
            binary: binary?,
            bits: bits?,
            hex: hex?,
            octets: octets?,
            reserved: label.is_reserved(),
            block: label,
            cidr: Self::mask_prefix(input),
        })
    }

    fn mask_prefix(input: &Ipv4Input) -> Option<u8> {
        match valid_mask(input) {
            true => to_cidr(input).ok(),
            false => None,
        }
    }
}

/// Join a scoped worker, re-raising its panic on the calling thread.
fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle.join().unwrap_or_else(|e| panic::resume_unwind(e))
}

impl fmt::Display for AddressInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b, c, d) = self.octets;
        writeln!(f, "{LBL_DOTTED:>9}: {}", self.dotted_dec)?;
        writeln!(f, "{LBL_BINARY:>9}: {}", self.binary)?;
        writeln!(f, "{LBL_BITS:>9}: {}", self.bits)?;
        writeln!(f, "{LBL_HEX:>9}: {}", self.hex)?;
        writeln!(f, "{LBL_OCTETS:>9}: ({a}, {b}, {c}, {d})")?;
        writeln!(f, "{LBL_BLOCK:>9}: {}", self.block)?;
        write!(f, "{LBL_RESERVED:>9}: {}", self.reserved)?;
        if let Some(prefix) = self.cidr {
            write!(f, "\n{LBL_CIDR:>9}: /{prefix}")?;
        }
        Ok(())
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect() {
        let info = AddressInfo::collect("192.168.0.1").unwrap();
        assert_eq!(info.dotted_dec, "192.168.0.1");
        assert_eq!(info.binary, "0b11000000101010000000000000000001");
        assert_eq!(info.bits, "11000000.10101000.00000000.00000001");
        assert_eq!(info.hex, "0xC0A80001");
        assert_eq!(info.octets, (192, 168, 0, 1));
        assert_eq!(info.block, BlockLabel::Rfc1918);
        assert!(info.reserved);
        assert_eq!(info.cidr, None);
    }

    #[test]
    fn test_collect_mask() {
        let info = AddressInfo::collect("255.255.255.0").unwrap();
        assert_eq!(info.cidr, Some(24));
        assert_eq!(info.block, BlockLabel::Future);
    }

    #[test]
    fn test_collect_parallel_matches_sequential() {
        for input in ["8.8.8.8", "0xFFFFFF00", "10.0.0.1", "255.255.255.255"] {
            assert_eq!(
                AddressInfo::collect_parallel(input),
                AddressInfo::collect(input),
                "Failed: '{input}'"
            );
        }
    }

    #[test]
    fn test_collect_errors() {
        assert_eq!(
            AddressInfo::collect("1.2.3"),
            Err(NotationError::InvalidAddress("1.2.3".into()))
        );
        assert_eq!(
            AddressInfo::collect_parallel("1.2.3"),
            Err(NotationError::InvalidAddress("1.2.3".into()))
        );
        // prefix lengths are masks, not addresses
        assert!(AddressInfo::collect(24).is_err());
    }

    #[test]
    fn test_serde() {
        let info = AddressInfo::collect("192.168.0.1").unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dotted_dec": "192.168.0.1",
                "binary": "0b11000000101010000000000000000001",
                "bits": "11000000.10101000.00000000.00000001",
                "hex": "0xC0A80001",
                "octets": [192, 168, 0, 1],
                "block": "rfc1918",
                "reserved": true,
                "cidr": null,
            })
        );

        let back: AddressInfo = serde_json::from_value(json).unwrap();
        assert_eq!(back, info);

        let mask = AddressInfo::collect("255.255.255.0").unwrap();
        let text = serde_json::to_string(&mask).unwrap();
        assert!(text.contains("\"cidr\":24"));
        assert_eq!(serde_json::from_str::<AddressInfo>(&text).unwrap(), mask);
    }

    #[test]
    fn test_display() {
        let info = AddressInfo::collect("255.255.0.0").unwrap();
        let text = info.to_string();
        assert!(text.contains("      hex: 0xFFFF0000"));
        assert!(text.contains("    block: future"));
        assert!(text.ends_with("     cidr: /16"));
    }
}
