// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DOT: &str = ".";
pub(crate) static HEX_PREFIX: &str = "0x";
pub(crate) static BIN_PREFIX: &str = "0b";

// mod.rs
pub(crate) static ERR_UNRECOGNIZED: &str = "unrecognized IPv4 notation";
pub(crate) static ERR_INVALID_ADDR: &str = "invalid IPv4 address";
pub(crate) static ERR_INVALID_MASK: &str = "invalid subnet mask";

// detect.rs / parse.rs
pub(crate) static RE_HEX: &str = r"^0x[0-9A-Fa-f]{8}$";
pub(crate) static RE_BIN_PREFIXED: &str = r"^0b[01]{32}$";
pub(crate) static RE_DEC_GROUP: &str = r"^[0-9]{1,3}$";
pub(crate) static RE_BIN_GROUP: &str = r"^[01]+$";

// summary.rs
pub(crate) static LBL_DOTTED: &str = "dotted";
pub(crate) static LBL_BINARY: &str = "binary";
pub(crate) static LBL_BITS: &str = "bits";
pub(crate) static LBL_HEX: &str = "hex";
pub(crate) static LBL_OCTETS: &str = "octets";
pub(crate) static LBL_BLOCK: &str = "block";
pub(crate) static LBL_RESERVED: &str = "reserved";
pub(crate) static LBL_CIDR: &str = "cidr";
