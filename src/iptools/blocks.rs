// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::structs::Octets;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved address block an IPv4 address belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockLabel {
    /// 0.0.0.0/8
    ThisNetwork,
    /// 10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16
    Rfc1918,
    /// shared address space, 100.64.0.0/10
    Rfc6598,
    /// 127.0.0.0/8
    Loopback,
    /// 169.254.0.0/16
    LinkLocal,
    /// IETF protocol assignments, 192.0.0.0/24
    Rfc5736,
    /// documentation: TEST-NET-1, -2 and -3
    Rfc5737,
    /// 6to4 relay anycast, 192.88.99.0/24
    Rfc3068,
    /// benchmarking, 198.18.0.0/15
    Rfc2544,
    /// 224.0.0.0/4
    Multicast,
    /// 240.0.0.0/4 minus broadcast-like addresses
    Future,
    /// 255.255.255.255
    LimitedBroadcast,
    Public,
}

impl BlockLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockLabel::ThisNetwork => "this_network",
            BlockLabel::Rfc1918 => "rfc1918",
            BlockLabel::Rfc6598 => "rfc6598",
            BlockLabel::Loopback => "loopback",
            BlockLabel::LinkLocal => "link_local",
            BlockLabel::Rfc5736 => "rfc5736",
            BlockLabel::Rfc5737 => "rfc5737",
            BlockLabel::Rfc3068 => "rfc3068",
            BlockLabel::Rfc2544 => "rfc2544",
            BlockLabel::Multicast => "multicast",
            BlockLabel::Future => "future",
            BlockLabel::LimitedBroadcast => "limited_broadcast",
            BlockLabel::Public => "public",
        }
    }

    pub fn is_reserved(&self) -> bool {
        *self != BlockLabel::Public
    }
}

impl fmt::Display for BlockLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ---------------------------------- */

type Rule = (fn(&[u8; 4]) -> bool, BlockLabel);

/// Evaluated top to bottom, first match wins. Several ranges share a label.
#[rustfmt::skip]
static BLOCK_TABLE: [Rule; 16] = [
    (|o| matches!(o, [0, ..]),                          BlockLabel::ThisNetwork),
    (|o| matches!(o, [10, ..]),                         BlockLabel::Rfc1918),
    (|o| matches!(o, [100, 64..=127, ..]),              BlockLabel::Rfc6598),
    (|o| matches!(o, [127, ..]),                        BlockLabel::Loopback),
    (|o| matches!(o, [169, 254, ..]),                   BlockLabel::LinkLocal),
    (|o| matches!(o, [172, 16..=31, ..]),               BlockLabel::Rfc1918),
    (|o| matches!(o, [192, 0, 0, _]),                   BlockLabel::Rfc5736),
    (|o| matches!(o, [192, 0, 2, 0]),                   BlockLabel::Rfc5737),
    (|o| matches!(o, [192, 88, 99, _]),                 BlockLabel::Rfc3068),
    (|o| matches!(o, [192, 168, ..]),                   BlockLabel::Rfc1918),
    (|o| matches!(o, [198, 18..=19, ..]),               BlockLabel::Rfc2544),
    (|o| matches!(o, [198, 51, 100, _]),                BlockLabel::Rfc5737),
    (|o| matches!(o, [203, 0, 113, _]),                 BlockLabel::Rfc5737),
    (|o| matches!(o, [224..=239, ..]),                  BlockLabel::Multicast),
    (|o| matches!(o, [240..=255, _, _, 0..=254]),       BlockLabel::Future),
    (|o| matches!(o, [255, 255, 255, 255]),             BlockLabel::LimitedBroadcast),
];

/**
Classify canonical octets against the reserved block table. Total: anything
no rule matches is [BlockLabel::Public].

NOTE: `255.x.y.255` other than `255.255.255.255` matches neither the
`future` rule (last octet must be below 255) nor the broadcast rule, and
comes out as public.
*/
pub fn classify(octets: &Octets) -> BlockLabel {
    BLOCK_TABLE
        .iter()
        .find(|(rule, _)| rule(octets.as_array()))
        .map_or(BlockLabel::Public, |&(_, label)| label)
}

/* -------------------------------------------------------------------------- */
