// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
IPv4 addresses and subnet masks in six notations: dotted-decimal, prefix
length, hex (`0x...`), prefixed binary (`0b...`), dotted bits and octet
tuples. Any notation can be validated, converted into any other, or
classified against the table of reserved address blocks.

```
use ipnotation::{block, to_cidr, to_hex, valid_mask, BlockLabel};

assert_eq!(to_hex("192.168.0.1").unwrap(), "0xC0A80001");
assert_eq!(to_cidr("255.255.255.0").unwrap(), 24);
assert_eq!(block("127.0.0.1").unwrap(), BlockLabel::Loopback);
assert!(!valid_mask(33));
```
*/

mod iptools;

pub use iptools::*;
