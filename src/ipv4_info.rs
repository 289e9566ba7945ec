// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use ipnotation::{AddressInfo, Ipv4Input};
use std::process::ExitCode;

/// `24` is a prefix length, `10,0,0,1` an octet tuple, anything else text.
fn to_input(arg: &str) -> Ipv4Input {
    if let Ok(n) = arg.parse::<i64>() {
        return Ipv4Input::Int(n);
    }
    if arg.contains(',') {
        let values: Result<Vec<i64>, _> = arg.split(',').map(|v| v.trim().parse::<i64>()).collect();
        if let Ok(values) = values {
            return Ipv4Input::Octets(values);
        }
    }
    Ipv4Input::from(arg)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: ipv4-info <address|mask> [...]");
        return ExitCode::FAILURE;
    }

    let mut failed: bool = false;
    for arg in &args {
        let input: Ipv4Input = to_input(arg);
        let result = match input {
            // a bare prefix length has no address fields; show it as its mask
            Ipv4Input::Int(_) => ipnotation::to_dotted_dec(&input).and_then(AddressInfo::collect),
            _ => AddressInfo::collect(input),
        };
        match result {
            Ok(info) => println!("{arg}\n{info}\n"),
            Err(e) => {
                eprintln!("{arg}: {e}");
                failed = true;
            }
        }
    }

    match failed {
        true => ExitCode::FAILURE,
        false => ExitCode::SUCCESS,
    }
}

/* -------------------------------------------------------------------------- */
