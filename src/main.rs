use std::io::{self, Read, Write};

use anyhow::Context;
use bundle_cart_transform::{cart_transform_run, FunctionInput};

/// Host-runtime shim: reads the function input JSON from stdin, runs the
/// engine once, and writes the operation list JSON to stdout.
fn main() -> anyhow::Result<()> {
    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .context("reading function input")?;

    let input: FunctionInput =
        serde_json::from_str(&raw).context("decoding function input")?;

    let result = cart_transform_run(&input.cart);

    let encoded = serde_json::to_string(&result).context("encoding function result")?;
    io::stdout()
        .write_all(encoded.as_bytes())
        .context("writing function result")?;

    Ok(())
}
