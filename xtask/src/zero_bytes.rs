use std::{
    fs::File,
    io::prelude::*,
    path::PathBuf,
    process::{Command, Stdio},
};

use anyhow::{bail, Context};
use clap::Parser;
use compression_hasher::{zero_bytes::MAX_HEIGHT, Hasher, Keccak, Sha256};
use proc_macro2::Literal;
use quote::quote;

use crate::Hash;

#[derive(Debug, Parser)]
pub struct Options {
    #[clap(value_enum, long, default_value_t = Hash::Keccak)]
    hash: Hash,
    /// File to write the table into. Printed to stdout when not given.
    #[clap(long)]
    path: Option<PathBuf>,
}

pub fn generate_zero_bytes(opts: Options) -> anyhow::Result<()> {
    match opts.hash {
        Hash::Keccak => generate_zero_bytes_for_hasher::<Keccak>(opts),
        Hash::Sha256 => generate_zero_bytes_for_hasher::<Sha256>(opts),
    }
}

fn generate_zero_bytes_for_hasher<H>(opts: Options) -> anyhow::Result<()>
where
    H: Hasher,
{
    let mut zero_bytes_tokens = Vec::with_capacity(MAX_HEIGHT + 1);
    let mut prev_hash = [0u8; 32];
    for level in 0..=MAX_HEIGHT {
        if level > 0 {
            prev_hash = H::hashv(&[&prev_hash, &prev_hash])?;
        }
        let bytes = prev_hash.iter().map(|byte| Literal::u8_unsuffixed(*byte));
        zero_bytes_tokens.push(quote! { [ #(#bytes),* ] });
    }

    let code = quote! {
        use super::ZeroBytes;

        pub const ZERO_BYTES: ZeroBytes = [ #(#zero_bytes_tokens),* ];
    };
    let hash_name = format!("{:?}", opts.hash).to_lowercase();
    let code = format!(
        "// This file is generated by `cargo xtask generate-zero-bytes --hash {hash_name}`.\n\
         // Do not edit manually.\n\n{}",
        rustfmt(code.to_string())?
    );

    match opts.path {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            file.write_all(code.as_bytes())?;
        }
        None => print!("{code}"),
    }

    Ok(())
}

/// Formats the generated code with the `rustfmt` binary.
fn rustfmt(code: String) -> anyhow::Result<String> {
    let mut cmd = Command::new("rustfmt")
        .args(["--edition", "2021"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .context("failed to spawn rustfmt")?;

    let mut stdin = cmd.stdin.take().context("rustfmt stdin is not piped")?;
    stdin.write_all(code.as_bytes())?;
    drop(stdin);

    let output = cmd.wait_with_output()?;
    if !output.status.success() {
        bail!("rustfmt exited with {}", output.status);
    }
    let mut formatted = String::new();
    output.stdout.as_slice().read_to_string(&mut formatted)?;
    Ok(formatted)
}
