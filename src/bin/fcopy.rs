//! Single-file byte-copy utility
//!
//! Reads the source path's full contents and writes them verbatim to the
//! destination path. Standalone; has no interaction with the HTTP server.

use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (Some(src), Some(dst)) = (args.next(), args.next()) else {
        eprintln!("Usage: fcopy <src> <dst>");
        std::process::exit(2);
    };

    fs::write(&dst, fs::read(&src)?)?;
    Ok(())
}
