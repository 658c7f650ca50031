//! Command-line harness for the convolutional coder.
//!
//! Encodes or decodes a bit-string given as `0`/`1` characters, low bit
//! first:
//!
//! ```text
//! # Encode with the Voyager code
//! convcode -p 0171 -p 0133 7 00110011
//!   0000110101000000111111011011
//!   bits = 28
//!
//! # Decode it again
//! convcode -d -p 0171 -p 0133 7 0000110101000000111111011011
//!   00110011
//!   errors = 0
//!   bits = 8
//! ```
//!
//! Flags: `-e` encode (default), `-d` decode, `-x` disable the zero tail,
//! `-r` recursive/systematic form, `-s N` encoder/decoder start state,
//! `-i N` initial path metric for the other states, `-p N` append a
//! generator polynomial (octal with a leading `0`, hex with `0x`, decimal
//! otherwise). Positional arguments are the constraint length `k` and the
//! bit-string. Exits 0 on success, 1 on bad arguments or decode overflow.
//!
//! Set `RUST_LOG=trellis_fec=debug` for coder lifecycle logging.

use std::env;
use std::process;

use tracing_subscriber::EnvFilter;

use trellis_fec::bit_io::pack_bitstring;
use trellis_fec::convolutional::{
    ConvCode, ConvCodeConfig, OutputSink, DEFAULT_INIT_OTHER_STATES, DEFAULT_START_STATE,
};
use trellis_fec::types::CoderState;

/// Maximum number of bits one CLI decode run may produce.
const MAX_DECODE_LEN_BITS: usize = 128;

/// Parse a number the way strtoul(.., 0) does: leading `0x` is hex, a
/// leading `0` is octal, anything else is decimal.
fn parse_number(s: &str) -> Option<u32> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if s.len() > 1 && s.starts_with('0') {
        u32::from_str_radix(&s[1..], 8).ok()
    } else {
        s.parse().ok()
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    process::exit(1);
}

/// Sink that prints each output bit as a `0`/`1` character.
fn print_sink() -> OutputSink {
    Box::new(|byte, nbits| {
        let mut b = byte;
        for _ in 0..nbits {
            print!("{}", b & 1);
            b >>= 1;
        }
        Ok(())
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut decode = false;
    let mut do_tail = true;
    let mut recursive = false;
    let mut start_state: u32 = DEFAULT_START_STATE as u32;
    let mut init_val: u32 = DEFAULT_INIT_OTHER_STATES;
    let mut polys: Vec<u16> = Vec::new();

    let mut pos = 0;
    while pos < args.len() {
        let arg = &args[pos];
        if !arg.starts_with('-') {
            break;
        }
        match arg.as_str() {
            "-d" => decode = true,
            "-e" => decode = false,
            "-x" => do_tail = false,
            "-r" => recursive = true,
            "-s" | "-i" | "-p" => {
                let flag = arg.clone();
                pos += 1;
                let value = args
                    .get(pos)
                    .unwrap_or_else(|| fail(&format!("No data supplied for {flag}")));
                let n = parse_number(value)
                    .unwrap_or_else(|| fail(&format!("Invalid number for {flag}: {value}")));
                match flag.as_str() {
                    "-s" => start_state = n,
                    "-i" => init_val = n,
                    _ => {
                        if n > u16::MAX as u32 {
                            fail(&format!("Polynomial too large: {value}"));
                        }
                        polys.push(n as u16);
                    }
                }
            }
            other => fail(&format!("unknown option: {other}")),
        }
        pos += 1;
    }

    if polys.is_empty() {
        fail("No polynomials (-p) given");
    }
    let k = match args.get(pos) {
        Some(s) => parse_number(s).unwrap_or_else(|| fail("Invalid constraint (k)")) as usize,
        None => fail("No constraint (k) given"),
    };
    pos += 1;
    let bits_arg = match args.get(pos) {
        Some(s) => s,
        None => fail("No data given"),
    };
    if !bits_arg.chars().all(|c| c == '0' || c == '1') {
        fail("Data must be a string of 0 and 1 characters");
    }

    let config = ConvCodeConfig {
        constraint_length: k,
        generators: polys,
        max_decode_len_bits: MAX_DECODE_LEN_BITS,
        do_tail,
        recursive,
    };
    let mut coder = match ConvCode::new(&config, Some(print_sink()), Some(print_sink())) {
        Ok(coder) => coder,
        Err(err) => fail(&format!("{err}")),
    };
    if start_state > u16::MAX as u32 {
        fail(&format!("Invalid start state: {start_state}"));
    }
    let start_state = start_state as CoderState;
    if start_state != DEFAULT_START_STATE {
        if let Err(err) = coder.reinit_encoder(start_state) {
            fail(&format!("{err}"));
        }
    }
    if start_state != DEFAULT_START_STATE || init_val != DEFAULT_INIT_OTHER_STATES {
        if let Err(err) = coder.reinit_decoder(start_state, init_val) {
            fail(&format!("{err}"));
        }
    }

    let (bytes, nbits) = pack_bitstring(bits_arg);

    print!("  ");
    if decode {
        let result = coder
            .decode_stream(&bytes, nbits, None)
            .and_then(|_| coder.decode_finish());
        match result {
            Ok((total_bits, num_errs)) => {
                println!("\n  errors = {num_errs}");
                println!("  bits = {total_bits}");
            }
            Err(err) => {
                eprintln!("\n{err}");
                process::exit(1);
            }
        }
    } else {
        let result = coder
            .encode_stream(&bytes, nbits)
            .and_then(|_| coder.encode_finish());
        match result {
            Ok(total_bits) => println!("\n  bits = {total_bits}"),
            Err(err) => {
                eprintln!("\n{err}");
                process::exit(1);
            }
        }
    }
}
