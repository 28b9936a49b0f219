use clap::Parser;

use ambe_codec::{GolayAmbeDecoder, decode_ambe72_strict, encode_ambe49, encode_voice_burst};
use ambe_config::{ToolConfig, toml_config};
use ambe_core::{AmbeErr, BitBuffer, debug};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "AMBE 49/72-bit frame tool",
    long_about = "Encodes AMBE parameter blocks into FEC protected DMR frames and bursts, or decodes frames back"
)]
struct Args {
    /// Operation to perform
    #[arg(help = "Mode: [ encode | decode | burst ]")]
    mode: String,

    /// Hex payloads
    #[arg(help = "Hex input: 14 digits per parameter block (encode, burst x3) or 18 digits per frame (decode)")]
    payload: Vec<String>,

    #[arg(short = 'c', long = "config", help = "TOML config with decode and burst settings")]
    config: Option<String>,

    #[arg(short = 'v', long = "verbose", help = "Log every pipeline stage at trace level")]
    verbose: bool,
}

/// Load configuration file, or defaults if none given
fn load_config_from_toml(cfg_path: Option<&str>) -> ToolConfig {
    let Some(cfg_path) = cfg_path else {
        return ToolConfig::default();
    };
    match toml_config::from_file(cfg_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    }
}

/// Parse a hex argument into whole bytes. A dangling nibble is rejected at the
/// position where its partner digit is missing.
fn parse_hex(s: &str) -> Result<Vec<u8>, AmbeErr> {
    let buf = BitBuffer::from_hexstr(s)?;
    if buf.get_len() % 8 != 0 {
        return Err(AmbeErr::InvalidHex {
            position: s.trim_end().chars().count(),
        });
    }
    Ok(buf.into_bytes())
}

fn run_encode(payload: &[String]) -> Result<Vec<String>, AmbeErr> {
    let mut out = Vec::with_capacity(payload.len());
    for hex in payload {
        let frame = encode_ambe49(&parse_hex(hex)?)?;
        out.push(BitBuffer::from_bytes(&frame).dump_hex());
    }
    Ok(out)
}

fn run_decode(cfg: &ToolConfig, payload: &[String]) -> Result<Vec<String>, AmbeErr> {
    let mut out = Vec::with_capacity(payload.len());
    for hex in payload {
        let decoded = decode_ambe72_strict(&GolayAmbeDecoder, &parse_hex(hex)?, cfg.decode.max_errors)?;
        out.push(format!("{} errors={}", BitBuffer::from_bytes(&decoded.ambe49).dump_hex(), decoded.errors));
    }
    Ok(out)
}

/// Expects exactly three parameter blocks
fn run_burst(cfg: &ToolConfig, payload: &[String]) -> Result<Vec<String>, AmbeErr> {
    let blocks = payload.iter().map(|hex| parse_hex(hex)).collect::<Result<Vec<_>, _>>()?;
    let burst = encode_voice_burst([blocks[0].as_slice(), blocks[1].as_slice(), blocks[2].as_slice()], cfg.burst.sync)?;
    Ok(vec![BitBuffer::from_bytes(&burst).dump_hex()])
}

fn main() {
    eprintln!("[+] AMBE frame tool");
    eprintln!("    49-bit parameter blocks <-> 72-bit DMR frames\n");

    let args = Args::parse();
    let cfg = load_config_from_toml(args.config.as_deref());
    let _log_guard = if args.verbose {
        debug::setup_logging_verbose();
        None
    } else {
        debug::setup_logging_default(cfg.debug_log.clone())
    };
    tracing::debug!("config: {:?}", cfg);

    let result = match args.mode.to_lowercase().as_str() {
        "encode" | "enc" => run_encode(&args.payload),
        "decode" | "dec" => run_decode(&cfg, &args.payload),
        "burst" => {
            if args.payload.len() != 3 {
                eprintln!("Error: burst takes exactly 3 parameter blocks, got {}", args.payload.len());
                std::process::exit(1);
            }
            run_burst(&cfg, &args.payload)
        }
        _ => {
            eprintln!("Error: Unsupported mode '{}'", args.mode);
            eprintln!("Supported: encode, decode, burst");
            std::process::exit(1);
        }
    };

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambe_core::SyncPattern;

    fn args(hex: &[&str]) -> Vec<String> {
        hex.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("123456789ABC80").unwrap(), vec![0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0x80]);
        assert_eq!(parse_hex("12 34").unwrap(), vec![0x12, 0x34]);
        assert_eq!(parse_hex("12x4"), Err(AmbeErr::InvalidHex { position: 2 }));
    }

    #[test]
    fn test_parse_hex_rejects_odd_digit_count() {
        assert_eq!(parse_hex("1234567890ABC"), Err(AmbeErr::InvalidHex { position: 13 }));
        assert_eq!(parse_hex("1"), Err(AmbeErr::InvalidHex { position: 1 }));
        // Odd block is not silently padded into a valid 7-byte input
        assert_eq!(run_encode(&args(&["1234567890ABC"])), Err(AmbeErr::InvalidHex { position: 13 }));
    }

    #[test]
    fn test_run_encode() {
        let out = run_encode(&args(&["00000000000000", "123456789ABC80"])).unwrap();
        assert_eq!(out, vec!["220002040220404400", "416C33E567E97732C5"]);
        assert_eq!(
            run_encode(&args(&["12345678"])),
            Err(AmbeErr::InvalidInputLength { expected: 7, found: 4 })
        );
    }

    #[test]
    fn test_run_decode() {
        let cfg = ToolConfig::default();
        let out = run_decode(&cfg, &args(&["416C33E567E97732C5"])).unwrap();
        assert_eq!(out, vec!["123456789ABC80 errors=0"]);

        // First frame bit flipped: rejected with the default limit, accepted with a looser one
        assert_eq!(
            run_decode(&cfg, &args(&["C16C33E567E97732C5"])),
            Err(AmbeErr::TooManyErrors { errors: 1, limit: 0 })
        );
        let mut cfg = ToolConfig::default();
        cfg.decode.max_errors = 3;
        let out = run_decode(&cfg, &args(&["C16C33E567E97732C5"])).unwrap();
        assert_eq!(out, vec!["123456789ABC80 errors=1"]);
    }

    #[test]
    fn test_run_burst() {
        let mut cfg = ToolConfig::default();
        let blocks = args(&["00000000000000", "123456789ABC80", "FFFFFFFFFFFF80"]);
        let out = run_burst(&cfg, &blocks).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].len(), 66);
        assert!(out[0].starts_with("220002040220404400"));
        // BsVoice sync sits in nibbles 27..39
        assert_eq!(&out[0][27..39], "755FD7DF75F7");

        cfg.burst.sync = SyncPattern::MsVoice;
        let out = run_burst(&cfg, &blocks).unwrap();
        assert_eq!(&out[0][27..39], "7F7D5DD57DFD");
    }
}
