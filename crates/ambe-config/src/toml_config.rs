use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ambe_core::SyncPattern;
use serde::Deserialize;
use toml::Value;

use super::tool_config::{CfgBurst, CfgDecode, ToolConfig};

/// Build `ToolConfig` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.1";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref decode) = root.decode {
        if !decode.extra.is_empty() {
            return Err(format!("Unrecognized fields in decode: {:?}", sorted_keys(&decode.extra)).into());
        }
    }
    if let Some(ref burst) = root.burst {
        if !burst.extra.is_empty() {
            return Err(format!("Unrecognized fields in burst: {:?}", sorted_keys(&burst.extra)).into());
        }
    }

    // Start from defaults, then apply whatever the file sets
    let mut cfg = ToolConfig {
        debug_log: root.debug_log,
        ..Default::default()
    };
    if let Some(decode) = root.decode {
        apply_decode_patch(&mut cfg.decode, decode);
    }
    if let Some(burst) = root.burst {
        apply_burst_patch(&mut cfg.burst, burst);
    }

    Ok(cfg)
}

/// Build `ToolConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `ToolConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    let cfg = from_reader(r)?;
    Ok(cfg)
}

fn apply_decode_patch(dst: &mut CfgDecode, src: DecodeDto) {
    if let Some(v) = src.max_errors {
        dst.max_errors = v;
    }
}

fn apply_burst_patch(dst: &mut CfgBurst, src: BurstDto) {
    if let Some(v) = src.sync {
        dst.sync = v;
    }
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    decode: Option<DecodeDto>,

    #[serde(default)]
    burst: Option<BurstDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct DecodeDto {
    max_errors: Option<u32>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct BurstDto {
    sync: Option<SyncPattern>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}
