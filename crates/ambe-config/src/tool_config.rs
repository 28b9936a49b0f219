use ambe_core::SyncPattern;

/// Settings for the decode direction
#[derive(Debug, Clone, Default)]
pub struct CfgDecode {
    /// Frames needing more corrected bits than this are rejected. 0 accepts only clean frames.
    pub max_errors: u32,
}

#[derive(Debug, Clone, Default)]
pub struct CfgBurst {
    /// Centre field of generated voice bursts
    pub sync: SyncPattern,
}

#[derive(Debug, Clone, Default)]
pub struct ToolConfig {
    /// If set, verbose logging is additionally written to this file
    pub debug_log: Option<String>,
    pub decode: CfgDecode,
    pub burst: CfgBurst,
}
