//! DMR air-interface types shared by the codec and the configuration layer

use serde::Deserialize;

/// Content of the 48-bit centre field of a DMR voice burst
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SyncPattern {
    /// Base station sourced voice sync, first burst of a superframe
    #[default]
    BsVoice,
    /// Mobile station sourced voice sync, first burst of a superframe
    MsVoice,
    /// Centre left zeroed, to be filled with EMB and embedded signalling by the caller
    Embedded,
}

impl SyncPattern {
    /// The 48 centre bits, right-aligned
    pub fn bits(self) -> u64 {
        match self {
            SyncPattern::BsVoice => 0x755F_D7DF_75F7,
            SyncPattern::MsVoice => 0x7F7D_5DD5_7DFD,
            SyncPattern::Embedded => 0,
        }
    }
}
