//! On-disk representation of an expanded key schedule.

use anyhow::{bail, Context, Result};
use rijndael_core::{expand_key, Block, RoundKeys, ROUNDS};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Current schedule file format.
pub const SCHEDULE_FORMAT_VERSION: u32 = 1;

/// Versioned schedule file, serialized with `bincode`.
#[derive(Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct ScheduleFile {
    version: u32,
    round_keys: [Block; ROUNDS + 1],
}

impl ScheduleFile {
    /// Captures an expanded schedule for writing.
    pub fn new(round_keys: &RoundKeys) -> Self {
        Self {
            version: SCHEDULE_FORMAT_VERSION,
            round_keys: *round_keys.as_blocks(),
        }
    }

    /// Restores the schedule.
    pub fn round_keys(&self) -> RoundKeys {
        RoundKeys::from(self.round_keys)
    }

    /// Serializes the file with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).context("serialize schedule")
    }

    /// Deserializes a file, rejecting unknown format versions and schedules
    /// that are not the expansion of their own first round key.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let file: Self = bincode::deserialize(bytes).context("deserialize schedule")?;
        if file.version != SCHEDULE_FORMAT_VERSION {
            bail!(
                "unsupported schedule format version {} (expected {})",
                file.version,
                SCHEDULE_FORMAT_VERSION
            );
        }
        // Round key 0 of an AES-128 schedule is the cipher key itself.
        let expected = expand_key(&file.round_keys[0]).context("re-expand schedule key")?;
        if expected != file.round_keys() {
            bail!("schedule is not a valid AES-128 expansion");
        }
        Ok(file)
    }
}
