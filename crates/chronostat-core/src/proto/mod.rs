//! PTP message-type taxonomy.
//!
//! Only what the counter store needs: the finite set of on-wire message-type
//! codes (IEEE 1588-2019, messageType field) and a deterministic textual
//! name for each. Export naming lower-cases these names, so they are part of
//! the monitoring wire contract and must not change.

use std::fmt;

use crate::error::{ChronostatError, Result};

/// PTP message types, carried in the low nibble of the first header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageType {
    Sync = 0x0,
    DelayReq = 0x1,
    PdelayReq = 0x2,
    PdelayResp = 0x3,
    FollowUp = 0x8,
    DelayResp = 0x9,
    PdelayRespFollowUp = 0xa,
    Announce = 0xb,
    Signaling = 0xc,
    Management = 0xd,
}

/// All valid message types, in code order.
pub const MESSAGE_TYPES: [MessageType; 10] = [
    MessageType::Sync,
    MessageType::DelayReq,
    MessageType::PdelayReq,
    MessageType::PdelayResp,
    MessageType::FollowUp,
    MessageType::DelayResp,
    MessageType::PdelayRespFollowUp,
    MessageType::Announce,
    MessageType::Signaling,
    MessageType::Management,
];

impl MessageType {
    /// Canonical textual name.
    pub const fn name(self) -> &'static str {
        match self {
            MessageType::Sync => "SYNC",
            MessageType::DelayReq => "DELAY_REQ",
            MessageType::PdelayReq => "PDELAY_REQ",
            MessageType::PdelayResp => "PDELAY_RESP",
            MessageType::FollowUp => "FOLLOW_UP",
            MessageType::DelayResp => "DELAY_RESP",
            MessageType::PdelayRespFollowUp => "PDELAY_RESP_FOLLOW_UP",
            MessageType::Announce => "ANNOUNCE",
            MessageType::Signaling => "SIGNALING",
            MessageType::Management => "MANAGEMENT",
        }
    }

    /// Lower-cased name used in the flattened export (e.g. `sync`,
    /// `delay_req`). Compatibility-critical.
    pub fn export_name(self) -> String {
        self.name().to_ascii_lowercase()
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for MessageType {
    type Error = ChronostatError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0x0 => Ok(MessageType::Sync),
            0x1 => Ok(MessageType::DelayReq),
            0x2 => Ok(MessageType::PdelayReq),
            0x3 => Ok(MessageType::PdelayResp),
            0x8 => Ok(MessageType::FollowUp),
            0x9 => Ok(MessageType::DelayResp),
            0xa => Ok(MessageType::PdelayRespFollowUp),
            0xb => Ok(MessageType::Announce),
            0xc => Ok(MessageType::Signaling),
            0xd => Ok(MessageType::Management),
            other => Err(ChronostatError::UnknownMessageType(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn codes_round_trip() {
        for t in MESSAGE_TYPES {
            assert_eq!(MessageType::try_from(t as u8).unwrap(), t);
        }
    }

    #[test]
    fn reserved_codes_rejected() {
        for code in [0x4u8, 0x5, 0x6, 0x7, 0xe, 0xf, 0x42] {
            assert!(MessageType::try_from(code).is_err());
        }
    }

    #[test]
    fn export_names_are_lowercase() {
        assert_eq!(MessageType::Sync.export_name(), "sync");
        assert_eq!(MessageType::DelayReq.export_name(), "delay_req");
        assert_eq!(
            MessageType::PdelayRespFollowUp.export_name(),
            "pdelay_resp_follow_up"
        );
    }
}
