//! Channel Sequencer
//!
//! Fixed reading -> visual -> kinesthetic -> auditory rotation of input
//! modalities. Pure lookups, no engine state.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Reading,
    Visual,
    Kinesthetic,
    Auditory,
}

impl Channel {
    /// The RVKA ordering
    pub const ORDER: [Channel; 4] = [
        Channel::Reading,
        Channel::Visual,
        Channel::Kinesthetic,
        Channel::Auditory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Visual => "visual",
            Self::Kinesthetic => "kinesthetic",
            Self::Auditory => "auditory",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "reading" => Some(Self::Reading),
            "visual" => Some(Self::Visual),
            "kinesthetic" => Some(Self::Kinesthetic),
            "auditory" => Some(Self::Auditory),
            _ => None,
        }
    }

    pub fn to_index(&self) -> usize {
        match self {
            Self::Reading => 0,
            Self::Visual => 1,
            Self::Kinesthetic => 2,
            Self::Auditory => 3,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single lawful channel after `previous`.
///
/// No previous channel, or the last channel of the ordering, wraps to
/// [`Channel::Reading`].
pub fn select_next_channel(previous: Option<Channel>) -> Channel {
    match previous {
        Some(channel) => {
            let next = channel.to_index() + 1;
            Channel::ORDER.get(next).copied().unwrap_or(Channel::ORDER[0])
        }
        None => Channel::ORDER[0],
    }
}

/// Same as [`select_next_channel`] for raw channel names. A name outside the
/// ordering is treated like no previous channel.
pub fn select_next_channel_str(previous: Option<&str>) -> Channel {
    select_next_channel(previous.and_then(Channel::parse))
}

/// Infinite iterator of the channels that follow `start`
#[derive(Debug, Clone)]
pub struct ChannelCycle {
    current: Option<Channel>,
}

impl Iterator for ChannelCycle {
    type Item = Channel;

    fn next(&mut self) -> Option<Channel> {
        let next = select_next_channel(self.current);
        self.current = Some(next);
        Some(next)
    }
}

pub fn channel_cycle(start: Option<Channel>) -> ChannelCycle {
    ChannelCycle { current: start }
}
