use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BETTING_WINDOW_SECS, CHAT_CAPACITY, COOLDOWN_SECS, FEED_CAPACITY, LIVE_BET_CAPACITY,
};
use crate::events::{ChatLine, FeedEntry, LeaderboardEntry, LiveBet, ServerEvent};
use crate::wheel::SpinResult;

/// The round lifecycle. Wire names match the server's status payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    #[serde(rename = "OPEN")]
    BettingOpen,
    #[serde(rename = "SPIN")]
    Spinning,
    #[serde(rename = "COOLDOWN")]
    Cooldown,
}

/// Side effect requested from the owner of the wheel: issued at most once
/// per entry into `Spinning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundCommand {
    StartSpin { target: Option<u8> },
}

/// One table's shared lifecycle record. All mutation flows through
/// `tick`, `spin_finished` and `apply_event`, so the machine stays
/// independent of whatever event loop drives it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    phase: RoundPhase,
    countdown: u32,
    reported_phase: Option<RoundPhase>,
    spin_requested: bool,
    pending_target: Option<u8>,
    last_result: Option<SpinResult>,
    live_bets: VecDeque<LiveBet>,
    feed: VecDeque<FeedEntry>,
    chat: VecDeque<ChatLine>,
    leaderboard: Vec<LeaderboardEntry>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    /// Starts idle in cooldown, waiting out one window before the first
    /// betting round opens.
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::Cooldown,
            countdown: COOLDOWN_SECS,
            reported_phase: None,
            spin_requested: false,
            pending_target: None,
            last_result: None,
            live_bets: VecDeque::new(),
            feed: VecDeque::new(),
            chat: VecDeque::new(),
            leaderboard: Vec::new(),
        }
    }

    /// Locally computed phase; authoritative for the spin lifecycle.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Phase shown to spectators: an externally pushed status wins over
    /// the local guess until the next local transition.
    pub fn display_phase(&self) -> RoundPhase {
        self.reported_phase.unwrap_or(self.phase)
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn last_result(&self) -> Option<SpinResult> {
        self.last_result
    }

    pub fn live_bets(&self) -> &VecDeque<LiveBet> {
        &self.live_bets
    }

    pub fn feed(&self) -> &VecDeque<FeedEntry> {
        &self.feed
    }

    pub fn chat(&self) -> &VecDeque<ChatLine> {
        &self.chat
    }

    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }

    /// One-second tick. Counts the current window down and, on reaching
    /// zero, moves the phase to its natural successor.
    pub fn tick(&mut self) -> Option<RoundCommand> {
        match self.phase {
            // the renderer's completion callback ends this phase
            RoundPhase::Spinning => None,
            RoundPhase::BettingOpen => {
                self.countdown = self.countdown.saturating_sub(1);
                if self.countdown == 0 {
                    self.enter_spinning()
                } else {
                    None
                }
            }
            RoundPhase::Cooldown => {
                self.countdown = self.countdown.saturating_sub(1);
                if self.countdown == 0 {
                    self.set_phase(RoundPhase::BettingOpen);
                    self.countdown = BETTING_WINDOW_SECS;
                }
                None
            }
        }
    }

    /// Completion callback from the wheel. Authoritative for ending
    /// `Spinning` regardless of anything the server pushed meanwhile.
    pub fn spin_finished(&mut self, result: SpinResult) {
        self.last_result = Some(result);
        self.set_phase(RoundPhase::Cooldown);
        self.countdown = COOLDOWN_SECS;
    }

    /// Applies one externally pushed event. Events only reach this point
    /// after `events::decode` validation.
    pub fn apply_event(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::Status { status } => {
                self.reported_phase = Some(status);
                // bets close as soon as the server says the round left cooldown
                if status != RoundPhase::Cooldown {
                    self.live_bets.clear();
                }
            }
            ServerEvent::Result { number } => {
                self.pending_target = Some(number);
            }
            ServerEvent::NewBet(bet) => {
                push_bounded(&mut self.live_bets, bet, LIVE_BET_CAPACITY);
            }
            ServerEvent::Feed(entry) => {
                push_bounded(&mut self.feed, entry, FEED_CAPACITY);
            }
            ServerEvent::Chat(line) => {
                push_bounded(&mut self.chat, line, CHAT_CAPACITY);
            }
            ServerEvent::Leaderboard(entries) => {
                self.leaderboard = entries;
            }
        }
    }

    fn enter_spinning(&mut self) -> Option<RoundCommand> {
        self.set_phase(RoundPhase::Spinning);
        self.last_result = None;
        self.live_bets.clear();
        if self.spin_requested {
            return None;
        }
        self.spin_requested = true;
        Some(RoundCommand::StartSpin {
            target: self.pending_target.take(),
        })
    }

    fn set_phase(&mut self, phase: RoundPhase) {
        self.phase = phase;
        // local transitions supersede any stale external override
        self.reported_phase = None;
        if phase != RoundPhase::Spinning {
            self.spin_requested = false;
        }
    }
}

/// Prepend to a most-recent-first log, evicting the oldest entries past
/// `capacity`.
fn push_bounded<T>(log: &mut VecDeque<T>, item: T, capacity: usize) {
    log.push_front(item);
    log.truncate(capacity);
}
