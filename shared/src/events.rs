use serde::{Deserialize, Serialize};

use crate::round::RoundPhase;
use crate::wheel::{PocketColor, WHEEL_SEQUENCE};

/// One wager announced by the server while betting is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveBet {
    pub name: String,
    pub amount: u32,
    pub kind: BetKind,
    pub target: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetKind {
    Color,
    Number,
}

impl LiveBet {
    /// Field-level validation; a bet failing this is malformed input and
    /// never reaches the display log.
    pub fn is_valid(&self) -> bool {
        if self.name.trim().is_empty() || self.amount == 0 {
            return false;
        }
        match self.kind {
            BetKind::Color => matches!(self.target.as_str(), "red" | "black" | "green"),
            BetKind::Number => self
                .target
                .parse::<u8>()
                .map(|n| WHEEL_SEQUENCE.contains(&n))
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Roulette,
    Coinflip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeedResult {
    Win,
    Lose,
}

/// A bot action reported on the cross-round activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub id: String,
    pub time: String,
    pub bot: String,
    pub game: GameKind,
    pub wager: u32,
    pub result: FeedResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FeedEntry {
    pub fn is_valid(&self) -> bool {
        !self.bot.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLine {
    pub id: String,
    pub time: String,
    pub bot: String,
    pub text: String,
}

impl ChatLine {
    pub fn is_valid(&self) -> bool {
        !self.bot.trim().is_empty() && !self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub balance: i64,
}

/// Everything the server pushes at a spectating table, one frame per
/// event: `{"event": "...", "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ServerEvent {
    #[serde(rename = "status")]
    Status { status: RoundPhase },
    #[serde(rename = "round_result")]
    Result { number: u8 },
    #[serde(rename = "new_bet_placed")]
    NewBet(LiveBet),
    #[serde(rename = "feed_event")]
    Feed(FeedEntry),
    #[serde(rename = "chat_message")]
    Chat(ChatLine),
    #[serde(rename = "leaderboard_update")]
    Leaderboard(Vec<LeaderboardEntry>),
}

impl ServerEvent {
    fn is_valid(&self) -> bool {
        match self {
            ServerEvent::Status { .. } | ServerEvent::Leaderboard(_) => true,
            ServerEvent::Result { number } => WHEEL_SEQUENCE.contains(number),
            ServerEvent::NewBet(bet) => bet.is_valid(),
            ServerEvent::Feed(entry) => entry.is_valid(),
            ServerEvent::Chat(line) => line.is_valid(),
        }
    }
}

/// Decodes one websocket text frame. Undecodable or invalid frames are
/// dropped with a log line; the table must stay on its last good state
/// no matter how noisy the event source gets.
pub fn decode(frame: &str) -> Option<ServerEvent> {
    let event = match serde_json::from_str::<ServerEvent>(frame) {
        Ok(event) => event,
        Err(err) => {
            log::debug!("dropping undecodable frame: {err}");
            return None;
        }
    };
    if event.is_valid() {
        Some(event)
    } else {
        log::warn!("dropping malformed event: {event:?}");
        None
    }
}

pub fn color_name(color: PocketColor) -> &'static str {
    match color {
        PocketColor::Red => "red",
        PocketColor::Black => "black",
        PocketColor::Green => "green",
    }
}
