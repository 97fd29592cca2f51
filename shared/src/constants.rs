// Round timing
pub const BETTING_WINDOW_SECS: u32 = 20; // betting countdown shown to spectators
pub const COOLDOWN_SECS: u32 = 10;       // pause between result and next round
pub const TICK_INTERVAL_MS: u32 = 1000;

// Bounded display logs, most recent first
pub const LIVE_BET_CAPACITY: usize = 12;
pub const FEED_CAPACITY: usize = 30;
pub const CHAT_CAPACITY: usize = 25;
