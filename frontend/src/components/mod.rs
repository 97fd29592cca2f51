pub mod action_feed;
pub mod chat_panel;
pub mod leaderboard;
pub mod live_bets;

pub use action_feed::ActionFeed;
pub use chat_panel::ChatPanel;
pub use leaderboard::Leaderboard;
pub use live_bets::LiveBets;
