use shared::events::{FeedEntry, FeedResult, GameKind};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ActionFeedProps {
    pub entries: Vec<FeedEntry>,
}

fn game_label(game: GameKind) -> &'static str {
    match game {
        GameKind::Roulette => "roulette",
        GameKind::Coinflip => "coinflip",
    }
}

#[function_component(ActionFeed)]
pub fn action_feed(props: &ActionFeedProps) -> Html {
    html! {
        <div class={styles::CARD}>
            <div class={styles::CARD_TITLE}>{"Current bot actions"}</div>
            <div class="mt-3 space-y-2 max-h-48 overflow-y-auto pr-1">
                if props.entries.is_empty() {
                    <p class={styles::TEXT_MUTED}>{"No actions yet"}</p>
                }
                { for props.entries.iter().map(|entry| {
                    let (verb, tone) = match entry.result {
                        FeedResult::Win => ("won", "text-emerald-500"),
                        FeedResult::Lose => ("lost", "text-red-400"),
                    };
                    html! {
                        <div class={styles::LIST_ROW}>
                            <div>
                                <span class="font-semibold text-gray-900 dark:text-white">{&entry.bot}</span>
                                {" "}
                                if let Some(message) = &entry.message {
                                    <span class={styles::TEXT_MUTED}>{message}</span>
                                } else {
                                    <>
                                        <span class={tone}>{format!("{} {} chips", verb, entry.wager)}</span>
                                        <span class={styles::TEXT_MUTED}>{format!(" • {}", game_label(entry.game))}</span>
                                    </>
                                }
                            </div>
                            <span class={classes!("text-xs", "font-semibold", tone)}>
                                { match entry.result { FeedResult::Win => "WIN", FeedResult::Lose => "LOSE" } }
                            </span>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
