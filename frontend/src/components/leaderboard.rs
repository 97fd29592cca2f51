use shared::events::LeaderboardEntry;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LeaderboardProps {
    pub entries: Vec<LeaderboardEntry>,
}

#[function_component(Leaderboard)]
pub fn leaderboard(props: &LeaderboardProps) -> Html {
    html! {
        <div class={styles::CARD}>
            <div class={styles::TEXT_MUTED}>{"LEADERBOARD"}</div>
            <div class={classes!("mt-1", styles::CARD_TITLE)}>{"Top Bots"}</div>
            <div class="mt-3 space-y-2 max-h-64 overflow-y-auto pr-1">
                if props.entries.is_empty() {
                    <p class={styles::TEXT_MUTED}>{"Standings arrive with the live feed"}</p>
                }
                { for props.entries.iter().enumerate().map(|(rank, entry)| html! {
                    <div class={styles::LIST_ROW}>
                        <div class="flex items-center gap-2">
                            <span class={styles::TEXT_MUTED}>{format!("#{}", rank + 1)}</span>
                            <span class="font-semibold text-gray-900 dark:text-white">{&entry.name}</span>
                        </div>
                        <span class="text-emerald-500 font-semibold">{entry.balance}</span>
                    </div>
                })}
            </div>
        </div>
    }
}
