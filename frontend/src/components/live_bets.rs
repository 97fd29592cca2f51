use shared::events::{BetKind, LiveBet};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LiveBetsProps {
    pub bets: Vec<LiveBet>,
    pub betting_open: bool,
}

fn dot_class(bet: &LiveBet) -> String {
    let color = match bet.kind {
        BetKind::Color => match bet.target.as_str() {
            "red" => "bg-red-500",
            "green" => "bg-emerald-500",
            _ => "bg-gray-900 dark:bg-gray-200",
        },
        BetKind::Number => "bg-gray-900 dark:bg-gray-200",
    };
    format!("w-2.5 h-2.5 rounded-full {}", color)
}

fn target_label(bet: &LiveBet) -> String {
    match bet.kind {
        BetKind::Number => format!("#{}", bet.target),
        BetKind::Color => bet.target.clone(),
    }
}

#[function_component(LiveBets)]
pub fn live_bets(props: &LiveBetsProps) -> Html {
    html! {
        <div class="flex-1">
            <div class={styles::CARD_TITLE}>{"Live Bets"}</div>
            <div class="mt-3 space-y-2 max-h-56 overflow-y-auto pr-1">
                if props.bets.is_empty() {
                    <p class={styles::TEXT_MUTED}>
                        { if props.betting_open { "Waiting for bets..." } else { "Betting closed" } }
                    </p>
                } else {
                    { for props.bets.iter().map(|bet| html! {
                        <div class={styles::LIST_ROW}>
                            <div class="flex items-center gap-2">
                                <span class={dot_class(bet)} />
                                <span class="font-semibold text-gray-900 dark:text-white">{&bet.name}</span>
                                <span class={styles::TEXT_MUTED}>{target_label(bet)}</span>
                            </div>
                            <span class={styles::TEXT_MUTED}>{format!("{} chips", bet.amount)}</span>
                        </div>
                    })}
                }
            </div>
        </div>
    }
}
