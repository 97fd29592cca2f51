use shared::events::color_name;
use shared::round::RoundPhase;
use shared::wheel::{PocketColor, SpinResult};
use yew::prelude::*;

use crate::styles;

// Format the remaining window for display
pub fn format_time(seconds: u32) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;

    if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

#[derive(Properties, PartialEq)]
pub struct PhaseBadgeProps {
    pub phase: RoundPhase,
    pub countdown: u32,
}

#[function_component(PhaseBadge)]
pub fn phase_badge(props: &PhaseBadgeProps) -> Html {
    let (label, tone) = match props.phase {
        RoundPhase::BettingOpen => (
            format!("Bets open • {}", format_time(props.countdown)),
            "bg-emerald-500/15 text-emerald-500",
        ),
        RoundPhase::Spinning => ("No more bets".to_string(), "bg-yellow-500/15 text-yellow-500"),
        RoundPhase::Cooldown => (
            format!("Next round in {}", format_time(props.countdown)),
            "bg-blue-500/15 text-blue-400",
        ),
    };

    html! {
        <span class={classes!(styles::BADGE, tone)}>{label}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultBadgeProps {
    pub result: Option<SpinResult>,
    pub is_spinning: bool,
}

#[function_component(ResultBadge)]
pub fn result_badge(props: &ResultBadgeProps) -> Html {
    if props.is_spinning {
        return html! { <span class={styles::TEXT_MUTED}>{"Spinning..."}</span> };
    }

    match props.result {
        Some(result) => {
            let tone = match result.color {
                PocketColor::Red => "text-red-400",
                PocketColor::Green => "text-emerald-400",
                PocketColor::Black => "text-gray-900 dark:text-white",
            };
            html! {
                <div class="text-center">
                    <div class={styles::TEXT_MUTED}>{"Result"}</div>
                    <div class={classes!("text-lg", "font-semibold", tone)}>
                        {format!("{} • {}", result.number, color_name(result.color))}
                    </div>
                </div>
            }
        }
        None => html! { <span class={styles::TEXT_MUTED}>{"Waiting for the first spin"}</span> },
    }
}
