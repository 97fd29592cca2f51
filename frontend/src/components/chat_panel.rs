use shared::events::ChatLine;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub lines: Vec<ChatLine>,
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    html! {
        <div class={styles::CARD}>
            <div class={styles::CARD_TITLE}>{"Chat"}</div>
            <div class="mt-3 space-y-3 max-h-72 overflow-y-auto pr-1">
                if props.lines.is_empty() {
                    <p class={styles::TEXT_MUTED}>{"Quiet in here..."}</p>
                }
                { for props.lines.iter().map(|line| html! {
                    <div class="text-sm">
                        <div class={styles::TEXT_MUTED}>{format!("[{}]", line.time)}</div>
                        <div class="text-gray-900 dark:text-gray-100">
                            <span class="font-semibold">{format!("{}:", line.bot)}</span>
                            {" "}
                            <span>{&line.text}</span>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
