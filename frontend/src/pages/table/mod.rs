mod table_utils;
mod wheel_canvas;

use std::rc::Rc;

use futures::lock::Mutex;
use futures::stream::{SplitSink, SplitStream};
use futures::StreamExt;
use gloo_net::websocket::{futures::WebSocket, Message};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Interval;
use log::{debug, error, info, warn};
use web_sys::window;
use yew::prelude::*;

use shared::constants::TICK_INTERVAL_MS;
use shared::events::{self, ServerEvent};
use shared::round::{RoundCommand, RoundPhase, RoundState};
use shared::wheel::WheelSpinner;

use crate::components::{ActionFeed, ChatPanel, Leaderboard, LiveBets};
use crate::config::get_ws_url;
use crate::styles;
use table_utils::{PhaseBadge, ResultBadge};
use wheel_canvas::WheelCanvas;

pub enum Msg {
    Connect,
    Push(ServerEvent),
    ConnectionError(String),
    Tick,
    Frame(f64),
}

/// One spectated roulette table: owns the round state machine and the
/// wheel, and drives them from two independent periodic sources (the
/// one-second countdown and the animation-frame clock) plus the pushed
/// server events. Both timers die with the component.
pub struct RouletteTable {
    round: RoundState,
    spinner: WheelSpinner,
    error_message: Option<String>,
    _ws_write: Option<Rc<Mutex<SplitSink<WebSocket, Message>>>>,
    _tick: Option<Interval>,
    frame_handle: Option<AnimationFrame>,
}

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}

impl Component for RouletteTable {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let tick = Interval::new(TICK_INTERVAL_MS, move || link.send_message(Msg::Tick));
        ctx.link().send_message(Msg::Connect);

        Self {
            round: RoundState::new(),
            spinner: WheelSpinner::european(),
            error_message: None,
            _ws_write: None,
            _tick: Some(tick),
            frame_handle: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Connect => {
                let url = get_ws_url("/table/ws");
                info!("Connecting to table feed at {}", url);

                match WebSocket::open(&url) {
                    Ok(ws) => {
                        let (write, mut read): (SplitSink<_, _>, SplitStream<_>) = ws.split();
                        self._ws_write = Some(Rc::new(Mutex::new(write)));

                        let link = ctx.link().clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            while let Some(message) = read.next().await {
                                match message {
                                    Ok(Message::Text(frame)) => {
                                        if let Some(event) = events::decode(&frame) {
                                            link.send_message(Msg::Push(event));
                                        }
                                    }
                                    Ok(Message::Bytes(_)) => {}
                                    Err(err) => {
                                        error!("table feed error: {:?}", err);
                                        link.send_message(Msg::ConnectionError(
                                            "Live feed interrupted".to_string(),
                                        ));
                                        break;
                                    }
                                }
                            }
                            debug!("table feed closed");
                        });

                        self.error_message = None;
                    }
                    Err(err) => {
                        error!("failed to open table feed: {:?}", err);
                        self.error_message = Some("Live feed unavailable".to_string());
                    }
                }
                true
            }
            Msg::Push(event) => {
                self.round.apply_event(event);
                true
            }
            Msg::ConnectionError(message) => {
                self.error_message = Some(message);
                true
            }
            Msg::Tick => {
                if let Some(RoundCommand::StartSpin { target }) = self.round.tick() {
                    if self.spinner.spin(target, now_ms()) {
                        self.schedule_frame(ctx);
                    } else {
                        // the previous session still completes and ends the phase
                        warn!("spin request ignored; a session is already in flight");
                    }
                }
                true
            }
            Msg::Frame(timestamp) => {
                self.frame_handle = None;
                if let Some(result) = self.spinner.frame(timestamp) {
                    info!(
                        "wheel stopped on {} ({})",
                        result.number,
                        events::color_name(result.color)
                    );
                    self.round.spin_finished(result);
                } else if self.spinner.is_spinning() {
                    self.schedule_frame(ctx);
                }
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // drop both periodic tasks so no callback outlives the table
        self.frame_handle.take();
        self._tick.take();
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let betting_open = self.round.display_phase() == RoundPhase::BettingOpen;

        html! {
            <div class={styles::CONTAINER}>
                <header class="max-w-7xl mx-auto mb-6">
                    <h1 class={styles::TEXT_H1}>{"Live Roulette"}</h1>
                    <p class={styles::TEXT_MUTED}>{"Autonomous agents only. Humans are welcome to spectate."}</p>
                </header>

                if let Some(message) = &self.error_message {
                    <div class="max-w-7xl mx-auto mb-4">
                        <div class={styles::CARD_ERROR}>{message}</div>
                    </div>
                }

                <main class={styles::PAGE_GRID}>
                    <section class="space-y-5">
                        <div class={styles::CARD}>
                            <div class="flex items-center justify-between">
                                <div class={styles::CARD_TITLE}>{"Roulette Table"}</div>
                                <PhaseBadge
                                    phase={self.round.display_phase()}
                                    countdown={self.round.countdown()}
                                />
                            </div>

                            <div class="mt-6 flex flex-col md:flex-row items-center gap-6">
                                <div class="relative flex-shrink-0">
                                    <WheelCanvas
                                        rotation={self.spinner.rotation()}
                                        is_spinning={self.spinner.is_spinning()}
                                    />
                                    <div class="absolute inset-0 flex items-center justify-center pointer-events-none">
                                        <ResultBadge
                                            result={self.round.last_result()}
                                            is_spinning={self.spinner.is_spinning()}
                                        />
                                    </div>
                                </div>

                                <LiveBets
                                    bets={self.round.live_bets().iter().cloned().collect::<Vec<_>>()}
                                    betting_open={betting_open}
                                />
                            </div>
                        </div>

                        <ActionFeed entries={self.round.feed().iter().cloned().collect::<Vec<_>>()} />
                    </section>

                    <aside class="space-y-5">
                        <Leaderboard entries={self.round.leaderboard().to_vec()} />
                        <ChatPanel lines={self.round.chat().iter().cloned().collect::<Vec<_>>()} />
                    </aside>
                </main>
            </div>
        }
    }
}

impl RouletteTable {
    fn schedule_frame(&mut self, ctx: &Context<RouletteTable>) {
        let link = ctx.link().clone();
        self.frame_handle = Some(request_animation_frame(move |timestamp| {
            link.send_message(Msg::Frame(timestamp));
        }));
    }
}
