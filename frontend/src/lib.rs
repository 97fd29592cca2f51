pub mod components;
pub mod config;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::table::RouletteTable;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Table,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Table => html! { <RouletteTable /> },
        Route::NotFound => html! {
            <div class="flex min-h-screen items-center justify-center">
                <p class={styles::TEXT_MUTED}>{"Nothing at this table."}</p>
            </div>
        },
    }
}
