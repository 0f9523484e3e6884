use yew::prelude::*;

mod components;
mod config;
mod form;
mod pages;
mod utils;
mod validation;

use pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    html! { <Landing /> }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("starting landing page (development: {})", config::is_development());
    yew::Renderer::<App>::new().render();
}
