use log::{info, Level};
use studio_site::pages::landing::Landing;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! { <Landing /> }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
