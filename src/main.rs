use yew::prelude::*;
use log::info;

mod config;
mod capabilities;
mod dom;
mod hooks;
mod motion {
    pub mod spring;
    pub mod remap;
    pub mod frame;
    pub mod scroll;
}
mod tracking {
    pub mod pointer;
    pub mod cursor;
}
mod services {
    pub mod content;
    pub mod relay;
}
mod components {
    pub mod icons;
    pub mod custom_cursor;
    pub mod tilt_card;
    pub mod section_reveal;
    pub mod animated_background;
    pub mod tech_stack;
    pub mod contact_form;
}
mod pages {
    pub mod home;
}

use capabilities::Capabilities;
use pages::home::Home;


#[function_component]
fn App() -> Html {
    // Media queries are read once; the snapshot never changes afterwards.
    let capabilities = use_state(Capabilities::detect);
    info!(
        "Capabilities: fine pointer {}, reduced motion {}",
        capabilities.fine_pointer, capabilities.reduced_motion
    );

    html! {
        <ContextProvider<Capabilities> context={*capabilities}>
            <Home />
        </ContextProvider<Capabilities>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
