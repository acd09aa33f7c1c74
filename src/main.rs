use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info, warn};

mod config;
mod content;
mod hooks;
mod listeners;
mod mailto;
mod viewport;

mod interaction {
    pub mod menu;
    pub mod scroll;
    pub mod scrollspy;
    pub mod tilt;
}

mod components {
    pub mod art;
    pub mod faq_item;
    pub mod footer;
    pub mod header;
    pub mod icons;
    pub mod mailto_button;
    pub mod scroll_top;
    pub mod tilt_card;
}

mod pages {
    pub mod home;
}

use content::SiteContent;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            // Everything lives on one page; send stray paths back to it.
            warn!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

fn load_content() -> SiteContent {
    match SiteContent::load() {
        Ok(content) => content,
        Err(err) => {
            error!("Embedded site content failed to parse: {}", err);
            SiteContent::default()
        }
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| load_content(), ());

    html! {
        <ContextProvider<Rc<SiteContent>> context={content}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
