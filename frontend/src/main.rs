use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod scroll {
    pub mod browser;
    pub mod hook;
    pub mod host;
    pub mod section;
    pub mod tracker;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod fade_section;
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

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
        // Single page site; unknown paths get the landing page too.
        Route::Home | Route::NotFound => html! { <Landing /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting PhishMate site");
    yew::Renderer::<App>::new().render();
}
