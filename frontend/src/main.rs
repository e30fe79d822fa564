use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod i18n;
mod rotator {
    pub mod hook;
    pub mod scheduler;
    pub mod state;
}
mod contact {
    pub mod form;
    pub mod transport;
}
mod components {
    pub mod contact_section;
    pub mod header;
    pub mod hero;
    pub mod pricing;
    pub mod products;
    pub mod services;
    pub mod skills;
    pub mod story;
}
mod pages {
    pub mod landing;
}

use components::header::Header;
use i18n::{I18n, Locale};
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
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let locale = use_state(|| i18n::stored_locale().unwrap_or_default());
    let i18n = use_memo(|locale| I18n::new(*locale), *locale);

    let on_locale_change = {
        let locale = locale.clone();
        Callback::from(move |next: Locale| {
            info!("Switching locale to {}", next.code());
            i18n::store_locale(next);
            locale.set(next);
        })
    };

    html! {
        <ContextProvider<I18n> context={(*i18n).clone()}>
            <BrowserRouter>
                <Header locale={*locale} {on_locale_change} />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<I18n>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
