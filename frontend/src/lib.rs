mod access_client;
mod hooks;
mod pages;
pub mod store;
pub mod utils;

use pages::{access_denied::AccessDeniedPage, not_found::NotFoundPage};
use store::PermissionStore;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/403")]
    Forbidden,
    #[at("/403/:id")]
    ForbiddenFor { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Forbidden => html! { <AccessDeniedPage /> },
        Route::ForbiddenFor { id } => html! { <AccessDeniedPage id={Some(id)} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    store: PermissionStore,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<PermissionStore> context={props.store.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<PermissionStore>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::with_props(AppProps {
        store: PermissionStore::from_document(),
    })
    .render();
}
