use crate::components::protected_route::ProtectedRoute;
use crate::session::SessionProvider;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod session;
pub mod pages {
    pub mod analytics;
    pub mod dashboard;
    pub mod login;
    pub mod not_found;
}

use pages::{analytics::Analytics, dashboard::Dashboard, login::Login, not_found::NotFound};

#[cfg(all(test, target_arch = "wasm32"))]
pub mod testing;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/analytics")]
    Analytics,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <SessionProvider>
            <BrowserRouter>
                <main class="flex-1">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </SessionProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Dashboard => {
            debug!("Rendering Dashboard component (protected)");
            html! {
                <ProtectedRoute>
                    <Dashboard />
                </ProtectedRoute>
            }
        }
        Route::Login => {
            debug!("Rendering Login component");
            html! { <Login /> }
        }
        Route::Analytics => {
            debug!("Rendering Analytics component (protected)");
            html! {
                <ProtectedRoute>
                    <Analytics />
                </ProtectedRoute>
            }
        }
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    info!("Initializing application...");

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();
    info!("Panic hook set");

    // Mount the app
    info!("Mounting application to #app");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point for Trunk
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
