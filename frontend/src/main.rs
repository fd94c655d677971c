use std::rc::Rc;
use yew::prelude::*;

mod components;
mod config;
mod controllers;
mod hooks;
mod services;

use components::{BillsPage, LoginPage, NewBillPage, VerticalLayout};
use config::AppConfig;
use services::api::ApiStore;
use services::logging::ConsoleLogger;
use services::notifier::BrowserNotifier;
use services::session::{BrowserSession, SessionStorage};
use services::Services;
use shared::Route;

fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Route::from_path(&hash))
        .unwrap_or(Route::Login)
}

fn set_location_hash(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let hash = match route {
        Route::Login => "",
        other => other.path(),
    };
    if window.location().set_hash(hash).is_err() {
        log::warn!("Failed to update location hash to {:?}", hash);
    }
}

/// Current page, plus a counter bumped on every navigation so the page
/// remounts and reloads its data even when the route does not change
#[derive(Debug, Clone, PartialEq)]
struct Navigation {
    route: Route,
    visits: u32,
}

impl Reducible for Navigation {
    type Action = Route;

    fn reduce(self: Rc<Self>, route: Route) -> Rc<Self> {
        Rc::new(Navigation {
            route,
            visits: self.visits.wrapping_add(1),
        })
    }
}

#[function_component(App)]
fn app() -> Html {
    let navigation = use_reducer(|| Navigation {
        route: current_route(),
        visits: 0,
    });

    let services = use_memo((), |_| {
        let config = AppConfig::from_build_env();
        let session: Rc<dyn SessionStorage> = Rc::new(BrowserSession);
        Services {
            store: Some(Rc::new(ApiStore::new(&config, session.clone()))),
            session,
            notifier: Rc::new(BrowserNotifier),
        }
    });

    let on_navigate = {
        let navigation = navigation.dispatcher();
        Callback::from(move |path: String| {
            let next = Route::from_path(&path);
            log::debug!("Navigating to {}", next.path());
            set_location_hash(next);
            navigation.dispatch(next);
        })
    };

    let services = (*services).clone();
    let visits = navigation.visits;
    let page = match navigation.route {
        Route::Login => {
            return html! { <LoginPage services={services} on_navigate={on_navigate} /> };
        }
        Route::Bills => html! {
            <BillsPage key={visits} services={services.clone()} on_navigate={on_navigate.clone()} />
        },
        Route::NewBill => html! {
            <NewBillPage key={visits} services={services.clone()} on_navigate={on_navigate.clone()} />
        },
    };

    html! {
        <div id="root" class="page-layout">
            <VerticalLayout active={navigation.route} services={services} on_navigate={on_navigate} />
            <div class="page-content">{page}</div>
        </div>
    }
}


fn main() {
    ConsoleLogger::init(AppConfig::from_build_env().log_level);
    yew::Renderer::<App>::new().render();
}
