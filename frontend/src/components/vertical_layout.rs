use shared::Route;
use yew::prelude::*;

use crate::controllers::Logout;
use crate::services::Services;

#[derive(Properties, PartialEq)]
pub struct VerticalLayoutProps {
    pub active: Route,
    pub services: Services,
    pub on_navigate: Callback<String>,
}

/// Side bar with the bills / new bill icons and the disconnect control
#[function_component(VerticalLayout)]
pub fn vertical_layout(props: &VerticalLayoutProps) -> Html {
    let navigate_to = |route: Route| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(route.path().to_string()))
    };

    let on_disconnect = {
        let logout = Logout::new(props.on_navigate.clone(), props.services.session.clone());
        Callback::from(move |_: MouseEvent| logout.handle_click())
    };

    let icon_class = |route: Route| {
        classes!("layout-icon", (props.active == route).then_some("active-icon"))
    };

    html! {
        <div class="vertical-navbar">
            <div class="layout-title">{"Billed"}</div>
            <div
                id="layout-icon1"
                data-testid="icon-window"
                class={icon_class(Route::Bills)}
                onclick={navigate_to(Route::Bills)}
            >
                {"🗂"}
            </div>
            <div
                id="layout-icon2"
                data-testid="icon-mail"
                class={icon_class(Route::NewBill)}
                onclick={navigate_to(Route::NewBill)}
            >
                {"✉"}
            </div>
            <div id="layout-disconnect" onclick={on_disconnect}>
                {"⏻"}
            </div>
        </div>
    }
}
