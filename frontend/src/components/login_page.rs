use shared::{Route, SessionUser, SESSION_USER_KEY};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::Services;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub services: Services,
    pub on_navigate: Callback<String>,
}

/// Employee sign-in: records the session user and opens the bills page
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let session = props.services.session.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            match serde_json::to_string(&SessionUser::employee(email)) {
                Ok(user) => {
                    session.set_item(SESSION_USER_KEY, &user);
                    on_navigate.emit(Route::Bills.path().to_string());
                }
                Err(e) => log::error!("Failed to store session user: {}", e),
            }
        })
    };

    html! {
        <div class="login-page">
            <h2>{"Employé"}</h2>
            <form data-testid="form-employee" onsubmit={on_submit}>
                <label for="employee-email-input">{"Votre email"}</label>
                <input
                    type="email"
                    required={true}
                    class="form-control"
                    data-testid="employee-email-input"
                    placeholder="johndoe@email.com"
                    ref={email_ref}
                />
                <label for="employee-password-input">{"Mot de passe"}</label>
                <input
                    type="password"
                    required={true}
                    class="form-control"
                    data-testid="employee-password-input"
                    placeholder="******"
                />
                <button type="submit" class="btn btn-primary" data-testid="employee-login-button">
                    {"Se connecter"}
                </button>
            </form>
        </div>
    }
}
