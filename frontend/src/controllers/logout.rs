use shared::Route;
use std::rc::Rc;
use yew::Callback;

use crate::services::session::SessionStorage;

/// Disconnect control of the vertical layout
pub struct Logout {
    on_navigate: Callback<String>,
    session: Rc<dyn SessionStorage>,
}

impl Logout {
    pub fn new(on_navigate: Callback<String>, session: Rc<dyn SessionStorage>) -> Self {
        Self {
            on_navigate,
            session,
        }
    }

    /// Forget the session and return to the login page
    pub fn handle_click(&self) {
        self.session.clear();
        self.on_navigate.emit(Route::Login.path().to_string());
    }
}
