pub mod api;
pub mod logging;
pub mod notifier;
pub mod session;
pub mod store;

use std::rc::Rc;

use notifier::Notifier;
use session::SessionStorage;
use store::Store;

/// Collaborators shared by every page, passed down as a prop
#[derive(Clone)]
pub struct Services {
    pub store: Option<Rc<dyn Store>>,
    pub session: Rc<dyn SessionStorage>,
    pub notifier: Rc<dyn Notifier>,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        let same_store = match (&self.store, &other.store) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_store
            && Rc::ptr_eq(&self.session, &other.session)
            && Rc::ptr_eq(&self.notifier, &other.notifier)
    }
}
