use shared::sort_anti_chrono;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::controllers::bills::{BillRow, FetchedBills};
use crate::controllers::Bills;
use crate::services::Services;

#[derive(Clone, PartialEq)]
pub struct BillsState {
    pub rows: Vec<BillRow>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseBillsResult {
    pub state: BillsState,
    pub controller: Rc<Bills>,
    pub refresh: Callback<()>,
}

/// Rows newest first, with formatting failures logged against their record
pub fn prepare_rows(fetched: FetchedBills) -> Vec<BillRow> {
    for failure in &fetched.failures {
        log::error!("{} for {:?}", failure.error, failure.bill);
    }
    let mut rows = fetched.rows;
    sort_anti_chrono(&mut rows, |row| row.bill.date.as_str());
    rows
}

#[hook]
pub fn use_bills(services: &Services, on_navigate: &Callback<String>) -> UseBillsResult {
    let rows = use_state(Vec::<BillRow>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let controller = {
        let store = services.store.clone();
        let on_navigate = on_navigate.clone();
        use_memo((), move |_| Bills::new(on_navigate, store))
    };

    let refresh = {
        let controller = controller.clone();
        let rows = rows.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let controller = controller.clone();
            let rows = rows.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);
                match controller.get_bills().await {
                    Some(Ok(fetched)) => {
                        rows.set(prepare_rows(fetched));
                        error.set(None);
                    }
                    Some(Err(e)) => {
                        log::error!("Failed to load bills: {}", e);
                        error.set(Some(e.to_string()));
                    }
                    None => log::debug!("No store configured, bills not loaded"),
                }
                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    UseBillsResult {
        state: BillsState {
            rows: (*rows).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        controller,
        refresh,
    }
}
