use common::{attach_drivers, CustomerWithDrivers, RiskStats};
use std::rc::Rc;
use yew::prelude::*;

use crate::api_client;
use crate::common::toast::ToastContext;

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Joined customers plus the per-level totals shown on the risk cards.
#[derive(Clone, PartialEq, Default)]
pub struct ChurnData {
    pub customers: Rc<Vec<CustomerWithDrivers>>,
    pub stats: RiskStats,
}

/// What the dashboard reads from [`use_churn_data`].
#[derive(Clone, PartialEq)]
pub struct ChurnDataHandle {
    pub customers: Rc<Vec<CustomerWithDrivers>>,
    pub stats: RiskStats,
    pub loading: bool,
    pub error: Option<String>,
    /// Re-runs both reads. Nothing retries on its own.
    pub refetch: Callback<()>,
}

/// Customers first, then drivers; both must succeed.
pub async fn load_churn_data() -> Result<ChurnData, String> {
    let customers = api_client::get_customers().await?;
    let drivers = api_client::get_churn_drivers().await?;

    let stats = RiskStats::from_customers(&customers);
    let joined = attach_drivers(customers, drivers);
    log::debug!("Loaded {} customers, stats {:?}", joined.len(), stats);

    Ok(ChurnData { customers: Rc::new(joined), stats })
}

#[hook]
pub fn use_churn_data() -> ChurnDataHandle {
    let fetch_state = use_state(|| FetchState::<ChurnData>::Loading);
    let toast_ctx = use_context::<ToastContext>();

    let refetch = {
        let fetch_state = fetch_state.clone();

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                match load_churn_data().await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        log::error!("Failed to load churn data: {}", err);
                        if let Some(toast_ctx) = &toast_ctx {
                            toast_ctx.show_error(err.clone());
                        }
                        fetch_state.set(FetchState::Error(err));
                    }
                }
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    let data = fetch_state.data().cloned().unwrap_or_default();
    ChurnDataHandle {
        customers: data.customers,
        stats: data.stats,
        loading: fetch_state.is_loading(),
        error: fetch_state.error().cloned(),
        refetch,
    }
}
