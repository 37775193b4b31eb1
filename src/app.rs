use std::{sync::Arc, time::Duration};

use dioxus::{prelude::*, signals::Signal};
use thiserror::Error;
use tracing::info;

use crate::{
    domain::AppState,
    infra::{
        attom::{AttomClient, ValuationError},
        config::Config,
        geocode::{GeocodeClient, GeocodeError},
        http,
        places::{PlacesClient, PlacesError},
        sheets::{SheetsClient, SheetsError},
    },
    lookup::{LookupError, LookupReport, LookupService},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{AboutPage, HomePage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
}

/// Process-wide services, provided once at launch.
#[derive(Clone)]
pub struct AppContext {
    pub lookup: Arc<LookupService>,
    pub debounce: Duration,
    pub max_submissions: u32,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("address autocomplete: {0}")]
    Places(#[from] PlacesError),
    #[error("valuation service: {0}")]
    Valuation(#[from] ValuationError),
    #[error("geocoding service: {0}")]
    Geocode(#[from] GeocodeError),
    #[error("submission log: {0}")]
    Sheets(#[from] SheetsError),
}

/// Wires every outbound client from the validated configuration.
pub fn build_context(config: &Config) -> Result<AppContext, StartupError> {
    let client = http::build_client(config.lookup.timeout)?;
    let endpoints = &config.endpoints;

    let places = PlacesClient::new(client.clone(), &endpoints.autocomplete, &config.maps_api_key)?;
    let valuation = AttomClient::new(client.clone(), &endpoints.valuation, &config.valuation_api_key)?;
    let geocoder = GeocodeClient::new(client.clone(), &endpoints.geocode, &config.maps_api_key)?;
    let sheets = SheetsClient::new(
        client,
        &endpoints.sheets,
        config.service_account.clone(),
        &config.sheets,
    )?;

    let lookup = LookupService::new(
        Arc::new(places),
        Arc::new(valuation),
        Arc::new(geocoder),
        Arc::new(sheets),
        config.lookup.multipliers,
        config.lookup.map_zoom,
    );

    info!(
        source = %config.source,
        max_submissions = config.lookup.max_submissions,
        timeout_secs = config.lookup.timeout.as_secs(),
        "services ready"
    );

    Ok(AppContext {
        lookup: Arc::new(lookup),
        debounce: config.lookup.debounce,
        max_submissions: config.lookup.max_submissions,
    })
}

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_signal(|| AppState::with_quota(ctx.max_submissions));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Runs one submission against the current session and folds the outcome
/// back into the window state.
pub async fn submit_address(
    ctx: AppContext,
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    address: String,
) {
    if state.with(|st| st.in_flight) {
        return;
    }

    let mut session = state.with_mut(|st| {
        st.begin_submission();
        st.session
    });

    let outcome = ctx.lookup.submit(&mut session, &address).await;

    for (kind, message) in outcome_toasts(&outcome) {
        push_toast(toasts, kind, message);
    }

    state.with_mut(|st| st.apply_outcome(session, outcome));
}

/// Toasts are the only place a submission's problems are reported.
fn outcome_toasts(outcome: &Result<LookupReport, LookupError>) -> Vec<(ToastKind, String)> {
    match outcome {
        Ok(report) if !report.logged => vec![(
            ToastKind::Info,
            "Your result is ready, but we couldn't record this lookup.".to_string(),
        )],
        Ok(_) => Vec::new(),
        Err(err) => {
            let kind = match err {
                LookupError::MissingAddress => ToastKind::Info,
                _ => ToastKind::Warning,
            };
            err.user_messages()
                .into_iter()
                .map(|message| (kind, message))
                .collect()
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn About() -> Element {
    rsx! { Shell { AboutPage {} } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{compare, PropertyRecord, SavingsMultipliers},
        infra::attom::ValuationError,
        lookup::FORMAT_HINTS,
    };

    fn report(logged: bool) -> LookupReport {
        let record = PropertyRecord {
            canonical_address: "123 MAIN ST, SAN FRANCISCO, CA 94105".to_string(),
            market_value: 500_000,
            assessed_value: 600_000,
            last_valuation_date: "2024-02-10".to_string(),
        };
        LookupReport {
            comparison: compare(&record, &SavingsMultipliers::default()),
            record,
            map: None,
            logged,
        }
    }

    #[test]
    fn valuation_failure_raises_each_hint_once() {
        let toasts = outcome_toasts(&Err(LookupError::Valuation(ValuationError::Status(500))));

        assert_eq!(toasts.len(), FORMAT_HINTS.len());
        assert!(toasts.iter().all(|(kind, _)| *kind == ToastKind::Warning));
        for hint in FORMAT_HINTS {
            assert_eq!(toasts.iter().filter(|(_, text)| text == hint).count(), 1);
        }
    }

    #[test]
    fn blank_address_is_informational() {
        let toasts = outcome_toasts(&Err(LookupError::MissingAddress));

        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].0, ToastKind::Info);
    }

    #[test]
    fn clean_success_is_silent_and_unlogged_success_is_flagged() {
        assert!(outcome_toasts(&Ok(report(true))).is_empty());

        let toasts = outcome_toasts(&Ok(report(false)));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].0, ToastKind::Info);
    }
}
