use dioxus::prelude::*;

use crate::{
    app::{submit_address, AppContext},
    domain::{verdict, AppState, ESTIMATE_DISCLAIMER},
    lookup::LookupReport,
    ui::components::{
        address_search::AddressSearch,
        kpi_card::{KpiCard, KpiTone},
        map_frame::MapFrame,
        marketing::MarketingSections,
        toast::ToastMessage,
        verdict_banner::VerdictBanner,
    },
    util::format::{currency, dollars},
};

#[component]
pub fn HomePage() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let query = use_signal(String::new);

    let (session, report, in_flight) =
        state.with(|st| (st.session, st.report.clone(), st.in_flight));

    let on_submit = move |address: String| {
        let ctx = ctx.clone();
        spawn(async move {
            submit_address(ctx, state, toasts, address).await;
        });
    };

    let remaining_class = if session.is_exhausted() {
        "caption remaining remaining-exhausted"
    } else {
        "caption remaining"
    };

    rsx! {
        section {
            class: "hero",
            h1 { "Should you challenge your property taxes?" }
            p {
                class: "caption",
                "Compare your home's market value to its tax assessment and find out if a challenge could pay off."
            }
        }

        div {
            class: "panel",
            AddressSearch { query, busy: in_flight, on_submit }
            p {
                class: "{remaining_class}",
                "{session.remaining()} of {session.max_allowed} lookups left this session"
            }
        }

        if let Some(report) = report {
            ResultsView { report }
        }

        MarketingSections {}
    }
}

#[component]
fn ResultsView(report: LookupReport) -> Element {
    let record = report.record.clone();
    let comparison = report.comparison.clone();
    let verdict = verdict(&comparison);

    let difference_label = if comparison.is_good_candidate {
        "Assessed above market value by"
    } else {
        "Assessed below market value by"
    };
    let difference = dollars(comparison.difference);
    let market = dollars(record.market_value);
    let assessed = dollars(record.assessed_value);
    let valuation_date = record.last_valuation_date.clone();

    rsx! {
        section {
            class: "results",
            h2 { "{record.canonical_address}" }
            VerdictBanner { verdict }

            div {
                class: "results-grid",
                div {
                    class: "results-column",
                    KpiCard {
                        title: "Estimated market value".to_string(),
                        value: market,
                        description: Some(format!("Market value last calculated {valuation_date}")),
                    }
                    KpiCard {
                        title: "Tax assessed value".to_string(),
                        value: assessed,
                    }
                    KpiCard {
                        title: difference_label.to_string(),
                        value: difference,
                        tone: if comparison.is_good_candidate { KpiTone::Positive } else { KpiTone::Neutral },
                    }
                }
                div {
                    class: "results-column",
                    p { class: "caption", "{ESTIMATE_DISCLAIMER}" }
                    if let Some(map) = report.map.clone() {
                        MapFrame { artifact: map }
                    } else {
                        p { class: "caption", "Map unavailable for this address." }
                    }
                }
            }

            if let Some(savings) = comparison.savings_summary() {
                div {
                    class: "savings",
                    h3 { "{savings.heading}" }
                    p { "{savings.blurb}" }
                    div {
                        class: "savings-grid",
                        KpiCard {
                            title: "Low end estimate".to_string(),
                            value: currency(savings.low),
                            description: Some("per year after a successful challenge".to_string()),
                            tone: KpiTone::Highlight,
                        }
                        KpiCard {
                            title: "High end estimate".to_string(),
                            value: currency(savings.high),
                            description: Some("per year after a successful challenge".to_string()),
                            tone: KpiTone::Highlight,
                        }
                    }
                }
            }
        }
    }
}
