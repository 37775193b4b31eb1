use dioxus::prelude::*;

use crate::{
    app::AppContext,
    lookup::FORMAT_HINTS,
    ui::components::marketing::WaitlistFooter,
    util::version::{version_label, APP_NAME},
};

#[component]
pub fn AboutPage() -> Element {
    let ctx = use_context::<AppContext>();
    let version = version_label();

    rsx! {
        section {
            class: "panel about",
            h2 { "About {APP_NAME}" }
            p {
                "Enter a home address and we look up the automated market valuation alongside the value your county assessed it at. "
                "When the assessment is higher than the market estimate, challenging it may lower your yearly property tax bill."
            }
            h3 { "How the estimate works" }
            p {
                "Savings are estimated as a share of the gap between the two values, using typical effective tax rates. "
                "Actual savings depend on your county, exemptions and the outcome of the appeal."
            }
            h3 { "Tips for finding your address" }
            ul {
                for hint in FORMAT_HINTS {
                    li { "{hint}" }
                }
            }
            p {
                class: "caption",
                "Each session allows {ctx.max_submissions} lookups. Version {version}."
            }
        }
        WaitlistFooter {}
    }
}
