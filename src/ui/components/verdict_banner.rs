use dioxus::prelude::*;

use crate::domain::{Verdict, VerdictStatus};

#[component]
pub fn VerdictBanner(verdict: Verdict) -> Element {
    let (class, icon) = match verdict.status {
        VerdictStatus::GoodCandidate => ("verdict verdict-good", "🎉"),
        VerdictStatus::NotCandidate => ("verdict verdict-neutral", "ℹ️"),
    };

    rsx! {
        div {
            class: "{class}",
            div {
                class: "verdict-heading",
                span { class: "verdict-icon", "{icon}" }
                p { class: "verdict-headline", "{verdict.headline}" }
            }
            p { class: "verdict-rationale", "{verdict.rationale}" }
            if verdict.status == VerdictStatus::NotCandidate {
                p {
                    class: "verdict-rationale",
                    "Don't fret. We can deliver more personalized home insights like this one. Sign up for the waitlist to get access to Abode when we launch."
                }
            }
        }
    }
}
