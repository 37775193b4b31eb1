use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KpiTone {
    #[default]
    Neutral,
    Positive,
    Highlight,
}

impl KpiTone {
    fn class(self) -> &'static str {
        match self {
            KpiTone::Neutral => "kpi-card",
            KpiTone::Positive => "kpi-card kpi-positive",
            KpiTone::Highlight => "kpi-card kpi-highlight",
        }
    }
}

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    #[props(default)] tone: KpiTone,
) -> Element {
    rsx! {
        div {
            class: "{tone.class()}",
            h3 { class: "kpi-title", "{title}" }
            p { class: "kpi-value", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-description", "{desc}" }
            }
        }
    }
}
