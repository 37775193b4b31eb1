use dioxus::prelude::*;

pub const WAITLIST_URL: &str = "https://joinabode.ai";

/// Waitlist link tagged with where in the app it was clicked.
pub fn waitlist_link(placement: &str) -> String {
    format!("{WAITLIST_URL}?utm_source=tax_tool_{placement}")
}

#[component]
pub fn MarketingSections() -> Element {
    rsx! {
        section {
            class: "marketing-grid",
            div {
                class: "panel",
                p { class: "marketing-icon", "🧾" }
                h3 { "Need help challenging your taxes?" }
                p {
                    "Millions of homeowners overpay their property taxes every year. In some states, you can challenge the assessment of your home, reducing your tax burden for the year."
                }
                p { class: "caption", "Some people can save thousands! 💸" }
            }
            div {
                class: "panel",
                p { class: "marketing-icon", "🏡" }
                h3 { "How does Abode help with this?" }
                p {
                    "Abode helps you put financial decisions on autopilot. We'll recommend savvy financial moves and ensure you're not missing out on savings opportunities."
                }
                p { class: "caption", "We'll help you level up your homeownership 💪" }
            }
        }
        WaitlistFooter {}
    }
}

#[component]
pub fn WaitlistFooter() -> Element {
    rsx! {
        section {
            class: "waitlist-footer",
            h3 { "Want more personalized insights for your home?" }
            p { "Effortless, automated homeownership is a tap away." }
            a {
                class: "btn-primary",
                href: waitlist_link("footer"),
                target: "_blank",
                rel: "noreferrer",
                "Join the waitlist for Abode"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waitlist_links_carry_placement() {
        assert_eq!(
            waitlist_link("footer"),
            "https://joinabode.ai?utm_source=tax_tool_footer"
        );
    }
}
