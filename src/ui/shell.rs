use dioxus::prelude::*;

use crate::{
    app::Route,
    ui::components::marketing::waitlist_link,
    util::{
        assets,
        version::{version_label, APP_AUTHOR, APP_HOMEPAGE, APP_NAME},
    },
};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        div { class: "shell",
            header { class: "shell-header",
                div { class: "shell-brand",
                    img { class: "shell-logo", src: assets::logo_data_uri(), alt: "Abode" }
                    div {
                        h1 { class: "shell-title", "{APP_NAME}" }
                        p { class: "shell-tagline", "Find out if your home is over-assessed" }
                    }
                }
                nav { class: "shell-nav",
                    NavButton {
                        active: matches!(current_route, Route::Home {}),
                        onclick: move |_| { nav.push(Route::Home {}); },
                        label: "Home",
                    }
                    NavButton {
                        active: matches!(current_route, Route::About {}),
                        onclick: move |_| { nav.push(Route::About {}); },
                        label: "About",
                    }
                    a {
                        class: "btn-primary",
                        href: waitlist_link("header"),
                        target: "_blank",
                        rel: "noreferrer",
                        "Join the waitlist"
                    }
                }
            }
            div { class: "shell-body",
                aside { class: "shell-sidebar",
                    h3 { "Homeownership on autopilot" }
                    p {
                        "Abode watches your home finances and surfaces savings like this one before you miss them."
                    }
                    a {
                        href: waitlist_link("sidebar"),
                        target: "_blank",
                        rel: "noreferrer",
                        "Get early access"
                    }
                }
                main { class: "page",
                    {children}
                }
            }
            footer { class: "shell-footer",
                span { "{APP_NAME} {version}" }
                a { href: APP_HOMEPAGE, target: "_blank", rel: "noreferrer", "{APP_AUTHOR}" }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "nav-button nav-button-active"
    } else {
        "nav-button"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
