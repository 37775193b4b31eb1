use dioxus::prelude::*;

use crate::app::AppContext;

/// Address input with live suggestions. Each keystroke restarts the
/// suggestion future, so only the last query after the debounce hits the API.
#[component]
pub fn AddressSearch(
    query: Signal<String>,
    busy: bool,
    on_submit: EventHandler<String>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut query = query;

    let suggestions = use_resource(move || {
        let lookup = ctx.lookup.clone();
        let debounce = ctx.debounce;
        let partial = query();
        async move {
            if partial.trim().is_empty() {
                return Vec::new();
            }
            tokio::time::sleep(debounce).await;
            lookup.suggest(&partial).await
        }
    });

    let options = (*suggestions.read()).clone().unwrap_or_default();

    rsx! {
        form {
            class: "search-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(query());
            },
            label { class: "field-label", r#for: "address-input", "See how much you can save" }
            div {
                class: "search-row",
                input {
                    id: "address-input",
                    class: "search-input",
                    value: query(),
                    oninput: move |evt| query.set(evt.value()),
                    list: "address-suggestions",
                    autocomplete: "off",
                    placeholder: "Enter your property address",
                }
                datalist {
                    id: "address-suggestions",
                    for candidate in options.iter() {
                        option { value: candidate.clone() }
                    }
                }
                button {
                    class: "btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Checking..." } else { "Submit" }
                }
            }
        }
    }
}
