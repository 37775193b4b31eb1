use dioxus::prelude::*;

use crate::domain::MapArtifact;

#[component]
pub fn MapFrame(artifact: MapArtifact) -> Element {
    rsx! {
        figure {
            class: "map",
            iframe {
                class: "map-frame",
                title: "Map of {artifact.label}",
                srcdoc: artifact.html.clone(),
                height: "300",
            }
            figcaption { class: "caption", "{artifact.label} ({artifact.center})" }
        }
    }
}
