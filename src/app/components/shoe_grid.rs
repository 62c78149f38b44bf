use dioxus::prelude::*;

use crate::app::components::ShoeCard;
use crate::domain::catalog;

/// Storefront grid: one card per shoe in the catalog, flex-wrapped.
#[component]
pub fn ShoeGrid() -> Element {
    rsx! {
        div { class: "c-shoe-grid",
            for shoe in catalog::SHOES.iter() {
                ShoeCard { key: "{shoe.slug}", shoe: shoe.clone() }
            }
        }
    }
}
