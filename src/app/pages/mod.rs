use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::{ShoeGrid, Spacer};
use crate::config::STORE_NAME;
use crate::domain::catalog;
use crate::shared::format::{format_price, pluralize};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Landing page - storefront grid
    #[route("/")]
    Home {},

    // Card navigation target
    #[route("/shoe/:slug")]
    ShoeDetail { slug: String },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Storefront app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            header { class: "c-navbar",
                Link {
                    to: Route::Home {},
                    class: "c-navbar__logo",
                    "{STORE_NAME}"
                }
            }
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        section { class: "c-storefront",
            h1 { class: "c-storefront__title", "Running" }
            Spacer { size: 24 }
            ShoeGrid {}
        }
    }
}

/// Detail page for a single shoe, reached from a card.
#[component]
fn ShoeDetail(slug: String) -> Element {
    let Some(shoe) = catalog::shoe_by_slug(&slug) else {
        tracing::warn!(slug = %slug, "Unknown shoe slug requested");
        return rsx! {
            div { class: "c-empty-state",
                h3 { class: "c-empty-state__title", "Shoe not found" }
                p { class: "c-empty-state__text",
                    "Nothing in the catalog matches \"{slug}\"."
                }
                Link {
                    to: Route::Home {},
                    class: "c-empty-state__back",
                    "Back to the store"
                }
            }
        };
    };

    let price_text = format_price(shoe.price);
    let colors_text = pluralize("Color", shoe.num_of_colors);
    let released_text = shoe.release_date.format("%B %e, %Y").to_string();

    rsx! {
        article { class: "c-shoe-detail",
            div { class: "c-shoe-detail__image-wrapper",
                img {
                    class: "c-shoe-detail__image",
                    alt: "{shoe.name}",
                    src: "{shoe.image_src}",
                }
            }
            div { class: "c-shoe-detail__info",
                h1 { class: "c-shoe-detail__name", "{shoe.name}" }
                Spacer { size: 8 }
                if let Some(sale_price) = shoe.sale_price {
                    p { class: "c-shoe-detail__price",
                        span { class: "c-shoe-detail__price--struck", "{price_text}" }
                        span { class: "c-shoe-detail__price--sale",
                            {format_price(sale_price)}
                        }
                    }
                } else {
                    p { class: "c-shoe-detail__price", "{price_text}" }
                }
                p { class: "c-shoe-detail__meta", "{colors_text}" }
                p { class: "c-shoe-detail__meta", "Released {released_text}" }
            }
        }
    }
}
