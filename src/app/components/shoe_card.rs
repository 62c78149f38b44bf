use chrono::Utc;
use dioxus::prelude::*;

use crate::app::components::Spacer;
use crate::domain::models::Shoe;
use crate::domain::variant::{classify, DisplayVariant};
use crate::shared::format::{format_price, pluralize};

// One card in the storefront grid (BEM: c-shoe-card).
//
// Three variants are possible, based on the shoe:
//   - on-sale: the shoe has a sale price
//   - new-release: released within the last month
//   - default: everything else
// A shoe can be both discounted and recent; on-sale wins in that case.
#[component]
pub fn ShoeCard(shoe: Shoe) -> Element {
    let variant = classify(shoe.sale_price, shoe.release_date, Utc::now());
    let style = variant.style();

    // Variant overrides travel as CSS custom properties; the stylesheet
    // reads them on the flag background and the base price.
    let flag_background = style.flag_background.unwrap_or("transparent");
    let line_through = if style.strike_price { "line-through" } else { "none" };

    let price_text = format_price(shoe.price);
    let colors_text = pluralize("Color", shoe.num_of_colors);
    let flag_text = variant.label();

    rsx! {
        a {
            class: "c-shoe-card",
            href: "/shoe/{shoe.slug}",
            style: "--flag-background: {flag_background}; --line-through: {line_through};",
            article { class: "c-shoe-card__body",
                div { class: "c-shoe-card__image-wrapper",
                    img {
                        class: "c-shoe-card__image",
                        alt: "",
                        src: "{shoe.image_src}",
                    }
                }
                Spacer { size: 12 }
                div { class: "c-shoe-card__row",
                    h3 { class: "c-shoe-card__name", "{shoe.name}" }
                    span { class: "c-shoe-card__price", "{price_text}" }
                }
                div { class: "c-shoe-card__row",
                    p { class: "c-shoe-card__colors", "{colors_text}" }
                    // Only rendered while the shoe is discounted - no
                    // placeholder element otherwise
                    if let Some(sale_price) = shoe.sale_price {
                        span { class: "c-shoe-card__sale-price",
                            {format_price(sale_price)}
                        }
                    }
                }
            }
            if variant != DisplayVariant::Default {
                div { class: "c-shoe-card__flag", "{flag_text}" }
            }
        }
    }
}
