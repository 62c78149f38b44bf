use dioxus::prelude::*;

/// Inert layout element reserving a `size` x `size` pixel gap.
#[component]
pub fn Spacer(size: u32) -> Element {
    rsx! {
        span {
            class: "c-spacer",
            style: "display: block; width: {size}px; min-width: {size}px; height: {size}px; min-height: {size}px;",
        }
    }
}
