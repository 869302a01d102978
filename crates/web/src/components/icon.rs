// =============================================================================
// CS:GO Pro Web - Icon Component
// =============================================================================

use leptos::prelude::*;

use crate::icons::{self, Shape};

/// Inline SVG icon. Unknown names render the help glyph.
#[component]
pub fn Icon(
    #[prop(into)] name: String,
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let glyph = icons::resolve(&name);
    if glyph.is_fallback() {
        log::debug!("No glyph named {:?}, using {}", name, glyph.name);
    }
    let class = format!("icon icon-{} {}", glyph.name, class);

    view! {
        <svg
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {glyph.shapes.iter().map(shape_view).collect_view()}
        </svg>
    }
}

fn shape_view(shape: &'static Shape) -> AnyView {
    match *shape {
        Shape::Path(d) => view! { <path d=d></path> }.into_any(),
        Shape::Polyline(points) => view! { <polyline points=points></polyline> }.into_any(),
        Shape::Polygon(points) => view! { <polygon points=points></polygon> }.into_any(),
        Shape::Circle { cx, cy, r } => view! {
            <circle cx=cx.to_string() cy=cy.to_string() r=r.to_string()></circle>
        }
        .into_any(),
        Shape::Line { x1, y1, x2, y2 } => view! {
            <line x1=x1.to_string() y1=y1.to_string() x2=x2.to_string() y2=y2.to_string()></line>
        }
        .into_any(),
        Shape::Rect { x, y, width, height, rx } => view! {
            <rect
                x=x.to_string()
                y=y.to_string()
                width=width.to_string()
                height=height.to_string()
                rx=rx.to_string()
            ></rect>
        }
        .into_any(),
    }
}
