use stylist::css;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::use_event;

use crate::interaction::tilt::Tilt;

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    pub children: Children,
}

/// Pointer position over the card, mapped to a rotation. `None` when the card
/// isn't in the DOM.
fn tilt_at(node: &NodeRef, client_x: i32, client_y: i32) -> Option<Tilt> {
    let card = node.cast::<Element>()?;
    let rect = card.get_bounding_client_rect();
    Some(Tilt::from_pointer(
        client_x as f64 - rect.left(),
        client_y as f64 - rect.top(),
        rect.width(),
        rect.height(),
    ))
}

// Written straight to the element so pointer moves don't re-render the card.
fn apply(node: &NodeRef, tilt: Tilt) {
    if let Some(card) = node.cast::<HtmlElement>() {
        let _ = card.style().set_property("transform", &tilt.transform());
    }
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();

    {
        let card = node.clone();
        use_event(node.clone(), "mousemove", move |e: MouseEvent| {
            if let Some(tilt) = tilt_at(&card, e.client_x(), e.client_y()) {
                apply(&card, tilt);
            }
        });
    }
    {
        let card = node.clone();
        use_event(node.clone(), "mouseleave", move |_: MouseEvent| {
            apply(&card, Tilt::REST);
        });
    }

    let style = css!(
        r#"
        transition: transform 150ms ease-out;
        will-change: transform;
        "#
    );

    html! {
        <div ref={node} class={classes!("tilt-card", style)}>
            { for props.children.iter() }
        </div>
    }
}
