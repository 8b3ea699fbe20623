use yew::prelude::*;

use crate::effects::pointer::{magnetic_transform, use_pointer_transform};

#[derive(Debug, Clone, PartialEq)]
pub enum ButtonKind {
    Link(AttrValue),
    Submit,
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub kind: ButtonKind,
    #[prop_or_default]
    pub children: Children,
}

/// `.btn.primary` that drifts toward the pointer.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let (transform, onmousemove, onmouseleave) = use_pointer_transform(node.clone(), magnetic_transform);
    let style = transform.map(|t| format!("transform: {t};"));

    match &props.kind {
        ButtonKind::Link(href) => html! {
            <a ref={node} class="btn primary" href={href.clone()} {style} {onmousemove} {onmouseleave}>
                { for props.children.iter() }
            </a>
        },
        ButtonKind::Submit => html! {
            <button ref={node} type="submit" class="btn primary" {style} {onmousemove} {onmouseleave}>
                { for props.children.iter() }
            </button>
        },
    }
}
