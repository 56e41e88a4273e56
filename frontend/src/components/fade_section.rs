use yew::prelude::*;

use crate::scroll::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct FadeSectionProps {
    pub id: SectionId,
    pub node_ref: NodeRef,
    pub visible: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Full-height page section that fades up the first time it is seen.
#[function_component(FadeSection)]
pub fn fade_section(props: &FadeSectionProps) -> Html {
    let state = if props.visible { "visible" } else { "hidden" };
    html! {
        <section
            id={props.id.to_string()}
            ref={props.node_ref.clone()}
            class={classes!("page-section", "fade-in", state, props.class.clone())}
        >
            { for props.children.iter() }
        </section>
    }
}
