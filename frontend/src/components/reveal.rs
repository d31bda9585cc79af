use yew::prelude::*;

use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds to wait after entering the viewport, for staggered grids.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or(60.0)]
    pub margin: f64,
}

/// Fades and lifts its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), props.margin);

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then(|| "visible"), props.class.clone())}
            style={format!("transition-delay: {:.2}s;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub badge: AttrValue,
    pub badge_color: AttrValue,
    pub title: AttrValue,
    pub highlight: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <Reveal>
                <div
                    class="section-badge"
                    style={format!("color: {0}; border-color: {0}4d;", props.badge_color)}
                >
                    { props.badge.clone() }
                </div>
            </Reveal>
            <Reveal delay={0.1}>
                <h2 class="section-title">
                    { format!("{} ", props.title) }
                    <span class="gradient-text">{ props.highlight.clone() }</span>
                </h2>
            </Reveal>
            <Reveal delay={0.2}>
                <p class="section-subtitle">{ props.subtitle.clone() }</p>
            </Reveal>
        </div>
    }
}
