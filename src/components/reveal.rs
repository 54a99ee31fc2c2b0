use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// A page section that starts hidden and fades in the first time enough of it
/// scrolls into view. Observed once; unobserved after the reveal.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let revealed = use_state(|| false);
    let node = use_node_ref();

    {
        let revealed = revealed.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                            if entry.is_intersecting() {
                                revealed.set(true);
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from(config::SECTION_REVEAL_THRESHOLD));

                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .unwrap();

                if let Some(el) = node.cast::<Element>() {
                    observer.observe(&el);
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!(
                "section",
                props.class.clone(),
                (!*revealed).then(|| "section--hidden"),
            )}
        >
            { for props.children.iter() }
        </section>
    }
}
