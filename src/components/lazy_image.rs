use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    /// Full-resolution source, swapped in once the image nears the viewport.
    pub src: AttrValue,
    /// Tiny placeholder shown (blurred via the `lazy-img` class) until then.
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let loaded = use_state(|| false);
    let node = use_node_ref();

    {
        let loaded = loaded.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                            if entry.is_intersecting() {
                                loaded.set(true);
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from(config::LAZY_IMAGE_THRESHOLD));

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
        <img
            ref={node}
            src={ if *loaded { props.src.clone() } else { props.placeholder.clone() } }
            alt={props.alt.clone()}
            class={classes!(props.class.clone(), (!*loaded).then(|| "lazy-img"))}
        />
    }
}
