use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::config;

/// Label and target section id for each nav link, in display order.
const LINKS: [(&str, &str); 3] = [
    ("Features", "section-features"),
    ("Operations", "section-operations"),
    ("Testimonials", "section-testimonials"),
];

/// Smooth-scrolls the page to the element with the given id.
pub fn scroll_to(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(target) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn link_opacity(hovered: Option<usize>, index: usize) -> f64 {
    match hovered {
        Some(h) if h != index => config::NAV_FADE_OPACITY,
        _ => 1.0,
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    /// The hero header; the nav turns sticky once it leaves the viewport.
    pub hero_ref: NodeRef,
    pub on_open_account: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_sticky = use_state(|| false);
    let hovered = use_state(|| None::<usize>);
    let nav_ref = use_node_ref();

    // Sticky nav: observe the hero with a rootMargin of one nav height, so
    // the bar pins exactly when the hero's last pixel scrolls past it.
    {
        let is_sticky = is_sticky.clone();
        let hero_ref = props.hero_ref.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |_| {
                let nav_height = nav_ref
                    .cast::<Element>()
                    .map(|nav| nav.get_bounding_client_rect().height())
                    .unwrap_or(0.0);

                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, _: IntersectionObserver| {
                        if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                            is_sticky.set(!entry.is_intersecting());
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from(0.0));
                options.set_root_margin(&format!("-{nav_height}px"));

                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .unwrap();

                if let Some(hero) = hero_ref.cast::<Element>() {
                    observer.observe(&hero);
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (),
        );
    }

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    let open_account = {
        let on_open_account = props.on_open_account.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open_account.emit(());
        })
    };

    // The "open account" link fades with the rest; it sits one past LINKS.
    let account_index = LINKS.len();

    html! {
        <nav
            ref={nav_ref}
            class={classes!("nav", (*is_sticky).then(|| "sticky"))}
            {onmouseleave}
        >
            <span
                class="nav__logo"
                style={format!("opacity: {}", if hovered.is_some() { config::NAV_FADE_OPACITY } else { 1.0 })}
            >
                {"lumenbank"}
            </span>
            <ul class="nav__links">
                { for LINKS.iter().enumerate().map(|(i, &(label, section))| {
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        scroll_to(section);
                    });
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(i)))
                    };
                    html! {
                        <li class="nav__item">
                            <a
                                class="nav__link"
                                href={format!("#{section}")}
                                style={format!("opacity: {}", link_opacity(*hovered, i))}
                                onclick={onclick}
                                onmouseenter={onmouseenter}
                            >
                                {label}
                            </a>
                        </li>
                    }
                }) }
                <li class="nav__item">
                    <a
                        class="nav__link nav__link--btn"
                        href="#"
                        style={format!("opacity: {}", link_opacity(*hovered, account_index))}
                        onclick={open_account}
                        onmouseenter={{
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(account_index)))
                        }}
                    >
                        {"Open account"}
                    </a>
                </li>
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::link_opacity;
    use crate::config;

    #[test]
    fn siblings_fade_while_one_link_is_hovered() {
        assert_eq!(link_opacity(Some(1), 0), config::NAV_FADE_OPACITY);
        assert_eq!(link_opacity(Some(1), 1), 1.0);
        assert_eq!(link_opacity(Some(1), 2), config::NAV_FADE_OPACITY);
    }

    #[test]
    fn all_links_opaque_without_hover() {
        for i in 0..4 {
            assert_eq!(link_opacity(None, i), 1.0);
        }
    }
}
