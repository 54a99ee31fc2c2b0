use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Signup dialog plus its page-dimming overlay. Visibility is driven entirely
/// by the `open` prop; the close button, a click on the overlay, and Escape
/// all emit `on_close`.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    // Escape closes the dialog while it is open. Re-registered whenever
    // `open` flips so the listener never sees a stale flag.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let open = *open;
                let document = web_sys::window().unwrap().document().unwrap();

                let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if open && e.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                document
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            props.open,
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let hidden = (!props.open).then(|| "hidden");

    html! {
        <>
            <div class={classes!("modal", hidden.clone())}>
                <button class="btn--close-modal" onclick={close.clone()}>{"×"}</button>
                <h2 class="modal__header">
                    {"Open your free account"}
                    <br />
                    {"in just "}<span class="highlight">{"5 minutes"}</span>
                </h2>
                <form class="modal__form">
                    <label>{"First name"}</label>
                    <input type="text" />
                    <label>{"Last name"}</label>
                    <input type="text" />
                    <label>{"Email address"}</label>
                    <input type="email" />
                    <button type="button" class="btn">{"Next step →"}</button>
                </form>
            </div>
            <div class={classes!("overlay", hidden)} onclick={close}></div>
        </>
    }
}
