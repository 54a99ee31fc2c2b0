use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Tab {
    pub label: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub tabs: Vec<Tab>,
}

/// One active tab at a time; each button carries its own indexed callback, so
/// there is nothing to match against at dispatch time.
#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    let active = use_state(|| 0usize);

    html! {
        <div class="operations">
            <div class="operations__tab-container">
                { for props.tabs.iter().enumerate().map(|(i, tab)| {
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(i))
                    };
                    html! {
                        <button
                            class={classes!(
                                "btn",
                                "operations__tab",
                                (i == *active).then(|| "operations__tab--active"),
                            )}
                            {onclick}
                        >
                            {tab.label}
                        </button>
                    }
                }) }
            </div>
            { for props.tabs.iter().enumerate().map(|(i, tab)| html! {
                <div
                    class={classes!(
                        "operations__content",
                        (i == *active).then(|| "operations__content--active"),
                    )}
                >
                    <h5 class="operations__header">{tab.title}</h5>
                    <p>{tab.body}</p>
                </div>
            }) }
        </div>
    }
}
