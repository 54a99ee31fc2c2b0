use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::modal::Modal;
use crate::components::nav::{scroll_to, Nav};
use crate::components::reveal::RevealSection;
use crate::components::slider::Slider;
use crate::components::tabs::{Tab, Tabs};

fn operations_tabs() -> Vec<Tab> {
    vec![
        Tab {
            label: "01 Instant transfers",
            title: "Transfer money to anyone, instantly. No fees, no BS.",
            body: "Send and receive money across borders in seconds. Every \
                   transfer settles instantly, and the exchange rate you see \
                   is the rate you get.",
        },
        Tab {
            label: "02 Instant loans",
            title: "Buy a home or make your dreams come true, with instant loans.",
            body: "Apply in the app and get a decision in under a minute. \
                   Rates are fixed up front and repayments adjust to your \
                   account activity.",
        },
        Tab {
            label: "03 Instant closing",
            title: "No longer need your account? No problem! Close it instantly.",
            body: "No exit interviews, no retention queues. One tap exports \
                   your history and closes the account for good.",
        },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal_open = use_state(|| false);
    let hero_ref = use_node_ref();

    {
        use_effect_with_deps(
            move |_| {
                info!("Rendering Landing page");
                || ()
            },
            (),
        );
    }

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(true))
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    let open_modal_click = {
        let open_modal = open_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_modal.emit(());
        })
    };

    let scroll_to_features =
        Callback::from(move |_: MouseEvent| scroll_to("section-features"));

    html! {
        <div class="landing-page">
            <header class="header" ref={hero_ref.clone()}>
                <Nav hero_ref={hero_ref.clone()} on_open_account={open_modal} />
                <div class="header__title">
                    <h1>
                        {"When "}
                        <span class="highlight">{"banking"}</span>
                        {" meets "}
                        <span class="highlight">{"minimalism"}</span>
                    </h1>
                    <h4>{"A simpler banking experience for a simpler life."}</h4>
                    <button class="btn--text btn--scroll-to" onclick={scroll_to_features}>
                        {"Learn more ↓"}
                    </button>
                    <img src="/assets/hero.png" class="header__img" alt="Minimalist bank items" />
                </div>
            </header>

            <RevealSection id="section-features" class={classes!("section--features")}>
                <div class="section__title">
                    <h2 class="section__description">{"Features"}</h2>
                    <h3 class="section__header">
                        {"Everything you need in a modern bank and more."}
                    </h3>
                </div>

                <div class="features">
                    <LazyImage
                        src="/assets/digital.jpg"
                        placeholder="/assets/digital-lazy.jpg"
                        alt="Computer"
                        class={classes!("features__img")}
                    />
                    <div class="features__feature">
                        <div class="features__icon">{"💻"}</div>
                        <h5 class="features__header">{"100% digital bank"}</h5>
                        <p>
                            {"Open your account from your couch and run it from \
                              anywhere. No branches, no queues, no paperwork."}
                        </p>
                    </div>

                    <div class="features__feature">
                        <div class="features__icon">{"📈"}</div>
                        <h5 class="features__header">{"Watch your money grow"}</h5>
                        <p>
                            {"Spare change rounds up into savings automatically, \
                              and every account earns interest from day one."}
                        </p>
                    </div>
                    <LazyImage
                        src="/assets/grow.jpg"
                        placeholder="/assets/grow-lazy.jpg"
                        alt="Plant growing"
                        class={classes!("features__img")}
                    />

                    <LazyImage
                        src="/assets/card.jpg"
                        placeholder="/assets/card-lazy.jpg"
                        alt="Credit card"
                        class={classes!("features__img")}
                    />
                    <div class="features__feature">
                        <div class="features__icon">{"💳"}</div>
                        <h5 class="features__header">{"Free debit card included"}</h5>
                        <p>
                            {"Pay in any currency at the real exchange rate. The \
                              card ships free and works worldwide."}
                        </p>
                    </div>
                </div>
            </RevealSection>

            <RevealSection id="section-operations" class={classes!("section--operations")}>
                <div class="section__title">
                    <h2 class="section__description">{"Operations"}</h2>
                    <h3 class="section__header">
                        {"Everything as simple as possible, but no simpler."}
                    </h3>
                </div>
                <Tabs tabs={operations_tabs()} />
            </RevealSection>

            <RevealSection id="section-testimonials" class={classes!("section--testimonials")}>
                <div class="section__title">
                    <h2 class="section__description">{"Not sure yet?"}</h2>
                    <h3 class="section__header">
                        {"Millions are already making their lives simpler."}
                    </h3>
                </div>

                <Slider>
                    <div class="testimonial">
                        <h5 class="testimonial__header">{"Best financial decision ever!"}</h5>
                        <blockquote class="testimonial__text">
                            {"Switching took ten minutes and I have never looked \
                              back. The app does exactly what it says and then \
                              gets out of the way."}
                        </blockquote>
                        <p class="testimonial__author">{"— Aarne Talman, Helsinki"}</p>
                    </div>
                    <div class="testimonial">
                        <h5 class="testimonial__header">{"The last step to becoming a complete minimalist"}</h5>
                        <blockquote class="testimonial__text">
                            {"I closed three accounts at other banks after a \
                              month here. One card, one app, zero clutter."}
                        </blockquote>
                        <p class="testimonial__author">{"— Miyah Miles, London"}</p>
                    </div>
                    <div class="testimonial">
                        <h5 class="testimonial__header">{"Finally free from old-school banks"}</h5>
                        <blockquote class="testimonial__text">
                            {"Transfers land before I finish typing the \
                              confirmation message to my friends. My old bank \
                              took two days."}
                        </blockquote>
                        <p class="testimonial__author">{"— Francisco Gomes, Lisbon"}</p>
                    </div>
                </Slider>
            </RevealSection>

            <section class="section section--sign-up">
                <div class="section__title">
                    <h3 class="section__header">
                        {"The best day to join was one year ago. The second best is today!"}
                    </h3>
                </div>
                <button class="btn btn--show-modal" onclick={open_modal_click}>
                    {"Open your free account today!"}
                </button>
            </section>

            <footer class="footer">
                <ul class="footer__nav">
                    <li class="footer__item"><a class="footer__link" href="#">{"About"}</a></li>
                    <li class="footer__item"><a class="footer__link" href="#">{"Pricing"}</a></li>
                    <li class="footer__item"><a class="footer__link" href="#">{"Terms of Use"}</a></li>
                    <li class="footer__item"><a class="footer__link" href="#">{"Privacy Policy"}</a></li>
                    <li class="footer__item"><a class="footer__link" href="#">{"Contact Us"}</a></li>
                </ul>
                <p class="footer__copyright">
                    {"© Lumenbank. A demo product — do not wire it your savings."}
                </p>
            </footer>

            <Modal open={*modal_open} on_close={close_modal} />
        </div>
    }
}
