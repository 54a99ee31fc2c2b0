use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

/// Position in a fixed, circular sequence of slides.
///
/// The whole widget is this one value plus the operations below; everything
/// visual (slide offsets, the active dot) is derived from it at render time.
/// `len` is fixed at construction and must be non-zero — a slider without
/// slides is a markup bug, not a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

pub enum CarouselAction {
    Advance,
    Retreat,
    JumpTo(usize),
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "carousel needs at least one slide");
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Horizontal offset of slide `index`, in percent of the viewport width.
    /// Exactly one slide sits at offset 0 and it is always `current`.
    pub fn offset_percent(&self, index: usize) -> i32 {
        (index as i32 - self.current as i32) * 100
    }

    pub fn advance(&mut self) {
        if self.current == self.len - 1 {
            self.current = 0;
        } else {
            self.current += 1;
        }
    }

    pub fn retreat(&mut self) {
        if self.current == 0 {
            self.current = self.len - 1;
        } else {
            self.current -= 1;
        }
    }

    /// Jump straight to `index`. Dot callbacks are generated 1:1 from the
    /// slides, so `index < len` holds by construction.
    pub fn jump_to(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.current = index;
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Advance => next.advance(),
            CarouselAction::Retreat => next.retreat(),
            CarouselAction::JumpTo(index) => next.jump_to(index),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub children: Children,
}

#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    let carousel = use_reducer(|| Carousel::new(props.children.len()));

    // Arrow keys drive the slider from anywhere on the page. Registered once
    // at mount and kept for the page's lifetime; dispatching through the
    // reducer means the listener always acts on the latest state.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    match e.key().as_str() {
                        "ArrowRight" => dispatcher.dispatch(CarouselAction::Advance),
                        "ArrowLeft" => dispatcher.dispatch(CarouselAction::Retreat),
                        _ => {}
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
            (),
        );
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Retreat))
    };

    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Advance))
    };

    html! {
        <div class="slider">
            { for props.children.iter().enumerate().map(|(i, child)| html! {
                <div
                    class="slide"
                    style={format!("transform: translateX({}%)", carousel.offset_percent(i))}
                >
                    { child }
                </div>
            }) }

            <button class="slider__btn slider__btn--left" onclick={on_prev}>{"←"}</button>
            <button class="slider__btn slider__btn--right" onclick={on_next}>{"→"}</button>

            <div class="dots">
                { for (0..carousel.len()).map(|i| {
                    let onclick = {
                        let carousel = carousel.clone();
                        Callback::from(move |_: MouseEvent| {
                            carousel.dispatch(CarouselAction::JumpTo(i))
                        })
                    };
                    html! {
                        <button
                            class={classes!(
                                "dots__dot",
                                (i == carousel.current()).then(|| "dots__dot--active"),
                            )}
                            onclick={onclick}
                        ></button>
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::Carousel;

    #[test]
    fn starts_at_first_slide() {
        let c = Carousel::new(5);
        assert_eq!(c.current(), 0);
        assert_eq!(c.offset_percent(0), 0);
    }

    #[test]
    fn advance_and_retreat_wrap_around() {
        let mut c = Carousel::new(3);
        c.retreat();
        assert_eq!(c.current(), 2);
        c.advance();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn index_stays_in_bounds_for_any_sequence() {
        let mut c = Carousel::new(3);
        for step in 0..100 {
            if step % 3 == 0 {
                c.advance();
            } else {
                c.retreat();
            }
            assert!(c.current() < c.len());
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut c = Carousel::new(5);
        for start in 0..5 {
            c.jump_to(start);
            for _ in 0..5 {
                c.advance();
            }
            assert_eq!(c.current(), start);
        }
    }

    #[test]
    fn retreat_undoes_advance() {
        let mut c = Carousel::new(4);
        for start in 0..4 {
            c.jump_to(start);
            c.advance();
            c.retreat();
            assert_eq!(c.current(), start);
            c.retreat();
            c.advance();
            assert_eq!(c.current(), start);
        }
    }

    #[test]
    fn five_slide_walkthrough() {
        let mut c = Carousel::new(5);
        assert_eq!(
            (0..5).map(|i| c.offset_percent(i)).collect::<Vec<_>>(),
            vec![0, 100, 200, 300, 400],
        );

        for _ in 0..4 {
            c.advance();
        }
        assert_eq!(c.current(), 4);

        c.advance();
        assert_eq!(c.current(), 0);

        c.jump_to(2);
        assert_eq!(c.current(), 2);
        assert_eq!(c.offset_percent(2), 0);
        assert_eq!(c.offset_percent(0), -200);
        assert_eq!(c.offset_percent(4), 200);
    }

    #[test]
    fn jump_overrides_prior_state() {
        let mut c = Carousel::new(5);
        c.advance();
        c.retreat();
        c.retreat();
        c.jump_to(3);
        assert_eq!(c.current(), 3);
    }
}
