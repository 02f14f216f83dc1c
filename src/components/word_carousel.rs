use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::animation::{next_word, CAROUSEL_INTERVAL_MS};

#[derive(Debug, Default, PartialEq)]
struct Carousel {
    index: usize,
}

/// Each tick carries the word count at the time it fires.
impl Reducible for Carousel {
    type Action = usize;

    fn reduce(self: Rc<Self>, len: usize) -> Rc<Self> {
        Rc::new(Carousel {
            index: next_word(self.index, len),
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct WordCarouselProps {
    pub words: &'static [&'static str],
}

#[function_component(WordCarousel)]
pub fn word_carousel(props: &WordCarouselProps) -> Html {
    let carousel = use_reducer(Carousel::default);

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |len| {
                // Nothing to rotate through with a single word
                let len = *len;
                let interval = (len > 1).then(|| {
                    Interval::new(CAROUSEL_INTERVAL_MS, move || dispatcher.dispatch(len))
                });
                move || drop(interval)
            },
            props.words.len(),
        );
    }

    // A shorter list can arrive before the next tick
    let index = carousel.index.checked_rem(props.words.len()).unwrap_or(0);
    match props.words.get(index) {
        Some(word) => html! {
            <span class="word-carousel" aria-live="polite">
                <span key={*word} class="carousel-word">{*word}</span>
            </span>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(carousel: Rc<Carousel>, len: usize) -> Rc<Carousel> {
        carousel.reduce(len)
    }

    #[test]
    fn ticks_wrap_at_current_length() {
        let mut carousel = Rc::new(Carousel::default());
        for _ in 0..4 {
            carousel = tick(carousel, 5);
        }
        assert_eq!(carousel.index, 4);

        // list shrank to three words; the next tick must land inside it
        carousel = tick(carousel, 3);
        assert!(carousel.index < 3);

        carousel = tick(Rc::new(Carousel { index: 1 }), 2);
        assert_eq!(carousel.index, 0);
    }

    #[test]
    fn tick_with_growing_list_keeps_counting() {
        let carousel = tick(Rc::new(Carousel { index: 2 }), 6);
        assert_eq!(carousel.index, 3);
    }
}
