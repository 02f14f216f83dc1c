use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::animation::{counter_value, COUNTER_DURATION_MS, COUNTER_TICK_MS};

#[derive(Default)]
struct Elapsed(u32);

impl Reducible for Elapsed {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Elapsed(self.0.saturating_add(COUNTER_TICK_MS)))
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: &'static str,
    /// Counting starts once this turns true.
    pub active: bool,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let elapsed = use_reducer(Elapsed::default);
    let done = elapsed.0 >= COUNTER_DURATION_MS;

    {
        let dispatcher = elapsed.dispatcher();
        use_effect_with_deps(
            move |(active, done)| {
                let interval = (*active && !*done)
                    .then(|| Interval::new(COUNTER_TICK_MS, move || dispatcher.dispatch(())));
                move || drop(interval)
            },
            (props.active, done),
        );
    }

    let value = if props.active {
        counter_value(props.target, elapsed.0, COUNTER_DURATION_MS)
    } else {
        0
    };

    html! {
        <span class="counter">{format!("{}{}", value, props.suffix)}</span>
    }
}
