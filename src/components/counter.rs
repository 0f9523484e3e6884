use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::validation::digits_only;

/// Integer target of a counter label such as `"87%"` or `"+500"`.
/// Labels without digits, or that read as zero, are not animated.
pub fn parse_counter_target(text: &str) -> Option<u32> {
    digits_only(text).parse::<u32>().ok().filter(|n| *n > 0)
}

/// Climbs from 0 to `target` in a fixed number of equal steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u32,
    step: u32,
    steps: u32,
}

impl CounterAnimation {
    pub fn new(target: u32, steps: u32) -> Self {
        Self {
            target,
            step: 0,
            steps: steps.max(1),
        }
    }

    pub fn current(&self) -> u32 {
        let value = f64::from(self.target) * f64::from(self.step) / f64::from(self.steps);
        (value.round() as u32).min(self.target)
    }

    /// Advances one increment and returns the value to display.
    pub fn tick(&mut self) -> u32 {
        if self.step < self.steps {
            self.step += 1;
        }
        self.current()
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }
}

/// Text around the number in a label: `"R$ 40k"` gives `("R$ ", "k")`.
fn split_label(text: &str) -> (&str, &str) {
    let first = text.find(|c: char| c.is_ascii_digit());
    let last = text.rfind(|c: char| c.is_ascii_digit());
    match (first, last) {
        (Some(first), Some(last)) => (&text[..first], &text[last + 1..]),
        _ => (text, ""),
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let shown = use_state(|| None::<u32>);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |text: &AttrValue| {
                if let Some(target) = parse_counter_target(text) {
                    let mut animation = CounterAnimation::new(target, config::COUNTER_STEPS);
                    shown.set(Some(animation.current()));
                    spawn_local(async move {
                        while !animation.is_finished() {
                            TimeoutFuture::new(config::COUNTER_TICK_MS).await;
                            shown.set(Some(animation.tick()));
                        }
                        shown.set(None);
                    });
                }
                || ()
            },
            props.text.clone(),
        );
    }

    let label = match *shown {
        Some(value) => {
            let (prefix, suffix) = split_label(&props.text);
            format!("{prefix}{value}{suffix}")
        }
        None => props.text.to_string(),
    };

    html! {
        <span class={props.class.clone()}>{ label }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digits_out_of_labels() {
        assert_eq!(parse_counter_target("87%"), Some(87));
        assert_eq!(parse_counter_target("+1.500"), Some(1500));
        assert_eq!(parse_counter_target("24h"), Some(24));
        assert_eq!(parse_counter_target("0"), None);
        assert_eq!(parse_counter_target("nenhum"), None);
    }

    #[test]
    fn reaches_target_exactly_after_all_steps() {
        let mut animation = CounterAnimation::new(87, 100);
        let mut last = 0;
        let mut ticks = 0;
        while !animation.is_finished() {
            let value = animation.tick();
            assert!(value >= last, "counter went backwards");
            assert!(value <= 87);
            last = value;
            ticks += 1;
        }
        assert_eq!(ticks, 100);
        assert_eq!(last, 87);
    }

    #[test]
    fn small_targets_round_intermediate_values() {
        let mut animation = CounterAnimation::new(3, 100);
        assert_eq!(animation.current(), 0);
        for _ in 0..50 {
            animation.tick();
        }
        assert_eq!(animation.current(), 2);
    }

    #[test]
    fn ticking_past_the_end_stays_on_target() {
        let mut animation = CounterAnimation::new(10, 2);
        animation.tick();
        animation.tick();
        assert_eq!(animation.tick(), 10);
        assert!(animation.is_finished());
    }

    #[test]
    fn splits_prefix_and_suffix() {
        assert_eq!(split_label("87%"), ("", "%"));
        assert_eq!(split_label("R$ 40k"), ("R$ ", "k"));
        assert_eq!(split_label("sem número"), ("sem número", ""));
    }
}
