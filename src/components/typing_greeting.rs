use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

/// First `count` characters of `text`, never splitting a code point.
pub fn typed_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[derive(Properties, PartialEq)]
pub struct TypingGreetingProps {
    pub text: AttrValue,
    pub active: bool,
}

/// Reveals `text` one character at a time while `active`, and starts over
/// from nothing whenever it is deactivated.
#[function_component(TypingGreeting)]
pub fn typing_greeting(props: &TypingGreetingProps) -> Html {
    let shown = use_state(|| 0usize);

    {
        let shown = shown.clone();
        let total = props.text.chars().count();
        use_effect_with_deps(
            move |(_, active)| {
                shown.set(0);
                let interval = active.then(|| {
                    let mut count = 0usize;
                    Interval::new(config::TYPING_INTERVAL_MS, move || {
                        if count < total {
                            count += 1;
                            shown.set(count);
                        }
                    })
                });
                move || drop(interval)
            },
            (props.text.clone(), props.active),
        );
    }

    html! {
        <>
            { typed_prefix(&props.text, *shown) }
            <span class="typing-caret"></span>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_counts_characters_not_bytes() {
        let text = "Hi! 👋 I'm Ranbo.";
        assert_eq!(typed_prefix(text, 0), "");
        assert_eq!(typed_prefix(text, 5), "Hi! 👋");
        assert_eq!(typed_prefix(text, 500), text);
    }
}
