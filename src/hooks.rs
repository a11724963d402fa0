use log::debug;
use yew::prelude::*;

use crate::dom::RevealObserver;

/// Flips to true the first time `node` enters the viewport (grown or shrunk
/// by `root_margin`) and stays true for the life of the component.
/// `immediate` starts it revealed, e.g. under reduced motion.
#[hook]
pub fn use_reveal_once(node: NodeRef, root_margin: &'static str, immediate: bool) -> bool {
    let revealed = use_state(|| immediate);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let observer = if *revealed {
                    None
                } else {
                    let setter = revealed.setter();
                    RevealObserver::observe(&node, root_margin, move || {
                        debug!("Revealing element");
                        setter.set(true);
                    })
                };
                // Without IntersectionObserver the content would stay hidden.
                if observer.is_none() && !*revealed {
                    revealed.set(true);
                }
                move || drop(observer)
            },
            (),
        );
    }

    *revealed
}

/// Seconds to hold back the `index`-th item of a staggered list.
pub fn stagger_delay(index: usize, step_secs: f64) -> f64 {
    index as f64 * step_secs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 0.15), 0.0);
        assert!((stagger_delay(3, 0.15) - 0.45).abs() < 1e-12);
    }
}
