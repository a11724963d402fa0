use yew::prelude::*;

use crate::capabilities::use_capabilities;
use crate::hooks::use_reveal_once;

const OFFSET_PX: f64 = 60.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Where the content starts before sliding into place.
    pub fn offset(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, OFFSET_PX),
            Direction::Down => (0.0, -OFFSET_PX),
            Direction::Left => (OFFSET_PX, 0.0),
            Direction::Right => (-OFFSET_PX, 0.0),
        }
    }

    pub fn hidden_style(self, delay_secs: f64) -> String {
        let (x, y) = self.offset();
        format!(
            "opacity: 0; transform: translate3d({}px, {}px, 0); transition-delay: {:.2}s;",
            x, y, delay_secs
        )
    }
}

pub const STYLES: &str = r#"
    .section-reveal {
        will-change: transform, opacity;
        transition-property: opacity, transform;
        transition-duration: 0.9s;
        transition-timing-function: ease-out;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct SectionRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub direction: Direction,
}

#[function_component(SectionReveal)]
pub fn section_reveal(props: &SectionRevealProps) -> Html {
    let capabilities = use_capabilities();
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone(), "-80px", !capabilities.animates_entrances());

    let style = if revealed {
        format!(
            "opacity: 1; transform: translate3d(0, 0, 0); transition-delay: {:.2}s;",
            props.delay
        )
    } else {
        props.direction.hidden_style(props.delay)
    };

    html! {
        <div ref={node} class={classes!("section-reveal", props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_point_away_from_travel() {
        assert_eq!(Direction::Up.offset(), (0.0, 60.0));
        assert_eq!(Direction::Down.offset(), (0.0, -60.0));
        assert_eq!(Direction::Left.offset(), (60.0, 0.0));
        assert_eq!(Direction::Right.offset(), (-60.0, 0.0));
    }

    #[test]
    fn test_hidden_style() {
        assert_eq!(
            Direction::Up.hidden_style(0.1),
            "opacity: 0; transform: translate3d(0px, 60px, 0); transition-delay: 0.10s;"
        );
    }
}
