use yew::prelude::*;

use crate::capabilities::use_capabilities;
use crate::components::section_reveal::SectionReveal;

const TECH_ITEMS: [(&str, &str); 9] = [
    ("Next.js", "⚡"),
    ("React Native", "📱"),
    ("Tailwind CSS", "🎨"),
    ("TypeScript", "🔷"),
    ("Figma", "🎯"),
    ("UI/UX Design", "✨"),
    ("Sanity CMS", "📝"),
    ("Video Editing", "🎬"),
    ("Premiere Pro", "🎥"),
];

/// Infinite marquee of tools. The list is rendered twice and the track
/// slides by half its width, so the loop point is invisible.
#[function_component(TechStack)]
pub fn tech_stack() -> Html {
    let capabilities = use_capabilities();
    let track_class = classes!(
        "marquee-track",
        (!capabilities.animates_entrances()).then(|| "paused")
    );

    html! {
        <section class="tech-stack">
            <style>
                {r#"
                    .tech-stack {
                        position: relative;
                        overflow: hidden;
                        padding: 5rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .tech-stack-title {
                        text-align: center;
                        margin-bottom: 3.5rem;
                        color: #737373;
                        font-size: 0.875rem;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                    }
                    .marquee {
                        position: relative;
                    }
                    .marquee-fade {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 10rem;
                        z-index: 10;
                        pointer-events: none;
                    }
                    .marquee-fade.left { left: 0; background: linear-gradient(to right, #050505, transparent); }
                    .marquee-fade.right { right: 0; background: linear-gradient(to left, #050505, transparent); }
                    .marquee-track {
                        display: flex;
                        gap: 2rem;
                        width: max-content;
                        will-change: transform;
                        animation: marquee 30s linear infinite;
                    }
                    .marquee-track.paused {
                        animation-play-state: paused;
                    }
                    .marquee-item {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                        white-space: nowrap;
                        user-select: none;
                        transition: background 0.3s, border-color 0.3s;
                    }
                    .marquee-item:hover {
                        background: rgba(255, 255, 255, 0.08);
                        border-color: rgba(255, 255, 255, 0.2);
                    }
                    .marquee-icon { font-size: 1.5rem; }
                    .marquee-name { color: #d4d4d4; font-weight: 500; }
                    @keyframes marquee {
                        from { transform: translate3d(0, 0, 0); }
                        to { transform: translate3d(-50%, 0, 0); }
                    }
                    @media (max-width: 768px) {
                        .tech-stack { padding: 2.5rem 0; }
                        .marquee-fade { width: 4rem; }
                        .marquee-track { gap: 1rem; }
                        .marquee-item { padding: 0.75rem 1.25rem; }
                    }
                "#}
            </style>
            <SectionReveal>
                <p class="tech-stack-title">{"Tech I work with"}</p>
            </SectionReveal>
            <div class="marquee">
                <div class="marquee-fade left"></div>
                <div class="marquee-fade right"></div>
                <div class={track_class}>
                    {
                        TECH_ITEMS.iter().chain(TECH_ITEMS.iter()).map(|(name, icon)| html! {
                            <div class="marquee-item cursor-hover">
                                <span class="marquee-icon">{ *icon }</span>
                                <span class="marquee-name">{ *name }</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
