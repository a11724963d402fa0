use std::rc::Rc;

use chrono::Datelike;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::capabilities::use_capabilities;
use crate::components::animated_background::AnimatedBackground;
use crate::components::contact_form::ContactForm;
use crate::components::custom_cursor::CustomCursor;
use crate::components::icons;
use crate::components::section_reveal::{self, SectionReveal};
use crate::components::tech_stack::TechStack;
use crate::components::tilt_card::{self, TiltCard};
use crate::dom::{self, Listeners};
use crate::motion::scroll::{scroll_progress, Parallax};
use crate::services::content::{ContentClient, Project, SocialLinks};

const CV_PATH: &str = "/dilshan_cv.pdf?v=updated";

struct Theme {
    gradient: &'static str,
    glow_color: &'static str,
    accent: &'static str,
}

const THEMES: [Theme; 5] = [
    Theme {
        gradient: "linear-gradient(135deg, #a855f7, #6366f1)",
        glow_color: "rgba(168, 85, 247, 0.5)",
        accent: "#d8b4fe",
    },
    Theme {
        gradient: "linear-gradient(135deg, #3b82f6, #06b6d4)",
        glow_color: "rgba(59, 130, 246, 0.5)",
        accent: "#93c5fd",
    },
    Theme {
        gradient: "linear-gradient(135deg, #10b981, #14b8a6)",
        glow_color: "rgba(16, 185, 129, 0.5)",
        accent: "#6ee7b7",
    },
    Theme {
        gradient: "linear-gradient(135deg, #ec4899, #f43f5e)",
        glow_color: "rgba(236, 72, 153, 0.5)",
        accent: "#f9a8d4",
    },
    Theme {
        gradient: "linear-gradient(135deg, #f59e0b, #f97316)",
        glow_color: "rgba(245, 158, 11, 0.5)",
        accent: "#fcd34d",
    },
];

fn theme_for(index: usize) -> &'static Theme {
    &THEMES[index % THEMES.len()]
}

const SKILLS: [(&str, &str, &str); 6] = [
    ("Adobe Premiere Pro", "🎞", "Video"),
    ("After Effects", "🎬", "Video"),
    ("Graphic Design", "✒", "Design"),
    ("React Native", "📱", "Dev"),
    ("Python", "⌨", "Dev"),
    ("AI Content Creation", "🧠", "AI"),
];

#[derive(Clone, PartialEq, Default)]
struct PageContent {
    projects: Rc<Vec<Project>>,
    social: Rc<SocialLinks>,
}

async fn load_content() -> PageContent {
    let client = match ContentClient::from_config() {
        Ok(client) => client,
        Err(err) => {
            warn!("Skipping content load: {}", err);
            return PageContent::default();
        }
    };

    let projects = client.projects().await.unwrap_or_else(|err| {
        warn!("Failed to load projects: {}", err);
        Vec::new()
    });
    let social = client.social_links().await.unwrap_or_else(|err| {
        warn!("Failed to load social links: {}", err);
        SocialLinks::default()
    });

    PageContent {
        projects: Rc::new(projects),
        social: Rc::new(social),
    }
}

fn project_card(index: usize, project: &Project) -> Html {
    let theme = theme_for(index);
    let (href, target) = project.link_target();
    let title = project.title_or_default().to_string();

    let preview = match project.image_url.as_deref() {
        Some(url) => html! {
            <img class="project-image" src={url.to_string()} alt={title} />
        },
        None => html! {
            <div class="project-placeholder">
                <div class="project-placeholder-icon" style={format!("background: {};", theme.gradient)}>
                    { icons::external_link(20) }
                </div>
                <span>{"Preview"}</span>
            </div>
        },
    };

    let tags = project.tags();

    html! {
        <TiltCard
            index={index}
            href={AttrValue::from(href.to_string())}
            target={AttrValue::Static(target)}
            rel={AttrValue::Static("noopener noreferrer")}
            glow_color={AttrValue::Static(theme.glow_color)}
        >
            <div class="project-card" style={format!("--accent: {};", theme.accent)}>
                <div class="project-media">
                    <div class="project-tint" style={format!("background: {};", theme.gradient)}></div>
                    { preview }
                </div>
                <div class="project-body">
                    <h3 class="project-title">{ project.title.clone().unwrap_or_default() }</h3>
                    <p class="project-description">{ project.description.clone().unwrap_or_default() }</p>
                    if !tags.is_empty() {
                        <div class="project-tags">
                            { for tags.iter().map(|tag| html! { <span class="project-tag">{ tag.clone() }</span> }) }
                        </div>
                    }
                    <div class="project-cta">
                        <span>{"View Details →"}</span>
                        { icons::external_link(16) }
                    </div>
                </div>
            </div>
        </TiltCard>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let capabilities = use_capabilities();
    let content = use_state(PageContent::default);
    let hero_ref = use_node_ref();
    let hero_content_ref = use_node_ref();

    {
        let content = content.clone();
        use_mount(move || {
            spawn_local(async move {
                let loaded = load_content().await;
                info!("Loaded {} projects", loaded.projects.len());
                content.set(loaded);
            });
        });
    }

    // Hero text drifts and fades as the hero scrolls away.
    {
        let hero_ref = hero_ref.clone();
        let hero_content_ref = hero_content_ref.clone();
        use_effect_with_deps(
            move |parallax| {
                let mut listeners = Listeners::default();
                if *parallax {
                    let apply = move || {
                        let Some(hero) = hero_ref.cast::<Element>() else {
                            return;
                        };
                        let rect = hero.get_bounding_client_rect();
                        let parallax = Parallax::for_hero(scroll_progress(rect.top(), rect.height()));
                        dom::set_style(&hero_content_ref, "transform", &parallax.transform());
                        dom::set_style(&hero_content_ref, "opacity", &parallax.opacity.to_string());
                    };
                    apply();
                    if let Some(window) = web_sys::window() {
                        listeners.attach(&window, "scroll", move |_| apply());
                    }
                }
                move || drop(listeners)
            },
            !capabilities.reduced_motion,
        );
    }

    let year = chrono::Local::now().year();

    html! {
        <div class="home">
            <style>{ tilt_card::STYLES }</style>
            <style>{ section_reveal::STYLES }</style>
            <style>
                {r#"
                    .home {
                        min-height: 100vh;
                        background: #050505;
                        color: #fff;
                        overflow-x: hidden;
                        font-family: Inter, system-ui, sans-serif;
                    }
                    .home ::selection { background: rgba(236, 72, 153, 0.3); }
                    .home main {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .home a { color: inherit; text-decoration: none; }
                    .home-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 2rem 0;
                        animation: fade-in 0.6s ease-out both;
                    }
                    .home-logo { font-size: 1.5rem; font-weight: 700; letter-spacing: -0.025em; }
                    .home-logo span { color: #ec4899; }
                    .header-contact {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.625rem 1.25rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        font-size: 0.875rem;
                        font-weight: 500;
                        backdrop-filter: blur(12px);
                        transition: background 0.3s;
                    }
                    .header-contact:hover { background: rgba(255, 255, 255, 0.1); }
                    .online-dot {
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: #34d399;
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .hero {
                        position: relative;
                        min-height: 85vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 2.5rem 0 8rem;
                    }
                    .hero-content { max-width: 64rem; will-change: transform, opacity; }
                    .hero-content > * { animation: fade-up 0.8s ease-out both; }
                    .hero-content > *:nth-child(2) { animation-delay: 0.15s; }
                    .hero-content > *:nth-child(3) { animation-delay: 0.3s; }
                    .hero-content > *:nth-child(4) { animation-delay: 0.45s; }
                    .hero-kicker {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 2rem;
                        color: #d1d5db;
                        font-size: 0.875rem;
                        font-weight: 500;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .hero-kicker::before {
                        content: "";
                        width: 3rem;
                        height: 2px;
                        background: linear-gradient(to right, #a855f7, #ec4899);
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 7vw, 6rem);
                        line-height: 1.1;
                        font-weight: 700;
                        letter-spacing: -0.025em;
                        margin: 0 0 2rem;
                    }
                    .hero-highlight {
                        background: linear-gradient(to right, #c084fc, #ec4899, #ef4444, #c084fc);
                        background-size: 200% auto;
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        animation: gradient-shift 6s linear infinite;
                    }
                    .hero-intro {
                        color: #a3a3a3;
                        font-size: clamp(1rem, 2vw, 1.5rem);
                        line-height: 1.6;
                        max-width: 48rem;
                        margin: 0 0 3rem;
                    }
                    .hero-intro strong {
                        color: #fff;
                        text-decoration: underline;
                        text-underline-offset: 4px;
                        text-decoration-color: rgba(168, 85, 247, 0.5);
                    }
                    .hero-actions { display: flex; flex-wrap: wrap; gap: 1.25rem; }
                    .hero-button {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        transition: transform 0.2s, background 0.3s, border-color 0.3s;
                    }
                    .hero-button:hover { transform: scale(1.05); }
                    .hero-button:active { transform: scale(0.95); }
                    .hero-button.primary { background: #fff; color: #000; font-weight: 700; }
                    .hero-button.secondary { border: 1px solid rgba(255, 255, 255, 0.2); font-weight: 500; }
                    .hero-button.secondary:hover { background: rgba(255, 255, 255, 0.05); border-color: rgba(255, 255, 255, 0.4); }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        color: #737373;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        animation: fade-in 1s ease-out 2s both;
                    }
                    .scroll-mouse {
                        width: 1.25rem;
                        height: 2rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        display: flex;
                        justify-content: center;
                        padding-top: 0.375rem;
                        box-sizing: border-box;
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .scroll-wheel {
                        width: 4px;
                        height: 6px;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.6);
                        animation: wheel 2s ease-in-out infinite;
                    }
                    .home-section { padding: 8rem 0; position: relative; }
                    .home-section h2 { font-size: clamp(1.875rem, 4vw, 3rem); font-weight: 700; margin: 0 0 1.5rem; }
                    .section-lead { color: #a3a3a3; font-size: 1.125rem; max-width: 42rem; margin: 0 0 4rem; }
                    .skills-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
                        gap: 1.5rem;
                    }
                    .skill-card {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.25rem;
                        padding: 1.5rem;
                        border-radius: 1.5rem;
                        text-align: center;
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        transition: transform 0.3s, background 0.5s, border-color 0.5s, box-shadow 0.3s;
                    }
                    .skill-card:hover {
                        transform: translateY(-8px) scale(1.04);
                        background: rgba(255, 255, 255, 0.06);
                        border-color: rgba(255, 255, 255, 0.15);
                        box-shadow: 0 20px 40px -15px rgba(168, 85, 247, 0.15);
                    }
                    .skill-icon {
                        font-size: 1.5rem;
                        padding: 1rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        box-shadow: inset 0 0 0 1px rgba(255, 255, 255, 0.1);
                    }
                    .skill-name { font-weight: 600; color: #e5e5e5; margin: 0; }
                    .skill-category {
                        margin: 0.5rem 0 0;
                        color: #737373;
                        font-size: 0.75rem;
                        font-weight: 500;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .projects { border-top: 1px dashed rgba(255, 255, 255, 0.1); }
                    .projects-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr));
                        gap: 2.5rem;
                    }
                    .projects-empty {
                        text-align: center;
                        padding: 5rem 0;
                        color: #a3a3a3;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.05);
                    }
                    .project-card {
                        display: flex;
                        flex-direction: column;
                        height: 100%;
                        border-radius: 2rem;
                        overflow: hidden;
                        background: rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: border-color 0.5s;
                    }
                    .project-card:hover { border-color: rgba(255, 255, 255, 0.2); }
                    .project-media {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        overflow: hidden;
                        background: rgba(17, 24, 39, 0.8);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .project-tint { position: absolute; inset: 0; opacity: 0.1; transition: opacity 0.7s; }
                    .project-card:hover .project-tint { opacity: 0.3; }
                    .project-image {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.9;
                        transition: transform 1s ease-out, opacity 0.5s;
                    }
                    .project-card:hover .project-image { transform: scale(1.1); opacity: 1; }
                    .project-placeholder {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        color: rgba(255, 255, 255, 0.3);
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .project-placeholder-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        opacity: 0.3;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .project-body { display: flex; flex-direction: column; flex-grow: 1; padding: 2rem; }
                    .project-title { font-size: 1.5rem; font-weight: 700; margin: 0 0 0.75rem; transition: color 0.3s; }
                    .project-card:hover .project-title { color: var(--accent); }
                    .project-description {
                        color: #a3a3a3;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        margin: 0 0 1.5rem;
                        flex-grow: 1;
                        display: -webkit-box;
                        -webkit-line-clamp: 3;
                        -webkit-box-orient: vertical;
                        overflow: hidden;
                    }
                    .project-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem; }
                    .project-tag {
                        padding: 0.25rem 0.75rem;
                        font-size: 11px;
                        font-weight: 500;
                        color: rgba(255, 255, 255, 0.5);
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 9999px;
                    }
                    .project-cta {
                        margin-top: auto;
                        padding-top: 1.25rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        color: #737373;
                        font-size: 0.875rem;
                        font-weight: 500;
                        transition: color 0.3s;
                    }
                    .project-card:hover .project-cta { color: #fff; }
                    .contact { text-align: center; }
                    .contact-panel {
                        position: relative;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 4rem;
                        border-radius: 3rem;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(40px);
                        overflow: hidden;
                    }
                    .contact-panel h2 {
                        font-size: clamp(1.5rem, 5vw, 3.75rem);
                        background: linear-gradient(to bottom, #fff, rgba(255, 255, 255, 0.6));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .contact-panel .section-lead { margin: 0 auto 3rem; }
                    .socials { margin-top: 4rem; padding-top: 2rem; border-top: 1px solid rgba(255, 255, 255, 0.05); }
                    .socials-title {
                        color: #737373;
                        font-size: 0.875rem;
                        font-weight: 500;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                        margin: 0 0 1rem;
                    }
                    .socials-list { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; color: #737373; }
                    .social-link {
                        display: inline-flex;
                        padding: 0.75rem;
                        border-radius: 1rem;
                        transition: transform 0.2s, color 0.2s, background 0.2s;
                    }
                    .social-link:hover {
                        color: var(--hover-color);
                        background: rgba(255, 255, 255, 0.05);
                        transform: translateY(-6px) scale(1.15);
                    }
                    .social-link:active { transform: scale(0.9); }
                    .home-footer {
                        padding: 3rem 1rem;
                        text-align: center;
                        color: #525252;
                        font-size: 0.875rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    @keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
                    @keyframes fade-up {
                        from { opacity: 0; transform: translateY(40px); }
                        to { opacity: 1; transform: none; }
                    }
                    @keyframes pulse { 0%, 100% { opacity: 0.3; } 50% { opacity: 0.7; } }
                    @keyframes wheel { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(12px); } }
                    @keyframes gradient-shift { from { background-position: 0% center; } to { background-position: 200% center; } }
                    @media (max-width: 768px) {
                        .header-contact { display: none; }
                        .home-section { padding: 4rem 0; }
                        .hero-actions { flex-direction: column; }
                        .contact-panel { padding: 2.5rem 1.5rem; border-radius: 2rem; }
                        .skills-grid { grid-template-columns: repeat(2, 1fr); gap: 0.75rem; }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .home *, .home *::before, .home *::after {
                            animation-duration: 0.01ms !important;
                            animation-iteration-count: 1 !important;
                        }
                    }
                "#}
            </style>

            <CustomCursor />
            <AnimatedBackground />

            <main>
                <header class="home-header">
                    <div class="home-logo">{"dilshan"}<span>{".creative"}</span></div>
                    <a href="#contact" class="header-contact cursor-hover">
                        { icons::mail(16) }
                        <span>{"Get in touch"}</span>
                        <span class="online-dot"></span>
                    </a>
                </header>

                <section ref={hero_ref} class="hero">
                    <div ref={hero_content_ref} class="hero-content">
                        <div class="hero-kicker">{"Creative + Tech"}</div>
                        <h1>
                            {"I build "}<span class="hero-highlight">{"digital"}</span><br />
                            {"experiences."}
                        </h1>
                        <p class="hero-intro">
                            {"Hi, I'm Dilshan. A Multi-Disciplinary Professional blending creative vision with technical execution. Specializing in "}
                            <strong>{"Video Editing"}</strong>{", "}
                            <strong>{"UI/UX Design"}</strong>{", and "}
                            <strong>{"Mobile App Development"}</strong>{"."}
                        </p>
                        <div class="hero-actions">
                            <a href={CV_PATH} download="" class="hero-button primary cursor-hover">
                                {"Download CV"}
                                { icons::download(20) }
                            </a>
                            <a href="#projects" class="hero-button secondary cursor-hover">
                                {"View Projects"}
                                { icons::arrow_down(20) }
                            </a>
                        </div>
                    </div>
                    <div class="scroll-indicator">
                        <span>{"Scroll"}</span>
                        <div class="scroll-mouse"><div class="scroll-wheel"></div></div>
                    </div>
                </section>

                <TechStack />

                <section id="skills" class="home-section">
                    <SectionReveal>
                        <h2>{"Core Skills"}</h2>
                        <p class="section-lead">{"Technologies and tools I use to bring ideas to life, from code to content."}</p>
                    </SectionReveal>
                    <div class="skills-grid">
                        {
                            SKILLS.iter().enumerate().map(|(index, (name, icon, category))| html! {
                                <SectionReveal delay={0.1 + index as f64 * 0.15}>
                                    <div class="skill-card cursor-hover">
                                        <div class="skill-icon">{ *icon }</div>
                                        <div>
                                            <h3 class="skill-name">{ *name }</h3>
                                            <p class="skill-category">{ *category }</p>
                                        </div>
                                    </div>
                                </SectionReveal>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="projects" class="home-section projects">
                    <SectionReveal>
                        <h2>{"Featured Work"}</h2>
                        <p class="section-lead">{"A selection of my recent projects."}</p>
                    </SectionReveal>
                    if content.projects.is_empty() {
                        <div class="projects-empty">
                            <p>{"Loading projects or no projects found."}</p>
                        </div>
                    } else {
                        <div class="projects-grid">
                            {
                                content.projects.iter().enumerate()
                                    .map(|(index, project)| project_card(index, project))
                                    .collect::<Html>()
                            }
                        </div>
                    }
                </section>

                <section id="contact" class="home-section contact">
                    <SectionReveal>
                        <div class="contact-panel">
                            <h2>{"Let's work together."}</h2>
                            <p class="section-lead">
                                {"Whether you need a mobile app, video production, or a complete brand overhaul, drop me a message and I'll get back to you."}
                            </p>
                            <ContactForm />
                            <div class="socials">
                                <p class="socials-title">{"Or find me on"}</p>
                                <div class="socials-list">
                                    {
                                        content.social.entries().into_iter().map(|link| {
                                            let new_tab = link.kind.opens_new_tab();
                                            html! {
                                                <a
                                                    href={link.href}
                                                    target={new_tab.then(|| "_blank")}
                                                    rel={new_tab.then(|| "noopener noreferrer")}
                                                    class="social-link cursor-hover"
                                                    aria-label={link.kind.label()}
                                                    style={format!("--hover-color: {};", link.kind.hover_color())}
                                                >
                                                    { icons::social(link.kind, 28) }
                                                </a>
                                            }
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        </div>
                    </SectionReveal>
                </section>

                <SectionReveal delay={0.1}>
                    <footer class="home-footer">
                        <p>{ format!("© {} Dilshan Madushankha. All rights reserved.", year) }</p>
                    </footer>
                </SectionReveal>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_cycle_by_index() {
        assert_eq!(theme_for(0).glow_color, "rgba(168, 85, 247, 0.5)");
        assert_eq!(theme_for(4).glow_color, "rgba(245, 158, 11, 0.5)");
        assert_eq!(theme_for(5).glow_color, theme_for(0).glow_color);
        assert_eq!(theme_for(12).accent, theme_for(2).accent);
    }
}
