use yew::prelude::*;

use crate::services::content::SocialKind;

fn stroked(size: u32, paths: Html) -> Html {
    html! {
        <svg
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { paths }
        </svg>
    }
}

pub fn github(size: u32) -> Html {
    stroked(size, html! {
        <>
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
            <path d="M9 18c-4.51 2-5-2-7-2" />
        </>
    })
}

pub fn linkedin(size: u32) -> Html {
    stroked(size, html! {
        <>
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
            <rect width="4" height="12" x="2" y="9" />
            <circle cx="4" cy="4" r="2" />
        </>
    })
}

pub fn facebook(size: u32) -> Html {
    stroked(size, html! {
        <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" />
    })
}

pub fn layers(size: u32) -> Html {
    stroked(size, html! {
        <>
            <path d="M12 2L2 7l10 5 10-5-10-5Z" />
            <path d="M2 17l10 5 10-5" />
            <path d="M2 12l10 5 10-5" />
        </>
    })
}

pub fn sparkle(size: u32) -> Html {
    stroked(size, html! {
        <path d="M12 3l1.9 5.8L20 10.7l-6.1 1.9L12 18.5l-1.9-5.9L4 10.7l6.1-1.9z" />
    })
}

pub fn phone(size: u32) -> Html {
    stroked(size, html! {
        <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
    })
}

pub fn mail(size: u32) -> Html {
    stroked(size, html! {
        <>
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </>
    })
}

pub fn download(size: u32) -> Html {
    stroked(size, html! {
        <>
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
            <polyline points="7 10 12 15 17 10" />
            <line x1="12" x2="12" y1="15" y2="3" />
        </>
    })
}

pub fn arrow_down(size: u32) -> Html {
    stroked(size, html! {
        <>
            <path d="M12 5v14" />
            <path d="m19 12-7 7-7-7" />
        </>
    })
}

pub fn external_link(size: u32) -> Html {
    stroked(size, html! {
        <>
            <path d="M15 3h6v6" />
            <path d="M10 14 21 3" />
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
        </>
    })
}

pub fn social(kind: SocialKind, size: u32) -> Html {
    match kind {
        SocialKind::Github => github(size),
        SocialKind::Linkedin => linkedin(size),
        SocialKind::Facebook => facebook(size),
        SocialKind::Freelancer => layers(size),
        SocialKind::Fiverr => sparkle(size),
        SocialKind::Phone => phone(size),
    }
}
