//! Fixed header with the site logo and in-page navigation.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::hero::HERO_ID;
use crate::state::header::HeaderState;
#[cfg(feature = "hydrate")]
use crate::util::dom::element_bottom;

pub const HEADER_LOGO_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/kamome_logo_padding-VBJ3I4qnKZ8Fa7oZLYgwD1xvXWtFf8.png";
pub const LOGO_ALT: &str = "かもめ会議 2024 ロゴ";

/// `(label, anchor)` pairs in nav order.
pub const NAV_LINKS: &[(&str, &str)] =
    &[("ABOUT", "#about"), ("TIME TABLE", "#timetable"), ("参加申し込み", "#registration")];

/// Floating header. The logo fades in once the hero has scrolled out of view.
#[component]
pub fn FloatingHeader() -> impl IntoView {
    let header = RwSignal::new(HeaderState::default());

    #[cfg(feature = "hydrate")]
    {
        let listener = window_event_listener(leptos::ev::scroll, move |_| {
            let Some(bottom) = element_bottom(HERO_ID) else {
                return;
            };
            let mut next = header.get_untracked();
            if next.on_scroll(bottom) {
                header.set(next);
            }
        });
        on_cleanup(move || listener.remove());
    }

    let logo_class = move || {
        if header.get().logo_visible {
            "floating-header__logo floating-header__logo--visible"
        } else {
            "floating-header__logo"
        }
    };

    view! {
        <header class="floating-header">
            <div class="floating-header__bar">
                <div class="floating-header__inner container">
                    <div class=logo_class>
                        <img src=HEADER_LOGO_URL alt=LOGO_ALT width="192" height="80"/>
                    </div>
                    <nav>
                        <ul class="floating-header__nav">
                            {NAV_LINKS
                                .iter()
                                .map(|(label, href)| {
                                    view! {
                                        <li>
                                            <a href=*href>{*label}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>
                </div>
            </div>
        </header>
    }
}
