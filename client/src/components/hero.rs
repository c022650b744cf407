//! Hero section: logo, countdown flip cards, and the sold-out notice.

use leptos::prelude::*;

use crate::components::floating_header::LOGO_ALT;
use crate::components::wave_backdrop::WaveBackdrop;
use crate::state::countdown::{CountdownState, UNIT_LABELS};

/// DOM id of the hero section; the floating header measures it on scroll.
pub const HERO_ID: &str = "hero";

pub const HERO_LOGO_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/kagome_logo-lAJYOCafse7ibEINGEmouKC5gOfEIp.png";

const SOLD_OUT_BANNER: &str = "チケットは完売いたしました";
const REGISTER_LABEL: &str = "参加申し込み";

/// One countdown digit pair with its unit label.
#[component]
pub fn FlipCard(#[prop(into)] value: Signal<String>, label: &'static str) -> impl IntoView {
    view! {
        <div class="flip-card">
            <div class="flip-card__value">{move || value.get()}</div>
            <div class="flip-card__label">{label}</div>
        </div>
    }
}

#[component]
pub fn HeroSection(countdown: ReadSignal<CountdownState>) -> impl IntoView {
    let cards = UNIT_LABELS
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let value = Signal::derive(move || countdown.with(|c| c.cards()[i].0.clone()));
            view! { <FlipCard value=value label=label/> }
        })
        .collect_view();

    view! {
        <div id=HERO_ID class="hero">
            <WaveBackdrop/>
            <div class="hero__content">
                <div class="hero__logo">
                    <img src=HERO_LOGO_URL alt=LOGO_ALT width="400" height="300"/>
                </div>
                <div class="hero__countdown">
                    <h2 class="hero__coming-soon">"COMING SOON"</h2>
                    <div class="hero__cards">{cards}</div>
                </div>
                <div class="hero__sold-out">
                    <span class="icon" aria-hidden="true">"⚠"</span>
                    {SOLD_OUT_BANNER}
                </div>
                <button class="hero__register btn btn--disabled" disabled=true>
                    {REGISTER_LABEL}
                </button>
            </div>
        </div>
    }
}
