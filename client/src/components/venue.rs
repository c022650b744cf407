//! "開催概要" section: date, venue, access, and organizer cards.

use leptos::prelude::*;

pub const ACCESS_URL: &str = "https://mba.globis.ac.jp/inquiry/#yokohama";
pub const ORGANIZER_URL: &str = "https://www.facebook.com/groups/gyac.yokohama";

/// External link at the bottom of a venue card.
#[derive(Clone, Copy)]
struct CardLink {
    href: &'static str,
    text: &'static str,
    label: &'static str,
}

#[derive(Clone, Copy)]
struct VenueCard {
    icon: &'static str,
    heading: &'static str,
    lines: &'static [&'static str],
    link: Option<CardLink>,
}

const CARDS: &[VenueCard] = &[
    VenueCard {
        icon: "📅",
        heading: "開催日時",
        lines: &["2024年11月10日（日）", "10:00-17:15 (受付開始 09:30)"],
        link: None,
    },
    VenueCard {
        icon: "🏢",
        heading: "会場",
        lines: &["グロービス経営大学院　横浜・特設キャンパス", "〒220-0005　神奈川県横浜市西区南幸1-1-1 JR横浜タワー14F"],
        link: None,
    },
    VenueCard {
        icon: "📍",
        heading: "アクセス",
        lines: &[
            "JR横浜駅 北改札口、きた西口出口を出て左／徒歩5分",
            "JR横浜タワー内に14Fへの直通エレベーターはございませんので、12Fで13-21F行きエレベーターまたはエスカレーターにお乗り換えいただき、14Fまでお越しください。",
        ],
        link: Some(CardLink { href: ACCESS_URL, text: "詳細なアクセス情報はこちら", label: "詳細なアクセス情報" }),
    },
    VenueCard {
        icon: "👤",
        heading: "主催",
        lines: &["グロービス横浜活性化クラブ(GYAC)"],
        link: Some(CardLink { href: ORGANIZER_URL, text: "Facebook", label: "GYAC Facebook グループ" }),
    },
];

#[component]
pub fn VenueSection() -> impl IntoView {
    view! {
        <section class="section section--grey">
            <div class="container">
                <h2 class="section__title">"開催概要"</h2>
                <div class="venue">
                    {CARDS.iter().map(|card| view! { <VenueCardView card=*card/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn VenueCardView(card: VenueCard) -> impl IntoView {
    view! {
        <div class="card venue__card">
            <h3 class="venue__heading">
                <span class="icon" aria-hidden="true">{card.icon}</span>
                {card.heading}
            </h3>
            {card.lines.iter().map(|line| view! { <p class="venue__line">{*line}</p> }).collect_view()}
            {card
                .link
                .map(|link| {
                    view! {
                        <a class="link" href=link.href target="_blank" rel="noopener noreferrer" aria-label=link.label>
                            {link.text}
                        </a>
                    }
                })}
        </div>
    }
}
