//! Static "ABOUT" section.

use leptos::prelude::*;

const TAGLINE: &str = "参加者全員が1歩踏み出すきっかけを、ヨコハマから";

const INTRO: &str = "かもめ会議とはグロービス経営大学院の公認クラブであるグロービス横浜活性化クラブ(GYAC)が主催する、単科生・本科生・卒業生のためのビジネスカンファレンスです。";

/// `(bold lead, body)` for each highlight bullet.
const HIGHLIGHTS: &[(&str, &str)] = &[
    ("起業家精神の真髄に触れる：", "横浜ゆかりの起業家たちが、失敗を恐れず挑戦する勇気をリアルな体験とともに伝授。"),
    (
        "社会課題へのアプローチを学ぶ：",
        "未病対策やサーキュラーエコノミーなど、今注目の分野で活躍する実務者から最前線の取り組みを聞く。",
    ),
    ("未来を創る仲間と出会う：", "「ヨコハマ未来創造会議」のような、次世代を担う若者たちの斬新な発想に触れ、刺激を得る。"),
    (
        "意外なキャリアの可能性を発見：",
        "宇宙ビジネスやフードテック、地方創生など、思わぬところにあなたのスキルが活きるチャンスが。",
    ),
];

const CLOSING: &str = "堅苦しさは一切なし。肩の力を抜いて参加できる、でも中身は本気の1日。「自分も何かできるかも」そんな小さな思いが、大きな一歩につながる瞬間を、ぜひ体感してください。";

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section section--white">
            <div class="container">
                <h2 class="section__title">"ABOUT"</h2>
                <h3 class="about__tagline">{TAGLINE}</h3>
                <p class="about__text">{INTRO}</p>
                <ul class="about__highlights">
                    {HIGHLIGHTS
                        .iter()
                        .map(|(lead, body)| {
                            view! {
                                <li>
                                    <strong>{*lead}</strong>
                                    " "
                                    {*body}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <p class="about__text">{CLOSING}</p>
            </div>
        </section>
    }
}
