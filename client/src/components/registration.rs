//! Registration section. Ticket sales have closed, so it is a static notice.

use leptos::prelude::*;

use crate::components::site_footer::{CONTACT_EMAIL, CONTACT_MAILTO};

const NOTICE_TITLE: &str = "チケット完売のお知らせ";
const NOTICE_BODY: &str =
    "多数のお申し込みをいただき、誠にありがとうございました。おかげさまで、チケットは完売いたしました。";

/// `(heading, body)` paragraphs under the notice.
const FOLLOW_UPS: &[(&str, &str)] = &[
    ("キャンセル待ちについて", "現在、キャンセル待ちの受付は行っておりません。ご了承ください。"),
    ("今後のイベント情報", "今後のイベント情報については、公式SNSアカウントやメールマガジンにてお知らせいたします。"),
];

const CONTACT_OFFICE: &str = "かもめ会議運営事務局";
const CLOSED_BUTTONS: [&str; 2] = ["チケット販売終了", "セッション申し込み終了"];

#[component]
pub fn RegistrationSection() -> impl IntoView {
    view! {
        <section id="registration" class="section section--white">
            <div class="container">
                <h2 class="section__title">"参加申し込み"</h2>
                <div class="card registration">
                    <h3 class="registration__status">"申し込み状況"</h3>
                    <div class="registration__notice">
                        <p class="registration__notice-title">
                            <span class="icon" aria-hidden="true">"⚠"</span>
                            {NOTICE_TITLE}
                        </p>
                        <p>{NOTICE_BODY}</p>
                    </div>
                    {FOLLOW_UPS
                        .iter()
                        .map(|(heading, body)| {
                            view! {
                                <h4 class="registration__heading">{*heading}</h4>
                                <p class="registration__text">{*body}</p>
                            }
                        })
                        .collect_view()}
                    <h4 class="registration__heading">"お問い合わせ"</h4>
                    <p>{CONTACT_OFFICE}</p>
                    <p class="registration__text">
                        <a class="link" href=CONTACT_MAILTO>{CONTACT_EMAIL}</a>
                    </p>
                    <div class="registration__actions">
                        {CLOSED_BUTTONS
                            .into_iter()
                            .map(|label| view! { <button class="btn btn--disabled" disabled=true>{label}</button> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
