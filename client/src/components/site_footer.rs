//! Page footer.

use leptos::prelude::*;

pub const CONTACT_EMAIL: &str = "kamome_2024.stu@globis.ac.jp";
pub const CONTACT_MAILTO: &str = "mailto:kamome_2024.stu@globis.ac.jp";

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <p>
                    "お問い合わせ: "
                    <a href=CONTACT_MAILTO>{CONTACT_EMAIL}</a>
                </p>
                <p class="site-footer__copyright">"© 2024 かもめ会議. All rights reserved."</p>
            </div>
        </footer>
    }
}
