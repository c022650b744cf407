//! Session summary card with its detail dialog.
//!
//! The card opens its own [`SessionKey`] in the shared
//! [`TimetableState`]; the dialog renders while that key is open.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::schedule::{ScheduleEntry, Session, Speaker};
use crate::state::timetable::{SessionKey, TimetableState};
use crate::util::text::label_lines;

pub const SOLD_OUT_BADGE: &str = "満員御礼";
pub const SOLD_OUT_NOTICE: &str = "※ こちらの分科会は満員につき締切となりました。ご了承ください。";

/// Collapsed card for the session at `session_key`. Renders nothing for an unknown key.
#[component]
pub fn SessionCard(session_key: SessionKey) -> impl IntoView {
    let Some((entry, session)) = session_key.resolve() else {
        return ().into_any();
    };
    let timetable = expect_context::<RwSignal<TimetableState>>();

    let on_open = move |_| {
        timetable.update(|t| {
            t.open(session_key);
        });
    };
    let on_close = Callback::new(move |()| {
        timetable.update(|t| {
            t.close(session_key);
        });
    });
    let is_open = move || timetable.with(|t| t.is_open(session_key));

    view! {
        <div class="session-card" role="button" tabindex="0" on:click=on_open>
            <span class="session-card__label">{session.event_label}</span>
            {session.is_sold_out().then(|| view! { <span class="sold-out-badge">{SOLD_OUT_BADGE}</span> })}
            <h3 class="session-card__title">{session.title}</h3>
            <p class="session-card__speakers">{session.speaker_names()}</p>
            <div class="session-card__corner" aria-hidden="true"></div>
        </div>
        <Show when=is_open>
            <SessionDialog entry=entry session=session on_close=on_close/>
        </Show>
    }
    .into_any()
}

/// Modal detail view. Closes on backdrop click, the close button, or Escape.
#[component]
fn SessionDialog(entry: &'static ScheduleEntry, session: &'static Session, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--session"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                autofocus=true
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button class="dialog__close" title="閉じる" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                <div class="session-dialog__header">
                    <span class="session-dialog__time">{entry.time_range()}</span>
                    {entry.duration_label.map(|d| view! { <span class="session-dialog__duration">{d}</span> })}
                    <br/>
                    <span class="session-dialog__label">{session.event_label}</span>
                </div>
                <div class="session-dialog__body">
                    <h3 class="session-dialog__title">{session.title}</h3>
                    {session.is_sold_out().then(|| view! { <p class="session-dialog__sold-out">{SOLD_OUT_NOTICE}</p> })}
                    <div class="session-dialog__description">
                        {label_lines(session.description).map(|line| view! { <p>{line}</p> }).collect_view()}
                    </div>
                    <div class="session-dialog__speakers">
                        {session.speakers.iter().map(|speaker| view! { <SpeakerRow speaker=*speaker/> }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SpeakerRow(speaker: Speaker) -> impl IntoView {
    view! {
        <div class="speaker-row">
            <img class="speaker-row__avatar" src=speaker.avatar_url() alt=speaker.name width="40" height="40"/>
            <div>
                <p class="speaker-row__name">{speaker.name}</p>
                <p class="speaker-row__org">{speaker.organization}</p>
                <p class="speaker-row__position">{speaker.position}</p>
            </div>
        </div>
    }
}
