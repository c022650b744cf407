//! "TIME TABLE" section: one row per schedule entry, session cards beneath.

#[cfg(test)]
#[path = "timetable_test.rs"]
mod timetable_test;

use leptos::prelude::*;

use crate::components::session_card::SessionCard;
use crate::state::schedule::{EntryKind, SCHEDULE, ScheduleEntry};
use crate::state::timetable::SessionKey;
use crate::util::text::label_lines;

fn label_class(entry: &ScheduleEntry) -> &'static str {
    if entry.is_highlighted() { "timetable__label timetable__label--highlight" } else { "timetable__label" }
}

fn sessions_class(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Breakout => "timetable__sessions timetable__sessions--grid",
        EntryKind::Plenary | EntryKind::Simple => "timetable__sessions",
    }
}

#[component]
pub fn TimetableSection() -> impl IntoView {
    view! {
        <section id="timetable" class="section section--grey">
            <div class="container">
                <h2 class="section__title">"TIME TABLE"</h2>
                <div class="timetable">
                    <div class="timetable__spine" aria-hidden="true"></div>
                    {SCHEDULE
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <TimetableRow index=index entry=entry/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimetableRow(index: usize, entry: &'static ScheduleEntry) -> impl IntoView {
    let sessions = entry.has_sessions().then(|| {
        view! {
            <div class=sessions_class(entry.kind)>
                {(0..entry.sessions().len())
                    .map(|session| {
                        view! {
                            <div class="timetable__session">
                                <SessionCard session_key=SessionKey::new(index, session)/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class="timetable__row">
            <div class="timetable__head">
                <div>
                    <span class="timetable__time">{entry.time_range()}</span>
                    {entry.duration_label.map(|d| view! { <p class="timetable__duration">{d}</p> })}
                </div>
                <span class=label_class(entry)>
                    {label_lines(entry.event_label)
                        .map(|line| view! { <span class="timetable__label-line">{line}</span> })
                        .collect_view()}
                </span>
            </div>
            {sessions}
        </div>
    }
}
