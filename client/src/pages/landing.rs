//! Landing page: the only route.
//!
//! ARCHITECTURE
//! ============
//! The page owns the countdown signal and its 1 s ticker, and composes the
//! sections in fixed order. The ticker only runs after hydration; the
//! server render shows the zero state.

use leptos::prelude::*;

use crate::components::about::AboutSection;
use crate::components::floating_header::FloatingHeader;
use crate::components::hero::HeroSection;
use crate::components::registration::RegistrationSection;
use crate::components::site_footer::SiteFooter;
use crate::components::timetable::TimetableSection;
use crate::components::venue::VenueSection;
use crate::state::countdown::CountdownState;
#[cfg(feature = "hydrate")]
use crate::state::countdown::{Countdown, TICK_PERIOD_MS, Tick, resolve_target};
#[cfg(feature = "hydrate")]
use crate::util::clock;
#[cfg(feature = "hydrate")]
use crate::util::task::TaskHandle;

#[component]
pub fn LandingPage() -> impl IntoView {
    let (countdown, set_countdown) = signal(CountdownState::ZERO);

    #[cfg(feature = "hydrate")]
    {
        let ticker = TaskHandle::new();
        let live = ticker.clone();
        leptos::task::spawn_local(async move {
            let mut engine = Countdown::new(resolve_target(clock::offset_at_local));
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TICK_PERIOD_MS)).await;
                if !live.is_live() {
                    break;
                }
                match engine.tick(clock::now()) {
                    Tick::Running(state) => set_countdown.set(state),
                    Tick::Finished => {
                        set_countdown.set(CountdownState::ZERO);
                        log::info!("countdown reached {:?}; ticker stopped", engine.target());
                        live.cancel();
                        break;
                    }
                    Tick::Stopped => break,
                }
            }
        });
        on_cleanup(move || ticker.cancel());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_countdown;

    view! {
        <div class="page">
            <FloatingHeader/>
            <main class="page__main">
                <HeroSection countdown=countdown/>
                <AboutSection/>
                <TimetableSection/>
                <RegistrationSection/>
                <VenueSection/>
            </main>
            <SiteFooter/>
        </div>
    }
}
