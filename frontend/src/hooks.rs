use log::{info, warn};
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::animation::animator::ParticleAnimator;
use crate::animation::host::{BrowserFrames, BrowserTimers, BrowserViewport, CanvasSurface};
use crate::animation::loader::{LoaderPhase, LoaderSlot, LoaderStatus, PhaseMachine, PhaseSchedule};
use crate::config;
use crate::layout;

/// Loader status for the calling component. The phase machine is released
/// as soon as it reports ready, or when the component unmounts.
#[hook]
pub fn use_loader_phase() -> LoaderStatus {
    let phase = use_state(|| LoaderPhase::INITIAL);
    let slot = use_mut_ref(LoaderSlot::<BrowserTimers>::default);
    {
        let setter = phase.setter();
        let slot = slot.clone();
        use_effect_with_deps(
            move |_| {
                let schedule = PhaseSchedule::configured();
                info!("loader runs for {}ms", schedule.total_duration_ms());
                slot.borrow_mut().install(PhaseMachine::start(
                    &BrowserTimers,
                    &schedule,
                    move |next| setter.set(next),
                ));
                move || slot.borrow_mut().clear()
            },
            (),
        );
    }
    let status = slot.borrow_mut().status();
    status
}

/// Runs the hero particle field on the referenced canvas while mounted.
#[hook]
pub fn use_particle_field(canvas: NodeRef) {
    use_effect_with_deps(
        move |canvas: &NodeRef| {
            let surface = CanvasSurface::from_node(canvas);
            if surface.is_none() {
                warn!("hero canvas has no 2d context, skipping particles");
            }
            let animator = ParticleAnimator::start(
                BrowserFrames,
                BrowserViewport,
                surface,
                config::PARTICLE_COUNT,
                &mut rand::thread_rng(),
            );
            move || drop(animator)
        },
        canvas,
    );
}

/// Flips to `true` the first time the node scrolls `margin` pixels into
/// the viewport and stays there.
#[hook]
pub fn use_reveal(node: NodeRef, margin: f64) -> bool {
    let scroll = use_window_scroll();
    let revealed = use_state(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let viewport_height = web_sys::window()
                    .and_then(|window| window.inner_height().ok())
                    .and_then(|height| height.as_f64())
                    .unwrap_or(0.0);
                if let Some(element) = node.cast::<Element>() {
                    let rect = element.get_bounding_client_rect();
                    let next = layout::next_revealed(
                        *revealed,
                        rect.top(),
                        rect.bottom(),
                        viewport_height,
                        margin,
                    );
                    if next != *revealed {
                        revealed.set(next);
                    }
                }
                || ()
            },
            scroll,
        );
    }
    *revealed
}

/// Smooth-scrolls so the element with `id` sits just below the navbar.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|document| document.get_element_by_id(id)) else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = layout::anchor_scroll_target(
        element.get_bounding_client_rect().top(),
        scroll_y,
        config::NAVBAR_HEIGHT_PX,
    );
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
