//! Looping promotional carousel.
//!
//! Autoplay is driven by a timer task owned by the component scope. The task
//! exists only while [`Autoplay::is_playing`] holds, which covers the caller's
//! setting, page visibility and pointer hover. It is cancelled when the
//! slider unmounts.
//!
//! Every slide shares one grid cell and is shifted sideways by its distance
//! from the active slide. Narrow viewports show one full-width slide at a
//! time; wider ones centre a smaller banner between its dimmed neighbours.
use super::icons::{Chevron, ChevronIcon, InfoIcon};
use super::{Button, ButtonAction, ButtonSize, ButtonVariant};
use crate::dom;
use crate::hooks::{use_document_listener, use_media_query, use_viewport_narrower_than};
use bluechip_core::carousel::{
    bullet_message, DEFAULT_AUTOPLAY_INTERVAL_MS, NEXT_SLIDE_MESSAGE, PREV_SLIDE_MESSAGE,
};
use bluechip_core::{
    cn, display_sequence, routes, Autoplay, Carousel, PromoSlide, MOBILE_BREAKPOINT,
};
use dioxus::prelude::*;
use futures::StreamExt;
use gloo_timers::future::IntervalStream;
use tracing::{info_span, warn};
use tracing_futures::Instrument;

/// Space between the centred banner and its neighbours on wide screens.
const SIDE_SLIDE_GAP_PX: isize = 20;

async fn advance(mut carousel: Signal<Carousel>, interval_ms: u32) {
    let mut ticks = IntervalStream::new(interval_ms);
    while ticks.next().await.is_some() {
        carousel.write().next();
    }
}

fn bullet_class(active: bool) -> &'static str {
    if active {
        "h-2 w-6 rounded-full bg-pink transition-all"
    } else {
        "h-2 w-2 rounded-full bg-white/50 transition-all"
    }
}

/// Where one slide sits relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlidePlacement {
    offset: isize,
    narrow: bool,
}

impl SlidePlacement {
    fn style(self) -> String {
        let gap = if self.narrow { 0 } else { SIDE_SLIDE_GAP_PX };
        let scale = if self.offset == 0 || self.narrow {
            "1"
        } else {
            "0.9"
        };
        format!(
            "transform: translateX(calc({}% + {}px)) scale({scale})",
            self.offset * 100,
            self.offset * gap
        )
    }

    fn class(self) -> &'static str {
        match (self.offset.abs(), self.narrow) {
            (0, _) => "z-10 opacity-100",
            (1, true) => "opacity-100",
            (1, false) => "opacity-40",
            _ => "pointer-events-none opacity-0",
        }
    }
}

#[component]
pub fn PromoSlider(
    slides: Vec<PromoSlide>,
    #[props(default)] autoplay: bool,
    #[props(default = DEFAULT_AUTOPLAY_INTERVAL_MS)] autoplay_interval: u32,
    #[props(default)] show_pagination: bool,
    #[props(default)] show_controls: bool,
    #[props(default = true)] show_info_icon: bool,
    on_info: Option<EventHandler<()>>,
) -> Element {
    let sequence = display_sequence(&slides);
    let len = sequence.len();

    let mut carousel = use_signal(|| Carousel::new(len));
    let mut playback = use_signal(|| Autoplay::new(autoplay));
    let mut ticker = use_signal(|| None::<Task>);
    let narrow = use_viewport_narrower_than(MOBILE_BREAKPOINT);
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)".to_string());

    use_effect(use_reactive!(|len| {
        if carousel.peek().len() != len {
            carousel.set(Carousel::new(len));
        }
    }));

    use_effect(use_reactive!(|autoplay| {
        playback.write().set_requested(autoplay);
    }));

    use_document_listener("visibilitychange", move |_| match dom::page_visibility() {
        Ok(visibility) => {
            playback.write().on_visibility(visibility);
        }
        Err(err) => warn!("cannot read page visibility: {err}"),
    });

    use_effect(move || {
        let playing = playback.read().is_playing();
        let running = ticker.peek().is_some();
        if playing && !running {
            let span = info_span!("promo_autoplay", interval_ms = autoplay_interval);
            ticker.set(Some(spawn(
                advance(carousel, autoplay_interval).instrument(span),
            )));
        } else if !playing && running {
            if let Some(task) = ticker.write().take() {
                task.cancel();
            }
        }
    });

    if sequence.is_empty() {
        return rsx! {};
    }

    let position = *carousel.read();
    let active = position.active();
    let narrow = narrow();
    let motion = if reduced_motion() {
        ""
    } else {
        "transition-all duration-500 ease-in-out"
    };
    let width = if narrow {
        "w-full"
    } else {
        "w-4/5 max-w-[1000px] justify-self-center"
    };
    let placed: Vec<_> = sequence
        .into_iter()
        .enumerate()
        .map(|(index, slide)| {
            let placement = SlidePlacement {
                offset: position.offset_of(index),
                narrow,
            };
            (index, slide, placement)
        })
        .collect();
    let arrow = "absolute top-1/2 z-20 flex h-10 w-10 -translate-y-1/2 items-center justify-center rounded-full bg-black/30 text-white hover:bg-pink";

    rsx! {
        section {
            class: "relative my-6 overflow-hidden py-5 lg:my-2",
            role: "region",
            aria_label: "Promotions",
            onmouseenter: move |_| {
                playback.write().on_pointer_enter();
            },
            onmouseleave: move |_| {
                playback.write().on_pointer_leave();
            },
            div { class: "grid",
                for (index, slide, placement) in placed {
                    div {
                        key: "{index}-{slide.id}",
                        class: cn(["col-start-1 row-start-1", width, motion, placement.class()]),
                        style: placement.style(),
                        aria_hidden: index != active,
                        PromoSlideCard { slide, show_info_icon, on_info }
                    }
                }
            }
            if show_controls {
                button {
                    r#type: "button",
                    class: "{arrow} left-3",
                    aria_label: PREV_SLIDE_MESSAGE,
                    onclick: move |_| carousel.write().prev(),
                    ChevronIcon { direction: Chevron::Left, class: "h-5 w-5" }
                }
                button {
                    r#type: "button",
                    class: "{arrow} right-3",
                    aria_label: NEXT_SLIDE_MESSAGE,
                    onclick: move |_| carousel.write().next(),
                    ChevronIcon { direction: Chevron::Right, class: "h-5 w-5" }
                }
            }
            if show_pagination || narrow {
                div { class: "mt-5 flex justify-center gap-2",
                    for index in 0..len {
                        button {
                            key: "{index}",
                            r#type: "button",
                            class: bullet_class(index == active),
                            aria_label: bullet_message(index),
                            aria_current: index == active,
                            onclick: move |_| {
                                if let Err(err) = carousel.write().go_to(index) {
                                    warn!("{err}");
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PromoSlideCard(
    slide: PromoSlide,
    show_info_icon: bool,
    on_info: Option<EventHandler<()>>,
) -> Element {
    let background = slide.bg_color.as_deref().unwrap_or("bg-navy-light");
    let link = slide
        .button_link
        .clone()
        .unwrap_or_else(|| routes::PROMOTIONS.to_string());

    rsx! {
        div {
            class: "relative flex min-h-[220px] w-full items-center overflow-hidden rounded-xl px-6 py-8 shadow-2xl sm:min-h-[300px] sm:px-12 {background}",
            if show_info_icon {
                button {
                    r#type: "button",
                    class: "absolute right-2 top-2 z-10 rounded-full p-1 text-white transition-colors hover:bg-black/50",
                    aria_label: "More information",
                    onclick: move |_| {
                        if let Some(handler) = on_info {
                            handler.call(());
                        }
                    },
                    InfoIcon {}
                }
            }
            div { class: "relative z-10 max-w-md space-y-3",
                if let Some(label) = &slide.label {
                    span { class: "inline-block rounded-full bg-white/10 px-3 py-1 text-sm text-white",
                        "{label}"
                    }
                }
                h2 { class: "text-2xl font-extrabold text-white sm:text-4xl", "{slide.title}" }
                if let Some(subtitle) = &slide.subtitle {
                    p { class: "text-lg font-semibold text-yellow-300 sm:text-2xl", "{subtitle}" }
                }
                Button {
                    action: ButtonAction::Navigate(link),
                    variant: ButtonVariant::Success,
                    size: ButtonSize::Pill,
                    "{slide.button_text}"
                }
            }
            img {
                class: "pointer-events-none absolute bottom-0 right-0 h-full max-w-[55%] object-contain",
                src: "{slide.image}",
                alt: "{slide.title}",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_centre_active_slide_at_full_size() {
        let placement = SlidePlacement {
            offset: 0,
            narrow: false,
        };

        assert_eq!(
            placement.style(),
            "transform: translateX(calc(0% + 0px)) scale(1)"
        );
        assert_eq!(placement.class(), "z-10 opacity-100");
    }

    #[test]
    fn can_show_dimmed_neighbours_on_wide_screens() {
        let carousel = Carousel::new(3);
        let left = SlidePlacement {
            offset: carousel.offset_of(0),
            narrow: false,
        };
        let right = SlidePlacement {
            offset: carousel.offset_of(2),
            narrow: false,
        };

        assert_eq!(
            left.style(),
            "transform: translateX(calc(-100% + -20px)) scale(0.9)"
        );
        assert_eq!(
            right.style(),
            "transform: translateX(calc(100% + 20px)) scale(0.9)"
        );
        assert_eq!(left.class(), "opacity-40");
        assert_eq!(right.class(), "opacity-40");
    }

    #[test]
    fn can_place_neighbours_edge_to_edge_on_narrow_screens() {
        let placement = SlidePlacement {
            offset: 1,
            narrow: true,
        };

        assert_eq!(
            placement.style(),
            "transform: translateX(calc(100% + 0px)) scale(1)"
        );
        assert_eq!(placement.class(), "opacity-100");
    }

    #[test]
    fn cannot_see_slides_beyond_the_neighbours() {
        let carousel = Carousel::new(5);
        let far = SlidePlacement {
            offset: carousel.offset_of(3),
            narrow: false,
        };

        assert_eq!(far.offset, 2);
        assert_eq!(far.class(), "pointer-events-none opacity-0");
    }
}
