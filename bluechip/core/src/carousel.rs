//! Promotional carousel: slide normalisation, position and autoplay lifecycle.
use thiserror::Error;
use tracing::debug;

/// Default delay between automatic slide advances.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = 5000;

pub const PREV_SLIDE_MESSAGE: &str = "Previous promotion";
pub const NEXT_SLIDE_MESSAGE: &str = "Next promotion";

/// Screen reader label of the pagination bullet for `index` (zero based).
pub fn bullet_message(index: usize) -> String {
    format!("Go to promotion {}", index + 1)
}

/// Builds the sequence the carousel actually renders.
///
/// Looping needs at least two slides, so a single slide is shown twice. An
/// empty input stays empty and the caller must not render the carousel.
pub fn display_sequence<T: Clone>(slides: &[T]) -> Vec<T> {
    match slides {
        [only] => vec![only.clone(), only.clone()],
        _ => slides.to_vec(),
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    #[error("Slide {index} is out of range for a carousel of {len} slides")]
    OutOfRange { index: usize, len: usize },
}

/// Position of a looping carousel over its display sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    /// Starts on the second slide when there is one, so on wide screens a
    /// neighbour peeks out on both sides of the centred banner.
    pub fn new(len: usize) -> Self {
        Carousel {
            len,
            active: if len > 1 { 1 } else { 0 },
        }
    }

    /// Number of slides in the display sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the slide currently centred.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Advances one slide, wrapping from the last back to the first.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    /// Steps back one slide, wrapping from the first to the last.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
    }

    /// Jumps straight to `index`, as a pagination bullet does.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.active = index;
        Ok(())
    }

    /// Signed distance of `index` from the active slide, taking the shorter way
    /// around the loop. The slider lays each slide out at this many slide
    /// widths from the centre.
    pub fn offset_of(&self, index: usize) -> isize {
        if self.len == 0 {
            return 0;
        }
        let len = self.len as isize;
        let mut diff = index as isize - self.active as isize;
        if diff > len / 2 {
            diff -= len;
        } else if diff < -(len / 2) {
            diff += len;
        }
        diff
    }
}

/// Whether the host page is currently shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayCommand {
    Start,
    Stop,
}

/// Autoplay lifecycle of a carousel.
///
/// Playback runs only while autoplay was requested, the page is visible and
/// the pointer is not resting on the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autoplay {
    requested: bool,
    page_visible: bool,
    hovered: bool,
}

impl Autoplay {
    /// Lifecycle for a freshly mounted, visible and unhovered slider.
    pub fn new(requested: bool) -> Self {
        Autoplay {
            requested,
            page_visible: true,
            hovered: false,
        }
    }

    /// Follows a change of the caller's autoplay setting.
    pub fn set_requested(&mut self, requested: bool) -> Option<AutoplayCommand> {
        self.apply(|autoplay| autoplay.requested = requested)
    }

    /// Whether the timer should currently be advancing slides.
    pub fn is_playing(&self) -> bool {
        self.requested && self.page_visible && !self.hovered
    }

    /// Pauses while the page is hidden and resumes once it is shown again.
    pub fn on_visibility(&mut self, visibility: Visibility) -> Option<AutoplayCommand> {
        self.apply(|autoplay| autoplay.page_visible = visibility == Visibility::Visible)
    }

    /// Pauses while the pointer rests on the slider.
    pub fn on_pointer_enter(&mut self) -> Option<AutoplayCommand> {
        self.apply(|autoplay| autoplay.hovered = true)
    }

    /// Resumes once the pointer leaves the slider.
    pub fn on_pointer_leave(&mut self) -> Option<AutoplayCommand> {
        self.apply(|autoplay| autoplay.hovered = false)
    }

    fn apply(&mut self, change: impl FnOnce(&mut Self)) -> Option<AutoplayCommand> {
        let was_playing = self.is_playing();
        change(self);
        let command = match (was_playing, self.is_playing()) {
            (false, true) => Some(AutoplayCommand::Start),
            (true, false) => Some(AutoplayCommand::Stop),
            _ => None,
        };
        if let Some(command) = command {
            debug!(?command, "autoplay");
        }
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_duplicate_single_slide() {
        assert_eq!(display_sequence(&["a"]), vec!["a", "a"]);
    }

    #[test]
    fn can_keep_empty_sequence_empty() {
        assert!(display_sequence::<&str>(&[]).is_empty());
    }

    #[test]
    fn can_pass_two_or_more_slides_through() {
        assert_eq!(display_sequence(&["a", "b"]), vec!["a", "b"]);
        assert_eq!(display_sequence(&["a", "b", "c"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn can_start_on_second_slide() {
        assert_eq!(Carousel::new(3).active(), 1);
        assert_eq!(Carousel::new(1).active(), 0);
        assert_eq!(Carousel::new(0).active(), 0);
    }

    #[test]
    fn can_loop_both_ways() {
        let mut carousel = Carousel::new(3);

        carousel.next();
        assert_eq!(carousel.active(), 2);
        carousel.next();
        assert_eq!(carousel.active(), 0);
        carousel.prev();
        assert_eq!(carousel.active(), 2);
    }

    #[test]
    fn cannot_navigate_empty_carousel() {
        let mut carousel = Carousel::new(0);

        carousel.next();
        carousel.prev();

        assert_eq!(carousel.active(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn cannot_go_to_unknown_bullet() {
        let mut carousel = Carousel::new(2);

        assert_eq!(carousel.go_to(0), Ok(()));
        assert_eq!(carousel.active(), 0);
        assert_eq!(
            carousel.go_to(2),
            Err(CarouselError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn can_measure_offsets_the_short_way_around() {
        let carousel = Carousel::new(5);

        assert_eq!(carousel.offset_of(1), 0);
        assert_eq!(carousel.offset_of(2), 1);
        assert_eq!(carousel.offset_of(0), -1);
        assert_eq!(carousel.offset_of(3), 2);
        assert_eq!(carousel.offset_of(4), -2);
    }

    #[test]
    fn can_number_bullets_from_one() {
        assert_eq!(bullet_message(0), "Go to promotion 1");
    }

    #[test]
    fn can_stop_on_hidden_page_and_resume_when_visible() {
        let mut autoplay = Autoplay::new(true);
        assert!(autoplay.is_playing());

        assert_eq!(
            autoplay.on_visibility(Visibility::Hidden),
            Some(AutoplayCommand::Stop)
        );
        assert!(!autoplay.is_playing());

        assert_eq!(
            autoplay.on_visibility(Visibility::Visible),
            Some(AutoplayCommand::Start)
        );
        assert!(autoplay.is_playing());
    }

    #[test]
    fn cannot_start_unrequested_autoplay_on_visibility() {
        let mut autoplay = Autoplay::new(false);

        assert_eq!(autoplay.on_visibility(Visibility::Hidden), None);
        assert_eq!(autoplay.on_visibility(Visibility::Visible), None);
        assert!(!autoplay.is_playing());
    }

    #[test]
    fn cannot_emit_commands_for_repeated_notifications() {
        let mut autoplay = Autoplay::new(true);

        assert_eq!(autoplay.on_visibility(Visibility::Visible), None);
        autoplay.on_visibility(Visibility::Hidden);
        assert_eq!(autoplay.on_visibility(Visibility::Hidden), None);
    }

    #[test]
    fn can_pause_on_hover_until_pointer_leaves() {
        let mut autoplay = Autoplay::new(true);

        assert_eq!(autoplay.on_pointer_enter(), Some(AutoplayCommand::Stop));
        // Returning to the tab while hovered keeps playback paused.
        autoplay.on_visibility(Visibility::Hidden);
        assert_eq!(autoplay.on_visibility(Visibility::Visible), None);
        assert_eq!(autoplay.on_pointer_leave(), Some(AutoplayCommand::Start));
    }

    #[test]
    fn can_follow_autoplay_setting_changes() {
        // Arrange
        let mut autoplay = Autoplay::new(false);

        // Act
        let started = autoplay.set_requested(true);
        let repeated = autoplay.set_requested(true);
        let stopped = autoplay.set_requested(false);

        // Assert
        assert_eq!(started, Some(AutoplayCommand::Start));
        assert_eq!(repeated, None);
        assert_eq!(stopped, Some(AutoplayCommand::Stop));
        assert!(!autoplay.is_playing());
    }

    #[test]
    fn cannot_start_hidden_page_when_setting_turns_on() {
        let mut autoplay = Autoplay::new(false);
        autoplay.on_visibility(Visibility::Hidden);

        assert_eq!(autoplay.set_requested(true), None);
        assert_eq!(
            autoplay.on_visibility(Visibility::Visible),
            Some(AutoplayCommand::Start)
        );
    }
}
