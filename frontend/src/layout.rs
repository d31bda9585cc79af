//! Scroll geometry shared by the navbar, the hero parallax and the
//! reveal-on-scroll hook. Everything here works on plain numbers read from
//! the DOM by the caller.

/// Whether an element whose top edge sits at `top` (viewport coordinates)
/// has scrolled at least `margin` pixels into a viewport of `viewport_height`.
pub fn is_in_view(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin && bottom > 0.0
}

/// Reveal latch: once an element has been in view it stays revealed.
pub fn next_revealed(
    revealed: bool,
    top: f64,
    bottom: f64,
    viewport_height: f64,
    margin: f64,
) -> bool {
    revealed || is_in_view(top, bottom, viewport_height, margin)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub offset_y: f64,
    pub opacity: f64,
}

/// Maps how far the hero has scrolled out of view (`0.0` = top of page,
/// `1.0` = hero fully scrolled past) to the content's drift and fade.
pub fn hero_parallax(progress: f64) -> Parallax {
    let progress = progress.clamp(0.0, 1.0);
    Parallax {
        offset_y: 120.0 * progress,
        opacity: (1.0 - progress / 0.7).clamp(0.0, 1.0),
    }
}

pub fn scroll_progress(scroll_y: f64, section_height: f64) -> f64 {
    if section_height <= 0.0 {
        return 0.0;
    }
    (scroll_y / section_height).clamp(0.0, 1.0)
}

/// Section box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect<'a> {
    pub id: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// Picks the section that covers the focus line `threshold` of the way
/// down the viewport. Later sections win ties, so a short section that has
/// fully entered takes over from a long one above it.
pub fn active_section<'a>(
    sections: &[SectionRect<'a>],
    viewport_height: f64,
    threshold: f64,
) -> Option<&'a str> {
    let focus = viewport_height * threshold;
    sections
        .iter()
        .rev()
        .find(|section| section.top <= focus && section.bottom > focus)
        .map(|section| section.id)
}

/// Document offset to scroll to so a section lands just below the fixed navbar.
pub fn anchor_scroll_target(section_top: f64, scroll_y: f64, navbar_height: f64) -> f64 {
    (section_top + scroll_y - navbar_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_at_top_and_past_fade_point() {
        assert_eq!(hero_parallax(0.0), Parallax { offset_y: 0.0, opacity: 1.0 });
        let past = hero_parallax(0.8);
        assert_eq!(past.opacity, 0.0);
        assert!((past.offset_y - 96.0).abs() < 1e-9);
        assert_eq!(hero_parallax(3.0).offset_y, 120.0);
        assert_eq!(hero_parallax(-1.0).offset_y, 0.0);
        assert!((hero_parallax(0.35).opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn progress_is_clamped_and_safe_for_empty_sections() {
        assert_eq!(scroll_progress(450.0, 900.0), 0.5);
        assert_eq!(scroll_progress(2_000.0, 900.0), 1.0);
        assert_eq!(scroll_progress(10.0, 0.0), 0.0);
    }

    #[test]
    fn in_view_needs_margin_crossed() {
        assert!(!is_in_view(950.0, 1_400.0, 1_000.0, 80.0));
        assert!(is_in_view(900.0, 1_400.0, 1_000.0, 80.0));
        assert!(!is_in_view(-600.0, -10.0, 1_000.0, 0.0));
    }

    #[test]
    fn in_view_ignores_margin_for_bottom_edge() {
        assert!(is_in_view(-300.0, 20.0, 1_000.0, 80.0));
        assert!(!is_in_view(-300.0, 0.0, 1_000.0, 80.0));
        assert!(!is_in_view(-300.0, -20.0, 1_000.0, -50.0));
    }

    #[test]
    fn reveal_latches_after_leaving_view() {
        let below = next_revealed(false, 1_200.0, 1_800.0, 1_000.0, 80.0);
        assert!(!below);
        let entered = next_revealed(below, 800.0, 1_400.0, 1_000.0, 80.0);
        assert!(entered);
        let scrolled_past = next_revealed(entered, -900.0, -300.0, 1_000.0, 80.0);
        assert!(scrolled_past);
        assert!(next_revealed(scrolled_past, 1_200.0, 1_800.0, 1_000.0, 80.0));
    }

    #[test]
    fn active_section_follows_focus_line() {
        let sections = [
            SectionRect { id: "services", top: -500.0, bottom: 200.0 },
            SectionRect { id: "portfolio", top: 200.0, bottom: 1_100.0 },
            SectionRect { id: "pricing", top: 1_100.0, bottom: 1_900.0 },
        ];
        assert_eq!(active_section(&sections, 1_000.0, 0.3), Some("portfolio"));
        assert_eq!(active_section(&sections, 500.0, 0.3), Some("services"));
        assert_eq!(active_section(&sections[2..], 1_000.0, 0.3), None);
    }

    #[test]
    fn anchor_target_accounts_for_navbar() {
        assert_eq!(anchor_scroll_target(400.0, 1_000.0, 80.0), 1_320.0);
        assert_eq!(anchor_scroll_target(-50.0, 0.0, 80.0), 0.0);
    }
}
