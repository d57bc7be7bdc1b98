//! Turning a [`Settings`] value into page state.

use crate::announce::ActiveSummary;
use crate::settings::{Contrast, Scalar, Settings};
use crate::surface::{Choice, Surface};

/// Push every setting onto the page.
///
/// Modes become body classes, scalars inline styles. Contrast classes are all
/// cleared before the current one is added, so at most one is ever present.
/// The result depends only on `settings`; applying twice changes nothing.
pub fn apply_settings<S: Surface + ?Sized>(settings: &Settings, surface: &mut S) {
    for (mode, on) in settings.modes() {
        surface.set_body_class(mode.key(), on);
    }

    surface.set_root_font_size(&format!("{}%", settings.font_size));
    surface.set_body_style("line-height", &Scalar::LineHeight.label(settings.line_height));
    surface.set_body_style(
        "letter-spacing",
        &Scalar::LetterSpacing.label(settings.letter_spacing),
    );
    surface.set_body_style("text-align", settings.text_align.as_str());

    for class in Contrast::CLASSES {
        surface.set_body_class(class, false);
    }
    if let Some(class) = settings.contrast.class() {
        surface.set_body_class(class, true);
    }

    surface.show_active_summary(&ActiveSummary::for_count(settings.active_mode_count()));
}

/// Bring every control in the panel in line with `settings`.
pub fn sync_controls<S: Surface + ?Sized>(settings: &Settings, surface: &mut S) {
    for (mode, on) in settings.modes() {
        surface.set_toggle_state(mode, on);
    }
    for scalar in Scalar::ALL {
        let value = settings.scalar(scalar);
        surface.set_slider_position(scalar, value);
        surface.set_slider_readout(scalar, value, &scalar.label(value));
    }
    sync_alignment(settings, surface);
    sync_contrast(settings, surface);
}

pub(crate) fn sync_alignment<S: Surface + ?Sized>(settings: &Settings, surface: &mut S) {
    for align in crate::settings::TextAlign::ALL {
        surface.set_choice_state(Choice::Align(align), align == settings.text_align);
    }
}

pub(crate) fn sync_contrast<S: Surface + ?Sized>(settings: &Settings, surface: &mut S) {
    for contrast in Contrast::ALL {
        surface.set_choice_state(Choice::Contrast(contrast), contrast == settings.contrast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Mode;
    use crate::surface::MemorySurface;

    #[test]
    fn defaults_render_neutral_page() {
        let mut surface = MemorySurface::default();
        apply_settings(&Settings::default(), &mut surface);
        assert_eq!(surface.root_font_size.as_deref(), Some("100%"));
        assert_eq!(surface.style("line-height"), Some("1.6"));
        assert_eq!(surface.style("letter-spacing"), Some("0px"));
        assert_eq!(surface.style("text-align"), Some("left"));
        assert!(surface.body_classes.is_empty());
        assert_eq!(surface.active_summary.unwrap().text, "None");
    }

    #[test]
    fn modes_map_to_same_named_classes() {
        let mut settings = Settings::default();
        settings.set_mode(Mode::HighlightHeadings, true);
        settings.set_mode(Mode::BigCursorLight, true);
        let mut surface = MemorySurface::default();
        apply_settings(&settings, &mut surface);
        assert!(surface.has_class("highlight-headings"));
        assert!(surface.has_class("big-cursor-light"));
        assert!(!surface.has_class("monochrome"));
        assert_eq!(surface.active_summary.unwrap().text, "2 modes");
    }

    #[test]
    fn switching_contrast_leaves_one_class() {
        let mut settings = Settings::default();
        let mut surface = MemorySurface::default();
        settings.contrast = Contrast::Dark;
        apply_settings(&settings, &mut surface);
        assert!(surface.has_class("dark-mode"));

        settings.contrast = Contrast::High;
        apply_settings(&settings, &mut surface);
        assert!(surface.has_class("high-contrast"));
        assert!(!surface.has_class("dark-mode"));
        assert!(!surface.has_class("light-mode"));

        settings.contrast = Contrast::Normal;
        apply_settings(&settings, &mut surface);
        assert!(Contrast::CLASSES.iter().all(|c| !surface.has_class(c)));
    }

    #[test]
    fn applying_twice_is_stable() {
        let mut settings = Settings::default();
        settings.set_mode(Mode::LowSaturation, true);
        settings.font_size = 140;
        settings.contrast = Contrast::Light;

        let mut once = MemorySurface::default();
        apply_settings(&settings, &mut once);
        let mut twice = once.clone();
        apply_settings(&settings, &mut twice);

        assert_eq!(once.body_classes, twice.body_classes);
        assert_eq!(once.body_styles, twice.body_styles);
        assert_eq!(once.root_font_size, twice.root_font_size);
        assert_eq!(once.active_summary, twice.active_summary);
    }

    #[test]
    fn sync_marks_exactly_one_choice_per_group() {
        let mut settings = Settings::default();
        settings.text_align = crate::settings::TextAlign::Right;
        let mut surface = MemorySurface::default();
        sync_controls(&settings, &mut surface);

        let active: Vec<_> = surface
            .choices
            .iter()
            .filter(|(_, on)| **on)
            .map(|(choice, _)| *choice)
            .collect();
        assert_eq!(
            active,
            vec![
                Choice::Align(crate::settings::TextAlign::Right),
                Choice::Contrast(Contrast::Normal)
            ]
        );
        assert_eq!(surface.slider_labels["font-size"], "100%");
        assert_eq!(surface.slider_labels["letter-spacing"], "0px");
    }
}
