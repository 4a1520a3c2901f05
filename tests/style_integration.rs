// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use oh_snap::ui::design_tokens::{opacity, palette, sizing, spacing};
    use oh_snap::ui::styles::{button, container};
    use oh_snap::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_are_callable() {
        let theme = Theme::Dark;
        for status in [
            Status::Active,
            Status::Hovered,
            Status::Pressed,
            Status::Disabled,
        ] {
            let _ = button::primary(&theme, status);
            let _ = button::selected(&theme, status);
            let _ = button::nav_link(&theme, status);
            let _ = button::thumbnail(&theme, status);
        }
    }

    #[test]
    fn all_container_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = container::header(&theme);
            let _ = container::panel(&theme);
            let _ = container::modal_backdrop(&theme);
            let _ = container::modal_card(&theme);
            let _ = container::error_region(&theme);
        }
    }

    #[test]
    fn active_nav_entry_stands_out_from_links() {
        let theme = Theme::Light;
        let active = button::selected(&theme, Status::Active);
        let idle = button::nav_link(&theme, Status::Active);
        assert_ne!(active.background, idle.background);
    }

    #[test]
    fn modal_backdrop_dims_content() {
        let style = container::modal_backdrop(&Theme::Dark);
        match style.background {
            Some(iced::Background::Color(color)) => {
                assert!(color.a > opacity::OVERLAY_SUBTLE);
                assert!(color.a < opacity::OPAQUE);
            }
            other => panic!("unexpected backdrop {other:?}"),
        }
    }

    #[test]
    fn theme_modes_pick_matching_palettes() {
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
    }

    #[test]
    fn tokens_fit_together() {
        assert!(sizing::THUMBNAIL > spacing::XL);
        assert!(sizing::TOAST_WIDTH < sizing::CONTENT_MAX_WIDTH);
        assert_ne!(palette::PRIMARY_500, palette::ERROR_500);
    }
}
