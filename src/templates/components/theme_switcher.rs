use crate::domain::theme::{Accent, ThemeMode};
use crate::domain::ThemeSettings;
use maud::{html, Markup};

/// Mode buttons plus an accent palette. Each button posts to `/theme` and the
/// server redirects back to `return_to`.
pub fn theme_switcher(settings: &ThemeSettings, return_to: &str) -> Markup {
    html! {
        div class="theme-machine" {
            form method="post" action="/theme" class="theme-modes" {
                input type="hidden" name="return_to" value=(return_to);
                @for mode in ThemeMode::ALL {
                    button
                        type="submit"
                        name="theme"
                        value=(mode.name())
                        class=(if settings.mode == mode { "theme-btn active" } else { "theme-btn" })
                        aria-label={ "Set " (mode.name()) " theme" }
                    { span class={ "icon icon-" (mode.name()) } aria-hidden="true" {} }
                }
            }

            details class="color-picker" {
                summary aria-label="Choose accent color" { span class="icon icon-palette" aria-hidden="true" {} }
                form method="post" action="/theme" class="swatches" {
                    input type="hidden" name="return_to" value=(return_to);
                    @for accent in Accent::ALL {
                        button
                            type="submit"
                            name="accent"
                            value=(accent.name())
                            class="swatch"
                            style={ "background-color: hsl(" (accent.hsl()) ")" }
                            aria-pressed=(if settings.accent == accent { "true" } else { "false" })
                            aria-label={ "Set accent color to " (accent.name()) }
                        {}
                    }
                }
            }
        }
    }
}
