//! Component showcase page: every UI primitive and its variants.

use crate::ui::components::{button, card, dialog, label, text_input, theme_toggle};
use crate::ui::{ButtonVariant, Theme};

pub fn render(theme: &Theme) -> String {
    let buttons: String = ButtonVariant::ALL
        .iter()
        .map(|variant| button(theme, *variant, variant_label(*variant)))
        .collect();

    let sample_card = card(
        theme,
        "Card Title",
        "Card Description",
        "<p>Card Content</p>",
        Some(&button(theme, ButtonVariant::Default, "Action")),
    );

    let sample_dialog = dialog(
        theme,
        &button(theme, ButtonVariant::Default, "Open Dialog"),
        "Dialog Title",
        "This is a dialog description.",
        "<p>Dialog content goes here.</p>",
    );

    let form = format!(
        concat!(
            r#"<div class="field">{name_label}{name_input}</div>"#,
            r#"<div class="field">{email_label}{email_input}</div>"#
        ),
        name_label = label("name", "Name"),
        name_input = text_input(theme, "name", "text", "Enter your name"),
        email_label = label("email", "Email"),
        email_input = text_input(theme, "email", "email", "Enter your email"),
    );

    format!(
        concat!(
            r#"<div class="page-header"><h1>Component Library</h1>{toggle}</div>"#,
            "{buttons_section}",
            "{cards_section}",
            "{dialog_section}",
            "{form_section}"
        ),
        toggle = theme_toggle(theme),
        buttons_section = section("Buttons", &buttons),
        cards_section = section("Cards", &sample_card),
        dialog_section = section("Dialog", &sample_dialog),
        form_section = section("Form Elements", &form),
    )
}

fn section(heading: &str, body: &str) -> String {
    format!(r#"<section><h2>{heading}</h2>{body}</section>"#)
}

fn variant_label(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Default => "Default",
        ButtonVariant::Secondary => "Secondary",
        ButtonVariant::Destructive => "Destructive",
        ButtonVariant::Outline => "Outline",
        ButtonVariant::Ghost => "Ghost",
        ButtonVariant::Link => "Link",
    }
}
