//! Stateless render functions for the UI primitives.
//!
//! Each helper produces a self-contained HTML fragment; theme colors are
//! injected as inline styles from the [`Theme`] the caller passes in.

use super::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 6] = [
        ButtonVariant::Default,
        ButtonVariant::Secondary,
        ButtonVariant::Destructive,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }

    fn style(self, theme: &Theme) -> String {
        match self {
            ButtonVariant::Default => format!(
                "background-color:{};color:#ffffff;border:none",
                theme.leaf_green
            ),
            ButtonVariant::Secondary => format!(
                "background-color:{};color:{};border:none",
                theme.light_gray, theme.dark_gray
            ),
            ButtonVariant::Destructive => {
                format!("background-color:{};color:#ffffff;border:none", theme.error)
            }
            ButtonVariant::Outline => format!(
                "background-color:transparent;color:{0};border:1px solid {0}",
                theme.dark_outline_green
            ),
            ButtonVariant::Ghost => format!(
                "background-color:transparent;color:{};border:none",
                theme.dark_gray
            ),
            ButtonVariant::Link => format!(
                "background:none;color:{};border:none;text-decoration:underline",
                theme.info
            ),
        }
    }
}

/// Minimal HTML text escaping for the render helpers.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn button(theme: &Theme, variant: ButtonVariant, label: &str) -> String {
    format!(
        r#"<button class="btn btn-{}" style="{}">{}</button>"#,
        variant.class_name(),
        variant.style(theme),
        escape(label)
    )
}

pub fn card(
    theme: &Theme,
    title: &str,
    description: &str,
    body: &str,
    footer: Option<&str>,
) -> String {
    let footer = footer
        .map(|f| format!(r#"<div class="card-footer">{f}</div>"#))
        .unwrap_or_default();
    format!(
        concat!(
            r#"<div class="card" style="background-color:{background};border:1px solid {border}">"#,
            r#"<div class="card-header">"#,
            r#"<h3 class="card-title" style="color:{title_color}">{title}</h3>"#,
            r#"<p class="card-description" style="color:{muted}">{description}</p>"#,
            r#"</div>"#,
            r#"<div class="card-content">{body}</div>"#,
            "{footer}",
            r#"</div>"#
        ),
        background = theme.background,
        border = theme.light_gray,
        title_color = theme.dark_outline_green,
        muted = theme.medium_gray,
        title = escape(title),
        description = escape(description),
        body = body,
        footer = footer,
    )
}

/// Dialog rendered as a `<details>` element: the summary is the trigger,
/// the body opens in place. No client-side scripting involved.
pub fn dialog(theme: &Theme, trigger: &str, title: &str, description: &str, body: &str) -> String {
    format!(
        concat!(
            r#"<details class="dialog">"#,
            r#"<summary class="dialog-trigger">{trigger}</summary>"#,
            r#"<div class="dialog-content" style="background-color:{background}">"#,
            r#"<h3 class="dialog-title" style="color:{title_color}">{title}</h3>"#,
            r#"<p class="dialog-description" style="color:{muted}">{description}</p>"#,
            r#"<div class="dialog-body">{body}</div>"#,
            r#"</div>"#,
            r#"</details>"#
        ),
        trigger = trigger,
        background = theme.background,
        title_color = theme.dark_outline_green,
        muted = theme.medium_gray,
        title = escape(title),
        description = escape(description),
        body = body,
    )
}

pub fn label(for_id: &str, text: &str) -> String {
    format!(
        r#"<label class="label" for="{}">{}</label>"#,
        escape(for_id),
        escape(text)
    )
}

pub fn text_input(theme: &Theme, id: &str, input_type: &str, placeholder: &str) -> String {
    format!(
        r#"<input class="input" style="border:1px solid {}" id="{}" type="{}" placeholder="{}"/>"#,
        theme.medium_gray,
        escape(id),
        escape(input_type),
        escape(placeholder)
    )
}

pub fn theme_toggle(theme: &Theme) -> String {
    format!(
        r#"<button class="theme-toggle" style="color:{}" aria-label="Toggle theme">☀</button>"#,
        theme.dark_gray
    )
}
