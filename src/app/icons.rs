use leptos::prelude::*;

use crate::content::Icon;

// Lucide outline glyphs on a 24x24 grid.
fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Code => {
            r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#
        }
        Icon::Layers => concat!(
            r#"<path d="m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z"/>"#,
            r#"<path d="m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65"/>"#,
            r#"<path d="m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65"/>"#,
        ),
        Icon::Database => concat!(
            r#"<ellipse cx="12" cy="5" rx="9" ry="3"/>"#,
            r#"<path d="M3 5V19A9 3 0 0 0 21 19V5"/>"#,
            r#"<path d="M3 12A9 3 0 0 0 21 12"/>"#,
        ),
        Icon::Cloud => r#"<path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"/>"#,
        Icon::Bug => concat!(
            r#"<path d="m8 2 1.88 1.88"/><path d="M14.12 3.88 16 2"/>"#,
            r#"<path d="M9 7.13v-1a3.003 3.003 0 1 1 6 0v1"/>"#,
            r#"<path d="M12 20c-3.3 0-6-2.7-6-6v-3a4 4 0 0 1 4-4h4a4 4 0 0 1 4 4v3c0 3.3-2.7 6-6 6"/>"#,
            r#"<path d="M12 20v-9"/><path d="M6.53 9C4.6 8.8 3 7.1 3 5"/><path d="M6 13H2"/>"#,
            r#"<path d="M3 21c0-2.1 1.7-3.9 3.8-4"/><path d="M20.97 5c0 2.1-1.6 3.8-3.5 4"/>"#,
            r#"<path d="M22 13h-4"/><path d="M17.2 17c2.1.1 3.8 1.9 3.8 4"/>"#,
        ),
        Icon::FolderKanban => concat!(
            r#"<path d="M4 20h16a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.93a2 2 0 0 1-1.66-.9l-.82-1.2A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13c0 1.1.9 2 2 2Z"/>"#,
            r#"<path d="M8 10v4"/><path d="M12 10v2"/><path d="M16 10v6"/>"#,
        ),
        Icon::Mail => concat!(
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
            r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
        ),
        Icon::Linkedin => concat!(
            r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
            r#"<rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
        ),
    }
}

#[component]
pub fn IconSvg(
    icon: Icon,
    #[prop(default = 24)] size: u32,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            inner_html=glyph(icon)
        ></svg>
    }
}
