use leptos::prelude::*;

use super::icons::IconSvg;
use crate::config::{copyright_year, SITE};
use crate::content::Icon;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-200 bg-white px-6 py-10 text-center">
            <p class="mb-4 text-sm text-gray-600">
                "Living, learning, & leveling up one day at a time."
            </p>
            <div class="flex items-center justify-center gap-3">
                <a
                    href=SITE.mailto_href()
                    class="text-gray-700 hover:text-indigo-500"
                    aria-label="Email"
                >
                    <IconSvg icon=Icon::Mail />
                </a>
                <a
                    href=SITE.linkedin_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-[#0a66c2] hover:text-indigo-500"
                    aria-label="LinkedIn Profile"
                >
                    <IconSvg icon=Icon::Linkedin />
                </a>
            </div>
            <p class="mt-4 text-sm text-gray-400">
                {format!("© {}. {} Developed With Passion.", copyright_year(), SITE.owner)}
            </p>
        </footer>
    }
}
