use leptos::{ev::MouseEvent, prelude::*};

use crate::config::SITE;
use crate::content::Section;

const LINK_CLASS: &str =
    "capitalize text-gray-700 hover:text-indigo-500 transition-colors duration-200";
const CTA_CLASS: &str = "rounded-md bg-indigo-500 px-4 py-2 font-semibold text-white hover:bg-indigo-600 transition-colors duration-200";

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_: MouseEvent| set_menu_open.set(false);

    view! {
        <nav class="sticky top-0 z-40 border-b border-gray-200 bg-white/90 backdrop-blur">
            <div class="mx-auto flex max-w-6xl items-center justify-between px-6 py-4">
                <h1 class="text-2xl font-bold text-indigo-500">
                    <a href=Section::Hero.href()>{SITE.owner}</a>
                </h1>

                <div class="hidden items-center gap-6 md:flex">
                    {Section::NAV
                        .into_iter()
                        .map(|s| {
                            view! {
                                <a href=s.href() class=LINK_CLASS>
                                    {s.id()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=Section::Contact.href() class=CTA_CLASS>
                        "Get in Touch"
                    </a>
                </div>

                <button
                    class="text-2xl md:hidden"
                    aria-label="Open menu"
                    on:click=move |_| set_menu_open.set(true)
                >
                    "☰"
                </button>
            </div>
        </nav>

        <div
            class=move || {
                if menu_open.get() { "fixed inset-0 z-40 bg-black/40 md:hidden" } else { "hidden" }
            }
            on:click=close_menu
        ></div>
        <aside
            class=move || {
                let base = "fixed top-0 right-0 z-50 flex h-full w-64 flex-col bg-white p-6 shadow-xl transition-transform duration-300 md:hidden";
                if menu_open.get() {
                    format!("{base} translate-x-0")
                } else {
                    format!("{base} translate-x-full")
                }
            }
            role="dialog"
            aria-modal=move || menu_open.get().to_string()
            aria-hidden=move || (!menu_open.get()).to_string()
        >
            <button class="self-end text-3xl leading-none" aria-label="Close menu" on:click=close_menu>
                "×"
            </button>
            <div class="mt-6 flex flex-col gap-4">
                {Section::NAV
                    .into_iter()
                    .map(move |s| {
                        view! {
                            <a href=s.href() class=LINK_CLASS on:click=close_menu>
                                {s.id()}
                            </a>
                        }
                    })
                    .collect_view()}
                <a href=Section::Contact.href() class=CTA_CLASS on:click=close_menu>
                    "Get in Touch"
                </a>
            </div>
        </aside>
    }
}
