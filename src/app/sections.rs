use leptos::prelude::*;

use super::icons::IconSvg;
use crate::content::{Project, Section, Service, SkillCategory, PROJECTS, SERVICES, SKILLS};

const SECTION_TITLE: &str = "mb-12 text-center text-3xl font-bold md:text-4xl";

/// Card style for the hover lift. `shadow` adds the drop shadow services use.
fn lift_class(hovered: bool, shadow: bool) -> &'static str {
    match (hovered, shadow) {
        (true, true) => "-translate-y-2 shadow-[0_12px_24px_rgba(0,0,0,0.1)]",
        (true, false) => "-translate-y-2",
        (false, _) => "translate-y-0 shadow-none",
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="bg-white px-6 py-20">
            <div class="mx-auto max-w-6xl">
                <h2 class=SECTION_TITLE>"Skills & Technologies"</h2>
                <div class="grid gap-6 [grid-template-columns:repeat(auto-fit,minmax(280px,1fr))]">
                    {SKILLS.iter().map(|category| view! { <SkillCard category /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-6">
            <div class="mb-4 flex items-center">
                <IconSvg icon=category.icon size=32 class="text-indigo-500" />
                <h3 class="pl-5 text-2xl font-semibold">{category.title}</h3>
            </div>
            <div class="flex flex-wrap gap-2">
                {category
                    .items
                    .iter()
                    .map(|skill| {
                        view! {
                            <span class="rounded-2xl bg-gray-100 px-3 py-1.5 text-sm">{*skill}</span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=Section::Services.id() class="bg-[#f8f9fa] px-6 py-20">
            <div class="mx-auto max-w-6xl">
                <h2 class=SECTION_TITLE>"Services"</h2>
                <div class="grid gap-6 [grid-template-columns:repeat(auto-fit,minmax(240px,1fr))]">
                    {SERVICES.iter().map(|service| view! { <ServiceCard service /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    view! {
        <div
            class=move || {
                format!(
                    "cursor-pointer rounded-lg border border-gray-200 bg-white p-6 transition duration-300 {}",
                    lift_class(hovered.get(), true),
                )
            }
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="mb-4 text-indigo-500">
                <IconSvg icon=service.icon size=48 />
            </div>
            <h3 class="mb-2 text-xl font-semibold">{service.title}</h3>
            <p class="text-[0.95rem] leading-relaxed text-gray-600">{service.description}</p>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="bg-white px-6 py-20">
            <div class="mx-auto max-w-6xl">
                <h2 class="mb-4 text-center text-3xl font-bold md:text-4xl">"My Recent Work"</h2>
                <p class="mb-12 text-center text-lg text-gray-600">"Projects coming soon"</p>
                <div class="grid gap-6 [grid-template-columns:repeat(auto-fit,minmax(280px,1fr))]">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    view! {
        <div
            class=move || {
                format!(
                    "overflow-hidden rounded-lg border border-gray-200 transition-transform duration-300 {}",
                    lift_class(hovered.get(), false),
                )
            }
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="flex h-44 items-center justify-center bg-gradient-to-br from-[#667eea] to-[#764ba2] text-white">
                <IconSvg icon=crate::content::Icon::FolderKanban size=64 />
            </div>
            <div class="p-5">
                <h3 class="mb-2 text-xl font-semibold">{project.title}</h3>
                <p class="text-[0.95rem] leading-relaxed text-gray-600">{project.description}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lift_class() {
        assert_eq!(lift_class(false, true), lift_class(false, false));
        assert!(lift_class(true, false).contains("-translate-y-2"));
        assert!(!lift_class(true, false).contains("shadow"));
        assert!(lift_class(true, true).contains("shadow-[0_12px_24px"));
    }
}
