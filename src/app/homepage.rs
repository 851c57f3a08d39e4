use leptos::prelude::*;
use leptos_meta::Title;

use super::avatar::{Avatar, HeroDevices};
use super::contact::ContactSection;
use super::footer::Footer;
use super::sections::{Projects, Services, Skills};
use crate::config::SITE;
use crate::content::Section;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <HeroDevices />
        <About />
        <Skills />
        <Services />
        <Projects />
        <ContactSection />
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Hero.id() class="bg-white px-6 pt-20 pb-24 text-center">
            <div class="mx-auto max-w-3xl">
                <h2 class="mb-4 text-4xl font-bold md:text-5xl">"Full-Stack Developer"</h2>
                <p class="mb-8 text-lg italic leading-relaxed text-gray-600 md:text-2xl">
                    "My focus is on transforming complex challenges into clean, modern, and high-performance web applications. I manage the end-to-end development lifecycle, ensuring solutions are scalable, maintainable, and deliver superior value to the end-user."
                </p>
                <Avatar />
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="bg-[#6E07F3] px-6 py-20 text-white">
            <div class="mx-auto max-w-3xl text-center">
                <h2 class="mb-4 text-3xl font-bold md:text-4xl">
                    {format!("Hi, I'm {}. Nice to meet you.", SITE.owner)}
                </h2>
                <p class="mt-6 text-lg italic leading-loose">
                    "My passion for web development began with curiosity and has grown into a commitment to building elegant, efficient solutions. "
                    "I approach every project with a problem-solving mindset, focusing on clean code, scalable architecture, and user-centric design. "
                    "I'm naturally curious, detail-oriented, and constantly refining my skills to stay at the forefront of web technologies."
                </p>
            </div>
        </section>
    }
}
