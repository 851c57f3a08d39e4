use leptos::prelude::*;

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <img
            src="/images/avatar.svg"
            alt="Profile"
            class="mx-auto h-40 w-40 rounded-full border-4 border-indigo-100 md:h-48 md:w-48"
        />
    }
}

#[component]
pub fn HeroDevices() -> impl IntoView {
    view! {
        <div class="flex justify-center bg-white pt-10">
            <img
                src="/images/hero-devices.svg"
                alt="Hero Devices"
                class="w-full max-w-3xl px-6"
            />
        </div>
    }
}
