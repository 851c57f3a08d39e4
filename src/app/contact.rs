use chrono::Utc;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::config::SITE;
use crate::contact::{
    submit, ContactState, ContactStore, Field, Notification, NotificationId, NotificationKind,
    SheetTransport, NOTIFICATION_TTL,
};
use crate::content::Section;

const INPUT_CLASS: &str = "mb-4 box-border w-full rounded border border-gray-300 p-3.5 text-base focus:outline-none focus:ring-2 focus:ring-indigo-500";

impl ContactStore for RwSignal<ContactState> {
    fn modify<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());
    let transport = SheetTransport::new(SITE.submit_url);

    // Auto-dismiss. `start` clears any pending timeout before arming a new
    // one, and the timeout is cleared when this view is torn down.
    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |id: NotificationId| {
            state.update(|s| {
                s.notification.expire(id);
            });
        },
        NOTIFICATION_TTL.as_millis() as f64,
    );
    let visible_id = Memo::new(move |_| state.with(|s| s.notification.visible_id()));
    Effect::watch(
        move || visible_id.get(),
        move |id, _, _| match id {
            Some(id) => start(*id),
            None => stop(),
        },
        false,
    );

    let busy = Memo::new(move |_| state.with(|s| s.busy));
    let value_of = move |field: Field| state.with(|s| s.form.get(field).to_string());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            submit(&state, &transport, Utc::now()).await;
        });
    };

    view! {
        <section id=Section::Contact.id() class="bg-[#f8f9fa] px-6 py-20">
            <div class="mx-auto max-w-xl">
                <h2 class="mb-4 text-center text-3xl font-bold md:text-4xl">
                    "Let's Work Together"
                </h2>
                <p class="mb-10 text-center text-lg text-gray-600">
                    "Have a project in mind? Send me a message!"
                </p>
                <form
                    class="rounded-lg border border-gray-200 bg-white p-8"
                    novalidate=true
                    on:submit=on_submit
                >
                    <input
                        type="text"
                        placeholder="Name *"
                        class=INPUT_CLASS
                        prop:value=move || value_of(Field::Name)
                        on:input=move |ev| {
                            state.update(|s| s.form.set(Field::Name, event_target_value(&ev)))
                        }
                    />
                    <input
                        type="email"
                        placeholder="Email *"
                        class=INPUT_CLASS
                        prop:value=move || value_of(Field::Email)
                        on:input=move |ev| {
                            state.update(|s| s.form.set(Field::Email, event_target_value(&ev)))
                        }
                    />
                    <textarea
                        placeholder="Message *"
                        rows=6
                        class=format!("{INPUT_CLASS} resize-y font-[inherit]")
                        prop:value=move || value_of(Field::Message)
                        on:input=move |ev| {
                            state.update(|s| s.form.set(Field::Message, event_target_value(&ev)))
                        }
                    ></textarea>
                    <button
                        type="submit"
                        disabled=move || busy.get()
                        class=move || {
                            if busy.get() {
                                "w-full rounded bg-gray-300 p-4 font-semibold text-white cursor-not-allowed"
                            } else {
                                "w-full rounded bg-indigo-500 p-4 font-semibold text-white cursor-pointer hover:bg-indigo-600"
                            }
                        }
                    >
                        {move || if busy.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
        <Toast state />
    }
}

#[component]
fn Toast(state: RwSignal<ContactState>) -> impl IntoView {
    // keyed on the id so a replacement redraws and restarts the progress bar
    let shown = Memo::new(move |_| {
        state.with(|s| {
            s.notification
                .visible_id()
                .zip(s.notification.current().cloned())
        })
    });

    move || {
        shown.get().map(|(_, Notification { message, kind })| {
            let color = match kind {
                NotificationKind::Success => "bg-[#10b981]",
                NotificationKind::Error => "bg-[#ef4444]",
            };
            view! {
                <div
                    role="status"
                    class=format!(
                        "fixed bottom-6 left-1/2 z-[9999] max-w-[90%] -translate-x-1/2 overflow-hidden rounded-lg text-white shadow-[0_4px_12px_rgba(0,0,0,0.2)] {color}",
                    )
                >
                    <div class="flex items-center justify-between gap-3 px-6 py-4">
                        <span class="flex-1">{message}</span>
                        <button
                            class="shrink-0 text-2xl leading-none"
                            aria-label="Dismiss"
                            on:click=move |_| state.update(|s| s.notification.dismiss())
                        >
                            "×"
                        </button>
                    </div>
                    <div
                        class="toast-progress h-1 w-full bg-white/30"
                        style=format!("animation-duration: {}s", NOTIFICATION_TTL.as_secs())
                    ></div>
                </div>
            }
        })
    }
}
