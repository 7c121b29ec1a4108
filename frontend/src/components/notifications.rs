//! Stack of transient banners raised through [`Notifier`].

use leptos::*;

use crate::services::Notifier;

/// Fixed top-right container; one element per live banner.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = Notifier::use_notifier().notifications();

    view! {
        <div class="notification-stack" role="status" aria-live="polite">
            <For
                each=move || notifications.get()
                key=|notification| notification.id
                children=move |notification| {
                    let id = notification.id;
                    // Keyed by id only: the element survives phase changes
                    // so the slide transition can run.
                    let class = move || {
                        notifications.with(|list| {
                            list.iter()
                                .find(|n| n.id == id)
                                .map(|n| n.class_attr())
                                .unwrap_or_default()
                        })
                    };
                    view! {
                        <div class=class>{notification.message}</div>
                    }
                }
            />
        </div>
    }
}
