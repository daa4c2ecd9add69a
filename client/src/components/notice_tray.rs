//! Toast tray rendering [`NoticesState`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once at the app root. Notices raised through [`notify`] (rollbacks,
//! failed requests, refused drags) are removed after `AUTO_DISMISS_MS` or on
//! click.

use leptos::prelude::*;

use crate::state::notices::{NoticeLevel, NoticesState};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 6_000;

/// Push an error notice and schedule its removal.
pub fn notify_error(notices: RwSignal<NoticesState>, message: String) {
    notify(notices, NoticeLevel::Error, message);
}

/// Push a notice and schedule its removal.
pub fn notify(notices: RwSignal<NoticesState>, level: NoticeLevel, message: String) {
    let mut id = 0;
    notices.update(|n| id = n.push(level, message));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            notices.update(|n| n.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();

    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        let is_error = notice.level == NoticeLevel::Error;
                        view! {
                            <div
                                class="notice"
                                class:notice--error=is_error
                            >
                                <span class="notice__message">{notice.message}</span>
                                <button
                                    class="notice__dismiss"
                                    on:click=move |_| notices.update(|n| n.dismiss(id))
                                    aria-label="Dismiss"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
