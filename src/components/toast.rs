//! Toast Component
//!
//! Renders the notices held in `AppContext`.

use leptos::prelude::*;

use crate::context::{AppContext, NoticeKind};

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="toast-stack" role="status">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "toast toast-success",
                        NoticeKind::Error => "toast toast-error",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class>
                            <span>{notice.message}</span>
                            <button type="button" class="toast-close" on:click=move |_| ctx.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
