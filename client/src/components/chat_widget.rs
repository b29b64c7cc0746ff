//! Floating chat assistant: launcher button, transcript panel, quick
//! replies, and the scripted reply pipeline.
//!
//! Each submission computes its reply decision synchronously from the
//! submitted text, then delivers it after the typing delay. Decisions ride
//! with their own timer, so two quick submissions each get the right reply
//! even though deliveries are not serialized.

use leptos::prelude::*;

use crate::chat::config::ChatConfig;
use crate::chat::storage;
use crate::state::ChatState;

#[cfg(feature = "hydrate")]
use crate::chat::navigator::{apply_side_effect, DomNavigator};

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// The chat widget, mounted once per page.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let config = expect_context::<StoredValue<ChatConfig>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let restored = RwSignal::new(false);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Resume a saved session once, before any save can clobber it.
    Effect::new(move || {
        if restored.get() {
            return;
        }
        restored.set(true);
        if let Some(saved) = storage::load() {
            chat.update(|state| state.transcript = saved);
        }
    });

    // Keep the newest turn in view.
    Effect::new(move || {
        let _ = chat.with(|state| state.transcript.turns().len());
        let _ = chat.with(|state| state.pending_replies);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let submit = move |text: String| {
        // The reply decision is made at submit time; the delayed task only
        // delivers it, tagged with the session it belongs to.
        let mut pending = None;
        chat.update(|state| {
            pending = config.with_value(|config| state.submit(&text, config, now_ms()));
        });
        let Some((session, decision)) = pending else {
            return;
        };
        chat.with_untracked(|state| storage::save(&state.transcript));

        #[cfg(feature = "hydrate")]
        {
            let delay_ms = config.with_value(|config| config.reply_delay_ms);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms)))
                    .await;
                let mut delivered = false;
                chat.update(|state| {
                    delivered = state.deliver(session, &decision, now_ms());
                });
                // A reset since submission makes the delivery stale; skip
                // the save and the side effect too.
                if delivered {
                    chat.with_untracked(|state| storage::save(&state.transcript));
                    apply_side_effect(&DomNavigator, decision.side_effect.as_ref());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, decision);
        }
    };

    let send_input = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        input.set(String::new());
        submit(text);
    };

    let on_send_click = move |_| send_input();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_input();
        }
    };

    let on_toggle = move |_| chat.update(ChatState::toggle_open);

    let on_reset = move |_| {
        config.with_value(|config| chat.update(|state| state.reset(config)));
        storage::clear();
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-widget">
            <Show when=move || chat.get().open>
                <div class="chat-widget__panel">
                    <div class="chat-widget__header">
                        <span class="chat-widget__title">"Assistente Vetor TI"</span>
                        <button class="chat-widget__reset" on:click=on_reset title="Nova conversa">
                            "Nova conversa"
                        </button>
                        <button class="chat-widget__close" on:click=on_toggle aria-label="Fechar chat">
                            "×"
                        </button>
                    </div>

                    <div class="chat-widget__messages" node_ref=messages_ref>
                        {move || {
                            chat.with(|state| {
                                state
                                    .transcript
                                    .turns()
                                    .iter()
                                    .map(|turn| {
                                        let class = if turn.is_bot {
                                            "chat-widget__message chat-widget__message--bot"
                                        } else {
                                            "chat-widget__message chat-widget__message--user"
                                        };
                                        let text = turn.text.clone();
                                        view! { <div class=class>{text}</div> }
                                    })
                                    .collect::<Vec<_>>()
                            })
                        }}
                        <Show when=move || { chat.get().pending_replies > 0 }>
                            <div class="chat-widget__typing" aria-live="polite">
                                "digitando..."
                            </div>
                        </Show>
                    </div>

                    <div class="chat-widget__quick-replies">
                        {config
                            .with_value(|config| config.quick_replies.clone())
                            .into_iter()
                            .map(|reply| {
                                let text = reply.clone();
                                view! {
                                    <button
                                        class="chat-widget__quick-reply"
                                        on:click=move |_| submit(text.clone())
                                    >
                                        {reply}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="chat-widget__input-row">
                        <input
                            class="chat-widget__input"
                            type="text"
                            placeholder="Escreva a sua mensagem..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            class="btn btn--primary chat-widget__send"
                            on:click=on_send_click
                            disabled=move || !can_send()
                        >
                            "Enviar"
                        </button>
                    </div>
                </div>
            </Show>

            <button class="chat-widget__launcher" on:click=on_toggle aria-label="Abrir chat">
                {move || if chat.get().open { "×" } else { "💬" }}
            </button>
        </div>
    }
}
