use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::typing_greeting::TypingGreeting;
use crate::components::voice_input::VoiceInput;
use crate::config;
use crate::lead::error::InquiryError;
use crate::lead::inquiry::ValidInquiry;
use crate::lead::submission::{FormRelay, LeadSession, Relay};

const GREETING: &str = "Hi! 👋 I'm Ranbo. Drop your details below, and I'll send them directly to our team's email for a quick response!";

pub const QUICK_REPLIES: [&str; 3] = ["Internship Details", "Custom Software", "Contact Team"];

pub enum ChatWidgetMsg {
    Toggle,
    Close,
    SetName(String),
    SetContact(String),
    SetMessage(String),
    QuickReply(&'static str),
    AppendTranscript(String),
    Submit,
    Delivered(ValidInquiry, Result<(), InquiryError>),
    Reset,
}

pub struct ChatWidget {
    session: LeadSession,
    relay: FormRelay,
    // Dropping the handle cancels the timer, so an unmounted widget never
    // receives a late Reset.
    reset_timer: Option<Timeout>,
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: LeadSession::default(),
            relay: FormRelay::new(config::get_relay_url()),
            reset_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::Toggle => {
                self.session.toggle();
                true
            }
            ChatWidgetMsg::Close => {
                self.session.close();
                true
            }
            ChatWidgetMsg::SetName(name) => {
                self.session.draft.name = name;
                true
            }
            ChatWidgetMsg::SetContact(contact) => {
                self.session.draft.contact = contact;
                true
            }
            ChatWidgetMsg::SetMessage(message) => {
                self.session.draft.message = message;
                true
            }
            ChatWidgetMsg::QuickReply(label) => {
                self.session.draft.set_quick_reply(label);
                true
            }
            ChatWidgetMsg::AppendTranscript(text) => {
                self.session.draft.append_text(&text);
                true
            }
            ChatWidgetMsg::Submit => {
                let Some(inquiry) = self.session.begin_submit() else {
                    return true;
                };

                let relay = self.relay.clone();
                ctx.link().send_future(async move {
                    let outcome = relay.deliver(&inquiry.payload()).await;
                    ChatWidgetMsg::Delivered(inquiry, outcome)
                });
                true
            }
            ChatWidgetMsg::Delivered(inquiry, outcome) => {
                if let Some(link) = self.session.complete(&inquiry, outcome, config::WHATSAPP_NUMBER) {
                    open_in_new_tab(&link);
                }

                if let Some(delay) = self.session.reset_due_in() {
                    let link = ctx.link().clone();
                    self.reset_timer = Some(Timeout::new(delay, move || {
                        link.send_message(ChatWidgetMsg::Reset);
                    }));
                }
                true
            }
            ChatWidgetMsg::Reset => {
                self.reset_timer = None;
                self.session.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_| ChatWidgetMsg::Toggle);
        let is_open = self.session.is_open();

        html! {
            <div class="chat-widget">
                <button
                    onclick={toggle}
                    class={classes!("chat-widget-toggle", is_open.then(|| "open"))}
                    aria-label="Toggle chat"
                >
                    if is_open {
                        { "✕" }
                    } else {
                        { "💬" }
                    }
                </button>

                if is_open {
                    <div class="chat-widget-panel">
                        { self.render_header(ctx) }
                        <div class="chat-widget-body">
                            if self.session.submitted() {
                                { self.render_success(ctx) }
                            } else {
                                { self.render_form(ctx) }
                            }
                        </div>
                    </div>
                }
            </div>
        }
    }
}

impl ChatWidget {
    fn render_header(&self, ctx: &Context<Self>) -> Html {
        let on_transcript = ctx.link().callback(ChatWidgetMsg::AppendTranscript);

        html! {
            <div class="chat-widget-header">
                <div class="chat-widget-identity">
                    <div class="chat-widget-avatar">{ "🤖" }</div>
                    <div>
                        <h4>{ "Ranbo" }</h4>
                        <p>{ "AI Assistant" }</p>
                    </div>
                </div>
                <div class="chat-widget-actions">
                    <VoiceInput on_transcript={on_transcript} />
                    <button
                        class="chat-widget-minimize"
                        onclick={ctx.link().callback(|_| ChatWidgetMsg::Close)}
                    >
                        { "−" }
                    </button>
                </div>
            </div>
        }
    }

    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let draft = &self.session.draft;
        let greeting_active = self.session.is_open() && !self.session.submitted();

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ChatWidgetMsg::Submit
        });

        html! {
            <div class="chat-widget-conversation">
                <div class="chat-bubble">
                    <TypingGreeting text={GREETING} active={greeting_active} />
                </div>

                if let Some(error) = self.session.error() {
                    <div class={classes!("chat-widget-error", error.is_delivery_failure().then(|| "delivery"))}>
                        { error.to_string() }
                    </div>
                }

                <div class="quick-replies">
                    { for QUICK_REPLIES.into_iter().map(|label| {
                        html! {
                            <button
                                key={label}
                                type="button"
                                onclick={ctx.link().callback(move |_| ChatWidgetMsg::QuickReply(label))}
                            >
                                { label }
                            </button>
                        }
                    }) }
                </div>

                <form class="chat-widget-form" onsubmit={onsubmit}>
                    <input
                        type="text"
                        placeholder="Full Name"
                        value={draft.name.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            ChatWidgetMsg::SetName(input.value())
                        })}
                    />
                    <input
                        type="text"
                        placeholder="Email or Phone (e.g., 8247392437)"
                        value={draft.contact.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            ChatWidgetMsg::SetContact(input.value())
                        })}
                    />
                    <textarea
                        placeholder="How can Ranbo help you?"
                        rows="3"
                        value={draft.message.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            ChatWidgetMsg::SetMessage(input.value())
                        })}
                    />
                    <button
                        type="submit"
                        class="chat-widget-send"
                        disabled={!self.session.accepts_submit()}
                    >
                        { if self.session.is_submitting() { "Sending..." } else { "Send Inquiry" } }
                    </button>

                    <div class="chat-widget-divider"><span>{ "OR" }</span></div>

                    <a
                        class="chat-widget-whatsapp"
                        href={config::whatsapp_chat_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        { "Chat on WhatsApp" }
                    </a>
                </form>
            </div>
        }
    }

    fn render_success(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="chat-widget-success">
                <div class="chat-widget-success-icon">{ "✓" }</div>
                <h5>{ "Success!" }</h5>
                <p>
                    { "Thanks " }<b>{ &self.session.draft.name }</b>
                    { ". Ranbo has received your message. We'll be in touch!" }
                </p>
                <button onclick={ctx.link().callback(|_| ChatWidgetMsg::Close)}>
                    { "Close Chat" }
                </button>
            </div>
        }
    }
}

fn open_in_new_tab(url: &str) {
    let opened = window().map(|w| w.open_with_url_and_target(url, "_blank"));
    if !matches!(opened, Some(Ok(_))) {
        warn!("Could not open {}", url);
    }
}
