use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Reflect};
use yew::prelude::*;

const RECOGNITION_APIS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

/// One entry of a recognition result list.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub transcript: String,
    pub is_final: bool,
}

/// Joins the final segments of a result batch; interim ones are still
/// changing and are left out.
pub fn final_transcript(segments: &[Segment]) -> Option<String> {
    let joined = segments
        .iter()
        .filter(|s| s.is_final)
        .map(|s| s.transcript.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
}

fn read_segments(event: &JsValue) -> Result<Vec<Segment>, JsValue> {
    let results = get(event, "results")?;
    let start = get(event, "resultIndex")?.as_f64().unwrap_or(0.0) as u32;
    let len = get(&results, "length")?.as_f64().unwrap_or(0.0) as u32;

    let mut segments = Vec::new();
    for i in start..len {
        let result = Reflect::get_u32(&results, i)?;
        let best = Reflect::get_u32(&result, 0)?;
        segments.push(Segment {
            transcript: get(&best, "transcript")?.as_string().unwrap_or_default(),
            is_final: get(&result, "isFinal")?.as_bool().unwrap_or(false),
        });
    }
    Ok(segments)
}

/// Browser speech recognition instance plus the handlers wired into it.
struct Recognizer {
    handle: JsValue,
    _handlers: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl Recognizer {
    fn create() -> Option<JsValue> {
        let window = web_sys::window()?;
        let constructor = RECOGNITION_APIS.iter().find_map(|name| {
            get(&window, name)
                .ok()
                .and_then(|value| value.dyn_into::<Function>().ok())
        })?;

        let handle = Reflect::construct(&constructor, &Array::new()).ok()?;
        let _ = Reflect::set(&handle, &"continuous".into(), &JsValue::TRUE);
        let _ = Reflect::set(&handle, &"interimResults".into(), &JsValue::TRUE);
        let _ = Reflect::set(&handle, &"lang".into(), &"en-US".into());
        Some(handle)
    }

    fn on(&mut self, event: &str, handler: Box<dyn FnMut(JsValue)>) {
        let closure = Closure::wrap(handler);
        let _ = Reflect::set(&self.handle, &format!("on{}", event).into(), closure.as_ref());
        self._handlers.push(closure);
    }

    fn call(&self, method: &str) -> Result<(), JsValue> {
        let function: Function = get(&self.handle, method)?.dyn_into()?;
        function.call0(&self.handle).map(|_| ())
    }
}

impl Drop for Recognizer {
    fn drop(&mut self) {
        for event in ["onstart", "onresult", "onerror", "onend"] {
            let _ = Reflect::set(&self.handle, &event.into(), &JsValue::NULL);
        }
        let _ = self.call("abort");
    }
}

#[derive(Properties, PartialEq)]
pub struct VoiceInputProps {
    pub on_transcript: Callback<String>,
}

#[function_component(VoiceInput)]
pub fn voice_input(props: &VoiceInputProps) -> Html {
    let recognizer = use_mut_ref(|| None::<Recognizer>);
    let supported = use_state(|| true);
    let listening = use_state(|| false);
    let error = use_state(|| None::<String>);

    // The parent hands over a fresh callback on every render; handlers read
    // the latest one through this cell instead of being rewired.
    let latest = use_mut_ref(|| props.on_transcript.clone());
    *latest.borrow_mut() = props.on_transcript.clone();

    {
        let recognizer = recognizer.clone();
        let supported = supported.clone();
        let listening = listening.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                match Recognizer::create() {
                    Some(handle) => {
                        let mut rec = Recognizer { handle, _handlers: Vec::new() };
                        {
                            let listening = listening.clone();
                            let error = error.clone();
                            rec.on("start", Box::new(move |_: JsValue| {
                                listening.set(true);
                                error.set(None);
                            }));
                        }
                        rec.on("result", Box::new(move |event: JsValue| {
                            match read_segments(&event) {
                                Ok(segments) => {
                                    if let Some(text) = final_transcript(&segments) {
                                        latest.borrow().emit(text);
                                    }
                                }
                                Err(e) => error!("Unreadable recognition result: {:?}", e),
                            }
                        }));
                        {
                            let listening = listening.clone();
                            let error = error.clone();
                            rec.on("error", Box::new(move |event: JsValue| {
                                let reason = get(&event, "error")
                                    .ok()
                                    .and_then(|v| v.as_string())
                                    .unwrap_or_else(|| "unknown".to_string());
                                error!("Speech recognition error: {}", reason);
                                error.set(Some(format!("Error: {}", reason)));
                                listening.set(false);
                            }));
                        }
                        rec.on("end", Box::new(move |_: JsValue| listening.set(false)));
                        *recognizer.borrow_mut() = Some(rec);
                    }
                    None => {
                        info!("Speech recognition not available");
                        supported.set(false);
                    }
                }

                move || {
                    recognizer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let toggle = {
        let recognizer = recognizer.clone();
        let listening = listening.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(rec) = recognizer.borrow().as_ref() {
                let method = if *listening { "stop" } else { "start" };
                if let Err(e) = rec.call(method) {
                    error!("Failed to {} recognition: {:?}", method, e);
                    error.set(Some("Failed to start microphone".to_string()));
                }
            }
        })
    };

    let title = match (*supported, *listening) {
        (false, _) => "Voice not supported",
        (true, true) => "Stop listening",
        (true, false) => "Start voice input",
    };

    html! {
        <div class="voice-input">
            <button
                type="button"
                class={classes!("voice-input-button", (*listening).then(|| "listening"))}
                disabled={!*supported}
                title={title}
                onclick={toggle}
            >
                { if *listening { "■" } else { "🎤" } }
            </button>
            if let Some(message) = (*error).clone() {
                <div class="voice-input-error">{ message }</div>
            }
            if !*supported {
                <div class="voice-input-notice">
                    { "Voice recognition requires Chrome, Edge, or Safari browsers" }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(transcript: &str, is_final: bool) -> Segment {
        Segment { transcript: transcript.to_string(), is_final }
    }

    #[test]
    fn only_final_segments_are_emitted() {
        let segments = [seg("need an ", true), seg("internsh", false), seg(" in python", true)];
        assert_eq!(final_transcript(&segments).as_deref(), Some("need an in python"));
    }

    #[test]
    fn interim_only_batch_emits_nothing() {
        assert_eq!(final_transcript(&[seg("hel", false)]), None);
        assert_eq!(final_transcript(&[seg("   ", true)]), None);
    }
}
