//! # Speech-to-text for the write screen
//!
//! Wraps the browser's `SpeechRecognition` (or the prefixed
//! `webkitSpeechRecognition`). The API is not part of `web-sys`' stable set, so
//! the recognizer is driven through `js_sys::Reflect`.
//!
//! [`SpeechSession::start`] returns a handle that owns the recognizer and its
//! callbacks. Keep it in component state: [`SpeechSession::stop`] or dropping
//! the handle detaches the callbacks and stops that recognizer, so an unmounted
//! screen never receives late results.
//!
//! Only finalised result segments are delivered; interim guesses are skipped
//! so nothing is appended twice.
//!
//! Native builds report the capability as unsupported.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech recognition is not supported on this platform")]
    Unsupported,
    #[error("speech recognition failed to start: {0}")]
    Start(String),
}

#[cfg(target_arch = "wasm32")]
pub use web::{speech_supported, SpeechSession};

#[cfg(not(target_arch = "wasm32"))]
pub use native::{speech_supported, SpeechSession};

#[cfg(target_arch = "wasm32")]
mod web {
    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use super::SpeechError;

    const CONSTRUCTORS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

    fn constructor() -> Option<Function> {
        let window = web_sys::window()?;
        CONSTRUCTORS.iter().find_map(|name| {
            Reflect::get(&window, &JsValue::from_str(name))
                .ok()
                .and_then(|ctor| ctor.dyn_into::<Function>().ok())
        })
    }

    pub fn speech_supported() -> bool {
        constructor().is_some()
    }

    fn js_error(err: JsValue) -> SpeechError {
        SpeechError::Start(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }

    fn get(target: &JsValue, key: &str) -> JsValue {
        Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
    }

    fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), SpeechError> {
        Reflect::set(target, &JsValue::from_str(key), value)
            .map(|_| ())
            .map_err(js_error)
    }

    fn call(target: &JsValue, method: &str) -> Result<(), SpeechError> {
        let function: Function = get(target, method).dyn_into().map_err(js_error)?;
        function.call0(target).map(|_| ()).map_err(js_error)
    }

    /// Concatenate the transcripts of the final results in a `result` event.
    fn final_transcript(event: &JsValue) -> String {
        let results = get(event, "results");
        let start = get(event, "resultIndex").as_f64().unwrap_or(0.0) as u32;
        let len = get(&results, "length").as_f64().unwrap_or(0.0) as u32;
        let mut text = String::new();
        for i in start..len {
            let result = Reflect::get(&results, &JsValue::from(i)).unwrap_or(JsValue::UNDEFINED);
            if !get(&result, "isFinal").is_truthy() {
                continue;
            }
            let best = Reflect::get(&result, &JsValue::from(0u32)).unwrap_or(JsValue::UNDEFINED);
            if let Some(transcript) = get(&best, "transcript").as_string() {
                text.push_str(&transcript);
            }
        }
        text
    }

    /// A running recognizer. Dropping it stops recognition.
    pub struct SpeechSession {
        recognition: JsValue,
        _on_result: Closure<dyn FnMut(JsValue)>,
        _on_end: Closure<dyn FnMut(JsValue)>,
    }

    impl SpeechSession {
        /// Start continuous recognition in `lang`. `on_text` receives each
        /// finalised segment, `on_end` fires when the browser ends the session
        /// (silence, error or permission denial).
        pub fn start(
            lang: &str,
            mut on_text: impl FnMut(String) + 'static,
            mut on_end: impl FnMut() + 'static,
        ) -> Result<Self, SpeechError> {
            let ctor = constructor().ok_or(SpeechError::Unsupported)?;
            let recognition = Reflect::construct(&ctor, &Array::new()).map_err(js_error)?;
            set(&recognition, "lang", &JsValue::from_str(lang))?;
            set(&recognition, "continuous", &JsValue::TRUE)?;
            set(&recognition, "interimResults", &JsValue::TRUE)?;

            let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                let text = final_transcript(&event);
                if !text.is_empty() {
                    on_text(text);
                }
            });
            let on_end = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| on_end());

            set(&recognition, "onresult", on_result.as_ref())?;
            set(&recognition, "onend", on_end.as_ref())?;
            set(&recognition, "onerror", on_end.as_ref())?;
            call(&recognition, "start")?;
            tracing::info!("speech recognition started ({lang})");

            Ok(Self {
                recognition,
                _on_result: on_result,
                _on_end: on_end,
            })
        }

        /// Stop this recognizer. Results still in flight are discarded.
        pub fn stop(self) {
            self.detach();
            tracing::info!("speech recognition stopped");
        }

        /// Clear the handlers, then stop. Safe to repeat.
        fn detach(&self) {
            for handler in ["onresult", "onend", "onerror"] {
                let _ = set(&self.recognition, handler, &JsValue::NULL);
            }
            if let Err(e) = call(&self.recognition, "stop") {
                tracing::warn!("failed to stop speech recognition: {e}");
            }
        }
    }

    impl Drop for SpeechSession {
        fn drop(&mut self) {
            self.detach();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::convert::Infallible;

    use super::SpeechError;

    pub fn speech_supported() -> bool {
        false
    }

    /// Never constructed: `start` always fails natively.
    pub struct SpeechSession(Infallible);

    impl SpeechSession {
        pub fn start(
            _lang: &str,
            _on_text: impl FnMut(String) + 'static,
            _on_end: impl FnMut() + 'static,
        ) -> Result<Self, SpeechError> {
            Err(SpeechError::Unsupported)
        }

        pub fn stop(self) {
            match self.0 {}
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_reports_unsupported() {
        assert!(!speech_supported());
        let started = SpeechSession::start("th-TH", |_| {}, || {});
        assert!(matches!(started, Err(SpeechError::Unsupported)));
    }
}
