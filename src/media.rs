//! `<video>` element adapter for the playback engine
//!
//! Every media event the element emits goes through [`media_event`] and a
//! single sink, so the engine sees one ordered stream.

use std::rc::Rc;

use leptos::task::spawn_local;
use minireel_core::playback::{MediaEvent, MediaSurface};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

pub type EventSink = Rc<dyn Fn(MediaEvent)>;

pub struct HtmlVideoSurface {
    video: HtmlVideoElement,
    sink: EventSink,
}

impl HtmlVideoSurface {
    pub fn new(video: HtmlVideoElement, sink: EventSink) -> Self {
        Self { video, sink }
    }

    /// Point the element at a new URL
    pub fn load_source(&self, url: &str) {
        self.video.set_src(url);
        self.video.load();
    }

    /// Stop and release the current source
    pub fn unload(&self) {
        let _ = self.video.pause();
        let _ = self.video.remove_attribute("src");
        self.video.load();
    }
}

impl MediaSurface for HtmlVideoSurface {
    fn request_play(&self) {
        // The outcome is reported asynchronously, never from inside the
        // command that asked for it.
        let request = self.video.play();
        let sink = self.sink.clone();
        spawn_local(async move {
            let result = match request {
                Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                sink(MediaEvent::PlayRejected(describe_js_error(&e)));
            }
        });
    }

    fn pause(&self) {
        if let Err(e) = self.video.pause() {
            tracing::warn!(error = %describe_js_error(&e), "media: pause failed");
        }
    }

    fn seek(&self, time: f64) {
        self.video.set_current_time(time);
    }

    fn current_time(&self) -> f64 {
        self.video.current_time()
    }

    fn duration(&self) -> f64 {
        self.video.duration()
    }
}

fn describe_js_error(e: &JsValue) -> String {
    js_sys::Reflect::get(e, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{:?}", e))
}

/// Describe the element's current `MediaError`
fn describe_media_error(video: &HtmlVideoElement) -> String {
    match video.error() {
        Some(err) => {
            let kind = match err.code() {
                1 => "aborted",
                2 => "network error",
                3 => "decode error",
                4 => "source not supported",
                _ => "unknown error",
            };
            let message = err.message();
            if message.is_empty() {
                kind.to_string()
            } else {
                format!("{}: {}", kind, message)
            }
        }
        None => "unknown error".to_string(),
    }
}

/// Translate a DOM media event name into the engine's vocabulary
pub fn media_event(name: &str, video: &HtmlVideoElement) -> Option<MediaEvent> {
    Some(match name {
        "timeupdate" => MediaEvent::TimeUpdate,
        "durationchange" => MediaEvent::DurationChange,
        "loadedmetadata" => MediaEvent::LoadedMetadata,
        "play" => MediaEvent::Play,
        "pause" => MediaEvent::Pause,
        "waiting" => MediaEvent::Waiting,
        "canplay" => MediaEvent::CanPlay,
        "ended" => MediaEvent::Ended,
        "error" => MediaEvent::Error(describe_media_error(video)),
        _ => return None,
    })
}
