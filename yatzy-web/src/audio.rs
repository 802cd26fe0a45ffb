//! Celebration clip playback.
//!
//! Playback is best effort: blocked autoplay or a missing asset is logged at
//! `warn` and otherwise ignored.
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlAudioElement;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static CLIP: RefCell<Option<HtmlAudioElement>> = const { RefCell::new(None) };
}

#[cfg(target_arch = "wasm32")]
fn clip() -> Option<HtmlAudioElement> {
    CLIP.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            match HtmlAudioElement::new_with_src(&crate::paths::celebration_audio()) {
                Ok(audio) => {
                    audio.set_preload("auto");
                    *slot = Some(audio);
                }
                Err(err) => {
                    log::warn!(
                        "Audio playback failed: {}",
                        crate::dom::js_error_message(&err)
                    );
                }
            }
        }
        slot.clone()
    })
}

/// Play the celebration clip from the start and stop it after the clip length.
pub fn play_yatzy_sound() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(audio) = clip() else {
            return;
        };
        audio.set_current_time(0.0);
        let promise = match audio.play() {
            Ok(promise) => promise,
            Err(err) => {
                log::warn!(
                    "Audio playback failed: {}",
                    crate::dom::js_error_message(&err)
                );
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!(
                    "Audio playback failed: {}",
                    crate::dom::js_error_message(&err)
                );
                return;
            }
            schedule_stop(audio);
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_stop(audio: HtmlAudioElement) {
    let Some(win) = crate::dom::window() else {
        return;
    };
    let stop = Closure::once(move || {
        let _ = audio.pause();
        audio.set_current_time(0.0);
    });
    if win
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            stop.as_ref().unchecked_ref(),
            yatzy_game::constants::CELEBRATION_CLIP_MS,
        )
        .is_ok()
    {
        stop.forget();
    }
}
