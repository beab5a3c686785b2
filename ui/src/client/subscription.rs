//! Profile-update subscription
//!
//! One persistent STOMP-over-WebSocket connection, subscribed to the
//! per-user `/topic/profile-update/{userId}` topic. The backend pushes
//! `{userId, profilePicturePath}` whenever someone the user can see changes
//! their picture.
//!
//! [`ProfileSocket`] is an explicit connection manager owned by `AppState`
//! and handed around by clone; there is no module-level singleton. It
//! enforces a single active connection and reconnects after a fixed delay
//! until `disconnect` is called.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};

use learnloop_shared::stomp::{connect_frame, profile_topic, subscribe_frame, Frame};
use learnloop_shared::ProfileUpdateMessage;

/// Callback invoked for each pushed profile update
pub type UpdateCallback = Rc<dyn Fn(ProfileUpdateMessage)>;

const RECONNECT_DELAY_MS: u32 = 5_000;

#[derive(Clone, Default)]
pub struct ProfileSocket {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    ws: Option<WebSocket>,
    ws_url: String,
    host: String,
    user_id: String,
    callback: Option<UpdateCallback>,
    /// Set by connect, cleared by disconnect; gates reconnection
    active: bool,
}

impl ProfileSocket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.inner
            .borrow()
            .ws
            .as_ref()
            .map(|ws| ws.ready_state() == WebSocket::OPEN)
            .unwrap_or(false)
    }

    /// Open the connection and subscribe for `user_id`. A second call while
    /// a connection exists is a no-op.
    pub fn connect(&self, base_url: &str, user_id: &str, on_update: UpdateCallback) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.ws.is_some() {
                return;
            }
            let base = base_url.trim_end_matches('/');
            inner.ws_url = format!(
                "{}/ws",
                base.replace("http://", "ws://").replace("https://", "wss://")
            );
            inner.host = host_of(base);
            inner.user_id = user_id.to_string();
            inner.callback = Some(on_update);
            inner.active = true;
        }
        self.open();
    }

    /// Close the connection and stop reconnecting
    pub fn disconnect(&self) {
        let ws = {
            let mut inner = self.inner.borrow_mut();
            inner.active = false;
            inner.callback = None;
            inner.ws.take()
        };
        if let Some(ws) = ws {
            let _ = ws.close();
            tracing::info!("profile socket disconnected");
        }
    }

    fn open(&self) {
        let (ws_url, host, user_id) = {
            let inner = self.inner.borrow();
            (inner.ws_url.clone(), inner.host.clone(), inner.user_id.clone())
        };

        tracing::debug!("connecting profile socket: {}", ws_url);
        let ws = match WebSocket::new(&ws_url) {
            Ok(ws) => ws,
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to create WebSocket: {:?}", e).into());
                self.schedule_reconnect();
                return;
            }
        };
        self.inner.borrow_mut().ws = Some(ws.clone());

        // Open: STOMP handshake
        let ws_for_open = ws.clone();
        let onopen = Closure::<dyn FnMut()>::new(move || {
            let frame = connect_frame(&host);
            if let Err(e) = ws_for_open.send_with_str(&frame.encode()) {
                web_sys::console::error_1(&format!("Failed to send CONNECT: {:?}", e).into());
            }
        });
        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        onopen.forget();

        // Messages: CONNECTED -> SUBSCRIBE, MESSAGE -> callback
        let manager = self.clone();
        let ws_for_msg = ws.clone();
        let subscription_id = format!("sub-{}", uuid::Uuid::new_v4());
        let topic = profile_topic(&user_id);
        let onmessage = Closure::<dyn FnMut(_)>::new(move |e: MessageEvent| {
            let Ok(txt) = e.data().dyn_into::<js_sys::JsString>() else {
                return;
            };
            let text: String = txt.into();

            match Frame::parse(&text) {
                Ok(Some(frame)) => match frame.command.as_str() {
                    "CONNECTED" => {
                        tracing::info!("profile socket connected, subscribing to {}", topic);
                        let frame = subscribe_frame(&subscription_id, &user_id);
                        if let Err(e) = ws_for_msg.send_with_str(&frame.encode()) {
                            web_sys::console::error_1(
                                &format!("Failed to send SUBSCRIBE: {:?}", e).into(),
                            );
                        }
                    }
                    "MESSAGE" => {
                        if frame.header_value("destination") != Some(topic.as_str()) {
                            return;
                        }
                        match serde_json::from_str::<ProfileUpdateMessage>(&frame.body) {
                            Ok(update) => {
                                let callback = manager.inner.borrow().callback.clone();
                                if let Some(callback) = callback {
                                    callback(update);
                                }
                            }
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("Bad profile-update payload: {}", e).into(),
                                );
                            }
                        }
                    }
                    "ERROR" => {
                        web_sys::console::error_1(
                            &format!("STOMP error: {}", frame.body).into(),
                        );
                    }
                    _ => {}
                },
                Ok(None) => {} // heartbeat
                Err(e) => {
                    web_sys::console::error_1(&format!("Bad STOMP frame: {}", e).into());
                }
            }
        });
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();

        let onerror = Closure::<dyn FnMut(_)>::new(move |e: ErrorEvent| {
            web_sys::console::error_1(&format!("WebSocket error: {}", e.message()).into());
        });
        ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        // Close: drop the handle and reconnect unless disconnected on purpose
        let manager = self.clone();
        let onclose = Closure::<dyn FnMut(_)>::new(move |e: CloseEvent| {
            tracing::debug!("profile socket closed: code={} reason={}", e.code(), e.reason());
            let active = {
                let mut inner = manager.inner.borrow_mut();
                inner.ws = None;
                inner.active
            };
            if active {
                manager.schedule_reconnect();
            }
        });
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
        onclose.forget();
    }

    fn schedule_reconnect(&self) {
        let manager = self.clone();
        gloo_timers::callback::Timeout::new(RECONNECT_DELAY_MS, move || {
            let should_open = {
                let inner = manager.inner.borrow();
                inner.active && inner.ws.is_none()
            };
            if should_open {
                tracing::debug!("reconnecting profile socket");
                manager.open();
            }
        })
        .forget();
    }
}

/// Host portion of an HTTP base URL, for the STOMP `host` header
fn host_of(base_url: &str) -> String {
    base_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .split('/')
        .next()
        .unwrap_or("")
        .split(':')
        .next()
        .unwrap_or("")
        .to_string()
}
