use std::time::Duration;

use dioxus::prelude::*;

const NOTICES_CSS: Asset = asset!("/assets/styling/notices.css");

/// How long a notice stays up before it dismisses itself.
const NOTICE_TTL: Duration = Duration::from_secs(6);
/// How often the stack looks for expired notices.
const EXPIRY_TICK: Duration = Duration::from_millis(500);
/// Older notices are dropped beyond this many.
const MAX_NOTICES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
    /// Milliseconds since the Unix epoch after which the notice is dropped.
    expires_at: u64,
}

/// User-facing messages: failed mutations, downloads, password changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    /// Append a notice, dropping the oldest beyond the cap. Returns its id.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.push_at(level, message, now_millis())
    }

    fn push_at(&mut self, level: NoticeLevel, message: impl Into<String>, now: u64) -> u64 {
        self.next_id += 1;
        self.entries.push(Notice {
            id: self.next_id,
            timestamp: current_time(),
            level,
            message: message.into(),
            expires_at: now + NOTICE_TTL.as_millis() as u64,
        });
        if self.entries.len() > MAX_NOTICES {
            let excess = self.entries.len() - MAX_NOTICES;
            self.entries.drain(..excess);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    fn has_expired(&self, now: u64) -> bool {
        self.entries.iter().any(|n| n.expires_at <= now)
    }

    /// Drop every notice whose time is up.
    pub fn expire(&mut self, now: u64) {
        self.entries.retain(|n| n.expires_at > now);
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

/// Show a notice. [`NoticeStack`] removes it once [`NOTICE_TTL`] has passed,
/// whether or not the caller is still mounted.
pub fn notify(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    match level {
        NoticeLevel::Error => tracing::error!("{}", message),
        NoticeLevel::Info | NoticeLevel::Success => tracing::info!("{}", message),
    }
    notices.write().push(level, message);
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

/// UTC wall-clock time; there is no timezone database on native.
#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let day = secs % 86_400;
    format!("{:02}:{:02}:{:02}", day / 3600, day % 3600 / 60, day % 60)
}

/// Stack of current notices, newest on top.
#[component]
pub fn NoticeStack() -> Element {
    let mut notices = use_notices();

    use_future(move || async move {
        loop {
            sleep(EXPIRY_TICK).await;
            let now = now_millis();
            if notices.peek().has_expired(now) {
                notices.write().expire(now);
            }
        }
    });

    let entries = notices().entries;

    if entries.is_empty() {
        return rsx! {
            document::Stylesheet { href: NOTICES_CSS }
        };
    }

    rsx! {
        document::Stylesheet { href: NOTICES_CSS }

        div {
            class: "notice-stack",
            role: "status",
            for entry in entries.into_iter().rev() {
                div {
                    key: "{entry.id}",
                    class: match entry.level {
                        NoticeLevel::Error => "notice error",
                        NoticeLevel::Success => "notice success",
                        NoticeLevel::Info => "notice info",
                    },
                    span { class: "notice-time", "{entry.timestamp}" }
                    span { class: "notice-message", "{entry.message}" }
                    button {
                        class: "notice-close",
                        title: "Dismiss",
                        onclick: move |_| notices.write().dismiss(entry.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_caps_and_dismiss() {
        let mut notices = Notices::default();
        let ids: Vec<u64> = (0..7)
            .map(|i| notices.push(NoticeLevel::Info, format!("notice {i}")))
            .collect();
        assert_eq!(notices.entries.len(), MAX_NOTICES);
        assert_eq!(notices.entries[0].message, "notice 2");

        notices.dismiss(ids[6]);
        assert_eq!(notices.entries.len(), MAX_NOTICES - 1);
        assert!(notices.entries.iter().all(|n| n.id != ids[6]));

        notices.dismiss(ids[0]);
        assert_eq!(notices.entries.len(), MAX_NOTICES - 1);
    }

    #[test]
    fn test_notices_expire_after_ttl() {
        let ttl = NOTICE_TTL.as_millis() as u64;
        let mut notices = Notices::default();
        notices.push_at(NoticeLevel::Success, "Password changed", 1_000);
        notices.push_at(NoticeLevel::Info, "Welcome", 3_000);

        assert!(!notices.has_expired(1_000 + ttl - 1));
        notices.expire(1_000 + ttl - 1);
        assert_eq!(notices.entries.len(), 2);

        assert!(notices.has_expired(1_000 + ttl));
        notices.expire(1_000 + ttl);
        assert_eq!(notices.entries.len(), 1);
        assert_eq!(notices.entries[0].message, "Welcome");

        notices.expire(3_000 + ttl);
        assert!(notices.entries.is_empty());
    }

    #[test]
    fn test_time_format() {
        let time = current_time();
        assert_eq!(time.len(), 8);
        assert_eq!(time.as_bytes()[2], b':');
    }
}
