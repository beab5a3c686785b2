//! Minimal STOMP 1.2 frame codec
//!
//! Only what the single profile-update subscription needs: CONNECT and
//! SUBSCRIBE going out, CONNECTED / MESSAGE / ERROR coming back. Frames are
//! `COMMAND\nheader:value...\n\nbody\0`; a bare newline is a heartbeat.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StompError {
    #[error("empty frame")]
    Empty,

    #[error("missing NUL terminator")]
    Unterminated,

    #[error("malformed header line: {0}")]
    BadHeader(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub command: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Frame {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Wire encoding, NUL-terminated
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(64 + self.body.len());
        out.push_str(&self.command);
        out.push('\n');
        for (name, value) in &self.headers {
            out.push_str(name);
            out.push(':');
            out.push_str(value);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.body);
        out.push('\0');
        out
    }

    /// Parse one server frame. Returns `Ok(None)` for a heartbeat.
    pub fn parse(raw: &str) -> Result<Option<Frame>, StompError> {
        if raw.is_empty() {
            return Err(StompError::Empty);
        }
        if raw == "\n" || raw == "\r\n" {
            return Ok(None);
        }

        let raw = raw.strip_suffix('\0').ok_or(StompError::Unterminated)?;
        let (head, body) = raw
            .split_once("\n\n")
            .map(|(h, b)| (h, b.to_string()))
            .unwrap_or((raw, String::new()));

        let mut lines = head.lines();
        let command = lines.next().ok_or(StompError::Empty)?.trim_end_matches('\r');
        if command.is_empty() {
            return Err(StompError::Empty);
        }

        let mut headers = Vec::new();
        for line in lines {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| StompError::BadHeader(line.to_string()))?;
            headers.push((name.to_string(), value.to_string()));
        }

        Ok(Some(Frame {
            command: command.to_string(),
            headers,
            body,
        }))
    }
}

/// CONNECT frame for `host`
pub fn connect_frame(host: &str) -> Frame {
    Frame::new("CONNECT")
        .header("accept-version", "1.2")
        .header("host", host)
        .header("heart-beat", "0,0")
}

/// SUBSCRIBE frame for the per-user profile-update topic
pub fn subscribe_frame(subscription_id: &str, user_id: &str) -> Frame {
    Frame::new("SUBSCRIBE")
        .header("id", subscription_id)
        .header("destination", &profile_topic(user_id))
        .header("ack", "auto")
}

pub fn profile_topic(user_id: &str) -> String {
    format!("/topic/profile-update/{}", user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_frame_encoding() {
        let raw = connect_frame("localhost").encode();
        assert!(raw.starts_with("CONNECT\n"));
        assert!(raw.contains("accept-version:1.2\n"));
        assert!(raw.contains("host:localhost\n"));
        assert!(raw.ends_with("\n\n\0"));
    }

    #[test]
    fn test_subscribe_frame_destination() {
        let frame = subscribe_frame("sub-0", "u42");
        assert_eq!(
            frame.header_value("destination"),
            Some("/topic/profile-update/u42")
        );
        assert_eq!(frame.header_value("id"), Some("sub-0"));
    }

    #[test]
    fn test_parse_message_frame() {
        let raw = "MESSAGE\ndestination:/topic/profile-update/u1\nmessage-id:7\nsubscription:sub-0\n\n{\"userId\":\"u1\",\"profilePicturePath\":\"p.png\"}\0";
        let frame = Frame::parse(raw).unwrap().unwrap();
        assert_eq!(frame.command, "MESSAGE");
        assert_eq!(
            frame.header_value("destination"),
            Some("/topic/profile-update/u1")
        );
        assert!(frame.body.contains("profilePicturePath"));
    }

    #[test]
    fn test_roundtrip() {
        let frame = Frame::new("SEND")
            .header("destination", "/queue/x")
            .header("content-type", "text/plain");
        let mut frame = frame;
        frame.body = "hello".to_string();

        let parsed = Frame::parse(&frame.encode()).unwrap().unwrap();
        assert_eq!(parsed, frame);
    }

    #[test]
    fn test_heartbeat_and_errors() {
        assert_eq!(Frame::parse("\n").unwrap(), None);
        assert_eq!(Frame::parse(""), Err(StompError::Empty));
        assert_eq!(
            Frame::parse("MESSAGE\n\nbody"),
            Err(StompError::Unterminated)
        );
        assert!(matches!(
            Frame::parse("MESSAGE\nbadheader\n\n\0"),
            Err(StompError::BadHeader(_))
        ));
    }
}
