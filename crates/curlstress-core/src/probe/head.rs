//! Parse raw response header lines (as delivered by curl) into a `ResponseHead`.

/// Status line and headers of the final response of a probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    pub status: u16,
    /// Reason phrase from the status line; HTTP/2 responses carry none.
    pub reason: Option<String>,
    /// Header name/value pairs in arrival order, names as sent.
    pub headers: Vec<(String, String)>,
}

impl ResponseHead {
    /// First value of header `name` (case-insensitive).
    pub fn first(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Reason phrase, falling back to the canonical phrase for the status.
    pub fn reason_phrase(&self) -> String {
        if let Some(r) = self.reason.as_deref().filter(|r| !r.is_empty()) {
            return r.to_string();
        }
        http::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
            .to_string()
    }
}

/// One raw header line from curl as text. Bytes that are not UTF-8
/// (Latin-1 filenames, stray control bytes) are replaced, not dropped.
pub(crate) fn decode_header_line(data: &[u8]) -> String {
    String::from_utf8_lossy(data).trim_end().to_string()
}

/// Parse collected header lines into the head of the last response.
///
/// curl hands over the headers of every response it sees (redirect hops,
/// `100 Continue`), so each status line starts a fresh head.
pub(crate) fn parse_head_lines(lines: &[String]) -> ResponseHead {
    let mut head = ResponseHead::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            head = parse_status_line(line);
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            head.headers
                .push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    head
}

fn parse_status_line(line: &str) -> ResponseHead {
    let mut parts = line.splitn(3, ' ');
    let _version = parts.next();
    let status = parts
        .next()
        .and_then(|s| s.trim().parse::<u16>().ok())
        .unwrap_or(0);
    let reason = parts
        .next()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());
    ResponseHead {
        status,
        reason,
        headers: Vec::new(),
    }
}
