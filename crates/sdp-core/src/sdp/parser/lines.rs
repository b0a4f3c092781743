//! Line-oriented view over an SDP document.
//!
//! SDP is CRLF-delimited and the dialects handled here are sensitive to line
//! position, so the parser works over an indexed line table with two scan
//! primitives instead of a token stream: [`SdpLines::lookup`] (first
//! matching line's suffix within a range) and [`SdpLines::find_index`].

use tracing::error;

/// An SDP document split into lines.
pub(crate) struct SdpLines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> SdpLines<'a> {
    pub fn new(text: &'a str) -> Self {
        // lines() also tolerates bare-LF input from non-conforming stacks
        Self {
            lines: text.lines().map(str::trim_end).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    /// Returns the suffix of the first line starting with `prefix` within
    /// `[from, to)` (`to = None` scans to the end of the document).
    ///
    /// With `force` set, a miss is logged at error level: the caller
    /// expected the line to be present, but its absence degrades the parse
    /// rather than aborting it. Without `force` a miss is an ordinary
    /// optional-field absence and stays silent.
    pub fn lookup(
        &self,
        prefix: &str,
        force: bool,
        from: usize,
        to: Option<usize>,
    ) -> Option<&'a str> {
        let to = to.unwrap_or(self.lines.len()).min(self.lines.len());
        for line in self.lines.get(from..to).unwrap_or(&[]) {
            if let Some(rest) = line.strip_prefix(prefix) {
                return Some(rest);
            }
        }
        if force {
            error!(prefix, from, "expected SDP line not found");
        }
        None
    }

    /// Returns the index of the first line starting with `prefix` within
    /// `[from, to)`, or `None`.
    pub fn find_index(&self, prefix: &str, from: usize, to: Option<usize>) -> Option<usize> {
        let to = to.unwrap_or(self.lines.len()).min(self.lines.len());
        (from..to).find(|&i| self.lines[i].starts_with(prefix))
    }

    /// Indexes of every line starting with `prefix`, in document order.
    pub fn find_all(&self, prefix: &str) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.starts_with(prefix))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "v=0\r\no=- 1 2 IN IP4 0.0.0.0\r\ns=-\r\nm=audio 9 RTP/AVP 0\r\na=mid:0\r\nm=video 9 RTP/AVP 96\r\na=mid:1\r\n";

    #[test]
    fn test_lookup_returns_suffix() {
        let lines = SdpLines::new(DOC);
        assert_eq!(lines.lookup("o=", false, 0, None), Some("- 1 2 IN IP4 0.0.0.0"));
        assert_eq!(lines.lookup("a=mid:", false, 0, None), Some("0"));
    }

    #[test]
    fn test_lookup_respects_range() {
        let lines = SdpLines::new(DOC);
        let video = lines.find_index("m=video", 0, None).unwrap();
        assert_eq!(lines.lookup("a=mid:", false, video, None), Some("1"));
        assert_eq!(lines.lookup("a=mid:", false, 0, Some(video)), Some("0"));
        assert_eq!(lines.lookup("v=", false, 1, None), None);
    }

    #[test]
    fn test_find_all() {
        let lines = SdpLines::new(DOC);
        assert_eq!(lines.find_all("m=").len(), 2);
        assert!(lines.find_all("b=").is_empty());
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let lines = SdpLines::new(DOC);
        assert_eq!(lines.lookup("v=", false, 100, None), None);
        assert_eq!(lines.find_index("v=", 100, Some(2)), None);
    }
}
