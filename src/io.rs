use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{Transcript, TranscriptSegment};

/// Parse a transcript segments file (JSON array of {start, end, text})
pub fn parse_segments_file(path: &Path) -> Result<Transcript> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_segments_json(&content)
}

/// Parse a transcript segments JSON string
pub fn parse_segments_json(json: &str) -> Result<Transcript> {
    let segments: Vec<TranscriptSegment> =
        serde_json::from_str(json).context("Failed to parse segments JSON")?;
    Transcript::new(segments)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_segments_json() {
        let json = r#"[
            {"start": 0.0, "end": 2.5, "text": "مرحبا بكم"},
            {"start": 2.5, "end": 5.0, "text": "في المقابلة"}
        ]"#;

        let transcript = parse_segments_json(json).unwrap();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.segments[0].text, "مرحبا بكم");
        assert_eq!(transcript.total_duration(), 5.0);
    }

    #[test]
    fn test_parse_segments_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"start": 0.0, "end": 1.0, "text": "نص"}}]"#).unwrap();

        let transcript = parse_segments_file(file.path()).unwrap();
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(parse_segments_file(Path::new("/nonexistent/segments.json")).is_err());
    }

    #[test]
    fn test_malformed_json_errors() {
        assert!(parse_segments_json("not json").is_err());
    }

    #[test]
    fn test_missing_field_is_fatal() {
        // a segment without timestamps must fail parsing, not coerce
        let json = r#"[{"text": "نص بلا توقيت"}]"#;
        assert!(parse_segments_json(json).is_err());
    }

    #[test]
    fn test_invalid_range_is_fatal() {
        let json = r#"[{"start": 5.0, "end": 1.0, "text": "نص"}]"#;
        assert!(parse_segments_json(json).is_err());
    }
}
