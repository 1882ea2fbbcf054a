use serde_json::Value as JsonValue;
use thiserror::Error;

/// Front matter split off the top of an article file.
#[derive(Debug, Clone, PartialEq)]
pub struct Frontmatter {
    /// Parsed front matter mapping as a JSON value.
    pub value: JsonValue,
    /// Byte offset inside the original document where the markdown body begins.
    pub body_start: usize,
}

impl Frontmatter {
    fn empty() -> Self {
        Self {
            value: JsonValue::Object(Default::default()),
            body_start: 0,
        }
    }

    /// Returns the markdown body of `input` (the document this was extracted from).
    pub fn body<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.body_start..).unwrap_or_default()
    }

    /// Reads a scalar field as a string.
    ///
    /// Numbers and booleans are stringified so `readTime: 5` still yields `"5"`.
    /// Empty strings count as absent.
    pub fn field(&self, key: &str) -> Option<String> {
        match self.value.get(key)? {
            JsonValue::String(s) if s.trim().is_empty() => None,
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            JsonValue::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Errors emitted while parsing or extracting front matter.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Unclosed YAML fence (e.g., missing terminating `---`).
    #[error("Unterminated YAML front matter block: expected closing '---'")]
    Unterminated,
    /// YAML failed to parse.
    #[error("Front matter parse error: {0}")]
    Parse(String),
    /// Top-level YAML node was not a mapping.
    #[error("Front matter must be a YAML mapping at the top level")]
    InvalidRootType,
}

/// Extracts YAML front matter from an article file.
///
/// Leading blank lines and a UTF-8 BOM are skipped before looking for the
/// opening `---`. Documents without front matter yield an empty mapping and a
/// body starting at offset 0.
pub fn extract_frontmatter(input: &str) -> Result<Frontmatter, FrontmatterError> {
    let Some((yaml, body_start)) = locate_yaml(input)? else {
        return Ok(Frontmatter::empty());
    };
    Ok(Frontmatter {
        value: parse_yaml(yaml)?,
        body_start,
    })
}

fn parse_yaml(block: &str) -> Result<JsonValue, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(JsonValue::Object(Default::default()));
    }

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|err| FrontmatterError::Parse(err.to_string()))?;
    let json =
        serde_json::to_value(yaml).map_err(|err| FrontmatterError::Parse(err.to_string()))?;

    match json {
        JsonValue::Null => Ok(JsonValue::Object(Default::default())),
        JsonValue::Object(_) => Ok(json),
        _ => Err(FrontmatterError::InvalidRootType),
    }
}

/// Finds the YAML block; returns its text and the byte offset just past the
/// closing fence.
fn locate_yaml(input: &str) -> Result<Option<(&str, usize)>, FrontmatterError> {
    let mut offset = 0usize;
    let mut lines = input.split_inclusive('\n');
    let mut yaml_start = None;

    for line in lines.by_ref() {
        let start = offset;
        offset += line.len();
        let content = trim_line(line, start == 0);
        if content.trim().is_empty() {
            continue;
        }
        if content != "---" {
            return Ok(None);
        }
        yaml_start = Some(offset);
        break;
    }

    let Some(yaml_start) = yaml_start else {
        return Ok(None);
    };

    for line in lines {
        let start = offset;
        offset += line.len();
        if trim_line(line, false) == "---" {
            let yaml = input[yaml_start..start].trim_end_matches(['\r', '\n']);
            return Ok(Some((yaml, offset)));
        }
    }

    Err(FrontmatterError::Unterminated)
}

fn trim_line(line: &str, first: bool) -> &str {
    let line = if first {
        line.strip_prefix('\u{feff}').unwrap_or(line)
    } else {
        line
    };
    line.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(input: &str) -> Frontmatter {
        extract_frontmatter(input).expect("front matter extraction should succeed")
    }

    #[test]
    fn returns_empty_when_no_frontmatter() {
        let result = extract("# Title\nBody");
        assert_eq!(result.body_start, 0);
        assert_eq!(result.value, JsonValue::Object(Default::default()));
    }

    #[test]
    fn parses_article_fields() {
        let input = "---\ntitle: Budgeting 101\nreadTime: 7\ndate: 2024-03-01\n---\n# Content";
        let result = extract(input);
        assert_eq!(result.body(input), "# Content");
        assert_eq!(result.field("title").as_deref(), Some("Budgeting 101"));
        assert_eq!(result.field("readTime").as_deref(), Some("7"));
        assert_eq!(result.field("date").as_deref(), Some("2024-03-01"));
        assert_eq!(result.field("missing"), None);
    }

    #[test]
    fn blank_field_counts_as_absent() {
        let input = "---\ntitle: \"  \"\n---\nBody";
        assert_eq!(extract(input).field("title"), None);
    }

    #[test]
    fn handles_empty_block() {
        let input = "---\n---\n# Body";
        let result = extract(input);
        assert_eq!(result.value, JsonValue::Object(Default::default()));
        assert_eq!(result.body(input), "# Body");
    }

    #[test]
    fn skips_bom_and_leading_blank_lines() {
        let input = "\u{feff}\n   \n---\nfoo: bar\n---\nBody";
        let result = extract(input);
        assert_eq!(result.field("foo").as_deref(), Some("bar"));
        assert_eq!(result.body(input), "Body");
    }

    #[test]
    fn handles_crlf_fences() {
        let input = "---\r\ntitle: Windows\r\n---\r\nBody";
        let result = extract(input);
        assert_eq!(result.field("title").as_deref(), Some("Windows"));
        assert_eq!(result.body(input), "Body");
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let input = "---\ninvalid: [unterminated\n---\n";
        let err = extract_frontmatter(input).unwrap_err();
        assert!(matches!(err, FrontmatterError::Parse(_)), "{err:?}");
    }

    #[test]
    fn errors_on_non_mapping_root() {
        let input = "---\n- a\n- b\n---\n";
        let err = extract_frontmatter(input).unwrap_err();
        assert!(matches!(err, FrontmatterError::InvalidRootType));
    }

    #[test]
    fn errors_on_unterminated_block() {
        let err = extract_frontmatter("---\ntitle: test").unwrap_err();
        assert!(matches!(err, FrontmatterError::Unterminated));
    }
}
