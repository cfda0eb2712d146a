use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// Namespace prepended to every generated Terraform resource name.
///
/// Changing this renames every previously exported resource, which breaks
/// existing Terraform state for users.
pub const NAME_PREFIX: &str = "pingcli__";

/// Characters allowed verbatim in a Terraform resource name: `[A-Za-z0-9_]`.
pub fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Escapes a single code point for use in a resource name.
///
/// Safe characters pass through unchanged. Everything else becomes
/// `-hhhh-`, the lowercase hex code point zero-padded to at least four
/// digits (`' '` -> `-0020-`, `'😀'` -> `-1f600-`).
pub fn escape_char(c: char) -> String {
    let mut out = String::with_capacity(6);
    push_escaped(&mut out, c);
    out
}

fn push_escaped(out: &mut String, c: char) {
    if is_safe_char(c) {
        out.push(c);
    } else {
        // Writing into a String cannot fail
        let _ = write!(out, "-{:04x}-", u32::from(c));
    }
}

/// Turns an arbitrary display name into a namespaced Terraform identifier.
///
/// Total and deterministic: every input, including the empty string, maps to
/// `NAME_PREFIX` followed by the escaped code points in order. Not
/// idempotent, so apply it to raw names only.
pub fn sanitize_name(raw: &str) -> String {
    let mut out = String::with_capacity(NAME_PREFIX.len() + raw.len());
    out.push_str(NAME_PREFIX);
    for c in raw.chars() {
        push_escaped(&mut out, c);
    }
    out
}

/// One `key: value` line of the comment header above an import block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentLine {
    pub key: String,
    pub value: String,
}

/// A single Terraform `import` block for one discovered API object.
///
/// The name is sanitized once, in [`ImportBlock::new`], and the fields are
/// read-only afterwards so a block can never be escaped twice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ImportBlock {
    resource_type: String,
    resource_name: String,
    resource_id: String,
    comment_information: Vec<CommentLine>,
}

impl ImportBlock {
    pub fn new(
        resource_type: impl Into<String>,
        raw_name: &str,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            resource_name: sanitize_name(raw_name),
            resource_id: resource_id.into(),
            comment_information: Vec::new(),
        }
    }

    /// The raw name transform applied by [`ImportBlock::new`].
    pub fn sanitize(raw: &str) -> String {
        sanitize_name(raw)
    }

    /// Appends a comment line. Lines render in insertion order.
    pub fn with_comment(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.comment_information.push(CommentLine {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// The sanitized resource name.
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    pub fn comment_information(&self) -> &[CommentLine] {
        &self.comment_information
    }

    /// Terraform address, e.g. `pingfederate_oauth_client.pingcli__Customer`.
    pub fn address(&self) -> String {
        format!("{}.{}", self.resource_type, self.resource_name)
    }
}

// Comments are documentation, not identity.
impl PartialEq for ImportBlock {
    fn eq(&self, other: &Self) -> bool {
        self.resource_type == other.resource_type
            && self.resource_name == other.resource_name
            && self.resource_id == other.resource_id
    }
}

impl Eq for ImportBlock {}

impl Hash for ImportBlock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resource_type.hash(state);
        self.resource_name.hash(state);
        self.resource_id.hash(state);
    }
}

/// Keeps a comment on one line: control characters become spaces.
fn comment_text(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Renders `raw` as the body of an HCL quoted string, with escapes and
/// template sequences (`${`, `%{`) neutralized.
pub fn hcl_string_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", u32::from(c));
            }
            c => out.push(c),
        }
    }

    out
}

impl fmt::Display for ImportBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.comment_information {
            writeln!(
                f,
                "# {}: {}",
                comment_text(&line.key),
                comment_text(&line.value)
            )?;
        }
        write!(
            f,
            "import {{\n  to = {}\n  id = \"{}\"\n}}",
            self.address(),
            hcl_string_literal(&self.resource_id)
        )
    }
}
