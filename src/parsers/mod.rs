pub mod anchors;

#[cfg(test)]
mod tests;

use std::fmt;

pub use anchors::extract_links;

/// A link found while scanning a page: where it points and the text it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCandidate {
    /// Identity of the page the anchor points to
    pub target: String,
    /// Tokens between the anchor's closing bracket and its close marker, joined by single spaces
    pub anchor_text: String,
}

impl LinkCandidate {
    pub fn new(target: impl Into<String>, anchor_text: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            anchor_text: anchor_text.into(),
        }
    }
}

/// What went wrong with a single anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorIssue {
    /// A fixed part of the anchor header was something else
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    /// Input ended while the anchor header was incomplete
    UnexpectedEnd { expected: &'static str },
    /// Target does not look like a page identity; the link is still kept
    UnexpectedTarget { found: String },
    /// Input ended before the close marker; the link is kept with the text read so far
    UnterminatedAnchor { target: String },
    /// A new anchor opened inside anchor text; the outer link is kept
    NestedAnchor { target: String },
}

impl AnchorIssue {
    /// Whether the anchor still produced a link candidate
    pub fn keeps_link(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedTarget { .. } | Self::UnterminatedAnchor { .. } | Self::NestedAnchor { .. }
        )
    }
}

impl fmt::Display for AnchorIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expecting '{expected}' and got: {found}")
            }
            Self::UnexpectedEnd { expected } => {
                write!(f, "expecting '{expected}' and reached end of page")
            }
            Self::UnexpectedTarget { found } => {
                write!(f, "expecting 'page#.html' and got: {found}")
            }
            Self::UnterminatedAnchor { target } => {
                write!(f, "anchor to {target} is never closed")
            }
            Self::NestedAnchor { target } => {
                write!(f, "anchor to {target} interrupted by another anchor")
            }
        }
    }
}

/// A recoverable problem found while scanning, located by token index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorDiagnostic {
    pub position: usize,
    pub issue: AnchorIssue,
}

impl fmt::Display for AnchorDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token {}: {}", self.position, self.issue)
    }
}

/// Result of scanning a page for anchors
///
/// Scanning never fails: malformed anchors show up in `diagnostics` and the
/// remaining well-formed anchors still appear in `links`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkScan {
    /// Links in the order their anchors appear
    pub links: Vec<LinkCandidate>,
    pub diagnostics: Vec<AnchorDiagnostic>,
}

impl LinkScan {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub(crate) fn report(&mut self, position: usize, issue: AnchorIssue) {
        self.diagnostics.push(AnchorDiagnostic { position, issue });
    }
}
