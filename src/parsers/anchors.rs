use crate::parsers::{AnchorIssue, LinkCandidate, LinkScan};
use crate::utils::{is_marker, unquote};

const OPEN_ANCHOR: &str = "<A";
const CLOSE_ANCHOR: &str = "</A>";
const ATTRIBUTE: &str = "HREF";
const EQUALS: &str = "=";
const CLOSE_BRACKET: &str = ">";
const TARGET: &str = "target identity";
const TARGET_PREFIX: &str = "page";

/// Scans raw page text for anchors of the form
/// `<A HREF = page2.html > anchor text </A>`.
///
/// Tokens are whitespace-delimited and markers match case-insensitively.
/// This is a tolerant scan rather than a markup parser: a broken anchor is
/// reported and skipped, and scanning resumes at the token that broke it.
pub fn extract_links(text: &str) -> LinkScan {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut scan = LinkScan::default();

    let mut pos = 0;
    while pos < tokens.len() {
        if is_marker(tokens[pos], OPEN_ANCHOR) {
            pos = scan_anchor(&tokens, pos, &mut scan);
        } else {
            pos += 1;
        }
    }

    ::log::debug!(
        "Anchor scan found {} links with {} diagnostics",
        scan.links.len(),
        scan.diagnostics.len()
    );
    scan
}

/// Scans one anchor whose open marker sits at `start`.
///
/// Returns the token index to resume from, always greater than `start`.
fn scan_anchor(tokens: &[&str], start: usize, scan: &mut LinkScan) -> usize {
    let mut pos = start + 1;

    for marker in [ATTRIBUTE, EQUALS] {
        if !expect(tokens, pos, marker, scan) {
            return pos;
        }
        pos += 1;
    }

    let target = match tokens.get(pos) {
        None => {
            scan.report(pos, AnchorIssue::UnexpectedEnd { expected: TARGET });
            return pos;
        }
        Some(token) if is_marker(token, CLOSE_BRACKET) || is_marker(token, OPEN_ANCHOR) => {
            scan.report(
                pos,
                AnchorIssue::UnexpectedToken {
                    expected: TARGET,
                    found: token.to_string(),
                },
            );
            return pos;
        }
        Some(token) => unquote(token).to_string(),
    };
    if !target.to_lowercase().starts_with(TARGET_PREFIX) {
        scan.report(
            pos,
            AnchorIssue::UnexpectedTarget {
                found: target.clone(),
            },
        );
    }
    pos += 1;

    if !expect(tokens, pos, CLOSE_BRACKET, scan) {
        return pos;
    }
    pos += 1;

    ::log::debug!(" - found a link to {}", target);

    let mut text: Vec<&str> = Vec::new();
    loop {
        match tokens.get(pos) {
            None => {
                scan.report(pos, AnchorIssue::UnterminatedAnchor { target: target.clone() });
                scan.links.push(LinkCandidate::new(target, text.join(" ")));
                return pos;
            }
            Some(token) if is_marker(token, CLOSE_ANCHOR) => {
                scan.links.push(LinkCandidate::new(target, text.join(" ")));
                return pos + 1;
            }
            Some(token) if is_marker(token, OPEN_ANCHOR) => {
                scan.report(pos, AnchorIssue::NestedAnchor { target: target.clone() });
                scan.links.push(LinkCandidate::new(target, text.join(" ")));
                return pos;
            }
            Some(token) => {
                text.push(*token);
                pos += 1;
            }
        }
    }
}

/// Checks that the token at `pos` is `marker`, reporting a diagnostic if not
fn expect(tokens: &[&str], pos: usize, marker: &'static str, scan: &mut LinkScan) -> bool {
    match tokens.get(pos) {
        Some(token) if is_marker(token, marker) => true,
        Some(token) => {
            scan.report(
                pos,
                AnchorIssue::UnexpectedToken {
                    expected: marker,
                    found: token.to_string(),
                },
            );
            false
        }
        None => {
            scan.report(pos, AnchorIssue::UnexpectedEnd { expected: marker });
            false
        }
    }
}
