use crate::parsers::{LinkCandidate, extract_links};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_anchors() {
        let scan = extract_links("Just some text with no links at all.");
        assert!(scan.links.is_empty());
        assert!(scan.is_clean());

        let scan = extract_links("");
        assert!(scan.links.is_empty());
        assert!(scan.is_clean());
    }

    #[test]
    fn test_single_anchor() {
        let page = "Intro words <A HREF = page2.html > the second page </A> trailing words";
        let scan = extract_links(page);
        assert!(scan.is_clean());
        assert_eq!(
            scan.links,
            vec![LinkCandidate::new("page2.html", "the second page")]
        );
    }

    #[test]
    fn test_anchors_keep_document_order() {
        let page = "<A HREF = page3.html > third </A>\n\
                    some text\n\
                    <A HREF = page2.html > second </A>\n\
                    <A HREF = page9.html > ninth </A>";
        let scan = extract_links(page);
        let targets: Vec<&str> = scan.links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(targets, vec!["page3.html", "page2.html", "page9.html"]);
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let page = "<a href = page4.html > lower case </a>";
        let scan = extract_links(page);
        assert!(scan.is_clean());
        assert_eq!(scan.links, vec![LinkCandidate::new("page4.html", "lower case")]);
    }

    #[test]
    fn test_anchor_text_whitespace_is_collapsed() {
        let page = "<A HREF = page5.html >\n   QUERY1\t\tQUERY2\n\n QUERY3  </A>";
        let scan = extract_links(page);
        assert_eq!(scan.links[0].anchor_text, "QUERY1 QUERY2 QUERY3");
    }

    #[test]
    fn test_empty_anchor_text() {
        let scan = extract_links("<A HREF = page6.html > </A>");
        assert!(scan.is_clean());
        assert_eq!(scan.links, vec![LinkCandidate::new("page6.html", "")]);
    }

    #[test]
    fn test_quoted_target_is_unquoted() {
        let scan = extract_links("<A HREF = \"page7.html\" > quoted </A>");
        assert!(scan.is_clean());
        assert_eq!(scan.links[0].target, "page7.html");
    }

    #[test]
    fn test_duplicate_links_are_all_reported() {
        // Duplicate suppression is the driver's job, not the scanner's
        let page = "<A HREF = page2.html > one </A> <A HREF = page2.html > two </A>";
        let scan = extract_links(page);
        assert_eq!(scan.links.len(), 2);
    }
}
