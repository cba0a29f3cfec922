use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::error::ParseError;
use crate::model::ErrorDetail;
use crate::parser::dom::{next_sibling_element, parent_element, text_of};
use crate::parser::{parse_code, Source};

const URLS: &[&str] = &["https://curl.se/libcurl/c/libcurl-errors.html"];

static CURLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(CURLE[A-Z0-9_]+)\s*\((\d+)\)$").unwrap());
static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());

/// libcurl error reference: `<p><span>CURLE_OK (0)</span></p><p>description</p>`.
pub struct Curl;

impl Source for Curl {
    fn name(&self) -> &'static str {
        "curl"
    }

    fn urls(&self) -> &'static [&'static str] {
        URLS
    }

    fn file_name(&self) -> &'static str {
        "curl_errors.json"
    }

    fn parse(&self, html: &str) -> Result<Vec<ErrorDetail>, ParseError> {
        parse(html)
    }
}

pub fn parse(html: &str) -> Result<Vec<ErrorDetail>, ParseError> {
    let doc = Html::parse_document(html);
    let mut errors = Vec::new();

    for span in doc.select(&SPAN) {
        let text = text_of(span);
        let Some(caps) = CURLE_RE.captures(text.trim()) else {
            continue;
        };

        let code = parse_code(&caps[2])?;
        let parent = parent_element(span).ok_or(ParseError::MissingElement("span parent"))?;
        let paragraph = next_sibling_element(parent, "p")
            .ok_or(ParseError::MissingElement("p following CURLE entry"))?;

        errors.push(ErrorDetail::new(code, &caps[1], text_of(paragraph)));
    }

    debug!("curl: {} codes", errors.len());
    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::fixture;

    #[test]
    fn extracts_alias_and_code_from_span() {
        let html = r#"<div><p><span>CURLE_UNSUPPORTED_PROTOCOL(1)</span></p>
            <p>The URL you passed to libcurl used a protocol that this libcurl does not support.</p></div>"#;
        let errors = parse(html).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].alias, "CURLE_UNSUPPORTED_PROTOCOL");
        assert_eq!(errors[0].code, 1);
        assert!(errors[0].description.starts_with("The URL you passed"));
    }

    #[test]
    fn fixture_page_in_document_order() {
        let errors = parse(&fixture("curl")).unwrap();
        let aliases: Vec<&str> = errors.iter().map(|e| e.alias.as_str()).collect();
        assert_eq!(
            aliases,
            vec![
                "CURLE_OK",
                "CURLE_UNSUPPORTED_PROTOCOL",
                "CURLE_FAILED_INIT",
                "CURLE_HTTP2",
                "CURLE_SSL_CONNECT_ERROR",
            ]
        );
        let codes: Vec<i64> = errors.iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![0, 1, 2, 16, 35]);
        assert_eq!(errors[0].description, "All fine. Proceed as usual.");
        assert!(errors.iter().all(|e| !e.alias.is_empty()));
    }

    #[test]
    fn unrelated_spans_are_ignored() {
        let html = "<p><span>CURLOPT_URL</span></p><p>not an error</p><p><span>see CURLE_OK(0)</span></p><p>x</p>";
        assert!(parse(html).unwrap().is_empty());
    }

    #[test]
    fn missing_description_paragraph_is_structural_error() {
        let html = "<div><p><span>CURLE_OK(0)</span></p></div>";
        assert!(matches!(parse(html), Err(ParseError::MissingElement(_))));
    }
}
