use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::ParseError;
use crate::model::ErrorDetail;
use crate::parser::dom::{child_elements, next_sibling_element, text_of};
use crate::parser::Source;

const URLS: &[&str] = &[
    "https://learn.microsoft.com/en-us/windows/win32/debug/system-error-codes--0-499-",
    "https://learn.microsoft.com/en-us/windows/win32/debug/system-error-codes--500-999-",
    "https://learn.microsoft.com/en-us/windows/win32/debug/system-error-codes--1000-1299-",
    "https://learn.microsoft.com/en-us/windows/win32/debug/system-error-codes--1300-1699-",
    "https://learn.microsoft.com/en-us/windows/win32/debug/system-error-codes--1700-3999-",
    "https://learn.microsoft.com/en-us/windows/win32/debug/system-error-codes--4000-5999-",
    "https://learn.microsoft.com/en-us/windows/win32/debug/system-error-codes--6000-8199-",
    "https://learn.microsoft.com/en-us/windows/win32/debug/system-error-codes--8200-8999-",
    "https://learn.microsoft.com/en-us/windows/win32/debug/system-error-codes--9000-11999-",
    "https://learn.microsoft.com/en-us/windows/win32/debug/system-error-codes--12000-15999-",
];

static DL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("dl").unwrap());
static DT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("dt").unwrap());
static P: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());
static STRONG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("strong").unwrap());

/// Win32 system error code pages, one per numeric range.
///
/// ```text
/// <dl>
///   <dt><p><strong>ERROR_SUCCESS</strong></p></dt>
///   <dd><dl><dt><p>0 (0x0)</p></dt><dt><p>The operation completed successfully.</p></dt></dl></dd>
/// </dl>
/// ```
pub struct Windows;

impl Source for Windows {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn urls(&self) -> &'static [&'static str] {
        URLS
    }

    fn file_name(&self) -> &'static str {
        "windows_system_errors.json"
    }

    fn parse(&self, html: &str) -> Result<Vec<ErrorDetail>, ParseError> {
        parse(html)
    }
}

pub fn parse(html: &str) -> Result<Vec<ErrorDetail>, ParseError> {
    let doc = Html::parse_document(html);
    let wrapper = doc
        .select(&DL)
        .next()
        .ok_or(ParseError::MissingElement("dl"))?;

    let mut errors = Vec::new();
    for term in child_elements(wrapper, "dt") {
        let alias = first_paragraph(term)
            .and_then(|p| p.select(&STRONG).next())
            .map(text_of)
            .ok_or(ParseError::MissingElement("dt > p > strong"))?;

        let nested = next_sibling_element(term, "dd")
            .ok_or(ParseError::MissingElement("dd following dt"))?
            .select(&DL)
            .next()
            .ok_or(ParseError::MissingElement("dd > dl"))?;
        let fields: Vec<ElementRef> = nested.select(&DT).collect();
        let field = |index: usize, what: &'static str| {
            fields
                .get(index)
                .copied()
                .and_then(first_paragraph)
                .map(text_of)
                .ok_or(ParseError::MissingElement(what))
        };

        let code = convert_windows_error_code(&field(0, "code dt > p")?)?;
        errors.push(ErrorDetail::new(code, alias, field(1, "description dt > p")?));
    }

    debug!("windows: {} codes", errors.len());
    Ok(errors)
}

/// `"1300 (0x514)"` → 1300. The hex annotation is ignored.
pub fn convert_windows_error_code(text: &str) -> Result<i64, ParseError> {
    let first = text.split_whitespace().next().ok_or(ParseError::EmptyCode)?;
    first.parse().map_err(|source| ParseError::InvalidCode {
        value: first.to_string(),
        source,
    })
}

fn first_paragraph(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.select(&P).next()
}
