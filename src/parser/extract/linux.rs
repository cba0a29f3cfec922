use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::ParseError;
use crate::model::ErrorDetail;
use crate::parser::dom::{child_elements, text_of};
use crate::parser::{parse_code, Source};

const URLS: &[&str] = &["https://www.thegeekstuff.com/2010/10/linux-error-codes/"];

/// Header and legend rows at the top of the table body.
const SKIPPED_ROWS: usize = 2;

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table#optiontable").unwrap());
static TBODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody").unwrap());
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// errno table: one `<tr>` per code with cells `number | name | description`.
pub struct Linux;

impl Source for Linux {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn urls(&self) -> &'static [&'static str] {
        URLS
    }

    fn file_name(&self) -> &'static str {
        "errno.json"
    }

    fn parse(&self, html: &str) -> Result<Vec<ErrorDetail>, ParseError> {
        parse(html)
    }
}

pub fn parse(html: &str) -> Result<Vec<ErrorDetail>, ParseError> {
    let doc = Html::parse_document(html);
    let table = doc
        .select(&TABLE)
        .next()
        .ok_or(ParseError::MissingElement("table#optiontable"))?;
    let body = table
        .select(&TBODY)
        .next()
        .ok_or(ParseError::MissingElement("tbody"))?;

    let mut errors = Vec::new();
    for (row, tr) in child_elements(body, "tr").enumerate().skip(SKIPPED_ROWS) {
        let cells: Vec<ElementRef> = tr.select(&TD).collect();
        let cell = |index: usize| {
            cells
                .get(index)
                .copied()
                .map(text_of)
                .ok_or(ParseError::MissingCell { row, index })
        };

        errors.push(ErrorDetail::new(parse_code(&cell(0)?)?, cell(1)?, cell(2)?));
    }

    debug!("linux: {} codes", errors.len());
    Ok(errors)
}
