//! Interpretation of the HTML page the validation endpoint returns.
//!
//! The CEP site is not a stable API — markup drifts between revisions —
//! so this parser is a layered fallback chain rather than a single rigid
//! selector: result table, then container text, then body text, then the
//! raw input with tags stripped. Every branch yields *some* result; this
//! module never returns an error.

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// One label/value pair from the receipt table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub label: String,
    pub value: String,
}

/// Column headers every receipt table carries.
pub const TABLE_HEADERS: [&str; 2] = ["label", "value"];

/// Structured interpretation of a payment-query response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryResult {
    /// Empty response body.
    NotFound,
    /// The server replied with a message instead of a receipt, e.g.
    /// "operacion no encontrada".
    Text { content: String },
    /// A receipt table. `rows` is never empty; tables that produce no
    /// rows degrade to `Text`. `headers` is always [`TABLE_HEADERS`].
    Table {
        summary: Option<String>,
        headers: [&'static str; 2],
        rows: Vec<TableRow>,
    },
}

// Known landmarks on the validation page, most specific first.
const RESULT_CONTAINER: &str = "#respuesta";
const RESULT_TABLE: &str = "#respuesta table.tpLinea";
const MESSAGE_DIV: &str = "div.mensaje";
const INFO_BANNER: &str = "div.info";

fn selector(css: &str) -> Selector {
    // All selectors in this module are static and known-good.
    Selector::parse(css).expect("valid css selector")
}

/// Parse a raw query response into a [`QueryResult`]. Infallible.
pub fn parse_query_response(html: &str) -> QueryResult {
    let trimmed = html.trim();
    if trimmed.is_empty() {
        return QueryResult::NotFound;
    }

    let document = Html::parse_document(trimmed);

    match find_result_table(&document) {
        Some(table) => {
            let rows = extract_rows(table);
            if rows.is_empty() {
                text_result(&document, trimmed)
            } else {
                QueryResult::Table {
                    summary: extract_summary(&document),
                    headers: TABLE_HEADERS,
                    rows,
                }
            }
        }
        None => text_result(&document, trimmed),
    }
}

/// Priority search for the receipt table: the known table inside the
/// result container, any table inside the container, any table at all.
fn find_result_table(document: &Html) -> Option<ElementRef<'_>> {
    if let Some(table) = document.select(&selector(RESULT_TABLE)).next() {
        return Some(table);
    }
    if let Some(container) = document.select(&selector(RESULT_CONTAINER)).next() {
        if let Some(table) = container.select(&selector("table")).next() {
            return Some(table);
        }
    }
    document.select(&selector("table")).next()
}

/// Pull label/value rows out of the table. `<tbody>` rows are preferred;
/// a table without one contributes all its `<tr>` elements. Rows with
/// fewer than two cells, or whose first two cells are both blank, are
/// skipped.
fn extract_rows(table: ElementRef<'_>) -> Vec<TableRow> {
    let tbody_rows: Vec<ElementRef<'_>> = table.select(&selector("tbody > tr")).collect();
    let rows = if tbody_rows.is_empty() {
        table.select(&selector("tr")).collect()
    } else {
        tbody_rows
    };

    let cell_selector = selector("td, th");
    let mut out = Vec::new();
    for row in rows {
        let cells: Vec<ElementRef<'_>> = row.select(&cell_selector).collect();
        if cells.len() < 2 {
            continue;
        }
        let label = element_text(cells[0]);
        let value = element_text(cells[1]);
        if label.is_empty() && value.is_empty() {
            continue;
        }
        out.push(TableRow { label, value });
    }
    out
}

/// Optional status line the page shows next to the receipt.
fn extract_summary(document: &Html) -> Option<String> {
    document
        .select(&selector(INFO_BANNER))
        .map(element_text)
        .find(|text| !text.is_empty())
}

/// Tableless fallback: text of the result container, the message div,
/// or the whole body, in that order; if all are empty, the raw input
/// with markup stripped. Degrades to `NotFound` only when even the
/// stripped text is empty.
fn text_result(document: &Html, raw: &str) -> QueryResult {
    for css in [RESULT_CONTAINER, MESSAGE_DIV, "body"] {
        if let Some(element) = document.select(&selector(css)).next() {
            let text = element_text(element);
            if !text.is_empty() {
                return QueryResult::Text { content: text };
            }
        }
    }
    let stripped = strip_tags(raw);
    if stripped.is_empty() {
        QueryResult::NotFound
    } else {
        QueryResult::Text { content: stripped }
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(element.text().collect::<String>().as_str())
}

/// Last-resort text extraction for input the HTML parser got nothing
/// useful out of: drop everything between angle brackets.
fn strip_tags(input: &str) -> String {
    let mut text = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    collapse_whitespace(&text)
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_not_found() {
        assert_eq!(parse_query_response(""), QueryResult::NotFound);
        assert_eq!(parse_query_response("   \n\t "), QueryResult::NotFound);
    }

    #[test]
    fn test_single_row_table() {
        let html = r#"
            <html><body><div id="respuesta">
              <table class="tpLinea"><tbody>
                <tr><td>Fecha de operación</td><td>15-01-2024</td></tr>
              </tbody></table>
            </div></body></html>"#;
        match parse_query_response(html) {
            QueryResult::Table {
                summary,
                headers,
                rows,
            } => {
                assert!(summary.is_none());
                assert_eq!(headers, ["label", "value"]);
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].label, "Fecha de operación");
                assert_eq!(rows[0].value, "15-01-2024");
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_table_found_anywhere_in_document() {
        // No container or known class; the any-table fallback applies.
        let html = "<table><tr><td>Monto</td><td>1500.00</td></tr></table>";
        match parse_query_response(html) {
            QueryResult::Table { rows, .. } => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].label, "Monto");
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_short_and_blank_rows_skipped() {
        let html = r#"
            <table>
              <tr><td>only one cell</td></tr>
              <tr><td>  </td><td></td></tr>
              <tr><td>Cuenta</td><td>***4567</td></tr>
              <tr><th>Banco</th><th>BBVA</th></tr>
            </table>"#;
        match parse_query_response(html) {
            QueryResult::Table { rows, .. } => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].label, "Cuenta");
                assert_eq!(rows[1].label, "Banco");
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_row_with_one_blank_cell_kept() {
        let html = "<table><tr><td>CURP</td><td></td></tr></table>";
        match parse_query_response(html) {
            QueryResult::Table { rows, .. } => {
                assert_eq!(rows[0].label, "CURP");
                assert_eq!(rows[0].value, "");
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_summary_from_info_banner() {
        let html = r#"
            <div class="info">Operación liquidada</div>
            <table><tr><td>Monto</td><td>1500.00</td></tr></table>"#;
        match parse_query_response(html) {
            QueryResult::Table { summary, .. } => {
                assert_eq!(summary.as_deref(), Some("Operación liquidada"));
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_no_table_yields_container_text() {
        let html = r#"<div id="respuesta">La operación no fue encontrada</div>"#;
        assert_eq!(
            parse_query_response(html),
            QueryResult::Text {
                content: "La operación no fue encontrada".into()
            }
        );
    }

    #[test]
    fn test_empty_table_degrades_to_text() {
        let html = r#"
            <div id="respuesta">
              Sin resultados
              <table class="tpLinea"><tbody></tbody></table>
            </div>"#;
        assert_eq!(
            parse_query_response(html),
            QueryResult::Text {
                content: "Sin resultados".into()
            }
        );
    }

    #[test]
    fn test_message_div_preferred_over_body() {
        let html = r#"<body>ignored<div class="mensaje">Error del servicio</div></body>"#;
        // The result container is absent, so the message div wins over
        // the (larger) body text only when the container search fails
        // first; body would include both texts.
        match parse_query_response(html) {
            QueryResult::Text { content } => {
                assert!(content.contains("Error del servicio"));
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_never_errors_on_garbage_markup() {
        let result = parse_query_response("<<<Operación>>> <b>no <i>encontrada");
        assert!(matches!(result, QueryResult::Text { .. }));
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>hola  <b>mundo</b></p>"), "hola mundo");
        assert_eq!(strip_tags("<br/><hr/>"), "");
    }
}
