//! Google Sheets v4 payload models and request URLs.
//!
//! Only the data side of the protocol lives here: the JSON payloads the
//! Sheets API exchanges, the row convention for localized strings, and
//! the URLs requests go to. Performing the requests is the caller's
//! business.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::error::SheetError;
use crate::domain::models::strings::LocalizedString;

/// Base URL of the Google Sheets v4 spreadsheets API.
pub const SHEETS_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// The first row of an exported tab. Dropped when converting sheet data
/// back into localized strings.
pub const HEADER_ROW: [&str; 3] = ["Localization Key", "Translation", "Optional Comment"];

/// Vertical or horizontal dimension for sheet data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MajorDimension {
    /// Server decides what's best.
    #[default]
    #[serde(rename = "DIMENSION_UNSPECIFIED")]
    Unspecified,
    /// Data as an array of rows.
    #[serde(rename = "ROWS")]
    Rows,
    /// Data as an array of columns.
    #[serde(rename = "COLUMNS")]
    Columns,
}

/// A range of cell values, the payload of the `values` endpoints.
///
/// Downloaded ranges carry `range` and the header row; upload bodies
/// leave `range` unset and are built with [`ValueRange::upload`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// The A1-notation range the values cover, when the server sent one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// How `values` is laid out.
    #[serde(default)]
    pub major_dimension: MajorDimension,
    /// Rows of cells. Absent in the payload means no data.
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

impl ValueRange {
    /// Build the upload body for a catalog: a header row followed by one
    /// row per entry, in row-major order.
    pub fn upload(entries: &[LocalizedString]) -> Self {
        let mut values = Vec::with_capacity(entries.len() + 1);
        values.push(HEADER_ROW.iter().map(|cell| (*cell).to_string()).collect());
        values.extend(entries.iter().map(LocalizedString::to_cells));
        Self {
            range: None,
            major_dimension: MajorDimension::Rows,
            values,
        }
    }

    /// Convert downloaded rows into localized strings.
    ///
    /// The header row is dropped. Every remaining row needs at least a
    /// key and a value cell; a third cell becomes the comment and any
    /// further cells are ignored.
    pub fn localized_strings(&self) -> Result<Vec<LocalizedString>, SheetError> {
        let mut entries = Vec::new();
        for (index, cells) in self.values.iter().enumerate().skip(1) {
            if cells.len() < 2 {
                return Err(SheetError::MalformedRow {
                    index,
                    cells: cells.len(),
                });
            }
            entries.push(LocalizedString {
                key: cells[0].clone(),
                value: cells[1].clone(),
                comment: cells.get(2).cloned(),
            });
        }
        Ok(entries)
    }
}

/// Spreadsheet metadata, as returned by the spreadsheet endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spreadsheet {
    /// Spreadsheet identifier, the one visible in its URL.
    pub spreadsheet_id: String,
    /// Spreadsheet web address.
    pub spreadsheet_url: String,
    /// Spreadsheet properties.
    pub properties: SpreadsheetProperties,
    /// The tabs of the spreadsheet.
    pub sheets: Vec<Sheet>,
}

impl Spreadsheet {
    /// Whether a tab with exactly this title already exists.
    pub fn has_tab(&self, title: &str) -> bool {
        self.sheets.iter().any(|sheet| sheet.properties.title == title)
    }
}

/// General information about a spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpreadsheetProperties {
    /// Spreadsheet title.
    pub title: String,
    /// Spreadsheet locale.
    pub locale: String,
}

/// One tab in a spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sheet {
    /// Tab properties.
    pub properties: SheetProperties,
}

/// Common information about one tab.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SheetProperties {
    /// Tab title.
    pub title: String,
}

/// The `batchUpdate` body that creates a new tab.
pub fn add_sheet_request(tab: &str) -> Value {
    json!({
        "requests": [
            { "addSheet": { "properties": { "title": tab } } }
        ]
    })
}

/// URL of the spreadsheet metadata endpoint.
pub fn spreadsheet_url(spreadsheet_id: &str) -> String {
    format!("{SHEETS_ENDPOINT}/{spreadsheet_id}")
}

/// URL of a tab's values endpoint.
pub fn values_url(spreadsheet_id: &str, tab: &str) -> String {
    format!(
        "{SHEETS_ENDPOINT}/{spreadsheet_id}/values/{}",
        percent_encode_rfc3986(tab)
    )
}

/// URL that clears a tab's values before a fresh upload.
pub fn clear_values_url(spreadsheet_id: &str, tab: &str) -> String {
    format!(
        "{SHEETS_ENDPOINT}/{spreadsheet_id}/values/{}:clear",
        percent_encode_rfc3986(tab)
    )
}

/// URL of the spreadsheet `batchUpdate` endpoint.
pub fn batch_update_url(spreadsheet_id: &str) -> String {
    format!("{SHEETS_ENDPOINT}/{spreadsheet_id}:batchUpdate")
}

/// URL that uploads raw values into a tab, replacing what is there.
pub fn upload_values_url(spreadsheet_id: &str, tab: &str) -> String {
    format!(
        "{SHEETS_ENDPOINT}/{spreadsheet_id}/values/{}?includeValuesInResponse=false&valueInputOption=RAW",
        percent_encode_rfc3986(tab)
    )
}

/// Percent-encode a tab name for use in a request path.
///
/// Alphanumerics and `-._~/?` pass through; every other character is
/// encoded byte-wise as uppercase `%XX`.
pub fn percent_encode_rfc3986(input: &str) -> String {
    const UNRESERVED: &str = "-._~/?";
    let mut encoded = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_alphanumeric() || UNRESERVED.contains(ch) {
            encoded.push(ch);
        } else {
            let mut buf = [0_u8; 4];
            for byte in ch.encode_utf8(&mut buf).bytes() {
                encoded.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    encoded
}
