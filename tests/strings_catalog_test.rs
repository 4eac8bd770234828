// Integration tests for the catalog and sheet plumbing, end to end but
// offline: everything up to and after the network calls the airstrings
// tools would make.

use std::fs;

use serde_json::json;

use airsecrets::domain::models::sheet::{
    add_sheet_request, batch_update_url, clear_values_url, spreadsheet_url, upload_values_url,
    values_url,
};
use airsecrets::{LocalizedString, Spreadsheet, StringsCatalog, ValueRange};

/// A downloaded value range becomes a .strings file
#[test]
fn test_pull_flow_offline() {
    // The payload shape the values endpoint answers with.
    let payload = r#"{
        "range": "Base!A1:C4",
        "majorDimension": "ROWS",
        "values": [
            ["Localization Key", "Translation", "Optional Comment"],
            ["welcome.title", "Welcome!", "shown on first launch"],
            ["welcome.button", "Get Started"],
            ["farewell.title", "Goodbye"]
        ]
    }"#;

    let range: ValueRange = serde_json::from_str(payload).unwrap();
    let entries = range.localized_strings().unwrap();
    let catalog = StringsCatalog::from_entries(entries);

    assert_eq!(
        catalog.to_string(),
        "\"welcome.title\" = \"Welcome!\"; // shown on first launch\n\
         \"welcome.button\" = \"Get Started\";\n\
         \"farewell.title\" = \"Goodbye\";\n"
    );

    // Written out and read back, the catalog survives unchanged.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Localizable.strings");
    fs::write(&path, catalog.to_string()).unwrap();

    let reread = StringsCatalog::parse(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reread, catalog);
}

/// A .strings file becomes the bodies and URLs of a push
#[test]
fn test_push_flow_offline() {
    let contents = concat!(
        "\"welcome.title\" = \"Welcome!\"; // shown on first launch\n",
        "this line is noise and gets skipped\n",
        "\"welcome.button\" = \"Get Started\";\n",
    );

    let catalog = StringsCatalog::parse(contents).unwrap();
    assert_eq!(catalog.len(), 2);

    // The upload body carries the header row plus one row per entry.
    let body = serde_json::to_value(ValueRange::upload(catalog.entries())).unwrap();
    assert_eq!(
        body,
        json!({
            "majorDimension": "ROWS",
            "values": [
                ["Localization Key", "Translation", "Optional Comment"],
                ["welcome.title", "Welcome!", "shown on first launch"],
                ["welcome.button", "Get Started"]
            ]
        })
    );

    // Metadata tells a pusher whether the tab must be created or cleared.
    let spreadsheet: Spreadsheet = serde_json::from_str(
        r#"{
            "spreadsheetId": "1aBcD3fGh",
            "spreadsheetUrl": "https://docs.google.com/spreadsheets/d/1aBcD3fGh/edit",
            "properties": { "title": "App Translations", "locale": "en_US" },
            "sheets": [ { "properties": { "title": "Base" } } ]
        }"#,
    )
    .unwrap();

    assert!(spreadsheet.has_tab("Base"));
    assert!(!spreadsheet.has_tab("Japanese"));

    // Existing tab: clear it, then upload.
    assert_eq!(
        clear_values_url(&spreadsheet.spreadsheet_id, "Base"),
        "https://sheets.googleapis.com/v4/spreadsheets/1aBcD3fGh/values/Base:clear"
    );
    assert_eq!(
        upload_values_url(&spreadsheet.spreadsheet_id, "Base"),
        "https://sheets.googleapis.com/v4/spreadsheets/1aBcD3fGh/values/Base?includeValuesInResponse=false&valueInputOption=RAW"
    );

    // New tab: create it first.
    assert_eq!(
        batch_update_url(&spreadsheet.spreadsheet_id),
        "https://sheets.googleapis.com/v4/spreadsheets/1aBcD3fGh:batchUpdate"
    );
    assert_eq!(
        add_sheet_request("Japanese"),
        json!({
            "requests": [
                { "addSheet": { "properties": { "title": "Japanese" } } }
            ]
        })
    );
}

/// Tab names survive URL building, spaces included
#[test]
fn test_urls_with_encoded_tab_names() {
    assert_eq!(
        spreadsheet_url("1aBcD3fGh"),
        "https://sheets.googleapis.com/v4/spreadsheets/1aBcD3fGh"
    );
    assert_eq!(
        values_url("1aBcD3fGh", "iOS App Strings"),
        "https://sheets.googleapis.com/v4/spreadsheets/1aBcD3fGh/values/iOS%20App%20Strings"
    );
}

/// A catalog assembled in code round-trips through its file form
#[test]
fn test_catalog_file_round_trip() {
    let catalog = StringsCatalog::from_entries(vec![
        LocalizedString::new("auth.signin", "Sign In"),
        LocalizedString::new("auth.signout", "Sign Out").with_comment("menu entry"),
        LocalizedString::new("auth.error", "Could not sign you in."),
    ]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Localizable.strings");
    fs::write(&path, catalog.to_string()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.ends_with(";\n"), "file should end with a newline");

    let reread = StringsCatalog::parse(&text).unwrap();
    assert_eq!(reread, catalog);

    // And back out to the upload shape without loss.
    let uploaded = ValueRange::upload(reread.entries());
    let recovered = uploaded.localized_strings().unwrap();
    assert_eq!(recovered, catalog.entries());
}