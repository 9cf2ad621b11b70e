use std::fs;
use std::io::Cursor;
use std::path::Path;

use shopfront_tools::Catalog;
use shopfront_tools::model::default_seeds;
use shopfront_tools::session::{MenuOption, Role, Session, product_range_label};
use tempfile::tempdir;

fn run_script_bytes(export_path: &Path, script: &str) -> (Catalog, Vec<u8>) {
    let catalog = Catalog::from_seeds(default_seeds(), export_path);
    let mut output = Vec::new();
    let mut session = Session::new(catalog, Cursor::new(script.as_bytes()), &mut output);
    session.run().expect("session completed");
    let catalog = session.into_catalog();
    (catalog, output)
}

fn run_script(export_path: &Path, script: &str) -> (Catalog, String) {
    let (catalog, output) = run_script_bytes(export_path, script);
    (catalog, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn customer_reviews_are_signed_and_exported() {
    let temp_dir = tempdir().expect("temporary directory");
    let export_path = temp_dir.path().join("data.csv");

    let (catalog, output) = run_script(
        &export_path,
        "c\nAlice\ngreat value\n3\n1\ny\nBob\nbroke quickly\n2\nN\n",
    );

    assert!(output.contains("Invalid input. Please enter 1 or 2."));
    assert_eq!(
        output
            .matches(&format!("Data has been written to {}", export_path.display()))
            .count(),
        2
    );

    let first = catalog.store.require(catalog.product_at(1).unwrap()).unwrap();
    let second = catalog.store.require(catalog.product_at(2).unwrap()).unwrap();
    assert_eq!(first.reviews(), ["Alice: great value"]);
    assert_eq!(second.reviews(), ["Bob: broke quickly"]);

    assert_eq!(
        fs::read_to_string(&export_path).expect("export read"),
        "Name,Description,Price,Review\n\
         Product 1,Description 1,9.99,\n\
         ,,,Alice: great value\n\
         Product 2,Description 2,14.99,\n\
         ,,,Bob: broke quickly\n"
    );
}

#[test]
fn customer_review_survives_failed_export() {
    let temp_dir = tempdir().expect("temporary directory");
    let export_path = temp_dir.path().join("missing").join("data.csv");

    let (catalog, output) = run_script(&export_path, "C\nAlice\nfine\n1\nn\n");

    assert!(output.contains("Error opening file!"));
    assert!(output.ends_with("Do you want to add another review? (Y/N): "));
    let first = catalog.store.require(catalog.product_at(1).unwrap()).unwrap();
    assert_eq!(first.reviews(), ["Alice: fine"]);
}

#[test]
fn executive_changes_price_and_views_products() {
    let temp_dir = tempdir().expect("temporary directory");
    let export_path = temp_dir.path().join("data.csv");

    let (catalog, output) = run_script(&export_path, "E\n2\n2\nabc\n19.5\n1\n4\n");

    assert!(output.contains("Invalid price. Please enter a number."));
    assert!(output.contains("Price of Product 2 has been changed to $19.5"));
    assert!(output.contains("Name: Product 2\nDescription: Description 2\nPrice: $19.5\n"));
    assert!(output.ends_with("Exiting...\n"));

    let second = catalog.store.require(catalog.product_at(2).unwrap()).unwrap();
    assert_eq!(second.price(), 19.5);

    let written = fs::read_to_string(&export_path).expect("export read");
    assert!(written.contains("Product 1,Description 1,9.99,\n"));
    assert!(written.contains("Product 2,Description 2,19.5,\n"));
}

#[test]
fn executive_prints_competitor_content() {
    let temp_dir = tempdir().expect("temporary directory");
    let export_path = temp_dir.path().join("data.csv");
    fs::write(
        temp_dir.path().join("rival.csv"),
        "Name,Price\nThing,4.5\n",
    )
    .expect("competitor file written");
    let base = temp_dir.path().join("rival");

    let script = format!("E\n3\n{}\n4\n", base.display());
    let (_, output) = run_script(&export_path, &script);

    assert!(output.contains("Content of competitor's file:\nName,Price\nThing,4.5\n"));
    assert!(!export_path.exists());
}

#[test]
fn competitor_content_is_echoed_byte_for_byte() {
    let temp_dir = tempdir().expect("temporary directory");
    let export_path = temp_dir.path().join("data.csv");
    fs::write(temp_dir.path().join("rival.csv"), b"Name,Price\r\nCaf\xe9,4.5\r\n")
        .expect("competitor file written");
    let base = temp_dir.path().join("rival");

    let script = format!("E\n3\n{}\n4\n", base.display());
    let (_, output) = run_script_bytes(&export_path, &script);

    let expected: &[u8] = b"Content of competitor's file:\nName,Price\r\nCaf\xe9,4.5\r\n";
    assert!(output.windows(expected.len()).any(|window| window == expected));
    assert!(!output.windows(6).any(|window| window == b"Error:"));
}

#[test]
fn missing_competitor_file_is_reported_and_menu_continues() {
    let temp_dir = tempdir().expect("temporary directory");
    let export_path = temp_dir.path().join("data.csv");
    let base = temp_dir.path().join("nobody");

    let script = format!("E\n3\n{}\n4\n", base.display());
    let (_, output) = run_script(&export_path, &script);

    assert!(output.contains("Error opening file!"));
    assert!(output.ends_with("Exiting...\n"));
    assert!(!temp_dir.path().join("nobody.csv").exists());
}

#[test]
fn invalid_menu_choice_reprompts() {
    let temp_dir = tempdir().expect("temporary directory");
    let (_, output) = run_script(&temp_dir.path().join("data.csv"), "e\n9\n4\n");

    assert!(output.contains("Invalid option. Please try again."));
    assert_eq!(output.matches("Enter your choice: ").count(), 2);
}

#[test]
fn unknown_role_exits_immediately() {
    let temp_dir = tempdir().expect("temporary directory");
    let export_path = temp_dir.path().join("data.csv");

    let (_, output) = run_script(&export_path, "X\nAlice\n");

    assert_eq!(
        output,
        "Are you a Customer or an Executive? (C/E): Invalid user type. Exiting...\n"
    );
    assert!(!export_path.exists());
}

#[test]
fn blank_role_answers_are_skipped() {
    let temp_dir = tempdir().expect("temporary directory");

    let (_, output) = run_script(&temp_dir.path().join("data.csv"), "\n  \nE\n4\n");

    assert_eq!(
        output
            .matches("Are you a Customer or an Executive? (C/E): ")
            .count(),
        3
    );
    assert!(!output.contains("Invalid user type"));
    assert!(output.ends_with("Exiting...\n"));
}

#[test]
fn non_finite_prices_are_rejected_at_the_prompt() {
    let temp_dir = tempdir().expect("temporary directory");
    let export_path = temp_dir.path().join("data.csv");

    let (catalog, output) = run_script(&export_path, "E\n2\n1\nNaN\ninf\n7\n4\n");

    assert_eq!(output.matches("Invalid price. Please enter a number.").count(), 2);
    let first = catalog.store.require(catalog.product_at(1).unwrap()).unwrap();
    assert_eq!(first.price(), 7.0);
    assert!(
        fs::read_to_string(&export_path)
            .expect("export read")
            .contains("Product 1,Description 1,7,\n")
    );
}

#[test]
fn end_of_input_ends_the_session() {
    let temp_dir = tempdir().expect("temporary directory");
    let export_path = temp_dir.path().join("data.csv");

    let (catalog, output) = run_script(&export_path, "E\n2\n1\n");

    assert!(output.ends_with("Enter new price: $\n"));
    let first = catalog.store.require(catalog.product_at(1).unwrap()).unwrap();
    assert_eq!(first.price(), 9.99);
    assert!(!export_path.exists());
}

#[test]
fn role_and_menu_inputs_use_first_character() {
    assert_eq!(Role::parse("  customer"), Some(Role::Customer));
    assert_eq!(Role::parse("E"), Some(Role::Executive));
    assert_eq!(Role::parse(""), None);
    assert_eq!(MenuOption::parse("2"), Some(MenuOption::ChangePrice));
    assert_eq!(MenuOption::parse("4\r"), Some(MenuOption::Exit));
    assert_eq!(MenuOption::parse("x"), None);
}

#[test]
fn product_prompt_label_tracks_catalog_size() {
    assert_eq!(product_range_label(1), "1");
    assert_eq!(product_range_label(2), "1 or 2");
    assert_eq!(product_range_label(5), "1-5");
}
