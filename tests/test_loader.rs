mod common;

use common::TempDocRoot;
use teapot::http::loader::{DocumentRoot, LoadError};
use teapot::http::response::StatusCode;

#[test]
fn test_resolve_existing_file() {
    let root = TempDocRoot::new();
    let file = root.write("index.html", "<h1>hi</h1>");

    assert_eq!(root.docs().resolve("/index.html"), Some(file));
}

#[test]
fn test_resolve_nested_file() {
    let root = TempDocRoot::new();
    let file = root.write("a/b/c.txt", "deep");

    assert_eq!(root.docs().resolve("/a/b/c.txt"), Some(file));
}

#[test]
fn test_resolve_missing_file() {
    let root = TempDocRoot::new();
    assert_eq!(root.docs().resolve("/nope.html"), None);
}

#[test]
fn test_resolve_directory_is_not_a_document() {
    let root = TempDocRoot::new();
    root.write("dir/file.txt", "x");

    assert_eq!(root.docs().resolve("/"), None);
    assert_eq!(root.docs().resolve("/dir"), None);
}

#[test]
fn test_resolve_refuses_parent_components() {
    let root = TempDocRoot::new();
    root.write("inner/secret.txt", "s");
    let docs = DocumentRoot::new(root.path().join("inner"), root.path().join("html"));

    // html/404.html exists one level up, but is outside this root
    assert_eq!(docs.resolve("/../html/404.html"), None);
    assert!(docs.resolve("/secret.txt").is_some());
}

#[tokio::test]
async fn test_load_returns_exact_bytes() {
    let root = TempDocRoot::new();
    let bytes: Vec<u8> = (0u8..=255).collect();
    let file = root.write("blob.bin", &bytes);

    let loaded = root.docs().load(&file).await.unwrap();
    assert_eq!(&loaded[..], &bytes[..]);
}

#[tokio::test]
async fn test_load_vanished_file_is_unreadable() {
    let root = TempDocRoot::new();
    let file = root.write("gone.txt", "soon gone");
    let docs = root.docs();

    assert!(docs.resolve("/gone.txt").is_some());
    root.remove("gone.txt");

    let err = docs.load(&file).await.unwrap_err();
    let LoadError::ResourceUnreadable { path, .. } = err;
    assert_eq!(path, file);
}

#[tokio::test]
async fn test_load_canned_page() {
    let root = TempDocRoot::new();
    let body = root.docs().load_canned(StatusCode::ImATeapot).await.unwrap();

    assert_eq!(&body[..], b"<html><body>canned 418</body></html>");
}

#[test]
fn test_canned_page_path() {
    let docs = DocumentRoot::new("/srv", "/srv/html");
    assert_eq!(
        docs.canned_page(StatusCode::CoffeeUnavailable),
        std::path::PathBuf::from("/srv/html/503.html")
    );
}

#[test]
fn test_missing_canned_pages() {
    let root = TempDocRoot::new();
    assert!(root.docs().missing_canned_pages().is_empty());

    root.remove("html/405.html");
    let missing = root.docs().missing_canned_pages();
    assert_eq!(missing, vec![root.path().join("html").join("405.html")]);
}
