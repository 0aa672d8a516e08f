use std::path::Path;

use pretty_assertions::assert_eq;
use shell_engine::{
    ensure_dest_dir, file_name_from_url, infer_mime, DownloadRequest, StoragePermission,
    MIME_FALLBACK,
};

#[test]
fn file_name_comes_from_the_trailing_segment() {
    assert_eq!(
        file_name_from_url("https://example.com/files/report.pdf"),
        "report.pdf"
    );
    assert_eq!(
        file_name_from_url("https://example.com/a/b/c/notes.txt"),
        "notes.txt"
    );
}

#[test]
fn query_and_fragment_do_not_leak_into_the_name() {
    assert_eq!(
        file_name_from_url("https://example.com/files/report.pdf?token=abc#page=2"),
        "report.pdf"
    );
}

#[test]
fn awkward_urls_fall_back_to_a_usable_name() {
    assert_eq!(file_name_from_url(""), "download");
    assert_eq!(file_name_from_url("https://example.com/files///"), "files");
    assert_eq!(file_name_from_url("https://example.com/..."), "download");
}

#[test]
fn forbidden_characters_are_replaced() {
    assert_eq!(
        file_name_from_url("https://example.com/files/re:po*rt.pdf"),
        "re_po_rt.pdf"
    );
}

#[test]
fn request_targets_the_configured_subfolder() {
    let request = DownloadRequest::for_url(
        "https://example.com/files/report.pdf",
        Path::new("/downloads"),
        "Academie",
    );

    assert_eq!(request.file_name, "report.pdf");
    assert_eq!(request.dest_dir, Path::new("/downloads/Academie"));
    assert_eq!(
        request.dest_path,
        Path::new("/downloads/Academie/report.pdf")
    );
}

#[test]
fn mime_table_covers_the_usual_documents() {
    assert_eq!(infer_mime("report.pdf"), "application/pdf");
    assert_eq!(infer_mime("REPORT.PDF"), "application/pdf");
    assert_eq!(
        infer_mime("sheet.xlsx"),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(infer_mime("photo.jpeg"), "image/jpeg");
}

#[test]
fn unmapped_extensions_open_with_the_wildcard_type() {
    assert_eq!(infer_mime("archive.rar"), MIME_FALLBACK);
    assert_eq!(infer_mime("no_extension"), MIME_FALLBACK);
}

#[test]
fn dest_dir_is_created_when_missing() {
    let root = tempfile::tempdir().unwrap();
    let nested = root.path().join("Academie");

    ensure_dest_dir(&nested).unwrap();

    assert!(nested.is_dir());
    // Idempotent on an existing directory.
    ensure_dest_dir(&nested).unwrap();
}

#[test]
fn dest_dir_rejects_a_file_in_the_way() {
    let root = tempfile::tempdir().unwrap();
    let blocker = root.path().join("Academie");
    std::fs::write(&blocker, b"not a directory").unwrap();

    assert!(ensure_dest_dir(&blocker).is_err());
}

#[test]
fn permission_choice_follows_the_platform_generation() {
    assert_eq!(
        StoragePermission::required(true),
        StoragePermission::ReadMediaAll
    );
    assert_eq!(
        StoragePermission::required(false),
        StoragePermission::WriteExternalStorage
    );
}
