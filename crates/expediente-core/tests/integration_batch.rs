//! Integration tests: full batch runs against a local HTTP server.
//!
//! Builds sheets in memory, runs the row loop against a temp target
//! directory, and asserts on the produced folder/file layout and the report.

mod common;

use expediente_core::batch::{run_rows, BatchEvent, BatchReport};
use expediente_core::downloader::FetchOptions;
use expediente_core::sheet::{
    CellValue, Sheet, COL_FAMILY_NAME_1, COL_FAMILY_NAME_2, COL_GIVEN_NAME, URL_COLUMNS_FROM,
};
use tempfile::tempdir;

const PDF_BODY: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\ntrailer\n<<>>\n%%EOF\n";

fn headers(url_labels: &[&str]) -> Vec<String> {
    let mut headers: Vec<String> = vec![
        COL_GIVEN_NAME.to_string(),
        COL_FAMILY_NAME_1.to_string(),
        COL_FAMILY_NAME_2.to_string(),
    ];
    for i in 3..URL_COLUMNS_FROM {
        headers.push(format!("Meta {}", i));
    }
    headers.extend(url_labels.iter().map(|l| l.to_string()));
    headers
}

fn row(given: &str, fam1: &str, fam2: &str, url_cells: &[CellValue]) -> Vec<CellValue> {
    let mut r = vec![
        CellValue::Text(given.to_string()),
        CellValue::Text(fam1.to_string()),
        CellValue::Text(fam2.to_string()),
    ];
    for _ in 3..URL_COLUMNS_FROM {
        r.push(CellValue::Missing);
    }
    r.extend_from_slice(url_cells);
    r
}

#[tokio::test]
async fn two_valid_rows_one_incomplete_end_to_end() {
    let base = common::doc_server::start(PDF_BODY.to_vec());
    let target = tempdir().unwrap();

    let sheet = Sheet::from_parts(
        headers(&["Certificado", "Notas"]),
        vec![
            row(
                "Ana",
                "García",
                "López",
                &[
                    CellValue::Text(format!("{}certificado-ana.pdf", base)),
                    CellValue::Text("entregado en mano".to_string()),
                ],
            ),
            row(
                "Luis",
                "Pérez",
                "Ruiz",
                &[
                    CellValue::Text(format!("{}certificado-luis.pdf", base)),
                    CellValue::Text("pendiente".to_string()),
                ],
            ),
            row("", "Incompleto", "Sin-Nombre", &[CellValue::Missing, CellValue::Missing]),
        ],
    )
    .unwrap();

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let report = run_rows(&sheet, target.path(), &FetchOptions::default(), Some(&tx));
    drop(tx);

    assert_eq!(report.rows_total, 3);
    assert_eq!(report.rows_processed, 2);
    assert_eq!(report.rows_skipped, 1);
    assert_eq!(report.downloaded, 2);
    assert_eq!(report.failed, 0);
    assert_eq!(report.warnings, 2, "one non-URL cell per valid row");

    // Exactly the two student folders, nothing for the incomplete row.
    let mut folders: Vec<String> = std::fs::read_dir(target.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    folders.sort();
    assert_eq!(folders, ["García López Ana", "Pérez Ruiz Luis"]);

    for folder in &folders {
        let pdf = target.path().join(folder).join("Certificado.pdf");
        assert_eq!(std::fs::read(&pdf).unwrap(), PDF_BODY);
        assert!(!target.path().join(folder).join("Notas.pdf").exists());
    }

    // Progress reaches 100% and a download status was emitted per attempt.
    let mut last_percent = 0.0;
    let mut download_events = 0;
    while let Ok(event) = rx.try_recv() {
        match event {
            BatchEvent::Row { percent, .. } => last_percent = percent,
            BatchEvent::Download { text } => {
                download_events += 1;
                assert!(text.contains("Certificado.pdf"));
            }
        }
    }
    assert_eq!(last_percent, 100.0);
    assert_eq!(download_events, 2);
}

#[tokio::test]
async fn second_run_skips_existing_files() {
    let base = common::doc_server::start(PDF_BODY.to_vec());
    let target = tempdir().unwrap();

    let sheet = Sheet::from_parts(
        headers(&["Certificado"]),
        vec![row(
            "Ana",
            "García",
            "López",
            &[CellValue::Text(format!("{}certificado.pdf", base))],
        )],
    )
    .unwrap();

    let opts = FetchOptions::default();
    let first = run_rows(&sheet, target.path(), &opts, None);
    assert_eq!(first.downloaded, 1);
    assert_eq!(first.skipped_existing, 0);

    let second = run_rows(&sheet, target.path(), &opts, None);
    assert_eq!(second.downloaded, 0);
    assert_eq!(second.skipped_existing, 1);
    assert_eq!(second.failed, 0);

    let pdf = target.path().join("García López Ana").join("Certificado.pdf");
    assert_eq!(std::fs::read(&pdf).unwrap(), PDF_BODY);
}

#[tokio::test]
async fn http_404_fails_cell_but_batch_continues() {
    let base = common::doc_server::start(PDF_BODY.to_vec());
    let target = tempdir().unwrap();

    let sheet = Sheet::from_parts(
        headers(&["Certificado", "Notas"]),
        vec![row(
            "Ana",
            "García",
            "López",
            &[
                CellValue::Text(format!("{}missing", base)),
                CellValue::Text(format!("{}notas.pdf", base)),
            ],
        )],
    )
    .unwrap();

    let report = run_rows(&sheet, target.path(), &FetchOptions::default(), None);
    assert_eq!(report.failed, 1);
    assert_eq!(report.downloaded, 1, "later column still processed");

    let folder = target.path().join("García López Ana");
    assert!(!folder.join("Certificado.pdf").exists());
    assert!(
        !folder.join("Certificado.pdf.part").exists(),
        "no partial file on failure"
    );
    assert!(folder.join("Notas.pdf").exists());
}

#[tokio::test]
async fn empty_report_is_clean() {
    let report = BatchReport::default();
    assert!(report.clean());
}
