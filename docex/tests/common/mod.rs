use std::io::{Cursor, Write};
use std::sync::Arc;

use docex::config::{Config, OcrConfig, PdfConfig, ServerConfig, SpoolConfig};
use docex::extract::Extractor;
use docex::ocr::OcrProvider;

/// Build an extractor whose staging directories live under `spool_dir`,
/// so tests can assert the cleanup invariant by listing that directory.
pub fn test_extractor(spool_dir: &std::path::Path) -> Extractor {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        ocr: OcrConfig {
            languages: "eng".to_string(),
            min_image_dimension: 50,
            max_image_dimension: 4096,
        },
        pdf: PdfConfig { dpi: 150.0 },
        spool: SpoolConfig {
            dir: spool_dir.to_path_buf(),
        },
    };
    let ocr = OcrProvider::new(&config.ocr);
    Extractor::new(ocr, Arc::new(config))
}

pub fn spool_entry_count(spool_dir: &std::path::Path) -> usize {
    std::fs::read_dir(spool_dir).unwrap().count()
}

/// Build a `.docx` with the docx-rs builder API.
pub fn create_test_docx<F>(builder_fn: F) -> Vec<u8>
where
    F: FnOnce(docx_rs::Docx) -> docx_rs::Docx,
{
    let docx = builder_fn(docx_rs::Docx::new());
    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).expect("Failed to pack DOCX");
    buffer.into_inner()
}

/// Encode a solid-color PNG of the given dimensions.
pub fn create_test_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::new_rgb8(width, height);
    let mut output = Vec::new();
    img.write_to(&mut Cursor::new(&mut output), image::ImageFormat::Png)
        .unwrap();
    output
}

/// Write an XLSX archive by hand: one zip entry per OOXML part, with the
/// sheet XML supplied by the caller. Sheets appear in `sheets` order.
pub fn create_test_xlsx(sheets: &[(&str, &str)], shared_strings: &[&str]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .unix_permissions(0o644);

        let mut content_types = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/>"#,
        );
        for i in 1..=sheets.len() {
            content_types.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
            ));
        }
        content_types.push_str("\n</Types>");

        zip.start_file("[Content_Types].xml", options).unwrap();
        zip.write_all(content_types.as_bytes()).unwrap();

        zip.add_directory("_rels", options).unwrap();
        zip.start_file("_rels/.rels", options).unwrap();
        zip.write_all(
            br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#,
        )
        .unwrap();

        let mut workbook = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );
        for (i, (name, _)) in sheets.iter().enumerate() {
            workbook.push_str(&format!(
                r#"
        <sheet name="{name}" sheetId="{id}" r:id="rId{id}"/>"#,
                id = i + 1
            ));
        }
        workbook.push_str("\n    </sheets>\n</workbook>");

        zip.add_directory("xl", options).unwrap();
        zip.start_file("xl/workbook.xml", options).unwrap();
        zip.write_all(workbook.as_bytes()).unwrap();

        let mut workbook_rels = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for i in 1..=sheets.len() {
            workbook_rels.push_str(&format!(
                r#"
    <Relationship Id="rId{i}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{i}.xml"/>"#
            ));
        }
        workbook_rels.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>
</Relationships>"#,
            sheets.len() + 1
        ));

        zip.add_directory("xl/_rels", options).unwrap();
        zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
        zip.write_all(workbook_rels.as_bytes()).unwrap();

        zip.add_directory("xl/worksheets", options).unwrap();
        for (i, (_, sheet_xml)) in sheets.iter().enumerate() {
            zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)
                .unwrap();
            zip.write_all(sheet_xml.as_bytes()).unwrap();
        }

        let mut sst = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{n}" uniqueCount="{n}">"#,
            n = shared_strings.len()
        );
        for s in shared_strings {
            sst.push_str(&format!("\n    <si><t>{s}</t></si>"));
        }
        sst.push_str("\n</sst>");

        zip.start_file("xl/sharedStrings.xml", options).unwrap();
        zip.write_all(sst.as_bytes()).unwrap();

        zip.finish().unwrap();
    }

    buffer.into_inner()
}
