//! Zip bundling of the rendered outputs.

use std::io::{Cursor, Write};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;

/// Bundles the workbook and the text report into one downloadable zip.
pub fn bundle(workbook: &[u8], report: &str) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file("invoice.xlsx", options)?;
    writer.write_all(workbook)?;

    writer.start_file("invoice.txt", options)?;
    writer.write_all(report.as_bytes())?;

    let buffer = writer.finish()?.into_inner();
    debug!("Bundle rendered: {} bytes", buffer.len());
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn bundle_contains_both_artifacts() {
        let buffer = bundle(b"fake-xlsx-bytes", "Invoice Summary\n").unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(buffer)).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"invoice.xlsx".to_string()));
        assert!(names.contains(&"invoice.txt".to_string()));

        let mut report = String::new();
        archive
            .by_name("invoice.txt")
            .unwrap()
            .read_to_string(&mut report)
            .unwrap();
        assert_eq!(report, "Invoice Summary\n");
    }
}
