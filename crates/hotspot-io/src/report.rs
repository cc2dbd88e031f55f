//! Component report writing
//!
//! Serializes component records to the plain-text report format: one line
//! per component with its label and pixel count, then a total line.

use crate::error::IoResult;
use hotspot_region::ComponentRecord;
use std::io::Write;
use std::path::Path;

/// Write one line per component plus a trailing total.
///
/// ```text
/// Connected Component 1, number of pixels = 764
/// Connected Component 2, number of pixels = 87
/// Total number of connected components = 2
/// ```
pub fn write_component_report<W: Write>(
    writer: &mut W,
    records: &[ComponentRecord],
) -> IoResult<()> {
    for record in records {
        writeln!(
            writer,
            "Connected Component {}, number of pixels = {}",
            record.label, record.size
        )?;
    }
    writeln!(
        writer,
        "Total number of connected components = {}",
        records.len()
    )?;
    Ok(())
}

/// Write a component report to a file.
pub fn save_component_report<P: AsRef<Path>>(
    path: P,
    records: &[ComponentRecord],
) -> IoResult<()> {
    let mut file = std::fs::File::create(path)?;
    write_component_report(&mut file, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_layout() {
        let records = vec![
            ComponentRecord::new(1, 764),
            ComponentRecord::new(2, 87),
        ];
        let mut out = Vec::new();
        write_component_report(&mut out, &records).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Connected Component 1, number of pixels = 764\n\
             Connected Component 2, number of pixels = 87\n\
             Total number of connected components = 2\n"
        );
    }

    #[test]
    fn test_empty_report_has_only_total() {
        let mut out = Vec::new();
        write_component_report(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Total number of connected components = 0\n"
        );
    }
}
