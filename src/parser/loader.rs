use std::io::{self, BufRead};

use super::parse_record;
use crate::domain::Polygon;
use crate::error::ParseError;

/// A line of the polygon file that did not make it into the working set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// 1-based line number
    pub line: usize,
    pub error: ParseError,
}

/// Outcome of reading a polygon file
#[derive(Debug, Default)]
pub struct LoadReport {
    pub polygons: Vec<Polygon>,
    pub rejected: Vec<RejectedRecord>,
    /// Set when reading stopped early; polygons read before it are kept
    pub read_error: Option<io::Error>,
}

/// Read polygon records, one per line
///
/// Blank lines are skipped silently. Malformed lines are recorded in
/// [`LoadReport::rejected`] and loading resumes at the next line. Bytes that
/// are not valid UTF-8 are replaced, which makes the line fail to parse.
pub fn load_polygons<R: BufRead>(mut reader: R) -> LoadReport {
    let mut report = LoadReport::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                report.read_error = Some(e);
                break;
            }
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        match parse_record(&line) {
            Ok(polygon) => report.polygons.push(polygon),
            Err(error) => report.rejected.push(RejectedRecord {
                line: line_no,
                error,
            }),
        }
    }

    report
}
