//! PDF export for the unpaid-tenants report
//!
//! Writes a minimal PDF 1.4 document by hand: a title line followed by the
//! fixed 4-column table (Room No, Name, Unpaid Months, Balance Due), one row
//! per unpaid tenant, paginated on A4. Only the built-in Helvetica font is
//! referenced, so no font data is embedded.

use std::io::Write;

use crate::error::{HostelError, HostelResult};
use crate::services::UnpaidRecord;

// A4 in points
const PAGE_WIDTH: i32 = 595;
const PAGE_HEIGHT: i32 = 842;

const ROWS_PER_PAGE: usize = 42;
const ROW_STEP: i32 = 16;

// Column x positions for Room No, Name, Unpaid Months, Balance Due
const COLUMNS: [i32; 4] = [50, 120, 250, 470];

/// Write the unpaid-tenants report as a PDF document
pub fn export_unpaid_pdf<W: Write>(
    records: &[UnpaidRecord],
    title: &str,
    currency: &str,
    mut writer: W,
) -> HostelResult<()> {
    let pages: Vec<&[UnpaidRecord]> = if records.is_empty() {
        vec![records]
    } else {
        records.chunks(ROWS_PER_PAGE).collect()
    };

    // Object layout: 1 = catalog, 2 = page tree, 3 = font, then a
    // page/content object pair per page.
    let mut objects: Vec<Vec<u8>> = Vec::new();
    objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());

    let kids = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect::<Vec<_>>()
        .join(" ");
    objects.push(
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            pages.len()
        )
        .into_bytes(),
    );

    objects.push(b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_vec());

    for (i, chunk) in pages.iter().enumerate() {
        let content = page_content(chunk, title, currency, i == 0);
        objects.push(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                PAGE_WIDTH,
                PAGE_HEIGHT,
                5 + 2 * i
            )
            .into_bytes(),
        );

        let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        stream.extend_from_slice(content.as_bytes());
        stream.extend_from_slice(b"\nendstream");
        objects.push(stream);
    }

    // Assemble the file, tracking byte offsets for the xref table
    let mut buffer: Vec<u8> = Vec::new();
    buffer.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(buffer.len());
        buffer.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
        buffer.extend_from_slice(body);
        buffer.extend_from_slice(b"\nendobj\n");
    }

    let xref_offset = buffer.len();
    buffer.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    buffer.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        buffer.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    buffer.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    writer
        .write_all(&buffer)
        .map_err(|e| HostelError::Export(format!("Failed to write PDF: {}", e)))?;
    Ok(())
}

/// Build the content stream for one page
fn page_content(records: &[UnpaidRecord], title: &str, currency: &str, first_page: bool) -> String {
    let mut content = String::new();
    let mut y = PAGE_HEIGHT - 50;

    if first_page {
        content.push_str(&text_at(16, COLUMNS[0], y, title));
        y -= 2 * ROW_STEP;
    }

    for (x, heading) in COLUMNS
        .iter()
        .zip(["Room No", "Name", "Unpaid Months", "Balance Due"])
    {
        content.push_str(&text_at(10, *x, y, heading));
    }
    y -= ROW_STEP;

    for record in records {
        content.push_str(&text_at(10, COLUMNS[0], y, &truncate(&record.room_no, 12)));
        content.push_str(&text_at(10, COLUMNS[1], y, &truncate(&record.name, 24)));
        content.push_str(&text_at(
            10,
            COLUMNS[2],
            y,
            &truncate(&record.unpaid_months, 42),
        ));
        content.push_str(&text_at(
            10,
            COLUMNS[3],
            y,
            &format!("{} {}", currency, record.balance_due),
        ));
        y -= ROW_STEP;
    }

    if records.is_empty() {
        content.push_str(&text_at(10, COLUMNS[0], y, "No unpaid tenants."));
    }

    content
}

/// A single positioned text-showing operation
fn text_at(size: i32, x: i32, y: i32, text: &str) -> String {
    format!(
        "BT /F1 {} Tf {} {} Td ({}) Tj ET\n",
        size,
        x,
        y,
        escape_pdf_text(text)
    )
}

/// Escape the characters with special meaning inside PDF string literals
fn escape_pdf_text(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '(' => vec!['\\', '('],
            ')' => vec!['\\', ')'],
            '\\' => vec!['\\', '\\'],
            c => vec![c],
        })
        .collect()
}

/// Shorten cell text that would overflow its column
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(2)).collect();
    format!("{}..", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records(n: usize) -> Vec<UnpaidRecord> {
        (1..=n)
            .map(|i| UnpaidRecord {
                room_no: format!("A{:02}", i),
                name: format!("Tenant {}", i),
                unpaid_months: "September, October".into(),
                balance_due: 6000,
            })
            .collect()
    }

    fn render(records: &[UnpaidRecord]) -> Vec<u8> {
        let mut output = Vec::new();
        export_unpaid_pdf(records, "Unpaid Tenants Report", "Ksh", &mut output).unwrap();
        output
    }

    #[test]
    fn test_pdf_structure() {
        let output = render(&sample_records(2));
        let text = String::from_utf8_lossy(&output);

        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("startxref"));
    }

    #[test]
    fn test_one_row_per_record() {
        let output = render(&sample_records(3));
        let text = String::from_utf8_lossy(&output);

        for i in 1..=3 {
            assert!(text.contains(&format!("(Tenant {})", i)));
        }
        assert!(text.contains("(Room No)"));
        assert!(text.contains("(September, October)"));
        assert!(text.contains("(Ksh 6000)"));
    }

    #[test]
    fn test_empty_report_still_renders() {
        let output = render(&[]);
        let text = String::from_utf8_lossy(&output);
        assert!(text.contains("(No unpaid tenants.)"));
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn test_long_reports_paginate() {
        let output = render(&sample_records(100));
        let text = String::from_utf8_lossy(&output);
        assert!(text.contains("/Count 3"));
        assert!(text.contains("(Tenant 100)"));
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let records = vec![UnpaidRecord {
            room_no: "B(1)".into(),
            name: "Ann".into(),
            unpaid_months: "May".into(),
            balance_due: 1000,
        }];
        let output = render(&records);
        let text = String::from_utf8_lossy(&output);
        assert!(text.contains("(B\\(1\\))"));
    }

    #[test]
    fn test_xref_offsets_match_objects() {
        let output = render(&sample_records(1));
        let text = String::from_utf8_lossy(&output);

        // Every offset in the xref table must point at an "N 0 obj" line
        let xref_start = text.find("xref\n").unwrap();
        for (i, line) in text[xref_start..]
            .lines()
            .skip(3) // "xref", subsection header, free entry
            .take_while(|l| l.ends_with("n "))
            .enumerate()
        {
            let offset: usize = line[..10].parse().unwrap();
            let expected = format!("{} 0 obj", i + 1);
            assert!(
                text[offset..].starts_with(&expected),
                "xref entry {} points at {:?}",
                i + 1,
                &text[offset..offset + 12]
            );
        }
    }
}
