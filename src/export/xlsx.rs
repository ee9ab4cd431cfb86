use crate::errors::{AppError, AppResult};
use crate::export::{MonthExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;

const HEADERS: [&str; 9] = [
    "Date", "Day type", "Entry", "Lunch out", "Lunch in", "Exit", "Hours", "Status", "Note",
];

/// Styled monthly sheet: title block, one banded row per record, totals below.
pub(crate) fn export_xlsx(data: &MonthExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Punches").map_err(xlsx_err)?;

    let last_col = (HEADERS.len() - 1) as u16;

    // ---------------------------
    // Title block
    // ---------------------------
    let title = Format::new().set_bold().set_font_size(14);
    worksheet
        .merge_range(
            0,
            0,
            0,
            last_col,
            &format!("Attendance report - {}", data.employee),
            &title,
        )
        .map_err(xlsx_err)?;
    worksheet
        .merge_range(
            1,
            0,
            1,
            last_col,
            &format!(
                "{} · {} to {}",
                data.company,
                data.month_start.format("%d/%m/%Y"),
                data.month_end.format("%d/%m/%Y")
            ),
            &Format::new(),
        )
        .map_err(xlsx_err)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x4472C4))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    let header_row = 3;
    for (col, h) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(header_row, col as u16, *h, &header_format)
            .map_err(xlsx_err)?;
    }
    worksheet.set_freeze_panes(header_row + 1, 0).ok();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();

    // ---------------------------
    // Records
    // ---------------------------
    let mut row = header_row + 1;
    for (i, r) in data.records.iter().enumerate() {
        let band = if i % 2 == 0 { Color::RGB(0xEAF3FB) } else { Color::RGB(0xFFFFFF) };
        let text = [
            r.date.as_str(),
            r.day_type.as_str(),
            r.entry.as_str(),
            r.lunch_out.as_str(),
            r.lunch_in.as_str(),
            r.exit.as_str(),
        ];

        for (col, v) in text.iter().enumerate() {
            write_text(worksheet, row, col as u16, v, band)?;
            widths[col] = widths[col].max(v.chars().count());
        }
        write_hours(worksheet, row, 6, r.hours, band)?;
        write_text(worksheet, row, 7, &r.status, band)?;
        write_text(worksheet, row, 8, &r.note, band)?;
        widths[7] = widths[7].max(r.status.chars().count());
        widths[8] = widths[8].max(r.note.chars().count());

        row += 1;
    }

    // ---------------------------
    // Totals
    // ---------------------------
    let label = Format::new().set_bold().set_border(FormatBorder::Thin);
    let value = Format::new()
        .set_align(FormatAlign::Right)
        .set_border(FormatBorder::Thin);

    row += 1;
    for (name, v) in data.totals_rows() {
        worksheet
            .write_with_format(row, 0, name, &label)
            .map_err(xlsx_err)?;
        match v.parse::<f64>() {
            Ok(n) => worksheet.write_with_format(row, 1, n, &value),
            Err(_) => worksheet.write_with_format(row, 1, v.as_str(), &value),
        }
        .map_err(xlsx_err)?;
        widths[0] = widths[0].max(name.len());
        row += 1;
    }

    for (c, w) in widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(xlsx_err)?;
    }

    workbook.save(path).map_err(xlsx_err)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn banded(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_text(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    ws.write_with_format(row, col, s, &banded(bg))
        .map_err(xlsx_err)?;
    Ok(())
}

fn write_hours(ws: &mut Worksheet, row: u32, col: u16, hours: f64, bg: Color) -> AppResult<()> {
    let fmt = banded(bg)
        .set_num_format("0.00")
        .set_align(FormatAlign::Right);
    ws.write_with_format(row, col, hours, &fmt)
        .map_err(xlsx_err)?;
    Ok(())
}

fn xlsx_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX write error: {e}"))
}
