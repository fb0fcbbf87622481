use super::calculator::Footprint;
use super::types::Rounded;

/// Width the category column is padded to in the text report.
pub const NAME_WIDTH: usize = 16;

const TOTAL_ROW: &str = "Total";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Csv,
}

#[derive(serde::Serialize)]
struct ReportRow<'a> {
    category: &'a str,
    tonnes_co2e: f64,
}

/// The tab-delimited breakdown: a header carrying the rounded total, then
/// one row per category.
pub struct Report<'a>(pub &'a Footprint);

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Category\tTonnes CO2E (sum: {})",
            Rounded::from(self.0.total())
        )?;
        for (category, tonnes) in self.0.iter() {
            writeln!(
                f,
                "{:<width$}\t{}",
                category.name(),
                Rounded::from(tonnes),
                width = NAME_WIDTH
            )?;
        }

        Ok(())
    }
}

pub fn render(footprint: &Footprint) -> String {
    Report(footprint).to_string()
}

pub fn write_text<Writer: std::io::Write>(
    footprint: &Footprint,
    mut f: Writer,
) -> Result<(), std::io::Error> {
    write!(f, "{}", Report(footprint))
}

/// Writes `category,tonnes_co2e` rows followed by a `Total` row.
pub fn write_csv<Writer: std::io::Write>(
    footprint: &Footprint,
    f: Writer,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(f);

    for (category, tonnes) in footprint.iter() {
        writer.serialize(ReportRow {
            category: category.name(),
            tonnes_co2e: Rounded::from(tonnes).to_f64(),
        })?;
    }
    writer.serialize(ReportRow {
        category: TOTAL_ROW,
        tonnes_co2e: Rounded::from(footprint.total()).to_f64(),
    })?;

    writer.flush()?;
    Ok(())
}

pub fn write<Writer: std::io::Write>(
    footprint: &Footprint,
    format: Format,
    f: Writer,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Text => write_text(footprint, f)?,
        Format::Csv => write_csv(footprint, f)?,
    }

    Ok(())
}
