use super::error::{FootprintError, Result};
use super::types::Category;
use log::{debug, warn};
use std::path::{Path, PathBuf};

const SEPARATOR: &str = "--------";
const INPUT_EXTENSION: &str = "csv";

/// The numbers collected from one input section.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentGroup {
    pub category: Category,
    pub values: Vec<f64>,
}

/// Resolves a command line argument to an input file. Paths ending in `.csv`
/// are used as given; anything else is a person name and gets `.csv`
/// appended, so `J. Smith` becomes `J. Smith.csv`.
pub fn input_path(name: &str) -> PathBuf {
    let is_csv = Path::new(name)
        .extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case(INPUT_EXTENSION));

    if is_csv {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{}.{}", name, INPUT_EXTENSION))
    }
}

/// Splits a questionnaire into per-category argument groups.
///
/// The first line is a header. Sections are delimited by lines containing a
/// run of eight dashes and map, in order, onto [`Category::ALL`]. Within a
/// section only the last comma-separated field of a line is read, and blank
/// values are skipped. Quotes carry no meaning, so every record is one line. A group is yielded as soon as the separator
/// (or end of input) closing its section is read.
pub struct SectionReader<R> {
    resource: String,
    record_iter: csv::StringRecordsIntoIter<R>,
    // None until the first separator
    section: Option<usize>,
    values: Vec<f64>,
    done: bool,
}

impl SectionReader<std::fs::File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let resource = path.display().to_string();
        let reader = Self::builder().from_path(path).map_err(|source| {
            FootprintError::ResourceUnavailable {
                resource: resource.clone(),
                source,
            }
        })?;

        Ok(Self::new(resource, reader))
    }
}

impl<R: std::io::Read> SectionReader<R> {
    pub fn from_reader(resource: &str, reader: R) -> Self {
        Self::new(resource.into(), Self::builder().from_reader(reader))
    }

    fn builder() -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All);
        builder
    }

    fn new(resource: String, reader: csv::Reader<R>) -> Self {
        Self {
            resource,
            record_iter: reader.into_records(),
            section: None,
            values: Vec::new(),
            done: false,
        }
    }

    /// Closes the current section, returning its group if it collected
    /// anything.
    fn flush(&mut self) -> Option<ArgumentGroup> {
        if self.values.is_empty() {
            return None;
        }

        // Values are only collected inside a section that has a category
        let category = self.section.and_then(Category::from_index)?;
        let values = std::mem::take(&mut self.values);
        debug!("{} section closed with {} values", category, values.len());

        Some(ArgumentGroup { category, values })
    }

    fn accept(&mut self, record: &csv::StringRecord) -> Result<()> {
        let line = record.position().map_or(0, |position| position.line());

        let value = record.iter().last().unwrap_or_default();
        // A lone field is the value itself, with no label
        let label = match record.len() {
            0 | 1 => "",
            _ => record.get(0).unwrap_or_default(),
        };
        if value.is_empty() {
            return Ok(());
        }

        let section = match self.section {
            Some(section) => section,
            None => {
                warn!("Line {}: ignoring \"{}\" before the first section", line, value);
                return Ok(());
            }
        };
        if Category::from_index(section).is_none() {
            return Err(FootprintError::UnexpectedSection { line });
        }

        let number = value
            .parse::<f64>()
            .map_err(|_| FootprintError::MalformedNumericField {
                line,
                label: label.into(),
                value: value.into(),
            })?;
        self.values.push(number);

        Ok(())
    }
}

fn is_separator(record: &csv::StringRecord) -> bool {
    record.iter().any(|field| field.contains(SEPARATOR))
}

impl<R: std::io::Read> Iterator for SectionReader<R> {
    type Item = Result<ArgumentGroup>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let record = match self.record_iter.next() {
                Some(Ok(record)) => record,
                Some(Err(source)) => {
                    self.done = true;
                    return Some(Err(FootprintError::ResourceUnavailable {
                        resource: self.resource.clone(),
                        source,
                    }));
                }
                None => {
                    // The last section does not need a trailing separator
                    self.done = true;
                    return self.flush().map(Ok);
                }
            };

            if is_separator(&record) {
                let group = self.flush();
                self.section = Some(self.section.map_or(0, |section| section + 1));
                if let Some(group) = group {
                    return Some(Ok(group));
                }
            } else if let Err(e) = self.accept(&record) {
                self.done = true;
                return Some(Err(e));
            }
        }

        None
    }
}
