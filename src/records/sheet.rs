use super::*;
use crate::gameplay::Move;

/// Header of the column holding the player's moves.
pub const PLAYER_COLUMN: &str = "player";
/// Leading bytes of a zip archive, and so of every xlsx workbook.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// One row of a table: its 1-based line (or spreadsheet row) and its cells.
type Row = (usize, Vec<String>);

/// A parsed move log: the player column of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet(Vec<Move>);

impl Sheet {
    /// Reads and parses a log file from disk.
    pub fn read(path: impl AsRef<std::path::Path>) -> Result<Self, ImportError> {
        let path = path.as_ref();
        let sheet = Self::decode(&std::fs::read(path)?)?;
        log::info!("read {} moves from {}", sheet.len(), path.display());
        Ok(sheet)
    }
    /// Parses raw upload bytes: an xlsx workbook when they carry the zip
    /// signature, delimited utf-8 text otherwise.
    pub fn decode(bytes: &[u8]) -> Result<Self, ImportError> {
        match bytes.starts_with(ZIP_MAGIC) {
            true => Self::workbook(bytes),
            false => std::str::from_utf8(bytes)
                .map_err(|_| ImportError::Encoding)
                .and_then(Self::parse),
        }
    }
    /// Parses comma, semicolon or tab delimited text.
    ///
    /// The first non-blank line is the header; the delimiter is whichever of
    /// the three it contains first. Quoting follows RFC 4180, blank lines are
    /// skipped and cells are trimmed of surrounding whitespace.
    pub fn parse(text: &str) -> Result<Self, ImportError> {
        let text = text.trim_start_matches('\u{feff}');
        let header = text
            .lines()
            .find(|line| !line.trim().is_empty())
            .ok_or(ImportError::Empty)?;
        let rows = csv::ReaderBuilder::new()
            .delimiter(Self::delimiter(header))
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes())
            .into_records()
            .map(|record| {
                let record = record?;
                let line = record.position().map(|p| p.line() as usize).unwrap_or_default();
                Ok((line, record.iter().map(str::to_string).collect()))
            })
            .collect::<Result<Vec<Row>, ImportError>>()?;
        Self::tabulate(rows)
    }
    /// Parses the first worksheet of an xlsx workbook, header in the first row.
    pub fn workbook(bytes: &[u8]) -> Result<Self, ImportError> {
        use calamine::Reader;
        let mut workbook = calamine::Xlsx::new(std::io::Cursor::new(bytes))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ImportError::Empty)??;
        let (top, _) = range.start().unwrap_or_default();
        let rows = range
            .rows()
            .enumerate()
            .map(|(i, cells)| (top as usize + i + 1, cells.iter().map(Self::text).collect()))
            .collect::<Vec<Row>>();
        Self::tabulate(rows)
    }
    pub fn moves(&self) -> &[Move] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Sheet {
    /// Finds the player column in the first non-blank row and parses every
    /// later row's cell in order.
    fn tabulate(rows: Vec<Row>) -> Result<Self, ImportError> {
        let mut rows = rows
            .into_iter()
            .filter(|(_, cells)| cells.iter().any(|cell| !cell.trim().is_empty()));
        let (_, header) = rows.next().ok_or(ImportError::Empty)?;
        let column = header
            .iter()
            .position(|name| name.trim().eq_ignore_ascii_case(PLAYER_COLUMN))
            .ok_or_else(|| ImportError::MissingColumn(PLAYER_COLUMN.to_string()))?;
        rows.map(|(line, cells)| {
            let cell = cells
                .get(column)
                .map(|cell| cell.trim())
                .filter(|cell| !cell.is_empty())
                .ok_or(ImportError::MissingCell { line })?;
            Move::try_from(cell).map_err(|_| ImportError::InvalidMove {
                line,
                cell: cell.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Self)
    }
    fn delimiter(header: &str) -> u8 {
        header
            .bytes()
            .find(|b| matches!(b, b',' | b';' | b'\t'))
            .unwrap_or(b',')
    }
    fn text(cell: &calamine::Data) -> String {
        match cell {
            calamine::Data::Empty => String::new(),
            calamine::Data::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoIterator for Sheet {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
