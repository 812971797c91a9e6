/// Errors that can occur while reading a move log.
#[derive(Debug)]
pub enum ImportError {
    Empty,
    Encoding,
    MissingColumn(String),
    MissingCell { line: usize },
    InvalidMove { line: usize, cell: String },
    Csv(csv::Error),
    Xlsx(calamine::XlsxError),
    Io(std::io::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no header row"),
            Self::Encoding => write!(f, "neither an xlsx workbook nor utf-8 text"),
            Self::MissingColumn(c) => write!(f, "no {:?} column in header", c),
            Self::MissingCell { line } => write!(f, "line {}: row has no player cell", line),
            Self::InvalidMove { line, cell } => write!(f, "line {}: invalid move {:?}", line, cell),
            Self::Csv(e) => write!(f, "malformed delimited text: {}", e),
            Self::Xlsx(e) => write!(f, "unreadable workbook: {}", e),
            Self::Io(e) => write!(f, "read failed: {}", e),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv(e) => Some(e),
            Self::Xlsx(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}
impl From<calamine::XlsxError> for ImportError {
    fn from(e: calamine::XlsxError) -> Self {
        Self::Xlsx(e)
    }
}
