use serde::{Deserialize, Serialize};

/// Format of an uploaded tabular file, decided by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Quoting-aware delimited text
    Csv,

    /// Plain text split naively on a sniffed delimiter
    Txt,
}

impl FileFormat {
    /// Anything that is not `.txt` (case-insensitive) is parsed as CSV,
    /// including names without an extension.
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = file_name.rsplit('.').next().unwrap_or_default();
        if extension.eq_ignore_ascii_case("txt") {
            FileFormat::Txt
        } else {
            FileFormat::Csv
        }
    }

    /// Badge shown next to the upload preview
    pub fn label(&self) -> &'static str {
        match self {
            FileFormat::Csv => "CSV",
            FileFormat::Txt => "TXT",
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FileFormat::from_file_name("export.txt"), FileFormat::Txt);
        assert_eq!(FileFormat::from_file_name("EXPORT.TXT"), FileFormat::Txt);
        assert_eq!(FileFormat::from_file_name("sales.csv"), FileFormat::Csv);
        assert_eq!(FileFormat::from_file_name("notes.txt.csv"), FileFormat::Csv);
        assert_eq!(FileFormat::from_file_name("txt"), FileFormat::Txt);
        assert_eq!(FileFormat::from_file_name("data"), FileFormat::Csv);
    }
}
