use thiserror::Error;

/// Everything that can reject an import. All variants are resolved at the
/// HTTP boundary as user-facing messages; none of them is fatal to the
/// application, at worst the user re-uploads a corrected file.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The bytes could not be decoded as a spreadsheet at all.
    #[error("The file could not be read as a spreadsheet: {0}")]
    Decode(String),

    /// Fewer than two rows: no header plus at least one data row.
    #[error("The Excel file is empty or does not have the expected format.")]
    Structure,

    /// The header row failed the positional comparison. Carries the full
    /// expected header string so the user can fix the file.
    #[error("Excel file headers do not match the expected format. Please check: {expected}.")]
    HeaderMismatch { expected: String },

    /// A coercion failed while extracting a field from a data row. This
    /// aborts the entire import, not just the offending row.
    #[error("Problem reading row {row} of the Excel file: {reason}")]
    Row { row: usize, reason: String },
}
