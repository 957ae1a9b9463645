//! Employee records and the bonus rule.
//!
//! A record is one comma-separated data line. Only three columns matter:
//!
//! | Index | Column     |
//! |-------|------------|
//! | 0     | identifier |
//! | 1     | name       |
//! | 3     | score      |
//!
//! Column 2 and anything past column 3 are ignored.

use crate::error::MalformedRecord;

/// Field separator for input lines.
pub const DELIMITER: char = ',';

/// Scores strictly above this value earn a bonus.
pub const BONUS_THRESHOLD: f64 = 4.5;

/// Bonus paid to every qualifying employee.
pub const BONUS_AMOUNT: u32 = 5000;

const ID_FIELD: usize = 0;
const NAME_FIELD: usize = 1;
const SCORE_FIELD: usize = 3;

/// The columns of one data line that the bonus rule looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub id: String,
    pub name: String,
    pub score: f64,
}

impl EmployeeRecord {
    /// Parse a raw input line.
    ///
    /// Surrounding whitespace and the line terminator are stripped first.
    /// Fails if the line has fewer than four fields or the score column is
    /// not a number.
    pub fn parse(line: &str) -> Result<Self, MalformedRecord> {
        let fields: Vec<&str> = line.trim().split(DELIMITER).collect();

        let id = fields.get(ID_FIELD).ok_or(MalformedRecord)?;
        let name = fields.get(NAME_FIELD).ok_or(MalformedRecord)?;
        let score = fields
            .get(SCORE_FIELD)
            .ok_or(MalformedRecord)?
            .trim()
            .parse::<f64>()
            .map_err(|_| MalformedRecord)?;

        Ok(Self {
            id: (*id).to_string(),
            name: (*name).to_string(),
            score,
        })
    }

    /// True when the score is strictly above [`BONUS_THRESHOLD`].
    pub fn is_eligible(&self) -> bool {
        self.score > BONUS_THRESHOLD
    }

    /// The report line for this employee, if they qualify.
    pub fn report_line(&self) -> Option<String> {
        self.is_eligible().then(|| {
            format!(
                "ID: {}, Name: {} gets a bonus of ${}",
                self.id, self.name, BONUS_AMOUNT
            )
        })
    }
}
