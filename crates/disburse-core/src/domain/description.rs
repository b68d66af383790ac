use crate::ValidationError;

/// Applicant details entered as `Key: Value` lines in a card description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantDetails {
    pub name: String,
    pub email: String,
    pub institution: String,
    pub location: String,
    pub reason: String,
}

impl ApplicantDetails {
    /// Parses a card description.
    ///
    /// The text before the first `:` selects the field and the rest of the line, trimmed,
    /// becomes its value. Unknown keys and blank lines are ignored, a repeated key keeps
    /// its last value, and any other line without a `:` is rejected.
    pub fn parse(description: &str) -> Result<Self, ValidationError> {
        let mut details = Self::default();

        for (index, line) in description.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let (key, value) = line
                .split_once(':')
                .ok_or_else(|| ValidationError::MalformedDescriptionLine {
                    line: index + 1,
                    text: line.to_owned(),
                })?;

            let slot = match key.trim() {
                "Name" => &mut details.name,
                "Email" => &mut details.email,
                "Institution" => &mut details.institution,
                "Location" => &mut details.location,
                "Description" => &mut details.reason,
                _ => continue,
            };
            *slot = value.trim().to_owned();
        }

        Ok(details)
    }
}
