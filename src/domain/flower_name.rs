use std::fmt;

/// A flower name as entered by the user: trimmed and guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct FlowerName(String);

impl FlowerName {
    pub fn parse(input: &str) -> Result<FlowerName, InvalidFlowerName> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InvalidFlowerName);
        }
        Ok(FlowerName(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FlowerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlowerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("flower name cannot be empty")]
pub struct InvalidFlowerName;
