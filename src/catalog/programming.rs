use std::fmt;

/// Programming languages offered by default, in catalog order.
pub const PROGRAMMING_LANGUAGES: &[&str] = &["Python", "JavaScript", "Java", "C++", "Ruby"];

/// A programming language to generate a snippet in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgrammingLanguage(String);

impl ProgrammingLanguage {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Extension of the generated file: the lowercased name ("C++" -> "c++").
    pub fn extension(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn code_file_name(&self) -> String {
        format!("hello_world.{}", self.extension())
    }
}

impl fmt::Display for ProgrammingLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProgrammingLanguage {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
