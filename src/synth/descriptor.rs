//! Build descriptor model and its Makefile rendering

use serde::Serialize;
use std::fmt;

/// One `target: prerequisites` line followed by tab-indented recipe lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub target: String,
    pub prerequisites: Vec<String>,
    pub recipe: Vec<String>,
}

impl Rule {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            prerequisites: Vec::new(),
            recipe: Vec::new(),
        }
    }

    pub fn prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites
            .extend(prerequisites.into_iter().map(Into::into));
        self
    }

    pub fn recipe(mut self, line: impl Into<String>) -> Self {
        self.recipe.push(line.into());
        self
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.target)?;
        for prerequisite in &self.prerequisites {
            write!(f, " {}", prerequisite)?;
        }
        writeln!(f)?;
        for line in &self.recipe {
            writeln!(f, "\t{}", line)?;
        }
        Ok(())
    }
}

/// A group of rules rendered back to back under an optional comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub comment: Option<String>,
    pub rules: Vec<Rule>,
}

impl Section {
    pub fn new(comment: Option<&str>, rules: Vec<Rule>) -> Self {
        Self {
            comment: comment.map(str::to_string),
            rules,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.comment {
            writeln!(f, "# {}", comment)?;
        }
        for rule in &self.rules {
            write!(f, "{}", rule)?;
        }
        Ok(())
    }
}

/// The synthesized build script: ordered sections separated by blank lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDescriptor {
    sections: Vec<Section>,
}

impl BuildDescriptor {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks a rule up by target name across all sections.
    pub fn rule(&self, target: &str) -> Option<&Rule> {
        self.sections
            .iter()
            .flat_map(|s| s.rules.iter())
            .find(|r| r.target == target)
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BuildDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}
