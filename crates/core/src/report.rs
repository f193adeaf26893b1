//! Report assembly: filtering, ordering and rendering of clusters
//!
//! Singleton components are dropped, the rest are ordered largest-first
//! and numbered from 1. Rendering targets any `io::Write` sink; member
//! lines appear verbatim, in their original first-seen order.

use std::io::{self, Write};

/// A cluster of records sharing field values, as it appears in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    members: Vec<String>,
}

impl Group {
    /// Member lines in first-seen order
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Groups are never empty; kept for container-API symmetry
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Ordered report over clusters with more than one member
#[derive(Debug, Clone, Default)]
pub struct GroupReport {
    groups: Vec<Group>,
}

impl GroupReport {
    /// Build a report from raw components: drops singletons and orders
    /// the rest by descending size. Equal sizes keep discovery order
    /// (the sort is stable).
    pub fn from_components(components: Vec<Vec<String>>) -> Self {
        let mut groups: Vec<Group> = components
            .into_iter()
            .filter(|members| members.len() > 1)
            .map(|members| Group { members })
            .collect();
        groups.sort_by(|a, b| b.len().cmp(&a.len()));
        Self { groups }
    }

    /// Number of groups in the report
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the report has no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Size of the largest group, 0 for an empty report
    pub fn largest_group(&self) -> usize {
        self.groups.first().map(|g| g.len()).unwrap_or(0)
    }

    /// Iterate groups with their 1-based display numbers
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Group)> {
        self.groups.iter().enumerate().map(|(i, g)| (i + 1, g))
    }

    /// Render the report's textual shape: a count line, then each group
    /// as a numbered header, its member lines verbatim, and a blank
    /// separator line.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "Groups with more than one record: {}", self.len())?;
        writeln!(w)?;

        for (number, group) in self.iter() {
            writeln!(w, "Group {}", number)?;
            for line in group.members() {
                writeln!(w, "{}", line)?;
            }
            writeln!(w)?;
        }

        Ok(())
    }
}
