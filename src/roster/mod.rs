//! In-memory student roster used as the list's data source.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A student record as shown in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    /// National identity number
    pub vat: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// One fetched page of students
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterPage {
    pub students: Vec<Student>,
    /// Matching records across all pages
    pub total: usize,
}

impl RosterPage {
    /// Active students on this page
    pub fn active_count(&self) -> usize {
        self.students.iter().filter(|s| s.is_active).count()
    }
}

const FIRST_NAMES: &[&str] = &[
    "Ana", "Luis", "María", "José", "Carmen", "Pedro", "Lucía", "Jorge", "Elena", "Andrés",
    "Sofía", "Miguel", "Valentina", "Diego", "Camila", "Rafael", "Isabel", "Tomás",
];

const LAST_NAMES: &[&str] = &[
    "González", "Rodríguez", "Pérez", "Hernández", "García", "Martínez", "López", "Díaz",
    "Ramírez", "Torres", "Flores", "Rojas", "Mendoza", "Castillo",
];

/// Student records sorted by name
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new(mut students: Vec<Student>) -> Self {
        students.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()).then(a.id.cmp(&b.id)));
        Self { students }
    }

    /// Deterministic synthetic roster of `count` students
    pub fn sample(count: usize) -> Self {
        let students = (0..count)
            .map(|i| {
                let first = FIRST_NAMES[i % FIRST_NAMES.len()];
                let last = LAST_NAMES[(i / FIRST_NAMES.len() + i) % LAST_NAMES.len()];
                Student {
                    id: i as u32 + 1,
                    name: format!("{first} {last}"),
                    vat: format!("V-{}", 20_000_000 + i * 7_919),
                    is_active: i % 9 != 4,
                }
            })
            .collect();
        Self::new(students)
    }

    /// Load a JSON array of students
    pub async fn load(path: &Path) -> Result<Self> {
        debug!("Loading roster from: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read roster file {}", path.display()))?;
        let students: Vec<Student> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid roster file {}", path.display()))?;
        Ok(Self::new(students))
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Fetch one page, filtered by `query` once it reaches `min_query_len` characters.
    ///
    /// Pages past the end come back empty with the correct total.
    pub fn fetch_page(
        &self,
        query: &str,
        page: usize,
        page_size: usize,
        min_query_len: usize,
    ) -> RosterPage {
        let page_size = page_size.max(1);
        let offset = page.saturating_sub(1) * page_size;
        let needle = query.trim().to_lowercase();

        let matching: Vec<&Student> = if needle.chars().count() >= min_query_len {
            self.students
                .iter()
                .filter(|s| {
                    s.name.to_lowercase().contains(&needle) || s.vat.to_lowercase().contains(&needle)
                })
                .collect()
        } else {
            self.students.iter().collect()
        };

        let total = matching.len();
        let students = matching
            .into_iter()
            .skip(offset)
            .take(page_size)
            .cloned()
            .collect();

        RosterPage { students, total }
    }
}
