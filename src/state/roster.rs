//! Roster State
//!
//! Student record types and the pure client-side filter applied to the most
//! recently fetched list.

use serde::{Deserialize, Serialize};

/// Departments offered in the create/edit form and the department filter.
pub const DEPARTMENTS: [&str; 5] = [
    "Computer Science",
    "Engineering",
    "Business",
    "Arts",
    "Science",
];

/// Department filter value meaning "no department filter".
pub const ALL_DEPARTMENTS: &str = "all";

/// A student record as returned by the API. Owned by the backend; the roster
/// page keeps a copy that is re-fetched in full after every mutation.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update payload: every student field minus `id` and `created_at`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub year: u32,
    pub address: String,
}

impl Default for StudentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            department: String::new(),
            year: 1,
            address: String::new(),
        }
    }
}

impl StudentForm {
    /// Pre-fill the form from an existing record (edit dialog).
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            phone: student.phone.clone().unwrap_or_default(),
            department: student.department.clone().unwrap_or_default(),
            year: student.year.unwrap_or(1),
            address: student.address.clone().unwrap_or_default(),
        }
    }
}

/// Filter the roster by search term and department.
///
/// The search term matches case-insensitively as a substring of name, email,
/// or department; the department filter is an exact match, with
/// [`ALL_DEPARTMENTS`] disabling it. Pure: the input list is never modified.
pub fn filter_students(students: &[Student], search: &str, department: &str) -> Vec<Student> {
    let term = search.trim().to_lowercase();

    students
        .iter()
        .filter(|student| {
            if term.is_empty() {
                return true;
            }
            student.name.to_lowercase().contains(&term)
                || student.email.to_lowercase().contains(&term)
                || student
                    .department
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&term))
        })
        .filter(|student| {
            department == ALL_DEPARTMENTS || student.department.as_deref() == Some(department)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, email: &str, department: Option<&str>) -> Student {
        Student {
            id: name.to_lowercase(),
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            department: department.map(str::to_string),
            year: Some(1),
            address: None,
            created_at: None,
        }
    }

    fn roster() -> Vec<Student> {
        vec![
            student("Alice Khan", "alice@campus.edu", Some("Computer Science")),
            student("Bilal Ahmed", "bilal@campus.edu", Some("Engineering")),
            student("Carol Ng", "carol@campus.edu", None),
        ]
    }

    #[test]
    fn empty_term_and_all_departments_is_identity() {
        let students = roster();
        let filtered = filter_students(&students, "", ALL_DEPARTMENTS);
        assert_eq!(filtered, students);
    }

    #[test]
    fn filter_is_idempotent() {
        let students = roster();
        let once = filter_students(&students, "campus", ALL_DEPARTMENTS);
        let twice = filter_students(&once, "campus", ALL_DEPARTMENTS);
        assert_eq!(once, twice);
    }

    #[test]
    fn search_matches_name_email_and_department() {
        let students = roster();
        assert_eq!(filter_students(&students, "alice", ALL_DEPARTMENTS).len(), 1);
        assert_eq!(
            filter_students(&students, "BILAL@", ALL_DEPARTMENTS).len(),
            1
        );
        assert_eq!(
            filter_students(&students, "engineer", ALL_DEPARTMENTS).len(),
            1
        );
        assert!(filter_students(&students, "nobody", ALL_DEPARTMENTS).is_empty());
    }

    #[test]
    fn department_filter_is_exact() {
        let students = roster();
        let filtered = filter_students(&students, "", "Engineering");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Bilal Ahmed");

        // Students without a department never match a concrete filter
        assert!(filter_students(&students, "", "Business").is_empty());
    }

    #[test]
    fn search_and_department_combine() {
        let students = roster();
        let filtered = filter_students(&students, "campus", "Computer Science");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Alice Khan");
    }

    #[test]
    fn form_prefill_defaults_missing_fields() {
        let s = student("Carol Ng", "carol@campus.edu", None);
        let form = StudentForm::from_student(&s);
        assert_eq!(form.name, "Carol Ng");
        assert_eq!(form.department, "");
        assert_eq!(form.year, 1);
    }
}
