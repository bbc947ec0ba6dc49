//! Domain entity representing a student record.

/// A persisted student row.
///
/// `id` is assigned by storage on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl Student {
    /// Creates a new Student instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let student = Student::new(1, "Ada".to_string(), "ada@example.com".to_string(), 36);
    /// ```
    pub fn new(id: i64, name: String, email: String, age: i64) -> Self {
        Self {
            id,
            name,
            email,
            age,
        }
    }
}

/// Validated field values for creating or fully replacing a student.
///
/// Updates use full-replace semantics, so the same shape serves both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl NewStudent {
    /// Attaches a storage-assigned id, producing the persisted form.
    pub fn with_id(self, id: i64) -> Student {
        Student::new(id, self.name, self.email, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_creation() {
        let student = Student::new(
            1,
            "Ada Lovelace".to_string(),
            "ada@example.com".to_string(),
            36,
        );

        assert_eq!(student.id, 1);
        assert_eq!(student.name, "Ada Lovelace");
        assert_eq!(student.email, "ada@example.com");
        assert_eq!(student.age, 36);
    }

    #[test]
    fn test_new_student_with_id() {
        let new_student = NewStudent {
            name: "Alan".to_string(),
            email: "alan@example.com".to_string(),
            age: 41,
        };

        let student = new_student.clone().with_id(9);

        assert_eq!(student.id, 9);
        assert_eq!(student.name, new_student.name);
        assert_eq!(student.email, new_student.email);
        assert_eq!(student.age, new_student.age);
    }
}
