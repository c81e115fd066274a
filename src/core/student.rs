//! Student and team identification plus per-student data storage.
//!
//! ## StudentId
//!
//! Type-safe seat identifier. Seat order is the turn order fixed at
//! configuration time.
//!
//! ## StudentMap
//!
//! Per-student storage backed by `Vec` for O(1) access. The game uses it as
//! the arena that owns every `Student`; teams and reveal records only hold ids.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Student identifier (0-based seat index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub u8);

impl StudentId {
    /// Create a new student ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all student IDs for a game with `student_count` seats.
    ///
    /// ```
    /// use rust_trio::core::StudentId;
    ///
    /// let seats: Vec<_> = StudentId::all(3).collect();
    /// assert_eq!(seats, vec![StudentId::new(0), StudentId::new(1), StudentId::new(2)]);
    /// ```
    pub fn all(student_count: usize) -> impl Iterator<Item = StudentId> {
        (0..student_count as u8).map(StudentId)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Student {}", self.0)
    }
}

/// Team identifier (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// Per-student data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_trio::core::{StudentId, StudentMap};
///
/// let mut credits: StudentMap<u32> = StudentMap::with_value(3, 0);
/// credits[StudentId::new(1)] += 2;
///
/// assert_eq!(credits[StudentId::new(1)], 2);
/// assert_eq!(credits.get(StudentId::new(7)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentMap<T> {
    data: Vec<T>,
}

impl<T> StudentMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(student_count: usize, factory: impl Fn(StudentId) -> T) -> Self {
        assert!(student_count > 0, "Must have at least 1 student");
        assert!(student_count <= 255, "At most 255 students supported");

        let data = (0..student_count as u8)
            .map(|i| factory(StudentId(i)))
            .collect();

        Self { data }
    }

    /// Create a new map with all entries set to the same value.
    pub fn with_value(student_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(student_count, |_| value.clone())
    }

    /// Get the number of students.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed map; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a student's entry, or `None` for an unknown seat.
    #[must_use]
    pub fn get(&self, student: StudentId) -> Option<&T> {
        self.data.get(student.index())
    }

    /// Get a mutable entry, or `None` for an unknown seat.
    pub fn get_mut(&mut self, student: StudentId) -> Option<&mut T> {
        self.data.get_mut(student.index())
    }

    /// Check whether `student` names a seat in this map.
    #[must_use]
    pub fn contains(&self, student: StudentId) -> bool {
        student.index() < self.data.len()
    }

    /// Iterate over (StudentId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (StudentId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (StudentId(i as u8), v))
    }

    /// Iterate over (StudentId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (StudentId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (StudentId(i as u8), v))
    }

    /// Iterate over all student IDs.
    pub fn ids(&self) -> impl Iterator<Item = StudentId> {
        (0..self.data.len() as u8).map(StudentId)
    }
}

impl<T> Index<StudentId> for StudentMap<T> {
    type Output = T;

    fn index(&self, student: StudentId) -> &Self::Output {
        &self.data[student.index()]
    }
}

impl<T> IndexMut<StudentId> for StudentMap<T> {
    fn index_mut(&mut self, student: StudentId) -> &mut Self::Output {
        &mut self.data[student.index()]
    }
}
