use serde::{Deserialize, Serialize};

use crate::{
    attendance_percentage, AttendanceSheet, Complaint, ComplaintSummary, Notice, UserRole,
    UserSummary, SEMESTERS,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SemesterCount {
    pub semester: i64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SemesterRate {
    pub semester: i64,
    pub percent: f64,
}

/// Teacher and student head counts from the user directory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PeopleCount {
    pub teachers: usize,
    pub students: usize,
}

impl PeopleCount {
    pub fn from_users(users: &[UserSummary]) -> Self {
        Self {
            teachers: users.iter().filter(|u| u.role() == UserRole::Teacher).count(),
            students: users.iter().filter(|u| u.role() == UserRole::Student).count(),
        }
    }
}

/// Aggregates shown on the admin dashboard.
///
/// Each section is `None` when its upstream fetch failed, so the rest of
/// the dashboard still renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardStats {
    pub complaints: Option<ComplaintSummary>,
    pub people: Option<PeopleCount>,
    pub notices_by_semester: Vec<SemesterCount>,
    pub attendance_by_semester: Option<Vec<SemesterRate>>,
}

impl DashboardStats {
    /// `notices` holds one fetched list per semester; semesters whose fetch
    /// failed are passed as empty lists and count zero.
    pub fn compute(
        complaints: Option<&[Complaint]>,
        users: Option<&[UserSummary]>,
        notices: &[(i64, Vec<Notice>)],
        attendance: Option<&[AttendanceSheet]>,
    ) -> Self {
        let notices_by_semester = SEMESTERS
            .map(|semester| SemesterCount {
                semester,
                count: notices
                    .iter()
                    .filter(|(sem, _)| *sem == semester)
                    .map(|(_, list)| list.len())
                    .sum(),
            })
            .collect();

        let attendance_by_semester = attendance.map(|sheets| {
            SEMESTERS
                .map(|semester| SemesterRate {
                    semester,
                    percent: attendance_percentage(sheets, semester),
                })
                .collect()
        });

        Self {
            complaints: complaints.map(ComplaintSummary::from_complaints),
            people: users.map(PeopleCount::from_users),
            notices_by_semester,
            attendance_by_semester,
        }
    }

    /// Names of the sections that could not be loaded.
    pub fn missing_sections(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.complaints.is_none() {
            missing.push("complaints");
        }
        if self.people.is_none() {
            missing.push("users");
        }
        if self.attendance_by_semester.is_none() {
            missing.push("attendance");
        }
        missing
    }

    pub fn total_notices(&self) -> usize {
        self.notices_by_semester.iter().map(|n| n.count).sum()
    }

    /// Largest per-semester notice count, for scaling bars.
    pub fn max_notices(&self) -> usize {
        self.notices_by_semester
            .iter()
            .map(|n| n.count)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn compute_aggregates_every_source() {
        let complaints: Vec<Complaint> = serde_json::from_value(json!([
            {"complainID": 1, "title": "a", "solved": true},
            {"complainID": 2, "title": "b", "solved": false}
        ]))
        .unwrap();
        let users: Vec<UserSummary> = serde_json::from_value(json!([
            {"id": 1, "role_id": 2},
            {"id": 2, "role_id": 3},
            {"id": 3, "role_id": 3}
        ]))
        .unwrap();
        let notice: Notice =
            serde_json::from_value(json!({"noticeName": "n", "faculty_batch_Sem": 2})).unwrap();
        let notices = vec![(1, vec![]), (2, vec![notice.clone(), notice])];
        let attendance: Vec<AttendanceSheet> = serde_json::from_value(json!([
            {"subject": "X", "faculty_batch_sem": 2, "date": "d",
             "records": [{"id": 1, "userID": 2, "status": "True"},
                         {"id": 2, "userID": 3, "status": "False"}]}
        ]))
        .unwrap();

        let stats = DashboardStats::compute(
            Some(complaints.as_slice()),
            Some(users.as_slice()),
            &notices,
            Some(attendance.as_slice()),
        );
        let summary = stats.complaints.unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.unsolved, 1);
        assert_eq!(stats.people, Some(PeopleCount { teachers: 1, students: 2 }));
        assert_eq!(stats.notices_by_semester.len(), 8);
        assert_eq!(stats.notices_by_semester[1], SemesterCount { semester: 2, count: 2 });
        assert_eq!(stats.total_notices(), 2);
        assert_eq!(stats.max_notices(), 2);
        let attendance = stats.attendance_by_semester.as_ref().unwrap();
        assert_eq!(attendance[1].percent, 50.0);
        assert_eq!(attendance[0].percent, 0.0);
        assert!(stats.missing_sections().is_empty());
    }

    #[test]
    fn failed_sections_are_left_empty() {
        let notices = vec![(3, Vec::new())];
        let stats = DashboardStats::compute(None, Some(&[][..]), &notices, None);
        assert_eq!(stats.complaints, None);
        assert_eq!(stats.people, Some(PeopleCount::default()));
        assert_eq!(stats.attendance_by_semester, None);
        assert_eq!(stats.total_notices(), 0);
        assert_eq!(stats.missing_sections(), vec!["complaints", "attendance"]);
    }
}
