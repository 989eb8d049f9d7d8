use shared_types::{AppError, AttendanceQuery, DashboardStats, Notice, SEMESTERS};

use super::SchoolApi;

impl SchoolApi {
    /// Fetch complaints, users, notices and attendance concurrently and
    /// aggregate them for the admin dashboard.
    ///
    /// A failed section is left empty and logged; the dashboard only fails
    /// when the session is rejected or every section failed. A semester
    /// whose notice fetch fails counts zero notices.
    #[tracing::instrument(skip_all)]
    pub async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, AppError> {
        let attendance_query = AttendanceQuery::default();
        let (complaints, users, notices, attendance) = tokio::join!(
            self.list_complaints(token),
            self.list_users(token),
            self.notices_per_semester(token),
            self.query_attendance(token, &attendance_query),
        );

        let errors: Vec<&AppError> = [
            complaints.as_ref().err(),
            users.as_ref().err(),
            attendance.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if let Some(err) = errors.iter().find(|e| e.is_unauthorized()) {
            return Err((*err).clone());
        }
        if errors.len() == 3 {
            return Err(errors[0].clone());
        }

        Ok(DashboardStats::compute(
            section("complaints", &complaints),
            section("users", &users),
            &notices,
            section("attendance", &attendance),
        ))
    }

    async fn notices_per_semester(&self, token: &str) -> Vec<(i64, Vec<Notice>)> {
        let mut out = Vec::new();
        for semester in SEMESTERS {
            match self.filter_notices(token, semester).await {
                Ok(list) => out.push((semester, list)),
                Err(e) => {
                    tracing::warn!(semester, error = %e, "Failed to fetch notices.");
                    out.push((semester, Vec::new()));
                }
            }
        }
        out
    }
}

fn section<'a, T>(name: &str, result: &'a Result<Vec<T>, AppError>) -> Option<&'a [T]> {
    match result {
        Ok(rows) => Some(rows.as_slice()),
        Err(e) => {
            tracing::warn!(section = name, error = %e, "Dashboard section unavailable");
            None
        }
    }
}
