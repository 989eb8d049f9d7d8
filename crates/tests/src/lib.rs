#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod user_tests;

#[cfg(test)]
mod role_tests;

#[cfg(test)]
mod complaint_tests;

#[cfg(test)]
mod notice_tests;

#[cfg(test)]
mod attendance_tests;

#[cfg(test)]
mod assignment_tests;

#[cfg(test)]
mod qna_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod dashboard_tests;

#[cfg(test)]
mod error_mapping_tests;

#[cfg(test)]
mod proxy_tests;
