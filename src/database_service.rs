//! `{data, error}` facade over every service.
//!
//! Callers never see an `AppError`: each operation folds its result into a
//! [`DatabaseResult`], with not-found and validation messages passed
//! through and everything else reported as a generic failure.

use crate::core::{AppError, DatabaseResult, Scope, Session};
use crate::modules::attendance::models::{Attendance, AttendancePatch, MarkAttendance};
use crate::modules::attendance::repositories::AttendanceRepository;
use crate::modules::attendance::services::{AttendanceMark, AttendanceService};
use crate::modules::branches::models::{Branch, BranchPatch, NewBranch};
use crate::modules::branches::repositories::BranchRepository;
use crate::modules::branches::services::BranchService;
use crate::modules::courses::models::{Course, CoursePatch, NewCourse};
use crate::modules::courses::repositories::CourseRepository;
use crate::modules::courses::services::CourseService;
use crate::modules::enrollments::models::{Enrollment, EnrollmentPatch, NewEnrollment};
use crate::modules::enrollments::repositories::EnrollmentRepository;
use crate::modules::enrollments::services::EnrollmentService;
use crate::modules::payments::models::{NewPayment, Payment, PaymentPatch};
use crate::modules::payments::repositories::PaymentRepository;
use crate::modules::payments::services::PaymentService;
use crate::modules::reports::models::{BranchRevenueAnalysis, RevenueReport, Statistics};
use crate::modules::reports::services::ReportService;
use crate::modules::revenue::models::{NewRevenue, Revenue, RevenuePatch, RevenueQuery};
use crate::modules::revenue::repositories::RevenueRepository;
use crate::modules::revenue::services::RevenueService;
use crate::modules::schedules::models::{NewSchedule, Schedule, SchedulePatch};
use crate::modules::schedules::repositories::ScheduleRepository;
use crate::modules::schedules::services::ScheduleService;
use crate::modules::users::models::{NewUser, User, UserPatch};
use crate::modules::users::repositories::{
    GuardianRepository, PreferenceRepository, UserRepository,
};
use crate::modules::users::services::{
    AuthService, Registration, RegistrationForm, RegistrationService, UserService,
};
use crate::store::SharedStore;

/// Every service wired to one shared store
#[derive(Debug, Clone)]
pub struct DatabaseService {
    store: SharedStore,
    pub users: UserService,
    pub auth: AuthService,
    pub registration: RegistrationService,
    pub branches: BranchService,
    pub courses: CourseService,
    pub enrollments: EnrollmentService,
    pub attendance: AttendanceService,
    pub payments: PaymentService,
    pub revenue: RevenueService,
    pub schedules: ScheduleService,
    pub reports: ReportService,
}

impl DatabaseService {
    pub fn new(store: SharedStore) -> Self {
        let user_repo = UserRepository::new(store.clone());
        let users = UserService::new(user_repo.clone());
        let branches = BranchService::new(BranchRepository::new(store.clone()));
        let courses = CourseService::new(CourseRepository::new(store.clone()), user_repo.clone());
        let enrollments = EnrollmentService::new(
            EnrollmentRepository::new(store.clone()),
            courses.clone(),
            user_repo,
        );
        let revenue = RevenueService::new(RevenueRepository::new(store.clone()));

        Self {
            auth: AuthService::new(users.clone()),
            registration: RegistrationService::new(
                users.clone(),
                GuardianRepository::new(store.clone()),
                PreferenceRepository::new(store.clone()),
            ),
            attendance: AttendanceService::new(
                AttendanceRepository::new(store.clone()),
                enrollments.clone(),
                courses.clone(),
            ),
            payments: PaymentService::new(PaymentRepository::new(store.clone()), enrollments.clone()),
            schedules: ScheduleService::new(ScheduleRepository::new(store.clone()), courses.clone()),
            reports: ReportService::new(
                users.clone(),
                branches.clone(),
                courses.clone(),
                enrollments.clone(),
                revenue.clone(),
            ),
            store,
            users,
            branches,
            courses,
            enrollments,
            revenue,
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    // Identity

    pub fn find_user_by_phone(&self, phone: &str) -> DatabaseResult<User> {
        let result = self
            .users
            .find_by_phone(phone)
            .and_then(|u| u.ok_or_else(|| AppError::not_found("User")));
        DatabaseResult::from_result(result, "Failed to find user")
    }

    pub fn login(&self, phone: &str) -> DatabaseResult<Session> {
        DatabaseResult::from_result(self.auth.login(phone), "Failed to log in")
    }

    pub fn register_student(&self, form: RegistrationForm) -> DatabaseResult<Registration> {
        DatabaseResult::from_result(
            self.registration.register_student(form),
            "Failed to register student",
        )
    }

    // Users

    pub fn get_users(&self, scope: &Scope) -> DatabaseResult<Vec<User>> {
        DatabaseResult::from_result(self.users.list_users(scope), "Failed to get users")
    }

    pub fn get_students(&self, scope: &Scope) -> DatabaseResult<Vec<User>> {
        DatabaseResult::from_result(self.users.list_students(scope), "Failed to get students")
    }

    pub fn get_teachers(&self, scope: &Scope) -> DatabaseResult<Vec<User>> {
        DatabaseResult::from_result(self.users.list_teachers(scope), "Failed to get teachers")
    }

    pub fn get_user_by_id(&self, id: &str) -> DatabaseResult<User> {
        DatabaseResult::from_result(self.users.get_user(id), "Failed to get user")
    }

    pub fn create_student(&self, input: NewUser) -> DatabaseResult<User> {
        DatabaseResult::from_result(self.users.create_student(input), "Failed to create student")
    }

    pub fn create_teacher(&self, input: NewUser) -> DatabaseResult<User> {
        DatabaseResult::from_result(self.users.create_teacher(input), "Failed to create teacher")
    }

    pub fn update_student(&self, id: &str, patch: UserPatch) -> DatabaseResult<User> {
        DatabaseResult::from_result(self.users.update_user(id, patch), "Failed to update student")
    }

    pub fn update_teacher(&self, id: &str, patch: UserPatch) -> DatabaseResult<User> {
        DatabaseResult::from_result(self.users.update_user(id, patch), "Failed to update teacher")
    }

    pub fn delete_student(&self, id: &str) -> DatabaseResult<()> {
        DatabaseResult::from_result(self.users.delete_user(id), "Failed to delete student")
    }

    pub fn delete_teacher(&self, id: &str) -> DatabaseResult<()> {
        DatabaseResult::from_result(self.users.delete_user(id), "Failed to delete teacher")
    }

    // Branches

    pub fn get_branches(&self, scope: &Scope) -> DatabaseResult<Vec<Branch>> {
        DatabaseResult::from_result(self.branches.list_branches(scope), "Failed to get branches")
    }

    pub fn get_branch_by_id(&self, id: &str) -> DatabaseResult<Branch> {
        DatabaseResult::from_result(self.branches.get_branch(id), "Failed to get branch")
    }

    pub fn create_branch(&self, input: NewBranch) -> DatabaseResult<Branch> {
        DatabaseResult::from_result(self.branches.create_branch(input), "Failed to create branch")
    }

    pub fn update_branch(&self, id: &str, patch: BranchPatch) -> DatabaseResult<Branch> {
        DatabaseResult::from_result(self.branches.update_branch(id, patch), "Failed to update branch")
    }

    pub fn delete_branch(&self, id: &str) -> DatabaseResult<()> {
        DatabaseResult::from_result(self.branches.delete_branch(id), "Failed to delete branch")
    }

    // Courses

    pub fn get_courses(&self, scope: &Scope) -> DatabaseResult<Vec<Course>> {
        DatabaseResult::from_result(self.courses.list_courses(scope), "Failed to get courses")
    }

    pub fn get_course_by_id(&self, id: &str) -> DatabaseResult<Course> {
        DatabaseResult::from_result(self.courses.get_course(id), "Failed to get course")
    }

    pub fn get_courses_by_teacher(&self, teacher_id: &str) -> DatabaseResult<Vec<Course>> {
        DatabaseResult::from_result(
            self.courses.list_by_teacher(teacher_id),
            "Failed to get teacher courses",
        )
    }

    pub fn create_course(&self, input: NewCourse) -> DatabaseResult<Course> {
        DatabaseResult::from_result(self.courses.create_course(input), "Failed to create course")
    }

    pub fn update_course(&self, id: &str, patch: CoursePatch) -> DatabaseResult<Course> {
        DatabaseResult::from_result(self.courses.update_course(id, patch), "Failed to update course")
    }

    pub fn assign_teacher(&self, course_id: &str, teacher_id: &str) -> DatabaseResult<Course> {
        DatabaseResult::from_result(
            self.courses.assign_teacher(course_id, teacher_id),
            "Failed to assign teacher",
        )
    }

    pub fn unassign_teacher(&self, course_id: &str) -> DatabaseResult<Course> {
        DatabaseResult::from_result(
            self.courses.unassign_teacher(course_id),
            "Failed to unassign teacher",
        )
    }

    pub fn delete_course(&self, id: &str) -> DatabaseResult<()> {
        DatabaseResult::from_result(self.courses.delete_course(id), "Failed to delete course")
    }

    // Enrollments

    pub fn get_enrollments(&self, scope: &Scope) -> DatabaseResult<Vec<Enrollment>> {
        DatabaseResult::from_result(
            self.enrollments.list_enrollments(scope),
            "Failed to get enrollments",
        )
    }

    pub fn get_enrollment_by_id(&self, id: &str) -> DatabaseResult<Enrollment> {
        DatabaseResult::from_result(
            self.enrollments.get_enrollment(id),
            "Failed to get enrollment",
        )
    }

    pub fn get_enrollments_by_student(&self, student_id: &str) -> DatabaseResult<Vec<Enrollment>> {
        DatabaseResult::from_result(
            self.enrollments.list_by_student(student_id),
            "Failed to get student enrollments",
        )
    }

    pub fn get_enrollments_by_course(&self, course_id: &str) -> DatabaseResult<Vec<Enrollment>> {
        DatabaseResult::from_result(
            self.enrollments.list_by_course(course_id),
            "Failed to get course enrollments",
        )
    }

    pub fn get_enrollment_course(&self, enrollment_id: &str) -> DatabaseResult<Course> {
        DatabaseResult::from_result(
            self.enrollments.course_of(enrollment_id),
            "Failed to get enrollment course",
        )
    }

    pub fn create_enrollment(&self, input: NewEnrollment) -> DatabaseResult<Enrollment> {
        DatabaseResult::from_result(self.enrollments.enroll(input), "Failed to create enrollment")
    }

    pub fn update_enrollment(&self, id: &str, patch: EnrollmentPatch) -> DatabaseResult<Enrollment> {
        DatabaseResult::from_result(
            self.enrollments.update_enrollment(id, patch),
            "Failed to update enrollment",
        )
    }

    pub fn update_enrollment_sessions(&self, id: &str, sessions_attended: u32) -> DatabaseResult<Enrollment> {
        DatabaseResult::from_result(
            self.enrollments.set_sessions_attended(id, sessions_attended),
            "Failed to update enrollment sessions",
        )
    }

    pub fn delete_enrollment(&self, id: &str) -> DatabaseResult<()> {
        DatabaseResult::from_result(
            self.enrollments.delete_enrollment(id),
            "Failed to delete enrollment",
        )
    }

    // Attendance

    pub fn get_attendance(
        &self,
        course_id: Option<&str>,
        student_id: Option<&str>,
        scope: &Scope,
    ) -> DatabaseResult<Vec<Attendance>> {
        DatabaseResult::from_result(
            self.attendance.list_attendance(course_id, student_id, scope),
            "Failed to get attendance",
        )
    }

    pub fn get_attendance_by_id(&self, id: &str) -> DatabaseResult<Attendance> {
        DatabaseResult::from_result(
            self.attendance.get_attendance(id),
            "Failed to get attendance",
        )
    }

    pub fn mark_attendance(&self, request: MarkAttendance) -> DatabaseResult<AttendanceMark> {
        DatabaseResult::from_result(
            self.attendance.mark_attendance(request),
            "Failed to mark attendance",
        )
    }

    pub fn update_attendance(&self, id: &str, patch: AttendancePatch) -> DatabaseResult<Attendance> {
        DatabaseResult::from_result(
            self.attendance.update_attendance(id, patch),
            "Failed to update attendance",
        )
    }

    pub fn delete_attendance(&self, id: &str) -> DatabaseResult<()> {
        DatabaseResult::from_result(
            self.attendance.delete_attendance(id),
            "Failed to delete attendance",
        )
    }

    // Payments

    pub fn get_payments(&self, scope: &Scope) -> DatabaseResult<Vec<Payment>> {
        DatabaseResult::from_result(self.payments.list_payments(scope), "Failed to get payments")
    }

    pub fn create_payment(&self, input: NewPayment) -> DatabaseResult<Payment> {
        DatabaseResult::from_result(self.payments.create_payment(input), "Failed to create payment")
    }

    pub fn update_payment(&self, id: &str, patch: PaymentPatch) -> DatabaseResult<Payment> {
        DatabaseResult::from_result(
            self.payments.update_payment(id, patch),
            "Failed to update payment",
        )
    }

    // Revenue

    pub fn get_revenue(&self, query: &RevenueQuery, scope: &Scope) -> DatabaseResult<Vec<Revenue>> {
        DatabaseResult::from_result(self.revenue.get_revenue(query, scope), "Failed to get revenue")
    }

    pub fn get_revenue_by_id(&self, id: &str) -> DatabaseResult<Revenue> {
        DatabaseResult::from_result(
            self.revenue.get_revenue_record(id),
            "Failed to get revenue",
        )
    }

    pub fn create_revenue(&self, input: NewRevenue) -> DatabaseResult<Revenue> {
        DatabaseResult::from_result(self.revenue.record_revenue(input), "Failed to create revenue")
    }

    pub fn update_revenue(&self, id: &str, patch: RevenuePatch) -> DatabaseResult<Revenue> {
        DatabaseResult::from_result(
            self.revenue.update_revenue(id, patch),
            "Failed to update revenue",
        )
    }

    pub fn delete_revenue(&self, id: &str) -> DatabaseResult<()> {
        DatabaseResult::from_result(self.revenue.delete_revenue(id), "Failed to delete revenue")
    }

    // Schedules

    pub fn get_schedules(&self, scope: &Scope, teacher_id: Option<&str>) -> DatabaseResult<Vec<Schedule>> {
        DatabaseResult::from_result(
            self.schedules.list_schedules(scope, teacher_id),
            "Failed to get schedules",
        )
    }

    pub fn get_schedule_by_id(&self, id: &str) -> DatabaseResult<Schedule> {
        DatabaseResult::from_result(self.schedules.get_schedule(id), "Failed to get schedule")
    }

    pub fn create_schedule(&self, input: NewSchedule) -> DatabaseResult<Schedule> {
        DatabaseResult::from_result(
            self.schedules.create_schedule(input),
            "Failed to create schedule",
        )
    }

    pub fn update_schedule(&self, id: &str, patch: SchedulePatch) -> DatabaseResult<Schedule> {
        DatabaseResult::from_result(
            self.schedules.update_schedule(id, patch),
            "Failed to update schedule",
        )
    }

    pub fn delete_schedule(&self, id: &str) -> DatabaseResult<()> {
        DatabaseResult::from_result(
            self.schedules.delete_schedule(id),
            "Failed to delete schedule",
        )
    }

    // Reports

    pub fn get_statistics(&self, scope: &Scope) -> DatabaseResult<Statistics> {
        DatabaseResult::from_result(self.reports.get_statistics(scope), "Failed to get statistics")
    }

    pub fn get_branch_revenue_analysis(&self, scope: &Scope) -> DatabaseResult<Vec<BranchRevenueAnalysis>> {
        DatabaseResult::from_result(
            self.reports.get_branch_revenue_analysis(scope),
            "Failed to get branch revenue analysis",
        )
    }

    pub fn get_revenue_report(&self, query: &RevenueQuery, scope: &Scope) -> DatabaseResult<RevenueReport> {
        DatabaseResult::from_result(
            self.reports.get_revenue_report(query, scope),
            "Failed to get revenue report",
        )
    }
}
