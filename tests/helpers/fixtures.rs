// Two-branch school used across the test targets.
//
// B1 "Siam" keeps 15% commission, B2 "Ladprao" keeps 10%. Each branch has
// one teacher and one course; B1 has two students, B2 has one.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tutorhub::modules::branches::models::NewBranch;
use tutorhub::modules::courses::models::NewCourse;
use tutorhub::modules::enrollments::models::{NewEnrollment, PaymentStatus};
use tutorhub::modules::revenue::models::NewRevenue;
use tutorhub::modules::users::models::NewUser;
use tutorhub::{DatabaseService, SharedStore};

pub struct School {
    pub db: DatabaseService,
    pub b1: String,
    pub b2: String,
    pub t1: String,
    pub t2: String,
    pub s1: String,
    pub s2: String,
    pub s3: String,
    pub c1: String,
    pub c2: String,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn empty_db() -> DatabaseService {
    DatabaseService::new(SharedStore::default())
}

impl School {
    pub fn new() -> Self {
        let db = empty_db();

        let b1 = db
            .branches
            .create_branch(NewBranch::new("Siam", dec!(0.15)))
            .unwrap()
            .id;
        let b2 = db
            .branches
            .create_branch(NewBranch::new("Ladprao", dec!(0.10)))
            .unwrap()
            .id;

        let t1 = db
            .users
            .create_teacher(NewUser::teacher("0900000001", "Somsak", "Kru", Some(b1.clone())))
            .unwrap()
            .id;
        let t2 = db
            .users
            .create_teacher(NewUser::teacher("0900000002", "Wanida", "Kru", Some(b2.clone())))
            .unwrap()
            .id;

        let s1 = db
            .users
            .create_student(NewUser::student("0810000001", "Anan", "Chai", Some(b1.clone())))
            .unwrap()
            .id;
        let s2 = db
            .users
            .create_student(NewUser::student("0810000002", "Busaba", "Dee", Some(b1.clone())))
            .unwrap()
            .id;
        let s3 = db
            .users
            .create_student(NewUser::student("0810000003", "Chai", "Yo", Some(b2.clone())))
            .unwrap()
            .id;

        let c1 = db
            .courses
            .create_course(NewCourse {
                teacher_id: Some(t1.clone()),
                ..NewCourse::new("Math M.3", b1.clone(), 30, dec!(8500))
            })
            .unwrap()
            .id;
        let c2 = db
            .courses
            .create_course(NewCourse {
                teacher_id: Some(t2.clone()),
                ..NewCourse::new("English M.1", b2.clone(), 20, dec!(6000))
            })
            .unwrap()
            .id;

        Self {
            db,
            b1,
            b2,
            t1,
            t2,
            s1,
            s2,
            s3,
            c1,
            c2,
        }
    }

    /// Enroll S1 and S2 in C1 and S3 in C2; S1 has paid
    pub fn with_enrollments(self) -> Self {
        for (student, course, paid) in [
            (&self.s1, &self.c1, true),
            (&self.s2, &self.c1, false),
            (&self.s3, &self.c2, false),
        ] {
            let mut input = NewEnrollment::new(student.clone(), course.clone());
            if paid {
                input.payment_status = PaymentStatus::Paid;
            }
            self.db.enrollments.enroll(input).unwrap();
        }
        self
    }

    /// Record one revenue row; commission is derived from the branch rate
    pub fn revenue(&self, branch: &str, course: &str, student: &str, amount: Decimal, on: NaiveDate) {
        self.db
            .revenue
            .record_revenue(NewRevenue::new(branch, course, student, amount, on))
            .unwrap();
    }

    /// B1: 10,000 + 5,000 in January, B2: 8,000 in February
    pub fn with_revenue(self) -> Self {
        self.revenue(&self.b1, &self.c1, &self.s1, dec!(10000), date(2024, 1, 10));
        self.revenue(&self.b1, &self.c1, &self.s2, dec!(5000), date(2024, 1, 25));
        self.revenue(&self.b2, &self.c2, &self.s3, dec!(8000), date(2024, 2, 3));
        self
    }
}
