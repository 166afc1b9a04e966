//! Data-source abstraction for email records.
//!
//! The worklist logic is decoupled from any particular data origin: the
//! dashboard shell hands it whatever an [`EmailSource`] produced. The only
//! implementation shipped here is in-memory; fetching from the advising
//! backend is a separate concern and lives outside this crate.

use tracing::debug;

use super::model::EmailRecord;
use crate::Result;

/// Abstraction over where email records come from.
pub trait EmailSource {
    /// Returns the records in their upstream order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot produce records.
    fn list(&self) -> Result<Vec<EmailRecord>>;
}

/// An [`EmailSource`] backed by an owned, in-memory list of records.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<EmailRecord>,
}

impl MemorySource {
    /// Create a source from an owned list of records.
    #[must_use]
    pub const fn new(records: Vec<EmailRecord>) -> Self {
        Self { records }
    }

    /// Load records from a JSON array, the interchange shape of the
    /// advising backend's email listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or does not match the
    /// record shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<EmailRecord> = serde_json::from_str(json)?;
        debug!(count = records.len(), "loaded email records from JSON");
        Ok(Self::new(records))
    }

    /// The bundled demo data set: a handful of review-queue and auto-sent
    /// emails covering the confidence and staleness spread the dashboard
    /// is designed around.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample_records())
    }
}

impl EmailSource for MemorySource {
    fn list(&self) -> Result<Vec<EmailRecord>> {
        Ok(self.records.clone())
    }
}

fn sample_records() -> Vec<EmailRecord> {
    use super::model::{EmailId, QueueStatus};

    let record = |id: i64,
                  student: &str,
                  uni: &str,
                  subject: &str,
                  confidence: f64,
                  status: QueueStatus,
                  received_at: &str,
                  body: &str| {
        let mut email = EmailRecord::new(EmailId::new(id), subject, confidence, status, received_at);
        email.student_name = Some(student.to_string());
        email.uni = Some(uni.to_string());
        email.body = body.to_string();
        email
    };

    let mut records = vec![
        record(
            1,
            "Jordan",
            "j12345",
            "Withdraw from course",
            0.87,
            QueueStatus::Review,
            "2024-11-02T10:15:00",
            "Hi, I would like to withdraw from CS 101. I realized this course is not \
             suitable for my schedule. Please advise on the withdrawal process and any \
             academic implications. Thank you.",
        ),
        record(
            2,
            "Taylor",
            "t67890",
            "Financial aid question",
            0.92,
            QueueStatus::Review,
            "2024-11-02T14:40:00Z",
            "I was wondering about my financial aid eligibility for the spring semester. \
             I noticed some changes in my account. Could you clarify what documents I \
             need to submit? Thanks.",
        ),
        record(
            3,
            "Morgan",
            "m54321",
            "Grade dispute",
            0.76,
            QueueStatus::Review,
            "2024-11-01T09:05:00",
            "I believe there was an error in my grade calculation for the midterm exam. \
             I scored 88% but received a lower grade. Can we discuss this discrepancy?",
        ),
        record(
            4,
            "Casey",
            "c09876",
            "Degree audit request",
            0.81,
            QueueStatus::Review,
            "2024-11-02T04:15:00-05:00",
            "I need a degree audit to ensure I'm on track for graduation. Can you provide \
             an updated report of my completed and remaining requirements? I'd like to \
             review before registration.",
        ),
        record(
            5,
            "Emre Baser",
            "eb3514",
            "Registration Deadline Question",
            0.64,
            QueueStatus::Review,
            "2024-11-02T16:02:00",
            "Hi Academic Advising Team,\n\nWhen is the deadline to register for classes? \
             I'm feeling overwhelmed.\n\nBest,\nEmre Baser",
        ),
        record(
            6,
            "Alex",
            "a54321",
            "Transcript request",
            0.98,
            QueueStatus::Auto,
            "2024-11-02T08:30:00",
            "Thank you for your transcript request. Official transcripts will be available \
             within 3-5 business days. You can retrieve them from the registrar's office \
             or request online delivery. No charge for the first two copies.",
        ),
        record(
            7,
            "Riley",
            "r09876",
            "Class registration",
            0.99,
            QueueStatus::Auto,
            "2024-11-02T11:45:00Z",
            "Your course registration for Spring 2025 has been confirmed. You are \
             registered for 4 courses totaling 12 credit hours. Your tuition invoice will \
             be available on your student account on January 15th.",
        ),
        record(
            8,
            "Jamie",
            "j11111",
            "Password reset",
            0.95,
            QueueStatus::Auto,
            "2024-11-02T12:20:00",
            "We received your request to reset your university account password. Click \
             the link below to create a new password. This link will expire in 24 hours. \
             If you did not request this, please contact IT immediately.",
        ),
        record(
            9,
            "Sam",
            "s22222",
            "Course add/drop deadline",
            0.96,
            QueueStatus::Auto,
            "2024-10-31T17:00:00",
            "Reminder: The deadline to add or drop courses for the current semester is \
             this Friday at 5 PM. Changes made after this time require advisor approval \
             and a late fee may apply.",
        ),
        record(
            10,
            "Jordan",
            "j33333",
            "Graduation application checklist",
            0.93,
            QueueStatus::Auto,
            "2024-11-02T07:10:00",
            "Congratulations! Your graduation application has been received. Before your \
             graduation ceremony, please ensure all required documents are submitted: \
             final transcripts, diploma name confirmation, and ceremony fee payment.",
        ),
    ];

    records[0].references = vec![
        "Policy: Course Withdrawal".into(),
        "Form: Drop/Add Request".into(),
    ];
    records[1].references = vec![
        "FAFSA Requirements".into(),
        "Aid Disbursement Schedule".into(),
    ];
    records[2].references = vec!["Grade Appeal Process".into(), "Exam Rubric".into()];
    records[3].references = vec![
        "Degree Requirements".into(),
        "Graduation Checklist".into(),
    ];
    records[5].references = vec![
        "Transcript Policy".into(),
        "Registrar Contact Info".into(),
    ];
    records[6].references = vec!["Course Schedule".into(), "Tuition Invoice Link".into()];
    records[7].references = vec!["Password Reset Link".into(), "IT Support".into()];
    records[8].references = vec!["Academic Calendar".into(), "Add/Drop Policy".into()];
    records[9].references = vec![
        "Graduation Requirements".into(),
        "Diploma Application".into(),
    ];

    records
}
